pub mod filter;
pub mod index;
pub mod store;
pub mod task_ops;

pub use filter::{DueStatus, due_status, is_visible, today_str, visible_tasks};
pub use index::{AttributeIndex, AttributeSets, rebuild};
pub use store::{StoreError, TaskStore};
pub use task_ops::{close_text, reopen_text};
