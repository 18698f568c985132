pub mod line_parser;
pub mod span;
pub mod tag_scanner;
pub mod task_serializer;

pub use line_parser::{parse_line, parse_many, reparse};
pub use span::TokenSpan;
pub use tag_scanner::{Tag, TrackedTag, extract_contexts, extract_projects, scan_tags};
pub use task_serializer::serialize_tasks;
