//! Parsing, indexing and filtering kernel for the todo.txt line format.
//!
//! A line is parsed into a [`Task`](model::Task) whose fields are all derived
//! from its raw text. A [`TaskStore`](ops::TaskStore) holds tasks in file order
//! and keeps an [`AttributeIndex`](ops::AttributeIndex) of the priorities,
//! projects and contexts in use. [`is_visible`](ops::is_visible) decides which
//! tasks a display shows.

pub mod model;
pub mod ops;
pub mod parse;
