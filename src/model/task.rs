use std::fmt;
use std::str::FromStr;

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Error for strings that do not name a task
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum IdError {
    #[error("invalid task id: {0:?}")]
    Invalid(String),
}

/// Opaque task identity, generated once and never reused
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(Uuid);

impl TaskId {
    /// A fresh random id
    pub fn generate() -> Self {
        TaskId(Uuid::new_v4())
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

impl FromStr for TaskId {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s.trim())
            .map(TaskId)
            .map_err(|_| IdError::Invalid(s.to_string()))
    }
}

/// One todo.txt line and everything derived from it.
///
/// `text` is the source of truth. The other fields are recomputed from it by
/// the line parser and cannot be changed on their own; to edit a task, reparse
/// it with new text.
#[derive(Debug, Clone, Serialize)]
pub struct Task {
    pub(crate) id: TaskId,
    pub(crate) text: String,
    pub(crate) is_active: bool,
    /// `(A)` through `(Z)`, parentheses included
    pub(crate) priority: Option<String>,
    pub(crate) completed_date: Option<String>,
    pub(crate) created_date: Option<String>,
    /// `due:` extension value
    pub(crate) due_date: Option<String>,
    /// `rec:` extension value
    pub(crate) recurrence: Option<String>,
    /// `h:` extension value
    pub(crate) hidden: Option<String>,
    /// `+project` tokens, prefix kept, in first-occurrence order
    pub(crate) projects: IndexSet<String>,
    /// `@context` tokens, prefix kept, in first-occurrence order
    pub(crate) contexts: IndexSet<String>,
}

impl Task {
    pub fn id(&self) -> TaskId {
        self.id
    }

    /// The raw line, exactly as it was given to the parser
    pub fn text(&self) -> &str {
        &self.text
    }

    /// False iff the line starts with `"x "`
    pub fn is_active(&self) -> bool {
        self.is_active
    }

    pub fn priority(&self) -> Option<&str> {
        self.priority.as_deref()
    }

    pub fn completed_date(&self) -> Option<&str> {
        self.completed_date.as_deref()
    }

    pub fn created_date(&self) -> Option<&str> {
        self.created_date.as_deref()
    }

    pub fn due_date(&self) -> Option<&str> {
        self.due_date.as_deref()
    }

    pub fn recurrence(&self) -> Option<&str> {
        self.recurrence.as_deref()
    }

    pub fn hidden(&self) -> Option<&str> {
        self.hidden.as_deref()
    }

    pub fn projects(&self) -> &IndexSet<String> {
        &self.projects
    }

    pub fn contexts(&self) -> &IndexSet<String> {
        &self.contexts
    }

    /// Compare every derived field, ignoring identity
    pub fn same_fields(&self, other: &Task) -> bool {
        self.text == other.text
            && self.is_active == other.is_active
            && self.priority == other.priority
            && self.completed_date == other.completed_date
            && self.created_date == other.created_date
            && self.due_date == other.due_date
            && self.recurrence == other.recurrence
            && self.hidden == other.hidden
            && self.projects == other.projects
            && self.contexts == other.contexts
    }
}

impl PartialEq for Task {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && self.same_fields(other)
    }
}

impl Eq for Task {}

impl fmt::Display for Task {
    /// Emits the raw todo.txt line
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
