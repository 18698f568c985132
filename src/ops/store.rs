use log::{debug, warn};

use crate::model::task::{IdError, Task, TaskId};
use crate::ops::index::AttributeIndex;
use crate::ops::task_ops::{close_text, reopen_text};
use crate::parse::{parse_line, reparse, serialize_tasks};

/// Error type for store operations
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("task not found: {0}")]
    NotFound(TaskId),
    #[error("task ID already exists: {0}")]
    DuplicateIdentity(TaskId),
    #[error(transparent)]
    InvalidArgument(#[from] IdError),
}

/// Ordered, id-unique collection of tasks with its attribute index.
///
/// Every mutation updates the index in the same call, so `index()` always
/// equals a full rebuild over `tasks()`. Failed calls change nothing.
#[derive(Debug, Clone, Default)]
pub struct TaskStore {
    tasks: Vec<Task>,
    index: AttributeIndex,
}

impl TaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the contents with one task per line, blank lines included
    pub fn load_all<I, S>(&mut self, lines: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.clear();
        for line in lines {
            let task = parse_line(line.as_ref());
            self.index.insert(&task);
            self.tasks.push(task);
        }
        debug!("loaded {} tasks", self.tasks.len());
    }

    /// Replace the contents with the lines of a whole document
    pub fn load_str(&mut self, source: &str) {
        self.load_all(source.split('\n'));
    }

    /// Append a task. Its id must not already be in the store.
    pub fn add(&mut self, task: Task) -> Result<(), StoreError> {
        if self.position(task.id()).is_some() {
            warn!("rejected duplicate task id {}", task.id());
            return Err(StoreError::DuplicateIdentity(task.id()));
        }
        self.index.insert(&task);
        self.tasks.push(task);
        Ok(())
    }

    /// Parse `line` as a new task and append it
    pub fn add_line(&mut self, line: &str) -> &Task {
        let task = parse_line(line);
        self.index.insert(&task);
        self.tasks.push(task);
        &self.tasks[self.tasks.len() - 1]
    }

    /// Remove the task with `id`. Absent ids are ignored.
    pub fn remove(&mut self, id: TaskId) -> Option<Task> {
        let pos = self.position(id)?;
        let task = self.tasks.remove(pos);
        self.index.remove(&task);
        debug!("removed task {}", id);
        Some(task)
    }

    /// Replace the text of task `id` and re-derive its fields in place
    pub fn update(&mut self, id: TaskId, text: &str) -> Result<&Task, StoreError> {
        let pos = self.position(id).ok_or(StoreError::NotFound(id))?;
        let task = reparse(id, text);
        self.index.replace(&self.tasks[pos], &task);
        self.tasks[pos] = task;
        debug!("updated task {}", id);
        Ok(&self.tasks[pos])
    }

    /// Mark task `id` completed on `today`
    pub fn close(&mut self, id: TaskId, today: &str) -> Result<&Task, StoreError> {
        let text = close_text(self.text_of(id)?, today);
        self.update(id, &text)
    }

    /// Reopen a completed task `id`
    pub fn reopen(&mut self, id: TaskId) -> Result<&Task, StoreError> {
        let text = reopen_text(self.text_of(id)?);
        self.update(id, &text)
    }

    pub fn clear(&mut self) {
        self.tasks.clear();
        self.index.clear();
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id() == id)
    }

    /// All tasks in store order
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Task> {
        self.tasks.iter()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn index(&self) -> &AttributeIndex {
        &self.index
    }

    /// The document: task texts joined with `\n`
    pub fn to_text(&self) -> String {
        serialize_tasks(&self.tasks)
    }

    fn position(&self, id: TaskId) -> Option<usize> {
        self.tasks.iter().position(|t| t.id() == id)
    }

    fn text_of(&self, id: TaskId) -> Result<&str, StoreError> {
        self.get(id).map(Task::text).ok_or(StoreError::NotFound(id))
    }
}

impl<'a> IntoIterator for &'a TaskStore {
    type Item = &'a Task;
    type IntoIter = std::slice::Iter<'a, Task>;

    fn into_iter(self) -> Self::IntoIter {
        self.tasks.iter()
    }
}
