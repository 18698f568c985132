use indexmap::{IndexMap, IndexSet};
use serde::Serialize;

use crate::model::task::Task;

/// Distinct priorities, projects and contexts in use across a set of tasks.
///
/// Equality is set equality; iteration order is first occurrence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AttributeSets {
    pub priorities: IndexSet<String>,
    pub projects: IndexSet<String>,
    pub contexts: IndexSet<String>,
}

impl AttributeSets {
    pub fn is_empty(&self) -> bool {
        self.priorities.is_empty() && self.projects.is_empty() && self.contexts.is_empty()
    }
}

/// Fold every task's priority, projects and contexts into three sets
pub fn rebuild<'a, I>(tasks: I) -> AttributeSets
where
    I: IntoIterator<Item = &'a Task>,
{
    let mut sets = AttributeSets::default();
    for task in tasks {
        if let Some(p) = task.priority() {
            sets.priorities.insert(p.to_string());
        }
        sets.projects.extend(task.projects().iter().cloned());
        sets.contexts.extend(task.contexts().iter().cloned());
    }
    sets
}

/// Incrementally maintained attribute index.
///
/// Each value carries the number of tasks using it, so removing one task only
/// drops a value once no other task references it. At every point the key
/// sets equal `rebuild` over the tasks that were inserted and not removed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttributeIndex {
    priorities: IndexMap<String, usize>,
    projects: IndexMap<String, usize>,
    contexts: IndexMap<String, usize>,
}

impl AttributeIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_tasks<'a, I>(tasks: I) -> Self
    where
        I: IntoIterator<Item = &'a Task>,
    {
        let mut index = Self::new();
        for task in tasks {
            index.insert(task);
        }
        index
    }

    pub fn insert(&mut self, task: &Task) {
        if let Some(p) = task.priority() {
            bump(&mut self.priorities, p);
        }
        for project in task.projects() {
            bump(&mut self.projects, project);
        }
        for context in task.contexts() {
            bump(&mut self.contexts, context);
        }
    }

    pub fn remove(&mut self, task: &Task) {
        if let Some(p) = task.priority() {
            drop_one(&mut self.priorities, p);
        }
        for project in task.projects() {
            drop_one(&mut self.projects, project);
        }
        for context in task.contexts() {
            drop_one(&mut self.contexts, context);
        }
    }

    /// Swap `old`'s contribution for `new`'s
    pub fn replace(&mut self, old: &Task, new: &Task) {
        self.remove(old);
        self.insert(new);
    }

    pub fn clear(&mut self) {
        self.priorities.clear();
        self.projects.clear();
        self.contexts.clear();
    }

    pub fn priorities(&self) -> impl Iterator<Item = &str> {
        self.priorities.keys().map(String::as_str)
    }

    pub fn projects(&self) -> impl Iterator<Item = &str> {
        self.projects.keys().map(String::as_str)
    }

    pub fn contexts(&self) -> impl Iterator<Item = &str> {
        self.contexts.keys().map(String::as_str)
    }

    pub fn contains_priority(&self, priority: &str) -> bool {
        self.priorities.contains_key(priority)
    }

    pub fn contains_project(&self, project: &str) -> bool {
        self.projects.contains_key(project)
    }

    pub fn contains_context(&self, context: &str) -> bool {
        self.contexts.contains_key(context)
    }

    pub fn sorted_priorities(&self) -> Vec<&str> {
        sorted(self.priorities())
    }

    pub fn sorted_projects(&self) -> Vec<&str> {
        sorted(self.projects())
    }

    pub fn sorted_contexts(&self) -> Vec<&str> {
        sorted(self.contexts())
    }

    /// Plain-data copy of the three sets
    pub fn sets(&self) -> AttributeSets {
        AttributeSets {
            priorities: self.priorities.keys().cloned().collect(),
            projects: self.projects.keys().cloned().collect(),
            contexts: self.contexts.keys().cloned().collect(),
        }
    }
}

fn bump(counts: &mut IndexMap<String, usize>, value: &str) {
    match counts.get_mut(value) {
        Some(n) => *n += 1,
        None => {
            counts.insert(value.to_string(), 1);
        }
    }
}

fn drop_one(counts: &mut IndexMap<String, usize>, value: &str) {
    if let Some(n) = counts.get_mut(value) {
        *n -= 1;
        if *n == 0 {
            counts.shift_remove(value);
        }
    }
}

fn sorted<'a>(values: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
    let mut v: Vec<&str> = values.collect();
    v.sort_unstable();
    v
}
