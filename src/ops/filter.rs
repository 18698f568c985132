use chrono::{Local, NaiveDate};
use serde::Serialize;

use crate::model::config::FilterConfig;
use crate::model::task::Task;

/// Today's local date as `YYYY-MM-DD`
pub fn today_str() -> String {
    date_str(Local::now().date_naive())
}

pub fn date_str(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Decide whether `task` is shown under `config` on the day `today`
/// (`YYYY-MM-DD`).
///
/// A task is visible only if every enabled rule lets it through: closed
/// tasks need `show_closed`, tasks with an `h:` value need `show_hidden`,
/// tasks due after today need `show_future`, and a non-empty filter string
/// must occur in the raw line (case-sensitive).
pub fn is_visible(task: &Task, config: &FilterConfig, today: &str) -> bool {
    if !config.show_closed && !task.is_active() {
        return false;
    }
    if !config.show_hidden && task.hidden().is_some() {
        return false;
    }
    // Fixed-width dates order correctly as strings
    if !config.show_future
        && let Some(due) = task.due_date()
        && due > today
    {
        return false;
    }
    match config.active_filter() {
        Some(needle) => task.text().contains(needle),
        None => true,
    }
}

/// The visible tasks of `tasks`, in their original order
pub fn visible_tasks<'a>(
    tasks: &'a [Task],
    config: &'a FilterConfig,
    today: &'a str,
) -> impl Iterator<Item = &'a Task> {
    tasks.iter().filter(move |t| is_visible(t, config, today))
}

/// How a task's due date relates to today
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DueStatus {
    Overdue,
    DueToday,
    Upcoming,
}

/// Classify the task's `due:` value against `today`; `None` without one
pub fn due_status(task: &Task, today: &str) -> Option<DueStatus> {
    let due = task.due_date()?;
    Some(match due.cmp(today) {
        std::cmp::Ordering::Less => DueStatus::Overdue,
        std::cmp::Ordering::Equal => DueStatus::DueToday,
        std::cmp::Ordering::Greater => DueStatus::Upcoming,
    })
}
