use crate::model::task::{Task, TaskId};
use crate::parse::span::tokens;
use crate::parse::tag_scanner::{extensions, extract_contexts, extract_projects};

/// Marker that opens a completed line
pub const CLOSED_MARKER: &str = "x ";

/// Parse one todo.txt line into a task with a fresh id.
///
/// Never fails: a line with no recognizable structure becomes an active task
/// with every optional field absent.
pub fn parse_line(line: &str) -> Task {
    reparse(TaskId::generate(), line)
}

/// Parse `text` as the new content of the task `id`
pub fn reparse(id: TaskId, text: &str) -> Task {
    let is_active = !is_closed_line(text);
    let priority = parse_priority(text);

    let mut dates = dates_in(text);
    let (completed_date, created_date) = if is_active {
        (None, dates.next())
    } else {
        (dates.next(), dates.next())
    };

    let mut due_date = None;
    let mut recurrence = None;
    let mut hidden = None;
    // Later occurrences of a key overwrite earlier ones
    for (key, value) in extensions(text) {
        match key.as_str() {
            "due" => due_date = Some(value),
            "rec" => recurrence = Some(value),
            "h" => hidden = Some(value),
            _ => {}
        }
    }

    Task {
        id,
        text: text.to_string(),
        is_active,
        priority,
        completed_date: completed_date.map(str::to_string),
        created_date: created_date.map(str::to_string),
        due_date,
        recurrence,
        hidden,
        projects: extract_projects(text),
        contexts: extract_contexts(text),
    }
}

/// Parse a batch of lines, preserving order
pub fn parse_many<I, S>(lines: I) -> Vec<Task>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    lines.into_iter().map(|l| parse_line(l.as_ref())).collect()
}

pub fn is_closed_line(line: &str) -> bool {
    line.starts_with(CLOSED_MARKER)
}

/// `(X) ` at the very start of the line, returned as `(X)`.
///
/// Anchored at position 0 of the raw line, so a completed line (`x ...`)
/// does not carry a priority.
fn parse_priority(line: &str) -> Option<String> {
    let b = line.as_bytes();
    if b.len() > 3
        && b[0] == b'('
        && b[1].is_ascii_uppercase()
        && b[2] == b')'
        && line[3..].starts_with(char::is_whitespace)
    {
        Some(line[..3].to_string())
    } else {
        None
    }
}

/// Standalone `YYYY-MM-DD` tokens, left to right
fn dates_in(line: &str) -> impl Iterator<Item = &str> {
    tokens(line)
        .map(|(_, tok)| tok)
        .filter(|tok| is_date_token(tok))
}

/// Shape check only: four digits, dash, two digits, dash, two digits
pub fn is_date_token(token: &str) -> bool {
    let b = token.as_bytes();
    b.len() == 10
        && b.iter().enumerate().all(|(i, c)| match i {
            4 | 7 => *c == b'-',
            _ => c.is_ascii_digit(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_closed_task() {
        let task = parse_line("x 2021-02-02 2021-01-01 +Work @home due:2021-03-01 call bob");
        assert!(!task.is_active());
        assert_eq!(task.completed_date(), Some("2021-02-02"));
        assert_eq!(task.created_date(), Some("2021-01-01"));
        assert_eq!(task.priority(), None);
        assert_eq!(task.projects().iter().collect::<Vec<_>>(), vec!["+Work"]);
        assert_eq!(task.contexts().iter().collect::<Vec<_>>(), vec!["@home"]);
        assert_eq!(task.due_date(), Some("2021-03-01"));
    }

    #[test]
    fn test_parse_prioritized_task() {
        let task = parse_line("(A) 2021-01-01 +Work @home buy milk");
        assert!(task.is_active());
        assert_eq!(task.priority(), Some("(A)"));
        assert_eq!(task.created_date(), Some("2021-01-01"));
        assert_eq!(task.completed_date(), None);
        assert_eq!(task.projects().iter().collect::<Vec<_>>(), vec!["+Work"]);
        assert_eq!(task.contexts().iter().collect::<Vec<_>>(), vec!["@home"]);
    }

    #[test]
    fn test_parse_plain_text() {
        let task = parse_line("just plain text");
        assert!(task.is_active());
        assert_eq!(task.priority(), None);
        assert_eq!(task.completed_date(), None);
        assert_eq!(task.created_date(), None);
        assert_eq!(task.due_date(), None);
        assert_eq!(task.recurrence(), None);
        assert_eq!(task.hidden(), None);
        assert!(task.projects().is_empty());
        assert!(task.contexts().is_empty());
    }

    #[test]
    fn test_parse_empty_line() {
        let task = parse_line("");
        assert_eq!(task.text(), "");
        assert!(task.is_active());
        assert_eq!(task.created_date(), None);
    }

    #[test]
    fn test_closed_with_single_date() {
        let task = parse_line("x 2021-02-02 done thing");
        assert_eq!(task.completed_date(), Some("2021-02-02"));
        assert_eq!(task.created_date(), None);
    }

    #[test]
    fn test_closed_marker_needs_space() {
        assert!(parse_line("xylophone lessons").is_active());
        assert!(parse_line("x").is_active());
        assert!(parse_line("X 2021-01-01 caps").is_active());
    }

    #[test]
    fn test_closed_line_priority_is_not_detected() {
        let task = parse_line("x 2021-01-02 (A) 2021-01-01 old");
        assert_eq!(task.priority(), None);
        assert_eq!(task.completed_date(), Some("2021-01-02"));
        assert_eq!(task.created_date(), Some("2021-01-01"));
    }

    #[test]
    fn test_priority_requires_whitespace_and_uppercase() {
        assert_eq!(parse_line("(A)no space").priority(), None);
        assert_eq!(parse_line("(a) lower").priority(), None);
        assert_eq!(parse_line("(A)").priority(), None);
        assert_eq!(parse_line(" (A) indented").priority(), None);
        assert_eq!(parse_line("(Z)\ttab").priority(), Some("(Z)"));
    }

    #[test]
    fn test_dates_must_be_standalone_tokens() {
        let task = parse_line("meet on2021-01-01 or 2021-01-01x");
        assert_eq!(task.created_date(), None);

        let task = parse_line("due:2021-03-01 something");
        assert_eq!(task.created_date(), None);
        assert_eq!(task.due_date(), Some("2021-03-01"));
    }

    #[test]
    fn test_date_at_end_of_line() {
        let task = parse_line("renew passport 2030-06-01");
        assert_eq!(task.created_date(), Some("2030-06-01"));
    }

    #[test]
    fn test_active_task_uses_first_date() {
        let task = parse_line("2021-01-01 then 2021-05-05");
        assert_eq!(task.created_date(), Some("2021-01-01"));
        assert_eq!(task.completed_date(), None);
    }

    #[test]
    fn test_last_extension_wins() {
        let task = parse_line("pay rent due:2021-01-01 rec:1m h:1 due:2021-02-01 h:0");
        assert_eq!(task.due_date(), Some("2021-02-01"));
        assert_eq!(task.recurrence(), Some("1m"));
        assert_eq!(task.hidden(), Some("0"));
    }

    #[test]
    fn test_duplicate_projects_collapse() {
        let task = parse_line("+Work a +Work b +Home");
        assert_eq!(
            task.projects().iter().collect::<Vec<_>>(),
            vec!["+Work", "+Home"]
        );
    }

    #[test]
    fn test_text_is_preserved_verbatim() {
        for line in ["", "  padded  ", "x 2021-01-01 done\r", "(B) ünïcödé +Proj"] {
            assert_eq!(parse_line(line).text(), line);
        }
    }

    #[test]
    fn test_reparse_is_idempotent() {
        let first = parse_line("(C) 2022-03-04 +A @b due:2022-04-01 rec:+1w h:1 go");
        let again = parse_line(first.text());
        assert!(first.same_fields(&again));
        assert_ne!(first.id(), again.id());
    }

    #[test]
    fn test_reparse_keeps_id() {
        let task = parse_line("old");
        let edited = reparse(task.id(), "(A) new +P");
        assert_eq!(edited.id(), task.id());
        assert_eq!(edited.text(), "(A) new +P");
        assert_eq!(edited.priority(), Some("(A)"));
    }

    #[test]
    fn test_parse_many_preserves_order() {
        let tasks = parse_many(["a", "", "c"]);
        let texts: Vec<&str> = tasks.iter().map(|t| t.text()).collect();
        assert_eq!(texts, vec!["a", "", "c"]);
    }

    #[test]
    fn test_is_date_token() {
        assert!(is_date_token("2021-01-01"));
        assert!(!is_date_token("2021-1-01"));
        assert!(!is_date_token("2021/01/01"));
        assert!(!is_date_token("20210-01-01"));
    }
}
