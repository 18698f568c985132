use crate::model::task::Task;

/// Join task lines back into a todo.txt document.
///
/// Each task's text is emitted verbatim, one per line, separated by `\n`.
/// No trailing newline is added, so splitting the result on `\n` yields the
/// same lines that were loaded.
pub fn serialize_tasks<'a, I>(tasks: I) -> String
where
    I: IntoIterator<Item = &'a Task>,
{
    let mut out = String::new();
    for (i, task) in tasks.into_iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(task.text());
    }
    out
}
