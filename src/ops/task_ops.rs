use crate::parse::line_parser::{CLOSED_MARKER, is_closed_line, is_date_token};

/// Mark a line completed on `today`: `x <today> <text>`.
/// Already-completed lines come back unchanged.
pub fn close_text(text: &str, today: &str) -> String {
    if is_closed_line(text) {
        return text.to_string();
    }
    format!("{}{} {}", CLOSED_MARKER, today, text)
}

/// Undo `close_text`: drop the `x ` marker and, when the next token is a
/// date, that completion date and the whitespace after it.
/// Open lines come back unchanged.
pub fn reopen_text(text: &str) -> String {
    let Some(rest) = text.strip_prefix(CLOSED_MARKER) else {
        return text.to_string();
    };
    let trimmed = rest.trim_start();
    let token_end = trimmed
        .find(char::is_whitespace)
        .unwrap_or(trimmed.len());
    if is_date_token(&trimmed[..token_end]) {
        trimmed[token_end..].trim_start().to_string()
    } else {
        rest.to_string()
    }
}
