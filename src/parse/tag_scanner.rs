use indexmap::IndexSet;
use serde::Serialize;

use crate::parse::span::{TokenSpan, tokens};

/// A classified body token
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Tag {
    /// `+name`, stored without the `+`
    Project { name: String },
    /// `@name`, stored without the `@`
    Context { name: String },
    /// `key:value`
    Extension { key: String, value: String },
}

/// A tag together with its raw text and where it was found
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrackedTag {
    pub tag: Tag,
    pub raw: String,
    pub span: TokenSpan,
}

/// Scan a line for `+project`, `@context` and `key:value` tokens, in order.
///
/// Tokens are whitespace-delimited. A `+`/`@` token needs at least one
/// character after the prefix. An extension needs a non-empty key and value
/// around exactly one colon, so times like `10:30:00` are plain text.
pub fn scan_tags(body: &str) -> Vec<TrackedTag> {
    tokens(body)
        .filter_map(|(span, raw)| {
            classify(raw).map(|tag| TrackedTag {
                tag,
                raw: raw.to_string(),
                span,
            })
        })
        .collect()
}

fn classify(token: &str) -> Option<Tag> {
    if let Some(name) = token.strip_prefix('@')
        && !name.is_empty()
    {
        return Some(Tag::Context {
            name: name.to_string(),
        });
    }
    if let Some(name) = token.strip_prefix('+')
        && !name.is_empty()
    {
        return Some(Tag::Project {
            name: name.to_string(),
        });
    }
    match token.split_once(':') {
        Some((key, value)) if !key.is_empty() && !value.is_empty() && !value.contains(':') => {
            Some(Tag::Extension {
                key: key.to_string(),
                value: value.to_string(),
            })
        }
        _ => None,
    }
}

/// Iterate the `key:value` extensions of a line, in scan order
pub fn extensions(line: &str) -> impl Iterator<Item = (String, String)> {
    scan_tags(line).into_iter().filter_map(|t| match t.tag {
        Tag::Extension { key, value } => Some((key, value)),
        _ => None,
    })
}

/// Distinct `+project` tokens, prefix included, in first-occurrence order
pub fn extract_projects(line: &str) -> IndexSet<String> {
    extract_prefixed(line, '+')
}

/// Distinct `@context` tokens, prefix included, in first-occurrence order
pub fn extract_contexts(line: &str) -> IndexSet<String> {
    extract_prefixed(line, '@')
}

/// Decorator pairs a project/context may be wrapped in, e.g. `(+Work)`
const DECORATORS: [(char, char); 5] = [('(', ')'), ('{', '}'), ('[', ']'), ('"', '"'), ('\'', '\'')];

fn extract_prefixed(line: &str, prefix: char) -> IndexSet<String> {
    let mut found = IndexSet::new();
    for (_, token) in tokens(line) {
        let token = strip_decorators(token);
        if let Some(name) = token.strip_prefix(prefix)
            && !name.is_empty()
            && name.chars().all(|c| c.is_ascii_alphanumeric())
        {
            found.insert(token.to_string());
        }
    }
    found
}

/// Remove one matching decorator pair from around a token
fn strip_decorators(token: &str) -> &str {
    for (open, close) in DECORATORS {
        if token.len() >= 2
            && let Some(inner) = token.strip_prefix(open)
            && let Some(inner) = inner.strip_suffix(close)
        {
            return inner;
        }
    }
    token
}
