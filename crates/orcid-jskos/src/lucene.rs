//! Lucene query parser syntax helpers.
//!
//! The ORCID search API accepts Solr/Lucene queries in its `q` parameter.

/// Characters with special meaning in Lucene query syntax.
pub const SPECIAL_CHARS: &[char] =
    &['*', '+', '&', '|', '!', '(', ')', '{', '}', '[', ']', '^', '"', '~', '?', ':', '-'];

/// Escape special characters of `text` with a backslash.
///
/// Not idempotent: escaping an already escaped string escapes again.
#[must_use]
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if SPECIAL_CHARS.contains(&c) {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// Build a quoted phrase clause `field:"text"` with `text` escaped.
#[must_use]
pub fn lucene_query(field: &str, text: &str) -> String {
    format!("{}:\"{}\"", field, escape(text))
}
