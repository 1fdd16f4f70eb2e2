//! Property-based tests for identifier recognition and query escaping.

use proptest::prelude::*;
use orcid_jskos::identifier::UriSpace;
use orcid_jskos::lucene::{SPECIAL_CHARS, escape, lucene_query};

/// Generate well-formed ORCID iDs.
fn arb_orcid() -> impl Strategy<Value = String> {
    "[0-9]{4}-[0-9]{4}-[0-9]{4}-[0-9]{3}[0-9X]"
}

/// Remove one backslash before each special character.
fn unescape(escaped: &str) -> String {
    let mut out = String::with_capacity(escaped.len());
    let mut chars = escaped.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\\' && chars.peek().is_some_and(|next| SPECIAL_CHARS.contains(next)) {
            continue;
        }
        out.push(c);
    }
    out
}

proptest! {
    /// Every well-formed iD is recognized bare and as URI.
    #[test]
    fn well_formed_ids_recognized(id in arb_orcid()) {
        let space = UriSpace::orcid();

        let bare = space.recognize(&id).expect("bare notation");
        prop_assert_eq!(&bare.notation, &id);
        prop_assert_eq!(&bare.uri, &format!("http://orcid.org/{id}"));

        let by_uri = space.recognize(&bare.uri).expect("uri");
        prop_assert_eq!(by_uri, bare);
    }

    /// Recognized identifiers always satisfy the grammar.
    #[test]
    fn recognized_ids_are_well_formed(input in "\\PC{0,40}") {
        if let Some(id) = UriSpace::orcid().recognize(&input) {
            prop_assert_eq!(id.notation.len(), 19);
            prop_assert!(id.notation.chars().enumerate().all(|(i, c)| match i {
                4 | 9 | 14 => c == '-',
                18 => c.is_ascii_digit() || c == 'X',
                _ => c.is_ascii_digit(),
            }), "notation not well-formed: {}", id.notation);
            prop_assert_eq!(id.uri, format!("http://orcid.org/{}", id.notation));
        }
    }

    /// Surrounding text breaks recognition.
    #[test]
    fn padded_ids_rejected(id in arb_orcid(), pad in "[a-z ]{1,3}") {
        let space = UriSpace::orcid();
        let prefixed = format!("{pad}{id}");
        let suffixed = format!("{id}{pad}");
        prop_assert!(space.recognize(&prefixed).is_none());
        prop_assert!(space.recognize(&suffixed).is_none());
    }

    /// Escaping only inserts backslashes before special characters.
    #[test]
    fn escape_inverts(text in "\\PC{0,60}") {
        let escaped = escape(&text);
        let specials = text.chars().filter(|c| SPECIAL_CHARS.contains(c)).count();

        prop_assert_eq!(escaped.chars().count(), text.chars().count() + specials);
        prop_assert_eq!(unescape(&escaped), text);
    }

    /// Text without special characters passes through.
    #[test]
    fn plain_text_unchanged(text in "[A-Za-z0-9 .,;_]{0,60}") {
        prop_assert_eq!(escape(&text), text.clone());
        prop_assert_eq!(lucene_query("text", &text), format!("text:\"{text}\""));
    }

    /// The phrase clause keeps its quotes balanced: every inner quote is escaped.
    #[test]
    fn clause_quotes_escaped(text in "\\PC{0,60}") {
        let clause = lucene_query("text", &text);
        let inner = &clause["text:\"".len()..clause.len() - 1];

        let mut prev = None;
        for c in inner.chars() {
            if c == '"' {
                prop_assert_eq!(prev, Some('\\'));
            }
            prev = Some(c);
        }
    }
}
