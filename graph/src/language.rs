//! Language-aware literal selection.
//!
//! Shared by node summaries and attribute rendering: given all literal values
//! of a predicate, pick the tier that best matches the requested language.

/// Selects display texts from `(text, language_tag)` pairs for a language.
///
/// Tiers, in order: literals tagged with exactly `language`, then untagged
/// literals, then literals in any other language. The first non-empty tier
/// wins and is returned sorted lexicographically; lower tiers are never
/// consulted. Returns an empty vector when there are no literals at all.
#[must_use]
pub fn select_for_language(values: Vec<(String, Option<String>)>, language: &str) -> Vec<String> {
    let mut same_lang = Vec::new();
    let mut no_lang = Vec::new();
    let mut other_lang = Vec::new();

    for (text, tag) in values {
        match tag.as_deref() {
            Some(tag) if tag == language => same_lang.push(text),
            None => no_lang.push(text),
            Some(_) => other_lang.push(text),
        }
    }

    let mut winner = if !same_lang.is_empty() {
        same_lang
    } else if !no_lang.is_empty() {
        no_lang
    } else {
        other_lang
    };
    winner.sort();
    winner
}
