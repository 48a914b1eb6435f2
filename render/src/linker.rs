//! Identifier normalization and literal auto-linking.

use std::sync::OnceLock;

use regex::Regex;

use crate::html::escape_html;

/// Normalizes a raw identifier for display and external linking.
///
/// Some normalizers wrap identifiers in `<`/`>`; those are stripped, along
/// with at most one trailing `/`. Never fails, for any input including the
/// empty string.
#[must_use]
pub fn normalize_identifier(raw: &str) -> &str {
    let trimmed = raw.trim();
    let trimmed = trimmed.strip_prefix('<').unwrap_or(trimmed);
    let trimmed = trimmed.strip_suffix('>').unwrap_or(trimmed);
    trimmed.strip_suffix('/').unwrap_or(trimmed)
}

/// Characters allowed in a URL per RFC 3986 (unreserved + reserved).
fn link_regex() -> &'static Regex {
    static LINK: OnceLock<Regex> = OnceLock::new();
    LINK.get_or_init(|| {
        #[allow(clippy::unwrap_used)] // the pattern is a literal and always compiles
        Regex::new(r"https?://[A-Za-z0-9\-._~:/?#\[\]@!$&'()*+,;=%]+").unwrap()
    })
}

fn separator_regex() -> &'static Regex {
    static SEPARATORS: OnceLock<Regex> = OnceLock::new();
    SEPARATORS.get_or_init(|| {
        #[allow(clippy::unwrap_used)] // the pattern is a literal and always compiles
        Regex::new(r"[_-]+").unwrap()
    })
}

/// Converts literal text into an HTML fragment, replacing anything that looks
/// like an absolute web address with an anchor element.
///
/// Trailing sentence punctuation is kept out of the link target: a closing
/// `)` is dropped when the address is directly preceded by `(`, and a
/// trailing `.` is always dropped. Text outside the matches is HTML-escaped.
#[must_use]
pub fn auto_link(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut cursor = 0;
    for found in link_regex().find_iter(text) {
        out.push_str(&escape_html(&text[cursor..found.start()]));

        let mut url = found.as_str();
        if url.ends_with(')') && text[..found.start()].ends_with('(') {
            url = &url[..url.len() - 1];
        }
        if url.ends_with('.') {
            url = &url[..url.len() - 1];
        }

        out.push_str(&format!(
            r#"<a href="{}" target="_blank">{}</a>"#,
            escape_html(url),
            escape_html(&display_name(url))
        ));
        cursor = found.end();
    }
    out.push_str(&escape_html(&text[cursor..]));
    out
}

/// Derives a human-readable display name for a detected address: the last
/// path segment (when the address has a path), percent-decoded, with `_`/`-`
/// runs collapsed to single spaces.
fn display_name(url: &str) -> String {
    let mut name = url;
    if url.matches('/').count() > 2 {
        if let Some((_, tail)) = url.rsplit_once('/') {
            name = tail;
        }
    }
    let decoded = match urlencoding::decode(name) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => name.to_string(),
    };
    separator_regex().replace_all(&decoded, " ").into_owned()
}
