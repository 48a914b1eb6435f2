//! Predicate label resolution with a cached vocabulary lookup.
//!
//! Predicate IRIs are opaque; their human-readable labels live in the
//! vocabulary documents that define them. The resolver fetches each
//! vocabulary at most once per lifetime and caches every label it finds,
//! keyed by predicate and language.

use std::collections::{BTreeMap, BTreeSet};
use std::time::Duration;

use anyhow::{bail, Context, Result};

use rdfdoc_graph::loader::parse_turtle;
use rdfdoc_graph::vocab::LABEL_PREDICATES;
use rdfdoc_graph::Statement;

/// Fetches the document behind a vocabulary base URL.
///
/// The production implementation is [`HttpFetcher`]; tests substitute an
/// in-memory one.
pub trait VocabularyFetcher {
    /// Fetches the vocabulary document as Turtle text.
    ///
    /// # Errors
    ///
    /// Returns an error for network failures and non-success responses; the
    /// resolver treats any error as a permanently failed vocabulary.
    fn fetch(&self, base_url: &str) -> Result<String>;
}

/// Blocking HTTP fetcher requesting a Turtle representation.
pub struct HttpFetcher {
    client: reqwest::blocking::Client,
}

impl HttpFetcher {
    /// Creates a fetcher with a 10 second request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error when the underlying HTTP client cannot be built.
    pub fn new() -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .context("failed to build HTTP client")?;
        Ok(HttpFetcher { client })
    }
}

impl VocabularyFetcher for HttpFetcher {
    fn fetch(&self, base_url: &str) -> Result<String> {
        let response = self
            .client
            .get(base_url)
            .header(reqwest::header::ACCEPT, "text/turtle")
            .send()
            .with_context(|| format!("cannot download {base_url}"))?;
        if !response.status().is_success() {
            bail!("{base_url} answered {}", response.status());
        }
        response
            .text()
            .with_context(|| format!("cannot read response body of {base_url}"))
    }
}

/// Derives the vocabulary base URL of a predicate: everything before the
/// last `#`, else before the last `/`, else the identifier itself.
#[must_use]
pub fn vocabulary_base_url(predicate: &str) -> &str {
    if let Some(position) = predicate.rfind('#') {
        &predicate[..position]
    } else if let Some(position) = predicate.rfind('/') {
        &predicate[..position]
    } else {
        predicate
    }
}

/// Resolves predicate identifiers into human-readable labels.
///
/// Labels are cached per predicate and language; every vocabulary base URL is
/// fetched at most once per resolver lifetime, whether the fetch succeeds or
/// not. Sharing one resolver across the languages (and files) of a run is the
/// intended reuse pattern.
pub struct PredicateResolver {
    fetcher: Box<dyn VocabularyFetcher>,
    labels: BTreeMap<String, BTreeMap<String, String>>,
    attempted: BTreeSet<String>,
}

impl PredicateResolver {
    /// Creates a resolver on top of the given fetcher.
    #[must_use]
    pub fn new(fetcher: Box<dyn VocabularyFetcher>) -> Self {
        PredicateResolver {
            fetcher,
            labels: BTreeMap::new(),
            attempted: BTreeSet::new(),
        }
    }

    /// Creates a resolver backed by the blocking HTTP fetcher.
    ///
    /// # Errors
    ///
    /// Returns an error when the HTTP client cannot be built.
    pub fn with_http() -> Result<Self> {
        Ok(PredicateResolver::new(Box::new(HttpFetcher::new()?)))
    }

    /// Resolves a predicate label for a language.
    ///
    /// Cache lookup first (exact language, then the hard-coded `"en"`
    /// fallback). On a full miss the predicate's vocabulary is fetched —
    /// unless an earlier attempt for the same base URL already ran, in which
    /// case the resolution is absent without further network traffic.
    pub fn resolve(&mut self, predicate: &str, language: &str) -> Option<String> {
        if let Some(label) = self.cached(predicate, language) {
            return Some(label.to_string());
        }

        let base_url = vocabulary_base_url(predicate).to_string();
        if self.attempted.contains(&base_url) {
            return None;
        }
        self.attempted.insert(base_url.clone());

        match self.fetcher.fetch(&base_url) {
            Ok(body) => match parse_turtle(&body) {
                Ok(statements) => self.harvest(&statements),
                Err(err) => {
                    tracing::warn!("cannot parse vocabulary {base_url}: {err}");
                }
            },
            Err(err) => {
                tracing::warn!("cannot fetch vocabulary {base_url}: {err:#}");
            }
        }

        self.cached(predicate, language).map(str::to_string)
    }

    fn cached(&self, predicate: &str, language: &str) -> Option<&str> {
        let by_language = self.labels.get(predicate)?;
        by_language
            .get(language)
            .or_else(|| by_language.get("en"))
            .map(String::as_str)
    }

    fn harvest(&mut self, statements: &[Statement]) {
        for statement in statements {
            if !LABEL_PREDICATES.contains(&statement.predicate.as_str()) {
                continue;
            }
            let Some(literal) = statement.object.as_literal() else {
                continue;
            };
            let language = literal.language.clone().unwrap_or_else(|| "en".to_string());
            self.labels
                .entry(statement.subject.id.clone())
                .or_default()
                .insert(language, title_case(&literal.text));
        }
    }
}

/// Title-cases label text: the first letter of every word is uppercased and
/// the rest lowercased.
fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut word_start = true;
    for c in text.chars() {
        if c.is_alphabetic() {
            if word_start {
                out.extend(c.to_uppercase());
            } else {
                out.extend(c.to_lowercase());
            }
            word_start = false;
        } else {
            out.push(c);
            word_start = true;
        }
    }
    out
}
