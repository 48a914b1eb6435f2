//! Node model: one subject and all of its attributes.

use std::collections::BTreeMap;
use std::fmt::Write as _;

use sha2::{Digest, Sha256};

use crate::language::select_for_language;
use crate::term::Value;
use crate::vocab::{DESCRIPTION_CANDIDATES, RDF_TYPE, TITLE_CANDIDATES, TYPE_PRIORITY};

/// Derives the stable, URL-safe in-document anchor for a node identity.
///
/// The same function must be used wherever anchors are emitted and
/// dereferenced; the anchor is the first 16 hex digits of the SHA-256 of the
/// identity string.
#[must_use]
pub fn fragment_for_identity(id: &str) -> String {
    let digest = Sha256::digest(id.as_bytes());
    let mut fragment = String::with_capacity(16);
    for byte in digest.iter().take(8) {
        let _ = write!(fragment, "{byte:02x}");
    }
    fragment
}

/// All statements sharing one subject, exposed through derived properties.
///
/// Created once during ingestion and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct NodeModel {
    id: String,
    fragment: String,
    attributes: BTreeMap<String, Vec<Value>>,
}

impl NodeModel {
    /// Wraps a subject identity and its attribute map.
    #[must_use]
    pub fn new(id: String, attributes: BTreeMap<String, Vec<Value>>) -> Self {
        let fragment = fragment_for_identity(&id);
        NodeModel {
            id,
            fragment,
            attributes,
        }
    }

    /// The subject identity (IRI or blank node label).
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The in-document anchor for this node.
    #[must_use]
    pub fn fragment(&self) -> &str {
        &self.fragment
    }

    /// The full attribute map, predicate → values in ingestion order.
    #[must_use]
    pub fn attributes(&self) -> &BTreeMap<String, Vec<Value>> {
        &self.attributes
    }

    /// The values recorded for one predicate, if any.
    #[must_use]
    pub fn values(&self, predicate: &str) -> Option<&[Value]> {
        self.attributes.get(predicate).map(Vec::as_slice)
    }

    /// All `rdf:type` reference identifiers, in ingestion order.
    #[must_use]
    pub fn types(&self) -> Vec<&str> {
        self.attributes
            .get(RDF_TYPE)
            .map(|values| {
                values
                    .iter()
                    .filter_map(|value| value.as_reference())
                    .map(|reference| reference.id.as_str())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// The node's canonical type: the first recorded type that appears in the
    /// fixed priority list, else the first recorded type, else `None`.
    #[must_use]
    pub fn canonical_type(&self) -> Option<&str> {
        let types = self.types();
        types
            .iter()
            .find(|id| TYPE_PRIORITY.contains(id))
            .or_else(|| types.first())
            .copied()
    }

    /// Resolves the node title for a language.
    ///
    /// Scans the fixed candidate predicates in order; the first predicate
    /// present in the attribute map wins even when it yields no usable
    /// literal for any language, and later candidates are never consulted.
    #[must_use]
    pub fn title(&self, language: &str) -> Option<String> {
        self.candidate_literal(TITLE_CANDIDATES, language)
    }

    /// Resolves the node description for a language. Same candidate and
    /// fallback rules as [`NodeModel::title`].
    #[must_use]
    pub fn description(&self, language: &str) -> Option<String> {
        self.candidate_literal(DESCRIPTION_CANDIDATES, language)
    }

    /// The deterministic ordering key: type priority rank, then resolved
    /// title, falling back to the raw identity so untitled nodes still
    /// compare deterministically.
    #[must_use]
    pub fn sort_tuple(&self, language: &str) -> (usize, String) {
        let rank = self
            .canonical_type()
            .and_then(|id| TYPE_PRIORITY.iter().position(|known| *known == id))
            .unwrap_or(TYPE_PRIORITY.len());
        let key = self.title(language).unwrap_or_else(|| self.id.clone());
        (rank, key)
    }

    fn candidate_literal(&self, candidates: &[&str], language: &str) -> Option<String> {
        let values = candidates
            .iter()
            .find_map(|candidate| self.attributes.get(*candidate))?;
        let literals = values
            .iter()
            .filter_map(Value::as_literal)
            .map(|lit| (lit.text.clone(), lit.language.clone()))
            .collect();
        select_for_language(literals, language).into_iter().next()
    }
}
