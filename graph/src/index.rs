//! Triple index: groups a flat statement collection by subject.

use std::collections::{BTreeMap, BTreeSet};

use crate::error::GraphError;
use crate::node::NodeModel;
use crate::term::{Statement, Value};

/// Attribute map of one subject: predicate → values in ingestion order.
pub type AttributeMap = BTreeMap<String, Vec<Value>>;

/// Ingests statements and groups them into per-subject attribute maps,
/// recording every distinct language tag observed on any literal.
#[derive(Debug, Default)]
pub struct TripleIndex {
    subjects: BTreeMap<String, AttributeMap>,
    languages: BTreeSet<String>,
}

impl TripleIndex {
    /// Creates an empty index.
    #[must_use]
    pub fn new() -> Self {
        TripleIndex::default()
    }

    /// Ingests a statement collection.
    ///
    /// All statements are validated before any of them is applied, so a
    /// malformed statement fails the whole input and leaves the index
    /// unchanged (no partial graphs).
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::InvalidStatement`] when a statement has an empty
    /// subject identifier or an empty predicate.
    pub fn ingest<I>(&mut self, statements: I) -> Result<(), GraphError>
    where
        I: IntoIterator<Item = Statement>,
    {
        let statements: Vec<Statement> = statements.into_iter().collect();
        for statement in &statements {
            if statement.subject.id.is_empty() {
                return Err(GraphError::InvalidStatement(format!(
                    "empty subject for predicate {:?}",
                    statement.predicate
                )));
            }
            if statement.predicate.is_empty() {
                return Err(GraphError::InvalidStatement(format!(
                    "empty predicate on subject {:?}",
                    statement.subject.id
                )));
            }
        }

        for statement in statements {
            if let Value::Literal(lit) = &statement.object {
                if let Some(tag) = &lit.language {
                    self.languages.insert(tag.clone());
                }
            }
            self.subjects
                .entry(statement.subject.id)
                .or_default()
                .entry(statement.predicate)
                .or_default()
                .push(statement.object);
        }
        Ok(())
    }

    /// Every distinct language tag observed on any ingested literal.
    #[must_use]
    pub fn languages_seen(&self) -> &BTreeSet<String> {
        &self.languages
    }

    /// Number of distinct subjects ingested so far.
    #[must_use]
    pub fn subject_count(&self) -> usize {
        self.subjects.len()
    }

    /// The attribute map of one subject, if present.
    #[must_use]
    pub fn attributes(&self, subject: &str) -> Option<&AttributeMap> {
        self.subjects.get(subject)
    }

    /// Consumes the index, producing one [`NodeModel`] per subject.
    #[must_use]
    pub fn into_nodes(self) -> Vec<NodeModel> {
        self.subjects
            .into_iter()
            .map(|(id, attributes)| NodeModel::new(id, attributes))
            .collect()
    }
}
