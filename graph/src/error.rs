//! Error types for graph ingestion and parsing.

use thiserror::Error;

/// Errors produced while building a graph model from statements.
#[derive(Debug, Error)]
pub enum GraphError {
    /// A statement was structurally malformed (empty subject or predicate).
    /// Ingestion fails for the whole input; no partial graph is produced.
    #[error("invalid statement: {0}")]
    InvalidStatement(String),

    /// The input could not be parsed as RDF.
    #[error("cannot parse input: {0}")]
    Parse(String),

    /// The input file could not be read.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
