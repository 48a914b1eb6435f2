//! rdfdoc graph model.
//!
//! Ingests subject–predicate–object statements and derives the browsable
//! structure the renderer consumes: one [`NodeModel`] per subject, collected
//! into an ordered, immutable [`GraphModel`].
//!
//! # Entry Point
//!
//! ```
//! use rdfdoc_graph::{GraphModel, TripleIndex};
//!
//! let statements = rdfdoc_graph::loader::parse_turtle(
//!     "<http://example.org/a> <http://purl.org/dc/terms/title> \"A\"@en .",
//! )?;
//! let mut index = TripleIndex::new();
//! index.ingest(statements)?;
//! let graph = GraphModel::build(index.into_nodes(), "en");
//! assert_eq!(graph.len(), 1);
//! # Ok::<(), rdfdoc_graph::GraphError>(())
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod error;
pub mod graph;
pub mod index;
pub mod language;
pub mod loader;
pub mod node;
pub mod term;
pub mod vocab;

pub use error::GraphError;
pub use graph::GraphModel;
pub use index::{AttributeMap, TripleIndex};
pub use node::{fragment_for_identity, NodeModel};
pub use term::{Literal, RefKind, Reference, Statement, Value};
