//! rdfdoc rendering engine.
//!
//! Takes the ordered [`GraphModel`](rdfdoc_graph::GraphModel) produced by
//! `rdfdoc-graph` and renders it, one language at a time, into
//! renderer-agnostic [`RenderRecord`]s and — through the built-in HTML
//! backend — into a browsable document set. Predicate labels are resolved
//! through a cached vocabulary lookup so opaque IRIs display as
//! human-readable names.
//!
//! # Entry Point
//!
//! ```no_run
//! use std::path::Path;
//!
//! use rdfdoc_render::{Converter, PredicateResolver, RenderOptions};
//!
//! let resolver = PredicateResolver::with_http()?;
//! let mut converter = Converter::new(
//!     ["all".to_string()],
//!     RenderOptions::default(),
//!     resolver,
//! );
//! converter.load_file(Path::new("catalog.ttl"))?;
//! converter.output_html(Path::new("public"), false)?;
//! # Ok::<(), anyhow::Error>(())
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod convert;
pub mod html;
pub mod linker;
pub mod record;
pub mod renderer;
pub mod resolver;
pub mod writer;

pub use convert::{ConvertError, Converter, ALL_LANGUAGES};
pub use record::{AttributeRow, ObjectEntry, RenderRecord};
pub use renderer::{DocumentRenderer, RenderOptions};
pub use resolver::{HttpFetcher, PredicateResolver, VocabularyFetcher};
