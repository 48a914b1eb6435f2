//! Renderer-agnostic output records.
//!
//! A [`RenderRecord`] carries everything a rendering backend needs for one
//! node; it holds no back-reference to the graph it came from. The serialized
//! form (one JSON object per node) is the integration surface for backends
//! other than the built-in HTML one.

use serde::Serialize;

/// One object value inside an attribute row.
///
/// Literal values are merged into a single entry whose `title` is an HTML
/// fragment (auto-linked and escaped) and whose `link` is absent; reference
/// values carry plain-text titles and always have a link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ObjectEntry {
    /// Display text.
    pub title: String,
    /// Link target: an in-document `#fragment` anchor, or an external URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

/// One row in a node's attribute table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AttributeRow {
    /// Link target for the predicate itself.
    #[serde(rename = "pred_link")]
    pub predicate_link: String,
    /// Human-readable predicate label.
    #[serde(rename = "pred_title")]
    pub predicate_title: String,
    /// Object entries: the merged literal entry first (when present),
    /// then references sorted by display title.
    #[serde(rename = "objs")]
    pub objects: Vec<ObjectEntry>,
}

/// The complete rendered form of one node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderRecord {
    /// The node's in-document anchor.
    #[serde(rename = "node_id")]
    pub fragment: String,
    /// The node's identity.
    #[serde(rename = "rdf_about")]
    pub id: String,
    /// Resolved title, if the node has one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Resolved type label (or the raw type identifier), if the node is typed.
    #[serde(rename = "rdf_type", skip_serializing_if = "Option::is_none")]
    pub type_label: Option<String>,
    /// Resolved description, if the node has one.
    #[serde(rename = "desc", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Attribute rows: the synthetic "About" row first, then one row per
    /// visible predicate in alphabetical order.
    pub attributes: Vec<AttributeRow>,
}
