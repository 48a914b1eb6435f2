//! Graph model: an ordered, immutable collection of nodes.

use std::collections::BTreeMap;

use crate::node::NodeModel;

/// All nodes of one input graph, ordered by type priority then title.
///
/// Construction is deterministic and idempotent: the same nodes produce the
/// same order regardless of ingestion order. No node is dropped or merged.
#[derive(Debug)]
pub struct GraphModel {
    nodes: Vec<NodeModel>,
    by_id: BTreeMap<String, usize>,
}

impl GraphModel {
    /// Builds the graph by sorting `nodes` by their
    /// [`sort_tuple`](NodeModel::sort_tuple) for `language`.
    #[must_use]
    pub fn build(mut nodes: Vec<NodeModel>, language: &str) -> Self {
        nodes.sort_by_cached_key(|node| node.sort_tuple(language));
        let by_id = nodes
            .iter()
            .enumerate()
            .map(|(position, node)| (node.id().to_string(), position))
            .collect();
        GraphModel { nodes, by_id }
    }

    /// Iterates nodes in document order.
    pub fn iter(&self) -> impl Iterator<Item = &NodeModel> {
        self.nodes.iter()
    }

    /// Looks up a node by identity.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&NodeModel> {
        self.by_id.get(id).map(|position| &self.nodes[*position])
    }

    /// Whether a node with this identity exists.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.by_id.contains_key(id)
    }

    /// Number of nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the graph holds no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::term::Value;
    use crate::vocab::{
        DCAT_CATALOG, DCAT_DATASET, DCAT_DISTRIBUTION, DCT_TITLE, RDF_TYPE,
    };

    fn node(id: &str, rdf_type: Option<&str>, title: &str) -> NodeModel {
        let mut attributes = std::collections::BTreeMap::new();
        if let Some(rdf_type) = rdf_type {
            attributes.insert(RDF_TYPE.to_string(), vec![Value::named(rdf_type)]);
        }
        attributes.insert(DCT_TITLE.to_string(), vec![Value::literal(title)]);
        NodeModel::new(id.to_string(), attributes)
    }

    #[test]
    fn type_rank_dominates_title() {
        let nodes = vec![
            node("http://untyped", None, "Omega"),
            node("http://dist", Some(DCAT_DISTRIBUTION), "Beta"),
            node("http://dataset", Some(DCAT_DATASET), "Alpha"),
            node("http://catalog", Some(DCAT_CATALOG), "Zeta"),
        ];
        let graph = GraphModel::build(nodes, "en");
        let titles: Vec<Option<String>> = graph.iter().map(|n| n.title("en")).collect();
        assert_eq!(
            titles,
            vec![
                Some("Zeta".to_string()),
                Some("Alpha".to_string()),
                Some("Beta".to_string()),
                Some("Omega".to_string()),
            ]
        );
    }

    #[test]
    fn build_is_idempotent_across_input_order() {
        let forward = vec![
            node("http://a", Some(DCAT_DATASET), "One"),
            node("http://b", Some(DCAT_DATASET), "Two"),
        ];
        let reversed = vec![
            node("http://b", Some(DCAT_DATASET), "Two"),
            node("http://a", Some(DCAT_DATASET), "One"),
        ];
        let first: Vec<String> = GraphModel::build(forward, "en")
            .iter()
            .map(|n| n.id().to_string())
            .collect();
        let second: Vec<String> = GraphModel::build(reversed, "en")
            .iter()
            .map(|n| n.id().to_string())
            .collect();
        assert_eq!(first, second);
    }

    #[test]
    fn lookup_by_identity() {
        let graph = GraphModel::build(vec![node("http://a", None, "A")], "en");
        assert!(graph.contains("http://a"));
        assert!(graph.get("http://missing").is_none());
        assert_eq!(graph.len(), 1);
        assert!(!graph.is_empty());
    }
}
