//! Document renderer: walks a graph and produces render records.

use rdfdoc_graph::language::select_for_language;
use rdfdoc_graph::vocab::RDF_ABOUT;
use rdfdoc_graph::{fragment_for_identity, GraphModel, NodeModel, Reference, Value};

use crate::html::escape_html;
use crate::linker::{auto_link, normalize_identifier};
use crate::record::{AttributeRow, ObjectEntry, RenderRecord};
use crate::resolver::PredicateResolver;

/// Rendering configuration, passed in explicitly; the renderer reads no
/// ambient state.
#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    /// Restricts attribute rows to these predicates (compact summaries).
    /// `None` renders every predicate present.
    pub visible_predicates: Option<Vec<String>>,
    /// Namespace prefixes treated as in-document targets even when the
    /// referenced identity is not itself a node.
    pub local_namespaces: Vec<String>,
    /// Renders literal text without auto-linking embedded addresses.
    pub skip_literal_links: bool,
    /// Links internal references by identity instead of fragment anchor.
    pub skip_internal_links: bool,
}

/// Produces one [`RenderRecord`] per graph node for a given language.
pub struct DocumentRenderer<'a> {
    graph: &'a GraphModel,
    resolver: &'a mut PredicateResolver,
    options: &'a RenderOptions,
}

impl<'a> DocumentRenderer<'a> {
    /// Creates a renderer over a graph, sharing the given resolver cache.
    pub fn new(
        graph: &'a GraphModel,
        resolver: &'a mut PredicateResolver,
        options: &'a RenderOptions,
    ) -> Self {
        DocumentRenderer {
            graph,
            resolver,
            options,
        }
    }

    /// Renders all nodes in graph order.
    pub fn render(&mut self, language: &str) -> Vec<RenderRecord> {
        let graph = self.graph;
        graph
            .iter()
            .map(|node| self.render_node(node, language))
            .collect()
    }

    fn render_node(&mut self, node: &NodeModel, language: &str) -> RenderRecord {
        let type_label = node.canonical_type().map(|raw| {
            self.resolver
                .resolve(raw, language)
                .unwrap_or_else(|| raw.to_string())
        });

        let mut attributes = vec![self.about_row(node, language)];
        for predicate in self.visible_predicates(node) {
            if let Some(values) = node.values(&predicate) {
                attributes.push(self.attribute_row(&predicate, values, language));
            }
        }

        RenderRecord {
            fragment: node.fragment().to_string(),
            id: node.id().to_string(),
            title: node.title(language),
            type_label,
            description: node.description(language),
            attributes,
        }
    }

    /// Predicates to render, alphabetically, honoring the visibility filter.
    fn visible_predicates(&self, node: &NodeModel) -> Vec<String> {
        match &self.options.visible_predicates {
            Some(filter) => {
                let mut predicates: Vec<String> = filter
                    .iter()
                    .filter(|predicate| node.attributes().contains_key(*predicate))
                    .cloned()
                    .collect();
                predicates.sort();
                predicates.dedup();
                predicates
            }
            None => node.attributes().keys().cloned().collect(),
        }
    }

    /// The synthetic self-reference row, always emitted first. The link is
    /// the node's own identity, never an in-document anchor.
    fn about_row(&self, node: &NodeModel, language: &str) -> AttributeRow {
        let title = node
            .title(language)
            .unwrap_or_else(|| normalize_identifier(node.id()).to_string());
        AttributeRow {
            predicate_link: RDF_ABOUT.to_string(),
            predicate_title: "About".to_string(),
            objects: vec![ObjectEntry {
                title,
                link: Some(node.id().to_string()),
            }],
        }
    }

    fn attribute_row(&mut self, predicate: &str, values: &[Value], language: &str) -> AttributeRow {
        let predicate_title = self
            .resolver
            .resolve(predicate, language)
            .unwrap_or_else(|| normalize_identifier(predicate).to_string());

        let mut objects = Vec::new();

        let literals: Vec<(String, Option<String>)> = values
            .iter()
            .filter_map(Value::as_literal)
            .map(|literal| {
                let text = if self.options.skip_literal_links {
                    escape_html(&literal.text)
                } else {
                    auto_link(&literal.text)
                };
                (text, literal.language.clone())
            })
            .collect();
        let joined = select_for_language(literals, language).join(" ");
        if !joined.is_empty() {
            objects.push(ObjectEntry {
                title: joined,
                link: None,
            });
        }

        let mut references: Vec<ObjectEntry> = values
            .iter()
            .filter_map(Value::as_reference)
            .map(|reference| self.reference_entry(reference, language))
            .collect();
        references.sort_by(|a, b| a.title.cmp(&b.title).then_with(|| a.link.cmp(&b.link)));
        objects.extend(references);

        AttributeRow {
            predicate_link: predicate.to_string(),
            predicate_title,
            objects,
        }
    }

    /// Classifies a reference as internal (graph member or configured local
    /// namespace) or external, and builds its entry.
    fn reference_entry(&self, reference: &Reference, language: &str) -> ObjectEntry {
        let id = reference.id.as_str();
        let target = self.graph.get(id);
        let is_internal = target.is_some()
            || self
                .options
                .local_namespaces
                .iter()
                .any(|namespace| id.starts_with(namespace.as_str()));

        if is_internal {
            let title = target
                .and_then(|node| node.title(language))
                .unwrap_or_else(|| id.to_string());
            let link = if self.options.skip_internal_links {
                id.to_string()
            } else {
                let fragment = target
                    .map(|node| node.fragment().to_string())
                    .unwrap_or_else(|| fragment_for_identity(id));
                format!("#{fragment}")
            };
            ObjectEntry {
                title,
                link: Some(link),
            }
        } else {
            let normalized = normalize_identifier(id).to_string();
            ObjectEntry {
                title: normalized.clone(),
                link: Some(normalized),
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::BTreeMap;

    use anyhow::Result;
    use rdfdoc_graph::vocab::{DCAT_DATASET, DCT_DESCRIPTION, DCT_TITLE, RDF_TYPE};
    use rdfdoc_graph::{GraphModel, NodeModel, Value};

    use super::*;
    use crate::resolver::VocabularyFetcher;

    struct OfflineFetcher;

    impl VocabularyFetcher for OfflineFetcher {
        fn fetch(&self, base_url: &str) -> Result<String> {
            anyhow::bail!("offline: {base_url}")
        }
    }

    fn resolver() -> PredicateResolver {
        PredicateResolver::new(Box::new(OfflineFetcher))
    }

    fn node(id: &str, entries: Vec<(&str, Vec<Value>)>) -> NodeModel {
        let attributes: BTreeMap<String, Vec<Value>> = entries
            .into_iter()
            .map(|(predicate, values)| (predicate.to_string(), values))
            .collect();
        NodeModel::new(id.to_string(), attributes)
    }

    fn render(nodes: Vec<NodeModel>, options: &RenderOptions) -> Vec<RenderRecord> {
        let graph = GraphModel::build(nodes, "en");
        let mut resolver = resolver();
        DocumentRenderer::new(&graph, &mut resolver, options).render("en")
    }

    #[test]
    fn about_row_is_always_first_and_never_internal() {
        let records = render(
            vec![node(
                "http://example.org/a",
                vec![(DCT_TITLE, vec![Value::literal("A")])],
            )],
            &RenderOptions::default(),
        );
        let about = &records[0].attributes[0];
        assert_eq!(about.predicate_title, "About");
        assert_eq!(about.objects[0].link.as_deref(), Some("http://example.org/a"));
        assert_eq!(about.objects[0].title, "A");
    }

    #[test]
    fn internal_reference_uses_fragment_and_title() {
        let target = node(
            "http://example.org/target",
            vec![(DCT_TITLE, vec![Value::literal("Target title")])],
        );
        let expected_anchor = format!("#{}", target.fragment());
        let source = node(
            "http://example.org/source",
            vec![(
                "http://example.org/ns/relates",
                vec![Value::named("http://example.org/target")],
            )],
        );
        let records = render(vec![source, target], &RenderOptions::default());

        let source_record = records
            .iter()
            .find(|r| r.id == "http://example.org/source")
            .unwrap();
        let entry = &source_record.attributes[1].objects[0];
        assert_eq!(entry.link.as_deref(), Some(expected_anchor.as_str()));
        assert_eq!(entry.title, "Target title");
    }

    #[test]
    fn external_reference_uses_normalized_identifier() {
        let records = render(
            vec![node(
                "http://example.org/a",
                vec![(
                    "http://example.org/ns/relates",
                    vec![Value::named("http://elsewhere.org/thing/")],
                )],
            )],
            &RenderOptions::default(),
        );
        let entry = &records[0].attributes[1].objects[0];
        assert_eq!(entry.link.as_deref(), Some("http://elsewhere.org/thing"));
        assert_eq!(entry.title, "http://elsewhere.org/thing");
    }

    #[test]
    fn local_namespace_reference_is_internal() {
        let options = RenderOptions {
            local_namespaces: vec!["http://example.org/local/".to_string()],
            ..RenderOptions::default()
        };
        let records = render(
            vec![node(
                "http://example.org/a",
                vec![(
                    "http://example.org/ns/relates",
                    vec![Value::named("http://example.org/local/thing")],
                )],
            )],
            &options,
        );
        let entry = &records[0].attributes[1].objects[0];
        let expected = format!(
            "#{}",
            fragment_for_identity("http://example.org/local/thing")
        );
        assert_eq!(entry.link.as_deref(), Some(expected.as_str()));
        assert_eq!(entry.title, "http://example.org/local/thing");
    }

    #[test]
    fn literals_merge_into_one_entry_before_references() {
        let records = render(
            vec![
                node(
                    "http://example.org/a",
                    vec![(
                        "http://example.org/ns/mixed",
                        vec![
                            Value::named("http://example.org/b"),
                            Value::literal("beta"),
                            Value::literal("alpha"),
                        ],
                    )],
                ),
                node(
                    "http://example.org/b",
                    vec![(DCT_TITLE, vec![Value::literal("B")])],
                ),
            ],
            &RenderOptions::default(),
        );
        let row = records
            .iter()
            .find(|r| r.id == "http://example.org/a")
            .unwrap()
            .attributes[1]
            .clone();
        assert_eq!(row.objects.len(), 2);
        assert_eq!(row.objects[0].title, "alpha beta");
        assert_eq!(row.objects[0].link, None);
        assert_eq!(row.objects[1].title, "B");
    }

    #[test]
    fn references_sorted_by_display_title() {
        let records = render(
            vec![
                node(
                    "http://example.org/a",
                    vec![(
                        "http://example.org/ns/relates",
                        vec![
                            Value::named("http://example.org/z"),
                            Value::named("http://example.org/m"),
                        ],
                    )],
                ),
                node(
                    "http://example.org/z",
                    vec![(DCT_TITLE, vec![Value::literal("Apple")])],
                ),
                node(
                    "http://example.org/m",
                    vec![(DCT_TITLE, vec![Value::literal("Zebra")])],
                ),
            ],
            &RenderOptions::default(),
        );
        let record = records
            .iter()
            .find(|r| r.id == "http://example.org/a")
            .unwrap();
        let titles: Vec<&str> = record.attributes[1]
            .objects
            .iter()
            .map(|o| o.title.as_str())
            .collect();
        assert_eq!(titles, vec!["Apple", "Zebra"]);
    }

    #[test]
    fn unresolved_type_label_falls_back_to_raw_identifier() {
        let records = render(
            vec![node(
                "http://example.org/a",
                vec![(RDF_TYPE, vec![Value::named(DCAT_DATASET)])],
            )],
            &RenderOptions::default(),
        );
        assert_eq!(records[0].type_label.as_deref(), Some(DCAT_DATASET));
    }

    #[test]
    fn missing_summary_fields_stay_absent() {
        let records = render(
            vec![node(
                "http://example.org/a",
                vec![(DCT_DESCRIPTION, vec![Value::literal("Only description")])],
            )],
            &RenderOptions::default(),
        );
        assert_eq!(records[0].title, None);
        assert_eq!(records[0].type_label, None);
        assert_eq!(
            records[0].description.as_deref(),
            Some("Only description")
        );
    }

    #[test]
    fn visible_predicate_filter_restricts_rows() {
        let options = RenderOptions {
            visible_predicates: Some(vec![DCT_TITLE.to_string()]),
            ..RenderOptions::default()
        };
        let records = render(
            vec![node(
                "http://example.org/a",
                vec![
                    (DCT_TITLE, vec![Value::literal("A")]),
                    (DCT_DESCRIPTION, vec![Value::literal("hidden")]),
                ],
            )],
            &options,
        );
        // About row + the one visible predicate.
        assert_eq!(records[0].attributes.len(), 2);
        assert_eq!(records[0].attributes[1].predicate_link, DCT_TITLE);
    }

    #[test]
    fn rendering_twice_is_identical() {
        let make = || {
            render(
                vec![
                    node(
                        "http://example.org/a",
                        vec![
                            (DCT_TITLE, vec![Value::literal("A")]),
                            (
                                "http://example.org/ns/relates",
                                vec![Value::named("http://example.org/b")],
                            ),
                        ],
                    ),
                    node(
                        "http://example.org/b",
                        vec![(DCT_TITLE, vec![Value::literal("B")])],
                    ),
                ],
                &RenderOptions::default(),
            )
        };
        assert_eq!(make(), make());
    }
}
