//! The conversion pipeline: statements in, document files out.

use std::collections::BTreeSet;
use std::path::Path;

use thiserror::Error;

use rdfdoc_graph::{loader, GraphError, GraphModel, Statement, TripleIndex};

use crate::html;
use crate::record::RenderRecord;
use crate::renderer::{DocumentRenderer, RenderOptions};
use crate::resolver::PredicateResolver;
use crate::writer;

/// The requested-language sentinel meaning "render whatever the input holds".
pub const ALL_LANGUAGES: &str = "all";

/// Errors produced by the conversion pipeline.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// The languages observed in the input differ from the requested set.
    /// The whole input is skipped; nothing is rendered for it.
    #[error("languages in {input} differ from the requested set (requested: {specified:?}, observed: {observed:?})")]
    LanguageMismatch {
        /// Input name the mismatch was detected in.
        input: String,
        /// Languages the caller asked for.
        specified: BTreeSet<String>,
        /// Languages actually observed on the input's literals.
        observed: BTreeSet<String>,
    },

    /// No input has been loaded yet.
    #[error("no input loaded")]
    NoInput,

    /// The input could not be ingested.
    #[error(transparent)]
    Graph(#[from] GraphError),

    /// Output files could not be written.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Converts one input graph at a time into a set of per-language documents.
///
/// The converter owns the [`PredicateResolver`]; loading further inputs into
/// the same converter reuses its label cache and fetch bookkeeping, which is
/// the intended pattern for multi-file and multi-language runs.
pub struct Converter {
    specified_languages: BTreeSet<String>,
    options: RenderOptions,
    resolver: PredicateResolver,
    graph: Option<GraphModel>,
    observed_languages: BTreeSet<String>,
    input_name: Option<String>,
}

impl Converter {
    /// Creates a converter for the requested languages. An empty request is
    /// treated as [`ALL_LANGUAGES`].
    #[must_use]
    pub fn new(
        languages: impl IntoIterator<Item = String>,
        options: RenderOptions,
        resolver: PredicateResolver,
    ) -> Self {
        let mut specified_languages: BTreeSet<String> = languages.into_iter().collect();
        if specified_languages.is_empty() {
            specified_languages.insert(ALL_LANGUAGES.to_string());
        }
        Converter {
            specified_languages,
            options,
            resolver,
            graph: None,
            observed_languages: BTreeSet::new(),
            input_name: None,
        }
    }

    /// Loads a Turtle file, replacing any previously loaded input.
    ///
    /// # Errors
    ///
    /// Returns [`ConvertError::Graph`] for unreadable or unparsable input and
    /// [`ConvertError::LanguageMismatch`] when the observed languages differ
    /// from a non-`all` request.
    pub fn load_file(&mut self, path: &Path) -> Result<(), ConvertError> {
        let name = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| "input".to_string());
        let statements = loader::load_path(path)?;
        self.load_statements(name, statements)
    }

    /// Loads an already-parsed statement collection, replacing any previously
    /// loaded input. `name` becomes the base name of the output files.
    ///
    /// # Errors
    ///
    /// Same contract as [`Converter::load_file`], minus the I/O.
    pub fn load_statements(
        &mut self,
        name: String,
        statements: Vec<Statement>,
    ) -> Result<(), ConvertError> {
        let mut index = TripleIndex::new();
        index.ingest(statements)?;

        let observed = index.languages_seen().clone();
        self.validate_languages(&name, &observed)?;

        self.graph = Some(GraphModel::build(index.into_nodes(), "en"));
        self.observed_languages = observed;
        self.input_name = Some(name);
        Ok(())
    }

    /// The languages the loaded input will be rendered in: every observed
    /// language, or `en` alone when no literal carried a tag.
    #[must_use]
    pub fn output_languages(&self) -> BTreeSet<String> {
        if self.observed_languages.is_empty() {
            let mut just_english = BTreeSet::new();
            just_english.insert("en".to_string());
            just_english
        } else {
            self.observed_languages.clone()
        }
    }

    /// Renders the loaded input for one language.
    ///
    /// # Errors
    ///
    /// Returns [`ConvertError::NoInput`] when nothing is loaded.
    pub fn records(&mut self, language: &str) -> Result<Vec<RenderRecord>, ConvertError> {
        let graph = self.graph.as_ref().ok_or(ConvertError::NoInput)?;
        let mut renderer = DocumentRenderer::new(graph, &mut self.resolver, &self.options);
        Ok(renderer.render(language))
    }

    /// Writes the document set for the loaded input.
    ///
    /// One `<base-name>.<language>.html` per output language, or a single
    /// `index.html` (rendered for `en`) in index mode; static assets are
    /// placed next to the pages.
    ///
    /// # Errors
    ///
    /// Returns [`ConvertError::NoInput`] when nothing is loaded and
    /// [`ConvertError::Other`] when the output cannot be written.
    pub fn output_html(&mut self, folder: &Path, index_mode: bool) -> Result<(), ConvertError> {
        let name = self.input_name.clone().ok_or(ConvertError::NoInput)?;

        if !folder.exists() {
            std::fs::create_dir_all(folder).map_err(|err| {
                ConvertError::Other(anyhow::Error::new(err).context(format!(
                    "Failed to create output directory: {}",
                    folder.display()
                )))
            })?;
        } else if !folder.is_dir() {
            return Err(ConvertError::Other(anyhow::anyhow!(
                "{} is not a directory",
                folder.display()
            )));
        }
        writer::write_assets(folder)?;

        if index_mode {
            let records = self.records("en")?;
            let page = html::render_page(&records, "en", &name);
            writer::write_page(&folder.join("index.html"), &page)?;
            return Ok(());
        }

        for language in self.output_languages() {
            tracing::debug!("rendering {name} for language {language}");
            let records = self.records(&language)?;
            let page = html::render_page(&records, &language, &name);
            writer::write_page(&folder.join(format!("{name}.{language}.html")), &page)?;
        }
        Ok(())
    }

    fn validate_languages(
        &self,
        input: &str,
        observed: &BTreeSet<String>,
    ) -> Result<(), ConvertError> {
        if self.specified_languages.contains(ALL_LANGUAGES) {
            return Ok(());
        }
        if *observed != self.specified_languages {
            return Err(ConvertError::LanguageMismatch {
                input: input.to_string(),
                specified: self.specified_languages.clone(),
                observed: observed.clone(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use anyhow::Result;
    use rdfdoc_graph::vocab::DCT_TITLE;
    use rdfdoc_graph::{Reference, Statement, Value};

    use super::*;
    use crate::resolver::VocabularyFetcher;

    struct OfflineFetcher;

    impl VocabularyFetcher for OfflineFetcher {
        fn fetch(&self, base_url: &str) -> Result<String> {
            anyhow::bail!("offline: {base_url}")
        }
    }

    fn converter(languages: &[&str]) -> Converter {
        Converter::new(
            languages.iter().map(|l| (*l).to_string()),
            RenderOptions::default(),
            PredicateResolver::new(Box::new(OfflineFetcher)),
        )
    }

    fn french_statements() -> Vec<Statement> {
        vec![Statement::new(
            Reference::named("http://example.org/a"),
            DCT_TITLE,
            Value::lang_literal("Titre", "fr"),
        )]
    }

    #[test]
    fn language_mismatch_fails_whole_input() {
        let mut converter = converter(&["en"]);
        let result = converter.load_statements("catalog".to_string(), french_statements());
        match result {
            Err(ConvertError::LanguageMismatch {
                specified,
                observed,
                ..
            }) => {
                assert!(specified.contains("en"));
                assert!(observed.contains("fr"));
            }
            other => panic!("expected a language mismatch, got {other:?}"),
        }
        // Nothing was loaded, so nothing can be rendered.
        assert!(matches!(
            converter.records("en"),
            Err(ConvertError::NoInput)
        ));
    }

    #[test]
    fn all_sentinel_disables_the_check() {
        let mut converter = converter(&["all"]);
        converter
            .load_statements("catalog".to_string(), french_statements())
            .unwrap();
        let languages: Vec<String> = converter.output_languages().into_iter().collect();
        assert_eq!(languages, vec!["fr".to_string()]);
    }

    #[test]
    fn untagged_input_defaults_to_english() {
        let mut converter = converter(&["all"]);
        converter
            .load_statements(
                "catalog".to_string(),
                vec![Statement::new(
                    Reference::named("http://example.org/a"),
                    DCT_TITLE,
                    Value::literal("Untagged"),
                )],
            )
            .unwrap();
        let languages: Vec<String> = converter.output_languages().into_iter().collect();
        assert_eq!(languages, vec!["en".to_string()]);
    }

    #[test]
    fn matching_request_is_accepted() {
        let mut converter = converter(&["fr"]);
        converter
            .load_statements("catalog".to_string(), french_statements())
            .unwrap();
        let records = converter.records("fr").unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].title.as_deref(), Some("Titre"));
    }
}
