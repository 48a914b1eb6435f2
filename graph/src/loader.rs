//! Turtle input loading.
//!
//! Adapts sophia's parsed triples into the crate's [`Statement`] model. The
//! rest of the pipeline never touches sophia types.

use std::path::Path;

use sophia_api::source::TripleSource;
use sophia_api::term::{Term, TermKind};
use sophia_api::triple::Triple;
use sophia_turtle::parser::turtle;

use crate::error::GraphError;
use crate::term::{Literal, Reference, Statement, Value};
use crate::vocab::XSD_STRING;

/// Parses a Turtle document into statements.
///
/// # Errors
///
/// Returns [`GraphError::Parse`] when the document is not valid Turtle; the
/// whole input is rejected.
pub fn parse_turtle(input: &str) -> Result<Vec<Statement>, GraphError> {
    let mut statements = Vec::new();
    turtle::parse_str(input)
        .try_for_each_triple(|triple| {
            let subject = reference_from(triple.s())?;
            let predicate = iri_from(triple.p())?;
            let object = value_from(triple.o())?;
            statements.push(Statement::new(subject, predicate, object));
            Ok::<(), GraphError>(())
        })
        .map_err(|err| GraphError::Parse(err.to_string()))?;
    Ok(statements)
}

/// Reads and parses a Turtle file.
///
/// # Errors
///
/// Returns [`GraphError::Io`] when the file cannot be read and
/// [`GraphError::Parse`] when its content is not valid Turtle.
pub fn load_path(path: &Path) -> Result<Vec<Statement>, GraphError> {
    let content = std::fs::read_to_string(path)?;
    parse_turtle(&content)
}

fn reference_from<T: Term>(term: T) -> Result<Reference, GraphError> {
    match term.kind() {
        TermKind::Iri => Ok(Reference::named(iri_from(term)?)),
        TermKind::BlankNode => {
            let label = term
                .bnode_id()
                .ok_or_else(|| GraphError::Parse("blank node term without label".to_string()))?;
            Ok(Reference::blank(label.as_str()))
        }
        other => Err(GraphError::Parse(format!(
            "unsupported reference term kind: {other:?}"
        ))),
    }
}

fn iri_from<T: Term>(term: T) -> Result<String, GraphError> {
    let iri = term
        .iri()
        .ok_or_else(|| GraphError::Parse("expected an IRI term".to_string()))?;
    Ok(iri.as_str().to_string())
}

fn value_from<T: Term>(term: T) -> Result<Value, GraphError> {
    match term.kind() {
        TermKind::Literal => {
            let text = term
                .lexical_form()
                .ok_or_else(|| GraphError::Parse("literal term without lexical form".to_string()))?
                .to_string();
            let language = term.language_tag().map(|tag| tag.as_str().to_string());
            // Plain literals carry xsd:string implicitly; recording it would
            // only add noise to every attribute row.
            let datatype = if language.is_some() {
                None
            } else {
                term.datatype()
                    .map(|datatype| datatype.as_str().to_string())
                    .filter(|datatype| datatype != XSD_STRING)
            };
            Ok(Value::Literal(Literal {
                text,
                language,
                datatype,
            }))
        }
        _ => reference_from(term).map(Value::Reference),
    }
}
