//! Core statement types: values, references, and statements.
//!
//! These types are the read-only input of the whole pipeline. A parsed graph
//! is a flat collection of [`Statement`]s; everything downstream (the triple
//! index, node models, rendering) consumes them without mutation.

/// Whether a reference points at a named resource or an anonymous (blank) node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum RefKind {
    /// A named resource, identified by an IRI.
    Named,
    /// An anonymous node, identified by a graph-local blank node label.
    Blank,
}

/// A reference to another node, either named or blank.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Reference {
    /// The identifier: an IRI for named references, a blank node label otherwise.
    pub id: String,
    /// Named or blank.
    pub kind: RefKind,
}

impl Reference {
    /// Creates a named reference from an IRI.
    pub fn named(id: impl Into<String>) -> Self {
        Reference {
            id: id.into(),
            kind: RefKind::Named,
        }
    }

    /// Creates a blank-node reference from a label.
    pub fn blank(id: impl Into<String>) -> Self {
        Reference {
            id: id.into(),
            kind: RefKind::Blank,
        }
    }
}

/// A literal value, possibly tagged with a language or a datatype IRI.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Literal {
    /// The lexical form.
    pub text: String,
    /// Language tag (e.g. `"en"`), if any.
    pub language: Option<String>,
    /// Datatype IRI, if any. Never set together with a language tag.
    pub datatype: Option<String>,
}

/// An object value in a statement: a literal or a reference.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum Value {
    /// A literal value.
    Literal(Literal),
    /// A reference to another node.
    Reference(Reference),
}

impl Value {
    /// Creates an untagged literal value.
    pub fn literal(text: impl Into<String>) -> Self {
        Value::Literal(Literal {
            text: text.into(),
            language: None,
            datatype: None,
        })
    }

    /// Creates a language-tagged literal value.
    pub fn lang_literal(text: impl Into<String>, language: impl Into<String>) -> Self {
        Value::Literal(Literal {
            text: text.into(),
            language: Some(language.into()),
            datatype: None,
        })
    }

    /// Creates a named-reference value.
    pub fn named(id: impl Into<String>) -> Self {
        Value::Reference(Reference::named(id))
    }

    /// Creates a blank-reference value.
    pub fn blank(id: impl Into<String>) -> Self {
        Value::Reference(Reference::blank(id))
    }

    /// Returns the literal if this value is one.
    #[must_use]
    pub fn as_literal(&self) -> Option<&Literal> {
        match self {
            Value::Literal(lit) => Some(lit),
            Value::Reference(_) => None,
        }
    }

    /// Returns the reference if this value is one.
    #[must_use]
    pub fn as_reference(&self) -> Option<&Reference> {
        match self {
            Value::Literal(_) => None,
            Value::Reference(reference) => Some(reference),
        }
    }
}

/// A single subject–predicate–object fact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statement {
    /// The subject: always a reference.
    pub subject: Reference,
    /// The predicate IRI.
    pub predicate: String,
    /// The object value.
    pub object: Value,
}

impl Statement {
    /// Creates a statement.
    pub fn new(subject: Reference, predicate: impl Into<String>, object: Value) -> Self {
        Statement {
            subject,
            predicate: predicate.into(),
            object,
        }
    }
}
