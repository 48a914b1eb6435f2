//! Well-known vocabulary IRIs used across the converter.

/// `rdf:type`.
pub const RDF_TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";
/// `rdf:about`, used for the synthetic self-reference row.
pub const RDF_ABOUT: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#about";
/// `rdfs:label`, the label-defining predicate harvested from vocabularies.
pub const RDFS_LABEL: &str = "http://www.w3.org/2000/01/rdf-schema#label";

/// `xsd:string`, the implied datatype of plain literals.
pub const XSD_STRING: &str = "http://www.w3.org/2001/XMLSchema#string";

/// `dct:title`.
pub const DCT_TITLE: &str = "http://purl.org/dc/terms/title";
/// `dct:description`.
pub const DCT_DESCRIPTION: &str = "http://purl.org/dc/terms/description";
/// `foaf:name`.
pub const FOAF_NAME: &str = "http://xmlns.com/foaf/0.1/name";

/// `dcat:Catalog`.
pub const DCAT_CATALOG: &str = "http://www.w3.org/ns/dcat#Catalog";
/// `dcat:Dataset`.
pub const DCAT_DATASET: &str = "http://www.w3.org/ns/dcat#Dataset";
/// `dcat:Distribution`.
pub const DCAT_DISTRIBUTION: &str = "http://www.w3.org/ns/dcat#Distribution";

/// Candidate predicates for a node title, in lookup order.
pub const TITLE_CANDIDATES: &[&str] = &[DCT_TITLE, FOAF_NAME];

/// Candidate predicates for a node description, in lookup order.
pub const DESCRIPTION_CANDIDATES: &[&str] = &[DCT_DESCRIPTION];

/// Node types rendered before everything else, in priority order.
/// Nodes whose type is absent from this list sort after all listed types.
pub const TYPE_PRIORITY: &[&str] = &[DCAT_CATALOG, DCAT_DATASET, DCAT_DISTRIBUTION];

/// Predicates that define a human-readable label in a fetched vocabulary.
pub const LABEL_PREDICATES: &[&str] = &[RDFS_LABEL];
