//! Error taxonomy.
//!
//! [`SchemaError`] covers malformed ontologies (load/build time);
//! [`InstanceError`] covers programmer-input errors against a loaded
//! ontology (unknown constructor keywords, range violations). Both are
//! raised synchronously at the point of violation and name the offending
//! class or property.

use thiserror::Error;

/// A malformed ontology detected while loading a schema or building the
/// class registry.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// The Turtle source could not be parsed.
    #[error("failed to parse Turtle ontology: {0}")]
    Parse(String),

    /// Iterating the underlying graph failed.
    #[error("failed to iterate ontology graph: {0}")]
    Graph(String),

    /// A class declares more than one `rdfs:subClassOf` parent; the model
    /// is single-inheritance.
    #[error("class `{class}` declares more than one rdfs:subClassOf parent")]
    MultipleParents {
        /// IRI of the offending class.
        class: String,
    },

    /// A property declares a single-valued relation more than once.
    #[error("property `{property}` declares more than one rdfs:{relation}")]
    MultipleValues {
        /// IRI of the offending property.
        property: String,
        /// The relation declared twice (`domain`, `range`, or
        /// `subPropertyOf`).
        relation: &'static str,
    },

    /// A property's domain, range, or parent points at something the graph
    /// never declares.
    #[error("property `{property}` references undefined `{iri}` as its rdfs:{relation}")]
    UndefinedReference {
        /// IRI of the offending property.
        property: String,
        /// The dangling IRI.
        iri: String,
        /// The relation holding the dangling IRI.
        relation: &'static str,
    },

    /// The `rdfs:subClassOf` chain does not terminate.
    #[error("cyclic rdfs:subClassOf chain involving `{0}`")]
    CyclicClasses(String),

    /// The `rdfs:subPropertyOf` chain does not terminate.
    #[error("cyclic rdfs:subPropertyOf chain involving `{0}`")]
    CyclicProperties(String),

    /// The ontology source could not be read.
    #[error("failed to read ontology source: {0}")]
    Io(#[from] std::io::Error),
}

/// A violation of a loaded ontology's contract by instance-level code.
#[derive(Debug, Error)]
pub enum InstanceError {
    /// A constructor keyword or accessor name matches no property
    /// applicable to the class (neither declared on it, inherited from an
    /// ancestor, nor global).
    #[error("class `{class}` has no applicable property `{property}`")]
    UnknownProperty {
        /// Local name of the class.
        class: String,
        /// The unknown property name.
        property: String,
    },

    /// An accumulated value violates the property's declared range.
    #[error("property `{property}` cannot hold {found}: expected {expected}")]
    RangeViolation {
        /// Local name of the property.
        property: String,
        /// What the range allows.
        expected: String,
        /// What was accumulated instead.
        found: String,
    },
}
