//! Schema data model extracted from an RDFS graph.
//!
//! A [`Schema`] is the pure-data result of walking an ontology graph: one
//! [`ClassDef`] per declared class and one [`PropertyDef`] per declared
//! property. The schema itself is inert; the class registry turns it into
//! constructible classes.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A class declaration (`rdf:type rdfs:Class`).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ClassDef {
    /// Full IRI of the class.
    pub iri: String,
    /// Local name (IRI fragment or last path segment).
    pub name: String,
    /// `rdfs:label`, if declared.
    pub label: Option<String>,
    /// `rdfs:comment`, if declared.
    pub comment: Option<String>,
    /// Full IRI of the single `rdfs:subClassOf` parent, if declared.
    pub parent: Option<String>,
}

/// What a property may hold, per its `rdfs:range`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Range {
    /// Values must be instances of this class or one of its descendants.
    Class(String),
    /// Values must be literals, optionally of a specific XSD datatype.
    /// `None` covers `rdfs:Literal` and plain string content.
    Literal {
        /// Required datatype IRI, if any.
        datatype: Option<String>,
    },
    /// No range declared; any value is accepted.
    Unconstrained,
}

/// A property declaration (`rdf:type rdf:Property` or an OWL property type).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PropertyDef {
    /// Full IRI of the property.
    pub iri: String,
    /// Local name, used as the constructor keyword and accessor name.
    pub name: String,
    /// `rdfs:label`, if declared.
    pub label: Option<String>,
    /// `rdfs:comment`, if declared.
    pub comment: Option<String>,
    /// Full IRI of the `rdfs:domain` class. `None` makes the property
    /// applicable to every class.
    pub domain: Option<String>,
    /// Declared `rdfs:range`.
    pub range: Range,
    /// Full IRI of the single `rdfs:subPropertyOf` parent, if declared.
    pub parent: Option<String>,
}

/// The set of class and property declarations extracted from a graph.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Schema {
    /// All declared classes, sorted by IRI.
    pub classes: Vec<ClassDef>,
    /// All properties: built-in annotation properties first, then declared
    /// properties sorted by IRI.
    pub properties: Vec<PropertyDef>,
}

impl Schema {
    /// Looks up a class by its full IRI.
    #[must_use]
    pub fn find_class(&self, iri: &str) -> Option<&ClassDef> {
        self.classes.iter().find(|c| c.iri == iri)
    }

    /// Looks up a class by its local name.
    #[must_use]
    pub fn class_named(&self, name: &str) -> Option<&ClassDef> {
        self.classes.iter().find(|c| c.name == name)
    }

    /// Looks up a property by its full IRI.
    #[must_use]
    pub fn find_property(&self, iri: &str) -> Option<&PropertyDef> {
        self.properties.iter().find(|p| p.iri == iri)
    }

    /// Looks up a property by its local name.
    #[must_use]
    pub fn property_named(&self, name: &str) -> Option<&PropertyDef> {
        self.properties.iter().find(|p| p.name == name)
    }

    /// Number of declared classes.
    #[must_use]
    pub fn class_count(&self) -> usize {
        self.classes.len()
    }

    /// Number of properties, built-ins included.
    #[must_use]
    pub fn property_count(&self) -> usize {
        self.properties.len()
    }
}

/// Returns the local name of an IRI: the fragment after `#`, or the last
/// path segment when there is no fragment.
#[must_use]
pub fn local_name(iri: &str) -> &str {
    iri.rsplit_once('#')
        .map(|(_, local)| local)
        .or_else(|| iri.rsplit_once('/').map(|(_, local)| local))
        .unwrap_or(iri)
}
