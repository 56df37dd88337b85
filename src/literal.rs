//! Literal values and the property value union.
//!
//! A [`Literal`] carries a lexical form plus an optional language tag or
//! datatype IRI; equality is by (lexical form, tag). A [`Value`] is anything
//! a property can accumulate: a literal or a reference to another instance.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::instance::Instance;
use crate::vocab;

/// The tag carried by a [`Literal`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum LiteralTag {
    /// No tag. Plain literals are coerced to a language-tagged form when
    /// accumulated into a string-ranged property.
    Plain,
    /// A language tag (e.g. `"en"`). Matching is case-sensitive.
    Lang(String),
    /// A datatype IRI (e.g. `xsd:double`).
    Datatype(String),
}

/// An RDF literal: a lexical form plus an optional language or datatype tag.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Literal {
    lexical: String,
    tag: LiteralTag,
}

impl Literal {
    /// Creates an untagged (plain) literal.
    pub fn new(lexical: impl Into<String>) -> Self {
        Self {
            lexical: lexical.into(),
            tag: LiteralTag::Plain,
        }
    }

    /// Creates a language-tagged literal.
    pub fn lang(lexical: impl Into<String>, tag: impl Into<String>) -> Self {
        Self {
            lexical: lexical.into(),
            tag: LiteralTag::Lang(tag.into()),
        }
    }

    /// Creates a datatype-tagged literal.
    pub fn typed(lexical: impl Into<String>, datatype: impl Into<String>) -> Self {
        Self {
            lexical: lexical.into(),
            tag: LiteralTag::Datatype(datatype.into()),
        }
    }

    /// The lexical form.
    #[must_use]
    pub fn lexical(&self) -> &str {
        &self.lexical
    }

    /// The tag.
    #[must_use]
    pub fn tag(&self) -> &LiteralTag {
        &self.tag
    }

    /// The language tag, if this literal carries one.
    #[must_use]
    pub fn language(&self) -> Option<&str> {
        match &self.tag {
            LiteralTag::Lang(tag) => Some(tag),
            _ => None,
        }
    }

    /// The datatype IRI, if this literal carries one.
    #[must_use]
    pub fn datatype(&self) -> Option<&str> {
        match &self.tag {
            LiteralTag::Datatype(iri) => Some(iri),
            _ => None,
        }
    }

    /// Parses the lexical form as an `f64`.
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        self.lexical.parse().ok()
    }

    /// Parses the lexical form as an `i64`.
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        self.lexical.parse().ok()
    }

    /// Parses the lexical form as a `bool`.
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        self.lexical.parse().ok()
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.tag {
            LiteralTag::Plain => write!(f, "\"{}\"", self.lexical),
            LiteralTag::Lang(tag) => write!(f, "\"{}\"@{}", self.lexical, tag),
            LiteralTag::Datatype(iri) => write!(f, "\"{}\"^^<{}>", self.lexical, iri),
        }
    }
}

impl From<&str> for Literal {
    fn from(lexical: &str) -> Self {
        Literal::new(lexical)
    }
}

impl From<String> for Literal {
    fn from(lexical: String) -> Self {
        Literal::new(lexical)
    }
}

impl From<f64> for Literal {
    fn from(value: f64) -> Self {
        Literal::typed(value.to_string(), vocab::XSD_DOUBLE)
    }
}

impl From<i64> for Literal {
    fn from(value: i64) -> Self {
        Literal::typed(value.to_string(), vocab::XSD_INTEGER)
    }
}

impl From<bool> for Literal {
    fn from(value: bool) -> Self {
        Literal::typed(value.to_string(), vocab::XSD_BOOLEAN)
    }
}

/// A value accumulated on an instance property: either a literal or a
/// reference to another [`Instance`].
#[derive(Debug, Clone)]
pub enum Value {
    /// A literal value.
    Literal(Literal),
    /// A reference to another instance.
    Object(Instance),
}

impl Value {
    /// Returns the literal if this value is one.
    #[must_use]
    pub fn as_literal(&self) -> Option<&Literal> {
        match self {
            Value::Literal(lit) => Some(lit),
            Value::Object(_) => None,
        }
    }

    /// Returns the referenced instance if this value is one.
    #[must_use]
    pub fn as_object(&self) -> Option<&Instance> {
        match self {
            Value::Literal(_) => None,
            Value::Object(instance) => Some(instance),
        }
    }
}

impl From<Literal> for Value {
    fn from(literal: Literal) -> Self {
        Value::Literal(literal)
    }
}

impl From<&str> for Value {
    fn from(lexical: &str) -> Self {
        Value::Literal(Literal::new(lexical))
    }
}

impl From<String> for Value {
    fn from(lexical: String) -> Self {
        Value::Literal(Literal::new(lexical))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Literal(Literal::from(value))
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Literal(Literal::from(value))
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Literal(Literal::from(value))
    }
}

impl From<Instance> for Value {
    fn from(instance: Instance) -> Self {
        Value::Object(instance)
    }
}

impl From<&Instance> for Value {
    fn from(instance: &Instance) -> Self {
        Value::Object(instance.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equality_is_by_lexical_form_and_tag() {
        assert_eq!(Literal::lang("hello", "en"), Literal::lang("hello", "en"));
        assert_ne!(Literal::lang("hello", "en"), Literal::lang("hello", "es"));
        assert_ne!(Literal::lang("hello", "en"), Literal::new("hello"));
    }

    #[test]
    fn numeric_conversions_round_trip() {
        let lit = Literal::from(156.4);
        assert_eq!(lit.lexical(), "156.4");
        assert_eq!(lit.datatype(), Some(vocab::XSD_DOUBLE));
        assert_eq!(lit.as_f64(), Some(156.4));

        let lit = Literal::from(42_i64);
        assert_eq!(lit.as_i64(), Some(42));
    }

    #[test]
    fn display_renders_tags() {
        assert_eq!(Literal::lang("hola", "es").to_string(), "\"hola\"@es");
        assert_eq!(Literal::new("x").to_string(), "\"x\"");
    }

    #[test]
    fn value_accessors_discriminate() {
        let value = Value::from("plain");
        assert!(value.as_literal().is_some());
        assert!(value.as_object().is_none());
    }
}
