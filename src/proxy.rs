//! Property proxies: the per-access accessor mediating reads and writes of
//! an instance's property values.
//!
//! A proxy is transient, reconstructed on each [`Instance::property`] call,
//! and holds only the owning instance handle plus the property definition.
//! Accumulation is the explicit [`PropertyProxy::push`] call;
//! there is deliberately no wholesale-replacement operation, so the only
//! way to change accumulated state is to add to it.

use crate::error::InstanceError;
use crate::instance::Instance;
use crate::literal::{Literal, LiteralTag, Value};
use crate::model::{local_name, PropertyDef, Range};
use crate::vocab;

/// Accessor bound to one (instance, property) pair.
#[derive(Debug, Clone)]
pub struct PropertyProxy {
    instance: Instance,
    def: PropertyDef,
}

impl PropertyProxy {
    pub(crate) fn new(instance: Instance, def: PropertyDef) -> Self {
        Self { instance, def }
    }

    /// Local name of the proxied property.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.def.name
    }

    /// Full IRI of the proxied property.
    #[must_use]
    pub fn iri(&self) -> &str {
        &self.def.iri
    }

    /// Validates `value` against the property's range and appends it to the
    /// instance's accumulated values. Returns the proxy so accumulations
    /// chain: `proxy.push(a)?.push(b)?`.
    ///
    /// When the property declares a literal range, plain (untagged) string
    /// literals are coerced on the way in: to a `"en"` language tag when
    /// the range calls for plain string content, or to the range's datatype
    /// otherwise. Tagged literals, numbers, and values on properties with
    /// no declared range pass through unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`InstanceError::RangeViolation`] when the range is a class
    /// and the value is not an instance of that class or one of its
    /// descendants, or when a literal meets a class range (and vice versa).
    pub fn push(self, value: impl Into<Value>) -> Result<Self, InstanceError> {
        let value = self.check(value.into())?;
        self.instance.push_value(&self.def.name, value);
        Ok(self)
    }

    /// Unfiltered snapshot of the accumulated values.
    #[must_use]
    pub fn values(&self) -> Vec<Value> {
        self.instance.values_of(&self.def.name)
    }

    /// Number of accumulated values.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values().len()
    }

    /// Whether nothing has been accumulated yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values().is_empty()
    }

    /// Lexical forms of the accumulated literals whose language tag equals
    /// `tag` (case-sensitive). Returns `None` when no accumulated value
    /// carries that tag. Non-mutating; repeated calls return the same set.
    #[must_use]
    pub fn lang(&self, tag: &str) -> Option<Vec<String>> {
        let hits: Vec<String> = self
            .values()
            .iter()
            .filter_map(Value::as_literal)
            .filter(|lit| lit.language() == Some(tag))
            .map(|lit| lit.lexical().to_owned())
            .collect();
        if hits.is_empty() {
            None
        } else {
            Some(hits)
        }
    }

    /// Membership test for object-valued properties: true iff `candidate`
    /// itself was accumulated on this property. Values accumulated on a
    /// sub-property are not visible here.
    #[must_use]
    pub fn contains(&self, candidate: &Instance) -> bool {
        self.values()
            .iter()
            .filter_map(Value::as_object)
            .any(|held| held == candidate)
    }

    fn check(&self, value: Value) -> Result<Value, InstanceError> {
        match (&self.def.range, value) {
            (Range::Class(range_iri), Value::Object(object)) => {
                let compatible = object
                    .registry()
                    .is_subclass(object.class_index(), range_iri);
                if compatible {
                    Ok(Value::Object(object))
                } else {
                    Err(self.range_violation(
                        format!("instances of `{}`", local_name(range_iri)),
                        format!("an instance of `{}`", object.class_name()),
                    ))
                }
            }
            (Range::Class(range_iri), Value::Literal(literal)) => Err(self.range_violation(
                format!("instances of `{}`", local_name(range_iri)),
                format!("the literal {literal}"),
            )),
            (Range::Literal { .. }, Value::Object(object)) => Err(self.range_violation(
                "literal values".to_owned(),
                format!("an instance of `{}`", object.class_name()),
            )),
            (Range::Literal { datatype }, Value::Literal(literal)) => {
                Ok(Value::Literal(coerce(literal, datatype.as_deref())))
            }
            (Range::Unconstrained, value) => Ok(value),
        }
    }

    fn range_violation(&self, expected: String, found: String) -> InstanceError {
        InstanceError::RangeViolation {
            property: self.def.name.clone(),
            expected,
            found,
        }
    }
}

/// Coerces a plain literal to a literal range's shape: language tag `"en"`
/// for plain string content, the range datatype otherwise. Tagged literals
/// are returned untouched.
fn coerce(literal: Literal, datatype: Option<&str>) -> Literal {
    if *literal.tag() != LiteralTag::Plain {
        return literal;
    }
    match datatype {
        None | Some(vocab::XSD_STRING) => Literal::lang(literal.lexical(), "en"),
        Some(datatype) => Literal::typed(literal.lexical(), datatype),
    }
}
