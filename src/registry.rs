//! Class registry: one descriptor per declared class.
//!
//! Built once from a [`Schema`], then shared read-only by every instance.
//! Each entry carries the class definition, its ancestry chain, and the map
//! of properties applicable to it: its own, those inherited through the
//! `rdfs:subClassOf` chain by domain match, and global (domain-less) ones.

use std::collections::HashMap;

use crate::error::SchemaError;
use crate::model::{ClassDef, PropertyDef, Schema};

/// A class descriptor: definition, ancestry, and applicable properties.
#[derive(Debug, Clone)]
pub struct ClassEntry {
    /// The class definition.
    pub def: ClassDef,
    /// Class IRIs from this class (first) up to the root of its
    /// `rdfs:subClassOf` chain (last).
    pub ancestry: Vec<String>,
    /// Applicable properties, keyed by local name.
    pub properties: HashMap<String, PropertyDef>,
}

/// Immutable lookup table of class descriptors, built from a [`Schema`].
#[derive(Debug, Default)]
pub struct ClassRegistry {
    entries: Vec<ClassEntry>,
    by_name: HashMap<String, usize>,
    by_iri: HashMap<String, usize>,
}

impl ClassRegistry {
    /// Builds the registry: resolves every ancestry chain and attaches the
    /// applicable property set to each class.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::CyclicClasses`] when an `rdfs:subClassOf`
    /// chain does not terminate.
    pub fn build(schema: &Schema) -> Result<Self, SchemaError> {
        let by_iri_def: HashMap<&str, &ClassDef> =
            schema.classes.iter().map(|c| (c.iri.as_str(), c)).collect();

        let mut registry = ClassRegistry::default();
        for class in &schema.classes {
            let ancestry = ancestry_of(class, &by_iri_def, schema.classes.len())?;
            let properties = schema
                .properties
                .iter()
                .filter(|p| match &p.domain {
                    None => true,
                    Some(domain) => ancestry.iter().any(|a| a == domain),
                })
                .map(|p| (p.name.clone(), p.clone()))
                .collect();

            let index = registry.entries.len();
            registry.by_name.insert(class.name.clone(), index);
            registry.by_iri.insert(class.iri.clone(), index);
            registry.entries.push(ClassEntry {
                def: class.clone(),
                ancestry,
                properties,
            });
        }
        Ok(registry)
    }

    /// Number of registered classes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Registered class local names, in schema order.
    pub fn class_names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.def.name.as_str())
    }

    pub(crate) fn entry(&self, index: usize) -> &ClassEntry {
        &self.entries[index]
    }

    pub(crate) fn index_of_name(&self, name: &str) -> Option<usize> {
        self.by_name.get(name).copied()
    }

    /// Whether the class at `index` is `ancestor_iri` itself or one of its
    /// descendants.
    pub(crate) fn is_subclass(&self, index: usize, ancestor_iri: &str) -> bool {
        self.entries[index].ancestry.iter().any(|a| a == ancestor_iri)
    }
}

/// Walks the parent chain of `class`, rejecting cycles. Parents missing
/// from the schema terminate the chain.
fn ancestry_of(
    class: &ClassDef,
    by_iri: &HashMap<&str, &ClassDef>,
    class_count: usize,
) -> Result<Vec<String>, SchemaError> {
    let mut chain = vec![class.iri.clone()];
    let mut current = class.parent.as_deref();
    while let Some(parent_iri) = current {
        if chain.iter().any(|c| c == parent_iri) || chain.len() > class_count {
            return Err(SchemaError::CyclicClasses(class.iri.clone()));
        }
        chain.push(parent_iri.to_owned());
        current = by_iri.get(parent_iri).and_then(|c| c.parent.as_deref());
    }
    Ok(chain)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Range;

    fn class(iri: &str, parent: Option<&str>) -> ClassDef {
        ClassDef {
            iri: format!("http://example.com/ns#{iri}"),
            name: iri.to_owned(),
            label: None,
            comment: None,
            parent: parent.map(|p| format!("http://example.com/ns#{p}")),
        }
    }

    fn property(name: &str, domain: Option<&str>) -> PropertyDef {
        PropertyDef {
            iri: format!("http://example.com/ns#{name}"),
            name: name.to_owned(),
            label: None,
            comment: None,
            domain: domain.map(|d| format!("http://example.com/ns#{d}")),
            range: Range::Unconstrained,
            parent: None,
        }
    }

    fn fixture() -> Schema {
        Schema {
            classes: vec![
                class("Thing", None),
                class("Organization", Some("Thing")),
                class("Corporation", Some("Organization")),
                class("Person", Some("Thing")),
            ],
            properties: vec![
                property("value", None),
                property("hasEmployee", Some("Organization")),
            ],
        }
    }

    #[test]
    fn ancestry_runs_to_the_root() {
        let registry = match ClassRegistry::build(&fixture()) {
            Ok(registry) => registry,
            Err(e) => unreachable!("build must succeed: {e}"),
        };
        let index = registry.index_of_name("Corporation");
        assert!(index.is_some());
        let Some(index) = index else { return };
        assert_eq!(registry.entry(index).ancestry.len(), 3);
        assert!(registry.is_subclass(index, "http://example.com/ns#Thing"));
        assert!(!registry.is_subclass(index, "http://example.com/ns#Person"));
    }

    #[test]
    fn subclasses_expose_every_parent_property() {
        let registry = match ClassRegistry::build(&fixture()) {
            Ok(registry) => registry,
            Err(e) => unreachable!("build must succeed: {e}"),
        };
        for name in ["Organization", "Corporation"] {
            let Some(index) = registry.index_of_name(name) else {
                unreachable!("class {name} must be registered");
            };
            let entry = registry.entry(index);
            assert!(entry.properties.contains_key("hasEmployee"), "{name}");
            assert!(entry.properties.contains_key("value"), "{name}");
        }
    }

    #[test]
    fn domain_bound_properties_stay_off_unrelated_classes() {
        let registry = match ClassRegistry::build(&fixture()) {
            Ok(registry) => registry,
            Err(e) => unreachable!("build must succeed: {e}"),
        };
        let Some(index) = registry.index_of_name("Person") else {
            unreachable!("Person must be registered");
        };
        let entry = registry.entry(index);
        assert!(!entry.properties.contains_key("hasEmployee"));
        assert!(entry.properties.contains_key("value"));
    }

    #[test]
    fn cyclic_subclassing_is_rejected() {
        let schema = Schema {
            classes: vec![class("A", Some("B")), class("B", Some("A"))],
            properties: vec![],
        };
        let result = ClassRegistry::build(&schema);
        assert!(matches!(result, Err(SchemaError::CyclicClasses(_))));
    }
}
