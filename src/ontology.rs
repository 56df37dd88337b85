//! The ontology facade: Turtle in, constructible classes out.
//!
//! Loading is eager and happens once: parse the Turtle source into an
//! in-memory graph, extract the [`Schema`], build the [`ClassRegistry`].
//! The result is immutable; classes are reached by local name through
//! [`Ontology::class`].

use std::cell::Cell;
use std::path::Path;
use std::rc::Rc;

use sophia_api::prelude::*;
use sophia_inmem::graph::FastGraph;
use sophia_turtle::parser::turtle;

use crate::error::{InstanceError, SchemaError};
use crate::instance::Instance;
use crate::literal::Value;
use crate::loader;
use crate::model::{PropertyDef, Schema};
use crate::registry::ClassRegistry;

/// A loaded ontology: the schema plus the registry of generated classes.
#[derive(Debug)]
pub struct Ontology {
    schema: Schema,
    registry: Rc<ClassRegistry>,
    next_node: Cell<u64>,
}

impl Ontology {
    /// Loads an ontology from a Turtle document.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::Parse`] when the source is not valid Turtle,
    /// or any schema-level error from loading and registry building.
    pub fn from_turtle(source: &str) -> Result<Self, SchemaError> {
        let graph: FastGraph = turtle::parse_str(source)
            .collect_triples()
            .map_err(|e| SchemaError::Parse(e.to_string()))?;
        Self::from_graph(&graph)
    }

    /// Loads an ontology from an already-parsed graph.
    ///
    /// # Errors
    ///
    /// Returns a [`SchemaError`] when the graph's declarations are
    /// malformed (multiple parents, dangling domain/range, cycles).
    pub fn from_graph(graph: &FastGraph) -> Result<Self, SchemaError> {
        let schema = loader::load(graph)?;
        let registry = Rc::new(ClassRegistry::build(&schema)?);
        Ok(Self {
            schema,
            registry,
            next_node: Cell::new(0),
        })
    }

    /// Loads an ontology from a Turtle file on disk.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::Io`] when the file cannot be read, otherwise
    /// as [`Ontology::from_turtle`].
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SchemaError> {
        let source = std::fs::read_to_string(path)?;
        Self::from_turtle(&source)
    }

    /// The loaded schema, read-only.
    #[must_use]
    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Looks up a generated class by local name.
    #[must_use]
    pub fn class(&self, name: &str) -> Option<OntoClass<'_>> {
        self.registry
            .index_of_name(name)
            .map(|index| OntoClass {
                ontology: self,
                index,
            })
    }

    /// Local names of all generated classes, in schema order.
    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.registry.class_names()
    }

    fn mint_node(&self) -> String {
        let n = self.next_node.get() + 1;
        self.next_node.set(n);
        format!("b{n}")
    }
}

/// A generated class: the constructor surface for one [`crate::ClassDef`].
#[derive(Debug, Clone, Copy)]
pub struct OntoClass<'a> {
    ontology: &'a Ontology,
    index: usize,
}

impl OntoClass<'_> {
    /// Local name of the class.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.entry().def.name
    }

    /// Full IRI of the class.
    #[must_use]
    pub fn iri(&self) -> &str {
        &self.entry().def.iri
    }

    /// Properties applicable to this class: its own, inherited, and global.
    pub fn properties(&self) -> impl Iterator<Item = &PropertyDef> {
        self.entry().properties.values()
    }

    /// Creates an empty instance.
    #[must_use]
    pub fn instance(&self) -> Instance {
        Instance::new(
            Rc::clone(&self.ontology.registry),
            self.index,
            self.ontology.mint_node(),
        )
    }

    /// Creates an instance with an explicit IRI, used as the subject of its
    /// emitted statements.
    #[must_use]
    pub fn instance_with_iri(&self, iri: impl Into<String>) -> Instance {
        let instance = self.instance();
        instance.set_iri(iri);
        instance
    }

    /// Creates an instance and accumulates the given property values. Each
    /// name must match an applicable property, and each value must satisfy
    /// that property's range.
    ///
    /// # Errors
    ///
    /// Returns [`InstanceError::UnknownProperty`] for a name matching no
    /// applicable property, or [`InstanceError::RangeViolation`] for a
    /// value outside the property's range.
    pub fn create<'n>(
        &self,
        properties: impl IntoIterator<Item = (&'n str, Value)>,
    ) -> Result<Instance, InstanceError> {
        let instance = self.instance();
        for (name, value) in properties {
            instance.property(name)?.push(value)?;
        }
        Ok(instance)
    }

    fn entry(&self) -> &crate::registry::ClassEntry {
        self.ontology.registry.entry(self.index)
    }
}
