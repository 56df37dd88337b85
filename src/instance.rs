//! Instances of generated classes and their RDF statement emission.
//!
//! An [`Instance`] is a cheaply clonable handle over shared state: cloning
//! it yields another handle to the same individual, and equality is handle
//! identity. All mutation goes through the property proxy accumulation
//! path.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::InstanceError;
use crate::literal::{Literal, Value};
use crate::proxy::PropertyProxy;
use crate::registry::ClassRegistry;
use crate::vocab;

/// A node of an emitted RDF statement.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Node {
    /// A named resource.
    Iri(String),
    /// A blank node label.
    Blank(String),
    /// A literal value.
    Literal(Literal),
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Iri(iri) => write!(f, "<{iri}>"),
            Node::Blank(label) => write!(f, "_:{label}"),
            Node::Literal(literal) => write!(f, "{literal}"),
        }
    }
}

/// One (subject, predicate, object) statement describing instance state.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Statement {
    /// Subject node: the instance's IRI or blank node id.
    pub subject: Node,
    /// Predicate IRI.
    pub predicate: String,
    /// Object node: a literal or the referenced instance's subject node.
    pub object: Node,
}

#[derive(Debug, Default)]
struct InstanceState {
    iri: Option<String>,
    values: HashMap<String, Vec<Value>>,
}

/// One individual of a generated class.
#[derive(Clone)]
pub struct Instance {
    registry: Rc<ClassRegistry>,
    class: usize,
    node: String,
    state: Rc<RefCell<InstanceState>>,
}

impl Instance {
    pub(crate) fn new(registry: Rc<ClassRegistry>, class: usize, node: String) -> Self {
        Self {
            registry,
            class,
            node,
            state: Rc::new(RefCell::new(InstanceState::default())),
        }
    }

    /// Local name of the instance's class.
    #[must_use]
    pub fn class_name(&self) -> &str {
        &self.registry.entry(self.class).def.name
    }

    /// Full IRI of the instance's class.
    #[must_use]
    pub fn class_iri(&self) -> &str {
        &self.registry.entry(self.class).def.iri
    }

    /// The stable blank node id minted at construction.
    #[must_use]
    pub fn node_id(&self) -> &str {
        &self.node
    }

    /// The explicit IRI attached to this instance, if any.
    #[must_use]
    pub fn iri(&self) -> Option<String> {
        self.state.borrow().iri.clone()
    }

    /// Attaches an explicit IRI; emitted statements then use it as the
    /// subject instead of the blank node id.
    pub fn set_iri(&self, iri: impl Into<String>) {
        self.state.borrow_mut().iri = Some(iri.into());
    }

    /// Returns the property proxy for `name`.
    ///
    /// # Errors
    ///
    /// Returns [`InstanceError::UnknownProperty`] when `name` matches no
    /// property applicable to this instance's class. Domain constraints
    /// surface here.
    pub fn property(&self, name: &str) -> Result<PropertyProxy, InstanceError> {
        match self.registry.entry(self.class).properties.get(name) {
            Some(def) => Ok(PropertyProxy::new(self.clone(), def.clone())),
            None => Err(InstanceError::UnknownProperty {
                class: self.class_name().to_owned(),
                property: name.to_owned(),
            }),
        }
    }

    /// Emits the instance's current state as RDF statements: exactly one
    /// `rdf:type` assertion, plus one statement per accumulated value.
    ///
    /// Values held under the built-in `rdfs:label` / `rdfs:comment`
    /// annotation properties are instance metadata and are not emitted, so
    /// an instance constructed with only a label yields a single statement.
    /// The iterator is finite and a fresh one is produced per call.
    #[must_use]
    pub fn iter_rdf_statements(&self) -> std::vec::IntoIter<Statement> {
        let subject = self.subject_node();
        let mut out = vec![Statement {
            subject: subject.clone(),
            predicate: vocab::RDF_TYPE.to_owned(),
            object: Node::Iri(self.class_iri().to_owned()),
        }];

        let entry = self.registry.entry(self.class);
        let state = self.state.borrow();
        let mut names: Vec<&String> = state.values.keys().collect();
        names.sort();
        for name in names {
            let Some(def) = entry.properties.get(name.as_str()) else {
                continue;
            };
            if def.iri == vocab::RDFS_LABEL || def.iri == vocab::RDFS_COMMENT {
                continue;
            }
            for value in &state.values[name.as_str()] {
                out.push(Statement {
                    subject: subject.clone(),
                    predicate: def.iri.clone(),
                    object: match value {
                        Value::Literal(literal) => Node::Literal(literal.clone()),
                        Value::Object(other) => other.subject_node(),
                    },
                });
            }
        }
        out.into_iter()
    }

    /// The subject node used in emitted statements.
    #[must_use]
    pub fn subject_node(&self) -> Node {
        match &self.state.borrow().iri {
            Some(iri) => Node::Iri(iri.clone()),
            None => Node::Blank(self.node.clone()),
        }
    }

    pub(crate) fn registry(&self) -> &Rc<ClassRegistry> {
        &self.registry
    }

    pub(crate) fn class_index(&self) -> usize {
        self.class
    }

    pub(crate) fn push_value(&self, name: &str, value: Value) {
        self.state
            .borrow_mut()
            .values
            .entry(name.to_owned())
            .or_default()
            .push(value);
    }

    pub(crate) fn values_of(&self, name: &str) -> Vec<Value> {
        self.state
            .borrow()
            .values
            .get(name)
            .cloned()
            .unwrap_or_default()
    }
}

/// Equality is handle identity: two handles are equal iff they refer to the
/// same individual.
impl PartialEq for Instance {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.state, &other.state)
    }
}

impl Eq for Instance {}

impl fmt::Debug for Instance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Instance")
            .field("class", &self.class_name())
            .field("node", &self.node)
            .field("iri", &self.state.borrow().iri)
            .finish()
    }
}
