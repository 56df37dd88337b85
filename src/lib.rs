//! Dynamic object modeling over RDFS ontologies.
//!
//! Given a Turtle-serialized ontology, `rdfsmith` builds a registry of
//! class descriptors mirroring the `rdfs:subClassOf` hierarchy. Instances
//! of those classes are constructed with property values, every assignment
//! is validated against the declared `rdfs:domain` / `rdfs:range`, and an
//! instance's state can be re-emitted as RDF statements.
//!
//! # Entry Point
//!
//! ```
//! use rdfsmith::{Ontology, Value};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let turtle = r#"
//!     @prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .
//!     @prefix ex:   <http://example.com/ns#> .
//!
//!     ex:Organization a rdfs:Class .
//! "#;
//!
//! let ontology = Ontology::from_turtle(turtle)?;
//! let organization = ontology.class("Organization").ok_or("missing class")?;
//! let acme = organization.create([("label", Value::from("Acme Inc."))])?;
//!
//! assert_eq!(
//!     acme.property("label")?.lang("en"),
//!     Some(vec!["Acme Inc.".to_string()])
//! );
//! assert_eq!(acme.iter_rdf_statements().count(), 1);
//! # Ok(())
//! # }
//! ```
//!
//! # Statement emission
//!
//! ```
//! use rdfsmith::serializer::ntriples;
//! use rdfsmith::Ontology;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let ontology = Ontology::from_turtle(
//!     "@prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .
//!      <http://example.com/ns#Thing> a rdfs:Class .",
//! )?;
//! let thing = ontology.class("Thing").ok_or("missing class")?;
//! let statements: Vec<_> = thing.instance().iter_rdf_statements().collect();
//! let document = ntriples::to_ntriples(&statements);
//! assert!(document.ends_with(" .\n"));
//! # Ok(())
//! # }
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod error;
pub mod instance;
pub mod literal;
pub mod loader;
pub mod model;
pub mod ontology;
pub mod proxy;
pub mod registry;
pub mod serializer;
pub mod vocab;

pub use error::{InstanceError, SchemaError};
pub use instance::{Instance, Node, Statement};
pub use literal::{Literal, LiteralTag, Value};
pub use model::{ClassDef, PropertyDef, Range, Schema};
pub use ontology::{OntoClass, Ontology};
pub use proxy::PropertyProxy;
pub use registry::ClassRegistry;
