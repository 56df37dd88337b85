//! RDF serializers.
//!
//! [`ntriples`] renders emitted instance statements; [`turtle`] re-emits a
//! loaded schema as a Turtle document.

pub mod ntriples;
pub mod turtle;
