//! Turtle serializer for a loaded schema.
//!
//! Re-emits the class and property declarations as a Turtle document that
//! the loader can read back. Built-in annotation properties are skipped;
//! they are injected on load, not part of the source ontology.

use crate::model::{Range, Schema};
use crate::vocab;

/// Serializes a schema to a Turtle string.
#[must_use]
pub fn to_turtle(schema: &Schema) -> String {
    let mut out = String::new();
    out.push_str("@prefix rdf:  <http://www.w3.org/1999/02/22-rdf-syntax-ns#> .\n");
    out.push_str("@prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .\n");
    out.push_str("@prefix xsd:  <http://www.w3.org/2001/XMLSchema#> .\n");
    out.push('\n');

    for class in &schema.classes {
        out.push_str(&format!("<{}>\n  a rdfs:Class ;\n", class.iri));
        if let Some(label) = &class.label {
            out.push_str(&format!("  rdfs:label {} ;\n", turtle_string(label)));
        }
        if let Some(comment) = &class.comment {
            out.push_str(&format!("  rdfs:comment {} ;\n", turtle_string(comment)));
        }
        if let Some(parent) = &class.parent {
            out.push_str(&format!("  rdfs:subClassOf <{parent}> ;\n"));
        }
        close_stanza(&mut out);
    }

    for property in &schema.properties {
        if property.iri.starts_with(vocab::RDFS) {
            continue;
        }
        out.push_str(&format!("<{}>\n  a rdf:Property ;\n", property.iri));
        if let Some(label) = &property.label {
            out.push_str(&format!("  rdfs:label {} ;\n", turtle_string(label)));
        }
        if let Some(comment) = &property.comment {
            out.push_str(&format!("  rdfs:comment {} ;\n", turtle_string(comment)));
        }
        if let Some(domain) = &property.domain {
            out.push_str(&format!("  rdfs:domain <{domain}> ;\n"));
        }
        match &property.range {
            Range::Class(iri) => out.push_str(&format!("  rdfs:range <{iri}> ;\n")),
            Range::Literal { datatype: Some(dt) } => {
                out.push_str(&format!("  rdfs:range <{dt}> ;\n"));
            }
            Range::Literal { datatype: None } => {
                out.push_str("  rdfs:range rdfs:Literal ;\n");
            }
            Range::Unconstrained => {}
        }
        if let Some(parent) = &property.parent {
            out.push_str(&format!("  rdfs:subPropertyOf <{parent}> ;\n"));
        }
        close_stanza(&mut out);
    }

    out
}

/// Replaces the trailing ` ;\n` of the last predicate line with ` .\n`.
fn close_stanza(out: &mut String) {
    if out.ends_with(" ;\n") {
        out.truncate(out.len() - 3);
        out.push_str(" .\n\n");
    }
}

fn turtle_string(s: &str) -> String {
    let escaped = s.replace('\\', "\\\\").replace('"', "\\\"");
    format!("\"{escaped}\"")
}
