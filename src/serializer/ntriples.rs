//! N-Triples serializer for emitted instance statements.
//!
//! Produces a valid N-Triples document (one triple per line, absolute
//! IRIs). N-Triples is suitable for streaming, bulk loading, and
//! diff-friendly storage.

use crate::instance::{Node, Statement};
use crate::literal::LiteralTag;

/// Serializes statements to an N-Triples string.
#[must_use]
pub fn to_ntriples(statements: &[Statement]) -> String {
    let mut out = String::new();
    for statement in statements {
        node(&mut out, &statement.subject);
        out.push(' ');
        out.push('<');
        out.push_str(&statement.predicate);
        out.push('>');
        out.push(' ');
        node(&mut out, &statement.object);
        out.push_str(" .\n");
    }
    out
}

fn node(out: &mut String, n: &Node) {
    match n {
        Node::Iri(iri) => {
            out.push('<');
            out.push_str(iri);
            out.push('>');
        }
        Node::Blank(label) => {
            out.push_str("_:");
            out.push_str(label);
        }
        Node::Literal(literal) => {
            out.push('"');
            out.push_str(&escape(literal.lexical()));
            out.push('"');
            match literal.tag() {
                LiteralTag::Plain => {}
                LiteralTag::Lang(tag) => {
                    out.push('@');
                    out.push_str(tag);
                }
                LiteralTag::Datatype(iri) => {
                    out.push_str("^^<");
                    out.push_str(iri);
                    out.push('>');
                }
            }
        }
    }
}

fn escape(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
}
