//! Schema extraction from an in-memory RDF graph.
//!
//! [`load`] performs a pure read of the graph: class subjects, property
//! subjects, and their `rdfs:label` / `rdfs:comment` / `rdfs:subClassOf` /
//! `rdfs:domain` / `rdfs:range` / `rdfs:subPropertyOf` edges. Both the RDFS
//! vocabulary (`rdfs:Class`, `rdf:Property`) and the OWL property types are
//! recognized.

use std::collections::HashSet;

use sophia_api::ns::{rdf, rdfs, NsTerm};
use sophia_api::prelude::*;
use sophia_api::triple::Triple;
use sophia_inmem::graph::FastGraph;

use crate::error::SchemaError;
use crate::model::{local_name, ClassDef, PropertyDef, Range, Schema};
use crate::vocab;

/// Extracts a [`Schema`] from a parsed ontology graph.
///
/// The built-in annotation properties `rdfs:label` and `rdfs:comment` are
/// injected as global literal-ranged properties unless the graph declares
/// them itself, so every generated class accepts `label` and `comment`
/// keywords.
///
/// # Errors
///
/// Returns a [`SchemaError`] when a class declares multiple parents, a
/// property declares multiple domains/ranges/parents, a domain or range
/// points at an undeclared class, a `rdfs:subPropertyOf` chain is cyclic
/// or dangling, or iterating the graph fails.
pub fn load(graph: &FastGraph) -> Result<Schema, SchemaError> {
    let class_iris = subjects_of_type(graph, &[vocab::RDFS_CLASS, vocab::OWL_CLASS])?;
    let property_iris = subjects_of_type(
        graph,
        &[
            vocab::RDF_PROPERTY,
            vocab::OWL_OBJECT_PROPERTY,
            vocab::OWL_DATATYPE_PROPERTY,
            vocab::OWL_ANNOTATION_PROPERTY,
        ],
    )?;

    let declared_classes: HashSet<&str> = class_iris.iter().map(String::as_str).collect();
    let declared_properties: HashSet<&str> = property_iris.iter().map(String::as_str).collect();

    let mut classes = Vec::with_capacity(class_iris.len());
    for iri in &class_iris {
        classes.push(load_class(graph, iri, &declared_classes)?);
    }

    let mut properties = builtin_properties();
    properties.retain(|p| !declared_properties.contains(p.iri.as_str()));
    for iri in &property_iris {
        properties.push(load_property(
            graph,
            iri,
            &declared_classes,
            &declared_properties,
        )?);
    }
    check_property_chains(&properties)?;

    Ok(Schema {
        classes,
        properties,
    })
}

fn load_class(
    graph: &FastGraph,
    iri: &str,
    declared: &HashSet<&str>,
) -> Result<ClassDef, SchemaError> {
    let parents = iri_objects(graph, iri, &rdfs::subClassOf)?;
    // Parents pointing outside the graph (owl:Thing, external vocabularies)
    // terminate the chain rather than fail the load.
    let mut parents: Vec<String> = parents
        .into_iter()
        .filter(|p| declared.contains(p.as_str()))
        .collect();
    if parents.len() > 1 {
        return Err(SchemaError::MultipleParents {
            class: iri.to_owned(),
        });
    }
    Ok(ClassDef {
        iri: iri.to_owned(),
        name: local_name(iri).to_owned(),
        label: literal_object(graph, iri, &rdfs::label)?,
        comment: literal_object(graph, iri, &rdfs::comment)?,
        parent: parents.pop(),
    })
}

fn load_property(
    graph: &FastGraph,
    iri: &str,
    declared_classes: &HashSet<&str>,
    declared_properties: &HashSet<&str>,
) -> Result<PropertyDef, SchemaError> {
    let mut domains = iri_objects(graph, iri, &rdfs::domain)?;
    if domains.len() > 1 {
        return Err(SchemaError::MultipleValues {
            property: iri.to_owned(),
            relation: "domain",
        });
    }
    let domain = domains.pop();
    if let Some(d) = &domain {
        if !declared_classes.contains(d.as_str()) {
            return Err(SchemaError::UndefinedReference {
                property: iri.to_owned(),
                iri: d.clone(),
                relation: "domain",
            });
        }
    }

    let mut ranges = iri_objects(graph, iri, &rdfs::range)?;
    if ranges.len() > 1 {
        return Err(SchemaError::MultipleValues {
            property: iri.to_owned(),
            relation: "range",
        });
    }
    let range = match ranges.pop() {
        None => Range::Unconstrained,
        Some(r) if r == vocab::RDFS_LITERAL => Range::Literal { datatype: None },
        Some(r) if r.starts_with(vocab::XSD) => Range::Literal { datatype: Some(r) },
        Some(r) if declared_classes.contains(r.as_str()) => Range::Class(r),
        Some(r) => {
            return Err(SchemaError::UndefinedReference {
                property: iri.to_owned(),
                iri: r,
                relation: "range",
            })
        }
    };

    let mut parents = iri_objects(graph, iri, &rdfs::subPropertyOf)?;
    if parents.len() > 1 {
        return Err(SchemaError::MultipleValues {
            property: iri.to_owned(),
            relation: "subPropertyOf",
        });
    }
    let parent = parents.pop();
    if let Some(p) = &parent {
        if !declared_properties.contains(p.as_str()) {
            return Err(SchemaError::UndefinedReference {
                property: iri.to_owned(),
                iri: p.clone(),
                relation: "subPropertyOf",
            });
        }
    }

    Ok(PropertyDef {
        iri: iri.to_owned(),
        name: local_name(iri).to_owned(),
        label: literal_object(graph, iri, &rdfs::label)?,
        comment: literal_object(graph, iri, &rdfs::comment)?,
        domain,
        range,
        parent,
    })
}

/// Walks every `rdfs:subPropertyOf` chain to its root, rejecting cycles.
fn check_property_chains(properties: &[PropertyDef]) -> Result<(), SchemaError> {
    for property in properties {
        let mut seen = HashSet::new();
        seen.insert(property.iri.as_str());
        let mut current = property.parent.as_deref();
        while let Some(parent_iri) = current {
            if !seen.insert(parent_iri) {
                return Err(SchemaError::CyclicProperties(property.iri.clone()));
            }
            current = properties
                .iter()
                .find(|p| p.iri == parent_iri)
                .and_then(|p| p.parent.as_deref());
        }
    }
    Ok(())
}

/// The annotation properties every class accepts even when the ontology
/// does not declare them.
fn builtin_properties() -> Vec<PropertyDef> {
    let literal = |iri: &str| PropertyDef {
        iri: iri.to_owned(),
        name: local_name(iri).to_owned(),
        label: None,
        comment: None,
        domain: None,
        range: Range::Literal { datatype: None },
        parent: None,
    };
    vec![literal(vocab::RDFS_LABEL), literal(vocab::RDFS_COMMENT)]
}

/// Maps a graph-iteration failure into the schema error taxonomy.
fn graph_error(e: impl std::error::Error) -> SchemaError {
    SchemaError::Graph(e.to_string())
}

/// All IRI subjects carrying `rdf:type` of any of the given type IRIs,
/// deduplicated and sorted for deterministic schema order.
fn subjects_of_type(graph: &FastGraph, type_iris: &[&str]) -> Result<Vec<String>, SchemaError> {
    let mut seen = HashSet::new();
    let mut out = Vec::new();
    for type_iri in type_iris {
        let ty = IriRef::new_unchecked(*type_iri);
        for triple in graph.triples_matching(Any, [&rdf::type_], [ty]) {
            let triple = triple.map_err(graph_error)?;
            if let Some(subject) = triple.s().iri() {
                let subject = subject.as_str().to_owned();
                if seen.insert(subject.clone()) {
                    out.push(subject);
                }
            }
        }
    }
    out.sort();
    Ok(out)
}

/// All IRI objects of `(subject, predicate, ?)`, deduplicated and sorted.
fn iri_objects(
    graph: &FastGraph,
    subject: &str,
    predicate: &NsTerm<'static>,
) -> Result<Vec<String>, SchemaError> {
    let subject = IriRef::new_unchecked(subject);
    let mut out = Vec::new();
    for triple in graph.triples_matching([subject], [predicate], Any) {
        let triple = triple.map_err(graph_error)?;
        if let Some(object) = triple.o().iri() {
            out.push(object.as_str().to_owned());
        }
    }
    out.sort();
    out.dedup();
    Ok(out)
}

/// The first literal object of `(subject, predicate, ?)`, by sorted order.
fn literal_object(
    graph: &FastGraph,
    subject: &str,
    predicate: &NsTerm<'static>,
) -> Result<Option<String>, SchemaError> {
    let subject = IriRef::new_unchecked(subject);
    let mut out = Vec::new();
    for triple in graph.triples_matching([subject], [predicate], Any) {
        let triple = triple.map_err(graph_error)?;
        if let Some(lexical) = triple.o().lexical_form() {
            out.push(lexical.to_string());
        }
    }
    out.sort();
    out.truncate(1);
    Ok(out.pop())
}

#[cfg(test)]
mod tests {
    use super::*;
    use sophia_turtle::parser::turtle;

    fn graph_of(turtle_src: &str) -> FastGraph {
        match turtle::parse_str(turtle_src).collect_triples() {
            Ok(graph) => graph,
            Err(e) => unreachable!("fixture Turtle must parse: {e}"),
        }
    }

    const SMALL: &str = r#"
        @prefix rdf:  <http://www.w3.org/1999/02/22-rdf-syntax-ns#> .
        @prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .
        @prefix xsd:  <http://www.w3.org/2001/XMLSchema#> .
        @prefix ex:   <http://example.com/ns#> .

        ex:Thing a rdfs:Class ;
            rdfs:label "Thing"@en .
        ex:Organization a rdfs:Class ;
            rdfs:subClassOf ex:Thing .
        ex:Person a rdfs:Class ;
            rdfs:subClassOf ex:Thing .

        ex:value a rdf:Property ;
            rdfs:range rdfs:Literal .
        ex:hasEmployee a rdf:Property ;
            rdfs:domain ex:Organization ;
            rdfs:range ex:Person .
        ex:hasExecutive a rdf:Property ;
            rdfs:subPropertyOf ex:hasEmployee ;
            rdfs:domain ex:Organization ;
            rdfs:range ex:Person .
        ex:currencyCode a rdf:Property ;
            rdfs:range xsd:string .
    "#;

    #[test]
    fn loads_classes_with_labels_and_parents() {
        let schema = match load(&graph_of(SMALL)) {
            Ok(schema) => schema,
            Err(e) => unreachable!("load must succeed: {e}"),
        };
        assert_eq!(schema.class_count(), 3);

        let thing = schema.class_named("Thing");
        assert!(thing.is_some_and(|c| c.label.as_deref() == Some("Thing")));
        assert!(thing.is_some_and(|c| c.parent.is_none()));

        let organization = schema.class_named("Organization");
        assert!(
            organization.is_some_and(|c| c.parent.as_deref() == Some("http://example.com/ns#Thing"))
        );
    }

    #[test]
    fn loads_property_domains_ranges_and_parents() {
        let schema = match load(&graph_of(SMALL)) {
            Ok(schema) => schema,
            Err(e) => unreachable!("load must succeed: {e}"),
        };

        let has_employee = schema.property_named("hasEmployee");
        assert!(has_employee.is_some_and(|p| {
            p.domain.as_deref() == Some("http://example.com/ns#Organization")
                && p.range == Range::Class("http://example.com/ns#Person".to_owned())
        }));

        let has_executive = schema.property_named("hasExecutive");
        assert!(has_executive
            .is_some_and(|p| p.parent.as_deref() == Some("http://example.com/ns#hasEmployee")));

        let value = schema.property_named("value");
        assert!(value.is_some_and(|p| p.range == Range::Literal { datatype: None }));

        let currency = schema.property_named("currencyCode");
        assert!(currency.is_some_and(|p| {
            p.range
                == Range::Literal {
                    datatype: Some(vocab::XSD_STRING.to_owned()),
                }
        }));
    }

    #[test]
    fn injects_builtin_annotation_properties() {
        let schema = match load(&graph_of(SMALL)) {
            Ok(schema) => schema,
            Err(e) => unreachable!("load must succeed: {e}"),
        };
        assert!(schema.property_named("label").is_some());
        assert!(schema.property_named("comment").is_some());
    }

    #[test]
    fn multiple_parents_are_rejected() {
        let src = r#"
            @prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .
            @prefix ex:   <http://example.com/ns#> .
            ex:A a rdfs:Class .
            ex:B a rdfs:Class .
            ex:C a rdfs:Class ;
                rdfs:subClassOf ex:A ;
                rdfs:subClassOf ex:B .
        "#;
        let result = load(&graph_of(src));
        assert!(matches!(result, Err(SchemaError::MultipleParents { .. })));
    }

    #[test]
    fn undefined_range_is_rejected() {
        let src = r#"
            @prefix rdf:  <http://www.w3.org/1999/02/22-rdf-syntax-ns#> .
            @prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .
            @prefix ex:   <http://example.com/ns#> .
            ex:A a rdfs:Class .
            ex:knows a rdf:Property ;
                rdfs:domain ex:A ;
                rdfs:range ex:Undeclared .
        "#;
        let result = load(&graph_of(src));
        assert!(matches!(
            result,
            Err(SchemaError::UndefinedReference { relation: "range", .. })
        ));
    }

    #[test]
    fn undefined_domain_is_rejected() {
        let src = r#"
            @prefix rdf:  <http://www.w3.org/1999/02/22-rdf-syntax-ns#> .
            @prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .
            @prefix ex:   <http://example.com/ns#> .
            ex:A a rdfs:Class .
            ex:knows a rdf:Property ;
                rdfs:domain ex:Undeclared ;
                rdfs:range ex:A .
        "#;
        let result = load(&graph_of(src));
        assert!(matches!(
            result,
            Err(SchemaError::UndefinedReference { relation: "domain", .. })
        ));
    }

    #[test]
    fn cyclic_sub_properties_are_rejected() {
        let src = r#"
            @prefix rdf:  <http://www.w3.org/1999/02/22-rdf-syntax-ns#> .
            @prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .
            @prefix ex:   <http://example.com/ns#> .
            ex:p a rdf:Property ; rdfs:subPropertyOf ex:q .
            ex:q a rdf:Property ; rdfs:subPropertyOf ex:p .
        "#;
        let result = load(&graph_of(src));
        assert!(matches!(result, Err(SchemaError::CyclicProperties(_))));
    }

    #[test]
    fn external_parents_terminate_the_chain() {
        let src = r#"
            @prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .
            @prefix owl:  <http://www.w3.org/2002/07/owl#> .
            @prefix ex:   <http://example.com/ns#> .
            ex:A a rdfs:Class ;
                rdfs:subClassOf owl:Thing .
        "#;
        let schema = match load(&graph_of(src)) {
            Ok(schema) => schema,
            Err(e) => unreachable!("load must succeed: {e}"),
        };
        assert!(schema.class_named("A").is_some_and(|c| c.parent.is_none()));
    }
}
