//! Shared fixture ontology used by the integration tests.
#![allow(dead_code)]

use rdfsmith::Ontology;

/// Ontology serialized in Turtle, using the RDFS vocabulary.
pub const RDFS_TURTLE_ONTOLOGY: &str = r#"
    @prefix rdf:  <http://www.w3.org/1999/02/22-rdf-syntax-ns#> .
    @prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .
    @prefix xsd:  <http://www.w3.org/2001/XMLSchema#> .
    @prefix ex:   <http://example.com/namespace#> .

    ex:Thing a rdfs:Class ;
        rdfs:label "Thing"@en ;
        rdfs:comment "Base class for all things"@en .
    ex:Organization a rdfs:Class ;
        rdfs:label "Organization"@en ;
        rdfs:comment "An organization such as a school, NGO, corporation, club, etc."@en ;
        rdfs:subClassOf ex:Thing .
    ex:Corporation a rdfs:Class ;
        rdfs:label "Corporation"@en ;
        rdfs:comment "A business corporation."@en ;
        rdfs:subClassOf ex:Organization .
    ex:GovernmentOrganization a rdfs:Class ;
        rdfs:label "Government Organization"@en ;
        rdfs:comment "A governmental organization or agency."@en ;
        rdfs:subClassOf ex:Organization .
    ex:Person a rdfs:Class ;
        rdfs:label "Person"@en ;
        rdfs:subClassOf ex:Thing .
    ex:Country a rdfs:Class ;
        rdfs:label "Country"@en ;
        rdfs:subClassOf ex:Thing .

    ex:value a rdf:Property ;
        rdfs:label "value"@en ;
        rdfs:range rdfs:Literal .
    ex:note a rdf:Property ;
        rdfs:label "note"@en .
    ex:currencyCode a rdf:Property ;
        rdfs:label "currencyCode"@en ;
        rdfs:domain ex:Country ;
        rdfs:range xsd:string .
    ex:hasEmployee a rdf:Property ;
        rdfs:label "hasEmployee"@en ;
        rdfs:domain ex:Organization ;
        rdfs:range ex:Person .
    ex:hasExecutive a rdf:Property ;
        rdfs:label "hasExecutive"@en ;
        rdfs:subPropertyOf ex:hasEmployee ;
        rdfs:domain ex:Organization ;
        rdfs:range ex:Person .
"#;

pub fn create_ontology() -> Ontology {
    Ontology::from_turtle(RDFS_TURTLE_ONTOLOGY).expect("fixture ontology must load")
}
