//! Integration tests for the structural ontology view.

use oxowl::{
    ClassExpression, ComponentsKind, EntityKind, Ontology, OntologyParser, RestrictionKind,
};
use oxrdf::vocab::rdfs;
use oxrdf::{NamedNode, Term};
use oxrdfio::RdfFormat;

const PREFIXES: &str = "@prefix owl: <http://www.w3.org/2002/07/owl#> .
@prefix rdf: <http://www.w3.org/1999/02/22-rdf-syntax-ns#> .
@prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .
@prefix xsd: <http://www.w3.org/2001/XMLSchema#> .
@prefix ex: <http://example.com/> .
";

fn parse(body: &str) -> Ontology {
    OntologyParser::from_format(RdfFormat::Turtle)
        .parse_slice(format!("{PREFIXES}{body}").as_bytes())
        .unwrap()
}

fn ex(local: &str) -> Term {
    NamedNode::new(format!("http://example.com/{local}"))
        .unwrap()
        .into()
}

fn super_expression<'a>(ontology: &'a Ontology, class: &str) -> &'a ClassExpression {
    let parent = ontology.super_classes(&ex(class)).next().unwrap();
    ontology.expression(parent).unwrap()
}

#[test]
fn test_entity_collections_are_sorted() {
    let ontology = parse(
        "ex:B a owl:Class . ex:A a owl:Class . ex:p a owl:ObjectProperty .
         ex:d a owl:DatatypeProperty . ex:l a owl:AnnotationProperty .
         ex:T a rdfs:Datatype . ex:i a owl:NamedIndividual .",
    );
    let classes = ontology
        .entities(EntityKind::Class)
        .map(|e| e.iri().as_str().to_owned())
        .collect::<Vec<_>>();
    assert_eq!(classes, ["http://example.com/A", "http://example.com/B"]);
    for kind in EntityKind::ALL {
        if kind != EntityKind::Class {
            assert_eq!(ontology.entities(kind).count(), 1, "{kind}");
        }
    }
}

#[test]
fn test_data_restriction_on_builtin_property() {
    let ontology = parse(
        "ex:A a owl:Class ; rdfs:subClassOf [
            a owl:Restriction ;
            owl:onProperty owl:topDataProperty ;
            owl:maxQualifiedCardinality \"1\"^^xsd:nonNegativeInteger ;
            owl:onDataRange rdfs:Literal
        ] .",
    );
    let restriction = super_expression(&ontology, "A").as_restriction().unwrap();
    assert_eq!(restriction.kind, RestrictionKind::DataMaxCardinality);
    assert_eq!(restriction.cardinality, Some(1));
    assert_eq!(restriction.value, Term::from(rdfs::LITERAL));
}

#[test]
fn test_object_restrictions() {
    let ontology = parse(
        "ex:p a owl:ObjectProperty .
         ex:A rdfs:subClassOf [ a owl:Restriction ; owl:onProperty ex:p ; owl:someValuesFrom ex:B ] .
         ex:C rdfs:subClassOf [ a owl:Restriction ; owl:onProperty ex:p ; owl:hasValue ex:i ] .
         ex:D rdfs:subClassOf [ a owl:Restriction ; owl:onProperty ex:p ; owl:cardinality 2 ] .",
    );
    assert_eq!(
        super_expression(&ontology, "A").name(),
        Some("ObjectSomeValuesFrom")
    );
    assert_eq!(super_expression(&ontology, "C").name(), Some("ObjectHasValue"));
    let exact = super_expression(&ontology, "D").as_restriction().unwrap();
    assert_eq!(exact.kind, RestrictionKind::ObjectExactCardinality);
    assert_eq!(exact.value, Term::from(oxowl::vocab::owl::THING));
}

#[test]
fn test_literal_value_makes_a_data_restriction() {
    let ontology = parse(
        "ex:A rdfs:subClassOf [ a owl:Restriction ; owl:onProperty ex:undeclared ; owl:hasValue \"x\" ] .",
    );
    assert_eq!(super_expression(&ontology, "A").name(), Some("DataHasValue"));
}

#[test]
fn test_components() {
    let ontology = parse(
        "ex:A owl:equivalentClass [ owl:intersectionOf ( ex:B ex:C ) ] .
         ex:D rdfs:subClassOf [ owl:oneOf ( ex:i ex:j ex:k ) ] .",
    );
    let equivalent = ontology.equivalent_classes(&ex("A")).next().unwrap();
    assert_eq!(
        ontology
            .expression(equivalent)
            .and_then(|e| e.members_of(ComponentsKind::IntersectionOf)),
        Some([ex("B"), ex("C")].as_slice())
    );
    assert_eq!(
        super_expression(&ontology, "D")
            .members_of(ComponentsKind::OneOf)
            .map(<[Term]>::len),
        Some(3)
    );
}

#[test]
fn test_unsupported_expressions() {
    let ontology = parse(
        "ex:A rdfs:subClassOf [ a owl:Restriction ; owl:onProperty ex:p ; owl:hasSelf true ] .
         ex:B rdfs:subClassOf [ owl:unionOf ex:notAList ] .
         ex:C rdfs:subClassOf [ rdfs:label \"nothing\" ] .",
    );
    for class in ["A", "B", "C"] {
        assert_eq!(
            super_expression(&ontology, class),
            &ClassExpression::Unsupported,
            "{class}"
        );
    }
}

#[test]
fn test_data_range_is_not_a_class_expression() {
    let ontology = parse(
        "ex:A rdfs:subClassOf [ a owl:Restriction ; owl:onProperty ex:d ;
             owl:someValuesFrom [ a rdfs:Datatype ; owl:unionOf ( xsd:int xsd:long ) ] ] .",
    );
    let restriction = super_expression(&ontology, "A").as_restriction().unwrap();
    assert_eq!(restriction.kind, RestrictionKind::DataSomeValuesFrom);
    assert!(ontology.expression(&restriction.value).is_none());
    assert!(!ontology.is_class(&restriction.value));
}

#[test]
fn test_relationship_queries() {
    let ontology = parse(
        "ex:p a owl:ObjectProperty ; rdfs:domain ex:A ; rdfs:range ex:B .
         ex:q a owl:ObjectProperty ; owl:inverseOf ex:p ; rdfs:subPropertyOf ex:p .
         ex:r a owl:ObjectProperty ; owl:propertyChainAxiom ( ex:p ex:q ) .
         ex:x rdfs:domain ex:A .",
    );
    assert_eq!(
        ontology.properties_with_domain(&ex("A")).collect::<Vec<_>>(),
        [&ex("p")]
    );
    assert_eq!(ontology.ranges(&ex("p")).collect::<Vec<_>>(), [&ex("B")]);
    assert_eq!(ontology.sub_properties(&ex("p")).collect::<Vec<_>>(), [&ex("q")]);
    assert_eq!(ontology.super_properties(&ex("q")).collect::<Vec<_>>(), [&ex("p")]);
    let chains = ontology.property_chains().collect::<Vec<_>>();
    assert_eq!(chains, [(&ex("r"), vec![ex("p"), ex("q")])]);
}

#[test]
fn test_document_prefixes_are_kept() {
    let ontology = parse("ex:A a owl:Class .");
    assert_eq!(
        ontology.prefixes().short_form("http://example.com/A"),
        "ex:A"
    );
}

#[test]
fn test_syntax_error() {
    assert!(
        OntologyParser::from_format(RdfFormat::Turtle)
            .parse_slice(b"ex:A a")
            .is_err()
    );
}
