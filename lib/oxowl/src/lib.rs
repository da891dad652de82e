//! Structural view of OWL 2 ontologies encoded in RDF.
//!
//! This crate provides a read-only structural view of an OWL 2 ontology
//! encoded in RDF:
//! - Entity classification (classes, datatypes, properties, individuals), built-ins included
//! - Anonymous class expressions (restrictions, boolean combinations, complements)
//! - Relationship queries (super-classes, equivalents, domains, ranges, chains)
//! - Prefix mappings to shorten IRIs
//! - Loading from any RDF syntax supported by `oxrdfio`
//!
//! # Example
//! ```
//! use oxowl::{ClassExpression, EntityKind, OntologyParser};
//! use oxrdfio::RdfFormat;
//!
//! let ontology = OntologyParser::from_format(RdfFormat::Turtle).parse_slice(
//!     b"@prefix owl: <http://www.w3.org/2002/07/owl#> .
//!       @prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .
//!       @prefix ex: <http://example.com/> .
//!       ex:Dog a owl:Class ; rdfs:subClassOf [ owl:unionOf ( ex:Animal ex:Toy ) ] .",
//! )?;
//! let dog = ontology.entities(EntityKind::Class).next().unwrap();
//! let parent = ontology.super_classes(&dog.into()).next().unwrap();
//! assert_eq!(ontology.expression(parent).and_then(ClassExpression::name), Some("UnionOf"));
//! # Result::<_, Box<dyn std::error::Error>>::Ok(())
//! ```

mod entity;
mod error;
mod expression;
mod ontology;
mod parser;
mod prefixes;
pub mod vocab;

pub use entity::{EntityKind, EntityRef};
pub use error::{LoadError, PrefixError};
pub use expression::{ClassExpression, Components, ComponentsKind, Restriction, RestrictionKind};
pub use ontology::Ontology;
pub use parser::OntologyParser;
pub use prefixes::PrefixMapping;
