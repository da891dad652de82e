//! Renders OWL 2 ontologies as [Graphviz](https://graphviz.org/) DOT documents.
//!
//! Each named entity becomes a table node colored by its kind. Restrictions,
//! boolean combinations and complements become table nodes too, with the
//! anonymous expressions they contain expanded as nested tables. Edges draw
//! sub-class, equivalence, sub-property, typing and expression relations.
//!
//! The whole ontology is rendered, or only the closure of some entities with
//! [`Visualizer::with_entities`].
//!
//! # Example
//! ```
//! use oxdot::{RenderConfig, Setting, Visualizer};
//! use oxowl::OntologyParser;
//! use oxrdfio::RdfFormat;
//!
//! let ontology = OntologyParser::from_format(RdfFormat::Turtle).parse_slice(
//!     b"@prefix owl: <http://www.w3.org/2002/07/owl#> .
//!       @prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .
//!       @prefix ex: <http://example.com/> .
//!       ex:Dog a owl:Class ; rdfs:subClassOf ex:Animal .
//!       ex:Animal a owl:Class .
//!       ex:name a owl:DatatypeProperty ; rdfs:domain ex:Animal .",
//! )?;
//! let config = RenderConfig::builder()
//!     .set(Setting::ClassPropertiesMap, true)
//!     .build()?;
//! let dot = Visualizer::new(&ontology)
//!     .with_config(config)
//!     .with_entities(["ex:Dog"])
//!     .draw()?;
//! assert!(dot.contains("n1->n2[color=\"#CFA500\"];"));
//! assert!(dot.contains("<td bgcolor=\"#38A14A\">ex:name</td>"));
//! # Result::<_, Box<dyn std::error::Error>>::Ok(())
//! ```

mod class_properties;
mod config;
mod error;
pub mod literal;
mod registry;
mod render;
mod visualizer;

pub use class_properties::{ClassPropertyMap, DefaultClassPropertyMap};
pub use config::{RenderConfig, RenderConfigBuilder, Setting, SettingValue, ValueType};
pub use error::{ConfigError, RenderError};
pub use literal::{DefaultLiteralRenderer, LiteralRenderer};
pub use registry::{ClassSet, NodeId, NodeRegistry, NodeSet};
pub use visualizer::Visualizer;
