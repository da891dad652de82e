use crate::class_properties::{ClassPropertyMap, DefaultClassPropertyMap};
use crate::config::{RenderConfig, Setting};
use crate::error::RenderError;
use crate::literal::{DefaultLiteralRenderer, LiteralRenderer};
use crate::render::RenderSession;
use oxowl::{Ontology, PrefixMapping};
use std::io::{self, Write};

/// Renders an [`Ontology`] as a [Graphviz](https://graphviz.org/) DOT document.
///
/// ```
/// use oxdot::Visualizer;
/// use oxowl::OntologyParser;
/// use oxrdfio::RdfFormat;
///
/// let ontology = OntologyParser::from_format(RdfFormat::Turtle).parse_slice(
///     b"@prefix owl: <http://www.w3.org/2002/07/owl#> .
///       @prefix ex: <http://example.com/> .
///       ex:A a owl:Class .",
/// )?;
/// let dot = Visualizer::new(&ontology).draw()?;
/// assert!(dot.starts_with("digraph OWL {"));
/// assert!(dot.contains("<td>ex:A</td>"));
/// # Result::<_, Box<dyn std::error::Error>>::Ok(())
/// ```
#[must_use]
pub struct Visualizer<'a> {
    ontology: &'a Ontology,
    config: RenderConfig,
    prefixes: Option<PrefixMapping>,
    entities: Vec<String>,
    literals: Box<dyn LiteralRenderer + 'a>,
    class_properties: Option<Box<dyn ClassPropertyMap + 'a>>,
}

impl<'a> Visualizer<'a> {
    /// Renders the whole ontology with the default configuration and the ontology prefixes.
    pub fn new(ontology: &'a Ontology) -> Self {
        Self {
            ontology,
            config: RenderConfig::default(),
            prefixes: None,
            entities: Vec::new(),
            literals: Box::new(DefaultLiteralRenderer::default()),
            class_properties: None,
        }
    }

    pub fn with_config(mut self, config: RenderConfig) -> Self {
        self.config = config;
        self
    }

    /// Shortens IRIs with `prefixes` instead of the prefixes of the ontology.
    pub fn with_prefixes(mut self, prefixes: PrefixMapping) -> Self {
        self.prefixes = Some(prefixes);
        self
    }

    /// Only renders the given entities and the entities they are linked to.
    ///
    /// Entities are identified by their IRI or their prefixed name. Unknown ones are ignored.
    pub fn with_entities<S: Into<String>>(mut self, entities: impl IntoIterator<Item = S>) -> Self {
        self.entities = entities.into_iter().map(Into::into).collect();
        self
    }

    /// Uses a custom class-property map and enables the class-property tables.
    pub fn with_class_properties(mut self, class_properties: impl ClassPropertyMap + 'a) -> Self {
        self.class_properties = Some(Box::new(class_properties));
        self
    }

    pub fn with_literal_renderer(mut self, literals: impl LiteralRenderer + 'a) -> Self {
        self.literals = Box::new(literals);
        self
    }

    /// Renders the document into a string.
    pub fn draw(&self) -> Result<String, RenderError> {
        let out = self.write(Vec::new())?;
        String::from_utf8(out).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e).into())
    }

    /// Writes the document to `out` and returns it.
    ///
    /// On error, the written document is incomplete.
    pub fn write<W: Write>(&self, out: W) -> Result<W, RenderError> {
        let default_class_properties = DefaultClassPropertyMap;
        let class_properties: Option<&dyn ClassPropertyMap> = match &self.class_properties {
            Some(class_properties) => Some(class_properties.as_ref()),
            None if self.config.flag(Setting::ClassPropertiesMap) => {
                Some(&default_class_properties)
            }
            None => None,
        };
        let prefixes = self
            .prefixes
            .as_ref()
            .unwrap_or_else(|| self.ontology.prefixes());
        RenderSession::new(
            self.ontology,
            &self.config,
            prefixes,
            self.literals.as_ref(),
            class_properties,
            out,
        )
        .render(&self.entities)
    }
}
