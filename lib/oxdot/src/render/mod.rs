//! DOT rendering of an ontology.
//!
//! A [`RenderSession`] owns the state of a single render: the output, the node
//! identities and, in filtered mode, the reachability closure.

mod entity;
mod expression;
mod link;
mod scope;
mod writer;

use crate::class_properties::ClassPropertyMap;
use crate::config::RenderConfig;
use crate::error::RenderError;
use crate::literal::{LiteralRenderer, escape};
use crate::registry::{NodeRegistry, NodeSet};
use oxowl::{Ontology, PrefixMapping};
use oxrdf::Term;
use scope::Closure;
use std::io::Write;
use tracing::debug;
use writer::DotWriter;

pub(crate) struct RenderSession<'a, W: Write> {
    ontology: &'a Ontology,
    config: &'a RenderConfig,
    prefixes: &'a PrefixMapping,
    literals: &'a dyn LiteralRenderer,
    class_properties: Option<&'a dyn ClassPropertyMap>,
    out: DotWriter<W>,
    registry: NodeRegistry,
    /// Expressions that already have a node.
    expressions: NodeSet,
    /// Set in filtered mode only.
    closure: Option<Closure>,
}

impl<'a, W: Write> RenderSession<'a, W> {
    pub(crate) fn new(
        ontology: &'a Ontology,
        config: &'a RenderConfig,
        prefixes: &'a PrefixMapping,
        literals: &'a dyn LiteralRenderer,
        class_properties: Option<&'a dyn ClassPropertyMap>,
        out: W,
    ) -> Self {
        Self {
            ontology,
            config,
            prefixes,
            literals,
            class_properties,
            out: DotWriter::new(out),
            registry: NodeRegistry::new(),
            expressions: NodeSet::new(),
            closure: None,
        }
    }

    /// Writes the whole document, restricted to the closure of `entities` if not empty.
    pub(crate) fn render(mut self, entities: &[String]) -> Result<W, RenderError> {
        self.out.begin_document()?;
        if entities.is_empty() {
            scope::render_all(&mut self)?;
        } else {
            scope::render_filtered(&mut self, entities)?;
        }
        self.out.end_document()?;
        debug!(
            nodes = self.registry.len(),
            filtered = !entities.is_empty(),
            "Rendered ontology"
        );
        Ok(self.out.into_inner())
    }

    /// The escaped shortest name of an IRI.
    fn short_name(&self, iri: &str) -> String {
        escape(&self.prefixes.short_form(iri))
    }

    /// The text used to reference a node inside a table: its name, or its node identity.
    fn reference(&mut self, node: &Term) -> String {
        match node {
            Term::NamedNode(node) => self.short_name(node.as_str()),
            Term::Literal(literal) => escape(literal.value()),
            _ => self.registry.id_of(node).to_string(),
        }
    }
}
