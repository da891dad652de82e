//! Loading OWL 2 ontologies from RDF documents.
//!
//! Any syntax supported by [`oxrdfio`] can be read (Turtle, RDF/XML, N-Triples, ...).
//! Only the default graph is kept.

use crate::error::LoadError;
use crate::ontology::Ontology;
use crate::prefixes::PrefixMapping;
use oxrdf::Triple;
use oxrdfio::{RdfFormat, RdfParser};
use std::io::Read;
use tracing::{debug, warn};

/// Parses an [`Ontology`] from an RDF document.
///
/// The prefixes declared in the document are added to the standard ones.
///
/// ```
/// use oxowl::{EntityKind, OntologyParser};
/// use oxrdfio::RdfFormat;
///
/// let ontology = OntologyParser::from_format(RdfFormat::Turtle).parse_slice(
///     b"@prefix owl: <http://www.w3.org/2002/07/owl#> .
///       @prefix ex: <http://example.com/> .
///       ex:A a owl:Class .",
/// )?;
/// assert_eq!(ontology.entities(EntityKind::Class).count(), 1);
/// assert_eq!(ontology.prefixes().namespace("ex"), Some("http://example.com/"));
/// # Result::<_, Box<dyn std::error::Error>>::Ok(())
/// ```
#[must_use]
pub struct OntologyParser {
    parser: RdfParser,
}

impl OntologyParser {
    /// Builds a parser for the given format.
    #[inline]
    pub fn from_format(format: RdfFormat) -> Self {
        Self {
            parser: RdfParser::from_format(format),
        }
    }

    /// Provides the IRI used to resolve relative IRIs of the document.
    pub fn with_base_iri(self, base_iri: impl Into<String>) -> Result<Self, LoadError> {
        Ok(Self {
            parser: self.parser.with_base_iri(base_iri)?,
        })
    }

    /// Parses a document from a [`Read`] implementation.
    pub fn parse_reader(self, reader: impl Read) -> Result<Ontology, LoadError> {
        let mut parser = self.parser.for_reader(reader);
        let mut triples = Vec::new();
        let mut skipped = 0_usize;
        for quad in &mut parser {
            let quad = quad?;
            if quad.graph_name.is_default_graph() {
                triples.push(Triple::new(quad.subject, quad.predicate, quad.object));
            } else {
                skipped += 1;
            }
        }
        if skipped > 0 {
            warn!(skipped, "Ignored triples outside of the default graph");
        }
        let mut prefixes = PrefixMapping::standard();
        for (prefix, namespace) in parser.prefixes() {
            if let Err(e) = prefixes.add(prefix, namespace) {
                warn!("Ignored prefix declaration: {e}");
            }
        }
        debug!(triples = triples.len(), "Parsed ontology document");
        Ok(Ontology::from_triples(triples).with_prefixes(prefixes))
    }

    /// Parses a document from a byte slice.
    pub fn parse_slice(self, slice: &[u8]) -> Result<Ontology, LoadError> {
        self.parse_reader(slice)
    }
}
