//! Error types for OWL operations.

use oxiri::IriParseError;
use oxrdfio::RdfParseError;

/// An error raised while loading an ontology document.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The document is not valid in its RDF syntax, or could not be read.
    #[error(transparent)]
    Parse(#[from] RdfParseError),
    /// The base IRI is invalid.
    #[error("Invalid base IRI: {0}")]
    InvalidBaseIri(#[from] IriParseError),
}

/// An error raised while adding a prefix to a [`PrefixMapping`](crate::PrefixMapping).
#[derive(Debug, thiserror::Error)]
pub enum PrefixError {
    /// The prefix name is not a valid `PN_PREFIX`.
    #[error("Invalid prefix name '{0}'")]
    InvalidPrefix(String),
    /// The namespace is not an absolute IRI.
    #[error("Invalid namespace IRI '{namespace}': {error}")]
    InvalidNamespace {
        namespace: String,
        #[source]
        error: IriParseError,
    },
}
