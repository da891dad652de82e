use crate::config::ValueType;
use std::io;

/// An error raised while rendering an ontology.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// Writing to the output failed; the document written so far is incomplete.
    #[error(transparent)]
    Io(#[from] io::Error),
    /// A literal could not be built from the given value.
    #[error("Invalid literal: {0}")]
    InvalidLiteral(String),
    /// The literal wrapping parameters are out of range.
    #[error("Cannot split literals into rows of {row_length} characters with at most {max_rows} rows")]
    InvalidSplit { row_length: usize, max_rows: usize },
}

/// An error raised while building a [`RenderConfig`](crate::RenderConfig).
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The key is not one of the known settings.
    #[error("Unknown option '{0}'")]
    UnknownKey(String),
    /// The value does not have the type of the setting.
    #[error("Option '{key}' expects a {expected} value, got a {found} value")]
    TypeMismatch {
        key: &'static str,
        expected: ValueType,
        found: ValueType,
    },
    /// The value has the right type but is not allowed.
    #[error("Invalid value for option '{key}': {reason}")]
    InvalidValue { key: &'static str, reason: String },
}
