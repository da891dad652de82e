//! Literal values as label text.

use crate::config::RenderConfig;
use crate::error::RenderError;
use oxowl::PrefixMapping;
use oxowl::vocab::RDF_PLAIN_LITERAL;
use oxrdf::vocab::xsd;
use oxrdf::{Literal, LiteralRef};

/// Appended to the last row of a truncated literal.
const TRUNCATION_MARKER: &str = "...";
/// Separates the rows of a wrapped literal inside a label.
const ROW_SEPARATOR: &str = "<br/>";

/// Writes literals as the content of a table cell.
///
/// The returned text is inserted verbatim in an HTML-like label, so it must
/// already be escaped (see [`escape`]).
///
/// Closures implement this trait:
/// ```
/// use oxdot::{LiteralRenderer, RenderConfig, RenderError, literal::escape};
/// use oxowl::PrefixMapping;
/// use oxrdf::Literal;
///
/// let renderer = |literal: oxrdf::LiteralRef<'_>, _: &RenderConfig, _: &PrefixMapping| {
///     Ok::<_, RenderError>(escape(literal.value()))
/// };
/// let text = renderer.render(
///     Literal::new_simple_literal("a<b").as_ref(),
///     &RenderConfig::default(),
///     &PrefixMapping::standard(),
/// )?;
/// assert_eq!(text, "a&lt;b");
/// # Result::<_, Box<dyn std::error::Error>>::Ok(())
/// ```
pub trait LiteralRenderer {
    fn render(
        &self,
        literal: LiteralRef<'_>,
        config: &RenderConfig,
        prefixes: &PrefixMapping,
    ) -> Result<String, RenderError>;
}

impl<F: Fn(LiteralRef<'_>, &RenderConfig, &PrefixMapping) -> Result<String, RenderError>>
    LiteralRenderer for F
{
    #[inline]
    fn render(
        &self,
        literal: LiteralRef<'_>,
        config: &RenderConfig,
        prefixes: &PrefixMapping,
    ) -> Result<String, RenderError> {
        self(literal, config, prefixes)
    }
}

/// The default [`LiteralRenderer`].
///
/// String-like literals (simple, `xsd:string`, `rdf:PlainLiteral` or language-tagged)
/// are normalized, wrapped and quoted. Other literals keep their lexical form and get
/// their datatype appended.
///
/// ```
/// use oxdot::{DefaultLiteralRenderer, LiteralRenderer, RenderConfig};
/// use oxowl::PrefixMapping;
/// use oxrdf::Literal;
/// use oxrdf::vocab::xsd;
///
/// let prefixes = PrefixMapping::standard();
/// let config = RenderConfig::default();
/// let renderer = DefaultLiteralRenderer::default();
/// let label = Literal::new_language_tagged_literal_unchecked("a  \"dog\"", "en");
/// assert_eq!(
///     renderer.render(label.as_ref(), &config, &prefixes)?,
///     "\"a \\\"dog\\\"\"@en"
/// );
/// let number = Literal::new_typed_literal("12", xsd::INTEGER);
/// assert_eq!(renderer.render(number.as_ref(), &config, &prefixes)?, "12^^xsd:integer");
/// # Result::<_, Box<dyn std::error::Error>>::Ok(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct DefaultLiteralRenderer {
    quote_strings: bool,
}

impl DefaultLiteralRenderer {
    /// Disables the double quotes around string-like literals.
    #[must_use]
    pub fn without_quotes(mut self) -> Self {
        self.quote_strings = false;
        self
    }
}

impl Default for DefaultLiteralRenderer {
    fn default() -> Self {
        Self {
            quote_strings: true,
        }
    }
}

impl LiteralRenderer for DefaultLiteralRenderer {
    fn render(
        &self,
        literal: LiteralRef<'_>,
        config: &RenderConfig,
        prefixes: &PrefixMapping,
    ) -> Result<String, RenderError> {
        let mut text = if is_string_like(literal) {
            let rows = split(
                &normalize(literal.value()),
                config.literal_row_length(),
                config.literal_max_rows(),
            )?;
            let body = rows
                .iter()
                .map(|row| escape_quotes(&escape(row)))
                .collect::<Vec<_>>()
                .join(ROW_SEPARATOR);
            if self.quote_strings {
                format!("\"{body}\"")
            } else {
                body
            }
        } else {
            escape_quotes(&escape(literal.value()))
        };
        if let Some(language) = literal.language() {
            text.push('@');
            text.push_str(&escape(language));
        } else if literal.datatype() != xsd::STRING {
            text.push_str("^^");
            text.push_str(&escape(&prefixes.short_form(literal.datatype().as_str())));
        }
        Ok(text)
    }
}

/// Returns whether `literal` is rendered as wrapped text.
pub fn is_string_like(literal: LiteralRef<'_>) -> bool {
    literal.language().is_some()
        || literal.datatype() == xsd::STRING
        || literal.datatype() == RDF_PLAIN_LITERAL
}

/// Builds the literal of a cardinality, rejecting negative values.
pub fn non_negative_integer(value: i64) -> Result<Literal, RenderError> {
    if value < 0 {
        return Err(RenderError::InvalidLiteral(format!(
            "{value} is not a non-negative integer"
        )));
    }
    Ok(Literal::new_typed_literal(
        value.to_string(),
        xsd::NON_NEGATIVE_INTEGER,
    ))
}

/// Replaces line breaks and whitespace runs with one space and trims the text.
pub fn normalize(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Escapes the characters of `text` that are markup in HTML-like labels.
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            c => escaped.push(c),
        }
    }
    escaped
}

fn escape_quotes(text: &str) -> String {
    text.replace('"', "\\\"")
}

/// Wraps `text` into rows of `row_length` characters.
///
/// Text shorter than 110% of a row stays on one row. When more than `max_rows`
/// rows would be needed, the text is truncated and the last row ends with `...`.
///
/// ```
/// use oxdot::literal::split;
///
/// assert_eq!(split("abcdefghij", 4, 2)?, ["abcd", "e..."]);
/// assert_eq!(split("abcdefgh", 4, 2)?, ["abcd", "efgh"]);
/// assert_eq!(split("abcd", 4, 2)?, ["abcd"]);
/// # Result::<_, Box<dyn std::error::Error>>::Ok(())
/// ```
pub fn split(text: &str, row_length: usize, max_rows: usize) -> Result<Vec<String>, RenderError> {
    if row_length < TRUNCATION_MARKER.len() || max_rows < 1 {
        return Err(RenderError::InvalidSplit {
            row_length,
            max_rows,
        });
    }
    let chars = text.chars().collect::<Vec<_>>();
    if 10 * chars.len() <= 11 * row_length {
        return Ok(vec![text.to_owned()]);
    }
    let count = chars.len().div_ceil(row_length);
    let mut rows = chars
        .chunks(row_length)
        .take(max_rows)
        .map(|row| row.iter().collect::<String>())
        .collect::<Vec<_>>();
    if count > max_rows {
        if let Some(last) = rows.last_mut() {
            if last.chars().count() + TRUNCATION_MARKER.len() > row_length {
                *last = last
                    .chars()
                    .take(row_length - TRUNCATION_MARKER.len())
                    .collect();
            }
            last.push_str(TRUNCATION_MARKER);
        }
    }
    Ok(rows)
}
