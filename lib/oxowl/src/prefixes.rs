//! Prefix mappings used to shorten IRIs into `prefix:local` forms.

use crate::error::PrefixError;
use crate::vocab::owl;
use oxiri::Iri;

/// An ordered mapping from prefix names to namespace IRIs.
///
/// Shortening picks the longest matching namespace, so `ex:` for
/// `http://example.com/` and `exa:` for `http://example.com/a/` both work.
///
/// ```
/// use oxowl::PrefixMapping;
///
/// let mut prefixes = PrefixMapping::standard();
/// prefixes.add("ex", "http://example.com/")?;
/// assert_eq!(prefixes.short_form("http://example.com/A"), "ex:A");
/// assert_eq!(
///     prefixes.short_form("http://www.w3.org/2002/07/owl#Thing"),
///     "owl:Thing"
/// );
/// assert_eq!(prefixes.short_form("urn:x"), "urn:x");
/// # Result::<_, Box<dyn std::error::Error>>::Ok(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrefixMapping {
    prefixes: Vec<(String, String)>,
}

impl PrefixMapping {
    /// An empty mapping.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// The `owl`, `rdf`, `rdfs` and `xsd` prefixes.
    pub fn standard() -> Self {
        Self {
            prefixes: [
                ("owl", owl::NAMESPACE),
                ("rdf", "http://www.w3.org/1999/02/22-rdf-syntax-ns#"),
                ("rdfs", "http://www.w3.org/2000/01/rdf-schema#"),
                ("xsd", "http://www.w3.org/2001/XMLSchema#"),
            ]
            .into_iter()
            .map(|(p, ns)| (p.to_owned(), ns.to_owned()))
            .collect(),
        }
    }

    /// Adds a prefix, replacing the namespace of an existing one.
    pub fn add(
        &mut self,
        prefix: impl Into<String>,
        namespace: impl Into<String>,
    ) -> Result<&mut Self, PrefixError> {
        let prefix = prefix.into();
        let namespace = namespace.into();
        if !is_valid_prefix(&prefix) {
            return Err(PrefixError::InvalidPrefix(prefix));
        }
        if let Err(error) = Iri::parse(namespace.clone()) {
            return Err(PrefixError::InvalidNamespace { namespace, error });
        }
        if let Some(entry) = self.prefixes.iter_mut().find(|(p, _)| *p == prefix) {
            entry.1 = namespace;
        } else {
            self.prefixes.push((prefix, namespace));
        }
        Ok(self)
    }

    /// Adds all the prefixes of `other`, which take precedence.
    pub fn extend(&mut self, other: &Self) {
        for (prefix, namespace) in &other.prefixes {
            if let Some(entry) = self.prefixes.iter_mut().find(|(p, _)| p == prefix) {
                entry.1.clone_from(namespace);
            } else {
                self.prefixes.push((prefix.clone(), namespace.clone()));
            }
        }
    }

    /// Returns the namespace bound to a prefix.
    pub fn namespace(&self, prefix: &str) -> Option<&str> {
        self.prefixes
            .iter()
            .find(|(p, _)| p == prefix)
            .map(|(_, ns)| ns.as_str())
    }

    /// Iterates over the (prefix, namespace) pairs in insertion order.
    pub fn prefixes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.prefixes.iter().map(|(p, ns)| (p.as_str(), ns.as_str()))
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.prefixes.is_empty()
    }

    /// Splits `iri` into the prefix with the longest matching namespace and the local name.
    pub fn shorten<'a>(&self, iri: &'a str) -> Option<(&str, &'a str)> {
        self.prefixes
            .iter()
            .filter_map(|(prefix, namespace)| {
                Some((prefix.as_str(), namespace.len(), iri.strip_prefix(namespace.as_str())?))
            })
            .max_by_key(|(_, len, _)| *len)
            .map(|(prefix, _, local)| (prefix, local))
    }

    /// Returns `prefix:local` if a namespace matches, else the IRI itself.
    pub fn short_form(&self, iri: &str) -> String {
        match self.shorten(iri) {
            Some((prefix, local)) => format!("{prefix}:{local}"),
            None => iri.to_owned(),
        }
    }

    /// Expands a `prefix:local` form with a known prefix.
    pub fn expand(&self, short: &str) -> Option<String> {
        let (prefix, local) = short.split_once(':')?;
        Some(format!("{}{local}", self.namespace(prefix)?))
    }
}

fn is_valid_prefix(prefix: &str) -> bool {
    let mut chars = prefix.chars();
    let Some(first) = chars.next() else {
        return true;
    };
    first.is_alphabetic()
        && chars.all(|c| c.is_alphanumeric() || matches!(c, '_' | '-' | '.'))
        && !prefix.ends_with('.')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_longest_namespace_wins() -> Result<(), PrefixError> {
        let mut prefixes = PrefixMapping::new();
        prefixes
            .add("ex", "http://example.com/")?
            .add("exa", "http://example.com/a/")?;
        assert_eq!(prefixes.short_form("http://example.com/a/b"), "exa:b");
        assert_eq!(prefixes.short_form("http://example.com/b"), "ex:b");
        Ok(())
    }

    #[test]
    fn test_empty_prefix() -> Result<(), PrefixError> {
        let mut prefixes = PrefixMapping::new();
        prefixes.add("", "http://example.com/")?;
        assert_eq!(prefixes.short_form("http://example.com/A"), ":A");
        assert_eq!(
            prefixes.expand(":A").as_deref(),
            Some("http://example.com/A")
        );
        Ok(())
    }

    #[test]
    fn test_replace_namespace() -> Result<(), PrefixError> {
        let mut prefixes = PrefixMapping::standard();
        prefixes.add("owl", "http://example.com/owl#")?;
        assert_eq!(prefixes.namespace("owl"), Some("http://example.com/owl#"));
        assert_eq!(prefixes.prefixes().count(), 4);
        Ok(())
    }

    #[test]
    fn test_invalid_entries() {
        let mut prefixes = PrefixMapping::new();
        assert!(matches!(
            prefixes.add("1x", "http://example.com/"),
            Err(PrefixError::InvalidPrefix(_))
        ));
        assert!(matches!(
            prefixes.add("x", "not an iri"),
            Err(PrefixError::InvalidNamespace { .. })
        ));
        assert!(prefixes.is_empty());
    }

    #[test]
    fn test_unknown_prefix_is_not_expanded() {
        assert_eq!(PrefixMapping::standard().expand("ex:A"), None);
    }
}
