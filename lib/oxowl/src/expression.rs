//! Anonymous OWL 2 class expressions.

use oxrdf::Term;
use std::fmt;

/// An anonymous class expression, classified once from its RDF encoding.
///
/// Only three structural families are recognized; every other blank node
/// used in a class position is [`ClassExpression::Unsupported`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassExpression {
    /// A property restriction with a value and an optional cardinality.
    Restriction(Restriction),
    /// A boolean combination or an enumeration.
    Components(Components),
    /// ObjectComplementOf(C)
    Complement(Term),
    /// Anything else (self restrictions, n-ary data restrictions, malformed encodings).
    Unsupported,
}

impl ClassExpression {
    /// Returns the OWL functional-syntax name of this expression, if supported.
    pub fn name(&self) -> Option<&'static str> {
        match self {
            Self::Restriction(r) => Some(r.kind.name()),
            Self::Components(c) => Some(c.kind.name()),
            Self::Complement(_) => Some("ComplementOf"),
            Self::Unsupported => None,
        }
    }

    #[inline]
    pub fn is_supported(&self) -> bool {
        !matches!(self, Self::Unsupported)
    }

    /// Returns the restriction if this expression is one.
    #[inline]
    pub fn as_restriction(&self) -> Option<&Restriction> {
        match self {
            Self::Restriction(r) => Some(r),
            _ => None,
        }
    }

    /// Returns the members if this expression is a combination of the given kind.
    #[inline]
    pub fn members_of(&self, kind: ComponentsKind) -> Option<&[Term]> {
        match self {
            Self::Components(c) if c.kind == kind => Some(&c.members),
            _ => None,
        }
    }
}

/// The structural kind of a [`Restriction`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RestrictionKind {
    ObjectSomeValuesFrom,
    DataSomeValuesFrom,
    ObjectAllValuesFrom,
    DataAllValuesFrom,
    ObjectHasValue,
    DataHasValue,
    ObjectMinCardinality,
    DataMinCardinality,
    ObjectMaxCardinality,
    DataMaxCardinality,
    ObjectExactCardinality,
    DataExactCardinality,
}

impl RestrictionKind {
    /// Returns the OWL functional-syntax name of the restriction.
    pub fn name(self) -> &'static str {
        match self {
            Self::ObjectSomeValuesFrom => "ObjectSomeValuesFrom",
            Self::DataSomeValuesFrom => "DataSomeValuesFrom",
            Self::ObjectAllValuesFrom => "ObjectAllValuesFrom",
            Self::DataAllValuesFrom => "DataAllValuesFrom",
            Self::ObjectHasValue => "ObjectHasValue",
            Self::DataHasValue => "DataHasValue",
            Self::ObjectMinCardinality => "ObjectMinCardinality",
            Self::DataMinCardinality => "DataMinCardinality",
            Self::ObjectMaxCardinality => "ObjectMaxCardinality",
            Self::DataMaxCardinality => "DataMaxCardinality",
            Self::ObjectExactCardinality => "ObjectExactCardinality",
            Self::DataExactCardinality => "DataExactCardinality",
        }
    }

    /// Returns whether the restriction constrains a data property.
    pub fn is_data(self) -> bool {
        matches!(
            self,
            Self::DataSomeValuesFrom
                | Self::DataAllValuesFrom
                | Self::DataHasValue
                | Self::DataMinCardinality
                | Self::DataMaxCardinality
                | Self::DataExactCardinality
        )
    }

    /// Returns whether the restriction carries a cardinality.
    pub fn has_cardinality(self) -> bool {
        matches!(
            self,
            Self::ObjectMinCardinality
                | Self::DataMinCardinality
                | Self::ObjectMaxCardinality
                | Self::DataMaxCardinality
                | Self::ObjectExactCardinality
                | Self::DataExactCardinality
        )
    }
}

impl fmt::Display for RestrictionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A property restriction (`owl:Restriction`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Restriction {
    /// The structural kind.
    pub kind: RestrictionKind,
    /// The `owl:onProperty` value, named or an anonymous inverse.
    pub property: Term,
    /// The filler, the individual or literal value, or the qualification.
    pub value: Term,
    /// The cardinality of the cardinality restrictions.
    pub cardinality: Option<u32>,
}

/// The structural kind of a [`Components`] expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentsKind {
    UnionOf,
    IntersectionOf,
    OneOf,
}

impl ComponentsKind {
    pub fn name(self) -> &'static str {
        match self {
            Self::UnionOf => "UnionOf",
            Self::IntersectionOf => "IntersectionOf",
            Self::OneOf => "OneOf",
        }
    }
}

impl fmt::Display for ComponentsKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An expression built from an ordered RDF list of members.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Components {
    pub kind: ComponentsKind,
    pub members: Vec<Term>,
}
