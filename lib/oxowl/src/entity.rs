//! OWL 2 entities: named nodes classified into one kind.

use oxrdf::{NamedNode, NamedNodeRef, Term};
use std::fmt;

/// The kind of a named OWL 2 entity.
///
/// The variants are listed in the order used to resolve punning: a name
/// declared as both a class and an individual is a class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EntityKind {
    /// owl:Class
    Class,
    /// rdfs:Datatype
    Datatype,
    /// owl:ObjectProperty
    ObjectProperty,
    /// owl:DatatypeProperty
    DataProperty,
    /// owl:AnnotationProperty
    AnnotationProperty,
    /// owl:NamedIndividual, or a name typed with a class
    Individual,
}

impl EntityKind {
    /// Every kind, in punning priority order.
    pub const ALL: [Self; 6] = [
        Self::Class,
        Self::Datatype,
        Self::ObjectProperty,
        Self::DataProperty,
        Self::AnnotationProperty,
        Self::Individual,
    ];

    /// Returns whether this kind is one of the three property kinds.
    #[inline]
    pub fn is_property(self) -> bool {
        matches!(
            self,
            Self::ObjectProperty | Self::DataProperty | Self::AnnotationProperty
        )
    }

    /// Returns the OWL functional-syntax name of the kind.
    pub fn name(self) -> &'static str {
        match self {
            Self::Class => "Class",
            Self::Datatype => "Datatype",
            Self::ObjectProperty => "ObjectProperty",
            Self::DataProperty => "DataProperty",
            Self::AnnotationProperty => "AnnotationProperty",
            Self::Individual => "NamedIndividual",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A reference to a classified OWL 2 entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntityRef<'a> {
    iri: NamedNodeRef<'a>,
    kind: EntityKind,
    builtin: bool,
}

impl<'a> EntityRef<'a> {
    #[inline]
    pub(crate) fn new(iri: NamedNodeRef<'a>, kind: EntityKind, builtin: bool) -> Self {
        Self { iri, kind, builtin }
    }

    /// Returns the IRI of this entity.
    #[inline]
    pub fn iri(self) -> NamedNodeRef<'a> {
        self.iri
    }

    /// Returns the kind of this entity.
    #[inline]
    pub fn kind(self) -> EntityKind {
        self.kind
    }

    /// Returns whether this entity comes from the OWL 2 vocabulary and is not declared.
    #[inline]
    pub fn is_builtin(self) -> bool {
        self.builtin
    }

    /// Converts this reference into an owned IRI.
    #[inline]
    pub fn into_owned(self) -> NamedNode {
        self.iri.into_owned()
    }
}

impl fmt::Display for EntityRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.kind, self.iri)
    }
}

impl From<EntityRef<'_>> for Term {
    fn from(entity: EntityRef<'_>) -> Self {
        entity.iri.into_owned().into()
    }
}
