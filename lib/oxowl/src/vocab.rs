//! OWL 2 vocabulary and the built-in entities it defines.

use crate::entity::EntityKind;

/// [OWL 2](https://www.w3.org/TR/owl2-rdf-based-semantics/) vocabulary.
pub mod owl {
    use oxrdf::NamedNodeRef;

    /// OWL 2 namespace.
    pub const NAMESPACE: &str = "http://www.w3.org/2002/07/owl#";

    pub const CLASS: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2002/07/owl#Class");
    pub const THING: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2002/07/owl#Thing");
    pub const NOTHING: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2002/07/owl#Nothing");
    pub const NAMED_INDIVIDUAL: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2002/07/owl#NamedIndividual");
    pub const OBJECT_PROPERTY: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2002/07/owl#ObjectProperty");
    pub const DATATYPE_PROPERTY: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2002/07/owl#DatatypeProperty");
    pub const ANNOTATION_PROPERTY: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2002/07/owl#AnnotationProperty");
    pub const RESTRICTION: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2002/07/owl#Restriction");

    pub const EQUIVALENT_CLASS: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2002/07/owl#equivalentClass");
    pub const INVERSE_OF: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2002/07/owl#inverseOf");
    pub const PROPERTY_CHAIN_AXIOM: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2002/07/owl#propertyChainAxiom");

    pub const ON_PROPERTY: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2002/07/owl#onProperty");
    pub const ON_PROPERTIES: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2002/07/owl#onProperties");
    pub const ON_CLASS: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2002/07/owl#onClass");
    pub const ON_DATA_RANGE: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2002/07/owl#onDataRange");
    pub const SOME_VALUES_FROM: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2002/07/owl#someValuesFrom");
    pub const ALL_VALUES_FROM: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2002/07/owl#allValuesFrom");
    pub const HAS_VALUE: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2002/07/owl#hasValue");
    pub const HAS_SELF: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2002/07/owl#hasSelf");
    pub const MIN_CARDINALITY: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2002/07/owl#minCardinality");
    pub const MAX_CARDINALITY: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2002/07/owl#maxCardinality");
    pub const CARDINALITY: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2002/07/owl#cardinality");
    pub const MIN_QUALIFIED_CARDINALITY: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2002/07/owl#minQualifiedCardinality");
    pub const MAX_QUALIFIED_CARDINALITY: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2002/07/owl#maxQualifiedCardinality");
    pub const QUALIFIED_CARDINALITY: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2002/07/owl#qualifiedCardinality");

    pub const INTERSECTION_OF: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2002/07/owl#intersectionOf");
    pub const UNION_OF: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2002/07/owl#unionOf");
    pub const COMPLEMENT_OF: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2002/07/owl#complementOf");
    pub const ONE_OF: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2002/07/owl#oneOf");

    pub const TOP_OBJECT_PROPERTY: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2002/07/owl#topObjectProperty");
    pub const TOP_DATA_PROPERTY: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2002/07/owl#topDataProperty");
}

/// `rdf:PlainLiteral`, missing from [`oxrdf::vocab::rdf`].
pub const RDF_PLAIN_LITERAL: oxrdf::NamedNodeRef<'_> = oxrdf::NamedNodeRef::new_unchecked(
    "http://www.w3.org/1999/02/22-rdf-syntax-ns#PlainLiteral",
);

const RDF: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";
const RDFS: &str = "http://www.w3.org/2000/01/rdf-schema#";
const XSD: &str = "http://www.w3.org/2001/XMLSchema#";

/// Local names of the `xsd:` datatypes of the OWL 2 datatype map.
const XSD_DATATYPES: &[&str] = &[
    "anyURI",
    "base64Binary",
    "boolean",
    "byte",
    "dateTime",
    "dateTimeStamp",
    "decimal",
    "double",
    "float",
    "hexBinary",
    "int",
    "integer",
    "language",
    "long",
    "Name",
    "NCName",
    "negativeInteger",
    "NMTOKEN",
    "nonNegativeInteger",
    "nonPositiveInteger",
    "normalizedString",
    "positiveInteger",
    "short",
    "string",
    "token",
    "unsignedByte",
    "unsignedInt",
    "unsignedLong",
    "unsignedShort",
];

/// Returns the kind of a built-in entity of the OWL 2 vocabulary.
///
/// Built-ins are usable in an ontology without being declared.
pub fn builtin_kind(iri: &str) -> Option<EntityKind> {
    if let Some(local) = iri.strip_prefix(owl::NAMESPACE) {
        return match local {
            "Thing" | "Nothing" => Some(EntityKind::Class),
            "real" | "rational" => Some(EntityKind::Datatype),
            "topObjectProperty" | "bottomObjectProperty" => Some(EntityKind::ObjectProperty),
            "topDataProperty" | "bottomDataProperty" => Some(EntityKind::DataProperty),
            "versionInfo" | "deprecated" | "priorVersion" | "backwardCompatibleWith"
            | "incompatibleWith" => Some(EntityKind::AnnotationProperty),
            _ => None,
        };
    }
    if let Some(local) = iri.strip_prefix(RDFS) {
        return match local {
            "Literal" => Some(EntityKind::Datatype),
            "label" | "comment" | "seeAlso" | "isDefinedBy" => Some(EntityKind::AnnotationProperty),
            _ => None,
        };
    }
    if let Some(local) = iri.strip_prefix(RDF) {
        return matches!(local, "PlainLiteral" | "langString" | "XMLLiteral" | "HTML")
            .then_some(EntityKind::Datatype);
    }
    if let Some(local) = iri.strip_prefix(XSD) {
        return XSD_DATATYPES
            .contains(&local)
            .then_some(EntityKind::Datatype);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_kinds() {
        assert_eq!(builtin_kind(owl::THING.as_str()), Some(EntityKind::Class));
        assert_eq!(
            builtin_kind(owl::TOP_DATA_PROPERTY.as_str()),
            Some(EntityKind::DataProperty)
        );
        assert_eq!(
            builtin_kind("http://www.w3.org/2000/01/rdf-schema#Literal"),
            Some(EntityKind::Datatype)
        );
        assert_eq!(
            builtin_kind("http://www.w3.org/2000/01/rdf-schema#label"),
            Some(EntityKind::AnnotationProperty)
        );
        assert_eq!(
            builtin_kind("http://www.w3.org/2001/XMLSchema#nonNegativeInteger"),
            Some(EntityKind::Datatype)
        );
        assert_eq!(builtin_kind("http://www.w3.org/2001/XMLSchema#gYear"), None);
        assert_eq!(builtin_kind(owl::RESTRICTION.as_str()), None);
        assert_eq!(builtin_kind("http://example.com/Thing"), None);
    }
}
