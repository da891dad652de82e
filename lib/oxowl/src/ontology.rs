//! OWL 2 ontology: a read-only structural view over RDF triples.

use crate::entity::{EntityKind, EntityRef};
use crate::expression::{ClassExpression, Components, ComponentsKind, Restriction, RestrictionKind};
use crate::prefixes::PrefixMapping;
use crate::vocab::{self, owl};
use oxrdf::vocab::{rdf, rdfs};
use oxrdf::{Graph, NamedNode, NamedNodeRef, Term, Triple, TripleRef};
use rustc_hash::{FxHashMap, FxHashSet};

/// Maximum number of members read from an RDF list.
const MAX_LIST_LENGTH: usize = 10_000;

/// Restrictions with a filler or a value, with their object and data kinds.
const VALUE_RESTRICTIONS: [(NamedNodeRef<'static>, RestrictionKind, RestrictionKind); 3] = [
    (
        owl::SOME_VALUES_FROM,
        RestrictionKind::ObjectSomeValuesFrom,
        RestrictionKind::DataSomeValuesFrom,
    ),
    (
        owl::ALL_VALUES_FROM,
        RestrictionKind::ObjectAllValuesFrom,
        RestrictionKind::DataAllValuesFrom,
    ),
    (
        owl::HAS_VALUE,
        RestrictionKind::ObjectHasValue,
        RestrictionKind::DataHasValue,
    ),
];

/// Cardinality restrictions: predicate, qualified, object kind, data kind.
const CARDINALITY_RESTRICTIONS: [(NamedNodeRef<'static>, bool, RestrictionKind, RestrictionKind); 6] = [
    (
        owl::MIN_QUALIFIED_CARDINALITY,
        true,
        RestrictionKind::ObjectMinCardinality,
        RestrictionKind::DataMinCardinality,
    ),
    (
        owl::MAX_QUALIFIED_CARDINALITY,
        true,
        RestrictionKind::ObjectMaxCardinality,
        RestrictionKind::DataMaxCardinality,
    ),
    (
        owl::QUALIFIED_CARDINALITY,
        true,
        RestrictionKind::ObjectExactCardinality,
        RestrictionKind::DataExactCardinality,
    ),
    (
        owl::MIN_CARDINALITY,
        false,
        RestrictionKind::ObjectMinCardinality,
        RestrictionKind::DataMinCardinality,
    ),
    (
        owl::MAX_CARDINALITY,
        false,
        RestrictionKind::ObjectMaxCardinality,
        RestrictionKind::DataMaxCardinality,
    ),
    (
        owl::CARDINALITY,
        false,
        RestrictionKind::ObjectExactCardinality,
        RestrictionKind::DataExactCardinality,
    ),
];

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct Statement {
    subject: Term,
    predicate: NamedNode,
    object: Term,
}

/// An OWL 2 ontology read from its RDF encoding.
///
/// Every named node is classified into at most one [`EntityKind`] and every
/// anonymous class expression into a [`ClassExpression`] when the ontology is
/// built. Queries never re-derive these classifications.
///
/// ```
/// use oxowl::{EntityKind, Ontology};
/// use oxrdf::vocab::rdf;
/// use oxrdf::{NamedNode, Triple};
///
/// let a = NamedNode::new("http://example.com/A")?;
/// let ontology = Ontology::from_triples([Triple::new(
///     a.clone(),
///     rdf::TYPE,
///     NamedNode::new("http://www.w3.org/2002/07/owl#Class")?,
/// )]);
/// assert_eq!(ontology.kind(a.as_ref()), Some(EntityKind::Class));
/// # Result::<_, Box<dyn std::error::Error>>::Ok(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Ontology {
    statements: Vec<Statement>,
    by_subject: FxHashMap<Term, Vec<usize>>,
    by_object: FxHashMap<Term, Vec<usize>>,
    by_predicate: FxHashMap<String, Vec<usize>>,
    kinds: FxHashMap<String, EntityKind>,
    entities: FxHashMap<EntityKind, Vec<NamedNode>>,
    expressions: FxHashMap<Term, ClassExpression>,
    data_ranges: FxHashSet<Term>,
    prefixes: PrefixMapping,
}

impl Ontology {
    /// Builds an ontology from RDF triples, with the standard prefixes.
    pub fn from_triples(triples: impl IntoIterator<Item = Triple>) -> Self {
        let mut ontology = Self {
            prefixes: PrefixMapping::standard(),
            ..Self::default()
        };
        let mut seen = FxHashSet::default();
        for triple in triples {
            let statement = Statement {
                subject: triple.subject.into(),
                predicate: triple.predicate,
                object: triple.object,
            };
            if seen.insert(statement.clone()) {
                ontology.push(statement);
            }
        }
        ontology.classify();
        ontology
    }

    /// Builds an ontology from the triples of an RDF graph.
    pub fn from_graph(graph: &Graph) -> Self {
        Self::from_triples(graph.iter().map(TripleRef::into_owned))
    }

    /// Replaces the prefix mapping used to shorten IRIs.
    #[must_use]
    pub fn with_prefixes(mut self, prefixes: PrefixMapping) -> Self {
        self.prefixes = prefixes;
        self
    }

    /// Returns the prefix mapping attached to the ontology.
    #[inline]
    pub fn prefixes(&self) -> &PrefixMapping {
        &self.prefixes
    }

    /// Returns the number of distinct triples.
    #[inline]
    pub fn len(&self) -> usize {
        self.statements.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }

    fn push(&mut self, statement: Statement) {
        let id = self.statements.len();
        self.by_subject
            .entry(statement.subject.clone())
            .or_default()
            .push(id);
        self.by_object
            .entry(statement.object.clone())
            .or_default()
            .push(id);
        self.by_predicate
            .entry(statement.predicate.as_str().to_owned())
            .or_default()
            .push(id);
        self.statements.push(statement);
    }

    fn classify(&mut self) {
        // Declarations
        let mut kinds = FxHashMap::<String, EntityKind>::default();
        let mut data_ranges = FxHashSet::default();
        for (subject, object) in self.pairs(rdf::TYPE) {
            let Term::NamedNode(object) = object else {
                continue;
            };
            let kind = match object.as_ref() {
                owl::CLASS => EntityKind::Class,
                rdfs::DATATYPE => EntityKind::Datatype,
                owl::OBJECT_PROPERTY => EntityKind::ObjectProperty,
                owl::DATATYPE_PROPERTY => EntityKind::DataProperty,
                owl::ANNOTATION_PROPERTY => EntityKind::AnnotationProperty,
                owl::NAMED_INDIVIDUAL => EntityKind::Individual,
                _ => continue,
            };
            match subject {
                Term::NamedNode(subject) => {
                    kinds
                        .entry(subject.as_str().to_owned())
                        .and_modify(|k| *k = (*k).min(kind))
                        .or_insert(kind);
                }
                Term::BlankNode(_) if kind == EntityKind::Datatype => {
                    data_ranges.insert(subject.clone());
                }
                _ => (),
            }
        }
        self.kinds = kinds;
        self.data_ranges = data_ranges;

        // Anonymous class expressions
        let mut candidates = Vec::new();
        for node in self.by_subject.keys() {
            if matches!(node, Term::BlankNode(_))
                && !self.data_ranges.contains(node)
                && self.looks_like_class_expression(node)
            {
                candidates.push(node.clone());
            }
        }
        for predicate in [rdfs::SUB_CLASS_OF, owl::EQUIVALENT_CLASS] {
            for (subject, object) in self.pairs(predicate) {
                for node in [subject, object] {
                    if matches!(node, Term::BlankNode(_)) && !self.data_ranges.contains(node) {
                        candidates.push(node.clone());
                    }
                }
            }
        }
        let mut expressions = FxHashMap::default();
        for node in candidates {
            if !expressions.contains_key(&node) {
                let expression = self.classify_expression(&node);
                expressions.insert(node, expression);
            }
        }
        self.expressions = expressions;

        // Individuals: names typed with a class
        let mut individuals = Vec::new();
        for (subject, object) in self.pairs(rdf::TYPE) {
            if let Term::NamedNode(subject) = subject {
                if !self.kinds.contains_key(subject.as_str()) && self.is_class(object) {
                    individuals.push(subject.as_str().to_owned());
                }
            }
        }
        for individual in individuals {
            self.kinds.insert(individual, EntityKind::Individual);
        }

        let mut entities = FxHashMap::<EntityKind, Vec<NamedNode>>::default();
        for (iri, kind) in &self.kinds {
            entities
                .entry(*kind)
                .or_default()
                .push(NamedNode::new_unchecked(iri.clone()));
        }
        for list in entities.values_mut() {
            list.sort_unstable();
        }
        self.entities = entities;
    }

    fn looks_like_class_expression(&self, node: &Term) -> bool {
        self.objects(node, rdf::TYPE)
            .any(|t| matches!(t, Term::NamedNode(n) if *n == owl::CLASS || *n == owl::RESTRICTION))
            || [
                owl::INTERSECTION_OF,
                owl::UNION_OF,
                owl::ONE_OF,
                owl::COMPLEMENT_OF,
                owl::ON_PROPERTY,
                owl::ON_PROPERTIES,
            ]
            .into_iter()
            .any(|p| self.object(node, p).is_some())
    }

    fn classify_expression(&self, node: &Term) -> ClassExpression {
        for (predicate, kind) in [
            (owl::UNION_OF, ComponentsKind::UnionOf),
            (owl::INTERSECTION_OF, ComponentsKind::IntersectionOf),
            (owl::ONE_OF, ComponentsKind::OneOf),
        ] {
            if let Some(head) = self.object(node, predicate) {
                return match self.list(head) {
                    Some(members) => ClassExpression::Components(Components { kind, members }),
                    None => ClassExpression::Unsupported,
                };
            }
        }
        if let Some(operand) = self.object(node, owl::COMPLEMENT_OF) {
            return ClassExpression::Complement(operand.clone());
        }
        if let Some(property) = self.object(node, owl::ON_PROPERTY) {
            if let Some(restriction) = self.restriction(node, property) {
                return ClassExpression::Restriction(restriction);
            }
        }
        ClassExpression::Unsupported
    }

    fn restriction(&self, node: &Term, property: &Term) -> Option<Restriction> {
        if self.object(node, owl::HAS_SELF).is_some() {
            return None;
        }
        let data_property = matches!(
            property,
            Term::NamedNode(p) if self.kind(p.as_ref()) == Some(EntityKind::DataProperty)
        );
        for (predicate, object_kind, data_kind) in VALUE_RESTRICTIONS {
            if let Some(value) = self.object(node, predicate) {
                let data = data_property || self.is_data_value(value);
                return Some(Restriction {
                    kind: if data { data_kind } else { object_kind },
                    property: property.clone(),
                    value: value.clone(),
                    cardinality: None,
                });
            }
        }
        for (predicate, qualified, object_kind, data_kind) in CARDINALITY_RESTRICTIONS {
            let Some(cardinality) = self.object(node, predicate) else {
                continue;
            };
            let cardinality = parse_cardinality(cardinality)?;
            let (value, data) = if qualified {
                if let Some(range) = self.object(node, owl::ON_DATA_RANGE) {
                    (range.clone(), true)
                } else {
                    (self.object(node, owl::ON_CLASS)?.clone(), data_property)
                }
            } else if data_property {
                (rdfs::LITERAL.into_owned().into(), true)
            } else {
                (owl::THING.into_owned().into(), false)
            };
            return Some(Restriction {
                kind: if data { data_kind } else { object_kind },
                property: property.clone(),
                value,
                cardinality: Some(cardinality),
            });
        }
        None
    }

    fn is_data_value(&self, value: &Term) -> bool {
        match value {
            Term::NamedNode(value) => self.kind(value.as_ref()) == Some(EntityKind::Datatype),
            Term::BlankNode(_) => self.data_ranges.contains(value),
            _ => true,
        }
    }

    /// Returns the classified kind of a named node, declared or built-in.
    pub fn kind(&self, iri: NamedNodeRef<'_>) -> Option<EntityKind> {
        self.kinds
            .get(iri.as_str())
            .copied()
            .or_else(|| vocab::builtin_kind(iri.as_str()))
    }

    /// Returns the entity named by `iri`, if it is declared or built-in.
    pub fn entity<'a>(&self, iri: NamedNodeRef<'a>) -> Option<EntityRef<'a>> {
        if let Some(kind) = self.kinds.get(iri.as_str()) {
            return Some(EntityRef::new(iri, *kind, false));
        }
        vocab::builtin_kind(iri.as_str()).map(|kind| EntityRef::new(iri, kind, true))
    }

    /// Returns whether `iri` is declared, or typed with a class.
    #[inline]
    pub fn is_declared(&self, iri: NamedNodeRef<'_>) -> bool {
        self.kinds.contains_key(iri.as_str())
    }

    /// Returns the declared entities of the given kind, sorted by IRI.
    pub fn entities(&self, kind: EntityKind) -> impl Iterator<Item = EntityRef<'_>> {
        self.entities
            .get(&kind)
            .into_iter()
            .flatten()
            .map(move |iri| EntityRef::new(iri.as_ref(), kind, false))
    }

    /// Returns the classified anonymous class expression at `node`.
    ///
    /// Named classes, data ranges and nodes that are not used as classes return `None`.
    #[inline]
    pub fn expression(&self, node: &Term) -> Option<&ClassExpression> {
        self.expressions.get(node)
    }

    /// Returns all anonymous class expressions, in no particular order.
    pub fn expressions(&self) -> impl Iterator<Item = (&Term, &ClassExpression)> {
        self.expressions.iter()
    }

    /// Returns whether `node` denotes a class: a named class or an anonymous class expression.
    pub fn is_class(&self, node: &Term) -> bool {
        match node {
            Term::NamedNode(node) => self.kind(node.as_ref()) == Some(EntityKind::Class),
            _ => self.expressions.contains_key(node),
        }
    }

    /// Returns the objects of the triples with the given subject and predicate.
    pub fn objects<'a>(
        &'a self,
        subject: &Term,
        predicate: NamedNodeRef<'a>,
    ) -> impl Iterator<Item = &'a Term> + use<'a> {
        self.by_subject
            .get(subject)
            .into_iter()
            .flatten()
            .map(|id| &self.statements[*id])
            .filter(move |s| s.predicate == predicate)
            .map(|s| &s.object)
    }

    /// Returns the first object of the triples with the given subject and predicate.
    pub fn object<'a>(&'a self, subject: &Term, predicate: NamedNodeRef<'a>) -> Option<&'a Term> {
        self.objects(subject, predicate).next()
    }

    /// Returns the subjects of the triples with the given predicate and object.
    pub fn subjects<'a>(
        &'a self,
        predicate: NamedNodeRef<'a>,
        object: &Term,
    ) -> impl Iterator<Item = &'a Term> + use<'a> {
        self.by_object
            .get(object)
            .into_iter()
            .flatten()
            .map(|id| &self.statements[*id])
            .filter(move |s| s.predicate == predicate)
            .map(|s| &s.subject)
    }

    /// Returns the (subject, object) pairs of the triples with the given predicate.
    pub fn pairs<'a>(
        &'a self,
        predicate: NamedNodeRef<'_>,
    ) -> impl Iterator<Item = (&'a Term, &'a Term)> + use<'a> {
        self.by_predicate
            .get(predicate.as_str())
            .into_iter()
            .flatten()
            .map(|id| {
                let s = &self.statements[*id];
                (&s.subject, &s.object)
            })
    }

    /// Reads an RDF list.
    ///
    /// Returns `None` if the list is malformed, cyclic or too long.
    pub fn list(&self, head: &Term) -> Option<Vec<Term>> {
        let mut members = Vec::new();
        let mut visited = FxHashSet::default();
        let mut current = head;
        while !matches!(current, Term::NamedNode(n) if *n == rdf::NIL) {
            if !visited.insert(current) || members.len() >= MAX_LIST_LENGTH {
                return None;
            }
            members.push(self.object(current, rdf::FIRST)?.clone());
            current = self.object(current, rdf::REST)?;
        }
        Some(members)
    }

    /// Direct super-classes (`rdfs:subClassOf`) of a class.
    pub fn super_classes<'a>(&'a self, class: &Term) -> impl Iterator<Item = &'a Term> + use<'a> {
        self.objects(class, rdfs::SUB_CLASS_OF)
            .filter(|t| !matches!(t, Term::Literal(_)))
    }

    /// Classes stated equivalent (`owl:equivalentClass`) to a class.
    pub fn equivalent_classes<'a>(
        &'a self,
        class: &Term,
    ) -> impl Iterator<Item = &'a Term> + use<'a> {
        self.objects(class, owl::EQUIVALENT_CLASS)
            .filter(|t| !matches!(t, Term::Literal(_)))
    }

    /// Direct super-properties (`rdfs:subPropertyOf`) of a property.
    pub fn super_properties<'a>(
        &'a self,
        property: &Term,
    ) -> impl Iterator<Item = &'a Term> + use<'a> {
        self.objects(property, rdfs::SUB_PROPERTY_OF)
            .filter(|t| !matches!(t, Term::Literal(_)))
    }

    /// Direct sub-properties of a property.
    pub fn sub_properties<'a>(
        &'a self,
        property: &Term,
    ) -> impl Iterator<Item = &'a Term> + use<'a> {
        self.subjects(rdfs::SUB_PROPERTY_OF, property)
    }

    /// Classes an individual is asserted to belong to.
    pub fn types<'a>(&'a self, individual: &Term) -> impl Iterator<Item = &'a Term> + use<'a> {
        self.objects(individual, rdf::TYPE)
            .filter(|t| self.is_class(t))
    }

    /// Declared domains of a property.
    pub fn domains<'a>(&'a self, property: &Term) -> impl Iterator<Item = &'a Term> + use<'a> {
        self.objects(property, rdfs::DOMAIN)
    }

    /// Declared ranges of a property.
    pub fn ranges<'a>(&'a self, property: &Term) -> impl Iterator<Item = &'a Term> + use<'a> {
        self.objects(property, rdfs::RANGE)
    }

    /// Properties declaring `class` as their domain.
    pub fn properties_with_domain<'a>(
        &'a self,
        class: &Term,
    ) -> impl Iterator<Item = &'a Term> + use<'a> {
        self.subjects(rdfs::DOMAIN, class)
            .filter(|p| matches!(p, Term::NamedNode(p) if self.kind(p.as_ref()).is_some_and(EntityKind::is_property)))
    }

    /// Properties with an `owl:propertyChainAxiom` and the members of their chain.
    pub fn property_chains(&self) -> impl Iterator<Item = (&Term, Vec<Term>)> {
        self.pairs(owl::PROPERTY_CHAIN_AXIOM)
            .filter_map(|(property, chain)| Some((property, self.list(chain)?)))
    }
}

fn parse_cardinality(value: &Term) -> Option<u32> {
    match value {
        Term::Literal(value) => value.value().trim().parse().ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use oxrdf::{BlankNode, Literal};

    fn iri(s: &str) -> NamedNode {
        NamedNode::new(format!("http://example.com/{s}")).unwrap()
    }

    #[test]
    fn test_punned_name_has_one_kind() {
        let a = iri("A");
        let ontology = Ontology::from_triples([
            Triple::new(a.clone(), rdf::TYPE, owl::NAMED_INDIVIDUAL),
            Triple::new(a.clone(), rdf::TYPE, owl::CLASS),
        ]);
        assert_eq!(ontology.kind(a.as_ref()), Some(EntityKind::Class));
        assert_eq!(ontology.entities(EntityKind::Individual).count(), 0);
        assert_eq!(ontology.entities(EntityKind::Class).count(), 1);
    }

    #[test]
    fn test_individual_from_class_assertion() {
        let c = iri("C");
        let i = iri("i");
        let ontology = Ontology::from_triples([
            Triple::new(c.clone(), rdf::TYPE, owl::CLASS),
            Triple::new(i.clone(), rdf::TYPE, c.clone()),
        ]);
        assert_eq!(ontology.kind(i.as_ref()), Some(EntityKind::Individual));
        assert_eq!(
            ontology.types(&i.clone().into()).collect::<Vec<_>>(),
            [&Term::from(c)]
        );
    }

    #[test]
    fn test_builtin_entity() {
        let ontology = Ontology::default();
        let entity = ontology.entity(owl::THING).unwrap();
        assert_eq!(entity.kind(), EntityKind::Class);
        assert!(entity.is_builtin());
        assert!(!ontology.is_declared(owl::THING));
    }

    #[test]
    fn test_unqualified_data_cardinality() {
        let a = iri("A");
        let p = iri("p");
        let r = BlankNode::default();
        let ontology = Ontology::from_triples([
            Triple::new(p.clone(), rdf::TYPE, owl::DATATYPE_PROPERTY),
            Triple::new(a.clone(), rdfs::SUB_CLASS_OF, r.clone()),
            Triple::new(r.clone(), rdf::TYPE, owl::RESTRICTION),
            Triple::new(r.clone(), owl::ON_PROPERTY, p.clone()),
            Triple::new(
                r.clone(),
                owl::MIN_CARDINALITY,
                Literal::new_typed_literal("2", oxrdf::vocab::xsd::NON_NEGATIVE_INTEGER),
            ),
        ]);
        let restriction = ontology
            .expression(&r.into())
            .and_then(ClassExpression::as_restriction)
            .unwrap();
        assert_eq!(restriction.kind, RestrictionKind::DataMinCardinality);
        assert_eq!(restriction.cardinality, Some(2));
        assert_eq!(restriction.value, Term::from(rdfs::LITERAL.into_owned()));
    }

    #[test]
    fn test_invalid_cardinality_is_unsupported() {
        let r = BlankNode::default();
        let ontology = Ontology::from_triples([
            Triple::new(r.clone(), rdf::TYPE, owl::RESTRICTION),
            Triple::new(r.clone(), owl::ON_PROPERTY, iri("p")),
            Triple::new(r.clone(), owl::MAX_CARDINALITY, Literal::from(-1)),
        ]);
        assert_eq!(
            ontology.expression(&r.into()),
            Some(&ClassExpression::Unsupported)
        );
    }

    #[test]
    fn test_cyclic_list_is_rejected() {
        let head = BlankNode::default();
        let ontology = Ontology::from_triples([
            Triple::new(head.clone(), rdf::FIRST, iri("a")),
            Triple::new(head.clone(), rdf::REST, head.clone()),
        ]);
        assert_eq!(ontology.list(&head.into()), None);
    }

    #[test]
    fn test_duplicate_triples_are_ignored() {
        let a = iri("A");
        let ontology = Ontology::from_triples([
            Triple::new(a.clone(), rdf::TYPE, owl::CLASS),
            Triple::new(a, rdf::TYPE, owl::CLASS),
        ]);
        assert_eq!(ontology.len(), 1);
    }
}
