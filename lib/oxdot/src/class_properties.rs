//! Properties belonging to a class.

use crate::registry::ClassSet;
use oxowl::vocab::owl;
use oxowl::{ComponentsKind, EntityKind, Ontology};
use oxrdf::vocab::rdfs;
use oxrdf::{NamedNode, Term};
use rustc_hash::FxHashSet;

/// Computes the properties displayed in the table of a class node.
///
/// Closures implement this trait:
/// ```
/// use oxdot::ClassPropertyMap;
/// use oxowl::Ontology;
/// use oxrdf::vocab::rdfs;
/// use oxrdf::{NamedNode, Term};
///
/// let labels_only = |_: &Ontology, _: &Term| vec![NamedNode::from(rdfs::LABEL)];
/// let class = Term::from(NamedNode::new("http://example.com/A")?);
/// assert_eq!(labels_only.properties(&Ontology::default(), &class).len(), 1);
/// # Result::<_, Box<dyn std::error::Error>>::Ok(())
/// ```
pub trait ClassPropertyMap {
    /// Returns the named properties of `class`, without duplicates.
    fn properties(&self, ontology: &Ontology, class: &Term) -> Vec<NamedNode>;
}

impl<F: Fn(&Ontology, &Term) -> Vec<NamedNode>> ClassPropertyMap for F {
    #[inline]
    fn properties(&self, ontology: &Ontology, class: &Term) -> Vec<NamedNode> {
        self(ontology, class)
    }
}

/// The default [`ClassPropertyMap`].
///
/// A property belongs to a class when:
/// - the class is its domain, or the range of its inverse;
/// - the class is a restriction on it;
/// - it is a sub-property of a property of the class with no other domain;
/// - its property chain starts with a property of the class;
/// - it belongs to a super-class, to `owl:Thing`, to an equivalent intersection,
///   to a restriction of the class intersection or to a union containing the class.
///
/// `owl:Thing` only owns `rdfs:label`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultClassPropertyMap;

impl DefaultClassPropertyMap {
    /// Collects the properties of `class`, named or anonymous.
    ///
    /// Returns nothing if `class` is already in `seen`, which makes the
    /// traversal terminate on cyclic hierarchies.
    pub fn collect(&self, ontology: &Ontology, class: &Term, seen: &mut ClassSet) -> FxHashSet<Term> {
        if !seen.insert(class) {
            return FxHashSet::default();
        }
        if *class == Term::from(owl::THING) {
            return [Term::from(rdfs::LABEL)].into_iter().collect();
        }
        let mut properties = FxHashSet::default();
        for property in direct_properties(ontology, class) {
            add_with_sub_properties(ontology, class, property, &mut properties);
        }
        let shortcuts = ontology
            .property_chains()
            .filter(|(_, chain)| chain.first().is_some_and(|p| properties.contains(p)))
            .map(|(property, _)| property.clone())
            .collect::<Vec<_>>();
        properties.extend(shortcuts);
        for related in related_classes(ontology, class) {
            properties.extend(self.collect(ontology, &related, seen));
        }
        properties
    }
}

impl ClassPropertyMap for DefaultClassPropertyMap {
    fn properties(&self, ontology: &Ontology, class: &Term) -> Vec<NamedNode> {
        let mut properties = self
            .collect(ontology, class, &mut ClassSet::new())
            .into_iter()
            .filter_map(|p| match p {
                Term::NamedNode(p) => Some(p),
                _ => None,
            })
            .collect::<Vec<_>>();
        properties.sort_unstable();
        properties
    }
}

fn direct_properties(ontology: &Ontology, class: &Term) -> Vec<Term> {
    let mut properties = ontology
        .properties_with_domain(class)
        .cloned()
        .collect::<Vec<_>>();
    for (property, inverse) in ontology.pairs(owl::INVERSE_OF) {
        if kind(ontology, property) == Some(EntityKind::ObjectProperty)
            && ontology.ranges(inverse).any(|range| range == class)
        {
            properties.push(property.clone());
        }
    }
    if let Some(restriction) = ontology.expression(class).and_then(|e| e.as_restriction()) {
        properties.push(restriction.property.clone());
    }
    properties
}

/// Adds `property` and its sub-properties of the same kind that have no domain other than `class`.
fn add_with_sub_properties(
    ontology: &Ontology,
    class: &Term,
    property: Term,
    properties: &mut FxHashSet<Term>,
) {
    let property_kind = kind(ontology, &property);
    let mut visited = FxHashSet::default();
    let mut stack = vec![property];
    while let Some(property) = stack.pop() {
        if !visited.insert(property.clone()) {
            continue;
        }
        for sub in ontology.sub_properties(&property) {
            if kind(ontology, sub) == property_kind
                && ontology.domains(sub).all(|domain| domain == class)
            {
                stack.push(sub.clone());
            }
        }
        properties.insert(property);
    }
}

fn related_classes(ontology: &Ontology, class: &Term) -> Vec<Term> {
    let mut related = ontology.super_classes(class).cloned().collect::<Vec<_>>();
    if matches!(class, Term::NamedNode(_)) {
        related.push(owl::THING.into());
    }
    let is_intersection = |node: &Term| {
        ontology
            .expression(node)
            .and_then(|e| e.members_of(ComponentsKind::IntersectionOf))
            .is_some()
    };
    related.extend(
        ontology
            .equivalent_classes(class)
            .filter(|c| is_intersection(c))
            .cloned(),
    );
    if let Some(members) = ontology
        .expression(class)
        .and_then(|e| e.members_of(ComponentsKind::IntersectionOf))
    {
        related.extend(
            members
                .iter()
                .filter(|m| ontology.expression(m).and_then(|e| e.as_restriction()).is_some())
                .cloned(),
        );
    }
    related.extend(
        ontology
            .expressions()
            .filter(|(_, e)| {
                e.members_of(ComponentsKind::UnionOf)
                    .is_some_and(|members| members.contains(class))
            })
            .map(|(node, _)| node.clone()),
    );
    let mut distinct = FxHashSet::default();
    related.retain(|c| c != class && distinct.insert(c.clone()));
    related
}

fn kind(ontology: &Ontology, node: &Term) -> Option<EntityKind> {
    match node {
        Term::NamedNode(node) => ontology.kind(node.as_ref()),
        _ => None,
    }
}
