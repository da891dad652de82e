use super::RenderSession;
use super::expression::nested_expression;
use super::scope;
use crate::config::Setting;
use crate::error::RenderError;
use crate::registry::NodeId;
use oxowl::{ClassExpression, ComponentsKind, EntityKind};
use oxrdf::Term;
use std::io::Write;

/// The relation drawn by an edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind {
    SubClassOf,
    EquivalentClass,
    /// From a property of the given kind.
    SubPropertyOf(EntityKind),
    TypeOf,
    RestrictionValue,
    RestrictionProperty,
    Member(ComponentsKind),
    ComplementOperand,
}

/// Writes the edge `from->to`.
///
/// Literals and anonymous nodes without an expression node get no edge.
/// In filtered mode, the target entity is queued for rendering.
pub fn emit<W: Write>(
    session: &mut RenderSession<'_, W>,
    from: NodeId,
    to: &Term,
    kind: LinkKind,
) -> Result<(), RenderError> {
    let ontology = session.ontology;
    let config = session.config;
    match to {
        Term::NamedNode(_) => (),
        Term::BlankNode(_) => {
            if !ontology.expression(to).is_some_and(ClassExpression::is_supported) {
                return Ok(());
            }
        }
        _ => return Ok(()),
    }
    let color = color(session, to, kind).map(|setting| config.color(setting));
    let target = session.registry.id_of(to);
    session
        .out
        .edge(from, target, color, kind == LinkKind::EquivalentClass)?;
    scope::reached(session, to, target);
    Ok(())
}

fn color<W: Write>(session: &RenderSession<'_, W>, to: &Term, kind: LinkKind) -> Option<Setting> {
    match kind {
        LinkKind::SubClassOf
        | LinkKind::EquivalentClass
        | LinkKind::ComplementOperand
        | LinkKind::Member(ComponentsKind::UnionOf | ComponentsKind::IntersectionOf) => {
            Some(Setting::ClassColor)
        }
        LinkKind::TypeOf | LinkKind::Member(ComponentsKind::OneOf) => {
            Some(Setting::IndividualColor)
        }
        LinkKind::SubPropertyOf(subject) => match subject {
            EntityKind::AnnotationProperty => Some(Setting::AnnotationPropertyColor),
            EntityKind::DataProperty => Some(Setting::DataPropertyColor),
            EntityKind::ObjectProperty => Some(Setting::ObjectPropertyColor),
            _ => None,
        },
        LinkKind::RestrictionValue => session
            .ontology
            .is_class(to)
            .then_some(Setting::ClassColor),
        LinkKind::RestrictionProperty => match to {
            Term::NamedNode(to)
                if session.ontology.kind(to.as_ref()) == Some(EntityKind::ObjectProperty) =>
            {
                Some(Setting::ObjectPropertyColor)
            }
            _ => None,
        },
    }
}

/// Writes the edges of an expression node, following the expressions nested in its table.
///
/// The edges of nested expressions start from the node `from`.
pub fn expression_links<W: Write>(
    session: &mut RenderSession<'_, W>,
    from: NodeId,
    expression: &ClassExpression,
    path: &mut Vec<Term>,
) -> Result<(), RenderError> {
    match expression {
        ClassExpression::Restriction(restriction) => {
            link_or_follow(
                session,
                from,
                &restriction.value,
                LinkKind::RestrictionValue,
                path,
            )?;
            emit(
                session,
                from,
                &restriction.property,
                LinkKind::RestrictionProperty,
            )
        }
        ClassExpression::Components(components) => {
            for member in &components.members {
                link_or_follow(session, from, member, LinkKind::Member(components.kind), path)?;
            }
            Ok(())
        }
        ClassExpression::Complement(operand) => {
            link_or_follow(session, from, operand, LinkKind::ComplementOperand, path)
        }
        ClassExpression::Unsupported => Ok(()),
    }
}

fn link_or_follow<W: Write>(
    session: &mut RenderSession<'_, W>,
    from: NodeId,
    to: &Term,
    kind: LinkKind,
    path: &mut Vec<Term>,
) -> Result<(), RenderError> {
    let Some(nested) = nested_expression(session.ontology, to, path) else {
        return emit(session, from, to, kind);
    };
    path.push(to.clone());
    expression_links(session, from, nested, path)?;
    path.pop();
    Ok(())
}
