use super::RenderSession;
use super::expression::render_expression;
use super::link::{LinkKind, emit};
use crate::config::Setting;
use crate::error::RenderError;
use oxowl::{EntityKind, EntityRef};
use oxrdf::Term;
use std::io::Write;

/// The setting of the fill color of the nodes of a kind.
pub fn kind_color(kind: EntityKind) -> Setting {
    match kind {
        EntityKind::Class => Setting::ClassColor,
        EntityKind::Datatype => Setting::DatatypeColor,
        EntityKind::ObjectProperty => Setting::ObjectPropertyColor,
        EntityKind::DataProperty => Setting::DataPropertyColor,
        EntityKind::AnnotationProperty => Setting::AnnotationPropertyColor,
        EntityKind::Individual => Setting::IndividualColor,
    }
}

/// Writes the node of `entity`, then its super-expressions, types or super-properties and the links to them.
pub fn render_entity<W: Write>(
    session: &mut RenderSession<'_, W>,
    entity: EntityRef<'_>,
) -> Result<(), RenderError> {
    let ontology = session.ontology;
    let node = Term::from(entity);
    let id = session.registry.id_of(&node);
    write_node(session, entity)?;
    match entity.kind() {
        EntityKind::Class => {
            for parent in ontology.super_classes(&node) {
                render_expression(session, parent)?;
                emit(session, id, parent, LinkKind::SubClassOf)?;
            }
            for equivalent in ontology.equivalent_classes(&node) {
                render_expression(session, equivalent)?;
                emit(session, id, equivalent, LinkKind::EquivalentClass)?;
            }
        }
        EntityKind::Individual => {
            for class in ontology.types(&node) {
                render_expression(session, class)?;
                emit(session, id, class, LinkKind::TypeOf)?;
            }
        }
        EntityKind::ObjectProperty | EntityKind::DataProperty | EntityKind::AnnotationProperty => {
            for parent in ontology.super_properties(&node) {
                emit(session, id, parent, LinkKind::SubPropertyOf(entity.kind()))?;
            }
        }
        EntityKind::Datatype => (),
    }
    Ok(())
}

fn write_node<W: Write>(
    session: &mut RenderSession<'_, W>,
    entity: EntityRef<'_>,
) -> Result<(), RenderError> {
    let config = session.config;
    let id = session.registry.id_of(&entity.into());
    let name = session.short_name(entity.iri().as_str());
    let rows = if entity.kind() == EntityKind::Class {
        property_rows(session, entity)
    } else {
        Vec::new()
    };
    session
        .out
        .begin_node(id, config.color(kind_color(entity.kind())))?;
    session.out.begin_table(0)?;
    session.out.single_cell_row(1, &name, None)?;
    for (name, kind) in rows {
        session
            .out
            .single_cell_row(1, &name, Some(config.color(kind_color(kind))))?;
    }
    session.out.end_table(0)?;
    session.out.end_node()?;
    Ok(())
}

/// The rows of the class-property table: object, then data, then annotation properties.
fn property_rows<W: Write>(
    session: &RenderSession<'_, W>,
    class: EntityRef<'_>,
) -> Vec<(String, EntityKind)> {
    let Some(class_properties) = session.class_properties else {
        return Vec::new();
    };
    let mut rows = class_properties
        .properties(session.ontology, &class.into())
        .into_iter()
        .filter_map(|property| {
            let kind = session.ontology.kind(property.as_ref())?;
            kind.is_property()
                .then(|| (session.short_name(property.as_str()), kind))
        })
        .collect::<Vec<_>>();
    rows.sort_by(|(a_name, a_kind), (b_name, b_kind)| {
        a_kind.cmp(b_kind).then_with(|| a_name.cmp(b_name))
    });
    rows.dedup();
    rows
}
