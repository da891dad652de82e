use super::RenderSession;
use super::entity::render_entity;
use crate::error::RenderError;
use crate::registry::{NodeId, NodeSet};
use oxowl::EntityKind;
use oxrdf::{NamedNode, Term};
use rustc_hash::{FxHashMap, FxHashSet};
use std::io::Write;
use tracing::debug;

/// The order in which the entity collections are rendered.
const RENDER_ORDER: [EntityKind; 6] = [
    EntityKind::Class,
    EntityKind::Individual,
    EntityKind::Datatype,
    EntityKind::ObjectProperty,
    EntityKind::DataProperty,
    EntityKind::AnnotationProperty,
];

/// The entities reached by a filtered render.
#[derive(Debug, Default)]
pub struct Closure {
    visited: FxHashMap<EntityKind, NodeSet>,
    pending: Vec<NamedNode>,
}

impl Closure {
    /// Marks an entity as reached, returns `false` if it already was.
    fn visit(&mut self, kind: EntityKind, id: NodeId) -> bool {
        self.visited.entry(kind).or_default().insert(id)
    }
}

/// Renders every declared entity, each collection sorted by IRI.
pub fn render_all<W: Write>(session: &mut RenderSession<'_, W>) -> Result<(), RenderError> {
    let ontology = session.ontology;
    for kind in RENDER_ORDER {
        for entity in ontology.entities(kind) {
            render_entity(session, entity)?;
        }
    }
    Ok(())
}

/// Renders the declared entities named in `filter`, then every entity they link to, transitively.
///
/// Names are full IRIs or prefixed names. Unknown names are ignored.
pub fn render_filtered<W: Write>(
    session: &mut RenderSession<'_, W>,
    filter: &[String],
) -> Result<(), RenderError> {
    let ontology = session.ontology;
    let filter = filter.iter().map(String::as_str).collect::<FxHashSet<_>>();
    session.closure = Some(Closure::default());
    let mut requested = 0_usize;
    for kind in RENDER_ORDER {
        for entity in ontology.entities(kind) {
            let iri = entity.iri().as_str();
            if !filter.contains(iri) && !filter.contains(session.prefixes.short_form(iri).as_str()) {
                continue;
            }
            requested += 1;
            let id = session.registry.id_of(&entity.into());
            if visit(session, kind, id) {
                render_entity(session, entity)?;
            }
        }
    }
    debug!(requested, "Rendering the closure of the requested entities");
    while let Some(iri) = session.closure.as_mut().and_then(|c| c.pending.pop()) {
        if let Some(entity) = ontology.entity(iri.as_ref()) {
            render_entity(session, entity)?;
        }
    }
    Ok(())
}

/// Queues the entity `to` if it is reached for the first time by a filtered render.
pub fn reached<W: Write>(session: &mut RenderSession<'_, W>, to: &Term, id: NodeId) {
    let Term::NamedNode(iri) = to else {
        return;
    };
    let Some(entity) = session.ontology.entity(iri.as_ref()) else {
        return;
    };
    if let Some(closure) = &mut session.closure {
        if closure.visit(entity.kind(), id) {
            closure.pending.push(iri.clone());
        }
    }
}

fn visit<W: Write>(session: &mut RenderSession<'_, W>, kind: EntityKind, id: NodeId) -> bool {
    session
        .closure
        .as_mut()
        .is_some_and(|closure| closure.visit(kind, id))
}
