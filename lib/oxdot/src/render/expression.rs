use super::RenderSession;
use super::link::expression_links;
use crate::config::Setting;
use crate::error::RenderError;
use crate::literal::non_negative_integer;
use oxowl::{ClassExpression, Ontology};
use oxrdf::Term;
use std::io::Write;
use tracing::warn;

/// Returns the expression at `node` if it is expanded inside the table of its parent.
///
/// `path` holds the expressions being expanded, which are only referenced.
pub fn nested_expression<'a>(
    ontology: &'a Ontology,
    node: &Term,
    path: &[Term],
) -> Option<&'a ClassExpression> {
    if !matches!(node, Term::BlankNode(_)) || path.contains(node) {
        return None;
    }
    ontology.expression(node).filter(|e| e.is_supported())
}

/// Writes the node of an anonymous class expression and its links, once per expression.
///
/// Named classes are ignored. Unsupported expressions are logged and skipped.
pub fn render_expression<W: Write>(
    session: &mut RenderSession<'_, W>,
    node: &Term,
) -> Result<(), RenderError> {
    let ontology = session.ontology;
    let config = session.config;
    let Some(expression) = ontology.expression(node) else {
        return Ok(());
    };
    let fill_color = match expression {
        ClassExpression::Restriction(_) => Setting::ComponentRestrictionColor,
        ClassExpression::Components(_) => Setting::ComponentsClassExpressionColor,
        ClassExpression::Complement(_) => Setting::ComplementOfClassExpressionColor,
        ClassExpression::Unsupported => {
            warn!("Unsupported class expression: {node}");
            return Ok(());
        }
    };
    let id = session.registry.id_of(node);
    if !session.expressions.insert(id) {
        return Ok(());
    }
    let mut path = vec![node.clone()];
    session.out.begin_node(id, config.color(fill_color))?;
    write_table(session, expression, 0, &mut path)?;
    session.out.end_node()?;
    expression_links(session, id, expression, &mut path)
}

fn write_table<W: Write>(
    session: &mut RenderSession<'_, W>,
    expression: &ClassExpression,
    tab: usize,
    path: &mut Vec<Term>,
) -> Result<(), RenderError> {
    let config = session.config;
    let header_color = config.color(Setting::ClassExpressionColor);
    let Some(name) = expression.name() else {
        return Ok(());
    };
    session.out.begin_table(tab)?;
    match expression {
        ClassExpression::Restriction(restriction) => {
            let colspan = if restriction.cardinality.is_some() { 3 } else { 2 };
            session
                .out
                .table_header(tab + 1, name, header_color, Some(colspan))?;
            session.out.begin_row(tab + 1)?;
            if !matches!(restriction.property, Term::NamedNode(_)) {
                warn!(
                    "Unsupported anonymous property in {name}: {}",
                    restriction.property
                );
            }
            let property = session.reference(&restriction.property);
            session.out.text_cell(tab + 2, &property, None)?;
            if let Some(cardinality) = restriction.cardinality {
                let literal = non_negative_integer(cardinality.into())?;
                let text = session
                    .literals
                    .render(literal.as_ref(), config, session.prefixes)?;
                session
                    .out
                    .text_cell(tab + 2, &text, Some(config.color(Setting::LiteralColor)))?;
            }
            write_cell(session, &restriction.value, tab + 2, path)?;
            session.out.end_row(tab + 1)?;
        }
        ClassExpression::Components(components) => {
            session.out.table_header(tab + 1, name, header_color, None)?;
            for member in &components.members {
                session.out.begin_row(tab + 1)?;
                write_cell(session, member, tab + 2, path)?;
                session.out.end_row(tab + 1)?;
            }
        }
        ClassExpression::Complement(operand) => {
            session
                .out
                .table_header(tab + 1, name, header_color, Some(2))?;
            session.out.begin_row(tab + 1)?;
            write_cell(session, operand, tab + 2, path)?;
            session.out.end_row(tab + 1)?;
        }
        ClassExpression::Unsupported => (),
    }
    session.out.end_table(tab)?;
    Ok(())
}

/// Writes a literal cell, a cell with a nested table, or a reference cell.
fn write_cell<W: Write>(
    session: &mut RenderSession<'_, W>,
    node: &Term,
    tab: usize,
    path: &mut Vec<Term>,
) -> Result<(), RenderError> {
    let config = session.config;
    if let Term::Literal(literal) = node {
        let text = session
            .literals
            .render(literal.as_ref(), config, session.prefixes)?;
        session
            .out
            .text_cell(tab, &text, Some(config.color(Setting::LiteralColor)))?;
        return Ok(());
    }
    if let Some(nested) = nested_expression(session.ontology, node, path) {
        session.out.begin_cell(tab)?;
        path.push(node.clone());
        write_table(session, nested, tab + 1, path)?;
        path.pop();
        session.out.end_cell(tab)?;
        return Ok(());
    }
    let reference = session.reference(node);
    session.out.text_cell(tab, &reference, None)?;
    Ok(())
}
