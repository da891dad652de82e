use crate::registry::NodeId;
use std::io::{self, Write};

/// Writes the DOT statements and the HTML-like tables of the node labels.
///
/// Table lines are indented with one space per nesting level.
pub struct DotWriter<W: Write> {
    inner: W,
}

impl<W: Write> DotWriter<W> {
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    pub fn into_inner(self) -> W {
        self.inner
    }

    pub fn begin_document(&mut self) -> io::Result<()> {
        self.inner
            .write_all(b"digraph OWL {\n rankdir=\"LR\";\n node[shape=plaintext];\n")
    }

    pub fn end_document(&mut self) -> io::Result<()> {
        self.inner.write_all(b"\n}\n")?;
        self.inner.flush()
    }

    pub fn begin_node(&mut self, id: NodeId, fill_color: &str) -> io::Result<()> {
        writeln!(
            self.inner,
            "{id}[style=filled,fillcolor=\"{fill_color}\",label=<"
        )
    }

    pub fn end_node(&mut self) -> io::Result<()> {
        self.inner.write_all(b">];\n")
    }

    /// Writes `from->to`, with `dir=both` for a bidirectional edge.
    pub fn edge(
        &mut self,
        from: NodeId,
        to: NodeId,
        color: Option<&str>,
        bidirectional: bool,
    ) -> io::Result<()> {
        write!(self.inner, "{from}->{to}")?;
        match (bidirectional, color) {
            (true, Some(color)) => write!(self.inner, "[dir=both,color=\"{color}\"]")?,
            (true, None) => self.inner.write_all(b"[dir=both]")?,
            (false, Some(color)) => write!(self.inner, "[color=\"{color}\"]")?,
            (false, None) => (),
        }
        self.inner.write_all(b";\n")
    }

    pub fn begin_table(&mut self, tab: usize) -> io::Result<()> {
        self.indent(tab)?;
        self.inner
            .write_all(b"<table border='0' cellborder='1' cellspacing='0'>\n")
    }

    pub fn end_table(&mut self, tab: usize) -> io::Result<()> {
        self.end_tag("table", tab)
    }

    pub fn begin_row(&mut self, tab: usize) -> io::Result<()> {
        self.indent(tab)?;
        self.inner.write_all(b"<tr>\n")
    }

    pub fn end_row(&mut self, tab: usize) -> io::Result<()> {
        self.end_tag("tr", tab)
    }

    /// Opens a cell that contains a nested table.
    pub fn begin_cell(&mut self, tab: usize) -> io::Result<()> {
        self.indent(tab)?;
        self.inner.write_all(b"<td>\n")
    }

    pub fn end_cell(&mut self, tab: usize) -> io::Result<()> {
        self.end_tag("td", tab)
    }

    /// Writes a cell with already escaped text.
    pub fn text_cell(&mut self, tab: usize, text: &str, background: Option<&str>) -> io::Result<()> {
        self.indent(tab)?;
        match background {
            Some(background) => writeln!(self.inner, "<td bgcolor=\"{background}\">{text}</td>"),
            None => writeln!(self.inner, "<td>{text}</td>"),
        }
    }

    /// Writes a table row with a single cell.
    pub fn single_cell_row(
        &mut self,
        tab: usize,
        text: &str,
        background: Option<&str>,
    ) -> io::Result<()> {
        self.begin_row(tab)?;
        self.text_cell(tab + 1, text, background)?;
        self.end_row(tab)
    }

    pub fn table_header(
        &mut self,
        tab: usize,
        header: &str,
        background: &str,
        colspan: Option<usize>,
    ) -> io::Result<()> {
        self.indent(tab)?;
        self.inner.write_all(b"<th port=\"header\">\n")?;
        self.indent(tab + 1)?;
        self.inner.write_all(b"<td")?;
        if let Some(colspan) = colspan {
            write!(self.inner, " colspan=\"{colspan}\"")?;
        }
        writeln!(self.inner, " bgcolor=\"{background}\">{header}</td>")?;
        self.end_tag("th", tab)
    }

    fn end_tag(&mut self, tag: &str, tab: usize) -> io::Result<()> {
        self.indent(tab)?;
        writeln!(self.inner, "</{tag}>")
    }

    fn indent(&mut self, tab: usize) -> io::Result<()> {
        for _ in 0..tab {
            self.inner.write_all(b" ")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::NodeRegistry;
    use oxrdf::{BlankNode, Term};

    fn write(f: impl FnOnce(&mut DotWriter<Vec<u8>>) -> io::Result<()>) -> String {
        let mut writer = DotWriter::new(Vec::new());
        f(&mut writer).unwrap();
        String::from_utf8(writer.into_inner()).unwrap()
    }

    #[test]
    fn test_edges() {
        let mut registry = NodeRegistry::new();
        let a = registry.id_of(&Term::from(BlankNode::default()));
        let b = registry.id_of(&Term::from(BlankNode::default()));
        assert_eq!(
            write(|w| w.edge(a, b, Some("red"), false)),
            "n1->n2[color=\"red\"];\n"
        );
        assert_eq!(
            write(|w| w.edge(a, b, Some("red"), true)),
            "n1->n2[dir=both,color=\"red\"];\n"
        );
        assert_eq!(write(|w| w.edge(b, a, None, false)), "n2->n1;\n");
    }

    #[test]
    fn test_table() {
        let text = write(|w| {
            w.begin_table(1)?;
            w.table_header(2, "OneOf", "#CCCC00", None)?;
            w.single_cell_row(2, ":i", Some("gray"))?;
            w.end_table(1)
        });
        assert_eq!(
            text,
            " <table border='0' cellborder='1' cellspacing='0'>\n  <th port=\"header\">\n   <td bgcolor=\"#CCCC00\">OneOf</td>\n  </th>\n  <tr>\n   <td bgcolor=\"gray\">:i</td>\n  </tr>\n </table>\n"
        );
    }
}
