//! Human-readable rendering of both graph variants.

use std::fmt::{self, Display, Write};

use crate::graph::{DirectedGraph, Label, UndirectedGraph};

/// Bodies shorter than this are printed on a single line.
const SINGLE_LINE_LIMIT: usize = 70;

impl Display for DirectedGraph {
    /// Fixed-width adjacency matrix with a column header.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.vertex_count();
        if n == 0 {
            return writeln!(f, "EMPTY GRAPH");
        }

        writeln!(f, "GRAPH ({} vertices):", n)?;
        let header: Vec<String> = (0..n).map(|i| format!("{:>2}", i)).collect();
        writeln!(f, "   |{}", header.join(" "))?;
        writeln!(f, "{}", "-".repeat(n * 3 + 3))?;
        for (i, row) in self.matrix().iter().enumerate() {
            let cells: Vec<String> = row.iter().map(|w| format!("{:>2}", w)).collect();
            writeln!(f, "{:>2} |{}", i, cells.join(" "))?;
        }
        Ok(())
    }
}

impl<V: Label + Display> Display for UndirectedGraph<V> {
    /// Braced `vertex: [neighbors]` listing, one line if short enough.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut entries = Vec::with_capacity(self.vertex_count());
        for v in self.get_vertices() {
            let mut entry = String::new();
            write!(entry, "{}: [", v)?;
            for (i, n) in self.neighbors(&v).unwrap_or_default().iter().enumerate() {
                if i > 0 {
                    entry.push_str(", ");
                }
                write!(entry, "{}", n)?;
            }
            entry.push(']');
            entries.push(entry);
        }

        let body = entries.join("\n  ");
        if body.len() < SINGLE_LINE_LIMIT {
            write!(f, "GRAPH: {{{}}}", entries.join(", "))
        } else {
            write!(f, "GRAPH: {{\n  {}}}", body)
        }
    }
}
