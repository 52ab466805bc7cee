//! Text rendering of a grid topology.
//!
//! Sites are laid out on the rows and columns that hold at least one site,
//! joined by `───` to an eastern neighbour and `│` to a southern one. Holes
//! stay blank; empty rows and columns are skipped.

use std::collections::BTreeSet;

use crate::topology::GridTopology;

const HORIZONTAL: &str = "───";
const VERTICAL: &str = "│";

/// Render `topology` as a multi-line diagram.
///
/// ```
/// use gridq_device::{GridTopology, diagram};
///
/// let text = diagram::render(&GridTopology::rect(2, 2));
/// assert_eq!(text, "q(0, 0)───q(0, 1)\n│         │\nq(1, 0)───q(1, 1)");
/// ```
pub fn render(topology: &GridTopology) -> String {
    let rows: BTreeSet<i32> = topology.iter().map(|q| q.row).collect();
    let cols: BTreeSet<i32> = topology.iter().map(|q| q.col).collect();

    let width = topology
        .iter()
        .map(|q| q.to_string().chars().count())
        .max()
        .unwrap_or(0);
    let link = HORIZONTAL.chars().count();
    let cell = width + link;

    let mut lines = Vec::with_capacity(rows.len() * 2);
    for (i, &row) in rows.iter().enumerate() {
        let mut sites = String::new();
        let mut links = String::new();
        for &col in &cols {
            let Some(site) = topology.at(row, col) else {
                sites.push_str(&" ".repeat(cell));
                links.push_str(&" ".repeat(cell));
                continue;
            };

            // An eastern neighbour is always the next occupied column.
            let east = site.offset(0, 1).is_some_and(|n| topology.contains(&n));
            sites.push_str(&format!("{:<width$}", site.to_string()));
            sites.push_str(&if east {
                HORIZONTAL.to_string()
            } else {
                " ".repeat(link)
            });

            let south = site.offset(1, 0).is_some_and(|n| topology.contains(&n));
            if south {
                links.push_str(VERTICAL);
                links.push_str(&" ".repeat(cell - 1));
            } else {
                links.push_str(&" ".repeat(cell));
            }
        }
        lines.push(sites.trim_end().to_string());
        if i + 1 < rows.len() {
            lines.push(links.trim_end().to_string());
        }
    }
    lines.join("\n")
}
