//! Grid topology: the frozen set of sites and its adjacency queries.
//!
//! Adjacency is a property of coordinates alone: two sites are neighbours iff
//! their Manhattan distance is exactly 1. The topology only decides which
//! coordinates exist.

use std::collections::BTreeSet;

use gridq_ir::{GridQubit, QubitPair};
use serde::{Deserialize, Serialize};

/// Offsets probed by [`GridTopology::neighbors_of`], in order: north, south, east, west.
const NEIGHBOR_OFFSETS: [(i32, i32); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// An immutable set of grid sites.
///
/// Built once; repeated coordinates collapse silently. Two topologies are
/// equal iff they hold the same sites, whatever the construction order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GridTopology {
    qubits: BTreeSet<GridQubit>,
}

impl GridTopology {
    /// Create a topology from sites.
    pub fn from_qubits(qubits: impl IntoIterator<Item = GridQubit>) -> Self {
        Self {
            qubits: qubits.into_iter().collect(),
        }
    }

    /// A full `rows × cols` rectangle anchored at the origin.
    pub fn rect(rows: i32, cols: i32) -> Self {
        Self::from_qubits(GridQubit::rect(rows, cols))
    }

    /// Parse an ASCII layout.
    ///
    /// Each line is a row and each character a column; alphanumeric characters
    /// mark sites, anything else (`.`, `-`, spaces) is a hole. Leading and
    /// trailing blank lines are ignored.
    ///
    /// ```
    /// use gridq_device::GridTopology;
    ///
    /// let topo = GridTopology::parse_layout("AB\n.C");
    /// assert_eq!(topo.len(), 3);
    /// assert!(topo.at(1, 0).is_none());
    /// ```
    pub fn parse_layout(layout: &str) -> Self {
        let lines: Vec<&str> = layout.lines().collect();
        let first = lines.iter().position(|l| !l.trim().is_empty()).unwrap_or(0);
        let last = lines
            .iter()
            .rposition(|l| !l.trim().is_empty())
            .map_or(0, |i| i + 1);

        let mut qubits = BTreeSet::new();
        for (row, line) in (0_i32..).zip(lines.get(first..last).unwrap_or_default()) {
            for (col, ch) in (0_i32..).zip(line.chars()) {
                if ch.is_alphanumeric() {
                    qubits.insert(GridQubit::new(row, col));
                }
            }
        }
        Self { qubits }
    }

    /// The frozen site set.
    pub fn qubits(&self) -> &BTreeSet<GridQubit> {
        &self.qubits
    }

    /// Iterate over sites in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = &GridQubit> {
        self.qubits.iter()
    }

    /// Number of sites.
    pub fn len(&self) -> usize {
        self.qubits.len()
    }

    /// Check if the topology has no sites.
    pub fn is_empty(&self) -> bool {
        self.qubits.is_empty()
    }

    /// Whether `qubit` is a site of this topology.
    #[inline]
    pub fn contains(&self, qubit: &GridQubit) -> bool {
        self.qubits.contains(qubit)
    }

    /// Present neighbours of `qubit`, in the order north, south, east, west
    /// (`row + 1`, `row - 1`, `col + 1`, `col - 1`).
    pub fn neighbors_of(&self, qubit: &GridQubit) -> Vec<GridQubit> {
        NEIGHBOR_OFFSETS
            .iter()
            .filter_map(|&(dr, dc)| qubit.offset(dr, dc))
            .filter(|q| self.contains(q))
            .collect()
    }

    /// The site at `(row, col)`, if present.
    pub fn at(&self, row: i32, col: i32) -> Option<GridQubit> {
        let q = GridQubit::new(row, col);
        self.contains(&q).then_some(q)
    }

    /// Sites in row `row`, ascending.
    pub fn row(&self, row: i32) -> Vec<GridQubit> {
        self.qubits
            .range(GridQubit::new(row, i32::MIN)..=GridQubit::new(row, i32::MAX))
            .copied()
            .collect()
    }

    /// Sites in column `col`, ascending.
    pub fn col(&self, col: i32) -> Vec<GridQubit> {
        self.qubits.iter().filter(|q| q.col == col).copied().collect()
    }

    /// Whether `a` and `b` are neighbours (Manhattan distance exactly 1).
    ///
    /// Symmetric and irreflexive; does not require either site to be present.
    #[inline]
    pub fn is_adjacent(&self, a: &GridQubit, b: &GridQubit) -> bool {
        a.is_adjacent(b)
    }

    /// Every edge between present neighbours, sorted.
    pub fn pairs(&self) -> BTreeSet<QubitPair> {
        self.qubits
            .iter()
            .flat_map(|q| {
                [q.offset(0, 1), q.offset(1, 0)]
                    .into_iter()
                    .flatten()
                    .filter(|n| self.contains(n))
                    .filter_map(move |n| QubitPair::new(*q, n).ok())
            })
            .collect()
    }

    /// Bounding box as `(min_row, max_row, min_col, max_col)`.
    pub fn bounds(&self) -> Option<(i32, i32, i32, i32)> {
        let first = self.qubits.first()?;
        let last = self.qubits.last()?;
        let min_col = self.qubits.iter().map(|q| q.col).min()?;
        let max_col = self.qubits.iter().map(|q| q.col).max()?;
        Some((first.row, last.row, min_col, max_col))
    }
}

impl FromIterator<GridQubit> for GridTopology {
    fn from_iter<I: IntoIterator<Item = GridQubit>>(iter: I) -> Self {
        Self::from_qubits(iter)
    }
}
