//! Site types: grid coordinates, generic qubit values and symmetric pairs.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{IrError, IrResult};

/// A site on a two-dimensional grid, addressed by `(row, col)`.
///
/// Ordering is lexicographic by row, then column.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct GridQubit {
    /// Row index.
    pub row: i32,
    /// Column index.
    pub col: i32,
}

impl GridQubit {
    /// Create a grid qubit at the given position.
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// All qubits of a `rows × cols` rectangle anchored at the origin, in ascending order.
    pub fn rect(rows: i32, cols: i32) -> Vec<GridQubit> {
        (0..rows)
            .flat_map(|row| (0..cols).map(move |col| GridQubit::new(row, col)))
            .collect()
    }

    /// Manhattan distance to `other`.
    #[inline]
    pub fn manhattan_distance(&self, other: &GridQubit) -> u64 {
        u64::from(self.row.abs_diff(other.row)) + u64::from(self.col.abs_diff(other.col))
    }

    /// Two grid qubits are adjacent iff their Manhattan distance is exactly 1.
    #[inline]
    pub fn is_adjacent(&self, other: &GridQubit) -> bool {
        self.manhattan_distance(other) == 1
    }

    /// The qubit displaced by `(d_row, d_col)`, or `None` on overflow.
    pub fn offset(&self, d_row: i32, d_col: i32) -> Option<GridQubit> {
        Some(GridQubit::new(
            self.row.checked_add(d_row)?,
            self.col.checked_add(d_col)?,
        ))
    }
}

impl fmt::Display for GridQubit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "q({}, {})", self.row, self.col)
    }
}

impl From<(i32, i32)> for GridQubit {
    fn from((row, col): (i32, i32)) -> Self {
        GridQubit::new(row, col)
    }
}

/// A site value as handed over by circuit builders.
///
/// Only [`Qubit::Grid`] addresses a grid device; line and named qubits are
/// accepted by the containers but rejected by device validation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Qubit {
    /// A grid coordinate.
    Grid(GridQubit),
    /// A qubit on a one-dimensional line.
    Line(u32),
    /// A qubit identified only by name.
    Named(String),
}

impl Qubit {
    /// Shorthand for a grid qubit.
    pub const fn grid(row: i32, col: i32) -> Self {
        Qubit::Grid(GridQubit::new(row, col))
    }

    /// The grid coordinate, if this is a grid qubit.
    #[inline]
    pub fn as_grid(&self) -> Option<&GridQubit> {
        match self {
            Qubit::Grid(q) => Some(q),
            _ => None,
        }
    }
}

impl fmt::Display for Qubit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Qubit::Grid(q) => write!(f, "{q}"),
            Qubit::Line(x) => write!(f, "line({x})"),
            Qubit::Named(name) => write!(f, "{name}"),
        }
    }
}

impl From<GridQubit> for Qubit {
    fn from(q: GridQubit) -> Self {
        Qubit::Grid(q)
    }
}

/// An unordered pair of distinct qubits.
///
/// `QubitPair::new(a, b) == QubitPair::new(b, a)`; the pair is stored sorted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct QubitPair {
    low: Qubit,
    high: Qubit,
}

impl QubitPair {
    /// Create a pair. Fails if both qubits are the same.
    pub fn new(a: impl Into<Qubit>, b: impl Into<Qubit>) -> IrResult<Self> {
        let (a, b) = (a.into(), b.into());
        if a == b {
            return Err(IrError::IdenticalPair { qubit: a });
        }
        let (low, high) = if a < b { (a, b) } else { (b, a) };
        Ok(Self { low, high })
    }

    /// Both qubits, smaller first.
    pub fn qubits(&self) -> (&Qubit, &Qubit) {
        (&self.low, &self.high)
    }

    /// Whether `qubit` is one of the two ends.
    pub fn contains(&self, qubit: &Qubit) -> bool {
        &self.low == qubit || &self.high == qubit
    }

    /// Iterate over both qubits in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &Qubit> {
        [&self.low, &self.high].into_iter()
    }
}

impl fmt::Display for QubitPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.low, self.high)
    }
}
