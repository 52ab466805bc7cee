//! Circuits as ordered sequences of moments.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::error::IrResult;
use crate::moment::Moment;
use crate::operation::Operation;
use crate::qubit::Qubit;

/// A quantum circuit: an ordered sequence of [`Moment`]s.
///
/// The moment order is the circuit's time order; [`Circuit::all_operations`]
/// walks moments in that order, and operations within a moment in insertion
/// order, so scans over it are reproducible.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Circuit {
    /// Name of the circuit.
    #[serde(default)]
    name: String,
    /// Moments in time order.
    moments: Vec<Moment>,
}

impl Circuit {
    /// Create a new empty circuit.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            moments: vec![],
        }
    }

    /// Create a circuit from moments.
    pub fn from_moments(name: impl Into<String>, moments: impl IntoIterator<Item = Moment>) -> Self {
        Self {
            name: name.into(),
            moments: moments.into_iter().collect(),
        }
    }

    /// Get the circuit name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The moments, in time order.
    pub fn moments(&self) -> &[Moment] {
        &self.moments
    }

    /// Mutable access to the moments.
    pub fn moments_mut(&mut self) -> &mut [Moment] {
        &mut self.moments
    }

    /// Consume the circuit, returning its moments.
    pub fn into_moments(self) -> Vec<Moment> {
        self.moments
    }

    /// Append a moment at the end.
    pub fn push_moment(&mut self, moment: Moment) {
        self.moments.push(moment);
    }

    /// Remove moments without operations.
    pub fn retain_non_empty(&mut self) {
        self.moments.retain(|m| !m.is_empty());
    }

    /// Every operation, in moment order then operation order.
    pub fn all_operations(&self) -> impl Iterator<Item = &Operation> {
        self.moments.iter().flat_map(|m| m.operations.iter())
    }

    /// Total number of operations.
    pub fn num_operations(&self) -> usize {
        self.moments.iter().map(Moment::len).sum()
    }

    /// Number of moments.
    pub fn depth(&self) -> usize {
        self.moments.len()
    }

    /// All qubits acted on, sorted.
    pub fn qubits(&self) -> BTreeSet<&Qubit> {
        self.all_operations()
            .flat_map(|op| op.qubits().iter())
            .collect()
    }

    /// Measurement keys in scan order, repeats included.
    pub fn measurement_keys(&self) -> impl Iterator<Item = &str> {
        self.all_operations().filter_map(Operation::measurement_key)
    }

    /// Insert `operation` as early as `can_place` allows.
    ///
    /// Candidate moments start right after the last moment touching any of the
    /// operation's qubits; the first one accepted by `can_place` receives it,
    /// otherwise a new moment is appended. Returns the moment index used.
    pub fn insert_earliest(
        &mut self,
        operation: Operation,
        can_place: impl Fn(&Operation, &Moment) -> bool,
    ) -> usize {
        let start = self
            .moments
            .iter()
            .rposition(|m| m.operates_on(operation.qubits()))
            .map_or(0, |i| i + 1);

        let target = (start..self.moments.len()).find(|&i| can_place(&operation, &self.moments[i]));
        match target {
            Some(i) => {
                // No moment at or after `start` touches the operation's qubits.
                self.moments[i].operations.push(operation);
                i
            }
            None => {
                self.moments.push(Moment {
                    operations: vec![operation],
                });
                self.moments.len() - 1
            }
        }
    }

    /// Insert `operation` as early as the generic no-overlap rule allows.
    pub fn append(&mut self, operation: Operation) -> usize {
        self.insert_earliest(operation, |op, moment| !moment.operates_on(op.qubits()))
    }

    /// Serialize to JSON.
    pub fn to_json(&self) -> IrResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Deserialize from JSON.
    pub fn from_json(source: &str) -> IrResult<Self> {
        Ok(serde_json::from_str(source)?)
    }
}
