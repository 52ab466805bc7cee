//! Moments: operations scheduled into the same time step.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::error::{IrError, IrResult};
use crate::operation::Operation;
use crate::qubit::Qubit;

/// A set of operations executed in the same time step.
///
/// `push` and `from_operations` keep the operations disjoint. The field is
/// public, so moments assembled by hand or deserialized may not be; devices
/// re-check with [`Moment::find_overlap`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Moment {
    /// Operations in this moment.
    pub operations: Vec<Operation>,
}

impl Moment {
    /// Create an empty moment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a moment from operations that must not share qubits.
    pub fn from_operations(operations: impl IntoIterator<Item = Operation>) -> IrResult<Self> {
        let mut moment = Self::new();
        for op in operations {
            moment.push(op)?;
        }
        Ok(moment)
    }

    /// Add an operation, rejecting it if it shares a qubit with the moment.
    pub fn push(&mut self, operation: Operation) -> IrResult<()> {
        if let Some(q) = operation.qubits().iter().find(|q| self.operates_on_qubit(q)) {
            return Err(IrError::OverlappingOperations { qubit: q.clone() });
        }
        self.operations.push(operation);
        Ok(())
    }

    /// Whether any operation acts on any of `qubits`.
    pub fn operates_on(&self, qubits: &[Qubit]) -> bool {
        qubits.iter().any(|q| self.operates_on_qubit(q))
    }

    fn operates_on_qubit(&self, qubit: &Qubit) -> bool {
        self.operations.iter().any(|op| op.acts_on(qubit))
    }

    /// The first qubit used by more than one operation, if any.
    pub fn find_overlap(&self) -> Option<&Qubit> {
        let mut seen: FxHashSet<&Qubit> = FxHashSet::default();
        self.operations
            .iter()
            .flat_map(|op| op.qubits().iter())
            .find(|q| !seen.insert(*q))
    }

    /// Qubits acted on, in operation order.
    pub fn qubits(&self) -> impl Iterator<Item = &Qubit> {
        self.operations.iter().flat_map(|op| op.qubits().iter())
    }

    /// Iterate over the operations.
    pub fn iter(&self) -> std::slice::Iter<'_, Operation> {
        self.operations.iter()
    }

    /// Number of operations.
    pub fn len(&self) -> usize {
        self.operations.len()
    }

    /// Check if the moment has no operations.
    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }
}

impl<'a> IntoIterator for &'a Moment {
    type Item = &'a Operation;
    type IntoIter = std::slice::Iter<'a, Operation>;

    fn into_iter(self) -> Self::IntoIter {
        self.operations.iter()
    }
}
