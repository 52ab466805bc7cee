//! Error types for the IR crate.

use crate::qubit::Qubit;
use thiserror::Error;

/// Errors that can occur while building circuits.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum IrError {
    /// Gate requires a different number of qubits.
    #[error("Gate '{gate_name}' requires {expected} qubits, got {got}")]
    QubitCountMismatch {
        /// Name of the gate.
        gate_name: String,
        /// Expected number of qubits.
        expected: usize,
        /// Actual number of qubits provided.
        got: usize,
    },

    /// Duplicate qubit in operation.
    #[error("Duplicate qubit {qubit} in operation{}", format_gate_context(.gate_name))]
    DuplicateQubit {
        /// The duplicate qubit.
        qubit: Qubit,
        /// Optional gate name for context.
        gate_name: Option<String>,
    },

    /// Two operations of one moment act on the same qubit.
    #[error("Overlapping operations on {qubit} in moment")]
    OverlappingOperations {
        /// The shared qubit.
        qubit: Qubit,
    },

    /// A symmetric pair was built from one qubit twice.
    #[error("A qubit pair cannot have identical qubits ({qubit})")]
    IdenticalPair {
        /// The repeated qubit.
        qubit: Qubit,
    },

    /// A composite operation lists qubits other than those of its parts.
    #[error("Subcircuit qubit list does not match its operations")]
    SubcircuitQubitMismatch,

    /// JSON (de)serialization failed.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Helper function to format optional gate context.
#[allow(clippy::ref_option)]
fn format_gate_context(gate_name: &Option<String>) -> String {
    match gate_name {
        Some(name) => format!(" (gate: {name})"),
        None => String::new(),
    }
}

/// Result type for IR operations.
pub type IrResult<T> = Result<T, IrError>;
