//! Error types for the optimization pipeline.

use gridq_device::DeviceError;
use gridq_ir::{IrError, Operation, Qubit};
use thiserror::Error;

/// Errors that can occur while optimizing a circuit.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CompileError {
    /// Strategy name not known to the pipeline.
    #[error("Unknown optimizer type: {name}")]
    UnknownStrategy {
        /// The rejected name.
        name: String,
    },

    /// The site-remapping function has no image for a qubit.
    #[error("Qubit {qubit} has no mapping onto the grid")]
    UnmappedQubit {
        /// The unmapped qubit.
        qubit: Qubit,
    },

    /// A partial interaction survived under a strategy requiring full ones.
    #[error("Partial interaction {operation} not allowed by strategy {strategy}")]
    PartialInteraction {
        /// The offending interaction.
        operation: Operation,
        /// Name of the active strategy.
        strategy: String,
    },

    /// Device rejected the result.
    #[error("Device error: {0}")]
    Device(#[from] DeviceError),

    /// Circuit structure error.
    #[error("IR error: {0}")]
    Ir(#[from] IrError),
}

/// Result type for compilation operations.
pub type CompileResult<T> = Result<T, CompileError>;
