//! Error types for the device crate.

use gridq_ir::{GridQubit, Operation, Qubit};
use thiserror::Error;

/// Rejections raised by device validation.
///
/// Every variant is a definitional violation of the input; none is transient.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum DeviceError {
    /// Gate kind outside the device vocabulary.
    #[error("Unsupported gate type: {gate}")]
    UnsupportedGate {
        /// Name of the rejected gate.
        gate: String,
    },

    /// Operation is not a plain gate applied to sites.
    #[error("Unsupported operation: {operation}")]
    UnsupportedOperation {
        /// The rejected operation.
        operation: Operation,
    },

    /// A site value is not a grid coordinate.
    #[error("Unsupported qubit type: {qubit}")]
    UnsupportedQubitType {
        /// The offending site value.
        qubit: Qubit,
    },

    /// A site is not part of the device topology.
    #[error("Qubit not on device: {qubit}")]
    QubitNotOnDevice {
        /// The missing site.
        qubit: GridQubit,
    },

    /// Two-site, non-measurement operation on sites that are not neighbours.
    #[error("Non-local interaction: {operation}")]
    NonLocalInteraction {
        /// The rejected operation.
        operation: Operation,
    },

    /// Two interactions of one moment touch neighbouring sites.
    #[error("Adjacent interaction operations in moment: {first} and {second}")]
    AdjacentInteraction {
        /// The earlier interaction of the conflicting pair.
        first: Operation,
        /// The later interaction of the conflicting pair.
        second: Operation,
    },

    /// A measurement key appears more than once in a circuit.
    #[error("Measurement key {key} repeated")]
    DuplicateMeasurementKey {
        /// The repeated key.
        key: String,
    },

    /// Two operations of one moment share a site.
    #[error("Overlapping operations on {qubit} in moment")]
    OverlappingOperations {
        /// The shared site.
        qubit: Qubit,
    },
}

/// Result type for device validation.
pub type DeviceResult<T> = Result<T, DeviceError>;
