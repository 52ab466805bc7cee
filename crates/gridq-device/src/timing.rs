//! Per-gate durations used by downstream timing analysis.

use std::time::Duration;

use gridq_ir::{GateKind, Operation};
use serde::{Deserialize, Serialize};

use crate::error::{DeviceError, DeviceResult};
use crate::gateset;

/// Execution time of each native gate class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GateDurations {
    /// Maximum duration of a measurement.
    pub measurement: Duration,
    /// Maximum duration of a single-qubit rotation (X, Y, phased-X, on-device Z).
    pub single_qubit: Duration,
    /// Maximum duration of a two-qubit interaction.
    pub two_qubit: Duration,
}

impl GateDurations {
    /// Create a duration table.
    pub fn new(measurement: Duration, single_qubit: Duration, two_qubit: Duration) -> Self {
        Self {
            measurement,
            single_qubit,
            two_qubit,
        }
    }

    /// Foxtail timings: 4 µs measurement, 20 ns rotations, 50 ns interactions.
    pub fn foxtail() -> Self {
        Self::new(
            Duration::from_nanos(4000),
            Duration::from_nanos(20),
            Duration::from_nanos(50),
        )
    }

    /// Duration of gates of `kind`.
    pub fn duration_of_kind(&self, kind: GateKind) -> Duration {
        match kind {
            GateKind::TwoQubitInteraction => self.two_qubit,
            GateKind::Measurement => self.measurement,
            GateKind::SingleQubitRotation | GateKind::PhaseRotation { virtual_z: false } => {
                self.single_qubit
            }
            // Frame updates happen in control software.
            GateKind::PhaseRotation { virtual_z: true } => Duration::ZERO,
        }
    }

    /// Duration of `operation`; fails for anything that is not a native gate.
    pub fn duration_of(&self, operation: &Operation) -> DeviceResult<Duration> {
        let gate = operation
            .as_gate()
            .ok_or_else(|| DeviceError::UnsupportedGate {
                gate: operation.name().to_string(),
            })?;
        gateset::validate_gate(gate).map(|kind| self.duration_of_kind(kind))
    }
}

impl Default for GateDurations {
    fn default() -> Self {
        Self::foxtail()
    }
}
