//! The native gate allowlist.

use gridq_ir::{Gate, GateKind};

use crate::error::{DeviceError, DeviceResult};

/// Whether gates of `kind` execute on a grid device.
///
/// Every kind of the closed tag is native; the match keeps it that way when
/// the tag grows.
#[inline]
pub fn is_supported_kind(kind: GateKind) -> bool {
    match kind {
        GateKind::TwoQubitInteraction
        | GateKind::SingleQubitRotation
        | GateKind::PhaseRotation { .. }
        | GateKind::Measurement => true,
    }
}

/// Returns true if the gate is allowed.
pub fn is_supported_gate(gate: &Gate) -> bool {
    gate.kind().is_some_and(is_supported_kind)
}

/// Return the gate's kind, or fail if the gate isn't allowed.
pub fn validate_gate(gate: &Gate) -> DeviceResult<GateKind> {
    match gate.kind() {
        Some(kind) if is_supported_kind(kind) => Ok(kind),
        _ => Err(DeviceError::UnsupportedGate {
            gate: gate.name().to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridq_ir::{CustomGate, RotationAxis};

    #[test]
    fn test_native_gates_supported() {
        let gates = [
            Gate::cz(),
            Gate::Interaction { exponent: 0.5 },
            Gate::Rotation {
                axis: RotationAxis::Y,
                exponent: 0.5,
            },
            Gate::Phase {
                exponent: 0.25,
                virtual_z: true,
            },
            Gate::measure("m"),
        ];
        for gate in &gates {
            assert!(is_supported_gate(gate), "{} should be supported", gate.name());
            assert_eq!(validate_gate(gate).ok(), gate.kind());
        }
    }

    #[test]
    fn test_custom_gate_rejected() {
        let gate = Gate::Custom(CustomGate::new("ccx", 3));
        assert!(!is_supported_gate(&gate));
        assert_eq!(
            validate_gate(&gate),
            Err(DeviceError::UnsupportedGate {
                gate: "ccx".to_string()
            })
        );
    }
}
