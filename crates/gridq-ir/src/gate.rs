//! Gate types.

use serde::{Deserialize, Serialize};

/// Axis of a microwave-driven single-qubit rotation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RotationAxis {
    /// Rotation about X.
    X,
    /// Rotation about Y.
    Y,
    /// Rotation about an axis in the XY plane at angle `phase_exponent · π` from X.
    Phased {
        /// Axis angle in half turns.
        phase_exponent: f64,
    },
}

/// The closed set of gate kinds a grid device understands.
///
/// Every validator dispatches on this tag; gates that have no kind
/// ([`Gate::Custom`]) are outside the device vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GateKind {
    /// Controlled-phase coupling between two sites.
    TwoQubitInteraction,
    /// X, Y or phased-X rotation.
    SingleQubitRotation,
    /// Z rotation. `virtual_z` rotations are frame updates done in control
    /// software and take no time on the device.
    PhaseRotation {
        /// Whether the rotation is executed off-device.
        virtual_z: bool,
    },
    /// Computational-basis measurement.
    Measurement,
}

impl GateKind {
    /// Whether this kind is the two-qubit interaction.
    #[inline]
    pub fn is_interaction(&self) -> bool {
        matches!(self, GateKind::TwoQubitInteraction)
    }
}

/// A gate outside the native vocabulary, kept around so it can be rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomGate {
    /// The name of the gate.
    pub name: String,
    /// The number of qubits it operates on.
    pub num_qubits: usize,
}

impl CustomGate {
    /// Create a new custom gate.
    pub fn new(name: impl Into<String>, num_qubits: usize) -> Self {
        Self {
            name: name.into(),
            num_qubits,
        }
    }
}

/// A gate, with its parameters.
///
/// Exponents are in half turns: an exponent of `1.0` is a full X, Z or CZ.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Gate {
    /// `CZ^exponent` between two neighbouring sites.
    Interaction {
        /// Interaction exponent.
        exponent: f64,
    },
    /// Single-qubit rotation about an axis in the XY plane.
    Rotation {
        /// Rotation axis.
        axis: RotationAxis,
        /// Rotation exponent.
        exponent: f64,
    },
    /// Rotation about Z.
    Phase {
        /// Rotation exponent.
        exponent: f64,
        /// Frame update executed in control software.
        #[serde(default)]
        virtual_z: bool,
    },
    /// Measurement whose outcome is recorded under `key`.
    Measure {
        /// Measurement key; unique within a circuit.
        key: String,
    },
    /// Anything else.
    Custom(CustomGate),
}

impl Gate {
    /// Full controlled-Z.
    pub fn cz() -> Self {
        Gate::Interaction { exponent: 1.0 }
    }

    /// Measurement recorded under `key`.
    pub fn measure(key: impl Into<String>) -> Self {
        Gate::Measure { key: key.into() }
    }

    /// The kind tag, or `None` for custom gates.
    #[inline]
    pub fn kind(&self) -> Option<GateKind> {
        match self {
            Gate::Interaction { .. } => Some(GateKind::TwoQubitInteraction),
            Gate::Rotation { .. } => Some(GateKind::SingleQubitRotation),
            Gate::Phase { virtual_z, .. } => Some(GateKind::PhaseRotation {
                virtual_z: *virtual_z,
            }),
            Gate::Measure { .. } => Some(GateKind::Measurement),
            Gate::Custom(_) => None,
        }
    }

    /// Get the name of this gate.
    pub fn name(&self) -> &str {
        match self {
            Gate::Interaction { .. } => "cz",
            Gate::Rotation { axis, .. } => match axis {
                RotationAxis::X => "x",
                RotationAxis::Y => "y",
                RotationAxis::Phased { .. } => "phased_x",
            },
            Gate::Phase { virtual_z: true, .. } => "virtual_z",
            Gate::Phase { .. } => "z",
            Gate::Measure { .. } => "measure",
            Gate::Custom(g) => &g.name,
        }
    }

    /// Number of qubits this gate requires, or `None` if it takes any number.
    pub fn num_qubits(&self) -> Option<usize> {
        match self {
            Gate::Interaction { .. } => Some(2),
            Gate::Rotation { .. } | Gate::Phase { .. } => Some(1),
            Gate::Measure { .. } => None,
            Gate::Custom(g) => Some(g.num_qubits),
        }
    }

    /// The exponent of parameterized gates.
    pub fn exponent(&self) -> Option<f64> {
        match self {
            Gate::Interaction { exponent }
            | Gate::Rotation { exponent, .. }
            | Gate::Phase { exponent, .. } => Some(*exponent),
            Gate::Measure { .. } | Gate::Custom(_) => None,
        }
    }

    /// Measurement key, for measurements.
    pub fn measurement_key(&self) -> Option<&str> {
        match self {
            Gate::Measure { key } => Some(key),
            _ => None,
        }
    }
}

impl From<CustomGate> for Gate {
    fn from(gate: CustomGate) -> Self {
        Gate::Custom(gate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gate_kinds() {
        assert_eq!(Gate::cz().kind(), Some(GateKind::TwoQubitInteraction));
        assert_eq!(
            Gate::Phase {
                exponent: 0.5,
                virtual_z: true
            }
            .kind(),
            Some(GateKind::PhaseRotation { virtual_z: true })
        );
        assert_eq!(Gate::measure("m").kind(), Some(GateKind::Measurement));
        assert_eq!(Gate::Custom(CustomGate::new("ccx", 3)).kind(), None);
    }

    #[test]
    fn test_gate_names_and_arity() {
        let phased = Gate::Rotation {
            axis: RotationAxis::Phased {
                phase_exponent: 0.25,
            },
            exponent: 0.5,
        };
        assert_eq!(phased.name(), "phased_x");
        assert_eq!(phased.num_qubits(), Some(1));
        assert_eq!(Gate::cz().num_qubits(), Some(2));
        assert_eq!(Gate::measure("m").num_qubits(), None);
        assert_eq!(Gate::measure("m").measurement_key(), Some("m"));
        assert_eq!(Gate::cz().measurement_key(), None);
    }

    #[test]
    fn test_gate_serde_tagging() {
        let json = serde_json::to_string(&Gate::measure("out")).unwrap();
        assert_eq!(json, r#"{"type":"measure","key":"out"}"#);

        let z: Gate = serde_json::from_str(r#"{"type":"phase","exponent":0.25}"#).unwrap();
        assert_eq!(
            z,
            Gate::Phase {
                exponent: 0.25,
                virtual_z: false
            }
        );
    }
}
