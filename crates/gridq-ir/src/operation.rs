//! Operations combining gates with the qubits they act on.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{IrError, IrResult};
use crate::gate::{Gate, GateKind, RotationAxis};
use crate::qubit::Qubit;

/// The kind of operation in a circuit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OperationKind {
    /// A single gate applied to a list of qubits.
    Gate(Gate),
    /// A composite operation wrapping a sequence of operations.
    Subcircuit(Vec<Operation>),
    /// A gate applied only if the measurement recorded under `key` was one.
    Conditional {
        /// Measurement key controlling the gate.
        key: String,
        /// The controlled gate.
        gate: Gate,
    },
}

/// A complete operation with operands.
///
/// Deserialization runs the same operand checks as the constructors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawOperation")]
pub struct Operation {
    /// The kind of operation.
    pub kind: OperationKind,
    /// Qubits this operation acts on, in order.
    pub qubits: Vec<Qubit>,
}

impl Operation {
    /// Create a gate operation, checking arity and distinct qubits.
    pub fn new(gate: Gate, qubits: impl IntoIterator<Item = impl Into<Qubit>>) -> IrResult<Self> {
        let qubits: Vec<Qubit> = qubits.into_iter().map(Into::into).collect();
        check_operands(&gate, &qubits)?;
        Ok(Self {
            kind: OperationKind::Gate(gate),
            qubits,
        })
    }

    /// Full controlled-Z between `a` and `b`.
    pub fn cz(a: impl Into<Qubit>, b: impl Into<Qubit>) -> IrResult<Self> {
        let qubits: [Qubit; 2] = [a.into(), b.into()];
        Self::new(Gate::cz(), qubits)
    }

    /// `CZ^exponent` between `a` and `b`.
    pub fn interaction(
        exponent: f64,
        a: impl Into<Qubit>,
        b: impl Into<Qubit>,
    ) -> IrResult<Self> {
        let qubits: [Qubit; 2] = [a.into(), b.into()];
        Self::new(Gate::Interaction { exponent }, qubits)
    }

    /// Single-qubit XY-plane rotation.
    pub fn rotation(axis: RotationAxis, exponent: f64, qubit: impl Into<Qubit>) -> IrResult<Self> {
        Self::new(Gate::Rotation { axis, exponent }, [Into::<Qubit>::into(qubit)])
    }

    /// Z rotation executed on the device.
    pub fn phase(exponent: f64, qubit: impl Into<Qubit>) -> IrResult<Self> {
        Self::new(
            Gate::Phase {
                exponent,
                virtual_z: false,
            },
            [Into::<Qubit>::into(qubit)],
        )
    }

    /// Z rotation executed as a frame update in control software.
    pub fn virtual_z(exponent: f64, qubit: impl Into<Qubit>) -> IrResult<Self> {
        Self::new(
            Gate::Phase {
                exponent,
                virtual_z: true,
            },
            [Into::<Qubit>::into(qubit)],
        )
    }

    /// Measurement of one or more qubits recorded under `key`.
    pub fn measure(
        key: impl Into<String>,
        qubits: impl IntoIterator<Item = impl Into<Qubit>>,
    ) -> IrResult<Self> {
        Self::new(Gate::measure(key), qubits)
    }

    /// Wrap `operations` into one composite operation acting on the union of their qubits.
    pub fn subcircuit(operations: Vec<Operation>) -> Self {
        let mut qubits: Vec<Qubit> = vec![];
        for q in operations.iter().flat_map(|op| op.qubits.iter()) {
            if !qubits.contains(q) {
                qubits.push(q.clone());
            }
        }
        Self {
            kind: OperationKind::Subcircuit(operations),
            qubits,
        }
    }

    /// Apply `gate` only when the measurement `key` read one.
    pub fn conditional(
        key: impl Into<String>,
        gate: Gate,
        qubits: impl IntoIterator<Item = impl Into<Qubit>>,
    ) -> IrResult<Self> {
        let qubits: Vec<Qubit> = qubits.into_iter().map(Into::into).collect();
        check_operands(&gate, &qubits)?;
        Ok(Self {
            kind: OperationKind::Conditional {
                key: key.into(),
                gate,
            },
            qubits,
        })
    }

    /// The gate, if this is a plain gate operation.
    #[inline]
    pub fn as_gate(&self) -> Option<&Gate> {
        match &self.kind {
            OperationKind::Gate(g) => Some(g),
            _ => None,
        }
    }

    /// The gate kind of a plain gate operation.
    #[inline]
    pub fn gate_kind(&self) -> Option<GateKind> {
        self.as_gate().and_then(Gate::kind)
    }

    /// Whether this is a plain two-qubit interaction.
    #[inline]
    pub fn is_interaction(&self) -> bool {
        matches!(self.gate_kind(), Some(GateKind::TwoQubitInteraction))
    }

    /// Check if this is a measurement.
    pub fn is_measurement(&self) -> bool {
        self.measurement_key().is_some()
    }

    /// The measurement key of a plain measurement operation.
    pub fn measurement_key(&self) -> Option<&str> {
        self.as_gate().and_then(Gate::measurement_key)
    }

    /// Qubits acted on.
    pub fn qubits(&self) -> &[Qubit] {
        &self.qubits
    }

    /// Whether this operation acts on `qubit`.
    pub fn acts_on(&self, qubit: &Qubit) -> bool {
        self.qubits.contains(qubit)
    }

    /// Get the name of the operation.
    pub fn name(&self) -> &str {
        match &self.kind {
            OperationKind::Gate(g) => g.name(),
            OperationKind::Subcircuit(_) => "subcircuit",
            OperationKind::Conditional { .. } => "conditional",
        }
    }

    /// Rebuild the operation with every qubit passed through `f`, recursing
    /// into composite operations.
    pub fn map_qubits<E>(&self, f: &mut impl FnMut(&Qubit) -> Result<Qubit, E>) -> Result<Self, E> {
        let kind = match &self.kind {
            OperationKind::Subcircuit(ops) => OperationKind::Subcircuit(
                ops.iter()
                    .map(|op| op.map_qubits(&mut *f))
                    .collect::<Result<_, _>>()?,
            ),
            other => other.clone(),
        };
        let qubits = self.qubits.iter().map(&mut *f).collect::<Result<_, _>>()?;
        Ok(Self { kind, qubits })
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())?;
        if let Some(exponent) = self.as_gate().and_then(Gate::exponent) {
            if (exponent - 1.0).abs() > f64::EPSILON {
                write!(f, "**{exponent}")?;
            }
        }
        write!(f, "(")?;
        for (i, q) in self.qubits.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{q}")?;
        }
        write!(f, ")")
    }
}

/// Wire form of [`Operation`], checked before it becomes one.
#[derive(Deserialize)]
struct RawOperation {
    kind: OperationKind,
    qubits: Vec<Qubit>,
}

impl TryFrom<RawOperation> for Operation {
    type Error = IrError;

    fn try_from(raw: RawOperation) -> IrResult<Self> {
        match raw.kind {
            OperationKind::Gate(gate) => Self::new(gate, raw.qubits),
            OperationKind::Conditional { key, gate } => Self::conditional(key, gate, raw.qubits),
            OperationKind::Subcircuit(ops) => {
                let op = Self::subcircuit(ops);
                if op.qubits != raw.qubits {
                    return Err(IrError::SubcircuitQubitMismatch);
                }
                Ok(op)
            }
        }
    }
}

fn check_operands(gate: &Gate, qubits: &[Qubit]) -> IrResult<()> {
    let expected = gate.num_qubits().unwrap_or(1);
    let arity_ok = match gate.num_qubits() {
        Some(n) => qubits.len() == n,
        None => !qubits.is_empty(),
    };
    if !arity_ok {
        return Err(IrError::QubitCountMismatch {
            gate_name: gate.name().to_string(),
            expected,
            got: qubits.len(),
        });
    }
    for (i, q) in qubits.iter().enumerate() {
        if qubits[..i].contains(q) {
            return Err(IrError::DuplicateQubit {
                qubit: q.clone(),
                gate_name: Some(gate.name().to_string()),
            });
        }
    }
    Ok(())
}
