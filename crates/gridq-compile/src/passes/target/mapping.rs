//! Remapping circuit qubits onto grid sites.

use gridq_ir::{Circuit, Moment, Qubit};
use tracing::debug;

use crate::error::{CompileError, CompileResult};
use crate::pass::{Pass, PassKind};
use crate::property::PropertySet;
use crate::strategy::QubitMap;

/// Rewrites every qubit through a [`QubitMap`].
///
/// Fails with [`CompileError::UnmappedQubit`] when the map has no image, and
/// with an overlap error when two qubits of one moment land on the same site.
pub struct QubitMapping {
    map: QubitMap,
}

impl QubitMapping {
    /// Create the pass.
    pub fn new(map: QubitMap) -> Self {
        Self { map }
    }

    fn map_qubit(&self, qubit: &Qubit) -> CompileResult<Qubit> {
        (self.map)(qubit)
            .map(Qubit::Grid)
            .ok_or_else(|| CompileError::UnmappedQubit {
                qubit: qubit.clone(),
            })
    }
}

impl Pass for QubitMapping {
    fn name(&self) -> &'static str {
        "qubit_mapping"
    }

    fn kind(&self) -> PassKind {
        PassKind::Transformation
    }

    fn run(&self, circuit: &mut Circuit, _properties: &mut PropertySet) -> CompileResult<()> {
        let mut moments = Vec::with_capacity(circuit.depth());
        for moment in circuit.moments() {
            let operations = moment
                .iter()
                .map(|op| op.map_qubits(&mut |q: &Qubit| self.map_qubit(q)))
                .collect::<CompileResult<Vec<_>>>()?;
            moments.push(Moment::from_operations(operations)?);
        }

        debug!("Mapped {} qubits onto the grid", circuit.qubits().len());
        *circuit = Circuit::from_moments(circuit.name(), moments);
        Ok(())
    }
}
