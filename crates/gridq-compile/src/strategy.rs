//! Named optimization strategies and the entry points that select them.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use gridq_device::GridDevice;
use gridq_ir::{Circuit, GridQubit, Qubit};
use tracing::info;

use crate::error::{CompileError, CompileResult};
use crate::manager::PassManagerBuilder;

/// Remaps each circuit qubit onto a grid site; `None` means unmapped.
pub type QubitMap = Arc<dyn Fn(&Qubit) -> Option<GridQubit> + Send + Sync>;

/// Map grid qubits to themselves; every other qubit is unmapped.
pub fn identity_map() -> QubitMap {
    Arc::new(|qubit: &Qubit| qubit.as_grid().copied())
}

/// Map line qubit `i` to `q(row, i)`; grid qubits map to themselves.
pub fn line_onto_row(row: i32) -> QubitMap {
    Arc::new(move |qubit: &Qubit| match qubit {
        Qubit::Grid(g) => Some(*g),
        Qubit::Line(i) => i32::try_from(*i).ok().map(|col| GridQubit::new(row, col)),
        Qubit::Named(_) => None,
    })
}

/// Optimization strategies understood by [`optimized_for_grid`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OptimizerType {
    /// Full interactions only.
    Xmon,
    /// Partial interactions (`CZ^t`) allowed.
    XmonPartialCz,
}

impl OptimizerType {
    /// All strategies, in declaration order.
    pub const ALL: [OptimizerType; 2] = [OptimizerType::Xmon, OptimizerType::XmonPartialCz];

    /// The strategy's name.
    pub fn name(&self) -> &'static str {
        match self {
            OptimizerType::Xmon => "xmon",
            OptimizerType::XmonPartialCz => "xmon_partial_cz",
        }
    }

    /// Whether interactions with exponents other than one survive.
    pub fn allows_partial_interactions(&self) -> bool {
        matches!(self, OptimizerType::XmonPartialCz)
    }
}

impl fmt::Display for OptimizerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for OptimizerType {
    type Err = CompileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.name() == s)
            .ok_or_else(|| CompileError::UnknownStrategy {
                name: s.to_string(),
            })
    }
}

/// Optimize `circuit` with the named strategy.
///
/// The qubits are remapped with `qubit_map`; when `new_device` is given the
/// result is packed and verified against it.
pub fn optimized_for_grid(
    circuit: &Circuit,
    new_device: Option<&GridDevice>,
    qubit_map: QubitMap,
    optimizer_type: &str,
) -> CompileResult<Circuit> {
    let strategy: OptimizerType = optimizer_type.parse()?;
    info!("Optimizing {} with strategy {strategy}", circuit.name());

    let mut builder = PassManagerBuilder::new()
        .with_strategy(strategy)
        .with_qubit_map(qubit_map);
    if let Some(device) = new_device {
        builder = builder.with_device(device.clone());
    }
    let (pm, mut props) = builder.build();

    let mut optimized = circuit.clone();
    pm.run(&mut optimized, &mut props)?;
    Ok(optimized)
}

/// Optimize `circuit` for an Xmon-style grid device.
///
/// Forwards to [`optimized_for_grid`] with `"xmon_partial_cz"` when partial
/// interactions are allowed and `"xmon"` otherwise.
pub fn optimized_for_xmon(
    circuit: &Circuit,
    new_device: Option<&GridDevice>,
    qubit_map: QubitMap,
    allow_partial_czs: bool,
) -> CompileResult<Circuit> {
    let strategy = if allow_partial_czs {
        OptimizerType::XmonPartialCz
    } else {
        OptimizerType::Xmon
    };
    optimized_for_grid(circuit, new_device, qubit_map, strategy.name())
}
