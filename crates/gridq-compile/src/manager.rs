//! Pass manager for orchestrating optimization.

use tracing::{debug, info, instrument};

use gridq_device::GridDevice;
use gridq_ir::Circuit;

use crate::error::CompileResult;
use crate::pass::Pass;
use crate::passes::{
    DeviceVerification, DropEmptyMoments, DropNegligible, MomentPacking, QubitMapping,
    RequireFullInteractions,
};
use crate::property::PropertySet;
use crate::strategy::{OptimizerType, QubitMap, identity_map};

/// Manages and executes a sequence of optimization passes.
pub struct PassManager {
    /// The passes to execute, in order.
    passes: Vec<Box<dyn Pass>>,
}

impl PassManager {
    /// Create a new empty pass manager.
    pub fn new() -> Self {
        Self { passes: vec![] }
    }

    /// Add a pass to the manager.
    pub fn add_pass(&mut self, pass: impl Pass + 'static) {
        self.passes.push(Box::new(pass));
    }

    /// Run all passes on the given circuit.
    #[instrument(skip(self, circuit, properties), fields(name = circuit.name()))]
    pub fn run(&self, circuit: &mut Circuit, properties: &mut PropertySet) -> CompileResult<()> {
        info!(
            "Running pass manager with {} passes on circuit with {} qubits",
            self.passes.len(),
            circuit.qubits().len()
        );

        for pass in &self.passes {
            if pass.should_run(circuit, properties) {
                debug!("Running pass: {}", pass.name());
                pass.run(circuit, properties)?;
                debug!(
                    "Pass {} completed, ops: {}",
                    pass.name(),
                    circuit.num_operations()
                );
            } else {
                debug!("Skipping pass: {}", pass.name());
            }
        }

        info!(
            "Pass manager completed, final depth: {}, ops: {}",
            circuit.depth(),
            circuit.num_operations()
        );

        Ok(())
    }

    /// Names of the passes, in order.
    pub fn pass_names(&self) -> Vec<&str> {
        self.passes.iter().map(|p| p.name()).collect()
    }

    /// Get the number of passes.
    pub fn len(&self) -> usize {
        self.passes.len()
    }

    /// Check if the manager has no passes.
    pub fn is_empty(&self) -> bool {
        self.passes.is_empty()
    }
}

impl Default for PassManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for the pipeline behind a named strategy.
pub struct PassManagerBuilder {
    strategy: OptimizerType,
    qubit_map: QubitMap,
    tolerance: f64,
    properties: PropertySet,
}

impl PassManagerBuilder {
    /// Create a new builder: `xmon` strategy, identity map, no device.
    pub fn new() -> Self {
        Self {
            strategy: OptimizerType::Xmon,
            qubit_map: identity_map(),
            tolerance: DropNegligible::DEFAULT_TOLERANCE,
            properties: PropertySet::new(),
        }
    }

    /// Set the strategy.
    #[must_use]
    pub fn with_strategy(mut self, strategy: OptimizerType) -> Self {
        self.strategy = strategy;
        self
    }

    /// Set the site-remapping function.
    #[must_use]
    pub fn with_qubit_map(mut self, qubit_map: QubitMap) -> Self {
        self.qubit_map = qubit_map;
        self
    }

    /// Set the exponent tolerance below which gates are dropped.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance.abs();
        self
    }

    /// Set the target device.
    #[must_use]
    pub fn with_device(mut self, device: GridDevice) -> Self {
        self.properties.device = Some(device);
        self
    }

    /// Build the pass manager and return it with the properties.
    pub fn build(self) -> (PassManager, PropertySet) {
        let mut pm = PassManager::new();

        pm.add_pass(QubitMapping::new(self.qubit_map));
        pm.add_pass(DropNegligible::new(self.tolerance));
        if !self.strategy.allows_partial_interactions() {
            pm.add_pass(RequireFullInteractions::new(self.strategy, self.tolerance));
        }
        pm.add_pass(DropEmptyMoments);

        // Device passes skip themselves when no device is set.
        pm.add_pass(MomentPacking);
        pm.add_pass(DeviceVerification);

        (pm, self.properties)
    }
}

impl Default for PassManagerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
