//! Pass trait and types for optimization passes.

use gridq_ir::Circuit;

use crate::error::CompileResult;
use crate::property::PropertySet;

/// The kind of optimization pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PassKind {
    /// Analysis pass that reads but does not modify the circuit.
    Analysis,
    /// Transformation pass that modifies the circuit.
    Transformation,
}

/// An optimization pass that operates on a circuit.
pub trait Pass: Send + Sync {
    /// Get the name of this pass.
    fn name(&self) -> &str;

    /// Get the kind of this pass.
    fn kind(&self) -> PassKind;

    /// Run the pass on the given circuit.
    ///
    /// Analysis passes leave the circuit alone and may write to the
    /// `PropertySet`; transformation passes rewrite the circuit.
    fn run(&self, circuit: &mut Circuit, properties: &mut PropertySet) -> CompileResult<()>;

    /// Check if this pass should run based on current state.
    fn should_run(&self, _circuit: &Circuit, _properties: &PropertySet) -> bool {
        true
    }
}
