//! Interaction exponent policy.

use gridq_ir::{Circuit, Gate};

use crate::error::{CompileError, CompileResult};
use crate::pass::{Pass, PassKind};
use crate::passes::agnostic::cleanup::distance_from_identity;
use crate::property::PropertySet;
use crate::strategy::OptimizerType;

/// Rejects interactions that are not full `CZ`s (exponent ±1 up to tolerance).
///
/// Rewriting a partial interaction into full ones is a decomposition concern;
/// strategies that forbid partial interactions fail instead.
pub struct RequireFullInteractions {
    strategy: OptimizerType,
    tolerance: f64,
}

impl RequireFullInteractions {
    /// Create the pass for `strategy`.
    pub fn new(strategy: OptimizerType, tolerance: f64) -> Self {
        Self {
            strategy,
            tolerance,
        }
    }
}

impl Pass for RequireFullInteractions {
    fn name(&self) -> &'static str {
        "require_full_interactions"
    }

    fn kind(&self) -> PassKind {
        PassKind::Analysis
    }

    fn run(&self, circuit: &mut Circuit, _properties: &mut PropertySet) -> CompileResult<()> {
        for operation in circuit.all_operations() {
            if let Some(Gate::Interaction { exponent }) = operation.as_gate() {
                // A full CZ sits at distance one from the identity.
                if (distance_from_identity(*exponent) - 1.0).abs() > self.tolerance {
                    return Err(CompileError::PartialInteraction {
                        operation: operation.clone(),
                        strategy: self.strategy.to_string(),
                    });
                }
            }
        }
        Ok(())
    }

    fn should_run(&self, _circuit: &Circuit, _properties: &PropertySet) -> bool {
        !self.strategy.allows_partial_interactions()
    }
}
