//! Cleanup passes: negligible gates and empty moments.

use gridq_ir::{Circuit, Gate, Operation};
use tracing::debug;

use crate::error::CompileResult;
use crate::pass::{Pass, PassKind};
use crate::property::PropertySet;

/// Distance of `exponent` from the nearest even integer.
///
/// Every rotation and interaction exponent is periodic with period 2.
pub(crate) fn distance_from_identity(exponent: f64) -> f64 {
    let e = exponent.rem_euclid(2.0);
    e.min(2.0 - e)
}

/// Removes rotations and interactions whose exponent is within tolerance
/// of the identity.
///
/// Measurements, custom gates and composite operations are never dropped.
pub struct DropNegligible {
    tolerance: f64,
}

impl DropNegligible {
    /// Default tolerance.
    pub const DEFAULT_TOLERANCE: f64 = 1e-8;

    /// Create the pass with the given tolerance.
    pub fn new(tolerance: f64) -> Self {
        Self { tolerance }
    }

    fn is_negligible(&self, operation: &Operation) -> bool {
        match operation.as_gate() {
            Some(
                Gate::Interaction { exponent }
                | Gate::Rotation { exponent, .. }
                | Gate::Phase { exponent, .. },
            ) => distance_from_identity(*exponent) <= self.tolerance,
            _ => false,
        }
    }
}

impl Default for DropNegligible {
    fn default() -> Self {
        Self::new(Self::DEFAULT_TOLERANCE)
    }
}

impl Pass for DropNegligible {
    fn name(&self) -> &'static str {
        "drop_negligible"
    }

    fn kind(&self) -> PassKind {
        PassKind::Transformation
    }

    fn run(&self, circuit: &mut Circuit, _properties: &mut PropertySet) -> CompileResult<()> {
        let before = circuit.num_operations();
        for moment in circuit.moments_mut() {
            moment.operations.retain(|op| !self.is_negligible(op));
        }

        let dropped = before - circuit.num_operations();
        if dropped > 0 {
            debug!("Dropped {dropped} negligible operations");
        }
        Ok(())
    }
}

/// Removes moments without operations.
pub struct DropEmptyMoments;

impl Pass for DropEmptyMoments {
    fn name(&self) -> &'static str {
        "drop_empty_moments"
    }

    fn kind(&self) -> PassKind {
        PassKind::Transformation
    }

    fn run(&self, circuit: &mut Circuit, _properties: &mut PropertySet) -> CompileResult<()> {
        circuit.retain_non_empty();
        Ok(())
    }
}
