//! Re-assembling a circuit under the device's placement rule.

use gridq_ir::Circuit;
use tracing::debug;

use crate::error::CompileResult;
use crate::pass::{Pass, PassKind};
use crate::property::PropertySet;

/// Rebuilds the circuit by inserting every operation, in order, into the
/// earliest moment the device accepts.
///
/// Each operation is validated against the device first. Skipped when no
/// device is set.
pub struct MomentPacking;

impl Pass for MomentPacking {
    fn name(&self) -> &'static str {
        "moment_packing"
    }

    fn kind(&self) -> PassKind {
        PassKind::Transformation
    }

    fn run(&self, circuit: &mut Circuit, properties: &mut PropertySet) -> CompileResult<()> {
        let Some(device) = properties.device.as_ref() else {
            return Ok(());
        };

        let mut packed = Circuit::new(circuit.name());
        for operation in circuit.all_operations() {
            device.validate_operation(operation)?;
            packed.insert_earliest(operation.clone(), |op, moment| {
                device.can_add_operation_into_moment(op, moment)
            });
        }

        debug!(
            "Packed {} operations: depth {} -> {}",
            packed.num_operations(),
            circuit.depth(),
            packed.depth()
        );
        *circuit = packed;
        Ok(())
    }

    fn should_run(&self, _circuit: &Circuit, properties: &PropertySet) -> bool {
        properties.device.is_some()
    }
}
