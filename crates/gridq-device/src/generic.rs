//! Generic moment checks supplied by the host framework.
//!
//! The device composes these with its own rules by delegation: a
//! [`GenericChecks`] object is injected at construction and consulted before
//! any device-specific check.

use std::fmt::Debug;

use gridq_ir::{Moment, Operation};

use crate::error::{DeviceError, DeviceResult};

/// Framework-level validation every device inherits.
pub trait GenericChecks: Debug + Send + Sync {
    /// Name used in diagnostics.
    fn name(&self) -> &str;

    /// Validate a moment independently of any device.
    fn validate_moment(&self, moment: &Moment) -> DeviceResult<()>;

    /// Whether `operation` may join `moment` as far as the framework is concerned.
    fn can_add_operation_into_moment(&self, operation: &Operation, moment: &Moment) -> bool;
}

/// The default generic check: operations of one moment share no site.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoOverlap;

impl GenericChecks for NoOverlap {
    fn name(&self) -> &str {
        "no_overlap"
    }

    fn validate_moment(&self, moment: &Moment) -> DeviceResult<()> {
        match moment.find_overlap() {
            Some(qubit) => Err(DeviceError::OverlappingOperations {
                qubit: qubit.clone(),
            }),
            None => Ok(()),
        }
    }

    fn can_add_operation_into_moment(&self, operation: &Operation, moment: &Moment) -> bool {
        !moment.operates_on(operation.qubits())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridq_ir::{GridQubit, Qubit};

    #[test]
    fn test_no_overlap_moment() {
        let a = GridQubit::new(0, 0);
        let b = GridQubit::new(0, 1);
        let mut moment = Moment::new();
        moment.push(Operation::phase(0.5, a).unwrap()).unwrap();
        assert!(NoOverlap.validate_moment(&moment).is_ok());

        // Bypass the host's own check to build an overlapping moment.
        moment.operations.push(Operation::cz(a, b).unwrap());
        assert_eq!(
            NoOverlap.validate_moment(&moment),
            Err(DeviceError::OverlappingOperations {
                qubit: Qubit::Grid(a)
            })
        );
    }

    #[test]
    fn test_no_overlap_can_add() {
        let moment = Moment::from_operations([
            Operation::phase(0.5, GridQubit::new(0, 0)).unwrap(),
        ])
        .unwrap();
        assert!(!NoOverlap.can_add_operation_into_moment(
            &Operation::phase(0.25, GridQubit::new(0, 0)).unwrap(),
            &moment
        ));
        assert!(NoOverlap.can_add_operation_into_moment(
            &Operation::phase(0.25, GridQubit::new(0, 1)).unwrap(),
            &moment
        ));
    }
}
