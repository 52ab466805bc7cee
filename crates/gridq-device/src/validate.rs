//! Single-operation validation against a topology.

use gridq_ir::{GateKind, Operation};
use tracing::trace;

use crate::error::{DeviceError, DeviceResult};
use crate::gateset;
use crate::topology::GridTopology;

/// Validate one operation for placement on `topology`.
///
/// Checks run in a fixed order and stop at the first violation:
/// 1. the operation is a plain gate on sites,
/// 2. the gate is native and has the operand count it requires,
/// 3. every site is a grid coordinate present in the topology,
/// 4. two-site operations other than measurements act on neighbours.
pub fn validate_operation(topology: &GridTopology, operation: &Operation) -> DeviceResult<()> {
    let gate = operation
        .as_gate()
        .ok_or_else(|| DeviceError::UnsupportedOperation {
            operation: operation.clone(),
        })?;

    let kind = gateset::validate_gate(gate)?;

    // Operations built by hand can carry any operand list.
    let arity_ok = match gate.num_qubits() {
        Some(n) => operation.qubits().len() == n,
        None => !operation.qubits().is_empty(),
    };
    if !arity_ok {
        return Err(DeviceError::UnsupportedOperation {
            operation: operation.clone(),
        });
    }

    let mut sites = Vec::with_capacity(operation.qubits().len());
    for qubit in operation.qubits() {
        let site = qubit
            .as_grid()
            .ok_or_else(|| DeviceError::UnsupportedQubitType {
                qubit: qubit.clone(),
            })?;
        if !topology.contains(site) {
            return Err(DeviceError::QubitNotOnDevice { qubit: *site });
        }
        sites.push(site);
    }

    // Measurements may span arbitrary sites.
    if let [a, b] = sites[..] {
        if kind != GateKind::Measurement && !topology.is_adjacent(a, b) {
            return Err(DeviceError::NonLocalInteraction {
                operation: operation.clone(),
            });
        }
    }

    trace!("operation {operation} valid");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridq_ir::{CustomGate, Gate, GridQubit, OperationKind, Qubit};

    fn q(row: i32, col: i32) -> GridQubit {
        GridQubit::new(row, col)
    }

    fn topo() -> GridTopology {
        GridTopology::rect(2, 3)
    }

    #[test]
    fn test_valid_operations() {
        let t = topo();
        validate_operation(&t, &Operation::cz(q(0, 0), q(0, 1)).unwrap()).unwrap();
        validate_operation(&t, &Operation::cz(q(1, 2), q(0, 2)).unwrap()).unwrap();
        validate_operation(&t, &Operation::phase(0.5, q(1, 1)).unwrap()).unwrap();
        validate_operation(&t, &Operation::measure("m", [q(0, 0), q(1, 2)]).unwrap()).unwrap();
        validate_operation(
            &t,
            &Operation::measure("all", GridQubit::rect(2, 3)).unwrap(),
        )
        .unwrap();
    }

    #[test]
    fn test_composite_rejected_first() {
        // Composite containing an off-device site still reports the composite form.
        let op = Operation::subcircuit(vec![Operation::phase(0.5, q(9, 9)).unwrap()]);
        assert!(matches!(
            validate_operation(&topo(), &op),
            Err(DeviceError::UnsupportedOperation { .. })
        ));

        let cond = Operation::conditional("m", Gate::cz(), [q(0, 0), q(0, 1)]).unwrap();
        assert!(matches!(
            validate_operation(&topo(), &cond),
            Err(DeviceError::UnsupportedOperation { .. })
        ));
    }

    #[test]
    fn test_gate_checked_before_sites() {
        let op = Operation::new(Gate::Custom(CustomGate::new("swap", 2)), [q(0, 0), q(5, 5)])
            .unwrap();
        assert!(matches!(
            validate_operation(&topo(), &op),
            Err(DeviceError::UnsupportedGate { .. })
        ));
    }

    #[test]
    fn test_qubit_type_and_membership() {
        let line = Operation::phase(0.5, Qubit::Line(0)).unwrap();
        assert_eq!(
            validate_operation(&topo(), &line),
            Err(DeviceError::UnsupportedQubitType {
                qubit: Qubit::Line(0)
            })
        );

        let off = Operation::cz(q(1, 2), q(1, 3)).unwrap();
        assert_eq!(
            validate_operation(&topo(), &off),
            Err(DeviceError::QubitNotOnDevice { qubit: q(1, 3) })
        );

        // Sites are checked in operand order.
        let mixed = Operation::measure("m", [Qubit::grid(7, 7), Qubit::Named("a".into())]).unwrap();
        assert_eq!(
            validate_operation(&topo(), &mixed),
            Err(DeviceError::QubitNotOnDevice { qubit: q(7, 7) })
        );
    }

    #[test]
    fn test_non_local_interaction() {
        let op = Operation::cz(q(0, 0), q(1, 1)).unwrap();
        assert!(matches!(
            validate_operation(&topo(), &op),
            Err(DeviceError::NonLocalInteraction { .. })
        ));

        let far = Operation::cz(q(0, 0), q(0, 2)).unwrap();
        assert!(matches!(
            validate_operation(&topo(), &far),
            Err(DeviceError::NonLocalInteraction { .. })
        ));
    }

    #[test]
    fn test_operand_count_mismatch() {
        let t = topo();
        let three = Operation {
            kind: OperationKind::Gate(Gate::cz()),
            qubits: vec![Qubit::grid(1, 2), Qubit::grid(0, 0), Qubit::grid(0, 1)],
        };
        assert!(matches!(
            validate_operation(&t, &three),
            Err(DeviceError::UnsupportedOperation { .. })
        ));

        let one = Operation {
            kind: OperationKind::Gate(Gate::cz()),
            qubits: vec![Qubit::grid(0, 0)],
        };
        assert!(matches!(
            validate_operation(&t, &one),
            Err(DeviceError::UnsupportedOperation { .. })
        ));

        let empty = Operation {
            kind: OperationKind::Gate(Gate::measure("m")),
            qubits: vec![],
        };
        assert!(matches!(
            validate_operation(&t, &empty),
            Err(DeviceError::UnsupportedOperation { .. })
        ));
    }
}
