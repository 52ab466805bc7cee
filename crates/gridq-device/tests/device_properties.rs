//! Integration tests for grid-device validation.
//!
//! These exercise the device the way a circuit assembler does: build a
//! device, propose operations, ask for placement decisions and validate
//! finished circuits.

use std::time::Duration;

use gridq_device::{DeviceConfig, DeviceError, GridDevice, GridTopology};
use gridq_ir::{Circuit, CustomGate, Gate, GridQubit, Moment, Operation, Qubit};

fn q(row: i32, col: i32) -> GridQubit {
    GridQubit::new(row, col)
}

fn square() -> GridDevice {
    GridDevice::new(
        Duration::from_nanos(4000),
        Duration::from_nanos(20),
        Duration::from_nanos(50),
        [q(0, 0), q(0, 1), q(1, 0), q(1, 1)],
    )
}

// ============================================================================
// Topology queries
// ============================================================================

#[test]
fn test_neighbors_follow_fixed_order() {
    let device = GridDevice::from_parts(Default::default(), GridTopology::rect(3, 3));
    for site in device.qubit_set() {
        let expected: Vec<GridQubit> = [(1, 0), (-1, 0), (0, 1), (0, -1)]
            .iter()
            .map(|&(dr, dc)| q(site.row + dr, site.col + dc))
            .filter(|n| device.qubit_set().contains(n))
            .collect();
        assert_eq!(device.neighbors_of(site), expected);
    }
}

#[test]
fn test_duplicate_sites_collapse() {
    let device = GridDevice::new(
        Duration::from_nanos(4000),
        Duration::from_nanos(20),
        Duration::from_nanos(50),
        [q(0, 0), q(0, 1), q(0, 0), q(1, 0), q(1, 1), q(1, 1)],
    );
    assert_eq!(device, square());
    assert_eq!(device.qubit_set().len(), 4);
}

// ============================================================================
// Operation validation
// ============================================================================

#[test]
fn test_operation_rejections() {
    let device = square();

    let off_device = Operation::phase(0.5, q(2, 0)).unwrap();
    assert_eq!(
        device.validate_operation(&off_device),
        Err(DeviceError::QubitNotOnDevice { qubit: q(2, 0) })
    );

    let diagonal = Operation::cz(q(0, 0), q(1, 1)).unwrap();
    assert!(matches!(
        device.validate_operation(&diagonal),
        Err(DeviceError::NonLocalInteraction { .. })
    ));

    let custom = Operation::new(Gate::Custom(CustomGate::new("iswap", 2)), [q(0, 0), q(0, 1)])
        .unwrap();
    assert_eq!(
        device.validate_operation(&custom),
        Err(DeviceError::UnsupportedGate {
            gate: "iswap".into()
        })
    );

    let named = Operation::phase(0.5, Qubit::Named("anc".into())).unwrap();
    assert!(matches!(
        device.validate_operation(&named),
        Err(DeviceError::UnsupportedQubitType { .. })
    ));
}

#[test]
fn test_measurement_spans_any_sites() {
    let device = square();
    let op = Operation::measure("m", [q(0, 0), q(1, 1)]).unwrap();
    assert!(device.validate_operation(&op).is_ok());
}

// ============================================================================
// Moments and placement
// ============================================================================

#[test]
fn test_parallel_interactions_rejected() {
    let device = square();
    let moment = Moment::from_operations([
        Operation::cz(q(0, 0), q(0, 1)).unwrap(),
        Operation::cz(q(1, 0), q(1, 1)).unwrap(),
    ])
    .unwrap();
    assert!(matches!(
        device.validate_moment(&moment),
        Err(DeviceError::AdjacentInteraction { .. })
    ));
}

#[test]
fn test_interaction_with_unrelated_rotation_accepted() {
    let device = square();
    let moment = Moment::from_operations([
        Operation::cz(q(0, 0), q(0, 1)).unwrap(),
        Operation::phase(0.5, q(1, 1)).unwrap(),
    ])
    .unwrap();
    assert!(device.validate_moment(&moment).is_ok());
}

#[test]
fn test_placement_decision() {
    let device = square();
    let occupied = Moment::from_operations([Operation::cz(q(0, 0), q(0, 1)).unwrap()]).unwrap();
    let candidate = Operation::cz(q(1, 0), q(1, 1)).unwrap();

    assert!(!device.can_add_operation_into_moment(&candidate, &occupied));
    assert!(device.can_add_operation_into_moment(&candidate, &Moment::new()));
}

#[test]
fn test_assembler_packs_with_device_rule() {
    let device = GridDevice::foxtail();
    let mut circuit = Circuit::new("ladder");
    for col in 0..10 {
        let op = Operation::cz(q(0, col), q(1, col)).unwrap();
        circuit.insert_earliest(op, |op, moment| {
            device.can_add_operation_into_moment(op, moment)
        });
    }
    // Vertical links in neighbouring columns conflict; every other column fits.
    assert_eq!(circuit.depth(), 2);
    assert!(device.validate_circuit(&circuit).is_ok());

    let mut naive = Circuit::new("naive");
    for col in 0..10 {
        naive.append(Operation::cz(q(0, col), q(1, col)).unwrap());
    }
    assert_eq!(naive.depth(), 1);
    assert!(device.validate_circuit(&naive).is_err());
}

// ============================================================================
// Circuits
// ============================================================================

#[test]
fn test_measurement_keys_unique() {
    let device = square();

    let mut distinct = Circuit::new("distinct");
    distinct.append(Operation::measure("a", [q(0, 0)]).unwrap());
    distinct.append(Operation::measure("b", [q(0, 0)]).unwrap());
    assert!(device.validate_circuit(&distinct).is_ok());

    let mut repeated = Circuit::new("repeated");
    repeated.append(Operation::measure("a", [q(0, 0)]).unwrap());
    repeated.append(Operation::measure("a", [q(0, 0)]).unwrap());
    assert_eq!(
        device.validate_circuit(&repeated),
        Err(DeviceError::DuplicateMeasurementKey { key: "a".into() })
    );
}

#[test]
fn test_circuit_json_validation() {
    let device = square();
    let mut circuit = Circuit::new("bell");
    circuit.append(Operation::rotation(gridq_ir::RotationAxis::Y, 0.5, q(0, 1)).unwrap());
    circuit.append(Operation::cz(q(0, 0), q(0, 1)).unwrap());
    circuit.append(Operation::measure("m", [q(0, 0), q(0, 1)]).unwrap());

    let restored = Circuit::from_json(&circuit.to_json().unwrap()).unwrap();
    assert!(device.validate_circuit(&restored).is_ok());
}

#[test]
fn test_circuit_json_rechecked_by_device() {
    let device = square();
    let mut circuit = Circuit::new("edited");
    circuit.append(Operation::cz(q(0, 0), q(0, 1)).unwrap());
    let value = serde_json::to_value(&circuit).unwrap();

    // Diagonal partner: well-formed operation, non-local on the device.
    let mut diagonal = value.clone();
    diagonal["moments"][0]["operations"][0]["qubits"][1] =
        serde_json::json!({"grid": {"row": 1, "col": 1}});
    let loaded = Circuit::from_json(&diagonal.to_string()).unwrap();
    assert!(matches!(
        device.validate_circuit(&loaded),
        Err(DeviceError::NonLocalInteraction { .. })
    ));

    // Third operand never reaches the device.
    let mut widened = value;
    widened["moments"][0]["operations"][0]["qubits"]
        .as_array_mut()
        .unwrap()
        .push(serde_json::json!({"grid": {"row": 1, "col": 0}}));
    assert!(Circuit::from_json(&widened.to_string()).is_err());
}

#[test]
fn test_circuit_json_overlap_rechecked_by_device() {
    let device = square();
    let moment = Moment::from_operations([
        Operation::phase(0.5, q(0, 0)).unwrap(),
        Operation::phase(0.5, q(1, 1)).unwrap(),
    ])
    .unwrap();
    let circuit = Circuit::from_moments("edited", [moment]);

    let mut value = serde_json::to_value(&circuit).unwrap();
    value["moments"][0]["operations"][1]["qubits"][0] =
        serde_json::json!({"grid": {"row": 0, "col": 0}});
    let loaded = Circuit::from_json(&value.to_string()).unwrap();
    assert_eq!(
        device.validate_circuit(&loaded),
        Err(DeviceError::OverlappingOperations {
            qubit: Qubit::grid(0, 0)
        })
    );
}

// ============================================================================
// Durations
// ============================================================================

#[test]
fn test_durations() {
    let device = square();
    assert_eq!(
        device
            .duration_of(&Operation::virtual_z(0.25, q(0, 0)).unwrap())
            .unwrap(),
        Duration::ZERO
    );
    assert_eq!(
        device
            .duration_of(&Operation::phase(0.25, q(0, 0)).unwrap())
            .unwrap(),
        Duration::from_nanos(20)
    );
    let custom = Operation::new(Gate::Custom(CustomGate::new("u3", 1)), [q(0, 0)]).unwrap();
    assert!(matches!(
        device.duration_of(&custom),
        Err(DeviceError::UnsupportedGate { .. })
    ));
}

// ============================================================================
// Configuration files
// ============================================================================

#[test]
fn test_config_file_roundtrip() {
    let dir = tempfile::tempdir().unwrap();

    let yaml = dir.path().join("square.yaml");
    std::fs::write(
        &yaml,
        "name: square\ndurations:\n  measurement_ns: 4000\n  single_qubit_ns: 20\n  two_qubit_ns: 50\nlayout: |\n  AB\n  CD\n",
    )
    .unwrap();
    let config = DeviceConfig::from_file(&yaml).unwrap();
    assert_eq!(config.build_device().unwrap(), square());

    let json = dir.path().join("square.json");
    std::fs::write(&json, serde_json::to_string(&config).unwrap()).unwrap();
    let reloaded = DeviceConfig::from_file(&json).unwrap();
    assert_eq!(reloaded, config);
}

#[test]
fn test_config_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let result = DeviceConfig::load(Some(&dir.path().join("absent.yaml")));
    assert!(matches!(result, Err(gridq_device::ConfigError::Io(_))));
}
