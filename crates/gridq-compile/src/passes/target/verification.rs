//! Final verification against the target device.

use std::time::Duration;

use gridq_device::{DeviceResult, GridDevice};
use gridq_ir::{Circuit, Moment};
use serde::Serialize;
use tracing::debug;

use crate::error::CompileResult;
use crate::pass::{Pass, PassKind};
use crate::property::PropertySet;

/// Result of device verification.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct VerificationSummary {
    /// Whether the verification passed.
    pub passed: bool,
    /// Number of moments checked.
    pub moments_checked: usize,
    /// Number of operations checked.
    pub operations_checked: usize,
    /// Number of measurement keys found.
    pub measurement_keys: usize,
    /// Sum over moments of the longest operation in each.
    pub total_duration: Duration,
}

/// Duration of each moment: that of its longest operation.
pub fn moment_durations(device: &GridDevice, circuit: &Circuit) -> DeviceResult<Vec<Duration>> {
    circuit
        .moments()
        .iter()
        .map(|moment| moment_duration(device, moment))
        .collect()
}

fn moment_duration(device: &GridDevice, moment: &Moment) -> DeviceResult<Duration> {
    let mut longest = Duration::ZERO;
    for operation in moment {
        longest = longest.max(device.duration_of(operation)?);
    }
    Ok(longest)
}

/// Analysis pass running the device's circuit validation.
///
/// On success a [`VerificationSummary`] is stored in the property set; any
/// device rejection aborts the pipeline. Skipped when no device is set.
pub struct DeviceVerification;

impl Pass for DeviceVerification {
    fn name(&self) -> &'static str {
        "device_verification"
    }

    fn kind(&self) -> PassKind {
        PassKind::Analysis
    }

    fn run(&self, circuit: &mut Circuit, properties: &mut PropertySet) -> CompileResult<()> {
        let Some(device) = properties.device.as_ref() else {
            return Ok(());
        };

        device.validate_circuit(circuit)?;
        let durations = moment_durations(device, circuit)?;

        let summary = VerificationSummary {
            passed: true,
            moments_checked: circuit.depth(),
            operations_checked: circuit.num_operations(),
            measurement_keys: circuit.measurement_keys().count(),
            total_duration: durations.iter().sum(),
        };

        debug!(
            "Device verification passed: {} moments, {} operations, {:?}",
            summary.moments_checked, summary.operations_checked, summary.total_duration
        );

        properties.insert(summary);
        Ok(())
    }

    fn should_run(&self, _circuit: &Circuit, properties: &PropertySet) -> bool {
        properties.device.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CompileError;
    use gridq_device::DeviceError;
    use gridq_ir::{GridQubit, Operation};

    fn q(row: i32, col: i32) -> GridQubit {
        GridQubit::new(row, col)
    }

    #[test]
    fn test_summary_recorded() {
        let mut circuit = Circuit::new("c");
        circuit.append(Operation::phase(0.5, q(0, 0)).unwrap());
        circuit.append(Operation::cz(q(0, 0), q(0, 1)).unwrap());
        circuit.append(Operation::measure("m", [q(0, 0), q(0, 1)]).unwrap());

        let mut props = PropertySet::new().with_device(GridDevice::foxtail());
        DeviceVerification.run(&mut circuit, &mut props).unwrap();

        let summary = props.get::<VerificationSummary>().unwrap();
        assert!(summary.passed);
        assert_eq!(summary.moments_checked, 3);
        assert_eq!(summary.operations_checked, 3);
        assert_eq!(summary.measurement_keys, 1);
        assert_eq!(summary.total_duration, Duration::from_nanos(20 + 50 + 4000));
    }

    #[test]
    fn test_duplicate_keys_fail() {
        let mut circuit = Circuit::new("c");
        circuit.append(Operation::measure("m", [q(0, 0)]).unwrap());
        circuit.append(Operation::measure("m", [q(0, 0)]).unwrap());

        let mut props = PropertySet::new().with_device(GridDevice::foxtail());
        let result = DeviceVerification.run(&mut circuit, &mut props);
        assert!(matches!(
            result,
            Err(CompileError::Device(DeviceError::DuplicateMeasurementKey { .. }))
        ));
        assert!(props.get::<VerificationSummary>().is_none());
    }

    #[test]
    fn test_moment_durations() {
        let mut circuit = Circuit::new("c");
        circuit.append(Operation::phase(0.5, q(0, 0)).unwrap());
        circuit.append(Operation::virtual_z(0.5, q(1, 0)).unwrap());
        let durations = moment_durations(&GridDevice::foxtail(), &circuit).unwrap();
        assert_eq!(durations, vec![Duration::from_nanos(20)]);
    }
}
