//! Measurement-key uniqueness across a circuit.

use gridq_ir::Circuit;
use rustc_hash::FxHashSet;
use tracing::debug;

use crate::error::{DeviceError, DeviceResult};

/// Fail on the first measurement key already seen.
///
/// Operations are scanned in moment order, then in operation order within a
/// moment, so the reported key is reproducible.
pub fn verify_unique_measurement_keys(circuit: &Circuit) -> DeviceResult<()> {
    let mut seen: FxHashSet<&str> = FxHashSet::default();
    for key in circuit.measurement_keys() {
        if !seen.insert(key) {
            debug!("measurement key {key} repeated in {}", circuit.name());
            return Err(DeviceError::DuplicateMeasurementKey {
                key: key.to_string(),
            });
        }
    }
    Ok(())
}
