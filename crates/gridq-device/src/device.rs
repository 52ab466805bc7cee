//! The grid device: topology, timing and placement rules behind one facade.

use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use gridq_ir::{Circuit, Gate, GateKind, GridQubit, Moment, Operation, QubitPair};
use tracing::debug;

use crate::diagram;
use crate::error::DeviceResult;
use crate::exclusion;
use crate::gateset;
use crate::generic::{GenericChecks, NoOverlap};
use crate::keys;
use crate::timing::GateDurations;
use crate::topology::GridTopology;
use crate::validate;

/// A grid device with nearest-neighbour interactions.
///
/// Frozen at construction; every query and validator takes `&self`, so one
/// device can serve any number of threads without locking.
///
/// # Example
///
/// ```
/// use gridq_device::GridDevice;
/// use gridq_ir::{GridQubit, Moment, Operation};
///
/// let device = GridDevice::foxtail();
/// let a = GridQubit::new(0, 0);
/// let b = GridQubit::new(0, 1);
///
/// let moment = Moment::from_operations([Operation::cz(a, b).unwrap()]).unwrap();
/// let parallel = Operation::cz(GridQubit::new(1, 0), GridQubit::new(1, 1)).unwrap();
///
/// assert!(device.validate_moment(&moment).is_ok());
/// assert!(!device.can_add_operation_into_moment(&parallel, &moment));
/// ```
#[derive(Clone)]
pub struct GridDevice {
    durations: GateDurations,
    topology: GridTopology,
    generic: Arc<dyn GenericChecks>,
}

impl GridDevice {
    /// Create a device from gate durations and its sites.
    ///
    /// Repeated sites collapse into one.
    pub fn new(
        measurement: Duration,
        single_qubit: Duration,
        two_qubit: Duration,
        qubits: impl IntoIterator<Item = GridQubit>,
    ) -> Self {
        let qubits: Vec<GridQubit> = qubits.into_iter().collect();
        let given = qubits.len();
        let topology = GridTopology::from_qubits(qubits);
        if topology.len() < given {
            debug!(
                "collapsed {} repeated sites into {}",
                given,
                topology.len()
            );
        }
        Self::from_parts(
            GateDurations::new(measurement, single_qubit, two_qubit),
            topology,
        )
    }

    /// Create a device from an existing duration table and topology.
    pub fn from_parts(durations: GateDurations, topology: GridTopology) -> Self {
        Self {
            durations,
            topology,
            generic: Arc::new(NoOverlap),
        }
    }

    /// The 2 × 11 Foxtail device.
    pub fn foxtail() -> Self {
        Self::from_parts(GateDurations::foxtail(), GridTopology::rect(2, 11))
    }

    /// Replace the generic checks consulted before the device rules.
    pub fn with_generic_checks(mut self, generic: Arc<dyn GenericChecks>) -> Self {
        self.generic = generic;
        self
    }

    /// The frozen site set.
    pub fn qubit_set(&self) -> &BTreeSet<GridQubit> {
        self.topology.qubits()
    }

    /// The underlying topology.
    pub fn topology(&self) -> &GridTopology {
        &self.topology
    }

    /// Duration table.
    pub fn durations(&self) -> &GateDurations {
        &self.durations
    }

    /// Name of the injected generic checks.
    pub fn generic_checks(&self) -> &str {
        self.generic.name()
    }

    /// Present neighbours of `qubit`, north, south, east, west.
    pub fn neighbors_of(&self, qubit: &GridQubit) -> Vec<GridQubit> {
        self.topology.neighbors_of(qubit)
    }

    /// The site at `(row, col)`, if present.
    pub fn at(&self, row: i32, col: i32) -> Option<GridQubit> {
        self.topology.at(row, col)
    }

    /// Sites in row `row`, ascending.
    pub fn row(&self, row: i32) -> Vec<GridQubit> {
        self.topology.row(row)
    }

    /// Sites in column `col`, ascending.
    pub fn col(&self, col: i32) -> Vec<GridQubit> {
        self.topology.col(col)
    }

    /// Edges between present neighbours.
    pub fn qubit_pairs(&self) -> BTreeSet<QubitPair> {
        self.topology.pairs()
    }

    /// Execution time of `operation`.
    pub fn duration_of(&self, operation: &Operation) -> DeviceResult<Duration> {
        self.durations.duration_of(operation)
    }

    /// Whether `gate` is native to the device.
    pub fn is_supported_gate(&self, gate: &Gate) -> bool {
        gateset::is_supported_gate(gate)
    }

    /// Reject gates outside the native set.
    pub fn validate_gate(&self, gate: &Gate) -> DeviceResult<GateKind> {
        gateset::validate_gate(gate)
    }

    /// Validate a single operation against the device.
    pub fn validate_operation(&self, operation: &Operation) -> DeviceResult<()> {
        validate::validate_operation(&self.topology, operation)
    }

    /// Validate a moment: generic checks, every operation, then interaction exclusion.
    pub fn validate_moment(&self, moment: &Moment) -> DeviceResult<()> {
        self.generic.validate_moment(moment)?;
        for operation in moment {
            self.validate_operation(operation)?;
        }
        exclusion::validate_moment(moment)
    }

    /// Validate every moment in order, then measurement-key uniqueness.
    pub fn validate_circuit(&self, circuit: &Circuit) -> DeviceResult<()> {
        for moment in circuit.moments() {
            self.validate_moment(moment)?;
        }
        keys::verify_unique_measurement_keys(circuit)
    }

    /// Whether `operation` may be placed into `moment`.
    ///
    /// Never fails: an already-invalid moment accepts nothing.
    pub fn can_add_operation_into_moment(&self, operation: &Operation, moment: &Moment) -> bool {
        if let Err(e) = self.validate_moment(moment) {
            debug!("refusing placement into invalid moment: {e}");
            return false;
        }
        if !self.generic.can_add_operation_into_moment(operation, moment) {
            return false;
        }
        if operation.is_interaction() {
            return !exclusion::conflicts_with_any(operation, moment);
        }
        true
    }

    /// Render the device as a grid diagram.
    pub fn to_diagram(&self) -> String {
        diagram::render(&self.topology)
    }
}

impl Default for GridDevice {
    fn default() -> Self {
        Self::foxtail()
    }
}

impl PartialEq for GridDevice {
    fn eq(&self, other: &Self) -> bool {
        self.durations == other.durations && self.topology == other.topology
    }
}

impl Eq for GridDevice {}

impl fmt::Debug for GridDevice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GridDevice")
            .field("measurement", &self.durations.measurement)
            .field("single_qubit", &self.durations.single_qubit)
            .field("two_qubit", &self.durations.two_qubit)
            .field("qubits", self.topology.qubits())
            .field("generic", &self.generic.name())
            .finish()
    }
}

impl fmt::Display for GridDevice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_diagram())
    }
}
