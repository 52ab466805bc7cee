//! gridq Grid Device
//!
//! This crate models a fixed grid of qubits and answers, synchronously,
//! whether proposed operations and moments are legal placements on it.
//!
//! # Overview
//!
//! - [`GridTopology`]: the frozen site set with adjacency, row and column queries
//! - [`GateDurations`]: per-gate timing for downstream schedule analysis
//! - [`gateset`]: the native gate allowlist
//! - [`validate`]: single-operation checks (gate, site type, membership, locality)
//! - [`exclusion`]: the interaction-exclusion rule between simultaneous interactions
//! - [`keys`]: measurement-key uniqueness across a circuit
//! - [`GridDevice`]: the facade composing all of the above with injected
//!   [`GenericChecks`]
//! - [`DeviceConfig`]: YAML/JSON device descriptions with environment overrides
//!
//! # Interaction exclusion
//!
//! Two interactions in one moment conflict when any site of one is adjacent to
//! any site of the other, even if they share no site:
//!
//! ```text
//! q(0, 0)───q(0, 1)     cz(q(0, 0), q(0, 1)) and cz(q(1, 0), q(1, 1))
//! │         │           cannot run in the same moment.
//! q(1, 0)───q(1, 1)
//! ```
//!
//! # Example
//!
//! ```rust
//! use std::time::Duration;
//!
//! use gridq_device::{DeviceError, GridDevice};
//! use gridq_ir::{GridQubit, Moment, Operation};
//!
//! let device = GridDevice::new(
//!     Duration::from_nanos(1000),
//!     Duration::from_nanos(20),
//!     Duration::from_nanos(40),
//!     GridQubit::rect(2, 2),
//! );
//!
//! let q = GridQubit::new;
//! let moment = Moment::from_operations([
//!     Operation::cz(q(0, 0), q(0, 1)).unwrap(),
//!     Operation::cz(q(1, 0), q(1, 1)).unwrap(),
//! ])
//! .unwrap();
//!
//! assert!(matches!(
//!     device.validate_moment(&moment),
//!     Err(DeviceError::AdjacentInteraction { .. })
//! ));
//! ```

pub mod config;
pub mod device;
pub mod diagram;
pub mod error;
pub mod exclusion;
pub mod gateset;
pub mod generic;
pub mod keys;
pub mod timing;
pub mod topology;
pub mod validate;

pub use config::{ConfigError, DeviceConfig, DurationConfig};
pub use device::GridDevice;
pub use error::{DeviceError, DeviceResult};
pub use generic::{GenericChecks, NoOverlap};
pub use timing::GateDurations;
pub use topology::GridTopology;
