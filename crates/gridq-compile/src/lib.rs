//! gridq Optimization Pipeline
//!
//! This crate is the boundary between circuit construction and a grid
//! device: it takes a circuit, remaps its qubits onto grid sites, cleans it
//! up under a named strategy and, when a device is given, packs and verifies
//! it against that device.
//!
//! # Architecture
//!
//! ```text
//! Input Circuit
//!       │
//!       ▼
//! ┌─────────────┐
//! │ PassManager │ ◄── PropertySet (device, verification summary)
//! └─────────────┘
//!       │
//!       ├── QubitMapping
//!       ├── DropNegligible
//!       ├── RequireFullInteractions   (xmon only)
//!       ├── DropEmptyMoments
//!       ├── MomentPacking             (device only)
//!       └── DeviceVerification        (device only)
//!       │
//!       ▼
//! Output Circuit
//! ```
//!
//! # Example
//!
//! ```rust
//! use gridq_compile::{line_onto_row, optimized_for_xmon};
//! use gridq_device::GridDevice;
//! use gridq_ir::{Circuit, Operation, Qubit};
//!
//! let mut circuit = Circuit::new("pairs");
//! circuit.append(Operation::cz(Qubit::Line(0), Qubit::Line(1)).unwrap());
//! circuit.append(Operation::cz(Qubit::Line(2), Qubit::Line(3)).unwrap());
//!
//! let device = GridDevice::foxtail();
//! let optimized = optimized_for_xmon(&circuit, Some(&device), line_onto_row(0), false).unwrap();
//!
//! // The two interactions touch neighbouring sites and are split apart.
//! assert_eq!(optimized.depth(), 2);
//! assert!(device.validate_circuit(&optimized).is_ok());
//! ```
//!
//! # Strategies
//!
//! | Name | Partial interactions |
//! |------|----------------------|
//! | `xmon` | rejected |
//! | `xmon_partial_cz` | kept |
//!
//! Gate decomposition into the native set is not performed; inputs must
//! already use native gates.

pub mod error;
pub mod manager;
pub mod pass;
pub mod property;
pub mod strategy;

// Built-in passes
pub mod passes;

pub use error::{CompileError, CompileResult};
pub use manager::{PassManager, PassManagerBuilder};
pub use pass::{Pass, PassKind};
pub use property::PropertySet;
pub use strategy::{
    OptimizerType, QubitMap, identity_map, line_onto_row, optimized_for_grid, optimized_for_xmon,
};
