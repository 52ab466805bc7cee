//! gridq Circuit Representation
//!
//! This crate provides the value types that grid-device validation inspects:
//! sites, gates, operations, moments and circuits. It plays the role of the
//! host framework; the `gridq-device` crate only reads these values.
//!
//! # Core Components
//!
//! - **Sites**: [`GridQubit`] for `(row, col)` coordinates, [`Qubit`] for any site
//!   value a builder may hand over, [`QubitPair`] for undirected edges
//! - **Gates**: [`Gate`] with its closed [`GateKind`] tag
//! - **Operations**: [`Operation`], either a plain gate or a composite/conditional form
//! - **Moments**: [`Moment`], operations sharing a time step
//! - **Circuit**: [`Circuit`], moments in time order with an earliest-insertion assembler
//!
//! # Example
//!
//! ```rust
//! use gridq_ir::{Circuit, GridQubit, Operation};
//!
//! let a = GridQubit::new(0, 0);
//! let b = GridQubit::new(0, 1);
//!
//! let mut circuit = Circuit::new("bell");
//! circuit.append(Operation::phase(0.5, a).unwrap());
//! circuit.append(Operation::cz(a, b).unwrap());
//! circuit.append(Operation::measure("m", [a, b]).unwrap());
//!
//! assert_eq!(circuit.depth(), 3);
//! assert_eq!(circuit.measurement_keys().collect::<Vec<_>>(), vec!["m"]);
//! ```

pub mod circuit;
pub mod error;
pub mod gate;
pub mod moment;
pub mod operation;
pub mod qubit;

pub use circuit::Circuit;
pub use error::{IrError, IrResult};
pub use gate::{CustomGate, Gate, GateKind, RotationAxis};
pub use moment::Moment;
pub use operation::{Operation, OperationKind};
pub use qubit::{GridQubit, Qubit, QubitPair};
