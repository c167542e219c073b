//! `alsvin-circuit` — circuit model for the Alsvin statevector service.
//!
//! A [`Circuit`] is a register size plus an ordered sequence of [`Gate`]s.
//! Order is semantically significant (gates do not commute in general), and
//! every gate is validated against the register size when it is appended, so
//! a `Circuit` that exists is a `Circuit` the simulator can run.
//!
//! # Quick start
//!
//! ```rust
//! use alsvin_circuit::{Circuit, QubitId};
//!
//! // Bell pair: H on qubit 0, then CNOT(0 -> 1).
//! let mut circuit = Circuit::new(2);
//! circuit.h(QubitId(0)).unwrap().cnot(QubitId(0), QubitId(1)).unwrap();
//! assert_eq!(circuit.gates().len(), 2);
//! ```

pub mod circuit;
pub mod error;
pub mod gate;
pub mod qubit;

pub use circuit::Circuit;
pub use error::{CircuitError, CircuitResult};
pub use gate::Gate;
pub use qubit::QubitId;
