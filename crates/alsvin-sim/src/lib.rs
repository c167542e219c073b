//! `alsvin-sim` — dense statevector simulation.
//!
//! Simulates an n-qubit register as a vector of `2^n` complex amplitudes and
//! applies gates from the {H, X, Y, Z, CNOT} set by index arithmetic, without
//! ever materializing a gate matrix. The pipeline is linear:
//! initialize → apply each gate in order → normalize → render.
//!
//! # Quick start
//!
//! ```rust
//! use alsvin_circuit::{Circuit, QubitId};
//! use alsvin_sim::Statevector;
//!
//! let mut circuit = Circuit::new(2);
//! circuit.h(QubitId(0)).unwrap().cnot(QubitId(0), QubitId(1)).unwrap();
//!
//! let state = Statevector::run(&circuit).unwrap();
//! assert_eq!(state.format_entries(), vec!["00: 0.7071", "11: 0.7071"]);
//! ```

pub mod error;
pub mod statevector;

pub use error::{SimError, SimResult};
pub use statevector::{MAX_QUBITS, NEGLIGIBLE, Statevector};
