//! Error types for the simulation crate.

use alsvin_circuit::{CircuitError, QubitId};
use thiserror::Error;

/// Errors produced by statevector simulation.
///
/// Every error aborts the whole run: once a gate in the sequence is invalid
/// no partial statevector is returned.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SimError {
    /// Register size exceeds the configured cap (2^n amplitudes would be
    /// allocated, so this bounds memory).
    #[error("register of {requested} qubits exceeds the simulator maximum of {max}")]
    InvalidSize {
        /// Requested number of qubits.
        requested: u32,
        /// Largest register the engine will allocate.
        max: u32,
    },

    /// A gate references a qubit index outside the register.
    #[error("{gate} gate references qubit {qubit} but the register only has {num_qubits} qubits")]
    IndexOutOfRange {
        /// Name of the offending gate.
        gate: &'static str,
        /// The out-of-range qubit.
        qubit: QubitId,
        /// Register size.
        num_qubits: u32,
    },

    /// Structurally malformed gate, e.g. CNOT with control == target.
    #[error("invalid {gate} gate: {reason}")]
    InvalidGate {
        /// Name of the offending gate.
        gate: &'static str,
        /// What is wrong with it.
        reason: String,
    },
}

impl From<CircuitError> for SimError {
    fn from(e: CircuitError) -> Self {
        match e {
            CircuitError::QubitOutOfRange {
                gate,
                qubit,
                num_qubits,
            } => SimError::IndexOutOfRange {
                gate,
                qubit,
                num_qubits,
            },
            CircuitError::ControlEqualsTarget { qubit } => SimError::InvalidGate {
                gate: "CNOT",
                reason: format!("control and target must differ, both are {qubit}"),
            },
            _ => SimError::InvalidGate {
                gate: "?",
                reason: e.to_string(),
            },
        }
    }
}

/// Result type for simulation operations.
pub type SimResult<T> = Result<T, SimError>;
