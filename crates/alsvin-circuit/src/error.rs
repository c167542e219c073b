//! Error types for the circuit crate.

use crate::qubit::QubitId;
use thiserror::Error;

/// Errors raised while building or validating a circuit.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CircuitError {
    /// A gate references a qubit index outside the register.
    #[error("{gate} gate references qubit {qubit} but the register only has {num_qubits} qubits")]
    QubitOutOfRange {
        /// Name of the offending gate.
        gate: &'static str,
        /// The out-of-range qubit.
        qubit: QubitId,
        /// Register size.
        num_qubits: u32,
    },

    /// CNOT with identical control and target qubits.
    #[error("CNOT control and target must differ, both are {qubit}")]
    ControlEqualsTarget {
        /// The duplicated qubit.
        qubit: QubitId,
    },
}

/// Result type for circuit construction.
pub type CircuitResult<T> = Result<T, CircuitError>;
