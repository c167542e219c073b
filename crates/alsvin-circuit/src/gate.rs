//! Quantum gate types.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::qubit::QubitId;

/// The closed gate set the simulator supports.
///
/// Dispatch on this enum is exhaustive everywhere, so extending the gate set
/// is a compile-time-checked change rather than a string comparison chain.
/// The serde representation matches the wire format: a `type` tag plus
/// `qubit` or `control`/`target` fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Gate {
    /// Hadamard gate.
    #[serde(rename = "H")]
    H {
        /// Target qubit.
        qubit: QubitId,
    },
    /// Pauli-X (bit flip) gate.
    #[serde(rename = "X")]
    X {
        /// Target qubit.
        qubit: QubitId,
    },
    /// Pauli-Y gate.
    #[serde(rename = "Y")]
    Y {
        /// Target qubit.
        qubit: QubitId,
    },
    /// Pauli-Z (phase flip) gate.
    #[serde(rename = "Z")]
    Z {
        /// Target qubit.
        qubit: QubitId,
    },
    /// Controlled-X gate.
    #[serde(rename = "CNOT")]
    Cnot {
        /// Control qubit.
        control: QubitId,
        /// Target qubit, bit-flipped when the control is 1.
        target: QubitId,
    },
}

impl Gate {
    /// Wire-format name of the gate.
    pub fn name(&self) -> &'static str {
        match self {
            Gate::H { .. } => "H",
            Gate::X { .. } => "X",
            Gate::Y { .. } => "Y",
            Gate::Z { .. } => "Z",
            Gate::Cnot { .. } => "CNOT",
        }
    }

    /// The qubits this gate acts on, control first for CNOT.
    pub fn qubits(&self) -> Vec<QubitId> {
        match *self {
            Gate::H { qubit } | Gate::X { qubit } | Gate::Y { qubit } | Gate::Z { qubit } => {
                vec![qubit]
            }
            Gate::Cnot { control, target } => vec![control, target],
        }
    }
}

impl fmt::Display for Gate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Gate::H { qubit } | Gate::X { qubit } | Gate::Y { qubit } | Gate::Z { qubit } => {
                write!(f, "{}({})", self.name(), qubit)
            }
            Gate::Cnot { control, target } => write!(f, "CNOT({control}, {target})"),
        }
    }
}
