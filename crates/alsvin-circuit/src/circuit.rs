//! Ordered gate sequences over a fixed-size register.

use serde::{Deserialize, Serialize};

use crate::error::{CircuitError, CircuitResult};
use crate::gate::Gate;
use crate::qubit::QubitId;

/// A circuit: register size plus an ordered list of gates.
///
/// Gates are validated against the register size as they are appended.
/// A circuit deserialized from untrusted input must be re-checked with
/// [`Circuit::validate`] before it is handed to the simulator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Circuit {
    num_qubits: u32,
    gates: Vec<Gate>,
}

impl Circuit {
    /// Create an empty circuit over `num_qubits` qubits.
    ///
    /// `num_qubits == 0` is allowed; it describes the degenerate single-state
    /// register whose only basis label is the empty string.
    pub fn new(num_qubits: u32) -> Self {
        Self {
            num_qubits,
            gates: Vec::new(),
        }
    }

    /// Register size.
    pub fn num_qubits(&self) -> u32 {
        self.num_qubits
    }

    /// The gate sequence, in application order.
    pub fn gates(&self) -> &[Gate] {
        &self.gates
    }

    /// Append a gate after validating its qubit indices.
    pub fn push(&mut self, gate: Gate) -> CircuitResult<&mut Self> {
        self.check(&gate)?;
        self.gates.push(gate);
        Ok(self)
    }

    /// Apply Hadamard gate.
    pub fn h(&mut self, qubit: QubitId) -> CircuitResult<&mut Self> {
        self.push(Gate::H { qubit })
    }

    /// Apply Pauli-X gate.
    pub fn x(&mut self, qubit: QubitId) -> CircuitResult<&mut Self> {
        self.push(Gate::X { qubit })
    }

    /// Apply Pauli-Y gate.
    pub fn y(&mut self, qubit: QubitId) -> CircuitResult<&mut Self> {
        self.push(Gate::Y { qubit })
    }

    /// Apply Pauli-Z gate.
    pub fn z(&mut self, qubit: QubitId) -> CircuitResult<&mut Self> {
        self.push(Gate::Z { qubit })
    }

    /// Apply controlled-X gate.
    pub fn cnot(&mut self, control: QubitId, target: QubitId) -> CircuitResult<&mut Self> {
        self.push(Gate::Cnot { control, target })
    }

    /// Re-validate every gate, for circuits built by deserialization.
    pub fn validate(&self) -> CircuitResult<()> {
        for gate in &self.gates {
            self.check(gate)?;
        }
        Ok(())
    }

    fn check(&self, gate: &Gate) -> CircuitResult<()> {
        for qubit in gate.qubits() {
            if qubit.0 >= self.num_qubits {
                return Err(CircuitError::QubitOutOfRange {
                    gate: gate.name(),
                    qubit,
                    num_qubits: self.num_qubits,
                });
            }
        }
        if let Gate::Cnot { control, target } = *gate {
            if control == target {
                return Err(CircuitError::ControlEqualsTarget { qubit: control });
            }
        }
        Ok(())
    }
}
