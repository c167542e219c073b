//! Data Transfer Objects for the simulation API.
//!
//! Requests arrive as a loose gate list (`type` string plus optional index
//! fields) and are converted into the strict [`Gate`] enum here. Conversion
//! is where unrecognized gate types and missing fields become explicit
//! errors instead of silent no-ops.

use serde::{Deserialize, Serialize};

use alsvin_circuit::{Circuit, Gate, QubitId};

use crate::error::ApiError;

/// Request to simulate a circuit.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulateRequest {
    /// Register size. `0` is accepted and describes the degenerate
    /// single-state register.
    pub qubit_count: u32,
    /// Gates in application order.
    #[serde(default)]
    pub gates: Vec<GateSpec>,
}

/// One gate as it appears on the wire.
#[derive(Debug, Deserialize)]
pub struct GateSpec {
    /// Gate type tag: "H", "X", "Y", "Z" or "CNOT".
    #[serde(rename = "type")]
    pub kind: String,
    /// Target qubit for single-qubit gates.
    pub qubit: Option<u32>,
    /// Control qubit for CNOT.
    pub control: Option<u32>,
    /// Target qubit for CNOT.
    pub target: Option<u32>,
}

impl GateSpec {
    /// Convert to a [`Gate`], naming the gate's position in error messages.
    pub fn to_gate(&self, position: usize) -> Result<Gate, ApiError> {
        let single = |field: Option<u32>| {
            field.map(QubitId).ok_or_else(|| {
                ApiError::BadRequest(format!(
                    "gate {position}: {} gate requires a 'qubit' field",
                    self.kind
                ))
            })
        };
        match self.kind.as_str() {
            "H" => Ok(Gate::H { qubit: single(self.qubit)? }),
            "X" => Ok(Gate::X { qubit: single(self.qubit)? }),
            "Y" => Ok(Gate::Y { qubit: single(self.qubit)? }),
            "Z" => Ok(Gate::Z { qubit: single(self.qubit)? }),
            "CNOT" => {
                let missing = |field: &str| {
                    ApiError::BadRequest(format!(
                        "gate {position}: CNOT gate requires a '{field}' field"
                    ))
                };
                Ok(Gate::Cnot {
                    control: QubitId(self.control.ok_or_else(|| missing("control"))?),
                    target: QubitId(self.target.ok_or_else(|| missing("target"))?),
                })
            }
            other => Err(ApiError::BadRequest(format!(
                "gate {position}: unrecognized gate type '{other}'"
            ))),
        }
    }
}

impl SimulateRequest {
    /// Build the validated circuit this request describes.
    pub fn into_circuit(self) -> Result<Circuit, ApiError> {
        let mut circuit = Circuit::new(self.qubit_count);
        for (position, spec) in self.gates.iter().enumerate() {
            let gate = spec.to_gate(position)?;
            circuit
                .push(gate)
                .map_err(|e| ApiError::BadRequest(format!("gate {position}: {e}")))?;
        }
        Ok(circuit)
    }
}

/// Successful simulation response.
#[derive(Debug, Serialize)]
pub struct SimulateResponse {
    /// One `"<label>: <amplitude>"` line per nonzero basis state.
    pub statevector: Vec<String>,
}

/// Plain acknowledgement payload for `/` and `/clear`.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    /// Human-readable message.
    pub message: String,
}
