//! API endpoint handlers.

use std::sync::Arc;

use axum::{Json, extract::State};
use tracing::debug;

use alsvin_sim::{SimError, Statevector};

use crate::dto::{MessageResponse, SimulateRequest, SimulateResponse};
use crate::error::ApiError;
use crate::state::AppState;

/// GET / - Welcome message, doubles as a liveness probe.
pub async fn welcome() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "Welcome to the Alsvin quantum circuit simulator!".to_string(),
    })
}

/// POST /simulate - Run a circuit and return the resulting statevector.
pub async fn simulate(
    State(state): State<Arc<AppState>>,
    Json(req): Json<SimulateRequest>,
) -> Result<Json<SimulateResponse>, ApiError> {
    // The deployment cap may be tighter than the engine's hard limit.
    if req.qubit_count > state.config.max_qubits {
        return Err(SimError::InvalidSize {
            requested: req.qubit_count,
            max: state.config.max_qubits,
        }
        .into());
    }

    let circuit = req.into_circuit()?;
    debug!(
        num_qubits = circuit.num_qubits(),
        num_gates = circuit.gates().len(),
        "simulating circuit"
    );

    let statevector = Statevector::run(&circuit)?;

    Ok(Json(SimulateResponse {
        statevector: statevector.format_entries(),
    }))
}

/// POST /clear - Acknowledge a frontend reset.
///
/// The server holds no circuit state between requests, so there is nothing
/// to clear; the route exists for compatibility with the circuit-builder
/// frontend.
pub async fn clear() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "Circuit cleared!".to_string(),
    })
}
