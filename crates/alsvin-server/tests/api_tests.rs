//! Integration tests for the Alsvin simulation API.

use std::sync::Arc;

use alsvin_server::{AppState, ServerConfig, create_router};
use axum_test::TestServer;
use serde_json::{Value, json};

// ============================================================================
// Test helpers
// ============================================================================

fn test_state() -> Arc<AppState> {
    Arc::new(AppState::with_config(ServerConfig::default()))
}

fn test_server(state: Arc<AppState>) -> TestServer {
    let router = create_router(state);
    TestServer::new(router).expect("test server")
}

fn statevector(body: &Value) -> Vec<&str> {
    body["statevector"]
        .as_array()
        .expect("statevector array")
        .iter()
        .map(|v| v.as_str().expect("statevector entry"))
        .collect()
}

// ============================================================================
// Welcome and clear endpoints
// ============================================================================

#[tokio::test]
async fn test_welcome() {
    let server = test_server(test_state());
    let response = server.get("/").await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert!(body["message"].as_str().unwrap().contains("Alsvin"));
}

#[tokio::test]
async fn test_clear_acknowledges() {
    let server = test_server(test_state());
    let response = server.post("/clear").await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["message"], "Circuit cleared!");
}

// ============================================================================
// Simulation
// ============================================================================

#[tokio::test]
async fn test_simulate_single_hadamard() {
    let server = test_server(test_state());
    let response = server
        .post("/simulate")
        .json(&json!({
            "qubitCount": 1,
            "gates": [{ "type": "H", "qubit": 0 }]
        }))
        .await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(statevector(&body), vec!["0: 0.7071", "1: 0.7071"]);
}

#[tokio::test]
async fn test_simulate_bell_state() {
    let server = test_server(test_state());
    let response = server
        .post("/simulate")
        .json(&json!({
            "qubitCount": 2,
            "gates": [
                { "type": "H", "qubit": 0 },
                { "type": "CNOT", "control": 0, "target": 1 }
            ]
        }))
        .await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(statevector(&body), vec!["00: 0.7071", "11: 0.7071"]);
}

#[tokio::test]
async fn test_simulate_empty_register() {
    let server = test_server(test_state());
    let response = server
        .post("/simulate")
        .json(&json!({ "qubitCount": 0, "gates": [] }))
        .await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(statevector(&body), vec![": 1.0000"]);
}

#[tokio::test]
async fn test_simulate_pauli_gates() {
    let server = test_server(test_state());
    let response = server
        .post("/simulate")
        .json(&json!({
            "qubitCount": 2,
            "gates": [
                { "type": "X", "qubit": 0 },
                { "type": "Z", "qubit": 0 },
                { "type": "Y", "qubit": 1 }
            ]
        }))
        .await;
    response.assert_status_ok();

    // X|0⟩ = |1⟩, Z|1⟩ = -|1⟩, Y on qubit 1 adds i|..1.⟩: total -i·|11⟩.
    let body: Value = response.json();
    assert_eq!(statevector(&body), vec!["11: -1.0000i"]);
}

// ============================================================================
// Validation failures
// ============================================================================

#[tokio::test]
async fn test_out_of_range_qubit_rejected() {
    let server = test_server(test_state());
    let response = server
        .post("/simulate")
        .json(&json!({
            "qubitCount": 2,
            "gates": [{ "type": "H", "qubit": 2 }]
        }))
        .await;
    response.assert_status(axum::http::StatusCode::BAD_REQUEST);

    let body: Value = response.json();
    let message = body["error"].as_str().unwrap();
    assert!(message.contains("gate 0"));
    assert!(message.contains("q2"));
}

#[tokio::test]
async fn test_unrecognized_gate_type_rejected() {
    let server = test_server(test_state());
    let response = server
        .post("/simulate")
        .json(&json!({
            "qubitCount": 1,
            "gates": [{ "type": "RX", "qubit": 0 }]
        }))
        .await;
    response.assert_status(axum::http::StatusCode::BAD_REQUEST);

    let body: Value = response.json();
    assert!(
        body["error"]
            .as_str()
            .unwrap()
            .contains("unrecognized gate type 'RX'")
    );
}

#[tokio::test]
async fn test_cnot_control_equals_target_rejected() {
    let server = test_server(test_state());
    let response = server
        .post("/simulate")
        .json(&json!({
            "qubitCount": 2,
            "gates": [{ "type": "CNOT", "control": 1, "target": 1 }]
        }))
        .await;
    response.assert_status(axum::http::StatusCode::BAD_REQUEST);

    let body: Value = response.json();
    assert!(body["error"].as_str().unwrap().contains("differ"));
}

#[tokio::test]
async fn test_oversized_register_rejected() {
    let state = Arc::new(AppState::with_config(ServerConfig {
        max_qubits: 8,
        ..ServerConfig::default()
    }));
    let server = test_server(state);
    let response = server
        .post("/simulate")
        .json(&json!({ "qubitCount": 9, "gates": [] }))
        .await;
    response.assert_status(axum::http::StatusCode::BAD_REQUEST);

    let body: Value = response.json();
    assert!(body["error"].as_str().unwrap().contains("maximum"));
}

#[tokio::test]
async fn test_negative_qubit_count_rejected() {
    let server = test_server(test_state());
    let response = server
        .post("/simulate")
        .json(&json!({ "qubitCount": -1, "gates": [] }))
        .await;
    // u32 deserialization refuses negatives before the engine runs.
    assert!(response.status_code().is_client_error());
}

// ============================================================================
// CORS
// ============================================================================

#[tokio::test]
async fn test_cors_allows_configured_origin() {
    let server = test_server(test_state());
    let response = server
        .get("/")
        .add_header("origin", "http://localhost:3000")
        .await;
    response.assert_status_ok();
    assert_eq!(
        response.header("access-control-allow-origin"),
        "http://localhost:3000"
    );
}
