//! Server configuration and shared state.

use std::net::SocketAddr;

use alsvin_sim::MAX_QUBITS;
use axum::http::HeaderValue;

/// Server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind the server to.
    pub bind_address: SocketAddr,
    /// Origin allowed by the CORS layer (the circuit-builder frontend).
    pub allowed_origin: HeaderValue,
    /// Largest register a request may ask for. Never exceeds the engine's
    /// own [`MAX_QUBITS`] cap; a deployment can lower it further.
    pub max_qubits: u32,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: ([127, 0, 0, 1], 8000).into(),
            allowed_origin: HeaderValue::from_static("http://localhost:3000"),
            max_qubits: MAX_QUBITS,
        }
    }
}

/// Shared application state.
///
/// Holds configuration only: every request simulates into its own freshly
/// allocated statevector, so there is no mutable state to share and no
/// locking discipline to get wrong.
pub struct AppState {
    /// Server configuration.
    pub config: ServerConfig,
}

impl AppState {
    /// Create application state with the given configuration.
    pub fn with_config(config: ServerConfig) -> Self {
        let config = ServerConfig {
            max_qubits: config.max_qubits.min(MAX_QUBITS),
            ..config
        };
        Self { config }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::with_config(ServerConfig::default())
    }
}
