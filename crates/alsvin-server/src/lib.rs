//! Alsvin server - HTTP boundary for the statevector simulation engine.
//!
//! Exposes the engine behind three routes:
//!
//! - `GET /` — welcome message / liveness probe
//! - `POST /simulate` — accept `{qubitCount, gates}` and return the
//!   statevector as `{"statevector": ["<label>: <amplitude>", ...]}`
//! - `POST /clear` — stateless acknowledgement for the frontend
//!
//! Each request simulates into its own freshly allocated statevector;
//! nothing is shared or retained across requests.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use alsvin_server::{AppState, ServerConfig, create_router};
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = ServerConfig::default();
//!     let bind_address = config.bind_address;
//!     let state = Arc::new(AppState::with_config(config));
//!
//!     let app = create_router(state);
//!     let listener = tokio::net::TcpListener::bind(bind_address).await.unwrap();
//!     axum::serve(listener, app).await.unwrap();
//! }
//! ```

pub mod api;
pub mod dto;
pub mod error;
pub mod server;
pub mod state;

pub use dto::{GateSpec, MessageResponse, SimulateRequest, SimulateResponse};
pub use error::ApiError;
pub use server::create_router;
pub use state::{AppState, ServerConfig};
