//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, layer stack)
//!     → request.rs (assign x-request-id)
//!     → cors.rs (answer preflights, stamp cross-origin headers)
//!     → handlers.rs (status endpoints, relay handler)
//!     → Forwarder
//!     → Send to client
//! ```

pub mod cors;
pub mod handlers;
pub mod request;
pub mod server;

pub use request::X_REQUEST_ID;
pub use server::{AppState, RelayServer};
