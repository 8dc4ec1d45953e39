//! CORS relay library.
//!
//! Forwards `/proxy/{path}` requests to one fixed upstream origin, retrying
//! transport failures, and returns the upstream reply with permissive
//! cross-origin headers so browser clients can reach it.

pub mod config;
pub mod forward;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod resilience;
pub mod routing;

pub use config::schema::RelayConfig;
pub use forward::{Forwarder, InboundRequest, RelayResponse};
pub use http::RelayServer;
pub use lifecycle::Shutdown;
