//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming Request (method, raw path)
//!     → axum Router (method filter, fixed endpoints)
//!     → matcher.rs (strip the relay prefix, capture the suffix)
//!     → Forwarder
//! ```
//!
//! # Design Decisions
//! - The suffix comes from the raw path, so percent-encoding survives
//! - No regex (prefix matching only)

pub mod matcher;

pub use matcher::{PrefixCapture, PROXY_PREFIX};
