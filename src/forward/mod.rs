//! Upstream forwarding subsystem.
//!
//! # Data Flow
//! ```text
//! InboundRequest (method, suffix, query, headers, body)
//!     → target.rs (base URL + verbatim suffix + collapsed query)
//!     → headers.rs (request deny-list, explicit defaults)
//!     → forwarder.rs (attempt loop, fresh client per attempt)
//!         → transport error: backoff, next attempt
//!         → any HTTP status: done
//!     → headers.rs (strip framing headers from the reply)
//!     → RelayResponse
//! ```
//!
//! # Design Decisions
//! - The upstream body is buffered in full before it is relayed
//! - Upstream 4xx/5xx statuses are results, not failures
//! - Exhausted retries become a 502 with a JSON error body

pub mod error;
pub mod forwarder;
pub mod headers;
pub mod target;

pub use error::ForwardError;
pub use forwarder::{Forwarder, InboundRequest, RelayResponse};
