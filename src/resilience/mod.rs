//! Resilience subsystem.
//!
//! # Data Flow
//! ```text
//! Upstream attempt fails at the transport level:
//!     → backoff.rs (how long to wait before the next attempt)
//!     → forwarder retries until the attempt budget is spent
//! ```
//!
//! # Design Decisions
//! - Only transport failures are retried; any HTTP status is a result
//! - Every method is retried the same way, POST included
//! - Backoff waits suspend only the request being retried

pub mod backoff;
