//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! defaults
//!     → optional TOML file (loader.rs)
//!     → environment overrides: PORT, ALLOWED_ORIGINS, UPSTREAM_BASE_URL
//!     → validation.rs (semantic checks)
//!     → RelayConfig (validated, immutable)
//!     → passed explicitly to the server and forwarder
//! ```
//!
//! # Design Decisions
//! - Config is read once at startup; there is no reload
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load, ConfigError};
pub use schema::{
    CorsConfig, LimitsConfig, ListenerConfig, ObservabilityConfig, RelayConfig, RetryConfig,
    UpstreamConfig,
};
pub use validation::ValidationError;
