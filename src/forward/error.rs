//! Forwarding error taxonomy.

use std::error::Error as StdError;

use thiserror::Error;

/// Errors raised while contacting the upstream.
///
/// Any HTTP response counts as success; these cover everything that stops a
/// response from arriving at all.
#[derive(Debug, Error)]
pub enum ForwardError {
    /// The path suffix could not be turned into a URL.
    #[error("invalid target URL: {0}")]
    InvalidTarget(#[from] url::ParseError),

    /// The per-attempt client could not be constructed (TLS backend setup).
    #[error("failed to build upstream client: {0}")]
    Client(#[source] reqwest::Error),

    /// Connect, TLS, timeout or I/O failure while sending or reading.
    #[error("{0}")]
    Transport(#[source] reqwest::Error),
}

impl ForwardError {
    /// Whether the attempt hit the per-attempt deadline.
    pub fn is_timeout(&self) -> bool {
        match self {
            ForwardError::Client(e) | ForwardError::Transport(e) => e.is_timeout(),
            ForwardError::InvalidTarget(_) => false,
        }
    }

    /// Human-readable description including the underlying causes.
    pub fn detail(&self) -> String {
        let mut message = self.to_string();
        let mut source = match self {
            ForwardError::Client(e) | ForwardError::Transport(e) => e.source(),
            ForwardError::InvalidTarget(_) => None,
        };
        while let Some(cause) = source {
            message.push_str(": ");
            message.push_str(&cause.to_string());
            source = cause.source();
        }
        message
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_target_detail() {
        let err = ForwardError::from(url::Url::parse("not a url").unwrap_err());
        assert!(!err.is_timeout());
        assert!(err.detail().starts_with("invalid target URL"));
    }
}
