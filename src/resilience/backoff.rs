//! Linear backoff between upstream attempts.

use std::time::Duration;

/// Delay to wait after failed attempt number `attempt` (1-based).
///
/// The wait grows linearly: `step * attempt`, so a 1s step yields 1s before
/// the second attempt and 2s before the third.
pub fn linear_backoff(attempt: u32, step: Duration) -> Duration {
    step.saturating_mul(attempt)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_backoff() {
        let step = Duration::from_secs(1);
        assert_eq!(linear_backoff(0, step), Duration::ZERO);
        assert_eq!(linear_backoff(1, step), Duration::from_secs(1));
        assert_eq!(linear_backoff(2, step), Duration::from_secs(2));
        assert_eq!(linear_backoff(3, step), Duration::from_secs(3));
    }

    #[test]
    fn test_backoff_saturates() {
        let step = Duration::MAX;
        assert_eq!(linear_backoff(2, step), Duration::MAX);
    }
}
