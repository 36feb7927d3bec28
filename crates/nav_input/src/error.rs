//! Input routing errors.

use thiserror::Error;

/// Errors from router configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    /// Suppression window outside the accepted range.
    #[error("suppression window {value}ms out of range ({min}..={max}ms)")]
    SuppressionOutOfRange { value: u64, min: u64, max: u64 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = InputError::SuppressionOutOfRange {
            value: 5000,
            min: 50,
            max: 1000,
        };
        assert!(err.to_string().contains("5000"));
        assert!(err.to_string().contains("1000"));
    }
}
