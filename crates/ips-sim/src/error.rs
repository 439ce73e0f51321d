//! Error types for the simulation engine.

use thiserror::Error;

/// Crate result alias.
pub type Result<T> = std::result::Result<T, SimError>;

/// Errors surfaced by the simulation engine.
///
/// Steady-state stepping is pure total arithmetic and cannot fail; the only
/// error category is invalid construction input, reported immediately.
#[derive(Debug, Error)]
pub enum SimError {
    /// Invalid construction parameter.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let e = SimError::InvalidParameter("dt must be > 0".into());
        let msg = e.to_string();
        assert!(msg.contains("invalid parameter"));
        assert!(msg.contains("dt"));
    }
}
