use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, OsaError>;

/// Errors raised at the configuration boundary, before any table is built.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OsaError {
    /// The cost configuration is unusable: a weight is missing for one of
    /// the four operation kinds, or a weight is negative or non-finite.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
}

impl OsaError {
    /// Creates an `InvalidConfiguration` error from any string-like message.
    pub fn invalid_configuration(msg: impl Into<String>) -> Self {
        OsaError::InvalidConfiguration(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_message() {
        let err = OsaError::invalid_configuration("missing weight for INSERT");
        assert_eq!(
            err.to_string(),
            "invalid configuration: missing weight for INSERT"
        );
    }
}
