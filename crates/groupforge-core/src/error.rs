//! Error types for GroupForge

use thiserror::Error;

/// Main error type for GroupForge operations
#[derive(Debug, Error)]
pub enum GroupForgeError {
    /// Criteria are structurally malformed
    #[error("Invalid criteria: {0}")]
    InvalidCriteria(String),

    /// Error in engine configuration
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for GroupForge operations
pub type Result<T> = std::result::Result<T, GroupForgeError>;
