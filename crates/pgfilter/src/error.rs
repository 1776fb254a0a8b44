//! Error types for pgfilter

use thiserror::Error;

/// Result type alias for filter-building operations
pub type FilterResult<T> = Result<T, FilterError>;

/// Error types for filter construction
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FilterError {
    /// Empty or malformed field identifier
    #[error("Invalid field: {0}")]
    InvalidField(String),

    /// Operator symbol outside the closed vocabulary
    #[error("Invalid operator: {0}")]
    InvalidOperator(String),
}

impl FilterError {
    /// Create an invalid-field error
    pub fn invalid_field(message: impl Into<String>) -> Self {
        Self::InvalidField(message.into())
    }

    /// Create an invalid-operator error
    pub fn invalid_operator(symbol: impl Into<String>) -> Self {
        Self::InvalidOperator(symbol.into())
    }

    /// Check if this is an invalid-field error
    pub fn is_invalid_field(&self) -> bool {
        matches!(self, Self::InvalidField(_))
    }

    /// Check if this is an invalid-operator error
    pub fn is_invalid_operator(&self) -> bool {
        matches!(self, Self::InvalidOperator(_))
    }
}
