use thiserror::Error;

/// Validation and lookup failures raised by catalog queries and mutations.
///
/// None of these are fatal: callers abort the current operation, show the
/// message and hand control back to the menu.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// A required text field was empty, blank or too short
    #[error("{0}")]
    InvalidInput(String),

    /// A numeric field could not be parsed
    #[error("{0}")]
    InvalidFormat(String),

    /// A numeric field parsed but lies outside its allowed bounds
    #[error("{0}")]
    InvalidRange(String),

    /// No entity matches the lookup key
    #[error("{0}")]
    NotFound(String),

    /// An entity with the same key already exists
    #[error("{0}")]
    Duplicate(String),
}

impl CatalogError {
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    pub fn invalid_format(msg: impl Into<String>) -> Self {
        Self::InvalidFormat(msg.into())
    }

    pub fn invalid_range(msg: impl Into<String>) -> Self {
        Self::InvalidRange(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn duplicate(msg: impl Into<String>) -> Self {
        Self::Duplicate(msg.into())
    }
}
