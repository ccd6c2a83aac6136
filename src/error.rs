//! Error types for table registry operations

use thiserror::Error;

/// Errors that can occur while sanitizing identifiers
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("Invalid identifier: {0}")]
    InvalidIdentifier(String),
}

impl RegistryError {
    pub fn invalid_identifier(msg: impl Into<String>) -> Self {
        Self::InvalidIdentifier(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, RegistryError>;
