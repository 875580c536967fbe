//! Failure taxonomy of a check run.
//!
//! Each variant renders as the exact message reported in the CRITICAL result.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, CheckError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CheckError {
    #[error("Failed to lookup host: {0}")]
    Resolution(String),

    #[error("Failed to get interfaces")]
    InterfaceEnumeration,

    #[error("Interface not found: {0}")]
    InterfaceNotFound(String),

    #[error("Failed to addresses from interface: {0}")]
    InterfaceAddresses(String),

    #[error("'{0}' does not have an appropriate address")]
    NoAppropriateAddress(String),
}
