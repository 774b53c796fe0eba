//! Framework error type.
//!
//! Sub-crates define their own error enums (`WalkerError`, `SimError`) and
//! wrap `CoreError` where a core validation can fail underneath them.

use thiserror::Error;

use crate::AgentId;

/// The top-level error type for `rw-core`.
#[derive(Debug, Error, PartialEq)]
pub enum CoreError {
    #[error("agent {0} not found")]
    AgentNotFound(AgentId),

    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `rw-core`.
pub type CoreResult<T> = Result<T, CoreError>;
