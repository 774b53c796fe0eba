use rw_core::{AgentId, CoreError};
use rw_walker::WalkerError;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(String),

    #[error("{what} length {got} does not match agent count {expected}")]
    AgentCountMismatch {
        expected: usize,
        got:      usize,
        what:     &'static str,
    },

    #[error("agent {0} not found")]
    AgentNotFound(AgentId),

    #[error("walker error for agent {agent}: {source}")]
    Walker {
        agent:  AgentId,
        #[source]
        source: WalkerError,
    },

    #[error("trajectory requested before the run completed")]
    RunNotCompleted,
}

impl From<CoreError> for SimError {
    fn from(e: CoreError) -> Self {
        match e {
            CoreError::Config(msg)       => SimError::Config(msg),
            CoreError::AgentNotFound(id) => SimError::AgentNotFound(id),
        }
    }
}

pub type SimResult<T> = Result<T, SimError>;
