use std::fmt;

use fd_core::{Day, FdError};
use fd_sync::SyncError;
use thiserror::Error;

/// The two windows of a simulated day.  Each ends with one barrier
/// rendezvous.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Phase {
    Production,
    Consumption,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::Production  => f.write_str("production"),
            Phase::Consumption => f.write_str("consumption"),
        }
    }
}

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Core(#[from] FdError),

    #[error(transparent)]
    Sync(#[from] SyncError),

    #[error("{agent} failed closing the {phase} window on {day}: {source}")]
    Coordination {
        agent:  String,
        day:    Day,
        phase:  Phase,
        #[source]
        source: SyncError,
    },

    /// A blocking deposit could never complete: the batch exceeds the free
    /// space and nobody withdraws until the producer reaches the barrier.
    #[error("{day}: batch of {batch} units exceeds the {free} free storage slots")]
    BatchTooLarge { day: Day, batch: usize, free: usize },

    #[error("{agent} thread panicked")]
    AgentPanicked { agent: String },

    #[error("failed to spawn thread for {agent}: {source}")]
    Spawn {
        agent:  String,
        #[source]
        source: std::io::Error,
    },
}

impl SimError {
    pub(crate) fn coordination(agent: &str, day: Day, phase: Phase, source: SyncError) -> Self {
        SimError::Coordination { agent: agent.to_owned(), day, phase, source }
    }

    /// Rank used to pick the root cause when several workers fail together.
    /// A broken barrier is almost always a consequence of another failure.
    pub(crate) fn severity(&self) -> u8 {
        match self {
            SimError::AgentPanicked { .. } | SimError::Spawn { .. } => 3,
            SimError::Coordination { source: SyncError::Interrupted, .. } => 2,
            SimError::Coordination { source: SyncError::BarrierBroken, .. } => 0,
            _ => 1,
        }
    }
}

pub type SimResult<T> = Result<T, SimError>;
