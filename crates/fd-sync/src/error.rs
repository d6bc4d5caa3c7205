use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SyncError {
    #[error("round barrier broken: a party left without arriving")]
    BarrierBroken,

    #[error("round barrier wait interrupted")]
    Interrupted,

    #[error("a round barrier needs at least 2 parties, got {0}")]
    TooFewParties(usize),

    #[error("storage capacity must be greater than zero")]
    ZeroCapacity,
}

pub type SyncResult<T> = Result<T, SyncError>;
