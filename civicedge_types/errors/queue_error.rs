use thiserror::Error;

/// Errors from the durable pending-reports queue.
#[derive(Debug, Error)]
pub enum QueueError {
    #[error("pending queue IO error")]
    Io(#[from] std::io::Error),

    #[error("pending queue state is corrupt: {0}")]
    Corrupt(String),
}
