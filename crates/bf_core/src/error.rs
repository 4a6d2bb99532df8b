use thiserror::Error;

/// Caller-contract violations on directly validated inputs.
///
/// These propagate immediately; the library performs no recovery.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UtilError {
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),

    #[error("start index {index} is out of range (len {len})")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Reason a soft-failing operation fell back.
///
/// By the time a `Degraded` reaches the caller the reason has already been
/// logged at warn level; the caller only has to pick a fallback.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{reason}")]
pub struct Degraded {
    pub reason: String,
}

impl Degraded {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

/// Outcome of an operation that degrades gracefully instead of erroring hard.
///
/// Used for everything involving external resolution: portable timestamp
/// parsing and dynamic component construction. Corrupted save data or a
/// misconfigured plugin name must never crash the engine.
pub type Soft<T> = Result<T, Degraded>;
