use lb_client::ClientError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RunError {
    #[error(transparent)]
    Client(#[from] ClientError),

    /// The policy's batch does not cover exactly the held state's elevators.
    /// Nothing was submitted for this turn.
    #[error("policy {policy} on turn {turn}: {detail}")]
    CommandMismatch {
        policy: &'static str,
        turn:   u64,
        detail: String,
    },
}

impl RunError {
    /// `true` for failures the service itself caused (transport or protocol),
    /// as opposed to a misbehaving local policy.
    #[inline]
    pub fn is_client(&self) -> bool {
        matches!(self, RunError::Client(_))
    }
}

pub type RunResult<T> = Result<T, RunError>;
