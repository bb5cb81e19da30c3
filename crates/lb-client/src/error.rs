//! Error types for lb-client.

use std::fmt;

use thiserror::Error;

/// Which exchange with the service failed.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Call {
    OpenSession,
    /// `turn` is the 1-based submission counter.
    SubmitTurn { turn: u64 },
}

impl fmt::Display for Call {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Call::OpenSession          => f.write_str("open session"),
            Call::SubmitTurn { turn }  => write!(f, "submit turn {turn}"),
        }
    }
}

/// A single failed attempt to get a reply from the service.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("request timed out: {0}")]
    Timeout(String),

    #[error("connection failed: {0}")]
    Connection(String),

    #[error("server error {status}: {body}")]
    Status {
        status: u16,
        body:   String,
    },
}

impl From<reqwest::Error> for TransportError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            TransportError::Timeout(e.to_string())
        } else {
            TransportError::Connection(e.to_string())
        }
    }
}

/// Fatal failure of a session call.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("{call}: no reply after {attempts} attempt(s): {source}")]
    Transport {
        call:     Call,
        attempts: u32,
        #[source]
        source:   TransportError,
    },

    #[error("{call}: malformed reply: {detail}")]
    Protocol {
        call:   Call,
        detail: String,
    },
}

impl ClientError {
    pub fn call(&self) -> Call {
        match self {
            ClientError::Transport { call, .. } | ClientError::Protocol { call, .. } => *call,
        }
    }

    #[inline]
    pub fn is_protocol(&self) -> bool {
        matches!(self, ClientError::Protocol { .. })
    }
}

/// Alias for `Result<T, ClientError>`.
pub type ClientResult<T> = Result<T, ClientError>;
