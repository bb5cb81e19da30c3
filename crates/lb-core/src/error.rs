//! Core error type.
//!
//! These describe a snapshot that contradicts itself.  `lb-client` wraps them
//! into a protocol error tagged with the call that produced the snapshot.

use thiserror::Error;

use crate::ElevatorId;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("building reports zero floors")]
    NoFloors,

    #[error("{what} {floor} is outside 1..={num_floors}")]
    FloorOutOfRange {
        what:       &'static str,
        floor:      u32,
        num_floors: u32,
    },

    #[error("elevator {0} appears more than once")]
    DuplicateElevator(ElevatorId),
}

/// Shorthand result type for `lb-core`.
pub type CoreResult<T> = Result<T, CoreError>;
