//! Per-elevator command for one turn.

use crate::{Action, Direction, ElevatorId};

/// What one elevator should do this turn.
///
/// Commands are built fresh every turn by a dispatch policy and consumed
/// immediately by the submission; they are never stored across turns.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Command {
    pub elevator_id: ElevatorId,
    pub direction:   Direction,
    pub action:      Action,
}

impl Command {
    pub fn new(elevator_id: ElevatorId, direction: Direction, action: Action) -> Self {
        Self { elevator_id, direction, action }
    }
}
