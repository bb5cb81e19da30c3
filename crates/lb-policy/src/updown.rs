//! Up/down sweep policy.
//!
//! # Per-elevator state machine
//!
//! ```text
//!            floor == top
//!   ┌──────┐ ───────────▶ ┌────────┐
//!   │  Up  │              │  Down  │
//!   └──────┘ ◀─────────── └────────┘
//!             floor == 1
//! ```
//!
//! Each turn, for each elevator in state order:
//!
//! 1. **Reverse** at the boundary floor and write the (possibly unchanged)
//!    direction back into memory.
//! 2. **Stop** if the current floor is one of the elevator's own pending
//!    stops, or if a hall call at this floor wants to travel in the
//!    post-reversal direction.  Otherwise move.
//!
//! Reversal comes first so an elevator sitting at the top floor, about to
//! head down, only stops for downward calls.
//!
//! Requests are never cleared here.  The next snapshot from the service is
//! authoritative about what is still pending.

use std::collections::HashMap;

use lb_core::{Action, Command, Direction, Elevator, ElevatorId, SimulationState};

use crate::DispatchPolicy;

#[derive(Default)]
pub struct UpDownPolicy {
    /// Last direction per elevator.  Unseen elevators start `Up`.
    memory: HashMap<ElevatorId, Direction>,
}

impl UpDownPolicy {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with pre-seeded directions.
    pub fn with_memory(memory: impl IntoIterator<Item = (ElevatorId, Direction)>) -> Self {
        Self { memory: memory.into_iter().collect() }
    }

    /// The direction remembered for `id`, if the elevator has been seen.
    pub fn remembered(&self, id: &str) -> Option<Direction> {
        self.memory.get(id).copied()
    }

    fn command_for(&mut self, elevator: &Elevator, state: &SimulationState) -> Command {
        let previous = self.memory.get(&elevator.id).copied().unwrap_or_default();
        let direction = reverse_at_boundary(previous, elevator.floor, state.top_floor());
        self.memory.insert(elevator.id.clone(), direction);

        let action = stop_decision(elevator, direction, state);
        Command::new(elevator.id.clone(), direction, action)
    }
}

impl DispatchPolicy for UpDownPolicy {
    fn name(&self) -> &'static str {
        "updown"
    }

    fn decide(&mut self, state: &SimulationState) -> Vec<Command> {
        state
            .elevators
            .iter()
            .map(|elevator| self.command_for(elevator, state))
            .collect()
    }
}

// ── Rules ─────────────────────────────────────────────────────────────────────

/// Flip `Up` at the top floor and `Down` at floor 1; otherwise keep going.
#[inline]
pub fn reverse_at_boundary(direction: Direction, floor: u32, top_floor: u32) -> Direction {
    match direction {
        Direction::Up   if floor == top_floor => Direction::Down,
        Direction::Down if floor == 1         => Direction::Up,
        d => d,
    }
}

/// `Stop` for an own pending stop here, else for a same-direction hall call
/// here; `Move` otherwise.
pub fn stop_decision(elevator: &Elevator, direction: Direction, state: &SimulationState) -> Action {
    if elevator.has_own_stop_here() || state.has_hall_request(elevator.floor, direction) {
        Action::Stop
    } else {
        Action::Move
    }
}
