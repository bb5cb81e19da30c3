//! The typed view of one simulation snapshot.
//!
//! A `SimulationState` is produced by `lb-client` from each service reply and
//! replaced wholesale every turn: nothing is merged from the previous
//! snapshot, and the client never clears requests or pending stops itself.

use std::collections::{BTreeSet, HashSet};

use crate::{CoreError, CoreResult, Direction, ElevatorId};

// ── Elevator ──────────────────────────────────────────────────────────────────

/// One elevator as reported by the service for the current turn.
#[derive(Clone, PartialEq, Debug)]
pub struct Elevator {
    pub id: ElevatorId,

    /// Current floor, `1..=num_floors`.
    pub floor: u32,

    /// Floors requested from inside this elevator ("buttons pressed").
    pub buttons_pressed: BTreeSet<u32>,
}

impl Elevator {
    pub fn new(id: impl Into<ElevatorId>, floor: u32) -> Self {
        Self { id: id.into(), floor, buttons_pressed: BTreeSet::new() }
    }

    /// Builder-style helper for tests and fixtures.
    pub fn with_buttons(mut self, floors: impl IntoIterator<Item = u32>) -> Self {
        self.buttons_pressed.extend(floors);
        self
    }

    /// `true` if a passenger inside wants to get off at the current floor.
    #[inline]
    pub fn has_own_stop_here(&self) -> bool {
        self.buttons_pressed.contains(&self.floor)
    }
}

// ── HallRequest ───────────────────────────────────────────────────────────────

/// A call placed from a floor, independent of any elevator.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct HallRequest {
    pub floor:     u32,
    pub direction: Direction,
}

impl HallRequest {
    pub fn new(floor: u32, direction: Direction) -> Self {
        Self { floor, direction }
    }
}

// ── SimulationState ───────────────────────────────────────────────────────────

/// Snapshot of the remote simulation after the last exchange.
#[derive(Clone, PartialEq, Debug)]
pub struct SimulationState {
    /// Opaque session token, echoed back on every submission.
    pub token: String,

    /// Number of floors.  Fixed for the lifetime of the session.
    pub num_floors: u32,

    /// `false` once the simulation has finished; the loop stops here.
    pub running: bool,

    /// Elevators in service order.  Command submission follows this order.
    pub elevators: Vec<Elevator>,

    /// Outstanding hall calls.
    pub requests: Vec<HallRequest>,

    /// Final score.  Only meaningful once `running` is `false`.
    pub score: Option<f64>,

    /// Link to a replay of the run.  Only present once `running` is `false`.
    pub replay_url: Option<String>,

    /// Service-reported problems with the last submission.
    pub errors: Vec<String>,

    /// Turn number as reported by the service, if it sends one.
    pub cur_turn: Option<u64>,

    /// Total number of turns in this simulation, if the service sends it.
    pub num_turns: Option<u64>,
}

impl SimulationState {
    /// An empty, running state with the given floor count.  Mostly useful as
    /// a starting point for fixtures.
    pub fn new(token: impl Into<String>, num_floors: u32) -> Self {
        Self {
            token: token.into(),
            num_floors,
            running:    true,
            elevators:  Vec::new(),
            requests:   Vec::new(),
            score:      None,
            replay_url: None,
            errors:     Vec::new(),
            cur_turn:   None,
            num_turns:  None,
        }
    }

    #[inline]
    pub fn top_floor(&self) -> u32 {
        self.num_floors
    }

    /// Elevator IDs in state order.
    pub fn elevator_ids(&self) -> impl Iterator<Item = &ElevatorId> + '_ {
        self.elevators.iter().map(|e| &e.id)
    }

    pub fn elevator(&self, id: &str) -> Option<&Elevator> {
        self.elevators.iter().find(|e| e.id.as_str() == id)
    }

    /// `true` if someone on `floor` is waiting to travel in `direction`.
    pub fn has_hall_request(&self, floor: u32, direction: Direction) -> bool {
        self.requests
            .iter()
            .any(|r| r.floor == floor && r.direction == direction)
    }

    /// Check the snapshot's internal consistency: at least one floor, every
    /// floor reference inside `1..=num_floors`, and unique elevator IDs.
    pub fn validate(&self) -> CoreResult<()> {
        if self.num_floors == 0 {
            return Err(CoreError::NoFloors);
        }

        let mut seen: HashSet<&str> = HashSet::with_capacity(self.elevators.len());
        for elevator in &self.elevators {
            if !seen.insert(elevator.id.as_str()) {
                return Err(CoreError::DuplicateElevator(elevator.id.clone()));
            }
            self.check_floor("elevator floor", elevator.floor)?;
            for &floor in &elevator.buttons_pressed {
                self.check_floor("pressed button", floor)?;
            }
        }

        for request in &self.requests {
            self.check_floor("hall request", request.floor)?;
        }
        Ok(())
    }

    fn check_floor(&self, what: &'static str, floor: u32) -> CoreResult<()> {
        if floor == 0 || floor > self.num_floors {
            return Err(CoreError::FloorOutOfRange { what, floor, num_floors: self.num_floors });
        }
        Ok(())
    }
}
