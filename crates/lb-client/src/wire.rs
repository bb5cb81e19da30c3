//! JSON wire format.
//!
//! Booleans stand for directions (`true` = up) and actions (`true` = move)
//! only in this module.  Everything handed to the rest of the workspace is an
//! `lb-core` type.

use serde::{Deserialize, Serialize};

use lb_core::{Command, Direction, Elevator, HallRequest, SimulationState};

use crate::SessionParams;

// ── Requests ──────────────────────────────────────────────────────────────────

#[derive(Serialize, Debug)]
pub struct OpenRequest<'a> {
    pub bot:           &'a str,
    pub building_name: &'a str,
    pub email:         &'a str,
    pub event:         &'a str,
    pub sandbox:       bool,
}

impl<'a> From<&'a SessionParams> for OpenRequest<'a> {
    fn from(p: &'a SessionParams) -> Self {
        Self {
            bot:           &p.bot,
            building_name: p.building.as_str(),
            email:         &p.email,
            event:         &p.event,
            sandbox:       p.sandbox,
        }
    }
}

#[derive(Serialize, Debug)]
pub struct WireCommand<'a> {
    pub elevator_id: &'a str,
    pub direction:   bool,
    pub action:      bool,
}

impl<'a> From<&'a Command> for WireCommand<'a> {
    fn from(c: &'a Command) -> Self {
        Self {
            elevator_id: c.elevator_id.as_str(),
            direction:   c.direction.to_wire(),
            action:      c.action.to_wire(),
        }
    }
}

#[derive(Serialize, Debug)]
pub struct TurnRequest<'a> {
    pub token:    &'a str,
    pub commands: Vec<WireCommand<'a>>,
}

impl<'a> TurnRequest<'a> {
    pub fn new(token: &'a str, commands: &'a [Command]) -> Self {
        Self { token, commands: commands.iter().map(WireCommand::from).collect() }
    }
}

// ── Replies ───────────────────────────────────────────────────────────────────

#[derive(Deserialize, Debug)]
pub struct WireElevator {
    pub id:              String,
    pub floor:           u32,
    pub buttons_pressed: Vec<u32>,
}

#[derive(Deserialize, Debug)]
pub struct WireRequest {
    pub floor:     u32,
    pub direction: bool,
}

/// Shape shared by the open and turn replies.
///
/// `token` and `num_floors` are required on open and optional afterwards;
/// the session enforces that distinction.
#[derive(Deserialize, Debug)]
pub struct StateReply {
    pub token:      Option<String>,
    pub num_floors: Option<u32>,
    pub running:    bool,
    pub elevators:  Vec<WireElevator>,
    pub requests:   Vec<WireRequest>,
    pub errors:     Vec<String>,
    pub score:      Option<f64>,
    pub replay_url: Option<String>,
    pub cur_turn:   Option<u64>,
    pub num_turns:  Option<u64>,
}

impl StateReply {
    /// Convert into the typed state, stamping the session's token and floor
    /// count.  Validation happens in the session.
    pub fn into_state(self, token: &str, num_floors: u32) -> SimulationState {
        SimulationState {
            token: token.to_owned(),
            num_floors,
            running: self.running,
            elevators: self
                .elevators
                .into_iter()
                .map(|e| Elevator::new(e.id, e.floor).with_buttons(e.buttons_pressed))
                .collect(),
            requests: self
                .requests
                .into_iter()
                .map(|r| HallRequest::new(r.floor, Direction::from_wire(r.direction)))
                .collect(),
            score:      self.score,
            replay_url: self.replay_url,
            errors:     self.errors,
            cur_turn:   self.cur_turn,
            num_turns:  self.num_turns,
        }
    }
}
