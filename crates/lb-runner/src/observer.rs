//! Turn observer trait for progress reporting and run control.

use tracing::{debug, info};

use lb_core::SimulationState;

use crate::{CancelFlag, RunOutcome};

/// Callbacks invoked by [`TurnLoop::run`][crate::TurnLoop::run] at key points
/// in the loop.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.  Observers see states read-only; they
/// cannot alter what gets submitted.
///
/// # Example — progress printer
///
/// ```rust,ignore
/// struct Progress { every: u64 }
///
/// impl TurnObserver for Progress {
///     fn on_turn_end(&mut self, turn: u64, state: &SimulationState) {
///         if turn % self.every == 0 {
///             println!("turn {turn}: {} hall calls", state.requests.len());
///         }
///     }
/// }
/// ```
pub trait TurnObserver {
    /// Called once with the open reply, before the first turn.
    fn on_session_open(&mut self, _state: &SimulationState) {}

    /// Called before the policy decides turn `turn` (1-based).
    fn on_turn_start(&mut self, _turn: u64, _state: &SimulationState) {}

    /// Called with the state the service returned for turn `turn`.
    fn on_turn_end(&mut self, _turn: u64, _state: &SimulationState) {}

    /// Called once after the loop stops, successfully or by cancellation.
    fn on_finish(&mut self, _outcome: &RunOutcome) {}
}

impl<O: TurnObserver + ?Sized> TurnObserver for &mut O {
    fn on_session_open(&mut self, state: &SimulationState) {
        (**self).on_session_open(state)
    }
    fn on_turn_start(&mut self, turn: u64, state: &SimulationState) {
        (**self).on_turn_start(turn, state)
    }
    fn on_turn_end(&mut self, turn: u64, state: &SimulationState) {
        (**self).on_turn_end(turn, state)
    }
    fn on_finish(&mut self, outcome: &RunOutcome) {
        (**self).on_finish(outcome)
    }
}

/// Fan out to two observers, `A` first.
impl<A: TurnObserver, B: TurnObserver> TurnObserver for (A, B) {
    fn on_session_open(&mut self, state: &SimulationState) {
        self.0.on_session_open(state);
        self.1.on_session_open(state);
    }
    fn on_turn_start(&mut self, turn: u64, state: &SimulationState) {
        self.0.on_turn_start(turn, state);
        self.1.on_turn_start(turn, state);
    }
    fn on_turn_end(&mut self, turn: u64, state: &SimulationState) {
        self.0.on_turn_end(turn, state);
        self.1.on_turn_end(turn, state);
    }
    fn on_finish(&mut self, outcome: &RunOutcome) {
        self.0.on_finish(outcome);
        self.1.on_finish(outcome);
    }
}

/// A [`TurnObserver`] that does nothing.
pub struct NoopObserver;

impl TurnObserver for NoopObserver {}

// ── LogObserver ───────────────────────────────────────────────────────────────

/// Emits `tracing` events for each stage of the run.
///
/// Per-turn detail goes out at `debug`; open and finish at `info`.
pub struct LogObserver;

impl TurnObserver for LogObserver {
    fn on_session_open(&mut self, state: &SimulationState) {
        info!(
            num_floors = state.num_floors,
            elevators = state.elevators.len(),
            num_turns = ?state.num_turns,
            "loop starting"
        );
    }

    fn on_turn_end(&mut self, turn: u64, state: &SimulationState) {
        debug!(
            turn,
            cur_turn = ?state.cur_turn,
            requests = state.requests.len(),
            running = state.running,
            "turn applied"
        );
        for e in &state.elevators {
            debug!(turn, elevator = %e.id, floor = e.floor, buttons = ?e.buttons_pressed);
        }
    }

    fn on_finish(&mut self, outcome: &RunOutcome) {
        info!(
            turns = outcome.turns,
            score = ?outcome.score,
            replay_url = outcome.replay_url.as_deref().unwrap_or("-"),
            "run {}",
            if outcome.finished() { "finished" } else { "cancelled" }
        );
    }
}

// ── TurnLimit ─────────────────────────────────────────────────────────────────

/// Trips a [`CancelFlag`] once `max_turns` submissions have completed.
///
/// The loop notices at the next turn boundary, so exactly `max_turns` turns
/// are submitted (fewer if the service finishes first).
pub struct TurnLimit {
    max_turns: u64,
    cancel:    CancelFlag,
}

impl TurnLimit {
    pub fn new(max_turns: u64, cancel: CancelFlag) -> Self {
        Self { max_turns, cancel }
    }
}

impl TurnObserver for TurnLimit {
    fn on_session_open(&mut self, _state: &SimulationState) {
        if self.max_turns == 0 {
            self.cancel.cancel();
        }
    }

    fn on_turn_end(&mut self, turn: u64, _state: &SimulationState) {
        if turn >= self.max_turns {
            self.cancel.cancel();
        }
    }
}
