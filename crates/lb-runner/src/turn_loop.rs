//! The `TurnLoop` struct and its run loop.

use std::collections::HashSet;

use tracing::info;

use lb_client::{RetryPolicy, Session, SessionParams, Transport};
use lb_core::{Command, SimulationState};
use lb_policy::DispatchPolicy;

use crate::{CancelFlag, EndReason, RunError, RunOutcome, RunResult, TurnObserver};

/// One bot run against one session.
///
/// Exactly one [`SimulationState`] is held at a time; each submission's reply
/// replaces it.  Turns are strictly sequential: the next batch is never
/// decided before the previous reply has arrived.
///
/// Create via [`TurnLoopBuilder`][crate::TurnLoopBuilder].
pub struct TurnLoop<T: Transport, P: DispatchPolicy> {
    pub(crate) transport: T,
    pub(crate) params:    SessionParams,
    pub(crate) policy:    P,
    pub(crate) retry:     RetryPolicy,
    pub(crate) cancel:    CancelFlag,
}

impl<T: Transport, P: DispatchPolicy> TurnLoop<T, P> {
    /// A clone of the flag this loop checks between turns.
    pub fn cancel_flag(&self) -> CancelFlag {
        self.cancel.clone()
    }

    /// Open a session and drive it until the service reports it finished or
    /// the cancel flag is observed at a turn boundary.
    ///
    /// Any client error aborts the run; there is no partial outcome.
    pub fn run<O: TurnObserver>(mut self, observer: &mut O) -> RunResult<RunOutcome> {
        let (mut session, mut state) = Session::open(self.transport, &self.params, self.retry)?;
        observer.on_session_open(&state);

        let policy = self.policy.name();
        let mut turn: u64 = 0;
        let mut end = EndReason::Finished;

        while state.running {
            if self.cancel.is_cancelled() {
                info!(turn, "cancel requested, stopping at turn boundary");
                end = EndReason::Cancelled;
                break;
            }

            turn += 1;
            observer.on_turn_start(turn, &state);

            let commands = self.policy.decide(&state);
            check_batch(&commands, &state)
                .map_err(|detail| RunError::CommandMismatch { policy, turn, detail })?;

            state = session.submit(&commands)?;
            observer.on_turn_end(turn, &state);
        }

        let outcome = match end {
            EndReason::Finished => RunOutcome {
                turns:      turn,
                score:      state.score,
                replay_url: state.replay_url.take(),
                end,
            },
            EndReason::Cancelled => RunOutcome {
                turns:      turn,
                score:      None,
                replay_url: None,
                end,
            },
        };
        observer.on_finish(&outcome);
        Ok(outcome)
    }
}

// ── Batch check ───────────────────────────────────────────────────────────────

/// The batch must name every elevator in `state` exactly once and nothing
/// else.  Order is irrelevant.
fn check_batch(commands: &[Command], state: &SimulationState) -> Result<(), String> {
    if commands.len() != state.elevators.len() {
        return Err(format!(
            "{} command(s) for {} elevator(s)",
            commands.len(),
            state.elevators.len()
        ));
    }

    let known: HashSet<&str> = state.elevators.iter().map(|e| e.id.as_str()).collect();
    let mut seen: HashSet<&str> = HashSet::with_capacity(commands.len());
    for c in commands {
        let id = c.elevator_id.as_str();
        if !known.contains(id) {
            return Err(format!("command for unknown elevator {id}"));
        }
        if !seen.insert(id) {
            return Err(format!("two commands for elevator {id}"));
        }
    }
    Ok(())
}
