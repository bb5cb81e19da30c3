//! Unit tests for lb-runner.

use std::collections::VecDeque;

use serde_json::{Value, json};

use lb_client::{SessionParams, Transport, TransportError};
use lb_core::{Building, SimulationState};

use crate::{RunOutcome, TurnObserver};

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Replays canned replies in order and records every request body.
struct ScriptedTransport {
    replies: VecDeque<Result<Value, TransportError>>,
    sent:    Vec<Value>,
}

impl ScriptedTransport {
    fn new(replies: Vec<Value>) -> Self {
        Self { replies: replies.into_iter().map(Ok).collect(), sent: Vec::new() }
    }

    /// Turn submissions only; the open request is dropped.
    fn turns(&self) -> &[Value] {
        self.sent.get(1..).unwrap_or(&[])
    }
}

impl Transport for ScriptedTransport {
    fn post(&mut self, body: &Value) -> Result<String, TransportError> {
        self.sent.push(body.clone());
        match self.replies.pop_front() {
            Some(r) => r.map(|v| v.to_string()),
            None => Err(TransportError::Connection("script exhausted".into())),
        }
    }
}

/// Counts every callback and remembers what it was handed.
#[derive(Default)]
struct Recorder {
    opened:   u32,
    started:  Vec<u64>,
    ended:    Vec<u64>,
    finished: Option<RunOutcome>,
}

impl TurnObserver for Recorder {
    fn on_session_open(&mut self, _state: &SimulationState) {
        self.opened += 1;
    }
    fn on_turn_start(&mut self, turn: u64, _state: &SimulationState) {
        self.started.push(turn);
    }
    fn on_turn_end(&mut self, turn: u64, _state: &SimulationState) {
        self.ended.push(turn);
    }
    fn on_finish(&mut self, outcome: &RunOutcome) {
        self.finished = Some(outcome.clone());
    }
}

fn params() -> SessionParams {
    SessionParams {
        event:    "secondspace2025".into(),
        building: Building::TinyRandom,
        bot:      "liftbot-test".into(),
        email:    "bob@mail.com".into(),
        sandbox:  true,
    }
}

/// A 10-floor building with one elevator at `floor` and no buttons pressed.
fn reply(floor: u32, running: bool) -> Value {
    let mut v = json!({
        "running": running,
        "elevators": [{ "id": "elevator-0", "floor": floor, "buttons_pressed": [] }],
        "requests": [],
        "errors": [],
    });
    if !running {
        v["score"] = json!(42.5);
        v["replay_url"] = json!("https://dianti.secondspace.dev/replay/t1");
    }
    v
}

fn open(floor: u32, running: bool) -> Value {
    let mut v = reply(floor, running);
    v["token"] = json!("t1");
    v["num_floors"] = json!(10);
    v
}

fn command(sent: &Value) -> (bool, bool) {
    let c = &sent["commands"][0];
    (c["direction"].as_bool().unwrap(), c["action"].as_bool().unwrap())
}

// ── Loop ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod loop_tests {
    use lb_client::RetryPolicy;
    use lb_policy::UpDownPolicy;

    use super::*;
    use crate::{EndReason, NoopObserver, TurnLoopBuilder};

    #[test]
    fn finished_on_open_submits_nothing() {
        let mut transport = ScriptedTransport::new(vec![open(1, false)]);
        let outcome = TurnLoopBuilder::new(&mut transport, params(), UpDownPolicy::new())
            .retry(RetryPolicy::none())
            .build()
            .run(&mut NoopObserver)
            .unwrap();

        assert_eq!(outcome.turns, 0);
        assert_eq!(outcome.end, EndReason::Finished);
        assert_eq!(outcome.score, Some(42.5));
        assert_eq!(transport.sent.len(), 1);
    }

    #[test]
    fn runs_until_service_stops() {
        let mut transport = ScriptedTransport::new(vec![
            open(1, true),
            reply(2, true),
            reply(3, true),
            reply(4, false),
        ]);
        let outcome = TurnLoopBuilder::new(&mut transport, params(), UpDownPolicy::new())
            .retry(RetryPolicy::none())
            .build()
            .run(&mut NoopObserver)
            .unwrap();

        assert_eq!(outcome.turns, 3);
        assert!(outcome.finished());
        assert_eq!(outcome.score, Some(42.5));
        assert_eq!(
            outcome.replay_url.as_deref(),
            Some("https://dianti.secondspace.dev/replay/t1")
        );
        assert_eq!(transport.turns().len(), 3);
        for body in transport.turns() {
            assert_eq!(body["token"], "t1");
        }
    }

    #[test]
    fn each_turn_decides_on_latest_state() {
        // Elevator sits on the top floor after turn 1, so UpDown must reverse.
        let mut transport = ScriptedTransport::new(vec![
            open(9, true),
            reply(10, true),
            reply(9, false),
        ]);
        TurnLoopBuilder::new(&mut transport, params(), UpDownPolicy::new())
            .retry(RetryPolicy::none())
            .build()
            .run(&mut NoopObserver)
            .unwrap();

        let turns = transport.turns();
        assert_eq!(command(&turns[0]), (true, true));
        assert_eq!(command(&turns[1]), (false, true));
    }

    #[test]
    fn service_errors_do_not_stop_the_loop() {
        let mut noisy = reply(2, true);
        noisy["errors"] = json!(["Unknown elevator ID: elevator-9"]);
        let mut transport = ScriptedTransport::new(vec![open(1, true), noisy, reply(3, false)]);
        let outcome = TurnLoopBuilder::new(&mut transport, params(), UpDownPolicy::new())
            .retry(RetryPolicy::none())
            .build()
            .run(&mut NoopObserver)
            .unwrap();
        assert_eq!(outcome.turns, 2);
    }

    #[test]
    fn transport_failure_aborts_run() {
        let mut transport = ScriptedTransport::new(vec![open(1, true)]);
        transport.replies.push_back(Err(TransportError::Timeout("deadline".into())));
        let err = TurnLoopBuilder::new(&mut transport, params(), UpDownPolicy::new())
            .retry(RetryPolicy::none())
            .build()
            .run(&mut NoopObserver)
            .unwrap_err();
        assert!(err.is_client());
    }

    #[test]
    fn policy_memory_survives_across_turns() {
        let mut policy = UpDownPolicy::new();
        let mut transport = ScriptedTransport::new(vec![
            open(9, true),
            reply(10, true),
            reply(9, false),
        ]);
        TurnLoopBuilder::new(&mut transport, params(), &mut policy)
            .retry(RetryPolicy::none())
            .build()
            .run(&mut NoopObserver)
            .unwrap();
        assert_eq!(policy.remembered("elevator-0"), Some(lb_core::Direction::Down));
    }
}

// ── Batch check ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod mismatch_tests {
    use lb_client::RetryPolicy;
    use lb_core::{Action, Command, Direction};
    use lb_policy::DispatchPolicy;

    use super::*;
    use crate::{NoopObserver, RunError, TurnLoopBuilder};

    /// Returns a fixed batch regardless of state.
    struct Fixed(Vec<Command>);

    impl DispatchPolicy for Fixed {
        fn name(&self) -> &'static str {
            "fixed"
        }
        fn decide(&mut self, _state: &SimulationState) -> Vec<Command> {
            self.0.clone()
        }
    }

    fn up(id: &str) -> Command {
        Command::new(id.into(), Direction::Up, Action::Move)
    }

    fn run_fixed(commands: Vec<Command>) -> (RunError, ScriptedTransport) {
        let mut transport = ScriptedTransport::new(vec![open(1, true), reply(2, false)]);
        let err = TurnLoopBuilder::new(&mut transport, params(), Fixed(commands))
            .retry(RetryPolicy::none())
            .build()
            .run(&mut NoopObserver)
            .unwrap_err();
        (err, transport)
    }

    #[test]
    fn empty_batch_is_rejected_before_submit() {
        let (err, transport) = run_fixed(vec![]);
        assert!(matches!(err, RunError::CommandMismatch { policy: "fixed", turn: 1, .. }));
        assert!(transport.turns().is_empty());
    }

    #[test]
    fn unknown_elevator_is_rejected() {
        let (err, transport) = run_fixed(vec![up("elevator-7")]);
        assert!(err.to_string().contains("unknown elevator elevator-7"), "{err}");
        assert!(transport.turns().is_empty());
    }

    #[test]
    fn duplicate_elevator_is_rejected() {
        let mut transport = ScriptedTransport::new(vec![]);
        let mut two = open(1, true);
        two["elevators"] = json!([
            { "id": "elevator-0", "floor": 1, "buttons_pressed": [] },
            { "id": "elevator-1", "floor": 1, "buttons_pressed": [] }
        ]);
        transport.replies.push_back(Ok(two));
        let err = TurnLoopBuilder::new(
            &mut transport,
            params(),
            Fixed(vec![up("elevator-0"), up("elevator-0")]),
        )
        .retry(RetryPolicy::none())
        .build()
        .run(&mut NoopObserver)
        .unwrap_err();
        assert!(err.to_string().contains("two commands for elevator elevator-0"), "{err}");
        assert!(transport.turns().is_empty());
    }
}

// ── Observers and cancellation ────────────────────────────────────────────────

#[cfg(test)]
mod observer_tests {
    use lb_client::RetryPolicy;
    use lb_core::SimRng;
    use lb_policy::RandomPolicy;

    use super::*;
    use crate::{CancelFlag, EndReason, LogObserver, TurnLimit, TurnLoopBuilder};

    fn endless(turns: usize) -> ScriptedTransport {
        let mut replies = vec![open(5, true)];
        replies.extend((0..turns).map(|_| reply(5, true)));
        ScriptedTransport::new(replies)
    }

    #[test]
    fn callbacks_fire_in_order() {
        let mut transport = ScriptedTransport::new(vec![open(1, true), reply(2, true), reply(3, false)]);
        let mut recorder = Recorder::default();
        TurnLoopBuilder::new(&mut transport, params(), RandomPolicy::new(SimRng::new(7)))
            .retry(RetryPolicy::none())
            .build()
            .run(&mut recorder)
            .unwrap();

        assert_eq!(recorder.opened, 1);
        assert_eq!(recorder.started, [1, 2]);
        assert_eq!(recorder.ended, [1, 2]);
        assert_eq!(recorder.finished.unwrap().turns, 2);
    }

    #[test]
    fn pre_set_flag_stops_before_first_turn() {
        let cancel = CancelFlag::new();
        cancel.cancel();
        let mut transport = endless(3);
        let outcome = TurnLoopBuilder::new(&mut transport, params(), RandomPolicy::new(SimRng::new(1)))
            .retry(RetryPolicy::none())
            .cancel(cancel)
            .build()
            .run(&mut LogObserver)
            .unwrap();

        assert_eq!(outcome.end, EndReason::Cancelled);
        assert_eq!(outcome.turns, 0);
        assert!(outcome.score.is_none());
        assert!(transport.turns().is_empty());
    }

    #[test]
    fn turn_limit_cancels_at_boundary() {
        let cancel = CancelFlag::new();
        let mut transport = endless(10);
        let mut observers = (Recorder::default(), TurnLimit::new(3, cancel.clone()));
        let outcome = TurnLoopBuilder::new(&mut transport, params(), RandomPolicy::new(SimRng::new(1)))
            .retry(RetryPolicy::none())
            .cancel(cancel.clone())
            .build()
            .run(&mut observers)
            .unwrap();

        assert!(cancel.is_cancelled());
        assert_eq!(outcome.end, EndReason::Cancelled);
        assert_eq!(outcome.turns, 3);
        assert_eq!(transport.turns().len(), 3);
        assert_eq!(observers.0.ended, [1, 2, 3]);
        assert!(observers.0.finished.is_some());
    }

    #[test]
    fn zero_turn_limit_submits_nothing() {
        let cancel = CancelFlag::new();
        let mut transport = endless(1);
        let outcome = TurnLoopBuilder::new(&mut transport, params(), RandomPolicy::new(SimRng::new(1)))
            .cancel(cancel.clone())
            .build()
            .run(&mut TurnLimit::new(0, cancel))
            .unwrap();
        assert_eq!(outcome.turns, 0);
        assert!(transport.turns().is_empty());
    }

    #[test]
    fn outcome_display() {
        let outcome = RunOutcome {
            turns:      12,
            score:      Some(3.5),
            replay_url: None,
            end:        EndReason::Finished,
        };
        assert_eq!(outcome.to_string(), "finished after 12 turn(s), score 3.5");
    }
}
