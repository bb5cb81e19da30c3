//! A live session with the simulation service.

use std::thread;

use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info, warn};

use lb_core::{Command, SimulationState};

use crate::wire::{OpenRequest, StateReply, TurnRequest};
use crate::{Call, ClientError, ClientResult, RetryPolicy, SessionParams, Transport};

/// One open simulation session.
///
/// Holds the token and the floor count captured from the open reply; both
/// are immutable for the session's lifetime.  Every reply is decoded and
/// validated exactly once here, so callers only ever see a consistent
/// [`SimulationState`].
pub struct Session<T: Transport> {
    transport:  T,
    retry:      RetryPolicy,
    token:      String,
    num_floors: u32,
    turn:       u64,
}

impl<T: Transport> Session<T> {
    /// Open a session and return it together with the initial state.
    ///
    /// The initial state may already have `running == false`.
    pub fn open(
        mut transport: T,
        params:        &SessionParams,
        retry:         RetryPolicy,
    ) -> ClientResult<(Self, SimulationState)> {
        let call = Call::OpenSession;
        let body = encode(call, &OpenRequest::from(params))?;
        let reply = exchange(&mut transport, &retry, call, &body)?;

        let token = match reply.token.as_deref() {
            Some(t) if !t.is_empty() => t.to_owned(),
            _ => return Err(protocol(call, "missing session token")),
        };
        let num_floors = reply
            .num_floors
            .ok_or_else(|| protocol(call, "missing num_floors"))?;

        let state = finish(call, reply, &token, num_floors)?;
        info!(
            building = params.building.as_str(),
            num_floors,
            elevators = state.elevators.len(),
            running = state.running,
            "session opened"
        );

        let session = Self { transport, retry, token, num_floors, turn: 0 };
        Ok((session, state))
    }

    /// Submit one turn of commands and return the next state.
    ///
    /// Service-reported errors are logged and kept on the returned state;
    /// they do not fail the call.
    pub fn submit(&mut self, commands: &[Command]) -> ClientResult<SimulationState> {
        self.turn += 1;
        let call = Call::SubmitTurn { turn: self.turn };
        info!(turn = self.turn, commands = commands.len(), "turn");

        let body = encode(call, &TurnRequest::new(&self.token, commands))?;
        let reply = exchange(&mut self.transport, &self.retry, call, &body)?;

        if let Some(token) = reply.token.as_deref() {
            if !token.is_empty() && token != self.token {
                return Err(protocol(call, format!("token changed mid-session to {token:?}")));
            }
        }
        if let Some(n) = reply.num_floors {
            if n != self.num_floors {
                return Err(protocol(
                    call,
                    format!("num_floors changed from {} to {n}", self.num_floors),
                ));
            }
        }

        finish(call, reply, &self.token, self.num_floors)
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn num_floors(&self) -> u32 {
        self.num_floors
    }

    /// Number of submissions attempted so far.
    pub fn turns_submitted(&self) -> u64 {
        self.turn
    }

    pub fn into_transport(self) -> T {
        self.transport
    }
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn protocol(call: Call, detail: impl Into<String>) -> ClientError {
    ClientError::Protocol { call, detail: detail.into() }
}

fn encode<S: Serialize>(call: Call, request: &S) -> ClientResult<Value> {
    serde_json::to_value(request).map_err(|e| protocol(call, format!("encoding request: {e}")))
}

/// Post `body`, retrying transport failures per `retry`, and decode the reply.
fn exchange<T: Transport>(
    transport: &mut T,
    retry:     &RetryPolicy,
    call:      Call,
    body:      &Value,
) -> ClientResult<StateReply> {
    let mut attempt: u32 = 0;
    let text = loop {
        match transport.post(body) {
            Ok(text) => break text,
            Err(e) if attempt < retry.max_retries => {
                let delay = retry.backoff(attempt);
                attempt += 1;
                debug!(%call, attempt, ?delay, error = %e, "transport failure, retrying");
                if !delay.is_zero() {
                    thread::sleep(delay);
                }
            }
            Err(source) => {
                return Err(ClientError::Transport { call, attempts: attempt + 1, source });
            }
        }
    };

    serde_json::from_str::<StateReply>(&text).map_err(|e| protocol(call, e.to_string()))
}

/// Convert a decoded reply, validate it, and log service-reported errors.
fn finish(
    call:       Call,
    reply:      StateReply,
    token:      &str,
    num_floors: u32,
) -> ClientResult<SimulationState> {
    let state = reply.into_state(token, num_floors);
    state.validate().map_err(|e| protocol(call, e.to_string()))?;
    for error in &state.errors {
        warn!(%call, "service reported: {error}");
    }
    Ok(state)
}
