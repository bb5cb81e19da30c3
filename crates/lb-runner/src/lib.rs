//! `lb-runner` — turn loop orchestrator for liftbot.
//!
//! # Turn loop
//!
//! ```text
//! open session → state
//! while state.running:
//!   ① Cancel   — stop here if the CancelFlag is set (never mid-request).
//!   ② Decide   — policy.decide(&state) → one Command per elevator.
//!   ③ Check    — batch must cover exactly the state's elevator IDs.
//!   ④ Submit   — session.submit(&commands) → next state (replaces the old one).
//! report score + replay URL from the last state
//! ```
//!
//! A session whose open reply already has `running == false` performs zero
//! submissions and reports straight from the open reply.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use lb_client::{ClientConfig, HttpTransport};
//! use lb_policy::UpDownPolicy;
//! use lb_runner::{LogObserver, TurnLoopBuilder};
//!
//! let config = ClientConfig::default();
//! let transport = HttpTransport::new(&config)?;
//! let outcome = TurnLoopBuilder::new(transport, params, UpDownPolicy::new())
//!     .retry(config.retry)
//!     .build()
//!     .run(&mut LogObserver)?;
//! ```

pub mod builder;
pub mod cancel;
pub mod error;
pub mod observer;
pub mod outcome;
pub mod turn_loop;

#[cfg(test)]
mod tests;

pub use builder::TurnLoopBuilder;
pub use cancel::CancelFlag;
pub use error::{RunError, RunResult};
pub use observer::{LogObserver, NoopObserver, TurnLimit, TurnObserver};
pub use outcome::{EndReason, RunOutcome};
pub use turn_loop::TurnLoop;
