//! `lb-policy` — per-turn dispatch decisions.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                     |
//! |------------|--------------------------------------------------------------|
//! | [`policy`] | `DispatchPolicy` trait                                       |
//! | [`random`] | `RandomPolicy` — uniform direction and action, no memory     |
//! | [`updown`] | `UpDownPolicy` — sweep up and down, stop for matching calls  |
//! | [`kind`]   | `PolicyKind` registry used by the process surface            |
//! | [`error`]  | `PolicyError`, `PolicyResult<T>`                             |
//!
//! # Design notes
//!
//! A policy owns whatever memory it needs (the up/down policy keeps one
//! direction per elevator ID) and is the only thing that touches it.  The
//! turn loop hands it a read-only [`SimulationState`][lb_core::SimulationState]
//! and gets back one [`Command`][lb_core::Command] per elevator.

pub mod error;
pub mod kind;
pub mod policy;
pub mod random;
pub mod updown;


pub use error::{PolicyError, PolicyResult};
pub use kind::PolicyKind;
pub use policy::DispatchPolicy;
pub use random::RandomPolicy;
pub use updown::UpDownPolicy;
