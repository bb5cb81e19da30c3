//! `lb-core` — foundational types for the liftbot elevator dispatcher.
//!
//! This crate is a dependency of every other `lb-*` crate.  It intentionally
//! has no `lb-*` dependencies and no wire format: the JSON codec lives in
//! `lb-client`, which converts replies into the types defined here.
//!
//! # What lives here
//!
//! | Module        | Contents                                                  |
//! |---------------|-----------------------------------------------------------|
//! | [`ids`]       | `ElevatorId`                                              |
//! | [`direction`] | `Direction` (`Up`/`Down`), `Action` (`Move`/`Stop`)       |
//! | [`state`]     | `Elevator`, `HallRequest`, `SimulationState`              |
//! | [`command`]   | `Command`                                                 |
//! | [`building`]  | `Building` catalog of named simulation buildings          |
//! | [`rng`]       | `SimRng`                                                  |
//! | [`error`]     | `CoreError`, `CoreResult`                                 |

pub mod building;
pub mod command;
pub mod direction;
pub mod error;
pub mod ids;
pub mod rng;
pub mod state;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use building::{Building, BuildingShape};
pub use command::Command;
pub use direction::{Action, Direction};
pub use error::{CoreError, CoreResult};
pub use ids::ElevatorId;
pub use rng::SimRng;
pub use state::{Elevator, HallRequest, SimulationState};
