//! Uniform random baseline.

use lb_core::{Action, Command, Direction, SimRng, SimulationState};

use crate::DispatchPolicy;

/// Picks direction and action uniformly at random for every elevator.
///
/// No memory, no look at floors or requests.  Useful only to exercise the
/// loop and client plumbing.
pub struct RandomPolicy {
    rng: SimRng,
}

impl RandomPolicy {
    pub fn new(rng: SimRng) -> Self {
        Self { rng }
    }

    /// Seeded from the system clock at construction.
    pub fn from_time() -> Self {
        Self::new(SimRng::from_time())
    }
}

impl DispatchPolicy for RandomPolicy {
    fn name(&self) -> &'static str {
        "random"
    }

    fn decide(&mut self, state: &SimulationState) -> Vec<Command> {
        state
            .elevators
            .iter()
            .map(|elevator| {
                let direction = Direction::from_wire(self.rng.random());
                let action = Action::from_wire(self.rng.random());
                Command::new(elevator.id.clone(), direction, action)
            })
            .collect()
    }
}
