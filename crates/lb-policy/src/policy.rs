//! The `DispatchPolicy` trait, the extension point for scheduling logic.

use lb_core::{Command, SimulationState};

/// Pluggable per-turn dispatch logic.
///
/// Implementations receive the full state for the current turn and must
/// return **exactly one** [`Command`] per elevator in `state.elevators`, in
/// the same order.  The turn loop checks this before submitting and refuses
/// to send a mismatched batch.
///
/// `decide` takes `&mut self` because policies may keep private memory across
/// turns.  That memory belongs to the instance: two policies never share it,
/// and the loop never reads it.
///
/// # Example
///
/// ```rust,ignore
/// struct AlwaysStop;
///
/// impl DispatchPolicy for AlwaysStop {
///     fn name(&self) -> &'static str { "always-stop" }
///
///     fn decide(&mut self, state: &SimulationState) -> Vec<Command> {
///         state
///             .elevators
///             .iter()
///             .map(|e| Command::new(e.id.clone(), Direction::Up, Action::Stop))
///             .collect()
///     }
/// }
/// ```
pub trait DispatchPolicy: Send {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Produce this turn's commands.
    fn decide(&mut self, state: &SimulationState) -> Vec<Command>;
}

impl<P: DispatchPolicy + ?Sized> DispatchPolicy for Box<P> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn decide(&mut self, state: &SimulationState) -> Vec<Command> {
        (**self).decide(state)
    }
}

impl<P: DispatchPolicy + ?Sized> DispatchPolicy for &mut P {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn decide(&mut self, state: &SimulationState) -> Vec<Command> {
        (**self).decide(state)
    }
}
