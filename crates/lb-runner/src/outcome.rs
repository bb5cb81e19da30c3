//! What a finished run reports back to the operator.

use std::fmt;

/// Why the loop stopped.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum EndReason {
    /// The service reported `running == false`.
    Finished,
    /// The [`CancelFlag`][crate::CancelFlag] was set at a turn boundary.
    Cancelled,
}

#[derive(Clone, PartialEq, Debug)]
pub struct RunOutcome {
    /// Number of submissions made.
    pub turns: u64,

    /// Final score from the last held state.  `None` if the run was
    /// cancelled or the service did not send one.
    pub score: Option<f64>,

    pub replay_url: Option<String>,

    pub end: EndReason,
}

impl RunOutcome {
    #[inline]
    pub fn finished(&self) -> bool {
        self.end == EndReason::Finished
    }
}

impl fmt::Display for RunOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let end = match self.end {
            EndReason::Finished  => "finished",
            EndReason::Cancelled => "cancelled",
        };
        write!(f, "{end} after {} turn(s)", self.turns)?;
        if let Some(score) = self.score {
            write!(f, ", score {score}")?;
        }
        Ok(())
    }
}
