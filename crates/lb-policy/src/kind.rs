//! Registry of the built-in policies, for selection by name.

use std::fmt;
use std::str::FromStr;

use lb_core::SimRng;

use crate::{DispatchPolicy, PolicyError, RandomPolicy, UpDownPolicy};

const NAMES: &str = "random, updown";

/// One of the built-in dispatch policies.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub enum PolicyKind {
    #[default]
    Random,
    UpDown,
}

impl PolicyKind {
    pub const ALL: [PolicyKind; 2] = [PolicyKind::Random, PolicyKind::UpDown];

    pub fn as_str(self) -> &'static str {
        match self {
            PolicyKind::Random => "random",
            PolicyKind::UpDown => "updown",
        }
    }

    /// Instantiate the policy.  `seed` only matters for `Random`; `None`
    /// seeds from the system clock.
    pub fn build(self, seed: Option<u64>) -> Box<dyn DispatchPolicy> {
        match self {
            PolicyKind::Random => match seed {
                Some(seed) => Box::new(RandomPolicy::new(SimRng::new(seed))),
                None       => Box::new(RandomPolicy::from_time()),
            },
            PolicyKind::UpDown => Box::new(UpDownPolicy::new()),
        }
    }
}

impl FromStr for PolicyKind {
    type Err = PolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        PolicyKind::ALL
            .into_iter()
            .find(|k| k.as_str() == name)
            .ok_or_else(|| PolicyError::Unknown(s.to_owned(), NAMES))
    }
}

impl fmt::Display for PolicyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
