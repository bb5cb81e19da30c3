//! Elevator identifiers.
//!
//! The service hands out opaque string IDs (`"elevator-0"`, `"elevator-1"`, …)
//! that stay stable for the whole session.  Wrapping them keeps them from
//! being confused with tokens, building names, or error strings.

use std::borrow::Borrow;
use std::fmt;

/// Opaque, service-assigned elevator identifier.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub struct ElevatorId(pub String);

impl ElevatorId {
    pub fn new(id: impl Into<String>) -> Self {
        ElevatorId(id.into())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ElevatorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ElevatorId {
    fn from(s: &str) -> Self {
        ElevatorId(s.to_owned())
    }
}

impl From<String> for ElevatorId {
    fn from(s: String) -> Self {
        ElevatorId(s)
    }
}

impl Borrow<str> for ElevatorId {
    fn borrow(&self) -> &str {
        &self.0
    }
}
