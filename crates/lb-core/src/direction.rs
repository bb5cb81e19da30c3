//! Direction and action enums.
//!
//! On the wire both are plain booleans (`true` = up / move,
//! `false` = down / stop).  Inside the workspace they are always these enums;
//! the boolean form only appears in `lb-client`'s codec, via
//! [`Direction::to_wire`] / [`Direction::from_wire`] and the `Action`
//! equivalents.

use std::fmt;

/// Travel direction of an elevator or a hall call.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
pub enum Direction {
    /// Default for an elevator the dispatcher has not seen yet.
    #[default]
    Up,
    Down,
}

impl Direction {
    #[inline]
    pub fn opposite(self) -> Direction {
        match self {
            Direction::Up   => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }

    #[inline]
    pub fn to_wire(self) -> bool {
        matches!(self, Direction::Up)
    }

    #[inline]
    pub fn from_wire(up: bool) -> Direction {
        if up { Direction::Up } else { Direction::Down }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Up   => "up",
            Direction::Down => "down",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What an elevator should do this turn.
///
/// Passengers only board a stopped elevator, and only if it is heading in
/// their direction.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
pub enum Action {
    #[default]
    Move,
    Stop,
}

impl Action {
    #[inline]
    pub fn to_wire(self) -> bool {
        matches!(self, Action::Move)
    }

    #[inline]
    pub fn from_wire(moving: bool) -> Action {
        if moving { Action::Move } else { Action::Stop }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Action::Move => "move",
            Action::Stop => "stop",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
