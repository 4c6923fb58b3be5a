//! Cell values and their one-character symbols.

use serde::{Deserialize, Serialize};
use std::fmt;

crate::state_enum! {
    /// Color of a traffic signal.
    ///
    /// Signals cycle Green -> Orange -> Red -> Green and never reach a
    /// final state.
    #[derive(Copy, Eq, Hash)]
    pub enum SignalColor {
        Green,
        Orange,
        Red,
    }
}

impl SignalColor {
    /// Symbol used for this color in a textual road.
    pub fn symbol(self) -> char {
        match self {
            Self::Green => 'G',
            Self::Orange => 'O',
            Self::Red => 'R',
        }
    }

    /// Parse a signal symbol. Returns `None` for anything that is not a signal.
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            'G' => Some(Self::Green),
            'O' => Some(Self::Orange),
            'R' => Some(Self::Red),
            _ => None,
        }
    }
}

/// Content of a single road cell.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    Car,
    Signal(SignalColor),
}

impl Cell {
    pub const EMPTY_SYMBOL: char = '.';
    pub const CAR_SYMBOL: char = 'C';

    pub fn symbol(self) -> char {
        match self {
            Self::Empty => Self::EMPTY_SYMBOL,
            Self::Car => Self::CAR_SYMBOL,
            Self::Signal(color) => color.symbol(),
        }
    }

    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            Self::EMPTY_SYMBOL => Some(Self::Empty),
            Self::CAR_SYMBOL => Some(Self::Car),
            other => SignalColor::from_symbol(other).map(Self::Signal),
        }
    }

    pub fn is_car(self) -> bool {
        matches!(self, Self::Car)
    }

    pub fn is_empty(self) -> bool {
        matches!(self, Self::Empty)
    }

    /// The signal color held by this cell, if any.
    pub fn signal(self) -> Option<SignalColor> {
        match self {
            Self::Signal(color) => Some(color),
            _ => None,
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
