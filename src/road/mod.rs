//! Road snapshots and their textual form.
//!
//! A [`Road`] is a fixed-length sequence of [`Cell`]s. Snapshots are values:
//! [`Road::overlay`] consumes a road and returns the next one, so no two
//! owners ever observe the same buffer changing underneath them.
//!
//! The textual form uses one character per cell: `.` empty, `C` car, and
//! `G`/`O`/`R` for green, orange and red signals.

pub mod error;

pub use error::ParseError;

use crate::core::{Cell, SignalColor};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Immutable-length snapshot of the road.
///
/// # Example
///
/// ```rust
/// use traffic_lights::road::Road;
/// use traffic_lights::core::Cell;
///
/// let road: Road = ".C..G.".parse().unwrap();
/// assert_eq!(road.len(), 6);
/// assert_eq!(road.get(1), Some(Cell::Car));
///
/// let moved = road.template().overlay(2, Cell::Car);
/// assert_eq!(moved.to_string(), "..C...");
/// ```
#[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Road {
    cells: Vec<Cell>,
}

impl Road {
    /// Build a road from cells. Fails if `cells` is empty.
    pub fn from_cells(cells: Vec<Cell>) -> Result<Self, ParseError> {
        if cells.is_empty() {
            return Err(ParseError::EmptyRoad);
        }
        Ok(Self { cells })
    }

    /// An all-empty road of the same length.
    pub fn template(&self) -> Self {
        Self {
            cells: vec![Cell::Empty; self.cells.len()],
        }
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always `false`; roads hold at least one cell.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn get(&self, position: usize) -> Option<Cell> {
        self.cells.get(position).copied()
    }

    /// Write `cell` at `position`, returning the new snapshot.
    ///
    /// Positions past the end are ignored; nothing off the road is drawn.
    pub fn overlay(mut self, position: usize, cell: Cell) -> Self {
        if let Some(slot) = self.cells.get_mut(position) {
            *slot = cell;
        }
        self
    }

    /// Signals on this road with their positions, in road order.
    pub fn signals(&self) -> impl Iterator<Item = (usize, SignalColor)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter_map(|(position, cell)| cell.signal().map(|color| (position, color)))
    }

    /// Positions of every car, in road order.
    pub fn car_positions(&self) -> impl Iterator<Item = usize> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_car())
            .map(|(position, _)| position)
    }

    pub fn car_count(&self) -> usize {
        self.car_positions().count()
    }
}

impl FromStr for Road {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cells = s
            .chars()
            .enumerate()
            .map(|(index, symbol)| {
                Cell::from_symbol(symbol).ok_or(ParseError::UnknownSymbol { symbol, index })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Self::from_cells(cells)
    }
}

impl TryFrom<String> for Road {
    type Error = ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Road> for String {
    fn from(road: Road) -> Self {
        road.to_string()
    }
}

impl fmt::Display for Road {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cell in &self.cells {
            write!(f, "{cell}")?;
        }
        Ok(())
    }
}
