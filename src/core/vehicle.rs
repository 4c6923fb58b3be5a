//! Single-car movement rule.

use super::cell::{Cell, SignalColor};
use serde::{Deserialize, Serialize};

crate::state_enum! {
    /// Where a vehicle is in its lifecycle.
    #[derive(Copy, Eq)]
    pub enum VehicleStatus {
        OnRoad,
        Exited,
    }
    final: [Exited]
}

/// A car advancing at most one cell per tick.
///
/// # Example
///
/// ```rust
/// use traffic_lights::core::{Cell, SignalColor, Vehicle};
///
/// let road = [Cell::Car, Cell::Signal(SignalColor::Green), Cell::Empty];
/// let car = Vehicle::new(0).advance(&road);
///
/// assert_eq!(car.position(), 1);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Vehicle {
    position: usize,
}

impl Vehicle {
    pub fn new(position: usize) -> Self {
        Self { position }
    }

    pub fn position(&self) -> usize {
        self.position
    }

    /// The cell this vehicle paints onto a road.
    pub fn marker(&self) -> Cell {
        Cell::Car
    }

    pub fn status(&self, road_len: usize) -> VehicleStatus {
        if self.position < road_len {
            VehicleStatus::OnRoad
        } else {
            VehicleStatus::Exited
        }
    }

    /// Advance the vehicle by one tick against `road`.
    ///
    /// A vehicle on the last cell always drives off the road. Otherwise it
    /// moves when the next cell is empty, or when the next cell is a green
    /// signal and the cell beyond it holds no car. Exited vehicles stay put.
    pub fn advance(self, road: &[Cell]) -> Self {
        let len = road.len();
        if self.position >= len {
            return self;
        }
        if self.position == len - 1 {
            return self.forward();
        }

        let next = road[self.position + 1];
        let beyond = road.get(self.position + 2).copied();

        if Self::can_enter(next, beyond) {
            self.forward()
        } else {
            self
        }
    }

    fn can_enter(next: Cell, beyond: Option<Cell>) -> bool {
        match next {
            Cell::Empty => true,
            Cell::Signal(SignalColor::Green) => !beyond.is_some_and(Cell::is_car),
            _ => false,
        }
    }

    fn forward(self) -> Self {
        Self {
            position: self.position + 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::State;

    const E: Cell = Cell::Empty;
    const C: Cell = Cell::Car;
    const G: Cell = Cell::Signal(SignalColor::Green);
    const O: Cell = Cell::Signal(SignalColor::Orange);
    const R: Cell = Cell::Signal(SignalColor::Red);

    #[test]
    fn moves_into_empty_cell() {
        let car = Vehicle::new(0).advance(&[C, E, E]);
        assert_eq!(car.position(), 1);
    }

    #[test]
    fn blocked_by_car_ahead() {
        let car = Vehicle::new(0).advance(&[C, C, E]);
        assert_eq!(car.position(), 0);
    }

    #[test]
    fn stops_at_red_and_orange() {
        assert_eq!(Vehicle::new(0).advance(&[C, R, E]).position(), 0);
        assert_eq!(Vehicle::new(0).advance(&[C, O, E]).position(), 0);
    }

    #[test]
    fn crosses_green_only_when_exit_is_clear() {
        assert_eq!(Vehicle::new(0).advance(&[C, G, E]).position(), 1);
        assert_eq!(Vehicle::new(0).advance(&[C, G, C]).position(), 0);
        assert_eq!(Vehicle::new(0).advance(&[C, G, R]).position(), 1);
    }

    #[test]
    fn green_at_road_end_counts_as_clear() {
        assert_eq!(Vehicle::new(0).advance(&[C, G]).position(), 1);
    }

    #[test]
    fn last_cell_always_exits() {
        let car = Vehicle::new(2).advance(&[R, R, C]);
        assert_eq!(car.position(), 3);
        assert_eq!(car.status(3), VehicleStatus::Exited);
        assert!(car.status(3).is_final());
    }

    #[test]
    fn exited_vehicle_is_inert() {
        let car = Vehicle::new(3);
        assert_eq!(car.advance(&[E, E, E]).position(), 3);
    }

    #[test]
    fn marker_is_a_car() {
        assert_eq!(Vehicle::new(0).marker(), Cell::Car);
        assert_eq!(Vehicle::new(0).status(1), VehicleStatus::OnRoad);
    }
}
