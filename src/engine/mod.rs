//! Tick orchestration.
//!
//! The [`RoadEngine`] owns every signal and vehicle on a road and turns the
//! current state into the next snapshot. [`SimulationRunner`] drives it for a
//! number of ticks and collects the results.

pub mod runner;

pub use runner::{simulate, SimulationRunner};

use crate::core::{Cell, Signal, SignalChange, State, Vehicle};
use crate::road::Road;
use log::{debug, trace};

/// Result of a single tick.
#[derive(Clone, Debug, PartialEq)]
pub struct TickOutcome {
    /// The road after the tick
    pub road: Road,
    /// Signals that changed color during the tick
    pub signal_changes: Vec<SignalChange>,
}

/// Owns the road's entities and produces one snapshot per tick.
///
/// Signals and vehicles are read from the initial road once and live for
/// the whole run. Each tick rebuilds the snapshot from an empty template:
/// signals are advanced and drawn first, then vehicles are advanced one at a
/// time from the far end of the road backwards, each one seeing the road as
/// left by the vehicles ahead of it.
///
/// # Example
///
/// ```rust
/// use traffic_lights::engine::RoadEngine;
///
/// let road = ".C..G.".parse().unwrap();
/// let mut engine = RoadEngine::new(&road);
///
/// assert_eq!(engine.tick().to_string(), "..C.G.");
/// assert_eq!(engine.tick_count(), 1);
/// ```
#[derive(Clone, Debug)]
pub struct RoadEngine {
    template: Road,
    signals: Vec<Signal>,
    vehicles: Vec<Vehicle>,
    ticks: usize,
}

impl RoadEngine {
    /// Scan `road` for signals and cars and build an engine for it.
    pub fn new(road: &Road) -> Self {
        let signals = road
            .signals()
            .map(|(position, color)| Signal::new(color, position))
            .collect::<Vec<_>>();
        let vehicles = road.car_positions().map(Vehicle::new).collect::<Vec<_>>();

        debug!(
            "road engine created: len={} signals={} vehicles={}",
            road.len(),
            signals.len(),
            vehicles.len()
        );

        Self {
            template: road.template(),
            signals,
            vehicles,
            ticks: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.template.len()
    }

    /// Always `false`; an engine is built from a road of at least one cell.
    pub fn is_empty(&self) -> bool {
        self.template.is_empty()
    }

    /// Number of ticks run so far.
    pub fn tick_count(&self) -> usize {
        self.ticks
    }

    pub fn signals(&self) -> &[Signal] {
        &self.signals
    }

    pub fn vehicles(&self) -> &[Vehicle] {
        &self.vehicles
    }

    /// Vehicles that have not yet left the road.
    pub fn active_vehicles(&self) -> impl Iterator<Item = &Vehicle> + '_ {
        let len = self.len();
        self.vehicles
            .iter()
            .filter(move |vehicle| !vehicle.status(len).is_final())
    }

    /// Run one tick and return the new road.
    pub fn tick(&mut self) -> Road {
        self.tick_with_changes().road
    }

    /// Run one tick and return the new road with the signal changes it caused.
    pub fn tick_with_changes(&mut self) -> TickOutcome {
        self.ticks += 1;

        let signal_changes = self.advance_signals();
        let with_signals = self.draw_signals();
        let road = self.advance_vehicles(with_signals);

        trace!("tick {}: {road}", self.ticks);

        TickOutcome {
            road,
            signal_changes,
        }
    }

    fn advance_signals(&mut self) -> Vec<SignalChange> {
        let tick = self.ticks;
        let mut changes = Vec::new();

        for signal in &mut self.signals {
            let before = *signal;
            *signal = before.advance();

            if signal.color() != before.color() {
                debug!(
                    "tick {tick}: signal at {} {} -> {}",
                    signal.position(),
                    before.color().name(),
                    signal.color().name()
                );
                changes.push(SignalChange {
                    tick,
                    position: signal.position(),
                    from: before.color(),
                    to: signal.color(),
                });
            }
        }

        changes
    }

    fn draw_signals(&self) -> Road {
        self.signals
            .iter()
            .fold(self.template.clone(), |road, signal| {
                road.overlay(signal.position(), Cell::Signal(signal.color()))
            })
    }

    /// Fold every active vehicle over `with_signals`, farthest first.
    fn advance_vehicles(&mut self, with_signals: Road) -> Road {
        let len = self.len();
        let tick = self.ticks;

        self.vehicles
            .sort_by(|a, b| b.position().cmp(&a.position()));

        self.vehicles
            .iter_mut()
            .filter(|vehicle| !vehicle.status(len).is_final())
            .fold(with_signals, |road, vehicle| {
                *vehicle = vehicle.advance(road.cells());

                if vehicle.status(len).is_final() {
                    debug!("tick {tick}: vehicle left the road");
                    road
                } else {
                    road.overlay(vehicle.position(), vehicle.marker())
                }
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::SignalColor;

    fn engine(text: &str) -> RoadEngine {
        RoadEngine::new(&text.parse().unwrap())
    }

    fn ticks(engine: &mut RoadEngine, n: usize) -> Vec<String> {
        (0..n).map(|_| engine.tick().to_string()).collect()
    }

    #[test]
    fn new_scans_signals_and_vehicles() {
        let engine = engine("C.G.OCR");

        let signals: Vec<_> = engine
            .signals()
            .iter()
            .map(|s| (s.position(), s.color()))
            .collect();
        assert_eq!(
            signals,
            vec![
                (2, SignalColor::Green),
                (4, SignalColor::Orange),
                (6, SignalColor::Red),
            ]
        );

        let mut positions: Vec<_> = engine.vehicles().iter().map(Vehicle::position).collect();
        positions.sort_unstable();
        assert_eq!(positions, vec![0, 5]);
        assert_eq!(engine.len(), 7);
        assert_eq!(engine.tick_count(), 0);
        assert!(!engine.is_empty());
    }

    #[test]
    fn car_moves_into_empty_cell() {
        let mut engine = engine(".C..G.");
        assert_eq!(ticks(&mut engine, 1), vec!["..C.G."]);
    }

    #[test]
    fn leading_car_moves_first() {
        let mut engine = engine("..CC");
        assert_eq!(ticks(&mut engine, 4), vec!["...C", "....", "....", "...."]);
    }

    #[test]
    fn trailing_car_follows_through_green() {
        let mut engine = engine("CCG.C");
        assert_eq!(
            ticks(&mut engine, 6),
            vec![".CC..", ".CGC.", "..C.C", "..GC.", "..O.C", "..R.."]
        );
    }

    #[test]
    fn green_with_car_beyond_blocks() {
        let mut engine = engine("CG.C..");
        assert_eq!(ticks(&mut engine, 3), vec![".C..C.", ".GC..C", ".G.C.."]);
    }

    #[test]
    fn single_cell_road_empties_after_one_tick() {
        let mut engine = engine("C");
        assert_eq!(ticks(&mut engine, 2), vec![".", "."]);
        assert_eq!(engine.active_vehicles().count(), 0);
        assert_eq!(engine.vehicles().len(), 1);
    }

    #[test]
    fn signal_changes_are_reported_with_their_tick() {
        let mut engine = engine("..G");
        let changes: Vec<SignalChange> = (0..6)
            .flat_map(|_| engine.tick_with_changes().signal_changes)
            .collect();

        assert_eq!(
            changes,
            vec![
                SignalChange {
                    tick: 5,
                    position: 2,
                    from: SignalColor::Green,
                    to: SignalColor::Orange,
                },
                SignalChange {
                    tick: 6,
                    position: 2,
                    from: SignalColor::Orange,
                    to: SignalColor::Red,
                },
            ]
        );
    }

    #[test]
    fn exited_vehicles_are_never_advanced_again() {
        let mut engine = engine(".C");
        engine.tick();
        engine.tick();
        engine.tick();
        assert_eq!(engine.vehicles()[0].position(), 2);
    }
}
