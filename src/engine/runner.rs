//! Multi-tick simulation driver.

use super::RoadEngine;
use crate::core::RunHistory;
use crate::road::{ParseError, Road};
use log::info;

/// Drives a [`RoadEngine`] for a fixed number of ticks.
///
/// # Example
///
/// ```rust
/// use traffic_lights::engine::SimulationRunner;
///
/// let history = SimulationRunner::new(".C..G.".parse().unwrap()).run(1);
///
/// assert_eq!(history.states(), vec![".C..G.", "..C.G."]);
/// ```
#[derive(Clone, Debug)]
pub struct SimulationRunner {
    initial: Road,
}

impl SimulationRunner {
    pub fn new(initial: Road) -> Self {
        Self { initial }
    }

    pub fn initial(&self) -> &Road {
        &self.initial
    }

    /// Run `steps` ticks from the initial road.
    ///
    /// The returned history holds `steps + 1` snapshots: the initial road
    /// followed by the result of each tick in order.
    pub fn run(&self, steps: usize) -> RunHistory {
        let mut engine = RoadEngine::new(&self.initial);

        let history = (0..steps).fold(RunHistory::new(self.initial.clone()), |history, _| {
            let outcome = engine.tick_with_changes();
            history.record(outcome.road, outcome.signal_changes)
        });
        let history = history.finish();

        info!(
            "simulated {} ticks on a road of {} cells ({} signal changes)",
            history.steps(),
            self.initial.len(),
            history.signal_changes().len()
        );

        history
    }
}

/// Simulate `steps` ticks of the road described by `road`.
///
/// Returns `steps + 1` textual states, the first equal to `road`.
///
/// # Errors
///
/// * `ParseError::EmptyRoad` - `road` has no cells
/// * `ParseError::UnknownSymbol` - `road` contains a character other than
///   `.`, `C`, `G`, `O` or `R`
///
/// # Example
///
/// ```rust
/// use traffic_lights::simulate;
///
/// let states = simulate(".C..G.", 1).unwrap();
/// assert_eq!(states, vec![".C..G.", "..C.G."]);
///
/// assert_eq!(simulate("C.R", 0).unwrap(), vec!["C.R"]);
/// assert!(simulate("C-R", 3).is_err());
/// ```
pub fn simulate(road: &str, steps: usize) -> Result<Vec<String>, ParseError> {
    let initial: Road = road.parse()?;
    Ok(SimulationRunner::new(initial).run(steps).states())
}
