//! Property-based tests for the simulation engine.
//!
//! These tests use proptest to verify the engine's invariants hold across
//! many randomly generated roads.

use proptest::prelude::*;
use std::collections::HashSet;
use traffic_lights::audit::audit;
use traffic_lights::core::{SignalColor, State};
use traffic_lights::{simulate, RoadEngine, Road, SimulationRunner};

prop_compose! {
    fn arbitrary_symbol()(variant in 0..8u8) -> char {
        match variant {
            0..=2 => '.',
            3 | 4 => 'C',
            5 => 'G',
            6 => 'O',
            _ => 'R',
        }
    }
}

prop_compose! {
    fn arbitrary_road()(symbols in prop::collection::vec(arbitrary_symbol(), 1..24)) -> String {
        symbols.into_iter().collect()
    }
}

fn is_signal(symbol: char) -> bool {
    matches!(symbol, 'G' | 'O' | 'R')
}

fn car_count(state: &str) -> usize {
    state.chars().filter(|c| *c == 'C').count()
}

proptest! {
    #[test]
    fn zero_steps_returns_the_input(road in arbitrary_road()) {
        prop_assert_eq!(simulate(&road, 0).unwrap(), vec![road]);
    }

    #[test]
    fn output_shape_matches_input(road in arbitrary_road(), steps in 0..40usize) {
        let states = simulate(&road, steps).unwrap();

        prop_assert_eq!(states.len(), steps + 1);
        prop_assert_eq!(&states[0], &road);
        for state in &states {
            prop_assert_eq!(state.chars().count(), road.chars().count());
        }
    }

    #[test]
    fn simulation_is_deterministic(road in arbitrary_road(), steps in 0..40usize) {
        prop_assert_eq!(simulate(&road, steps).unwrap(), simulate(&road, steps).unwrap());
    }

    #[test]
    fn signals_never_move(road in arbitrary_road(), steps in 0..40usize) {
        let initial: Vec<char> = road.chars().collect();

        for state in simulate(&road, steps).unwrap() {
            for (position, symbol) in state.chars().enumerate() {
                if is_signal(initial[position]) {
                    prop_assert!(is_signal(symbol) || symbol == 'C');
                } else {
                    prop_assert!(symbol == '.' || symbol == 'C');
                }
            }
        }
    }

    #[test]
    fn only_the_car_on_the_last_cell_leaves(road in arbitrary_road(), steps in 1..40usize) {
        let states = simulate(&road, steps).unwrap();

        for pair in states.windows(2) {
            let exits = usize::from(pair[0].ends_with('C'));
            prop_assert_eq!(car_count(&pair[1]), car_count(&pair[0]) - exits);
        }
    }

    #[test]
    fn vehicles_never_share_a_cell(road in arbitrary_road(), steps in 0..40usize) {
        let mut engine = RoadEngine::new(&road.parse().unwrap());

        for _ in 0..steps {
            engine.tick();
            let positions: Vec<usize> = engine.active_vehicles().map(|v| v.position()).collect();
            let unique: HashSet<usize> = positions.iter().copied().collect();
            prop_assert_eq!(unique.len(), positions.len());
        }
    }

    #[test]
    fn vehicles_never_move_backwards(road in arbitrary_road(), steps in 0..40usize) {
        let mut engine = RoadEngine::new(&road.parse().unwrap());

        for _ in 0..steps {
            let mut before: Vec<usize> = engine.vehicles().iter().map(|v| v.position()).collect();
            engine.tick();
            let mut after: Vec<usize> = engine.vehicles().iter().map(|v| v.position()).collect();

            before.sort_unstable();
            after.sort_unstable();
            for (old, new) in before.iter().zip(&after) {
                prop_assert!(new == old || *new == old + 1);
            }
        }
    }

    #[test]
    fn cars_hold_behind_red_and_orange(road in arbitrary_road(), steps in 1..40usize) {
        let mut engine = RoadEngine::new(&road.parse().unwrap());

        for _ in 0..steps {
            let waiting: Vec<usize> = engine.active_vehicles().map(|v| v.position()).collect();
            engine.tick();

            let stopping: HashSet<usize> = engine
                .signals()
                .iter()
                .filter(|s| s.color() != SignalColor::Green)
                .map(|s| s.position())
                .collect();
            let after: HashSet<usize> = engine.active_vehicles().map(|v| v.position()).collect();

            for position in waiting {
                if stopping.contains(&(position + 1)) {
                    prop_assert!(after.contains(&position));
                }
            }
        }
    }

    #[test]
    fn engine_runs_pass_the_audit(road in arbitrary_road(), steps in 0..40usize) {
        let initial: Road = road.parse().unwrap();
        let history = SimulationRunner::new(initial).run(steps);
        prop_assert_eq!(audit(history.snapshots()), Ok(()));
    }

    #[test]
    fn exited_vehicles_are_final(road in arbitrary_road()) {
        let mut engine = RoadEngine::new(&road.parse().unwrap());
        let len = engine.len();

        for _ in 0..(2 * len + 12) {
            engine.tick();
        }

        for vehicle in engine.vehicles() {
            let status = vehicle.status(len);
            prop_assert_eq!(status.is_final(), vehicle.position() == len);
        }
    }
}
