//! Structural audit of a simulation run.
//!
//! The audit walks every snapshot of a run and checks the invariants the
//! engine promises: the road keeps its length, signals stay where they
//! started, and cars are never created. It does not stop at the first
//! problem; every violation in the run is reported in one pass.
//!
//! # Example
//!
//! ```rust
//! use traffic_lights::audit::{audit, Violation};
//! use traffic_lights::engine::SimulationRunner;
//! use traffic_lights::road::Road;
//!
//! let history = SimulationRunner::new("C..G..R..C".parse().unwrap()).run(20);
//! assert!(audit(history.snapshots()).is_ok());
//!
//! let forged: Vec<Road> = vec!["C.G".parse().unwrap(), "CCG".parse().unwrap()];
//! let violations = audit(&forged).unwrap_err();
//! assert_eq!(
//!     violations,
//!     vec![Violation::VehicleAppeared { tick: 1, before: 1, after: 2 }]
//! );
//! ```

pub mod violations;

pub use violations::{AuditStrategy, Violation};

use crate::road::Road;

/// Audit a sequence of snapshots, initial road first.
///
/// Returns `Ok(())` when every invariant holds, otherwise all violations in
/// tick order.
pub fn audit(snapshots: &[Road]) -> Result<(), Vec<Violation>> {
    let Some(initial) = snapshots.first() else {
        return Ok(());
    };

    let violations: Vec<Violation> = snapshots
        .windows(2)
        .enumerate()
        .flat_map(|(index, pair)| check_tick(initial, &pair[0], &pair[1], index + 1))
        .collect();

    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

fn check_tick(initial: &Road, previous: &Road, current: &Road, tick: usize) -> Vec<Violation> {
    if current.len() != initial.len() {
        return vec![Violation::LengthChanged {
            tick,
            expected: initial.len(),
            found: current.len(),
        }];
    }

    let mut violations = Vec::new();

    for (position, _) in current.signals() {
        let was_signal = initial.get(position).and_then(|cell| cell.signal()).is_some();
        if !was_signal {
            violations.push(Violation::SignalOutOfPlace { tick, position });
        }
    }

    for (position, _) in initial.signals() {
        let cleared = current.get(position).is_some_and(|cell| cell.is_empty());
        if cleared {
            violations.push(Violation::SignalMissing { tick, position });
        }
    }

    let (before, after) = (previous.car_count(), current.car_count());
    if after > before {
        violations.push(Violation::VehicleAppeared {
            tick,
            before,
            after,
        });
    }

    violations
}
