//! Audit violations and handling strategies.

use thiserror::Error;

/// A structural invariant broken by a snapshot in a run.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum Violation {
    #[error("Tick {tick}: road length changed from {expected} to {found}")]
    LengthChanged {
        tick: usize,
        expected: usize,
        found: usize,
    },

    #[error("Tick {tick}: signal drawn at {position}, where the initial road had none")]
    SignalOutOfPlace { tick: usize, position: usize },

    #[error("Tick {tick}: signal at {position} disappeared")]
    SignalMissing { tick: usize, position: usize },

    #[error("Tick {tick}: car count grew from {before} to {after}")]
    VehicleAppeared {
        tick: usize,
        before: usize,
        after: usize,
    },
}

/// What a caller does when an audit finds violations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuditStrategy {
    /// Treat any violation as a failure
    Abort,

    /// Continue but log a warning per violation
    #[default]
    IgnoreAndLog,
}
