//! Run history tracking.
//!
//! A [`RunHistory`] is the ordered record of one simulation run: the initial
//! road, every snapshot produced since, and each signal color change along
//! the way.

use super::cell::SignalColor;
use crate::road::Road;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single signal changing color.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct SignalChange {
    /// The tick during which the change happened (first tick is 1)
    pub tick: usize,
    /// Road position of the signal
    pub position: usize,
    /// Color before the tick
    pub from: SignalColor,
    /// Color after the tick
    pub to: SignalColor,
}

/// Ordered history of road snapshots.
///
/// The first snapshot is always the initial road, so a history that has
/// recorded `n` ticks holds `n + 1` snapshots. Timestamps are metadata only
/// and are left out of the serialized form, so two runs with the same input
/// serialize identically.
///
/// # Example
///
/// ```rust
/// use traffic_lights::core::RunHistory;
/// use traffic_lights::road::Road;
///
/// let initial: Road = ".C.".parse().unwrap();
/// let history = RunHistory::new(initial)
///     .record("..C".parse().unwrap(), Vec::new())
///     .finish();
///
/// assert_eq!(history.states(), vec![".C.", "..C"]);
/// assert_eq!(history.steps(), 1);
/// ```
#[derive(Clone, Debug, Serialize)]
pub struct RunHistory {
    snapshots: Vec<Road>,
    signal_changes: Vec<SignalChange>,
    #[serde(skip)]
    started_at: DateTime<Utc>,
    #[serde(skip)]
    finished_at: Option<DateTime<Utc>>,
}

impl RunHistory {
    /// Start a history at `initial`.
    pub fn new(initial: Road) -> Self {
        Self {
            snapshots: vec![initial],
            signal_changes: Vec::new(),
            started_at: Utc::now(),
            finished_at: None,
        }
    }

    /// Record one tick's snapshot and the signal changes it produced.
    pub fn record(mut self, snapshot: Road, changes: Vec<SignalChange>) -> Self {
        self.snapshots.push(snapshot);
        self.signal_changes.extend(changes);
        self
    }

    /// Stamp the end of the run.
    pub fn finish(mut self) -> Self {
        self.finished_at = Some(Utc::now());
        self
    }

    pub fn snapshots(&self) -> &[Road] {
        &self.snapshots
    }

    /// Every snapshot rendered as text, initial road first.
    pub fn states(&self) -> Vec<String> {
        self.snapshots.iter().map(Road::to_string).collect()
    }

    pub fn initial(&self) -> &Road {
        &self.snapshots[0]
    }

    pub fn final_road(&self) -> &Road {
        &self.snapshots[self.snapshots.len() - 1]
    }

    /// Number of ticks recorded.
    pub fn steps(&self) -> usize {
        self.snapshots.len() - 1
    }

    pub fn signal_changes(&self) -> &[SignalChange] {
        &self.signal_changes
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// Wall-clock duration of the run.
    ///
    /// Returns `None` until [`RunHistory::finish`] has been called.
    pub fn duration(&self) -> Option<Duration> {
        self.finished_at
            .and_then(|finished| finished.signed_duration_since(self.started_at).to_std().ok())
    }
}
