//! Core State trait for the values road entities cycle through.
//!
//! Signal colors and vehicle statuses are both small closed sets of states.
//! This trait gives them a uniform, pure interface for naming and for
//! detecting terminal states, which logging and the run history rely on.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for entity states.
///
/// All methods are pure - no side effects. States are immutable values
/// describing where an entity currently is in its lifecycle.
///
/// # Required Traits
///
/// - `Clone`: states are copied into the run history
/// - `PartialEq`: transitions compare the old and new state
/// - `Debug`: states must be debuggable for diagnostics
/// - `Serialize` + `Deserialize`: states appear in JSON run reports
///
/// # Example
///
/// ```rust
/// use traffic_lights::core::{SignalColor, State, VehicleStatus};
///
/// assert_eq!(SignalColor::Orange.name(), "Orange");
/// assert!(!SignalColor::Red.is_final());
/// assert!(VehicleStatus::Exited.is_final());
/// ```
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the state's name for display/logging.
    fn name(&self) -> &str;

    /// Check if this is a final (terminal) state.
    ///
    /// An entity in a final state takes no further part in the simulation.
    ///
    /// Default implementation returns `false`.
    fn is_final(&self) -> bool {
        false
    }
}
