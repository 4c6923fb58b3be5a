//! Core simulation types and logic.
//!
//! This module contains the pure parts of the simulation:
//! - Cell values and signal colors
//! - The signal state machine and its tick guards
//! - The single-car movement rule
//! - Immutable run history
//!
//! Nothing in here performs I/O or reads the clock, apart from the run
//! history's metadata timestamps.

mod macros;
mod cell;
mod guard;
mod history;
mod signal;
mod state;
mod vehicle;

pub use cell::{Cell, SignalColor};
pub use guard::TickGuard;
pub use history::{RunHistory, SignalChange};
pub use signal::Signal;
pub use state::State;
pub use vehicle::{Vehicle, VehicleStatus};
