//! Traffic Lights: a pure discrete-time traffic simulation
//!
//! A road is a fixed-length row of cells. Each cell is empty, holds a car, or
//! holds a traffic signal that is green, orange or red. Every tick the
//! signals advance along a fixed cycle and each car moves at most one cell
//! forward, depending on what lies directly ahead of it.
//!
//! # Core Concepts
//!
//! - **Signal**: a light fixed at one position, cycling Green -> Orange -> Red
//! - **Vehicle**: a car that moves into an empty cell, or across a green
//!   signal when the cell beyond is not occupied, and leaves at the road end
//! - **RoadEngine**: owns signals and vehicles and produces one snapshot per tick
//! - **SimulationRunner**: drives the engine and records a [`RunHistory`]
//!
//! The simulation is deterministic: the same road and step count always
//! yield the same states.
//!
//! # Example
//!
//! ```rust
//! use traffic_lights::simulate;
//!
//! let states = simulate("C.R...", 6).unwrap();
//!
//! assert_eq!(states.len(), 7);
//! assert_eq!(states[0], "C.R...");
//! assert_eq!(states[4], ".CR..."); // held at the red light
//! assert_eq!(states[5], "..C..."); // light turned green, car crosses it
//! ```

pub mod audit;
pub mod config;
pub mod core;
pub mod engine;
pub mod road;

// Re-export commonly used types
pub use crate::core::{Cell, RunHistory, Signal, SignalChange, SignalColor, State, Vehicle};
pub use crate::engine::{simulate, RoadEngine, SimulationRunner};
pub use crate::road::{ParseError, Road};
