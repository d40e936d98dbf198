//! Fan coil unit simulator.
//!
//! Computes the next indoor temperature and relative humidity from one set of
//! readings and actuator positions. See [`simulation::FanCoilUnit`] for the model.

pub mod config;
pub mod error;
pub mod panel;
pub mod report;
pub mod simulation;
pub mod simulator;
pub mod telemetry;

pub use error::{Result, SimError};
