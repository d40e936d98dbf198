//! # Fan Coil Simulation Module
//!
//! Single-step model of a fan coil unit serving one zone.
//!
//! ## Components
//!
//! - **State**: Indoor/outdoor conditions and actuator positions, plus their domains
//! - **Constants**: The coefficient set driving the model
//! - **FCU**: The state update itself, with an effect breakdown
//! - **Trend**: Flat display series repeating one update result
//!
//! ## Usage
//!
//! ```rust
//! use fcu_simulator::simulation::{
//!     ActuatorSettings, ClimateModel, FanCoilUnit, IndoorState, OutdoorState,
//! };
//!
//! let fcu = FanCoilUnit::default();
//! let next = fcu.update(
//!     IndoorState::new(24.0, 50.0),
//!     OutdoorState::new(20.0, 50.0),
//!     ActuatorSettings::new(0.5, 0.5, 0.5, 0.5),
//! );
//!
//! assert!((next.temperature_c - 25.0).abs() < 1e-9);
//! assert_eq!(next.relative_humidity, 50.0);
//! ```

pub mod constants;
pub mod fcu;
pub mod state;
pub mod trend;

pub use constants::ModelConstants;
pub use fcu::{ClimateModel, Effects, FanCoilUnit, UpdateBreakdown};
pub use state::{ActuatorSettings, IndoorState, OutdoorState, Range};
pub use trend::{Trend, TrendConfig, TrendPoint, MAX_TREND_POINTS};
