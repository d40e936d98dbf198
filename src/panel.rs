//! Operator input panel.
//!
//! Holds the eight slider values in presentation units. Valves and damper are
//! integer percent here and become fractions only when handed to the model.

use serde::{Deserialize, Serialize};
use tracing::warn;
use validator::Validate;

use crate::error::{Result, SimError};
use crate::simulation::{ActuatorSettings, IndoorState, OutdoorState};

/// Indoor temperature setpoint (°C), also the panel default
pub const TEMPERATURE_SETPOINT_C: f64 = 24.0;
/// Indoor relative humidity setpoint (%), also the panel default
pub const HUMIDITY_SETPOINT: f64 = 50.0;

const MAX_PERCENT: u8 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct ControlPanel {
    #[validate(range(min = 18.0, max = 26.0))]
    pub indoor_temp_c: f64,
    #[validate(range(min = 30.0, max = 70.0))]
    pub indoor_rh: f64,
    #[validate(range(min = -10.0, max = 40.0))]
    pub outdoor_temp_c: f64,
    #[validate(range(min = 30.0, max = 80.0))]
    pub outdoor_rh: f64,
    #[validate(range(min = 0.1, max = 1.0))]
    pub fan_speed: f64,
    #[validate(range(max = 100))]
    pub cold_valve_pct: u8,
    #[validate(range(max = 100))]
    pub hot_valve_pct: u8,
    #[validate(range(max = 100))]
    pub oa_damper_pct: u8,
}

impl Default for ControlPanel {
    fn default() -> Self {
        Self {
            indoor_temp_c: TEMPERATURE_SETPOINT_C,
            indoor_rh: HUMIDITY_SETPOINT,
            outdoor_temp_c: 20.0,
            outdoor_rh: 50.0,
            fan_speed: 0.5,
            cold_valve_pct: 50,
            hot_valve_pct: 50,
            oa_damper_pct: 50,
        }
    }
}

/// Model-ready values derived from a panel
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PanelInputs {
    pub indoor: IndoorState,
    pub outdoor: OutdoorState,
    pub settings: ActuatorSettings,
}

pub fn percent_to_fraction(percent: u8) -> f64 {
    f64::from(percent) / 100.0
}

impl ControlPanel {
    /// Pull every value into its slider range. NaN lands on the lower bound.
    pub fn clamped(&self) -> Self {
        let raw = self.to_inputs();
        let indoor = raw.indoor.clamped();
        let outdoor = raw.outdoor.clamped();
        let settings = raw.settings.clamped();

        // Percent stays integral; clamp it directly rather than via the fraction
        let clamped = Self {
            indoor_temp_c: indoor.temperature_c,
            indoor_rh: indoor.relative_humidity,
            outdoor_temp_c: outdoor.temperature_c,
            outdoor_rh: outdoor.relative_humidity,
            fan_speed: settings.fan_speed,
            cold_valve_pct: self.cold_valve_pct.min(MAX_PERCENT),
            hot_valve_pct: self.hot_valve_pct.min(MAX_PERCENT),
            oa_damper_pct: self.oa_damper_pct.min(MAX_PERCENT),
        };

        // Bitwise compare so NaN inputs register as changed
        if !clamped.same_bits(self) {
            warn!(requested = ?self, applied = ?clamped, "panel input out of range, clamped");
        }
        clamped
    }

    /// Reject out-of-range or non-finite input instead of clamping it
    pub fn checked(&self) -> Result<Self> {
        let readings = [
            ("indoor_temp_c", self.indoor_temp_c),
            ("indoor_rh", self.indoor_rh),
            ("outdoor_temp_c", self.outdoor_temp_c),
            ("outdoor_rh", self.outdoor_rh),
            ("fan_speed", self.fan_speed),
        ];
        if let Some((name, value)) = readings.iter().find(|(_, v)| !v.is_finite()) {
            return Err(SimError::NonFinite(format!("{name} = {value}")));
        }

        self.validate()?;
        Ok(*self)
    }

    pub fn to_inputs(&self) -> PanelInputs {
        PanelInputs {
            indoor: IndoorState::new(self.indoor_temp_c, self.indoor_rh),
            outdoor: OutdoorState::new(self.outdoor_temp_c, self.outdoor_rh),
            settings: ActuatorSettings::new(
                self.fan_speed,
                percent_to_fraction(self.cold_valve_pct),
                percent_to_fraction(self.hot_valve_pct),
                percent_to_fraction(self.oa_damper_pct),
            ),
        }
    }

    fn same_bits(&self, other: &Self) -> bool {
        self.indoor_temp_c.to_bits() == other.indoor_temp_c.to_bits()
            && self.indoor_rh.to_bits() == other.indoor_rh.to_bits()
            && self.outdoor_temp_c.to_bits() == other.outdoor_temp_c.to_bits()
            && self.outdoor_rh.to_bits() == other.outdoor_rh.to_bits()
            && self.fan_speed.to_bits() == other.fan_speed.to_bits()
            && self.cold_valve_pct == other.cold_valve_pct
            && self.hot_valve_pct == other.hot_valve_pct
            && self.oa_damper_pct == other.oa_damper_pct
    }
}
