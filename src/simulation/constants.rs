use serde::{Deserialize, Serialize};

use super::state::{Range, INDOOR_HUMIDITY, INDOOR_TEMPERATURE};
use crate::error::SimError;

/// Coefficient set for the fan coil model.
///
/// The defaults reproduce the reference behaviour exactly. Changing any
/// value yields a different model, not a recalibration of the same one.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelConstants {
    /// Cold water coil surface temperature (°C)
    pub cold_coil_temp_c: f64,
    /// Hot water coil surface temperature (°C)
    pub hot_coil_temp_c: f64,
    /// Scale applied to `cold_valve * (cold_coil - indoor)`
    pub cooling_coefficient: f64,
    /// Scale applied to `hot_valve * (indoor - hot_coil)`
    pub heating_coefficient: f64,
    /// Temperature rise per unit of fan speed (°C)
    pub fan_coefficient: f64,
    /// RH drop per unit of positive cooling effect
    pub dehumidify_coefficient: f64,
    /// RH rise per unit of positive heating effect
    pub humidify_coefficient: f64,
    /// RH shift per unit of damper openness toward the outdoor RH
    pub outdoor_air_coefficient: f64,
    /// Hard output bounds for indoor temperature (°C)
    pub temperature_limits: Range,
    /// Hard output bounds for indoor relative humidity (%)
    pub humidity_limits: Range,
}

impl Default for ModelConstants {
    fn default() -> Self {
        Self {
            cold_coil_temp_c: 8.0,
            hot_coil_temp_c: 55.0,
            cooling_coefficient: 0.1,
            heating_coefficient: 0.1,
            fan_coefficient: 0.5,
            dehumidify_coefficient: 0.1,
            humidify_coefficient: 0.05,
            outdoor_air_coefficient: 0.2,
            temperature_limits: INDOOR_TEMPERATURE,
            humidity_limits: INDOOR_HUMIDITY,
        }
    }
}

impl ModelConstants {
    /// Reject non-finite coefficients and inverted clamp bounds
    pub fn validate(&self) -> Result<(), SimError> {
        let coefficients = [
            ("cold_coil_temp_c", self.cold_coil_temp_c),
            ("hot_coil_temp_c", self.hot_coil_temp_c),
            ("cooling_coefficient", self.cooling_coefficient),
            ("heating_coefficient", self.heating_coefficient),
            ("fan_coefficient", self.fan_coefficient),
            ("dehumidify_coefficient", self.dehumidify_coefficient),
            ("humidify_coefficient", self.humidify_coefficient),
            ("outdoor_air_coefficient", self.outdoor_air_coefficient),
        ];

        for (name, value) in coefficients {
            if !value.is_finite() {
                return Err(SimError::InvalidConstants(format!(
                    "{name} must be finite, got {value}"
                )));
            }
        }

        if !self.temperature_limits.is_well_formed() {
            return Err(SimError::InvalidConstants(format!(
                "temperature_limits must satisfy min <= max, got [{}, {}]",
                self.temperature_limits.min, self.temperature_limits.max
            )));
        }

        if !self.humidity_limits.is_well_formed() {
            return Err(SimError::InvalidConstants(format!(
                "humidity_limits must satisfy min <= max, got [{}, {}]",
                self.humidity_limits.min, self.humidity_limits.max
            )));
        }

        Ok(())
    }
}
