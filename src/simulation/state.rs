use serde::{Deserialize, Serialize};

/// Closed interval used for input domains and output clamping.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Range {
    pub min: f64,
    pub max: f64,
}

impl Range {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Clamp `value` into the range.
    ///
    /// NaN maps to `min`. Never panics, even if `min > max` (then `max` wins).
    pub fn bound(&self, value: f64) -> f64 {
        value.max(self.min).min(self.max)
    }

    pub fn is_well_formed(&self) -> bool {
        self.min.is_finite() && self.max.is_finite() && self.min <= self.max
    }
}

/// Indoor temperature domain in °C
pub const INDOOR_TEMPERATURE: Range = Range::new(18.0, 26.0);
/// Indoor relative humidity domain in %
pub const INDOOR_HUMIDITY: Range = Range::new(30.0, 70.0);
/// Outdoor temperature domain in °C
pub const OUTDOOR_TEMPERATURE: Range = Range::new(-10.0, 40.0);
/// Outdoor relative humidity domain in %
pub const OUTDOOR_HUMIDITY: Range = Range::new(30.0, 80.0);
pub const FAN_SPEED: Range = Range::new(0.1, 1.0);
/// Valve and damper openness as a fraction
pub const OPENNESS: Range = Range::new(0.0, 1.0);

/// Conditions inside the served zone
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IndoorState {
    /// Dry-bulb temperature (°C)
    pub temperature_c: f64,
    /// Relative humidity (%)
    pub relative_humidity: f64,
}

impl IndoorState {
    pub fn new(temperature_c: f64, relative_humidity: f64) -> Self {
        Self {
            temperature_c,
            relative_humidity,
        }
    }

    pub fn clamped(&self) -> Self {
        Self {
            temperature_c: INDOOR_TEMPERATURE.bound(self.temperature_c),
            relative_humidity: INDOOR_HUMIDITY.bound(self.relative_humidity),
        }
    }
}

/// Outdoor air conditions, read-only input to an update
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OutdoorState {
    /// Dry-bulb temperature (°C)
    pub temperature_c: f64,
    /// Relative humidity (%)
    pub relative_humidity: f64,
}

impl OutdoorState {
    pub fn new(temperature_c: f64, relative_humidity: f64) -> Self {
        Self {
            temperature_c,
            relative_humidity,
        }
    }

    pub fn clamped(&self) -> Self {
        Self {
            temperature_c: OUTDOOR_TEMPERATURE.bound(self.temperature_c),
            relative_humidity: OUTDOOR_HUMIDITY.bound(self.relative_humidity),
        }
    }
}

/// Actuator positions, all as fractions rather than percent
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ActuatorSettings {
    /// Fan speed, 0.1 (minimum) to 1.0 (full)
    pub fan_speed: f64,
    /// Cold water valve openness, 0.0 to 1.0
    pub cold_valve: f64,
    /// Hot water valve openness, 0.0 to 1.0
    pub hot_valve: f64,
    /// Outdoor air damper openness, 0.0 to 1.0
    pub oa_damper: f64,
}

impl ActuatorSettings {
    pub fn new(fan_speed: f64, cold_valve: f64, hot_valve: f64, oa_damper: f64) -> Self {
        Self {
            fan_speed,
            cold_valve,
            hot_valve,
            oa_damper,
        }
    }

    /// Minimum fan, every valve and damper closed
    pub fn idle() -> Self {
        Self::new(FAN_SPEED.min, 0.0, 0.0, 0.0)
    }

    pub fn clamped(&self) -> Self {
        Self {
            fan_speed: FAN_SPEED.bound(self.fan_speed),
            cold_valve: OPENNESS.bound(self.cold_valve),
            hot_valve: OPENNESS.bound(self.hot_valve),
            oa_damper: OPENNESS.bound(self.oa_damper),
        }
    }
}
