use std::fmt;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::error::SimError;
use crate::panel::{ControlPanel, PanelInputs, HUMIDITY_SETPOINT, TEMPERATURE_SETPOINT_C};
use crate::simulation::{IndoorState, Trend, UpdateBreakdown};

/// Targets the result is compared against
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComfortSetpoints {
    pub temperature_c: f64,
    pub relative_humidity: f64,
    /// RH above this is reported as humid (%)
    pub rh_high: f64,
    /// RH below this is reported as dry (%)
    pub rh_low: f64,
}

impl Default for ComfortSetpoints {
    fn default() -> Self {
        Self {
            temperature_c: TEMPERATURE_SETPOINT_C,
            relative_humidity: HUMIDITY_SETPOINT,
            rh_high: 60.0,
            rh_low: 35.0,
        }
    }
}

impl ComfortSetpoints {
    pub fn validate(&self) -> Result<(), SimError> {
        let values = [
            ("comfort.temperature_c", self.temperature_c),
            ("comfort.relative_humidity", self.relative_humidity),
            ("comfort.rh_high", self.rh_high),
            ("comfort.rh_low", self.rh_low),
        ];
        if let Some((name, value)) = values.iter().find(|(_, v)| !v.is_finite()) {
            return Err(SimError::InvalidConfig(format!(
                "{name} must be finite, got {value}"
            )));
        }

        if self.rh_low > self.rh_high {
            return Err(SimError::InvalidConfig(format!(
                "comfort.rh_low ({}) must not exceed comfort.rh_high ({})",
                self.rh_low, self.rh_high
            )));
        }

        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum HumidityBand {
    Dry,
    Comfortable,
    Humid,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ComfortAssessment {
    pub humidity_band: HumidityBand,
    /// Result minus setpoint (°C)
    pub temperature_deviation_c: f64,
    /// Result minus setpoint (% RH)
    pub humidity_deviation: f64,
}

impl ComfortAssessment {
    pub fn assess(state: &IndoorState, setpoints: &ComfortSetpoints) -> Self {
        let humidity_band = if state.relative_humidity > setpoints.rh_high {
            HumidityBand::Humid
        } else if state.relative_humidity < setpoints.rh_low {
            HumidityBand::Dry
        } else {
            HumidityBand::Comfortable
        };

        Self {
            humidity_band,
            temperature_deviation_c: state.temperature_c - setpoints.temperature_c,
            humidity_deviation: state.relative_humidity - setpoints.relative_humidity,
        }
    }
}

/// Everything produced by one simulator run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationReport {
    /// Panel values as applied, after clamping
    pub panel: ControlPanel,
    pub inputs: PanelInputs,
    pub breakdown: UpdateBreakdown,
    pub comfort: ComfortAssessment,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trend: Option<Trend>,
}

impl SimulationReport {
    pub fn result(&self) -> IndoorState {
        self.breakdown.result
    }
}

impl fmt::Display for SimulationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let result = self.result();
        let effects = &self.breakdown.effects;

        writeln!(f, "### Indoor Conditions")?;
        writeln!(f, "Indoor Temperature: {:.2}°C", result.temperature_c)?;
        writeln!(f, "Indoor Humidity: {:.2}%", result.relative_humidity)?;
        writeln!(f)?;
        writeln!(
            f,
            "Effects: cooling {:.2}, heating {:.2}, fan {:.2}",
            effects.cooling, effects.heating, effects.fan
        )?;
        write!(
            f,
            "Comfort: {} ({:+.2}°C, {:+.2}% RH from setpoint)",
            self.comfort.humidity_band,
            self.comfort.temperature_deviation_c,
            self.comfort.humidity_deviation
        )?;

        if let Some(trend) = &self.trend {
            writeln!(f)?;
            write!(f, "Trend: {} points, flat", trend.len())?;
        }
        Ok(())
    }
}
