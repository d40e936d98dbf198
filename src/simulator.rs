use tracing::{debug, info};

use crate::config::Config;
use crate::error::Result;
use crate::panel::ControlPanel;
use crate::report::{ComfortAssessment, ComfortSetpoints, SimulationReport};
use crate::simulation::{FanCoilUnit, Trend, TrendConfig};

/// What to do with panel values outside their slider ranges
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputPolicy {
    #[default]
    Clamp,
    Strict,
}

/// Runs one panel reading through the model and packages the outcome
#[derive(Debug, Clone)]
pub struct Simulator {
    model: FanCoilUnit,
    trend: TrendConfig,
    comfort: ComfortSetpoints,
}

impl Simulator {
    pub fn new(model: FanCoilUnit, trend: TrendConfig, comfort: ComfortSetpoints) -> Self {
        Self {
            model,
            trend,
            comfort,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(FanCoilUnit::new(config.model), config.trend, config.comfort)
    }

    pub fn model(&self) -> &FanCoilUnit {
        &self.model
    }

    pub fn run(
        &self,
        panel: &ControlPanel,
        policy: InputPolicy,
        with_trend: bool,
    ) -> Result<SimulationReport> {
        let panel = match policy {
            InputPolicy::Clamp => panel.clamped(),
            InputPolicy::Strict => panel.checked()?,
        };
        let inputs = panel.to_inputs();
        debug!(?inputs, "running fan coil update");

        let breakdown = self
            .model
            .evaluate(inputs.indoor, inputs.outdoor, inputs.settings);
        let comfort = ComfortAssessment::assess(&breakdown.result, &self.comfort);
        let trend = with_trend.then(|| Trend::flat(breakdown.result, &self.trend));

        info!(
            temperature_c = breakdown.result.temperature_c,
            relative_humidity = breakdown.result.relative_humidity,
            band = %comfort.humidity_band,
            "indoor conditions updated"
        );

        Ok(SimulationReport {
            panel,
            inputs,
            breakdown,
            comfort,
            trend,
        })
    }
}

impl Default for Simulator {
    fn default() -> Self {
        Self::new(
            FanCoilUnit::default(),
            TrendConfig::default(),
            ComfortSetpoints::default(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SimError;
    use crate::report::HumidityBand;

    #[test]
    fn test_default_panel_run() {
        let report = Simulator::default()
            .run(&ControlPanel::default(), InputPolicy::Clamp, false)
            .unwrap();

        let result = report.result();
        assert!((result.temperature_c - 25.0).abs() < 1e-9);
        assert_eq!(result.relative_humidity, 50.0);
        assert_eq!(report.comfort.humidity_band, HumidityBand::Comfortable);
        assert!(report.trend.is_none());
    }

    #[test]
    fn test_run_with_trend() {
        let report = Simulator::default()
            .run(&ControlPanel::default(), InputPolicy::Clamp, true)
            .unwrap();
        let trend = report.trend.as_ref().unwrap();
        assert_eq!(trend.len(), 100);
        assert!(trend
            .points
            .iter()
            .all(|p| p.temperature_c == report.result().temperature_c));
    }

    #[test]
    fn test_clamp_policy_records_applied_panel() {
        let panel = ControlPanel {
            indoor_temp_c: 40.0,
            ..Default::default()
        };
        let report = Simulator::default()
            .run(&panel, InputPolicy::Clamp, false)
            .unwrap();
        assert_eq!(report.panel.indoor_temp_c, 26.0);
        assert_eq!(report.inputs.indoor.temperature_c, 26.0);
    }

    #[test]
    fn test_strict_policy_rejects() {
        let panel = ControlPanel {
            indoor_temp_c: 40.0,
            ..Default::default()
        };
        let result = Simulator::default().run(&panel, InputPolicy::Strict, false);
        assert!(matches!(result, Err(SimError::InvalidInput(_))));
    }

    #[test]
    fn test_report_text() {
        let report = Simulator::default()
            .run(&ControlPanel::default(), InputPolicy::Clamp, false)
            .unwrap();
        let text = report.to_string();
        assert!(text.contains("Indoor Temperature: 25.00°C"));
        assert!(text.contains("Indoor Humidity: 50.00%"));
    }

    #[test]
    fn test_report_json() {
        let report = Simulator::default()
            .run(&ControlPanel::default(), InputPolicy::Clamp, false)
            .unwrap();
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["comfort"]["humidity_band"], "comfortable");
        assert!(json.get("trend").is_none());
        assert_eq!(json["panel"]["cold_valve_pct"], 50);
    }
}
