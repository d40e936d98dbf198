use serde::{Deserialize, Serialize};

use super::constants::ModelConstants;
use super::state::{ActuatorSettings, IndoorState, OutdoorState};

/// A model producing the next indoor state from one set of readings.
pub trait ClimateModel: Send + Sync {
    fn update(
        &self,
        indoor: IndoorState,
        outdoor: OutdoorState,
        settings: ActuatorSettings,
    ) -> IndoorState;

    fn name(&self) -> &str;
}

/// Raw effect terms of a single update, before they are applied
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Effects {
    pub cooling: f64,
    /// Negative whenever the hot valve is open and the zone is below the hot
    /// coil temperature. It is subtracted, so the net contribution is warming.
    pub heating: f64,
    pub fan: f64,
}

/// Everything one update computed
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UpdateBreakdown {
    pub effects: Effects,
    /// State after the effect terms, before the hard limits
    pub unclamped: IndoorState,
    pub result: IndoorState,
}

/// First-order heuristic fan coil unit.
///
/// Stateless: each call depends only on its arguments and the constants.
#[derive(Debug, Clone, Default)]
pub struct FanCoilUnit {
    constants: ModelConstants,
}

impl FanCoilUnit {
    pub fn new(constants: ModelConstants) -> Self {
        Self { constants }
    }

    pub fn effects(&self, indoor: &IndoorState, settings: &ActuatorSettings) -> Effects {
        let k = &self.constants;
        Effects {
            cooling: settings.cold_valve
                * (k.cold_coil_temp_c - indoor.temperature_c)
                * k.cooling_coefficient,
            heating: settings.hot_valve
                * (indoor.temperature_c - k.hot_coil_temp_c)
                * k.heating_coefficient,
            fan: settings.fan_speed * k.fan_coefficient,
        }
    }

    pub fn evaluate(
        &self,
        indoor: IndoorState,
        outdoor: OutdoorState,
        settings: ActuatorSettings,
    ) -> UpdateBreakdown {
        let k = &self.constants;
        let effects = self.effects(&indoor, &settings);

        let temperature = indoor.temperature_c + effects.cooling - effects.heating + effects.fan;

        // The two coil branches are independent; both may apply.
        let mut humidity = indoor.relative_humidity;
        if effects.cooling > 0.0 {
            humidity -= effects.cooling * k.dehumidify_coefficient;
        }
        if effects.heating > 0.0 {
            humidity += effects.heating * k.humidify_coefficient;
        }

        if settings.oa_damper > 0.0 {
            let shift = settings.oa_damper * k.outdoor_air_coefficient;
            if outdoor.relative_humidity < humidity {
                humidity -= shift;
            } else if outdoor.relative_humidity > humidity {
                humidity += shift;
            }
        }

        let unclamped = IndoorState::new(temperature, humidity);
        let result = IndoorState::new(
            k.temperature_limits.bound(temperature),
            k.humidity_limits.bound(humidity),
        );

        tracing::trace!(
            cooling = effects.cooling,
            heating = effects.heating,
            fan = effects.fan,
            temperature_c = result.temperature_c,
            relative_humidity = result.relative_humidity,
            "fan coil update"
        );

        UpdateBreakdown {
            effects,
            unclamped,
            result,
        }
    }
}

impl ClimateModel for FanCoilUnit {
    fn update(
        &self,
        indoor: IndoorState,
        outdoor: OutdoorState,
        settings: ActuatorSettings,
    ) -> IndoorState {
        self.evaluate(indoor, outdoor, settings).result
    }

    fn name(&self) -> &str {
        "Fan Coil Unit (first-order heuristic)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::state::Range;
    use rstest::rstest;

    const EPS: f64 = 1e-9;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < EPS
    }

    #[test]
    fn test_worked_scenario() {
        let fcu = FanCoilUnit::default();
        let breakdown = fcu.evaluate(
            IndoorState::new(24.0, 50.0),
            OutdoorState::new(20.0, 50.0),
            ActuatorSettings::new(0.5, 0.5, 0.5, 0.5),
        );

        assert!(close(breakdown.effects.cooling, -0.8));
        assert!(close(breakdown.effects.heating, -1.55));
        assert!(close(breakdown.effects.fan, 0.25));
        assert!(close(breakdown.result.temperature_c, 25.0));
        assert_eq!(breakdown.result.relative_humidity, 50.0);
    }

    #[test]
    fn test_heating_term_keeps_its_sign() {
        let fcu = FanCoilUnit::default();
        let effects = fcu.effects(
            &IndoorState::new(20.0, 50.0),
            &ActuatorSettings::new(0.1, 0.0, 1.0, 0.0),
        );
        // 1.0 * (20 - 55) * 0.1
        assert!(close(effects.heating, -3.5));
        assert_eq!(effects.cooling, 0.0);
    }

    #[test]
    fn test_hot_valve_raises_temperature() {
        let fcu = FanCoilUnit::default();
        let indoor = IndoorState::new(19.0, 50.0);
        let outdoor = OutdoorState::new(0.0, 50.0);

        let closed = fcu.update(indoor, outdoor, ActuatorSettings::new(0.1, 0.0, 0.0, 0.0));
        let open = fcu.update(indoor, outdoor, ActuatorSettings::new(0.1, 0.0, 0.2, 0.0));
        assert!(open.temperature_c > closed.temperature_c);
        // Humidification never fires below the hot coil temperature
        assert_eq!(open.relative_humidity, 50.0);
    }

    #[rstest]
    #[case(18.0)]
    #[case(22.0)]
    #[case(25.9)]
    fn test_zero_actuator_idempotence(#[case] temperature: f64) {
        let fcu = FanCoilUnit::default();
        let result = fcu.update(
            IndoorState::new(temperature, 45.0),
            OutdoorState::new(30.0, 80.0),
            ActuatorSettings::idle(),
        );
        assert!(close(result.temperature_c, (temperature + 0.05).clamp(18.0, 26.0)));
        assert_eq!(result.relative_humidity, 45.0);
    }

    #[rstest]
    #[case(40.0, 49.9)]
    #[case(60.0, 50.1)]
    #[case(50.0, 50.0)]
    fn test_outdoor_air_branch(#[case] outdoor_rh: f64, #[case] expected: f64) {
        let fcu = FanCoilUnit::default();
        let result = fcu.update(
            IndoorState::new(22.0, 50.0),
            OutdoorState::new(20.0, outdoor_rh),
            ActuatorSettings::new(0.1, 0.0, 0.0, 0.5),
        );
        assert!(close(result.relative_humidity, expected));
    }

    #[test]
    fn test_closed_damper_ignores_outdoor_air() {
        let fcu = FanCoilUnit::default();
        let result = fcu.update(
            IndoorState::new(22.0, 50.0),
            OutdoorState::new(20.0, 80.0),
            ActuatorSettings::new(0.1, 0.0, 0.0, 0.0),
        );
        assert_eq!(result.relative_humidity, 50.0);
    }

    #[test]
    fn test_cooling_dehumidifies_below_coil_temperature() {
        // Only reachable with a zone colder than the cold coil
        let fcu = FanCoilUnit::default();
        let breakdown = fcu.evaluate(
            IndoorState::new(4.0, 50.0),
            OutdoorState::new(0.0, 50.0),
            ActuatorSettings::new(0.1, 1.0, 0.0, 0.0),
        );
        // 1.0 * (8 - 4) * 0.1
        assert!(close(breakdown.effects.cooling, 0.4));
        assert!(close(breakdown.unclamped.relative_humidity, 49.96));
        assert_eq!(breakdown.result.temperature_c, 18.0);
    }

    #[test]
    fn test_output_clamped_to_limits() {
        let fcu = FanCoilUnit::default();
        let result = fcu.update(
            IndoorState::new(26.0, 70.0),
            OutdoorState::new(40.0, 80.0),
            ActuatorSettings::new(1.0, 0.0, 1.0, 1.0),
        );
        assert_eq!(result, IndoorState::new(26.0, 70.0));
    }

    #[test]
    fn test_nan_input_stays_within_limits() {
        let fcu = FanCoilUnit::default();
        let result = fcu.update(
            IndoorState::new(f64::NAN, f64::NAN),
            OutdoorState::new(20.0, 50.0),
            ActuatorSettings::new(0.5, 0.5, 0.5, 0.5),
        );
        assert_eq!(result, IndoorState::new(18.0, 30.0));
    }

    #[test]
    fn test_heating_humidifies_above_hot_coil() {
        let fcu = FanCoilUnit::default();
        let breakdown = fcu.evaluate(
            IndoorState::new(60.0, 50.0),
            OutdoorState::new(20.0, 50.0),
            ActuatorSettings::new(0.1, 0.0, 1.0, 0.0),
        );
        // 1.0 * (60 - 55) * 0.1
        assert!(close(breakdown.effects.heating, 0.5));
        assert!(close(
            breakdown.unclamped.relative_humidity,
            50.0 + breakdown.effects.heating * 0.05
        ));
        assert!(close(breakdown.unclamped.relative_humidity, 50.025));
    }

    #[test]
    fn test_cooling_and_heating_humidity_both_apply() {
        let constants = ModelConstants {
            cold_coil_temp_c: 30.0,
            hot_coil_temp_c: 10.0,
            ..Default::default()
        };
        let fcu = FanCoilUnit::new(constants);
        let breakdown = fcu.evaluate(
            IndoorState::new(20.0, 50.0),
            OutdoorState::new(20.0, 50.0),
            ActuatorSettings::new(0.1, 1.0, 1.0, 0.0),
        );

        assert!(close(breakdown.effects.cooling, 1.0));
        assert!(close(breakdown.effects.heating, 1.0));
        // 50 - 1.0 * 0.1 + 1.0 * 0.05
        assert!(close(breakdown.unclamped.relative_humidity, 49.95));
        assert!(close(breakdown.result.relative_humidity, 49.95));
    }

    #[test]
    fn test_alternative_constants() {
        let constants = ModelConstants {
            fan_coefficient: 0.0,
            temperature_limits: Range::new(0.0, 100.0),
            ..Default::default()
        };
        let fcu = FanCoilUnit::new(constants);
        let result = fcu.update(
            IndoorState::new(30.0, 50.0),
            OutdoorState::new(20.0, 50.0),
            ActuatorSettings::new(1.0, 0.0, 0.0, 0.0),
        );
        assert_eq!(result.temperature_c, 30.0);
    }

    #[test]
    fn test_model_name() {
        let model: Box<dyn ClimateModel> = Box::new(FanCoilUnit::default());
        assert!(model.name().contains("Fan Coil"));
    }
}
