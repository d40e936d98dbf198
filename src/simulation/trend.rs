//! Flat display trend.
//!
//! Repeats a single update result across evenly spaced time stamps so a chart
//! has something to draw. No dynamics are modelled here.

use serde::{Deserialize, Serialize};

use super::state::IndoorState;
use crate::error::SimError;

/// Upper bound on `TrendConfig::points`
pub const MAX_TREND_POINTS: usize = 10_000;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrendConfig {
    /// Number of samples, end points included
    pub points: usize,
    /// Time of the last sample (minutes)
    pub horizon_minutes: f64,
}

impl Default for TrendConfig {
    fn default() -> Self {
        Self {
            points: 100,
            horizon_minutes: 10.0,
        }
    }
}

impl TrendConfig {
    pub fn validate(&self) -> Result<(), SimError> {
        if !self.horizon_minutes.is_finite() || self.horizon_minutes < 0.0 {
            return Err(SimError::InvalidConfig(format!(
                "trend.horizon_minutes must be finite and non-negative, got {}",
                self.horizon_minutes
            )));
        }

        if self.points > MAX_TREND_POINTS {
            return Err(SimError::InvalidConfig(format!(
                "trend.points must be at most {MAX_TREND_POINTS}, got {}",
                self.points
            )));
        }

        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrendPoint {
    pub time_min: f64,
    pub temperature_c: f64,
    pub relative_humidity: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trend {
    pub points: Vec<TrendPoint>,
}

impl Trend {
    pub fn flat(state: IndoorState, config: &TrendConfig) -> Self {
        let points = time_steps(config.points, config.horizon_minutes)
            .into_iter()
            .map(|time_min| TrendPoint {
                time_min,
                temperature_c: state.temperature_c,
                relative_humidity: state.relative_humidity,
            })
            .collect();
        Self { points }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// CSV with a header row, one sample per line
    pub fn to_csv(&self) -> String {
        let mut out = String::from("time_min,temperature_c,relative_humidity\n");
        for p in &self.points {
            out.push_str(&format!(
                "{:.4},{:.2},{:.2}\n",
                p.time_min, p.temperature_c, p.relative_humidity
            ));
        }
        out
    }
}

/// `count` evenly spaced values from 0 to `horizon`, both inclusive
fn time_steps(count: usize, horizon: f64) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![0.0],
        n => {
            let last = (n - 1) as f64;
            (0..n).map(|i| horizon * i as f64 / last).collect()
        }
    }
}
