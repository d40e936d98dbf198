use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use fcu_simulator::config::{Config, DEFAULT_CONFIG_PATH};
use fcu_simulator::panel::ControlPanel;
use fcu_simulator::report::SimulationReport;
use fcu_simulator::simulation::ClimateModel;
use fcu_simulator::simulator::{InputPolicy, Simulator};
use fcu_simulator::telemetry::init_tracing;
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
    /// Trend series only
    Csv,
}

/// Fan Coil Unit Simulator
#[derive(Parser, Debug)]
#[command(name = "fcu-sim")]
#[command(about = "Single-step fan coil unit indoor climate simulation", long_about = None)]
struct Args {
    /// Path to the TOML configuration file
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Indoor temperature (°C)
    #[arg(long, allow_negative_numbers = true)]
    indoor_temp: Option<f64>,

    /// Indoor relative humidity (%)
    #[arg(long)]
    indoor_rh: Option<f64>,

    /// Outdoor temperature (°C)
    #[arg(long, allow_negative_numbers = true)]
    outdoor_temp: Option<f64>,

    /// Outdoor relative humidity (%)
    #[arg(long)]
    outdoor_rh: Option<f64>,

    /// Fan speed (0.1 - 1.0)
    #[arg(long)]
    fan_speed: Option<f64>,

    /// Cold water valve opening (%)
    #[arg(long)]
    cold_valve: Option<u8>,

    /// Hot water valve opening (%)
    #[arg(long)]
    hot_valve: Option<u8>,

    /// Outdoor air damper opening (%)
    #[arg(long)]
    oa_damper: Option<u8>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Include the display trend series
    #[arg(long)]
    trend: bool,

    /// Reject out-of-range input instead of clamping it
    #[arg(long)]
    strict: bool,
}

impl Args {
    fn apply_to(&self, mut panel: ControlPanel) -> ControlPanel {
        if let Some(v) = self.indoor_temp {
            panel.indoor_temp_c = v;
        }
        if let Some(v) = self.indoor_rh {
            panel.indoor_rh = v;
        }
        if let Some(v) = self.outdoor_temp {
            panel.outdoor_temp_c = v;
        }
        if let Some(v) = self.outdoor_rh {
            panel.outdoor_rh = v;
        }
        if let Some(v) = self.fan_speed {
            panel.fan_speed = v;
        }
        if let Some(v) = self.cold_valve {
            panel.cold_valve_pct = v;
        }
        if let Some(v) = self.hot_valve {
            panel.hot_valve_pct = v;
        }
        if let Some(v) = self.oa_damper {
            panel.oa_damper_pct = v;
        }
        panel
    }

    fn policy(&self) -> InputPolicy {
        if self.strict {
            InputPolicy::Strict
        } else {
            InputPolicy::Clamp
        }
    }

    fn with_trend(&self) -> bool {
        self.trend || self.format == OutputFormat::Csv
    }
}

/// Report as printed on stdout for the chosen format
fn render(report: &SimulationReport, format: OutputFormat) -> Result<String> {
    let out = match format {
        OutputFormat::Text => format!("{report}\n"),
        OutputFormat::Json => format!("{}\n", serde_json::to_string_pretty(report)?),
        OutputFormat::Csv => report
            .trend
            .as_ref()
            .map(|trend| trend.to_csv())
            .unwrap_or_default(),
    };
    Ok(out)
}

fn main() -> Result<()> {
    let args = Args::parse();

    let cfg = Config::load_from(&args.config)?;
    init_tracing(&cfg.logging);
    debug!(config = ?cfg, "configuration loaded");

    let panel = args.apply_to(cfg.panel);

    let sim = Simulator::from_config(&cfg);
    info!(model = sim.model().name(), "starting simulation");

    let report = sim.run(&panel, args.policy(), args.with_trend())?;
    print!("{}", render(&report, args.format)?);

    Ok(())
}
