//! Riskcast CLI — analyze and simulate commands.
//!
//! Commands:
//! - `analyze` — full risk/reward report for a position (JSON on stdout)
//! - `simulate` — Monte Carlo target-vs-stop probability only
//!
//! Input is a bar file: either a provider-payload JSON (the upstream
//! date-keyed shape) or a `date,close,volume` CSV. The engine itself never
//! reads files; this binary is the demo surface around it.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use riskcast_core::data::{normalize_daily, RawDailyPayload};
use riskcast_core::domain::{Bar, PriceSeries};
use riskcast_engine::chart::RadarChartSpec;
use riskcast_engine::report::{compute_risk_reward, AnalysisParams};
use riskcast_engine::simulation::estimate_success_probability;
use riskcast_engine::EngineConfig;

#[derive(Parser)]
#[command(
    name = "riskcast",
    about = "Riskcast CLI — single-position risk/reward analysis"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the full risk/reward report for a position.
    Analyze {
        /// Bar file: provider-payload JSON or date,close,volume CSV.
        #[arg(long)]
        input: PathBuf,

        /// Target sell price.
        #[arg(long)]
        target: f64,

        /// Stop-loss price.
        #[arg(long)]
        stop: f64,

        /// Intended order size in shares (affects liquidity risk).
        #[arg(long)]
        volume: Option<f64>,

        /// Symbol label for CSV inputs (JSON payloads carry their own).
        #[arg(long)]
        symbol: Option<String>,

        /// TOML file with engine config overrides.
        #[arg(long)]
        config: Option<PathBuf>,

        /// Override the simulation seed.
        #[arg(long)]
        seed: Option<u64>,

        /// Override the simulation trial count.
        #[arg(long)]
        trials: Option<usize>,

        /// Also emit the radar chart composition under a "chart" key.
        #[arg(long, default_value_t = false)]
        chart: bool,

        /// Pretty-print the JSON output.
        #[arg(long, default_value_t = false)]
        pretty: bool,
    },
    /// Estimate only the probability of hitting the target before the stop.
    Simulate {
        /// Bar file: provider-payload JSON or date,close,volume CSV.
        #[arg(long)]
        input: PathBuf,

        /// Target sell price.
        #[arg(long)]
        target: f64,

        /// Stop-loss price.
        #[arg(long)]
        stop: f64,

        /// Entry price. Defaults to the last close.
        #[arg(long)]
        entry: Option<f64>,

        /// Symbol label for CSV inputs.
        #[arg(long)]
        symbol: Option<String>,

        /// TOML file with engine config overrides.
        #[arg(long)]
        config: Option<PathBuf>,

        /// Override the simulation seed.
        #[arg(long)]
        seed: Option<u64>,

        /// Override the simulation trial count.
        #[arg(long)]
        trials: Option<usize>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Analyze {
            input,
            target,
            stop,
            volume,
            symbol,
            config,
            seed,
            trials,
            chart,
            pretty,
        } => {
            let series = load_series(&input, symbol.as_deref())?;
            let engine_config = load_engine_config(config.as_deref(), seed, trials)?;
            let params = AnalysisParams {
                target_price: target,
                stop_loss: stop,
                user_volume: volume,
            };

            let report = compute_risk_reward(&series, &params, &engine_config)
                .with_context(|| format!("analysis failed for {}", series.symbol()))?;

            let mut doc = serde_json::to_value(&report)?;
            if chart {
                let spec = RadarChartSpec::from_report(&report);
                doc["chart"] = serde_json::to_value(&spec)?;
            }
            print_json(&doc, pretty)?;
        }
        Commands::Simulate {
            input,
            target,
            stop,
            entry,
            symbol,
            config,
            seed,
            trials,
        } => {
            let series = load_series(&input, symbol.as_deref())?;
            let engine_config = load_engine_config(config.as_deref(), seed, trials)?;
            let entry_price = entry.unwrap_or_else(|| series.last_close());

            let result = estimate_success_probability(
                &series,
                entry_price,
                target,
                stop,
                &engine_config.simulation,
            );
            print_json(&serde_json::to_value(&result)?, true)?;
        }
    }
    Ok(())
}

/// Load a bar file by extension: `.json` for provider payloads, `.csv` for
/// `date,close,volume` rows.
fn load_series(path: &Path, symbol: Option<&str>) -> Result<PriceSeries> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or_default()
        .to_ascii_lowercase();

    match extension.as_str() {
        "json" => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            let payload: RawDailyPayload = serde_json::from_str(&text)
                .with_context(|| format!("parsing provider payload {}", path.display()))?;
            Ok(normalize_daily(&payload)?)
        }
        "csv" => {
            let mut reader = csv::Reader::from_path(path)
                .with_context(|| format!("reading {}", path.display()))?;
            let mut bars = Vec::new();
            for record in reader.deserialize() {
                let bar: Bar =
                    record.with_context(|| format!("parsing CSV row in {}", path.display()))?;
                bars.push(bar);
            }
            Ok(PriceSeries::new(symbol.unwrap_or("UNKNOWN"), bars)?)
        }
        other => bail!("unsupported input format '.{other}' — expected .json or .csv"),
    }
}

/// Engine config: TOML file if given, then CLI flag overrides on top.
fn load_engine_config(
    path: Option<&Path>,
    seed: Option<u64>,
    trials: Option<usize>,
) -> Result<EngineConfig> {
    let mut config = match path {
        Some(p) => {
            let text =
                fs::read_to_string(p).with_context(|| format!("reading {}", p.display()))?;
            toml::from_str(&text).with_context(|| format!("parsing {}", p.display()))?
        }
        None => EngineConfig::default(),
    };
    if let Some(seed) = seed {
        config.simulation.seed = seed;
    }
    if let Some(trials) = trials {
        config.simulation.trial_count = trials;
    }
    Ok(config)
}

fn print_json(value: &serde_json::Value, pretty: bool) -> Result<()> {
    let text = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{text}");
    Ok(())
}
