use anyhow::{Result, bail};
use clap::Parser;
use std::path::{Path, PathBuf};

use forecast_core::{
    Config, ConfigState, ForecastProvider, ForecastRequest, ForecastSeries, parse_forecast,
    provider_from_config,
};

use crate::dashboard;

/// Text dump written next to wherever the program is run from, replaced
/// on every run.
pub const FORECAST_DATA_FILE: &str = "forecast_data.txt";

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "forecast", version, about = "Interactive weather forecast dashboard")]
pub struct Cli {
    /// Path to the JSON configuration file. Defaults to the platform
    /// config directory.
    #[arg(long)]
    pub config: Option<PathBuf>,
}

/// Entry point for the `forecast` binary: load config, run the pipeline
/// once, then hand the series to the dashboard loop.
pub async fn run() -> Result<()> {
    let cli = Cli::parse();

    let config_path = match cli.config {
        Some(path) => path,
        None => Config::default_path()?,
    };

    let config = match Config::load_or_init(&config_path)? {
        ConfigState::Ready(config) => config,
        ConfigState::Created(path) => {
            println!("Created a new configuration file at {}.", path.display());
            println!("Fill in your API key, city and units, then run `forecast` again.");
            bail!("configuration is not set up yet");
        }
    };

    let provider = provider_from_config(&config);
    let series = run_pipeline(provider.as_ref(), &config, Path::new(FORECAST_DATA_FILE)).await?;

    println!("Fetched {} forecast samples for {}.", series.len(), config.city);
    println!("Saved the forecast to {FORECAST_DATA_FILE}.");

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    dashboard::run(stdin.lock(), stdout.lock(), &series, &config.city)
}

/// Fetch, parse and persist one forecast. Strictly linear and one-shot:
/// no step re-invokes an upstream step, and the series is handed on by
/// value.
pub async fn run_pipeline(
    provider: &dyn ForecastProvider,
    config: &Config,
    data_path: &Path,
) -> Result<ForecastSeries> {
    let request = ForecastRequest {
        city: config.city.clone(),
        units: config.units,
    };

    let raw = provider.fetch_forecast(&request).await?;
    let series = parse_forecast(&raw)?;
    forecast_core::export::save_forecast_to_file(&series, config.units, data_path)?;

    Ok(series)
}
