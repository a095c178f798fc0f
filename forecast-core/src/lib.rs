//! Core library for the `forecast` dashboard CLI.
//!
//! This crate defines:
//! - Configuration handling (API key, city, unit system)
//! - The forecast provider abstraction and its OpenWeather implementation
//! - Parsing raw forecasts into an index-aligned series
//! - The plain-text forecast export
//!
//! It is used by `forecast-cli`, but can also be reused by other binaries.

pub mod config;
pub mod export;
pub mod forecast;
pub mod model;
pub mod provider;

pub use config::{Config, ConfigState, Units};
pub use forecast::{ForecastEntry, ForecastSeries, ParseError, parse_forecast};
pub use model::{ForecastRequest, RawForecast};
pub use provider::{ForecastProvider, provider_from_config};
