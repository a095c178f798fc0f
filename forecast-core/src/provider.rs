use async_trait::async_trait;
use std::fmt::Debug;

use crate::{
    Config,
    model::{ForecastRequest, RawForecast},
    provider::openweather::OpenWeatherProvider,
};

pub mod openweather;

/// Source of raw forecast data.
///
/// The single production implementation talks to the OpenWeather-style
/// HTTP endpoint; tests substitute their own. One call is one query,
/// there is no session state.
#[async_trait]
pub trait ForecastProvider: Send + Sync + Debug {
    async fn fetch_forecast(&self, request: &ForecastRequest) -> anyhow::Result<RawForecast>;
}

/// Construct the forecast provider for a loaded configuration.
pub fn provider_from_config(config: &Config) -> Box<dyn ForecastProvider> {
    Box::new(OpenWeatherProvider::new(config.api_key.clone()))
}
