use serde::Deserialize;

use crate::config::Units;

/// One forecast query: the location and the unit system the provider
/// should apply to temperatures.
#[derive(Debug, Clone)]
pub struct ForecastRequest {
    pub city: String,
    pub units: Units,
}

/// Raw forecast payload as delivered by the provider.
///
/// Shape only: field *presence* is checked by the parser, not here, so a
/// provider response with holes in it still decodes and fails later with
/// an entry-indexed error.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawForecast {
    #[serde(default)]
    pub list: Vec<RawForecastEntry>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawForecastEntry {
    /// Sample timestamp, `YYYY-MM-DD HH:MM:SS`, source-local.
    pub dt_txt: Option<String>,
    pub main: Option<RawMain>,
    #[serde(default)]
    pub weather: Vec<RawWeather>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawMain {
    pub temp: Option<f64>,
    pub humidity: Option<u8>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawWeather {
    pub description: Option<String>,
}
