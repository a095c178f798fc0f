//! Plain-text forecast export.
//!
//! The dump is meant to be read by the operator or grepped by scripts, one
//! line per sample. The target file is truncated, not appended to, so each
//! run replaces the previous dump.

use anyhow::{Context, Result};
use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::config::Units;
use crate::forecast::{ForecastSeries, TIMESTAMP_FORMAT};

/// Write one line per sample:
/// `<timestamp>, Temp: <temp><sym>, Humidity: <humidity>%, Description: <desc>`.
///
/// Descriptions are provider-controlled vocabulary, so the comma delimiter
/// is not escaped.
pub fn save_forecast_to_file(series: &ForecastSeries, units: Units, path: &Path) -> Result<()> {
    let mut file = File::create(path)
        .with_context(|| format!("Failed to create forecast file: {}", path.display()))?;

    for entry in series.entries() {
        writeln!(
            file,
            "{}, Temp: {:.1}{}, Humidity: {}%, Description: {}",
            entry.timestamp.format(TIMESTAMP_FORMAT),
            entry.temperature,
            units.temp_symbol(),
            entry.humidity,
            entry.description,
        )
        .with_context(|| format!("Failed to write forecast file: {}", path.display()))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forecast::{ForecastEntry, parse_forecast};
    use crate::model::RawForecast;
    use std::fs;
    use tempdir::TempDir;

    fn sample_series() -> ForecastSeries {
        let raw: RawForecast = serde_json::from_str(
            r#"{
                "list": [
                    {
                        "dt_txt": "2026-08-27 12:00:00",
                        "main": {"temp": 21.4, "humidity": 56},
                        "weather": [{"description": "clear sky"}]
                    },
                    {
                        "dt_txt": "2026-08-27 15:00:00",
                        "main": {"temp": 23.1, "humidity": 48},
                        "weather": [{"description": "few clouds"}]
                    }
                ]
            }"#,
        )
        .unwrap();

        parse_forecast(&raw).unwrap()
    }

    #[test]
    fn writes_one_line_per_entry_in_documented_order() {
        let dir = TempDir::new("forecast-export").unwrap();
        let path = dir.path().join("forecast_data.txt");

        save_forecast_to_file(&sample_series(), Units::Metric, &path).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 2);

        assert_eq!(
            lines[0],
            "2026-08-27 12:00:00, Temp: 21.4°C, Humidity: 56%, Description: clear sky"
        );
        assert_eq!(
            lines[1],
            "2026-08-27 15:00:00, Temp: 23.1°C, Humidity: 48%, Description: few clouds"
        );
    }

    #[test]
    fn unit_symbol_follows_the_configured_units() {
        let dir = TempDir::new("forecast-export").unwrap();
        let path = dir.path().join("forecast_data.txt");

        save_forecast_to_file(&sample_series(), Units::Imperial, &path).unwrap();
        let contents = fs::read_to_string(&path).unwrap();
        assert!(contents.contains("Temp: 21.4°F"));

        save_forecast_to_file(&sample_series(), Units::Standard, &path).unwrap();
        let contents = fs::read_to_string(&path).unwrap();
        assert!(contents.contains("Temp: 21.4K"));
    }

    #[test]
    fn overwrites_rather_than_appends() {
        let dir = TempDir::new("forecast-export").unwrap();
        let path = dir.path().join("forecast_data.txt");

        save_forecast_to_file(&sample_series(), Units::Metric, &path).unwrap();

        let mut one_entry = ForecastSeries::default();
        one_entry.push(ForecastEntry {
            timestamp: chrono::NaiveDateTime::parse_from_str(
                "2026-08-28 09:00:00",
                TIMESTAMP_FORMAT,
            )
            .unwrap(),
            temperature: 18.0,
            humidity: 70,
            description: "light rain".to_string(),
        });
        save_forecast_to_file(&one_entry, Units::Metric, &path).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(contents.lines().count(), 1);
        assert!(contents.contains("light rain"));
    }

    #[test]
    fn empty_series_produces_an_empty_file() {
        let dir = TempDir::new("forecast-export").unwrap();
        let path = dir.path().join("forecast_data.txt");

        save_forecast_to_file(&ForecastSeries::default(), Units::Metric, &path).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "");
    }
}
