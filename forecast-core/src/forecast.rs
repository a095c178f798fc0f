use chrono::NaiveDateTime;
use thiserror::Error;

use crate::model::RawForecast;

/// Timestamp format used by the provider's `dt_txt` field and by our own
/// human-readable output.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One timestamped weather sample.
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastEntry {
    pub timestamp: NaiveDateTime,
    pub temperature: f64,
    pub humidity: u8,
    pub description: String,
}

/// The full forecast for one query, stored as four index-aligned
/// sequences: entry *i* across all four describes the same sample.
///
/// Fields are private and the series only grows through [`push`], so the
/// equal-length invariant holds by construction. Order matches the
/// provider's chronological delivery order.
///
/// [`push`]: ForecastSeries::push
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ForecastSeries {
    timestamps: Vec<NaiveDateTime>,
    temperatures: Vec<f64>,
    humidities: Vec<u8>,
    descriptions: Vec<String>,
}

impl ForecastSeries {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            timestamps: Vec::with_capacity(capacity),
            temperatures: Vec::with_capacity(capacity),
            humidities: Vec::with_capacity(capacity),
            descriptions: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, entry: ForecastEntry) {
        self.timestamps.push(entry.timestamp);
        self.temperatures.push(entry.temperature);
        self.humidities.push(entry.humidity);
        self.descriptions.push(entry.description);
    }

    pub fn len(&self) -> usize {
        self.timestamps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timestamps.is_empty()
    }

    pub fn timestamps(&self) -> &[NaiveDateTime] {
        &self.timestamps
    }

    pub fn temperatures(&self) -> &[f64] {
        &self.temperatures
    }

    pub fn humidities(&self) -> &[u8] {
        &self.humidities
    }

    pub fn descriptions(&self) -> &[String] {
        &self.descriptions
    }

    /// Iterate the samples in delivery order, borrowing from the series.
    pub fn entries(&self) -> impl Iterator<Item = EntryRef<'_>> {
        (0..self.len()).map(|i| EntryRef {
            timestamp: self.timestamps[i],
            temperature: self.temperatures[i],
            humidity: self.humidities[i],
            description: &self.descriptions[i],
        })
    }
}

/// Borrowed view of one sample, yielded by [`ForecastSeries::entries`].
#[derive(Debug, Clone, Copy)]
pub struct EntryRef<'a> {
    pub timestamp: NaiveDateTime,
    pub temperature: f64,
    pub humidity: u8,
    pub description: &'a str,
}

/// Why a raw forecast could not be turned into a series.
///
/// One malformed entry aborts the whole parse; there is no per-entry
/// recovery, so downstream consumers never see a partially valid series.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("forecast entry {index} is missing field `{field}`")]
    MissingField { index: usize, field: &'static str },

    #[error("forecast entry {index} has an unparsable timestamp `{value}`")]
    BadTimestamp {
        index: usize,
        value: String,
        #[source]
        source: chrono::ParseError,
    },
}

/// Turn the raw provider payload into four aligned sequences.
///
/// A missing `list` (or an empty one) yields an empty series, not an
/// error: "no samples" is a valid forecast.
pub fn parse_forecast(raw: &RawForecast) -> Result<ForecastSeries, ParseError> {
    let mut series = ForecastSeries::with_capacity(raw.list.len());

    for (index, entry) in raw.list.iter().enumerate() {
        let dt_txt = entry
            .dt_txt
            .as_deref()
            .ok_or(ParseError::MissingField { index, field: "dt_txt" })?;

        let timestamp = NaiveDateTime::parse_from_str(dt_txt, TIMESTAMP_FORMAT).map_err(
            |source| ParseError::BadTimestamp {
                index,
                value: dt_txt.to_string(),
                source,
            },
        )?;

        let main = entry
            .main
            .as_ref()
            .ok_or(ParseError::MissingField { index, field: "main" })?;

        let temperature = main
            .temp
            .ok_or(ParseError::MissingField { index, field: "main.temp" })?;

        let humidity = main
            .humidity
            .ok_or(ParseError::MissingField { index, field: "main.humidity" })?;

        let description = entry
            .weather
            .first()
            .and_then(|w| w.description.as_deref())
            .ok_or(ParseError::MissingField { index, field: "weather[0].description" })?;

        series.push(ForecastEntry {
            timestamp,
            temperature,
            humidity,
            description: description.to_string(),
        });
    }

    Ok(series)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw_from_json(json: &str) -> RawForecast {
        serde_json::from_str(json).expect("test payload should decode")
    }

    fn two_entry_payload() -> RawForecast {
        raw_from_json(
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
    }

    #[test]
    fn parses_aligned_sequences_in_input_order() {
        let series = parse_forecast(&two_entry_payload()).unwrap();

        assert_eq!(series.len(), 2);
        assert_eq!(series.timestamps().len(), 2);
        assert_eq!(series.temperatures().len(), 2);
        assert_eq!(series.humidities().len(), 2);
        assert_eq!(series.descriptions().len(), 2);

        assert_eq!(
            series.timestamps()[0].format(TIMESTAMP_FORMAT).to_string(),
            "2026-08-27 12:00:00"
        );
        assert_eq!(series.temperatures()[0], 21.4);
        assert_eq!(series.humidities()[0], 56);
        assert_eq!(series.descriptions()[0], "clear sky");

        assert_eq!(series.temperatures()[1], 23.1);
        assert_eq!(series.descriptions()[1], "few clouds");
    }

    #[test]
    fn empty_list_yields_empty_series() {
        let series = parse_forecast(&raw_from_json(r#"{"list": []}"#)).unwrap();
        assert!(series.is_empty());
    }

    #[test]
    fn missing_list_yields_empty_series() {
        let series = parse_forecast(&raw_from_json(r#"{}"#)).unwrap();
        assert!(series.is_empty());
    }

    #[test]
    fn missing_temperature_aborts_the_parse() {
        let raw = raw_from_json(
            r#"{
                "list": [
                    {
                        "dt_txt": "2026-08-27 12:00:00",
                        "main": {"humidity": 56},
                        "weather": [{"description": "clear sky"}]
                    }
                ]
            }"#,
        );

        let err = parse_forecast(&raw).unwrap_err();
        assert!(matches!(
            err,
            ParseError::MissingField { index: 0, field: "main.temp" }
        ));
    }

    #[test]
    fn missing_description_aborts_the_parse() {
        let raw = raw_from_json(
            r#"{
                "list": [
                    {
                        "dt_txt": "2026-08-27 12:00:00",
                        "main": {"temp": 21.4, "humidity": 56},
                        "weather": []
                    }
                ]
            }"#,
        );

        let err = parse_forecast(&raw).unwrap_err();
        assert!(matches!(
            err,
            ParseError::MissingField { field: "weather[0].description", .. }
        ));
    }

    #[test]
    fn bad_timestamp_reports_the_entry_index() {
        let raw = raw_from_json(
            r#"{
                "list": [
                    {
                        "dt_txt": "2026-08-27 12:00:00",
                        "main": {"temp": 21.4, "humidity": 56},
                        "weather": [{"description": "clear sky"}]
                    },
                    {
                        "dt_txt": "not a timestamp",
                        "main": {"temp": 23.1, "humidity": 48},
                        "weather": [{"description": "few clouds"}]
                    }
                ]
            }"#,
        );

        let err = parse_forecast(&raw).unwrap_err();
        match err {
            ParseError::BadTimestamp { index, value, .. } => {
                assert_eq!(index, 1);
                assert_eq!(value, "not a timestamp");
            }
            other => panic!("expected BadTimestamp, got {other:?}"),
        }
    }

    #[test]
    fn entries_iterator_matches_the_sequences() {
        let series = parse_forecast(&two_entry_payload()).unwrap();
        let entries: Vec<_> = series.entries().collect();

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].description, "clear sky");
        assert_eq!(entries[1].humidity, 48);
        assert_eq!(entries[1].temperature, 23.1);
    }
}
