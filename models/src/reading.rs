use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One timestamped sample from a sensor, as it travels over the wire.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    #[serde(default)]
    pub sensor_id: String,
    /// ISO 8601, usually UTC with a `Z` suffix
    pub timestamp: String,
    /// Degrees Celcius
    pub temperature: f64,
    /// Relative humidity in percent
    pub humidity: f64,
}

impl Reading {
    pub fn new(sensor_id: impl Into<String>, time: DateTime<Utc>, temperature: f64, humidity: f64) -> Self {
        Reading {
            sensor_id: sensor_id.into(),
            timestamp: time.to_rfc3339_opts(chrono::SecondsFormat::Micros, true),
            temperature,
            humidity,
        }
    }

    pub fn time(&self) -> Option<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(&self.timestamp)
            .ok()
            .map(|time| time.with_timezone(&Utc))
    }
}
