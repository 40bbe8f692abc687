use std::collections::HashMap;

use chrono::{DateTime, Utc};

use models::reading::Reading;

use crate::{
    chart::ChartPoint, error::FetchError, selection::ReadingQuery, stats::DerivedStats,
    FETCH_FAILED_MESSAGE,
};

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CurrentReading {
    pub temperature: f64,
    pub humidity: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct FetchStatus {
    pub last_updated: DateTime<Utc>,
    /// Lit right after a successful refresh until [`Dashboard::clear_fresh`]
    pub fresh: bool,
    pub error: Option<String>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RefreshOutcome {
    /// A non-empty window was applied; the freshness indicator is on.
    Fresh,
    /// The provider had nothing for this selection.
    Empty,
    /// Nothing changed except the error message.
    Failed,
}

/// Everything the view renders, rebuilt from each fetched window.
///
/// Charted series are cached per sensor so switching back to a sensor shows
/// its last window until the new fetch lands. Current reading and stats are
/// not per sensor: they always belong to the last applied response.
#[derive(Clone, Debug)]
pub struct Dashboard {
    series: HashMap<String, Vec<ChartPoint>>,
    current: Option<CurrentReading>,
    stats: DerivedStats,
    status: FetchStatus,
}

impl Dashboard {
    pub fn new(started: DateTime<Utc>) -> Self {
        Dashboard {
            series: HashMap::new(),
            current: None,
            stats: DerivedStats::default(),
            status: FetchStatus {
                last_updated: started,
                fresh: false,
                error: None,
            },
        }
    }

    /// Folds the result of one fetch into the view state.
    ///
    /// `window` is newest first, as the provider returns it. A failure keeps
    /// every previously displayed value and leaves `last_updated` alone.
    pub fn apply(
        &mut self,
        query: &ReadingQuery,
        window: Result<Vec<Reading>, FetchError>,
        now: DateTime<Utc>,
    ) -> RefreshOutcome {
        let sensor_id = query.sensor_id.as_str();
        let window = match window {
            Ok(window) => window,
            Err(err) => {
                tracing::warn!(sensor_id, "error fetching sensor data: {err}");
                self.status.error = Some(FETCH_FAILED_MESSAGE.into());
                return RefreshOutcome::Failed;
            }
        };

        let outcome = match window.first() {
            Some(latest) => {
                self.current = Some(CurrentReading {
                    temperature: latest.temperature,
                    humidity: latest.humidity,
                });
                self.stats = DerivedStats::compute(&window);

                let chronological = window.iter().rev().map(ChartPoint::from_reading).collect();
                self.series.insert(sensor_id.into(), chronological);
                self.status.fresh = true;

                tracing::debug!(sensor_id, readings = window.len(), "applied window");
                RefreshOutcome::Fresh
            }
            None => {
                self.current = None;
                self.stats = DerivedStats::default();
                self.series.insert(sensor_id.into(), Vec::new());

                tracing::debug!(sensor_id, "no readings for selection");
                RefreshOutcome::Empty
            }
        };

        self.status.last_updated = now;
        self.status.error = None;
        outcome
    }

    pub fn clear_fresh(&mut self) {
        self.status.fresh = false;
    }

    /// Chronological points for `sensor_id`, empty if never fetched.
    pub fn series(&self, sensor_id: &str) -> &[ChartPoint] {
        self.series.get(sensor_id).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn has_series(&self, sensor_id: &str) -> bool {
        self.series.contains_key(sensor_id)
    }

    pub fn current(&self) -> Option<CurrentReading> {
        self.current
    }

    pub fn stats(&self) -> &DerivedStats {
        &self.stats
    }

    pub fn status(&self) -> &FetchStatus {
        &self.status
    }

    pub fn latest_temperature_label(&self) -> String {
        match self.current {
            Some(current) => current.temperature.to_string(),
            None => "N/A".into(),
        }
    }

    pub fn latest_humidity_label(&self) -> String {
        match self.current {
            Some(current) => current.humidity.to_string(),
            None => "N/A".into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;
    use crate::selection::Selection;

    fn reading(minute: u32, temperature: f64, humidity: f64) -> Reading {
        let time = Utc.with_ymd_and_hms(2024, 5, 1, 12, minute, 0).unwrap();
        Reading::new("temp_01", time, temperature, humidity)
    }

    fn started() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 11, 0, 0).unwrap()
    }

    #[test]
    fn window_is_reversed_for_charting() {
        let query = Selection::default().query();
        let mut dashboard = Dashboard::new(started());
        let now = Utc.with_ymd_and_hms(2024, 5, 1, 12, 5, 0).unwrap();

        let window = vec![reading(2, 20.0, 60.0), reading(1, 22.0, 55.0), reading(0, 18.0, 62.0)];
        let outcome = dashboard.apply(&query, Ok(window), now);

        assert_eq!(outcome, RefreshOutcome::Fresh);
        assert_eq!(dashboard.latest_temperature_label(), "20");
        assert_eq!(dashboard.latest_humidity_label(), "60");
        let temps: Vec<f64> = dashboard.series("temp_01").iter().map(|p| p.temperature).collect();
        assert_eq!(temps, [18.0, 22.0, 20.0]);
        assert_eq!(dashboard.status().last_updated, now);
        assert!(dashboard.status().fresh);

        dashboard.clear_fresh();
        assert!(!dashboard.status().fresh);
    }

    #[test]
    fn nothing_fetched_yet() {
        let dashboard = Dashboard::new(started());

        assert!(dashboard.series("temp_02").is_empty());
        assert!(!dashboard.has_series("temp_02"));
        assert_eq!(dashboard.latest_temperature_label(), "N/A");
        assert!(dashboard.stats().is_placeholder());
        assert_eq!(dashboard.status().last_updated, started());
        assert_eq!(dashboard.status().error, None);
    }
}
