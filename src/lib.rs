//! Platform-neutral core of the sensor dashboard.
//!
//! Everything here runs the same on the browser event loop and natively, so the
//! wasm frontend only has to wire signals, timers and canvases around it.

use std::time::Duration;

pub mod chart;
pub mod dashboard;
pub mod error;
pub mod prefs;
pub mod selection;
pub mod source;
pub mod stats;

pub use self::dashboard::{Dashboard, RefreshOutcome};
pub use self::error::FetchError;
pub use self::selection::{EntryLimit, ReadingQuery, Selection, Theme};
pub use models::reading::Reading;

pub const API_ENDPOINT: &str = match option_env!("SENSOR_API_ENDPOINT") {
    Some(endpoint) => endpoint,
    None => "https://rcbe8w2aff.execute-api.us-east-1.amazonaws.com/data",
};

pub const REFRESH_INTERVAL: Duration = Duration::from_secs(30 * 60);
/// How long the activity dot stays lit after a successful refresh
pub const FRESH_INDICATOR: Duration = Duration::from_secs(2);

pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch data. Check API/Lambda logs.";
