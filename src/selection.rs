use std::{fmt, str::FromStr};

use chrono::NaiveDate;

use models::sensor;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            _ => Err(()),
        }
    }
}

/// How many of the newest readings to ask for.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum EntryLimit {
    Five,
    Ten,
    #[default]
    Fifteen,
    Twenty,
}

impl EntryLimit {
    pub const ALL: [EntryLimit; 4] = [
        EntryLimit::Five,
        EntryLimit::Ten,
        EntryLimit::Fifteen,
        EntryLimit::Twenty,
    ];

    pub fn count(self) -> u32 {
        match self {
            EntryLimit::Five => 5,
            EntryLimit::Ten => 10,
            EntryLimit::Fifteen => 15,
            EntryLimit::Twenty => 20,
        }
    }

    pub fn from_count(count: u32) -> Option<EntryLimit> {
        EntryLimit::ALL.into_iter().find(|limit| limit.count() == count)
    }
}

impl fmt::Display for EntryLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Latest {}", self.count())
    }
}

impl FromStr for EntryLimit {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse()
            .ok()
            .and_then(EntryLimit::from_count)
            .ok_or(())
    }
}

/// Value of a `<input type="date">`: empty means no filter.
pub fn parse_date_input(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

/// The part of the UI state that decides which window gets fetched.
///
/// Every `select_*` returns whether anything changed; a change is what
/// triggers a refetch and re-arms the refresh timer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Selection {
    pub sensor: String,
    pub limit: EntryLimit,
    pub date: Option<NaiveDate>,
}

impl Default for Selection {
    fn default() -> Self {
        Selection {
            sensor: sensor::default_sensor().into(),
            limit: EntryLimit::default(),
            date: None,
        }
    }
}

impl Selection {
    pub fn select_sensor(&mut self, sensor_id: &str) -> bool {
        if !sensor::is_known(sensor_id) {
            tracing::warn!(sensor_id, "ignoring unknown sensor");
            return false;
        }
        if self.sensor == sensor_id {
            return false;
        }
        self.sensor = sensor_id.into();
        true
    }

    pub fn select_limit(&mut self, limit: EntryLimit) -> bool {
        std::mem::replace(&mut self.limit, limit) != limit
    }

    pub fn select_date(&mut self, date: Option<NaiveDate>) -> bool {
        std::mem::replace(&mut self.date, date) != date
    }

    pub fn clear_date(&mut self) -> bool {
        self.select_date(None)
    }

    pub fn query(&self) -> ReadingQuery {
        ReadingQuery {
            sensor_id: self.sensor.clone(),
            limit: self.limit,
            date: self.date,
        }
    }
}

/// One request for a window of readings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReadingQuery {
    pub sensor_id: String,
    pub limit: EntryLimit,
    pub date: Option<NaiveDate>,
}

impl ReadingQuery {
    pub fn url(&self, endpoint: &str) -> String {
        let ReadingQuery { sensor_id, limit, date } = self;
        let limit = limit.count();
        match date {
            Some(date) => format!("{endpoint}?sensor_id={sensor_id}&limit={limit}&date={date}"),
            None => format!("{endpoint}?sensor_id={sensor_id}&limit={limit}"),
        }
    }
}
