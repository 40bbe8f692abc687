use std::{env, str::FromStr, time::Duration};

use anyhow::Context;

const DEFAULT_ENDPOINT: &str = "https://rcbe8w2aff.execute-api.us-east-1.amazonaws.com/log-data";
const DEFAULT_INTERVAL_SECS: u64 = 1800;
const DEFAULT_SENSORS: u32 = 3;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub endpoint: String,
    pub interval: Duration,
    pub sensors: u32,
}

impl Config {
    /// Reads `SENSORSIM_ENDPOINT`, `SENSORSIM_INTERVAL_SECS` and `SENSORSIM_SENSORS`.
    pub fn from_env() -> anyhow::Result<Config> {
        Config::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Config> {
        let endpoint = lookup("SENSORSIM_ENDPOINT").unwrap_or_else(|| DEFAULT_ENDPOINT.into());
        let interval = parse_or(&lookup, "SENSORSIM_INTERVAL_SECS", DEFAULT_INTERVAL_SECS)?;
        let sensors = parse_or(&lookup, "SENSORSIM_SENSORS", DEFAULT_SENSORS)?;

        if sensors == 0 {
            anyhow::bail!("SENSORSIM_SENSORS must be at least 1");
        }

        Ok(Config {
            endpoint,
            interval: Duration::from_secs(interval),
            sensors,
        })
    }
}

fn parse_or<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> anyhow::Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(value) => value
            .trim()
            .parse()
            .with_context(|| format!("invalid {key}: {value:?}")),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config(vars: &[(&str, &str)]) -> anyhow::Result<Config> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults() {
        let config = config(&[]).unwrap();
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.interval, Duration::from_secs(1800));
        assert_eq!(config.sensors, 3);
    }

    #[test]
    fn overrides() {
        let config = config(&[
            ("SENSORSIM_ENDPOINT", "http://localhost:3000/log-data"),
            ("SENSORSIM_INTERVAL_SECS", " 5 "),
            ("SENSORSIM_SENSORS", "2"),
        ])
        .unwrap();
        assert_eq!(config.endpoint, "http://localhost:3000/log-data");
        assert_eq!(config.interval, Duration::from_secs(5));
        assert_eq!(config.sensors, 2);
    }

    #[test]
    fn rejects_bad_numbers() {
        assert!(config(&[("SENSORSIM_INTERVAL_SECS", "soon")]).is_err());
        assert!(config(&[("SENSORSIM_SENSORS", "0")]).is_err());
    }
}
