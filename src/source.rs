use models::reading::Reading;

use crate::{error::FetchErrorExt, selection::ReadingQuery, FetchError};

/// Where windows of readings come from.
// Futures only ever run on the single-threaded wasm executor, so no `Send` bound.
#[allow(async_fn_in_trait)]
pub trait ReadingSource {
    /// Newest reading first. `Ok(vec![])` means "no data", never an error.
    async fn fetch(&self, query: &ReadingQuery) -> Result<Vec<Reading>, FetchError>;
}

/// The API Gateway endpoint, read with a plain GET.
#[derive(Clone)]
pub struct HttpReadingSource {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpReadingSource {
    pub fn new(endpoint: impl Into<String>) -> Self {
        HttpReadingSource {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }
}

impl Default for HttpReadingSource {
    fn default() -> Self {
        HttpReadingSource::new(crate::API_ENDPOINT)
    }
}

impl ReadingSource for HttpReadingSource {
    async fn fetch(&self, query: &ReadingQuery) -> Result<Vec<Reading>, FetchError> {
        let url = query.url(&self.endpoint);
        tracing::debug!(%url, "fetching readings");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .fetch_err()?;
        let body = response.text().await.fetch_err()?;

        Ok(parse_window(&body))
    }
}

/// Anything that isn't a JSON array of readings counts as an empty window.
pub fn parse_window(body: &str) -> Vec<Reading> {
    match serde_json::from_str(body) {
        Ok(window) => window,
        Err(err) => {
            tracing::warn!("treating malformed response as no data: {err}");
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_newest_first_window() {
        let body = r#"[
            {"sensor_id":"temp_01","timestamp":"2024-05-01T12:30:00Z","temperature":20.4,"humidity":61},
            {"sensor_id":"temp_01","timestamp":"2024-05-01T12:00:00Z","temperature":21.0,"humidity":60}
        ]"#;
        let window = parse_window(body);

        assert_eq!(window.len(), 2);
        assert_eq!(window[0].temperature, 20.4);
        assert_eq!(window[1].humidity, 60.0);
    }

    #[test]
    fn malformed_is_no_data() {
        assert!(parse_window("").is_empty());
        assert!(parse_window("{\"message\":\"Internal server error\"}").is_empty());
        assert!(parse_window("[{\"temperature\":\"warm\"}]").is_empty());
        assert!(parse_window("[]").is_empty());
    }
}
