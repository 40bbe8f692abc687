use std::{fmt, time::Duration};

use reqwest::StatusCode;

use models::reading::Reading;

pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug)]
pub enum SendError {
    Connection(reqwest::Error),
    Timeout(reqwest::Error),
    Status(StatusCode, String),
    Other(reqwest::Error),
}

impl From<reqwest::Error> for SendError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            SendError::Timeout(err)
        } else if err.is_connect() {
            SendError::Connection(err)
        } else {
            SendError::Other(err)
        }
    }
}

impl fmt::Display for SendError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SendError::Connection(err) => write!(f, "connection error: {err}"),
            SendError::Timeout(err) => write!(f, "request timed out: {err}"),
            SendError::Status(status, body) => write!(f, "HTTP error {}: {body}", status.as_u16()),
            SendError::Other(err) => write!(f, "unexpected error: {err}"),
        }
    }
}

impl std::error::Error for SendError {}

pub fn client() -> anyhow::Result<reqwest::Client> {
    Ok(reqwest::Client::builder().timeout(REQUEST_TIMEOUT).build()?)
}

/// POSTs one reading as JSON; any non-success status is an error.
pub async fn send_reading(client: &reqwest::Client, endpoint: &str, reading: &Reading) -> Result<(), SendError> {
    let response = client.post(endpoint).json(reading).send().await?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(SendError::Status(status, body));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::net::SocketAddr;

    use chrono::Utc;
    use warp::Filter;

    use super::*;

    async fn ingest() -> SocketAddr {
        let accept = warp::path("log-data")
            .and(warp::post())
            .and(warp::body::json())
            .map(|reading: Reading| {
                assert_eq!(reading.sensor_id, "temp_01");
                warp::reply()
            });
        let reject = warp::path("broken").map(|| {
            warp::reply::with_status("Internal server error", warp::http::StatusCode::BAD_GATEWAY)
        });

        let (addr, server) = warp::serve(accept.or(reject)).bind_ephemeral(([127, 0, 0, 1], 0));
        tokio::spawn(server);
        addr
    }

    fn reading() -> Reading {
        Reading::new("temp_01", Utc::now(), 24.2, 61.0)
    }

    #[tokio::test]
    async fn posts_json() {
        let addr = ingest().await;
        let result = send_reading(&client().unwrap(), &format!("http://{addr}/log-data"), &reading()).await;

        assert!(result.is_ok(), "{result:?}");
    }

    #[tokio::test]
    async fn status_errors_keep_the_body() {
        let addr = ingest().await;
        let err = send_reading(&client().unwrap(), &format!("http://{addr}/broken"), &reading())
            .await
            .unwrap_err();

        match err {
            SendError::Status(status, body) => {
                assert_eq!(status, StatusCode::BAD_GATEWAY);
                assert_eq!(body, "Internal server error");
            }
            other => panic!("expected a status error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn refused_connection() {
        let port = std::net::TcpListener::bind("127.0.0.1:0")
            .unwrap()
            .local_addr()
            .unwrap()
            .port();
        let err = send_reading(&client().unwrap(), &format!("http://127.0.0.1:{port}/log-data"), &reading())
            .await
            .unwrap_err();

        assert!(matches!(err, SendError::Connection(_)), "{err:?}");
    }
}
