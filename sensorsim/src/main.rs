use chrono::Utc;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::{
    config::Config,
    generator::{generate, sensor_cycle},
    sender::{send_reading, SendError},
};

mod config;
mod generator;
mod sender;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sensorsim=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;
    info!(
        endpoint = %config.endpoint,
        interval_secs = config.interval.as_secs(),
        sensors = config.sensors,
        "Starting sensor data simulator"
    );

    tokio::select! {
        result = run_simulator(&config) => result,
        _ = tokio::signal::ctrl_c() => {
            info!("Stopping sensor data simulator");
            Ok(())
        }
    }
}

async fn run_simulator(config: &Config) -> anyhow::Result<()> {
    let client = sender::client()?;
    let mut rng = rand::thread_rng();

    for number in sensor_cycle(config.sensors) {
        let reading = generate(&mut rng, number, Utc::now());

        match send_reading(&client, &config.endpoint, &reading).await {
            Ok(()) => info!(
                sensor_id = %reading.sensor_id,
                "Data sent successfully: Temp: {}C, Hum: {}%",
                reading.temperature,
                reading.humidity
            ),
            Err(err @ (SendError::Connection(_) | SendError::Timeout(_))) => {
                warn!(endpoint = %config.endpoint, "Is the backend running? {err}")
            }
            Err(err) => error!(sensor_id = %reading.sensor_id, "{err}"),
        }

        tokio::time::sleep(config.interval).await;
    }

    Ok(())
}
