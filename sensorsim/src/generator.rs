use chrono::{DateTime, Utc};
use rand::Rng;

use models::{reading::Reading, sensor};

const BASE_TEMP: f64 = 25.0;
const TEMP_SPREAD: f64 = 4.0;
const BASE_HUMIDITY: f64 = 60.0;
const HUMIDITY_SPREAD: f64 = 5.0;

/// A plausible reading for sensor number `number`, taken at `now`.
pub fn generate(rng: &mut impl Rng, number: u32, now: DateTime<Utc>) -> Reading {
    let temperature = BASE_TEMP + rng.gen_range(-TEMP_SPREAD..=TEMP_SPREAD);
    let humidity = BASE_HUMIDITY + rng.gen_range(-HUMIDITY_SPREAD..=HUMIDITY_SPREAD);

    Reading::new(
        sensor::sensor_id(number),
        now,
        (temperature * 10.0).round() / 10.0,
        humidity.trunc(),
    )
}

/// Sensor numbers `1..=count`, round and round.
pub fn sensor_cycle(count: u32) -> impl Iterator<Item = u32> {
    (1..=count).cycle()
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;

    #[test]
    fn readings_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        let now = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();

        for _ in 0..500 {
            let reading = generate(&mut rng, 2, now);

            assert_eq!(reading.sensor_id, "temp_02");
            assert!((21.0..=29.0).contains(&reading.temperature));
            assert_eq!(reading.temperature, (reading.temperature * 10.0).round() / 10.0);
            assert!((55.0..=65.0).contains(&reading.humidity));
            assert_eq!(reading.humidity.fract(), 0.0);
            assert_eq!(reading.time(), Some(now));
        }
    }

    #[test]
    fn cycles_through_sensors() {
        let order: Vec<u32> = sensor_cycle(3).take(7).collect();
        assert_eq!(order, [1, 2, 3, 1, 2, 3, 1]);
    }
}
