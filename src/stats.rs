use models::reading::Reading;

/// Aggregates over one fetched window.
///
/// Extremes are kept as received so they bound every reading in the window.
/// The temperature average is rounded to one decimal place and the humidity
/// average to a whole percent. `samples == 0` marks
/// the zero placeholder shown when a window comes back empty.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct DerivedStats {
    pub min_temp: f64,
    pub max_temp: f64,
    pub avg_temp: f64,
    pub min_hum: f64,
    pub max_hum: f64,
    pub avg_hum: f64,
    pub samples: usize,
}

impl DerivedStats {
    pub fn compute(window: &[Reading]) -> DerivedStats {
        let Some(first) = window.first() else {
            return DerivedStats::default();
        };

        let init = (
            first.temperature,
            first.temperature,
            0.0,
            first.humidity,
            first.humidity,
            0.0,
        );
        let (min_t, max_t, sum_t, min_h, max_h, sum_h) = window.iter().fold(
            init,
            |(min_t, max_t, sum_t, min_h, max_h, sum_h), r| {
                (
                    min_t.min(r.temperature),
                    max_t.max(r.temperature),
                    sum_t + r.temperature,
                    min_h.min(r.humidity),
                    max_h.max(r.humidity),
                    sum_h + r.humidity,
                )
            },
        );

        let count = window.len() as f64;
        DerivedStats {
            min_temp: min_t,
            max_temp: max_t,
            avg_temp: round_tenths(sum_t / count),
            min_hum: min_h,
            max_hum: max_h,
            avg_hum: (sum_h / count).round(),
            samples: window.len(),
        }
    }

    pub fn is_placeholder(&self) -> bool {
        self.samples == 0
    }

    pub fn min_temp_label(&self) -> String {
        self.temp_label(self.min_temp)
    }

    pub fn max_temp_label(&self) -> String {
        self.temp_label(self.max_temp)
    }

    pub fn avg_temp_label(&self) -> String {
        self.temp_label(self.avg_temp)
    }

    pub fn avg_hum_label(&self) -> String {
        format!("{}", self.avg_hum)
    }

    fn temp_label(&self, value: f64) -> String {
        if self.is_placeholder() {
            "0".into()
        } else {
            format!("{value:.1}")
        }
    }
}

fn round_tenths(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
