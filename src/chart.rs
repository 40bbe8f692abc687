use std::ops::Range;

use chrono::{DateTime, Local, Utc};
use plotters::{coord::Shift, prelude::*};

use models::reading::Reading;

use crate::selection::Theme;

/// A reading as the charts see it.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartPoint {
    pub label: String,
    pub temperature: f64,
    pub humidity: f64,
}

impl ChartPoint {
    pub fn from_reading(reading: &Reading) -> Self {
        ChartPoint {
            label: time_label(reading),
            temperature: reading.temperature,
            humidity: reading.humidity,
        }
    }
}

/// Local time of day, or "Invalid Date" when the timestamp can't be read.
pub fn time_label(reading: &Reading) -> String {
    match reading.time() {
        Some(time) => local_time_label(time),
        None => "Invalid Date".into(),
    }
}

pub fn local_time_label(time: DateTime<Utc>) -> String {
    time.with_timezone(&Local).format("%-I:%M:%S %p").to_string()
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Metric {
    Temperature,
    Humidity,
}

impl Metric {
    pub fn value(self, point: &ChartPoint) -> f64 {
        match self {
            Metric::Temperature => point.temperature,
            Metric::Humidity => point.humidity,
        }
    }

    pub fn series_name(self) -> &'static str {
        match self {
            Metric::Temperature => "temperature",
            Metric::Humidity => "humidity",
        }
    }

    pub fn heading(self, sensor_name: &str) -> String {
        match self {
            Metric::Temperature => format!("Temperature (°C) for {sensor_name}"),
            Metric::Humidity => format!("Humidity (%) for {sensor_name}"),
        }
    }

    fn color(self) -> RGBColor {
        match self {
            Metric::Temperature => RGBColor(0xff, 0x73, 0x00),
            Metric::Humidity => RGBColor(0x38, 0x79, 0x08),
        }
    }

    /// Temperature hugs the data with 2 degrees of headroom, humidity is always 0-100.
    pub fn y_range(self, points: &[ChartPoint]) -> Range<f64> {
        match self {
            Metric::Temperature => {
                let (min, max) = points
                    .iter()
                    .map(|p| p.temperature)
                    .fold(None, |acc: Option<(f64, f64)>, t| match acc {
                        Some((min, max)) => Some((min.min(t), max.max(t))),
                        None => Some((t, t)),
                    })
                    .unwrap_or((0.0, 0.0));
                (min - 2.0)..(max + 2.0)
            }
            Metric::Humidity => 0.0..100.0,
        }
    }
}

fn foreground(theme: Theme) -> RGBColor {
    match theme {
        Theme::Light => RGBColor(0x33, 0x33, 0x33),
        Theme::Dark => RGBColor(0xe0, 0xe0, 0xe0),
    }
}

/// Draws one metric of a chronological series onto `area`.
///
/// The x axis is the position in the window, labelled with each point's time.
/// An empty series still gets axes so the chart doesn't collapse.
pub fn draw_chart<DB>(
    area: &DrawingArea<DB, Shift>,
    points: &[ChartPoint],
    metric: Metric,
    theme: Theme,
) -> anyhow::Result<()>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    let fg = foreground(theme);
    let color = metric.color();

    area.fill(&TRANSPARENT)?;
    let x_max = points.len().saturating_sub(1).max(1) as f64;
    let mut chart = ChartBuilder::on(area)
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(40)
        .build_cartesian_2d(0f64..x_max, metric.y_range(points))?;

    let x_label = |x: &f64| {
        let index = x.round();
        if (x - index).abs() > 1e-6 || index < 0.0 {
            return String::new();
        }
        points
            .get(index as usize)
            .map(|p| p.label.clone())
            .unwrap_or_default()
    };

    let y_label = move |y: &f64| match metric {
        Metric::Temperature => format!("{y:.1}"),
        Metric::Humidity => format!("{y:.0}"),
    };

    chart
        .configure_mesh()
        .x_labels(points.len().clamp(2, 8))
        .x_label_formatter(&x_label)
        .y_labels(5)
        .y_label_formatter(&y_label)
        .axis_style(&fg)
        .label_style(("sans-serif", 12).into_font().color(&fg))
        .draw()?;

    if points.is_empty() {
        return Ok(());
    }

    chart
        .draw_series(LineSeries::new(
            points.iter().enumerate().map(|(i, p)| (i as f64, metric.value(p))),
            &color,
        ))?
        .label(metric.series_name())
        .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color));

    chart.draw_series(
        points
            .iter()
            .enumerate()
            .map(|(i, p)| Circle::new((i as f64, metric.value(p)), 3, color.filled())),
    )?;

    chart
        .configure_series_labels()
        .label_font(("sans-serif", 12).into_font().color(&fg))
        .background_style(&TRANSPARENT)
        .border_style(&fg)
        .draw()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(label: &str, temperature: f64, humidity: f64) -> ChartPoint {
        ChartPoint {
            label: label.into(),
            temperature,
            humidity,
        }
    }

    fn render(points: &[ChartPoint], metric: Metric) -> String {
        let mut svg = String::new();
        {
            let root = SVGBackend::with_string(&mut svg, (640, 300)).into_drawing_area();
            draw_chart(&root, points, metric, Theme::Light).unwrap();
            root.present().unwrap();
        }
        svg
    }

    /// Only the series itself is drawn in the metric colour; axes and mesh use the foreground.
    fn has_series(svg: &str, metric: Metric) -> bool {
        let RGBColor(r, g, b) = metric.color();
        let svg = svg.to_ascii_lowercase();
        svg.contains(&format!("#{r:02x}{g:02x}{b:02x}")) || svg.contains(&format!("rgb({r},{g},{b})"))
    }

    #[test]
    fn temperature_range_has_headroom() {
        let points = [point("a", 18.0, 50.0), point("b", 22.5, 70.0)];

        assert_eq!(Metric::Temperature.y_range(&points), 16.0..24.5);
        assert_eq!(Metric::Humidity.y_range(&points), 0.0..100.0);
        assert_eq!(Metric::Temperature.y_range(&[]), -2.0..2.0);
    }

    #[test]
    fn draws_a_line_for_data() {
        let points = [
            point("1:00:00 PM", 18.0, 60.0),
            point("1:30:00 PM", 22.0, 58.0),
            point("2:00:00 PM", 20.0, 59.0),
        ];
        let svg = render(&points, Metric::Temperature);

        assert!(has_series(&svg, Metric::Temperature));
        assert!(!has_series(&svg, Metric::Humidity));
        assert!(svg.contains("temperature"));
    }

    #[test]
    fn empty_series_only_draws_axes() {
        let svg = render(&[], Metric::Humidity);

        assert!(svg.contains("<svg"));
        assert!(!has_series(&svg, Metric::Humidity));
        assert!(!svg.contains("humidity"));
    }

    #[test]
    fn unreadable_timestamp_label() {
        let reading = Reading {
            sensor_id: "temp_01".into(),
            timestamp: "soon".into(),
            temperature: 20.0,
            humidity: 50.0,
        };
        assert_eq!(ChartPoint::from_reading(&reading).label, "Invalid Date");

        let reading = Reading {
            timestamp: "2024-05-01T12:00:00Z".into(),
            ..reading
        };
        assert!(ChartPoint::from_reading(&reading).label.ends_with('M'));
    }

    #[test]
    fn headings() {
        assert_eq!(
            Metric::Humidity.heading("Office Sensor"),
            "Humidity (%) for Office Sensor"
        );
    }
}
