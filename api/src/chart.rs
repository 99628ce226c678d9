//! Turns a pair's price history into something a line chart can draw.
//!
//! The series is plotted 1:1 against time: no smoothing, downsampling or
//! gap filling. The horizontal axis is time-based with day granularity.

use crate::token_pair::HistoricalPricePoint;
use chrono::DateTime;
use chrono::Days;
use chrono::Utc;

pub const SERIES_LABEL: &str = "Price";

/// Upper bound on labelled day ticks before they get thinned out.
const MAX_DAY_TICKS: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesPoint {
    pub at: DateTime<Utc>,
    pub price: f64,
}

/// One labelled line.
#[derive(Debug, Clone, PartialEq)]
pub struct LineSeries {
    pub label: &'static str,
    pub points: Vec<SeriesPoint>,
}

impl LineSeries {
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

pub fn price_series(history: &[HistoricalPricePoint]) -> LineSeries {
    LineSeries {
        label: SERIES_LABEL,
        points: history
            .iter()
            .map(|point| SeriesPoint {
                at: point.timestamp,
                price: point.price,
            })
            .collect(),
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AxisTick {
    pub x: f64,
    pub label: String,
}

/// A series projected into SVG user space.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PlottedSeries {
    /// `x,y` pairs separated by spaces, ready for `<polyline points=..>`.
    pub points: String,
    pub day_ticks: Vec<AxisTick>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
}

/// The drawing area a series gets projected into.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartFrame {
    pub width: f64,
    pub height: f64,
    pub padding: f64,
}

impl Default for ChartFrame {
    fn default() -> Self {
        Self {
            width: 600.0,
            height: 200.0,
            padding: 24.0,
        }
    }
}

impl ChartFrame {
    pub fn plot(&self, series: &LineSeries) -> PlottedSeries {
        let Some((start, end)) = time_span(series) else {
            return PlottedSeries::default();
        };

        let (min_price, max_price) = series.points.iter().fold(
            (f64::INFINITY, f64::NEG_INFINITY),
            |(lo, hi), p| (lo.min(p.price), hi.max(p.price)),
        );

        let points = series
            .points
            .iter()
            .map(|p| {
                let x = self.x_for(p.at, start, end);
                let y = self.y_for(p.price, min_price, max_price);
                format!("{x:.2},{y:.2}")
            })
            .collect::<Vec<_>>()
            .join(" ");

        PlottedSeries {
            points,
            day_ticks: self.day_ticks(start, end),
            min_price: Some(min_price),
            max_price: Some(max_price),
        }
    }

    fn x_for(&self, at: DateTime<Utc>, start: DateTime<Utc>, end: DateTime<Utc>) -> f64 {
        let span = (end - start).num_milliseconds();
        if span == 0 {
            return self.width / 2.0;
        }
        let offset = (at - start).num_milliseconds() as f64 / span as f64;
        self.padding + offset * (self.width - 2.0 * self.padding)
    }

    fn y_for(&self, price: f64, min: f64, max: f64) -> f64 {
        let span = max - min;
        if span == 0.0 {
            return self.height / 2.0;
        }
        let offset = (price - min) / span;
        self.height - self.padding - offset * (self.height - 2.0 * self.padding)
    }

    /// One tick per UTC midnight inside `[start, end]`, thinned to at most
    /// `MAX_DAY_TICKS`.
    fn day_ticks(&self, start: DateTime<Utc>, end: DateTime<Utc>) -> Vec<AxisTick> {
        let first_midnight = start.date_naive().and_hms_opt(0, 0, 0).map(|m| m.and_utc());
        let Some(mut day) = first_midnight else {
            return vec![];
        };
        if day < start {
            day = match day.checked_add_days(Days::new(1)) {
                Some(next) => next,
                None => return vec![],
            };
        }

        if day > end {
            return vec![];
        }

        let midnights = (end - day).num_days() as u64 + 1;
        let stride = midnights.div_ceil(MAX_DAY_TICKS as u64).max(1);

        let mut ticks = Vec::with_capacity(MAX_DAY_TICKS);
        while day <= end {
            ticks.push(AxisTick {
                x: self.x_for(day, start, end),
                label: day.format("%b %d").to_string(),
            });
            match day.checked_add_days(Days::new(stride)) {
                Some(next) => day = next,
                None => break,
            }
        }
        ticks
    }
}

fn time_span(series: &LineSeries) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
    let start = series.points.iter().map(|p| p.at).min()?;
    let end = series.points.iter().map(|p| p.at).max()?;
    Some((start, end))
}
