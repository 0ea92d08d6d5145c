use super::scales::{DayBandScale, LogScale, linear_ticks, monday_ticks};
use super::value_objects::{CandleDirection, Margins};
use crate::domain::market_data::{PricePoint, PriceSeries};
use chrono::{Datelike, NaiveDate};

/// Inner padding ratio of the day band scale.
pub const BAND_PADDING: f64 = 0.2;
/// Target count for the price axis ticks.
pub const PRICE_TICK_COUNT: usize = 10;

/// Labeled tick on the horizontal (day) axis
#[derive(Debug, Clone, PartialEq)]
pub struct DayTick {
    pub x: f64,
    pub label: String,
}

/// Labeled tick on the vertical (price) axis
#[derive(Debug, Clone, PartialEq)]
pub struct PriceTick {
    pub y: f64,
    pub label: String,
}

/// One candle: a thin low-to-high wick and a band-wide open-to-close body
#[derive(Debug, Clone, PartialEq)]
pub struct CandleGlyph {
    /// Band center for this point's day.
    pub x: f64,
    pub band_width: f64,
    pub high_y: f64,
    pub low_y: f64,
    pub open_y: f64,
    pub close_y: f64,
    pub direction: CandleDirection,
    pub tooltip: String,
}

/// Everything the renderer needs, derived purely from the series and the
/// surface dimensions. Recomputed from scratch on every render.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartLayout {
    pub width: f64,
    pub height: f64,
    pub margins: Margins,
    pub price_domain: (f64, f64),
    pub band_count: usize,
    pub band_width: f64,
    pub day_ticks: Vec<DayTick>,
    pub price_ticks: Vec<PriceTick>,
    pub glyphs: Vec<CandleGlyph>,
}

impl ChartLayout {
    /// None for an empty series or one a log scale cannot map; both cases
    /// silently produce no drawing.
    pub fn compute(series: &PriceSeries, width: f64, height: f64) -> Option<Self> {
        let margins = Margins::default();
        let (first, last) = series.day_range()?;
        let (min_low, max_high) = series.price_range()?;

        let x = DayBandScale::new(first, last, (margins.left, width - margins.right), BAND_PADDING);
        let y = LogScale::new(
            (min_low.value(), max_high.value()),
            (height - margins.bottom, margins.top),
        )?;

        let day_ticks = monday_ticks(first, last, width)
            .into_iter()
            .filter_map(|d| Some(DayTick { x: x.center(d)?, label: format_axis_date(d) }))
            .collect();

        let (d0, d1) = y.domain();
        let price_ticks = linear_ticks(d0, d1, PRICE_TICK_COUNT)
            .into_iter()
            .map(|v| PriceTick { y: y.position(v), label: format_currency(v) })
            .collect();

        let glyphs = series
            .points()
            .iter()
            .filter_map(|point| {
                Some(CandleGlyph {
                    x: x.center(point.date)?,
                    band_width: x.bandwidth(),
                    high_y: y.position(point.high.value()),
                    low_y: y.position(point.low.value()),
                    open_y: y.position(point.open.value()),
                    close_y: y.position(point.close.value()),
                    direction: CandleDirection::of(point.open.value(), point.close.value()),
                    tooltip: tooltip_text(point),
                })
            })
            .collect();

        Some(Self {
            width,
            height,
            margins,
            price_domain: y.domain(),
            band_count: x.band_count(),
            band_width: x.bandwidth(),
            day_ticks,
            price_ticks,
            glyphs,
        })
    }
}

/// Day axis label, `M/D/YYYY` without zero padding.
pub fn format_axis_date(date: NaiveDate) -> String {
    format!("{}/{}/{}", date.month(), date.day(), date.year())
}

/// Tooltip date, e.g. `September 1, 2021`.
pub fn format_tooltip_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// Currency label with insignificant trailing zeros trimmed.
pub fn format_currency(value: f64) -> String {
    let mut text = format!("{:.6}", value);
    if text.contains('.') {
        while text.ends_with('0') {
            text.pop();
        }
        if text.ends_with('.') {
            text.pop();
        }
    }
    format!("${}", text)
}

/// Signed open-to-close change, e.g. `+10.00%`.
pub fn format_change(open: f64, close: f64) -> String {
    format!("{:+.2}%", (close - open) / open * 100.0)
}

/// Hover text for one point: date, open, close with percent change, low, high.
pub fn tooltip_text(point: &PricePoint) -> String {
    format!(
        "{} \nOpen: {}\nClose: {} ({})\nLow: {}\nHigh: {}",
        format_tooltip_date(point.date),
        point.open.value(),
        point.close.value(),
        format_change(point.open.value(), point.close.value()),
        point.low.value(),
        point.high.value(),
    )
}
