pub use super::value_objects::{DateRange, Price, Symbol};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Domain entity - one daily price record, immutable once constructed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub date: NaiveDate,
    pub open: Price,
    pub high: Price,
    pub low: Price,
    pub close: Price,
    pub symbol: Symbol,
}

impl PricePoint {
    pub fn new(
        date: NaiveDate,
        open: Price,
        high: Price,
        low: Price,
        close: Price,
        symbol: Symbol,
    ) -> Self {
        Self { date, open, high, low, close, symbol }
    }

    pub fn is_bullish(&self) -> bool {
        self.close > self.open
    }

    pub fn is_bearish(&self) -> bool {
        self.close < self.open
    }

    /// Fractional open-to-close change, e.g. 0.1 for +10%.
    pub fn percent_change(&self) -> f64 {
        (self.close.value() - self.open.value()) / self.open.value()
    }
}

/// Domain entity - date-sorted series of price points
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PriceSeries {
    points: Vec<PricePoint>,
}

impl PriceSeries {
    /// The remote query is expected to return sorted records; sort anyway
    /// so the scales never see an out-of-order series.
    pub fn from_points(mut points: Vec<PricePoint>) -> Self {
        points.sort_by_key(|p| p.date);
        Self { points }
    }

    pub fn points(&self) -> &[PricePoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Global (min low, max high) across the series.
    pub fn price_range(&self) -> Option<(Price, Price)> {
        let first = self.points.first()?;
        let mut min_low = first.low;
        let mut max_high = first.high;

        for point in &self.points {
            if point.low < min_low {
                min_low = point.low;
            }
            if point.high > max_high {
                max_high = point.high;
            }
        }

        Some((min_low, max_high))
    }

    /// First and last calendar day covered by the series.
    pub fn day_range(&self) -> Option<(NaiveDate, NaiveDate)> {
        Some((self.points.first()?.date, self.points.last()?.date))
    }
}

/// Account summary row returned by the revenue query
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountSummary {
    pub id: String,
    pub name: String,
    pub annual_revenue: f64,
}

/// Contact directory row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactRecord {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}
