use chrono::{Datelike, NaiveDate, Weekday};

/// One discrete band per UTC calendar day across an inclusive date range,
/// with fixed inner/outer padding: step = extent / (n + padding),
/// bandwidth = step * (1 - padding), bands centered in the range.
#[derive(Debug, Clone, PartialEq)]
pub struct DayBandScale {
    first: NaiveDate,
    last: NaiveDate,
    range: (f64, f64),
    padding: f64,
    step: f64,
    offset: f64,
}

impl DayBandScale {
    pub fn new(first: NaiveDate, last: NaiveDate, range: (f64, f64), padding: f64) -> Self {
        let n = Self::day_count(first, last) as f64;
        let extent = range.1 - range.0;
        let step = extent / (n + padding);
        let offset = (extent - step * (n - padding)) * 0.5;
        Self { first, last, range, padding, step, offset }
    }

    fn day_count(first: NaiveDate, last: NaiveDate) -> usize {
        ((last - first).num_days().max(0) + 1) as usize
    }

    pub fn band_count(&self) -> usize {
        Self::day_count(self.first, self.last)
    }

    pub fn bandwidth(&self) -> f64 {
        self.step * (1.0 - self.padding)
    }

    /// Left edge of the band for `date`, or None outside the domain.
    pub fn position(&self, date: NaiveDate) -> Option<f64> {
        if date < self.first || date > self.last {
            return None;
        }
        let index = (date - self.first).num_days() as f64;
        Some(self.range.0 + self.offset + self.step * index)
    }

    /// Center of the band for `date`.
    pub fn center(&self, date: NaiveDate) -> Option<f64> {
        Some(self.position(date)? + self.bandwidth() / 2.0)
    }
}

/// Logarithmic scale with rounded output and an inverted range, so a larger
/// price maps to a smaller vertical coordinate.
#[derive(Debug, Clone, PartialEq)]
pub struct LogScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LogScale {
    /// None when the domain touches zero or goes negative; a log scale has
    /// no image there and the caller skips drawing instead.
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Option<Self> {
        if domain.0 <= 0.0 || domain.1 <= 0.0 {
            return None;
        }
        Some(Self { domain, range })
    }

    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    pub fn position(&self, value: f64) -> f64 {
        let (d0, d1) = self.domain;
        let t = if d0 == d1 { 0.5 } else { (value.ln() - d0.ln()) / (d1.ln() - d0.ln()) };
        (self.range.0 + t * (self.range.1 - self.range.0)).round()
    }
}

/// Monday tick dates in the half-open interval [first, last), thinned to
/// every second Monday on narrow surfaces (width <= 720).
pub fn monday_ticks(first: NaiveDate, last: NaiveDate, width: f64) -> Vec<NaiveDate> {
    let stride_days = if width > 720.0 { 7 } else { 14 };
    let mut ticks = Vec::new();

    let mut day = first;
    while day < last && day.weekday() != Weekday::Mon {
        day = day + chrono::Duration::days(1);
    }
    while day < last {
        ticks.push(day);
        day = day + chrono::Duration::days(stride_days);
    }
    ticks
}

/// Linear tick values over [start, stop], about `count` of them, snapped to
/// 1/2/5-decade steps. Shares the log scale's domain for the price axis.
pub fn linear_ticks(start: f64, stop: f64, count: usize) -> Vec<f64> {
    if start == stop {
        return vec![start];
    }
    let step = tick_increment(start, stop, count);
    if step == 0.0 || !step.is_finite() {
        return Vec::new();
    }
    if step > 0.0 {
        let i0 = (start / step).ceil() as i64;
        let i1 = (stop / step).floor() as i64;
        (i0..=i1).map(|i| i as f64 * step).collect()
    } else {
        let inv = -step;
        let i0 = (start * inv).ceil() as i64;
        let i1 = (stop * inv).floor() as i64;
        (i0..=i1).map(|i| i as f64 / inv).collect()
    }
}

fn tick_increment(start: f64, stop: f64, count: usize) -> f64 {
    const E10: f64 = 7.0710678118654755; // sqrt(50)
    const E5: f64 = 3.1622776601683795; // sqrt(10)
    const E2: f64 = std::f64::consts::SQRT_2;

    let step = (stop - start) / count.max(1) as f64;
    let power = step.log10().floor();
    let error = step / 10f64.powf(power);
    let factor = if error >= E10 {
        10.0
    } else if error >= E5 {
        5.0
    } else if error >= E2 {
        2.0
    } else {
        1.0
    };
    if power >= 0.0 { factor * 10f64.powf(power) } else { -(10f64.powf(-power)) / factor }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn band_positions_cover_the_padded_range() {
        let scale = DayBandScale::new(date(2021, 9, 1), date(2021, 9, 10), (40.0, 970.0), 0.2);
        assert_eq!(scale.band_count(), 10);

        let first = scale.position(date(2021, 9, 1)).unwrap();
        let last = scale.position(date(2021, 9, 10)).unwrap();
        assert!(first >= 40.0);
        assert!(last + scale.bandwidth() <= 970.0 + 1e-9);

        // Bands are evenly stepped.
        let second = scale.position(date(2021, 9, 2)).unwrap();
        let ninth = scale.position(date(2021, 9, 9)).unwrap();
        assert!(((second - first) - (last - ninth)).abs() < 1e-9);
    }

    #[test]
    fn band_rejects_dates_outside_the_domain() {
        let scale = DayBandScale::new(date(2021, 9, 1), date(2021, 9, 10), (0.0, 100.0), 0.2);
        assert!(scale.position(date(2021, 8, 31)).is_none());
        assert!(scale.position(date(2021, 9, 11)).is_none());
    }

    #[test]
    fn log_scale_inverts_and_rounds() {
        let scale = LogScale::new((10.0, 1000.0), (370.0, 20.0)).unwrap();
        assert_eq!(scale.position(10.0), 370.0);
        assert_eq!(scale.position(1000.0), 20.0);
        // Geometric midpoint lands at the middle of the range.
        assert_eq!(scale.position(100.0), 195.0);
    }

    #[test]
    fn log_scale_requires_positive_domain() {
        assert!(LogScale::new((0.0, 10.0), (0.0, 1.0)).is_none());
        assert!(LogScale::new((-5.0, 10.0), (0.0, 1.0)).is_none());
    }

    #[test]
    fn linear_ticks_use_decade_steps() {
        assert_eq!(linear_ticks(0.0, 1.0, 10), vec![
            0.0, 0.1, 0.2, 0.3, 0.4, 0.5, 0.6, 0.7, 0.8, 0.9, 1.0
        ]);
        assert_eq!(linear_ticks(95.0, 205.0, 10), vec![
            100.0, 110.0, 120.0, 130.0, 140.0, 150.0, 160.0, 170.0, 180.0, 190.0, 200.0
        ]);
    }
}
