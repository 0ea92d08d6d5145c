use chrono::NaiveDate;
use stock_chart_wasm::domain::chart::{ChartLayout, DayBandScale};
use stock_chart_wasm::domain::market_data::{Price, PricePoint, PriceSeries, Symbol};

fn point(date: NaiveDate, open: f64, high: f64, low: f64, close: f64) -> PricePoint {
    PricePoint::new(
        date,
        Price::new(open),
        Price::new(high),
        Price::new(low),
        Price::new(close),
        Symbol::from("TEST"),
    )
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn one_band_per_calendar_day_inclusive() {
    let scale = DayBandScale::new(date(2021, 9, 1), date(2021, 9, 14), (40.0, 970.0), 0.2);
    assert_eq!(scale.band_count(), 14);

    let single = DayBandScale::new(date(2021, 9, 1), date(2021, 9, 1), (40.0, 970.0), 0.2);
    assert_eq!(single.band_count(), 1);
}

#[test]
fn layout_spans_every_day_between_first_and_last_point() {
    // Three points across a ten-day span: the domain is days, not points.
    let series = PriceSeries::from_points(vec![
        point(date(2021, 9, 1), 100.0, 112.0, 95.0, 110.0),
        point(date(2021, 9, 4), 110.0, 130.0, 108.0, 125.0),
        point(date(2021, 9, 10), 125.0, 127.0, 90.0, 96.0),
    ]);

    let layout = ChartLayout::compute(&series, 1000.0, 400.0).unwrap();
    assert_eq!(layout.band_count, 10);
    assert_eq!(layout.glyphs.len(), 3);
}

#[test]
fn glyph_positions_follow_the_band_scale() {
    let series = PriceSeriesFixture::consecutive_days(5);
    let layout = ChartLayout::compute(&series, 1000.0, 400.0).unwrap();

    let scale = DayBandScale::new(
        date(2021, 9, 1),
        date(2021, 9, 5),
        (layout.margins.left, layout.width - layout.margins.right),
        0.2,
    );
    for (i, glyph) in layout.glyphs.iter().enumerate() {
        let day = date(2021, 9, 1 + i as u32);
        assert_eq!(glyph.x, scale.center(day).unwrap());
        assert_eq!(glyph.band_width, scale.bandwidth());
    }
}

struct PriceSeriesFixture;

impl PriceSeriesFixture {
    fn consecutive_days(count: u32) -> PriceSeries {
        let points = (0..count)
            .map(|i| point(date(2021, 9, 1 + i), 100.0, 110.0, 95.0, 105.0))
            .collect();
        PriceSeries::from_points(points)
    }
}
