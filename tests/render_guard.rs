use chrono::NaiveDate;
use stock_chart_wasm::domain::chart::{ChartLayout, ChartPhase};
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
fn empty_series_produces_no_layout() {
    assert!(ChartLayout::compute(&PriceSeries::default(), 1000.0, 400.0).is_none());
}

#[test]
fn nonpositive_prices_produce_no_layout() {
    // A log scale has no image at or below zero; skip drawing instead.
    let series = PriceSeries::from_points(vec![point(date(2021, 9, 1), 1.0, 2.0, 0.0, 1.5)]);
    assert!(ChartLayout::compute(&series, 1000.0, 400.0).is_none());
}

#[test]
fn drawing_waits_for_surface_and_data() {
    let mut phase = ChartPhase::default();
    assert!(!phase.can_draw());

    phase = phase.mounted();
    assert!(!phase.can_draw());

    // Data arriving before the bootstrap finished changes nothing.
    phase = phase.data_ready();
    assert_eq!(phase, ChartPhase::MountedUnloaded);

    phase = phase.loaded();
    assert!(!phase.can_draw());

    phase = phase.data_ready();
    assert!(phase.can_draw());
}

#[test]
fn repeated_lifecycle_callbacks_are_no_ops() {
    let loaded = ChartPhase::Unmounted.mounted().loaded();
    assert_eq!(loaded.mounted().loaded(), loaded);

    let drawable = loaded.data_ready();
    assert_eq!(drawable.loaded().data_ready(), drawable);
}
