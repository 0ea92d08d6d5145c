use chrono::NaiveDate;
use stock_chart_wasm::domain::chart::{ChartLayout, monday_ticks};
use stock_chart_wasm::domain::market_data::{Price, PricePoint, PriceSeries, Symbol};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn wide_surface_gets_every_monday() {
    // September 2021 Mondays: 6, 13, 20, 27.
    let ticks = monday_ticks(date(2021, 9, 1), date(2021, 9, 30), 1000.0);
    assert_eq!(ticks, vec![
        date(2021, 9, 6),
        date(2021, 9, 13),
        date(2021, 9, 20),
        date(2021, 9, 27)
    ]);
}

#[test]
fn narrow_surface_gets_every_second_monday() {
    let ticks = monday_ticks(date(2021, 9, 1), date(2021, 9, 30), 600.0);
    assert_eq!(ticks, vec![date(2021, 9, 6), date(2021, 9, 20)]);
}

#[test]
fn width_boundary_is_720() {
    assert_eq!(monday_ticks(date(2021, 9, 1), date(2021, 9, 30), 720.0).len(), 2);
    assert_eq!(monday_ticks(date(2021, 9, 1), date(2021, 9, 30), 721.0).len(), 4);
}

#[test]
fn interval_is_half_open() {
    // A Monday at the end of the range is excluded; one at the start is kept.
    let ticks = monday_ticks(date(2021, 9, 6), date(2021, 9, 27), 1000.0);
    assert_eq!(ticks, vec![date(2021, 9, 6), date(2021, 9, 13), date(2021, 9, 20)]);
}

#[test]
fn layout_labels_mondays_as_month_day_year() {
    let points = (1..=14)
        .map(|d| {
            PricePoint::new(
                date(2021, 9, d),
                Price::new(100.0),
                Price::new(110.0),
                Price::new(95.0),
                Price::new(105.0),
                Symbol::from("TEST"),
            )
        })
        .collect();
    let series = PriceSeries::from_points(points);

    let layout = ChartLayout::compute(&series, 1000.0, 400.0).unwrap();
    let labels: Vec<&str> = layout.day_ticks.iter().map(|t| t.label.as_str()).collect();
    assert_eq!(labels, vec!["9/6/2021", "9/13/2021"]);
}
