//! DOM-level smoke tests; run with `wasm-pack test --headless --firefox`.
#![cfg(target_arch = "wasm32")]

use chrono::NaiveDate;
use stock_chart_wasm::domain::chart::ChartLayout;
use stock_chart_wasm::domain::market_data::{Price, PricePoint, PriceSeries, Symbol};
use stock_chart_wasm::infrastructure::rendering::SvgChartRenderer;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

const SVG_NS: &str = "http://www.w3.org/2000/svg";

fn install_svg(id: &str) {
    let document = web_sys::window().unwrap().document().unwrap();
    let svg = document.create_element_ns(Some(SVG_NS), "svg").unwrap();
    svg.set_id(id);
    document.body().unwrap().append_child(&svg).unwrap();
}

fn series() -> PriceSeries {
    let points = (1..=5)
        .map(|d| {
            PricePoint::new(
                NaiveDate::from_ymd_opt(2021, 9, d).unwrap(),
                Price::new(100.0),
                Price::new(112.0),
                Price::new(95.0),
                Price::new(110.0),
                Symbol::from("TEST"),
            )
        })
        .collect();
    PriceSeries::from_points(points)
}

#[wasm_bindgen_test]
fn renders_one_group_per_point() {
    install_svg("render-target");
    let renderer = SvgChartRenderer::new("render-target");
    renderer.bootstrap().unwrap();

    let layout = ChartLayout::compute(&series(), 1000.0, 400.0).unwrap();
    renderer.render(&layout).unwrap();

    let document = web_sys::window().unwrap().document().unwrap();
    let svg = document.get_element_by_id("render-target").unwrap();
    let candles = svg.query_selector(".candles").unwrap().unwrap();
    assert_eq!(candles.child_element_count(), 5);
}

#[wasm_bindgen_test]
fn redraw_replaces_prior_content() {
    install_svg("redraw-target");
    let renderer = SvgChartRenderer::new("redraw-target");

    let layout = ChartLayout::compute(&series(), 1000.0, 400.0).unwrap();
    renderer.render(&layout).unwrap();
    renderer.render(&layout).unwrap();

    let document = web_sys::window().unwrap().document().unwrap();
    let svg = document.get_element_by_id("redraw-target").unwrap();
    // Two axis groups and one candles group, not six.
    assert_eq!(svg.child_element_count(), 3);
}

#[wasm_bindgen_test]
fn missing_surface_is_a_rendering_error() {
    let renderer = SvgChartRenderer::new("not-there");
    assert!(renderer.bootstrap().is_err());
}
