use crate::domain::chart::ChartLayout;
use crate::domain::errors::{AppError, RenderingResult};
use crate::domain::logging::LogComponent;
use crate::log_debug;
use web_sys::{Document, Element};

const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// Draws a computed layout into the pre-existing `<svg>` element with the
/// given id. Redraws are idempotent: prior content is cleared first, so a
/// refetch replaces the chart instead of stacking glyphs on it.
pub struct SvgChartRenderer {
    svg_id: String,
}

impl SvgChartRenderer {
    pub fn new(svg_id: impl Into<String>) -> Self {
        Self { svg_id: svg_id.into() }
    }

    /// One-shot readiness check for the surface; the phase machine keeps
    /// it from running more than once.
    pub fn bootstrap(&self) -> RenderingResult<()> {
        let (_, svg) = self.surface()?;
        log_debug!(
            LogComponent::Infrastructure("SvgRenderer"),
            "surface '{}' ready ({})",
            self.svg_id,
            svg.tag_name()
        );
        Ok(())
    }

    pub fn render(&self, layout: &ChartLayout) -> RenderingResult<()> {
        let (document, svg) = self.surface()?;

        set_attr(&svg, "viewBox", &format!("0 0 {} {}", layout.width, layout.height))?;
        svg.set_inner_html("");

        self.draw_day_axis(&document, &svg, layout)?;
        self.draw_price_axis(&document, &svg, layout)?;
        self.draw_glyphs(&document, &svg, layout)?;

        log_debug!(
            LogComponent::Infrastructure("SvgRenderer"),
            "drew {} glyphs over {} bands",
            layout.glyphs.len(),
            layout.band_count
        );
        Ok(())
    }

    fn surface(&self) -> RenderingResult<(Document, Element)> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| AppError::Rendering("document not available".to_string()))?;
        let svg = document.get_element_by_id(&self.svg_id).ok_or_else(|| {
            AppError::Rendering(format!("svg element '{}' not found", self.svg_id))
        })?;
        Ok((document, svg))
    }

    fn draw_day_axis(
        &self,
        document: &Document,
        svg: &Element,
        layout: &ChartLayout,
    ) -> RenderingResult<()> {
        let group = svg_element(document, "g")?;
        set_attr(&group, "class", "day-axis")?;
        set_attr(&group, "font-size", "0.8rem")?;
        let baseline = layout.height - layout.margins.bottom;

        for tick in &layout.day_ticks {
            let mark = svg_element(document, "line")?;
            set_attr(&mark, "x1", &tick.x.to_string())?;
            set_attr(&mark, "x2", &tick.x.to_string())?;
            set_attr(&mark, "y1", &baseline.to_string())?;
            set_attr(&mark, "y2", &(baseline + 6.0).to_string())?;
            set_attr(&mark, "stroke", "currentColor")?;
            append(&group, &mark)?;

            let label = svg_element(document, "text")?;
            set_attr(&label, "x", &tick.x.to_string())?;
            set_attr(&label, "y", &(baseline + 18.0).to_string())?;
            set_attr(&label, "text-anchor", "middle")?;
            label.set_text_content(Some(&tick.label));
            append(&group, &label)?;
        }
        append(svg, &group)
    }

    fn draw_price_axis(
        &self,
        document: &Document,
        svg: &Element,
        layout: &ChartLayout,
    ) -> RenderingResult<()> {
        let group = svg_element(document, "g")?;
        set_attr(&group, "class", "price-axis")?;
        set_attr(&group, "font-size", "0.8rem")?;
        let grid_end = layout.width - layout.margins.right;

        for tick in &layout.price_ticks {
            // Faint grid line across the plot area.
            let grid = svg_element(document, "line")?;
            set_attr(&grid, "x1", &layout.margins.left.to_string())?;
            set_attr(&grid, "x2", &grid_end.to_string())?;
            set_attr(&grid, "y1", &tick.y.to_string())?;
            set_attr(&grid, "y2", &tick.y.to_string())?;
            set_attr(&grid, "stroke", "currentColor")?;
            set_attr(&grid, "stroke-opacity", "0.2")?;
            append(&group, &grid)?;

            let label = svg_element(document, "text")?;
            set_attr(&label, "x", &(layout.margins.left - 6.0).to_string())?;
            set_attr(&label, "y", &(tick.y + 4.0).to_string())?;
            set_attr(&label, "text-anchor", "end")?;
            label.set_text_content(Some(&tick.label));
            append(&group, &label)?;
        }
        append(svg, &group)
    }

    fn draw_glyphs(
        &self,
        document: &Document,
        svg: &Element,
        layout: &ChartLayout,
    ) -> RenderingResult<()> {
        let series_group = svg_element(document, "g")?;
        set_attr(&series_group, "class", "candles")?;
        set_attr(&series_group, "stroke-linecap", "round")?;
        set_attr(&series_group, "stroke", "black")?;

        for glyph in &layout.glyphs {
            let group = svg_element(document, "g")?;
            set_attr(&group, "transform", &format!("translate({},0)", glyph.x))?;

            let wick = svg_element(document, "line")?;
            set_attr(&wick, "y1", &glyph.low_y.to_string())?;
            set_attr(&wick, "y2", &glyph.high_y.to_string())?;
            append(&group, &wick)?;

            let body = svg_element(document, "line")?;
            set_attr(&body, "y1", &glyph.open_y.to_string())?;
            set_attr(&body, "y2", &glyph.close_y.to_string())?;
            set_attr(&body, "stroke-width", &glyph.band_width.to_string())?;
            set_attr(&body, "stroke", &glyph.direction.color().to_css())?;
            append(&group, &body)?;

            // Native browser tooltip, one per glyph.
            let title = svg_element(document, "title")?;
            title.set_text_content(Some(&glyph.tooltip));
            append(&group, &title)?;

            append(&series_group, &group)?;
        }
        append(svg, &series_group)
    }
}

fn svg_element(document: &Document, name: &str) -> RenderingResult<Element> {
    document
        .create_element_ns(Some(SVG_NS), name)
        .map_err(|_| AppError::Rendering(format!("failed to create <{name}>")))
}

fn set_attr(element: &Element, name: &str, value: &str) -> RenderingResult<()> {
    element
        .set_attribute(name, value)
        .map_err(|_| AppError::Rendering(format!("failed to set {name}")))
}

fn append(parent: &Element, child: &Element) -> RenderingResult<()> {
    parent
        .append_child(child)
        .map(|_| ())
        .map_err(|_| AppError::Rendering("failed to append node".to_string()))
}
