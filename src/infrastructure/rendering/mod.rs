//! DOM-backed rendering of the computed chart layout.

pub mod svg_renderer;

pub use svg_renderer::*;
