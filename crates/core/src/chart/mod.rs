//! Chart module - donut chart model and SVG renderer.

mod chart_model;
mod svg;

pub use chart_model::*;
pub use svg::{escape_xml, render_svg};
