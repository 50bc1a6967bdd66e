//! Radial "flower petal" visualization of categorized records.
//!
//! Records are loaded from CSV exports, grouped by category and laid out as
//! petals around a circle, with a ring arc and curved label per category.
//! Hovering a petal previews it in the center; clicking it fills a detail view
//! through a [`detail::DetailSink`].
//!
//! ```ignore
//! let source = petalviz::data::DirectorySource::new("assets");
//! let svg = petalviz::render_svg(&source, &petalviz::RenderOptions::default())?;
//! ```

pub mod config;
pub mod data;
pub mod detail;
pub mod errors;
pub mod interaction;
pub mod log;
pub mod render;
pub mod theme;
pub mod types;
pub mod viz;

pub use config::{Environment, LayoutConfig, RenderOptions};
pub use errors::Error;
pub use interaction::{CenterPanel, HoverState, InteractionState, PointerEvent};
pub use render::{RenderModel, layout};
pub use viz::Viz;

/// Load the primary dataset from `source` and render it, un-hovered, to SVG.
pub fn render_svg(source: &dyn data::DataSource, options: &RenderOptions) -> Result<String, Error> {
    let mut viz = Viz::new(LayoutConfig::default(), options.clone())?;
    viz.load(source)?;
    viz.set_in_view(true);
    Ok(viz.render_svg()?)
}
