//! Geometry and SVG rendering
//!
//! [`layout`] turns a dataset plus interaction state into a [`RenderModel`];
//! [`generate_svg`] draws it.

pub mod arc;
pub mod band;
pub mod defaults;
pub mod geometry;
pub mod layout;
pub mod path;
pub mod svg;

pub use arc::ArcShape;
pub use band::BandScale;
pub use geometry::{LabelPlacement, arc_path_for_text, radians_to_degrees};
pub use layout::{AngularSlot, CanvasMetrics, CategoryArcGeometry, PetalGeometry, RenderModel, layout};
pub use path::{PathCommand, PathData, parse_path};
pub use svg::generate_svg;
