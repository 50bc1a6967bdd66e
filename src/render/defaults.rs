//! Default sizes and settings (canvas units, angles in radians)

/// Square canvas edge
pub const CANVAS_SIZE: f64 = 1300.0;
pub const MARGIN: f64 = 20.0;

pub const CATEGORY_RING_WIDTH: f64 = 27.0;
/// Between the category ring and the petal tips
pub const RING_PETAL_GAP: f64 = 32.0;
pub const PETAL_LENGTH: f64 = 290.0;

/// Band-scale padding fraction between records around the full circle
pub const CIRCLE_PADDING: f64 = 0.01;
/// Radians trimmed from each side of a category band
pub const GROUP_SPACING: f64 = 0.035;
/// Band-scale padding fraction between petals of one category, also their pad angle
pub const PETAL_PADDING: f64 = 0.01;

pub const PETAL_CORNER_RADIUS: f64 = 15.0;
pub const CATEGORY_CORNER_RADIUS: f64 = 10.0;

/// Radians added to each side of the category text arc
pub const CATEGORY_TEXT_OVERLAP: f64 = 0.5;
pub const CATEGORY_TEXT_DY: f64 = 6.0;
pub const CATEGORY_TEXT_DY_REVERSED: f64 = -21.0;

/// Detail button distance outward from the petal base
pub const BUTTON_OFFSET: f64 = 20.0;
pub const DETAIL_BUTTON_SIZE: f64 = 30.0;
pub const INNER_CONTENT_INSET: f64 = 20.0;

/// Decimal digits kept in generated path data
pub const PATH_DIGITS: u32 = 3;

/// Scale applied to the whole figure while it is scrolled out of view
pub const OUT_OF_VIEW_SCALE: f64 = 0.9;
