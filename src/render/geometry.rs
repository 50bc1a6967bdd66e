//! Geometry helpers: angle conversion, curved-text paths and label placement

use crate::types::{Degrees, Radians};

use super::path::open_arc_prefix;

/// Convert an angle to degrees for SVG `rotate()`.
pub fn radians_to_degrees(angle: Radians) -> Degrees {
    angle.to_degrees()
}

/// Path for a `<textPath>` along a category arc.
///
/// Labels in the bottom half of the circle would render upside-down along a
/// clockwise path, so for start angles strictly between 90° and 270° the
/// counter-clockwise `reversed_path` is used instead. Only the outer curve of
/// the chosen sector is kept: everything from the first line-to onward is
/// dropped.
///
/// # Arguments
/// * `start_angle` - Start of the category band, clockwise from 12 o'clock.
/// * `default_path` - Closed sector path drawn clockwise.
/// * `reversed_path` - Same sector drawn counter-clockwise.
///
/// Degenerate input (no line-to, unparseable data, or a sector that collapsed
/// to a point) yields an empty string rather than an error.
pub fn arc_path_for_text(start_angle: Radians, default_path: &str, reversed_path: &str) -> String {
    let source = if is_text_reversed(start_angle) {
        reversed_path
    } else {
        default_path
    };

    match open_arc_prefix(source) {
        Ok(Some(prefix)) => prefix,
        Ok(None) => {
            crate::log::warn!(path = source, "no open arc in category path; label will not render");
            String::new()
        }
        Err(_e) => {
            crate::log::warn!(error = %_e, "failed to tokenize category path");
            String::new()
        }
    }
}

/// Whether a category label at `start_angle` reads along the reversed arc.
pub fn is_text_reversed(start_angle: Radians) -> bool {
    radians_to_degrees(start_angle).normalized().is_bottom_facing()
}

/// Where a petal's label and detail button sit.
///
/// Both are positioned with `rotate(angle) translate(x, 0)`: the label along
/// the petal's mid-line, the button near the petal base with a counter-rotation
/// so its icon stays upright.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelPlacement {
    pub text_rotation: Degrees,
    pub text_translate: f64,
    pub button_translate: f64,
    pub button_counter_rotation: Degrees,
    /// Petal sits in the left half; label turned 180° to stay readable
    pub flipped: bool,
}

/// Label placement for a petal spanning `start`..`start + bandwidth`.
pub fn label_placement(
    start: Radians,
    bandwidth: Radians,
    inner_radius: f64,
    petal_length: f64,
    button_offset: f64,
) -> LabelPlacement {
    let mid = radians_to_degrees(start + bandwidth / 2.0);
    let mut text_rotation = mid - 90.0;
    let mut button_counter_rotation = -mid - 90.0 + 180.0;
    let mut text_translate = inner_radius + petal_length / 2.0;
    let mut button_translate = inner_radius + button_offset;

    let flipped = radians_to_degrees(start).normalized().is_lower_hemisphere();
    if flipped {
        text_rotation = text_rotation + 180.0;
        button_counter_rotation = button_counter_rotation + 180.0;
        text_translate = -text_translate;
        button_translate = -button_translate;
    }

    LabelPlacement {
        text_rotation,
        text_translate,
        button_translate,
        button_counter_rotation,
        flipped,
    }
}
