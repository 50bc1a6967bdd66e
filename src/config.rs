//! Layout parameters and render options

use crate::errors::ConfigError;
use crate::render::defaults;
use crate::types::{Radians, check_finite, check_non_negative};

/// Geometry parameters for the radial layout.
///
/// Radii are derived from the canvas outward-in: category ring at the edge,
/// then a gap, then the petals.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutConfig {
    pub width: f64,
    pub height: f64,
    pub margin: f64,
    pub category_ring_width: f64,
    pub ring_petal_gap: f64,
    pub petal_length: f64,
    pub circle_padding: f64,
    pub group_spacing: Radians,
    pub petal_padding: f64,
    pub petal_corner_radius: f64,
    pub category_corner_radius: f64,
    pub category_text_overlap: Radians,
    pub category_text_dy: f64,
    pub category_text_dy_reversed: f64,
    pub button_offset: f64,
    pub detail_button_size: f64,
    pub inner_content_inset: f64,
    pub path_digits: u32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            width: defaults::CANVAS_SIZE,
            height: defaults::CANVAS_SIZE,
            margin: defaults::MARGIN,
            category_ring_width: defaults::CATEGORY_RING_WIDTH,
            ring_petal_gap: defaults::RING_PETAL_GAP,
            petal_length: defaults::PETAL_LENGTH,
            circle_padding: defaults::CIRCLE_PADDING,
            group_spacing: Radians(defaults::GROUP_SPACING),
            petal_padding: defaults::PETAL_PADDING,
            petal_corner_radius: defaults::PETAL_CORNER_RADIUS,
            category_corner_radius: defaults::CATEGORY_CORNER_RADIUS,
            category_text_overlap: Radians(defaults::CATEGORY_TEXT_OVERLAP),
            category_text_dy: defaults::CATEGORY_TEXT_DY,
            category_text_dy_reversed: defaults::CATEGORY_TEXT_DY_REVERSED,
            button_offset: defaults::BUTTON_OFFSET,
            detail_button_size: defaults::DETAIL_BUTTON_SIZE,
            inner_content_inset: defaults::INNER_CONTENT_INSET,
            path_digits: defaults::PATH_DIGITS,
        }
    }
}

impl LayoutConfig {
    pub fn outer_radius_categories(&self) -> f64 {
        self.width / 2.0 - self.margin
    }

    pub fn inner_radius_categories(&self) -> f64 {
        self.outer_radius_categories() - self.category_ring_width
    }

    pub fn outer_radius_petals(&self) -> f64 {
        self.inner_radius_categories() - self.ring_petal_gap
    }

    pub fn inner_radius(&self) -> f64 {
        self.outer_radius_petals() - self.petal_length
    }

    /// Check every parameter; the layout assumes a validated config.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let lengths = [
            ("width", self.width),
            ("height", self.height),
            ("margin", self.margin),
            ("category_ring_width", self.category_ring_width),
            ("ring_petal_gap", self.ring_petal_gap),
            ("petal_length", self.petal_length),
            ("petal_corner_radius", self.petal_corner_radius),
            ("category_corner_radius", self.category_corner_radius),
            ("group_spacing", self.group_spacing.raw()),
            ("category_text_overlap", self.category_text_overlap.raw()),
            ("detail_button_size", self.detail_button_size),
            ("inner_content_inset", self.inner_content_inset),
        ];
        for (name, value) in lengths {
            check_non_negative(value).map_err(|source| ConfigError::InvalidValue { name, source })?;
        }

        let offsets = [
            ("category_text_dy", self.category_text_dy),
            ("category_text_dy_reversed", self.category_text_dy_reversed),
            ("button_offset", self.button_offset),
        ];
        for (name, value) in offsets {
            check_finite(value).map_err(|source| ConfigError::InvalidValue { name, source })?;
        }

        for (name, value) in [
            ("circle_padding", self.circle_padding),
            ("petal_padding", self.petal_padding),
        ] {
            check_finite(value).map_err(|source| ConfigError::InvalidValue { name, source })?;
            if !(0.0..1.0).contains(&value) {
                return Err(ConfigError::OutOfRange {
                    name,
                    value,
                    expected: "a fraction in [0, 1)",
                });
            }
        }

        let inner = self.inner_radius();
        if inner <= 0.0 {
            return Err(ConfigError::DegenerateRadius { inner });
        }
        Ok(())
    }
}

/// Where the page is served from; decides the asset base URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    Development,
    #[default]
    Production,
}

impl Environment {
    pub const ENV_VAR: &'static str = "PETALVIZ_ENV";

    /// Read `PETALVIZ_ENV`; anything but `development` means production.
    pub fn from_env() -> Self {
        match std::env::var(Self::ENV_VAR) {
            Ok(value) => Self::parse(&value),
            Err(_) => Self::Production,
        }
    }

    pub fn parse(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("development") {
            Self::Development
        } else {
            Self::Production
        }
    }

    pub fn asset_base(self) -> &'static str {
        match self {
            Self::Development => "./assets",
            Self::Production => "https://datacult.github.io/caseforchildcare-y2-solutions-viz/assets",
        }
    }
}

/// Presentation options that do not affect geometry
#[derive(Debug, Clone, PartialEq)]
pub struct RenderOptions {
    /// Prefix for illustrations and the detail button image
    pub asset_base: String,
    /// Figure scale while out of view; 1.0 once visible
    pub out_of_view_scale: f64,
}

impl RenderOptions {
    pub fn for_environment(env: Environment) -> Self {
        crate::log::info!(?env, asset_base = env.asset_base(), "render options");
        Self {
            asset_base: env.asset_base().to_string(),
            out_of_view_scale: defaults::OUT_OF_VIEW_SCALE,
        }
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self::for_environment(Environment::default())
    }
}
