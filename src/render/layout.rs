//! Radial layout: records to petal and category-ring geometry.
//!
//! Two nested band scales do the partitioning. The outer one gives every
//! record an equal slot around the full circle; a category's band is the
//! union of its members' slots, trimmed on both sides. The inner one
//! re-partitions each category band into the petals that are actually drawn.
//!
//! [`layout`] is pure: the same dataset, interaction state and config always
//! produce the same [`RenderModel`].

use glam::{DVec2, dvec2};
use std::ops::Range;

use super::arc::ArcShape;
use super::band::BandScale;
use super::geometry::{LabelPlacement, arc_path_for_text, is_text_reversed, label_placement};
use crate::config::LayoutConfig;
use crate::data::{Dataset, SolutionId};
use crate::interaction::{CenterPanel, InteractionState};
use crate::types::Radians;

/// A `(start, end)` angle pair, clockwise from 12 o'clock
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AngularSlot {
    pub start: Radians,
    pub end: Radians,
}

impl AngularSlot {
    pub fn new(start: Radians, end: Radians) -> Self {
        Self { start, end }
    }

    pub fn width(&self) -> Radians {
        self.end - self.start
    }
}

/// Everything needed to draw one petal
#[derive(Debug, Clone, PartialEq)]
pub struct PetalGeometry {
    pub id: SolutionId,
    pub category: String,
    /// Label text
    pub abbreviation: String,
    /// Slot on the full circle, before category grouping
    pub slot: AngularSlot,
    /// Drawn extent, from the category's nested band scale
    pub angles: AngularSlot,
    pub inner_radius: f64,
    pub outer_radius: f64,
    pub pad_angle: Radians,
    pub corner_radius: f64,
    pub path: String,
    /// Same sector without padding; the invisible pointer target
    pub hover_path: String,
    pub label: LabelPlacement,
    pub dimmed: bool,
    pub hovered: bool,
}

/// Everything needed to draw one category ring and its curved label
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryArcGeometry {
    pub name: String,
    /// Union of the members' slots, inset by the circle padding
    pub band: AngularSlot,
    /// Visible ring extent: `band` trimmed by the group spacing
    pub angles: AngularSlot,
    pub inner_radius: f64,
    pub outer_radius: f64,
    pub corner_radius: f64,
    pub path: String,
    /// Ring widened on both sides so short categories do not clip their label
    pub text_angles: AngularSlot,
    pub default_text_arc: String,
    pub reversed_text_arc: String,
    /// Open curve the label follows; empty for a degenerate ring
    pub text_path: String,
    pub text_dy: f64,
    /// Label follows the counter-clockwise arc
    pub reversed: bool,
    /// Indices into [`RenderModel::petals`]
    pub petals: Range<usize>,
    pub dimmed: bool,
}

/// Canvas size and derived radii
#[derive(Debug, Clone, PartialEq)]
pub struct CanvasMetrics {
    pub width: f64,
    pub height: f64,
    /// Origin of all geometry in canvas coordinates
    pub center: DVec2,
    pub inner_radius: f64,
    pub outer_radius_petals: f64,
    pub inner_radius_categories: f64,
    pub outer_radius_categories: f64,
    /// Top-left of the central panel relative to the center
    pub inner_content_offset: DVec2,
    pub inner_content_size: f64,
    pub detail_button_size: f64,
}

impl CanvasMetrics {
    fn new(config: &LayoutConfig) -> Self {
        let inner_radius = config.inner_radius();
        let inset = inner_radius - config.inner_content_inset;
        Self {
            width: config.width,
            height: config.height,
            center: dvec2(config.width / 2.0, config.height / 2.0),
            inner_radius,
            outer_radius_petals: config.outer_radius_petals(),
            inner_radius_categories: config.inner_radius_categories(),
            outer_radius_categories: config.outer_radius_categories(),
            inner_content_offset: dvec2(-inset, -inset),
            inner_content_size: inset * 2.0,
            detail_button_size: config.detail_button_size,
        }
    }
}

/// The complete drawable state of the visualization
#[derive(Debug, Clone, PartialEq)]
pub struct RenderModel {
    pub canvas: CanvasMetrics,
    /// In dataset order, grouped by category
    pub petals: Vec<PetalGeometry>,
    pub categories: Vec<CategoryArcGeometry>,
    pub center: CenterPanel,
}

impl RenderModel {
    /// Petals of one category.
    pub fn petals_of(&self, category: &CategoryArcGeometry) -> &[PetalGeometry] {
        &self.petals[category.petals.clone()]
    }

    pub fn petal(&self, id: &SolutionId) -> Option<&PetalGeometry> {
        self.petals.iter().find(|p| &p.id == id)
    }
}

/// Lay out every record and category of `dataset`.
///
/// An empty dataset yields a model with no petals or categories.
pub fn layout(dataset: &Dataset, interaction: &InteractionState, config: &LayoutConfig) -> RenderModel {
    let canvas = CanvasMetrics::new(config);
    let circle = BandScale::new(
        dataset.len(),
        Radians::ZERO,
        Radians::FULL_TURN,
        config.circle_padding,
    );

    let mut petals = Vec::with_capacity(dataset.len());
    let mut categories = Vec::with_capacity(dataset.categories().len());

    for group in dataset.categories() {
        let (Some((first_start, _)), Some((_, last_end))) =
            (circle.band(group.range.start), circle.band(group.range.end - 1))
        else {
            continue;
        };

        let (band, angles) = inset_category(AngularSlot::new(first_start, last_end), config);

        let petal_scale = BandScale::new(group.len(), angles.start, angles.end, config.petal_padding);
        let bandwidth = petal_scale.bandwidth();
        let first_petal = petals.len();

        for (offset, solution) in dataset.members(group).iter().enumerate() {
            let index = group.range.start + offset;
            let (Some(start), Some((slot_start, slot_end))) = (petal_scale.start(offset), circle.band(index))
            else {
                continue;
            };
            petals.push(petal(
                solution.id.clone(),
                &solution.category,
                &solution.abbreviation,
                AngularSlot::new(slot_start, slot_end),
                AngularSlot::new(start, start + bandwidth),
                interaction,
                config,
            ));
        }

        categories.push(category_arc(
            &group.name,
            band,
            angles,
            first_petal..petals.len(),
            interaction,
            config,
        ));
    }

    crate::log::debug!(
        petals = petals.len(),
        categories = categories.len(),
        "layout"
    );

    RenderModel {
        canvas,
        petals,
        categories,
        center: interaction.center_panel(dataset),
    }
}

/// Largest share of a category's span that the insets on one side may take
const MAX_INSET_SHARE: f64 = 0.45;

/// Smallest angular gap left open in a category's text arc
const TEXT_ARC_GAP: Radians = Radians(0.02);

/// Trim a category's combined slots into its padded band and visible ring.
///
/// The circle padding (applied as an angle) and the group spacing are cut from
/// both sides. When the category is too narrow for both, they shrink together
/// so the ring keeps a positive width inside its own slots.
fn inset_category(span: AngularSlot, config: &LayoutConfig) -> (AngularSlot, AngularSlot) {
    let padding = Radians(config.circle_padding);
    let spacing = config.group_spacing;
    let wanted = (padding + spacing).raw();
    let limit = span.width().raw() * MAX_INSET_SHARE;
    let scale = if wanted > limit { limit / wanted } else { 1.0 };

    let band = AngularSlot::new(span.start + padding * scale, span.end - padding * scale);
    let angles = AngularSlot::new(band.start + spacing * scale, band.end - spacing * scale);
    (band, angles)
}

fn petal(
    id: SolutionId,
    category: &str,
    abbreviation: &str,
    slot: AngularSlot,
    angles: AngularSlot,
    interaction: &InteractionState,
    config: &LayoutConfig,
) -> PetalGeometry {
    let inner_radius = config.inner_radius();
    let outer_radius = config.outer_radius_petals();
    let pad_angle = Radians(config.petal_padding);

    let hover_shape = ArcShape::new(inner_radius, outer_radius, angles.start, angles.end)
        .with_corner_radius(config.petal_corner_radius);
    let shape = hover_shape.with_pad_angle(pad_angle);

    let label = label_placement(
        angles.start,
        angles.width(),
        inner_radius,
        outer_radius - inner_radius,
        config.button_offset,
    );

    PetalGeometry {
        dimmed: interaction.is_petal_dimmed(&id),
        hovered: interaction.is_petal_hovered(&id),
        id,
        category: category.to_string(),
        abbreviation: abbreviation.to_string(),
        slot,
        angles,
        inner_radius,
        outer_radius,
        pad_angle,
        corner_radius: config.petal_corner_radius,
        path: shape.path(config.path_digits),
        hover_path: hover_shape.path(config.path_digits),
        label,
    }
}

fn category_arc(
    name: &str,
    band: AngularSlot,
    angles: AngularSlot,
    petals: Range<usize>,
    interaction: &InteractionState,
    config: &LayoutConfig,
) -> CategoryArcGeometry {
    let inner_radius = config.inner_radius_categories();
    let outer_radius = config.outer_radius_categories();
    let corner_radius = config.category_corner_radius;
    let digits = config.path_digits;
    let overlap = config.category_text_overlap;

    let ring = |start, end| {
        ArcShape::new(inner_radius, outer_radius, start, end)
            .with_corner_radius(corner_radius)
            .path(digits)
    };

    // Never widen the label arc to a full turn; d3 would close it into a circle
    let room = (Radians::FULL_TURN - angles.width() - TEXT_ARC_GAP) / 2.0;
    let overlap = overlap.min(room);
    let text_angles = AngularSlot::new(angles.start - overlap, angles.end + overlap);
    let default_text_arc = ring(text_angles.start, text_angles.end);
    let reversed_text_arc = ring(text_angles.end, text_angles.start);
    let text_path = arc_path_for_text(angles.start, &default_text_arc, &reversed_text_arc);
    let reversed = is_text_reversed(angles.start);

    CategoryArcGeometry {
        name: name.to_string(),
        band,
        angles,
        inner_radius,
        outer_radius,
        corner_radius,
        path: ring(angles.start, angles.end),
        text_angles,
        default_text_arc,
        reversed_text_arc,
        text_path,
        text_dy: if reversed {
            config.category_text_dy_reversed
        } else {
            config.category_text_dy
        },
        reversed,
        petals,
        dimmed: interaction.is_category_dimmed(name),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Solution;
    use crate::interaction::PointerEvent;
    use std::f64::consts::TAU;

    fn grid(categories: usize, per: usize) -> Dataset {
        let mut solutions = Vec::new();
        for c in 0..categories {
            for p in 0..per {
                let id = format!("C{c}-{p}");
                solutions.push(Solution::new(id.clone(), format!("Category {c}"), id, "name"));
            }
        }
        Dataset::new(solutions)
    }

    #[test]
    fn empty_dataset_is_empty_model() {
        let model = layout(&Dataset::empty(), &InteractionState::new(), &LayoutConfig::default());
        assert!(model.petals.is_empty());
        assert!(model.categories.is_empty());
        assert_eq!(model.center, CenterPanel::Instructions);
    }

    #[test]
    fn one_petal_per_record_and_one_arc_per_category() {
        let model = layout(&grid(6, 3), &InteractionState::new(), &LayoutConfig::default());
        assert_eq!(model.petals.len(), 18);
        assert_eq!(model.categories.len(), 6);
        for cat in &model.categories {
            assert_eq!(model.petals_of(cat).len(), 3);
            assert!(model.petals_of(cat).iter().all(|p| p.category == cat.name));
        }
    }

    #[test]
    fn petals_stay_inside_their_category() {
        let model = layout(&grid(4, 5), &InteractionState::new(), &LayoutConfig::default());
        for cat in &model.categories {
            for p in model.petals_of(cat) {
                assert!(p.angles.start.raw() >= cat.angles.start.raw() - 1e-12);
                assert!(p.angles.end.raw() <= cat.angles.end.raw() + 1e-12);
            }
        }
    }

    #[test]
    fn single_record_category_has_width() {
        let ds = Dataset::new(vec![Solution::new("only", "Solo", "S", "Solo")]);
        let model = layout(&ds, &InteractionState::new(), &LayoutConfig::default());
        let cat = &model.categories[0];
        assert!(cat.angles.width().raw() > 0.0);
        assert!(model.petals[0].angles.width().raw() > 0.0);
        // A lone category covers nearly the full circle
        assert!(cat.band.width().raw() > TAU * 0.9);
    }

    #[test]
    fn lone_category_keeps_its_label() {
        let model = layout(&grid(1, 4), &InteractionState::new(), &LayoutConfig::default());
        let cat = &model.categories[0];
        assert!(cat.text_angles.width().raw() < TAU);
        assert!(cat.text_path.starts_with('M'), "{:?}", cat.text_path);
    }

    #[test]
    fn dominant_category_keeps_its_label() {
        let mut solutions: Vec<Solution> = (0..20)
            .map(|i| Solution::new(format!("A{i}"), "Alpha", "A", "a"))
            .collect();
        solutions.push(Solution::new("B0", "Beta", "B", "b"));
        let model = layout(&Dataset::new(solutions), &InteractionState::new(), &LayoutConfig::default());
        for cat in &model.categories {
            assert!(!cat.text_path.is_empty(), "{} lost its label", cat.name);
        }
        // Narrow categories still get the full overlap
        let beta = &model.categories[1];
        let widened = beta.text_angles.width() - beta.angles.width();
        assert!((widened.raw() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn narrow_categories_shrink_their_insets() {
        let model = layout(&grid(200, 1), &InteractionState::new(), &LayoutConfig::default());
        for (cat, next) in model.categories.iter().zip(model.categories.iter().skip(1)) {
            assert!(cat.band.start.raw() < cat.angles.start.raw());
            assert!(cat.angles.start.raw() < cat.angles.end.raw(), "{} inverted", cat.name);
            assert!(cat.angles.end.raw() < cat.band.end.raw());
            assert!(cat.band.end.raw() < next.band.start.raw());
        }
    }

    #[test]
    fn hover_marks_petals_and_categories() {
        let ds = grid(2, 2);
        let mut state = InteractionState::new();
        state.apply(&PointerEvent::Enter("C0-1".into()), &ds);
        let model = layout(&ds, &state, &LayoutConfig::default());

        let hovered: Vec<&str> = model.petals.iter().filter(|p| p.hovered).map(|p| p.id.as_str()).collect();
        assert_eq!(hovered, ["C0-1"]);
        assert_eq!(model.petals.iter().filter(|p| p.dimmed).count(), 3);
        assert!(!model.categories[0].dimmed);
        assert!(model.categories[1].dimmed);
        assert!(matches!(model.center, CenterPanel::Preview(_)));
    }

    #[test]
    fn hover_path_has_no_padding() {
        let model = layout(&grid(1, 2), &InteractionState::new(), &LayoutConfig::default());
        let p = &model.petals[0];
        assert_ne!(p.path, p.hover_path);
        assert_eq!(p.pad_angle, Radians(0.01));
    }

    #[test]
    fn text_offset_follows_hemisphere() {
        let model = layout(&grid(4, 1), &InteractionState::new(), &LayoutConfig::default());
        for cat in &model.categories {
            let expected = if cat.reversed { -21.0 } else { 6.0 };
            assert_eq!(cat.text_dy, expected);
            assert!(cat.text_path.starts_with('M'), "{}", cat.text_path);
        }
        // Rings start just clockwise of 0°, 90°, 180° and 270°
        let reversed: Vec<bool> = model.categories.iter().map(|c| c.reversed).collect();
        assert_eq!(reversed, [false, true, true, false]);
    }

    #[test]
    fn canvas_metrics() {
        let model = layout(&Dataset::empty(), &InteractionState::new(), &LayoutConfig::default());
        assert_eq!(model.canvas.center, dvec2(650.0, 650.0));
        assert_eq!(model.canvas.inner_content_offset, dvec2(-261.0, -261.0));
        assert_eq!(model.canvas.inner_content_size, 522.0);
    }
}
