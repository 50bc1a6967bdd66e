//! Geometric properties of the radial layout over a range of dataset shapes

use petalviz::data::{Dataset, Solution};
use petalviz::render::{BandScale, arc_path_for_text, layout};
use petalviz::types::Radians;
use petalviz::{InteractionState, LayoutConfig, PointerEvent, RenderModel};
use std::f64::consts::{PI, TAU};

const EPS: f64 = 1e-9;

fn dataset(shape: &[usize]) -> Dataset {
    let mut solutions = Vec::new();
    for (c, &count) in shape.iter().enumerate() {
        for p in 0..count {
            let id = format!("S{c:02}-{p:02}");
            solutions.push(Solution::new(
                id.clone(),
                format!("Category {c:02}"),
                format!("Abbr {p}"),
                format!("Solution {id}"),
            ));
        }
    }
    Dataset::new(solutions)
}

fn model(shape: &[usize]) -> RenderModel {
    layout(&dataset(shape), &InteractionState::new(), &LayoutConfig::default())
}

#[test]
fn record_slots_and_padding_fill_the_circle() {
    for n in 0..=64 {
        let scale = BandScale::new(n, Radians::ZERO, Radians::FULL_TURN, 0.01);
        if n == 0 {
            assert!(scale.is_empty());
            continue;
        }
        let bands: Vec<(f64, f64)> = scale.bands().map(|(s, e)| (s.raw(), e.raw())).collect();
        let widths: f64 = bands.iter().map(|(s, e)| e - s).sum();
        let inner_gaps: f64 = bands.windows(2).map(|w| w[1].0 - w[0].1).sum();
        let outer_gaps = bands[0].0 + (TAU - bands[n - 1].1);
        assert!(
            (widths + inner_gaps + outer_gaps - TAU).abs() < EPS,
            "n={n}: {}",
            widths + inner_gaps + outer_gaps
        );
        assert!(bands.windows(2).all(|w| w[0].1 <= w[1].0), "n={n} overlaps");
    }
}

#[test]
fn category_bands_are_ordered_and_disjoint() {
    for shape in [&[1][..], &[2, 1], &[3, 3, 3], &[1, 7, 2, 5], &[4; 9], &[1; 120], &[1; 300], &[40, 1, 1]] {
        let m = model(shape);
        let cats = &m.categories;
        assert_eq!(cats.len(), shape.len());

        let mut covered = 0.0;
        for (i, cat) in cats.iter().enumerate() {
            assert!(cat.angles.start.raw() < cat.angles.end.raw(), "{shape:?} #{i} empty");
            covered += cat.angles.width().raw();
            let next_start = match cats.get(i + 1) {
                Some(next) => next.angles.start.raw(),
                None => cats[0].angles.start.raw() + TAU,
            };
            let gap = next_start - cat.angles.end.raw();
            assert!(gap > 0.0, "{shape:?} #{i} overlaps its successor");
            covered += gap;
        }
        assert!((covered - TAU).abs() < EPS, "{shape:?}: {covered}");
    }
}

#[test]
fn every_category_label_has_a_path() {
    for shape in [&[1][..], &[12], &[20, 1], &[1, 30, 1], &[1; 120]] {
        let m = model(shape);
        for cat in &m.categories {
            assert!(cat.text_angles.width().raw() < TAU, "{shape:?} {}", cat.name);
            assert!(!cat.text_path.is_empty(), "{shape:?} {} has no label path", cat.name);
        }
    }
}

#[test]
fn six_categories_of_three() {
    let m = model(&[3; 6]);
    assert_eq!(m.petals.len(), 18);
    assert_eq!(m.categories.len(), 6);

    let first = m.categories[0].angles.width().raw();
    for cat in &m.categories {
        assert!((cat.angles.width().raw() - first).abs() < EPS);
        assert!(cat.angles.width().raw() < TAU / 6.0);
        assert_eq!(m.petals_of(cat).len(), 3);
    }

    let mut petals: Vec<(f64, f64)> = m
        .petals
        .iter()
        .map(|p| (p.angles.start.raw(), p.angles.end.raw()))
        .collect();
    petals.sort_by(|a, b| a.0.total_cmp(&b.0));
    assert!(petals.windows(2).all(|w| w[0].1 <= w[1].0));
    let total: f64 = petals.iter().map(|(s, e)| e - s).sum();
    assert!(total < TAU);
}

#[test]
fn petal_labels_flip_on_the_left_half() {
    let m = model(&[5, 4, 6, 3, 2]);
    for petal in &m.petals {
        let start = petal.angles.start.raw().rem_euclid(TAU);
        let flipped = start > PI;
        assert_eq!(petal.label.flipped, flipped, "{}", petal.id);
        assert_eq!(petal.label.text_translate < 0.0, flipped);
        assert_eq!(petal.label.button_translate < 0.0, flipped);
    }
}

#[test]
fn text_arc_selection_boundaries() {
    let default = "M0,-630A630,630,0,0,1,630,0L603,0A603,603,0,0,0,0,-603Z";
    let reversed = "M630,0A630,630,0,0,0,0,-630L0,-603A603,603,0,0,1,603,0Z";
    let pick = |deg: f64| arc_path_for_text(Radians(deg * PI / 180.0), default, reversed);

    assert!(pick(90.0).starts_with("M 0 -630"));
    assert!(pick(270.0).starts_with("M 0 -630"));
    assert!(pick(90.5).starts_with("M 630 0"));
    assert!(pick(269.5).starts_with("M 630 0"));
    assert!(pick(45.0).starts_with("M 0 -630"));
}

#[test]
fn layout_is_idempotent() {
    let ds = dataset(&[2, 5, 1, 3]);
    let mut state = InteractionState::new();
    state.apply(&PointerEvent::Enter("S01-02".into()), &ds);
    let config = LayoutConfig::default();
    assert_eq!(layout(&ds, &state, &config), layout(&ds, &state, &config));
}

#[test]
fn at_most_one_petal_hovered() {
    let ds = dataset(&[3, 3, 3]);
    let ids: Vec<String> = ds.solutions().iter().map(|s| s.id.to_string()).collect();
    let mut state = InteractionState::new();
    let config = LayoutConfig::default();

    // A deterministic but irregular walk over enter and leave events
    for step in 0..60usize {
        let id = ids[(step * 7 + 3) % ids.len()].as_str();
        let event = if step % 3 == 2 {
            PointerEvent::Leave(id.into())
        } else {
            PointerEvent::Enter(id.into())
        };
        state.apply(&event, &ds);
        let m = layout(&ds, &state, &config);
        let hovered = m.petals.iter().filter(|p| p.hovered).count();
        assert!(hovered <= 1, "step {step}: {hovered} hovered");
        assert_eq!(hovered == 1, state.hover().is_active());
    }
}

#[test]
fn every_path_is_closed() {
    let m = model(&[1, 2, 8]);
    for petal in &m.petals {
        assert!(petal.path.starts_with('M') && petal.path.ends_with('Z'));
        assert!(petal.hover_path.starts_with('M') && petal.hover_path.ends_with('Z'));
    }
    for cat in &m.categories {
        assert!(cat.path.ends_with('Z'));
    }
}
