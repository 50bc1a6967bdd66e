//! Structure of the generated SVG markup

use petalviz::data::{DatasetKind, InMemorySource};
use petalviz::render::parse_path;
use petalviz::{Environment, LayoutConfig, PointerEvent, RenderOptions, Viz};
use regex_lite::Regex;

const SOLUTIONS: &str = "\
Category,Solution ID,Solution abbreviation,Solution
Workforce Solutions,W-1,Apprenticeships,Registered apprenticeships for educators
Workforce Solutions,W-2,Scholarships,T.E.A.C.H. style scholarships
Family Solutions,F-1,Tax Credits,\"Child tax credit, expanded\"
Family Solutions,F-2,Paid Leave,Paid family leave
Family Solutions,F-3,Navigators,Family navigators
Policy Solutions,P-1,<Zoning>,Zoning reform & permits
";

fn render(hover: Option<&str>, in_view: bool) -> String {
    let source = InMemorySource::new().with(DatasetKind::Solutions, SOLUTIONS);
    let mut viz = Viz::new(
        LayoutConfig::default(),
        RenderOptions::for_environment(Environment::Development),
    )
    .unwrap();
    viz.load(&source).unwrap();
    viz.set_in_view(in_view);
    if let Some(id) = hover {
        let mut sink = petalviz::detail::RecordingSink::new();
        viz.handle(&PointerEvent::Enter(id.into()), &source, &mut sink);
    }
    viz.render_svg().unwrap()
}

#[test]
fn one_group_per_category_and_petal() {
    let svg = render(None, true);
    let categories = Regex::new(r#"<g class="category" data-category="([^"]*)">"#).unwrap();
    let names: Vec<&str> = categories
        .captures_iter(&svg)
        .map(|c| c.get(1).unwrap().as_str())
        .collect();
    assert_eq!(names, ["Family Solutions", "Policy Solutions", "Workforce Solutions"]);

    let petals = Regex::new(r#"<g class="petal" data-category="[^"]*" data-solution="[^"]*" data-solution-id="([^"]*)""#).unwrap();
    let ids: Vec<&str> = petals.captures_iter(&svg).map(|c| c.get(1).unwrap().as_str()).collect();
    assert_eq!(ids, ["F-1", "F-2", "F-3", "P-1", "W-1", "W-2"]);
    assert_eq!(svg.matches(r#"<g class="petalGroup">"#).count(), 3);
}

#[test]
fn text_paths_reference_their_defs() {
    let svg = render(None, true);
    let defs = Regex::new(r#"<path d="([^"]*)" id="category-path-(\d+)""#).unwrap();
    let refs = Regex::new(r##"<textPath href="#category-path-(\d+)""##).unwrap();

    let def_ids: Vec<&str> = defs.captures_iter(&svg).map(|c| c.get(2).unwrap().as_str()).collect();
    let ref_ids: Vec<&str> = refs.captures_iter(&svg).map(|c| c.get(1).unwrap().as_str()).collect();
    assert_eq!(def_ids, ["0", "1", "2"]);
    assert_eq!(def_ids, ref_ids);

    for c in defs.captures_iter(&svg) {
        let d = c.get(1).unwrap().as_str();
        // Open curve: no line-to, no close
        assert!(d.starts_with("M "), "{d}");
        assert!(!d.contains('L') && !d.contains('Z'), "{d}");
    }
}

#[test]
fn every_path_parses() {
    let svg = render(Some("F-2"), true);
    let paths = Regex::new(r#" d="([^"]*)""#).unwrap();
    let mut count = 0;
    for c in paths.captures_iter(&svg) {
        let d = c.get(1).unwrap().as_str();
        let commands = parse_path(d).unwrap_or_else(|e| panic!("{d}: {e}"));
        assert!(!commands.is_empty());
        count += 1;
    }
    // Two per petal, two per category
    assert_eq!(count, 6 * 2 + 3 * 2);
}

#[test]
fn label_transforms_are_rotations() {
    let svg = render(None, true);
    let labels =
        Regex::new(r#"<text text-anchor="middle" y="5" transform="rotate\((-?[\d.e-]+)\) translate\((-?[\d.]+),0\)""#)
            .unwrap();
    let translations: Vec<f64> = labels
        .captures_iter(&svg)
        .map(|c| c.get(2).unwrap().as_str().parse().unwrap())
        .collect();
    assert_eq!(translations.len(), 6);
    assert!(translations.iter().all(|t| t.abs() == 426.0));
    assert!(translations.iter().any(|t| *t < 0.0));
    assert!(translations.iter().any(|t| *t > 0.0));
}

#[test]
fn text_is_escaped() {
    let svg = render(Some("P-1"), true);
    assert!(svg.contains(r#"data-solution="&lt;Zoning&gt;""#));
    assert!(svg.contains(r#"<p class="solution-subtitle">Zoning reform &amp; permits</p>"#));
    assert!(!svg.contains("<Zoning>"));
}

#[test]
fn hover_classes() {
    let svg = render(Some("W-1"), true);
    assert_eq!(svg.matches("petal__not_hovered").count(), 5);
    assert_eq!(svg.matches("category__not_hovered").count(), 2);
    let pill = Regex::new(r#"<div class="category-pill" data-category="([^"]*)">"#).unwrap();
    assert_eq!(
        pill.captures(&svg).and_then(|c| c.get(1)).map(|m| m.as_str()),
        Some("Workforce Solutions")
    );
    assert!(svg.contains(r#"src="./assets/illustrations/Workforce Solutions.svg""#));
}

#[test]
fn out_of_view_scale() {
    assert!(render(None, false).contains(r#"class="solutions-viz" style="transform: scale(0.9)""#));
    assert!(render(None, true).contains(r#"class="solutions-viz in-view" style="transform: scale(1)""#));
}
