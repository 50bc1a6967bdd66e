//! Detail dispatch against in-memory exports

use petalviz::data::{DatasetKind, InMemorySource};
use petalviz::detail::{ListKind, RecordingSink, SinkCommand};
use petalviz::{LayoutConfig, PointerEvent, RenderOptions, Viz};

const SOLUTIONS: &str = "\
Category,Solution ID,Solution abbreviation,Solution
Direct Care Solutions,CC-014,Pay Parity,Raise wages for early educators to parity with public school teachers
Direct Care Solutions,CC-001,Subsidies,Expand child care subsidies
Employer Solutions,CC-020,On-site Care,Offer care at the workplace
";

const RESOURCES: &str = "\
Solution ID,Resource link,Resource title,Resource description
CC-014,https://example.org/parity,Parity toolkit,How states fund parity
CC-001,https://example.org/subsidies,Subsidy guide,Not for CC-014
CC-014,https://example.org/brief,\"Policy brief, 2024\",Short summary
CC-0140,https://example.org/near-miss,Near miss,Id is only a prefix match
";

const QUOTES: &str = "\
Solution ID,Quote,Author name,Author title
CC-014,\"We lost three teachers last year.\",Maria Lopez,Center Director
cc-014,Lowercase id must not match,Someone,Nobody
";

const CASE_STUDIES: &str = "\
Solution ID,Case study title,Case study description,Case study link
CC-020,Factory floor care,An employer story,https://example.org/factory
CC-014,New Mexico,Statewide wage scale,https://example.org/nm
";

fn source() -> InMemorySource {
    InMemorySource::new()
        .with(DatasetKind::Solutions, SOLUTIONS)
        .with(DatasetKind::Resources, RESOURCES)
        .with(DatasetKind::Quotes, QUOTES)
        .with(DatasetKind::CaseStudies, CASE_STUDIES)
}

fn viz() -> Viz {
    let mut viz = Viz::new(LayoutConfig::default(), RenderOptions::default()).unwrap();
    viz.load(&source()).unwrap();
    viz
}

#[test]
fn click_populates_detail_for_one_solution() {
    let source = source();
    let mut viz = viz();
    let mut sink = RecordingSink::new();

    viz.handle(&PointerEvent::Click("CC-014".into()), &source, &mut sink);

    insta::assert_snapshot!(sink.log(), @r"
    show_group(CC-014)
    set_selected_nav(CC-014)
    set_nav_visible(true)
    render_list(resources, CC-014, 2 items)
    render_list(quotes, CC-014, 1 items)
    render_list(case-studies, CC-014, 1 items)
    ");

    let show = sink
        .commands()
        .iter()
        .filter(|c| matches!(c, SinkCommand::ShowGroup(_)))
        .count();
    let nav = sink
        .commands()
        .iter()
        .filter(|c| matches!(c, SinkCommand::SetSelectedNav(_)))
        .count();
    assert_eq!((show, nav), (1, 1));

    for command in sink.commands() {
        if let SinkCommand::RenderList { id, .. } = command {
            assert_eq!(id.as_str(), "CC-014");
        }
    }
}

#[test]
fn lists_are_themed_by_category() {
    let source = source();
    let mut viz = viz();
    let mut sink = RecordingSink::new();
    viz.handle(&PointerEvent::Click("CC-014".into()), &source, &mut sink);

    let resources = sink.last_list(ListKind::Resources).unwrap();
    assert!(resources[0].contains("Parity toolkit"));
    assert!(resources[1].contains("Policy brief, 2024"));
    assert!(resources.iter().all(|r| r.contains("var(--color-teal)")));
    assert!(resources.iter().all(|r| !r.contains("near-miss") && !r.contains("subsidies")));

    let quotes = sink.last_list(ListKind::Quotes).unwrap();
    assert!(quotes[0].contains("Maria Lopez"));

    let cases = sink.last_list(ListKind::CaseStudies).unwrap();
    assert!(cases[0].contains("https://example.org/nm"));
}

#[test]
fn second_click_replaces_selection() {
    let source = source();
    let mut viz = viz();
    let mut sink = RecordingSink::new();

    viz.handle(&PointerEvent::Click("CC-014".into()), &source, &mut sink);
    viz.handle(&PointerEvent::Click("CC-020".into()), &source, &mut sink);

    assert_eq!(viz.interaction().selected().map(|id| id.as_str()), Some("CC-020"));
    let groups: Vec<&str> = sink
        .commands()
        .iter()
        .filter_map(|c| match c {
            SinkCommand::ShowGroup(id) => Some(id.as_str()),
            _ => None,
        })
        .collect();
    assert_eq!(groups, ["CC-014", "CC-020"]);
    assert_eq!(sink.last_list(ListKind::Resources).map(<[String]>::len), Some(0));
}

#[test]
fn hover_never_dispatches() {
    let source = source();
    let mut viz = viz();
    let mut sink = RecordingSink::new();
    viz.handle(&PointerEvent::Enter("CC-001".into()), &source, &mut sink);
    viz.handle(&PointerEvent::Leave("CC-001".into()), &source, &mut sink);
    assert!(sink.commands().is_empty());
}
