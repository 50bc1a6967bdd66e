//! Walk a pointer across a few petals and print what the viz reports.

use petalviz::data::{DatasetKind, InMemorySource};
use petalviz::detail::RecordingSink;
use petalviz::{CenterPanel, LayoutConfig, PointerEvent, RenderOptions, Viz};

fn main() -> miette::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_writer(std::io::stderr)
        .init();

    let source = InMemorySource::new().with(
        DatasetKind::Solutions,
        include_str!("../tests/fixtures/solutions-data.csv"),
    );
    let mut viz = Viz::new(LayoutConfig::default(), RenderOptions::default())?;
    viz.load(&source)?;
    viz.set_in_view(true);

    let ids: Vec<_> = viz.dataset().solutions().iter().take(3).map(|s| s.id.clone()).collect();
    let mut events = Vec::new();
    for id in &ids {
        events.push(PointerEvent::Enter(id.clone()));
        events.push(PointerEvent::Leave(id.clone()));
    }
    if let Some(id) = ids.first() {
        events.push(PointerEvent::Click(id.clone()));
    }

    let mut sink = RecordingSink::new();
    for event in &events {
        let changed = viz.handle(event, &source, &mut sink);
        let dimmed = viz.model().petals.iter().filter(|p| p.dimmed).count();
        let center = match viz.interaction().center_panel(viz.dataset()) {
            CenterPanel::Instructions => "instructions".to_string(),
            CenterPanel::Preview(p) => format!("preview {} ({})", p.abbreviation, p.category),
        };
        let action = match event {
            PointerEvent::Enter(_) => "enter",
            PointerEvent::Leave(_) => "leave",
            PointerEvent::Click(_) => "click",
        };
        println!("{action} {}: changed={changed} dimmed={dimmed} center={center}", event.id());
    }

    println!("\ndetail commands:\n{}", sink.log());
    Ok(())
}
