//! Render the visualization to stdout.
//!
//! With an argument, loads `<dir>/data/solutions-data.csv`; otherwise renders
//! the bundled fixture.
//!
//!     RUST_LOG=petalviz=debug cargo run --example render --features tracing -- assets

use petalviz::data::{DataSource, DatasetKind, DirectorySource, InMemorySource};
use petalviz::{Environment, RenderOptions};

fn main() -> miette::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let options = RenderOptions::for_environment(Environment::from_env());
    let source: Box<dyn DataSource> = match std::env::args().nth(1) {
        Some(root) => Box::new(DirectorySource::new(root)),
        None => Box::new(InMemorySource::new().with(
            DatasetKind::Solutions,
            include_str!("../tests/fixtures/solutions-data.csv"),
        )),
    };

    let svg = petalviz::render_svg(source.as_ref(), &options)?;
    println!("{svg}");
    Ok(())
}
