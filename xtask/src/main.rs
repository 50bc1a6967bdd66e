use camino::{Utf8Path, Utf8PathBuf};
use petalviz::data::{DatasetKind, InMemorySource};
use petalviz::detail::RecordingSink;
use petalviz::{LayoutConfig, PointerEvent, RenderOptions, Viz};
use rayon::prelude::*;
use std::fs;

fn main() {
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: cargo xtask <command>");
        eprintln!("Commands:");
        eprintln!("  render-all      Render every CSV fixture to target/renders/*.svg");
        eprintln!("  preview-html    Generate an HTML page with idle and hovered renders of each fixture");
        std::process::exit(1);
    }

    match args[1].as_str() {
        "render-all" => render_all(),
        "preview-html" => preview_html(),
        _ => {
            eprintln!("Unknown command: {}", args[1]);
            std::process::exit(1);
        }
    }
}

fn workspace_root() -> Utf8PathBuf {
    Utf8Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .expect("xtask lives inside the workspace")
        .to_owned()
}

fn fixtures() -> Vec<Utf8PathBuf> {
    let dir = workspace_root().join("tests/fixtures");
    let mut paths: Vec<Utf8PathBuf> = dir
        .read_dir_utf8()
        .expect("Failed to read fixtures directory")
        .filter_map(|e| e.ok())
        .map(|e| e.into_path())
        .filter(|p| p.extension() == Some("csv"))
        .collect();
    paths.sort();
    paths
}

/// One fixture rendered idle and with its first petal hovered
struct Rendered {
    name: String,
    idle: Result<String, String>,
    hovered: Option<String>,
    petals: usize,
}

fn render_fixture(path: &Utf8Path) -> Rendered {
    let name = path.file_stem().unwrap_or(path.as_str()).to_string();
    let csv = match fs::read_to_string(path) {
        Ok(csv) => csv,
        Err(e) => {
            return Rendered { name, idle: Err(e.to_string()), hovered: None, petals: 0 };
        }
    };

    let source = InMemorySource::new().with(DatasetKind::Solutions, csv);
    let mut viz = match Viz::new(LayoutConfig::default(), RenderOptions::default()) {
        Ok(viz) => viz,
        Err(e) => return Rendered { name, idle: Err(e.to_string()), hovered: None, petals: 0 },
    };
    if let Err(e) = viz.load(&source) {
        return Rendered { name, idle: Err(format!("{e:?}")), hovered: None, petals: 0 };
    }
    viz.set_in_view(true);

    let idle = viz.render_svg().map_err(|e| e.to_string());
    let petals = viz.model().petals.len();

    let first = viz.dataset().solutions().first().map(|s| s.id.clone());
    let hovered = first.and_then(|id| {
        let mut sink = RecordingSink::new();
        viz.handle(&PointerEvent::Enter(id), &source, &mut sink);
        viz.render_svg().ok()
    });

    Rendered { name, idle, hovered, petals }
}

fn render_all() {
    let out_dir = workspace_root().join("target/renders");
    fs::create_dir_all(&out_dir).expect("Failed to create output directory");

    let results: Vec<Rendered> = fixtures().par_iter().map(|p| render_fixture(p)).collect();

    let mut failed = 0;
    for r in &results {
        match &r.idle {
            Ok(svg) => {
                let path = out_dir.join(format!("{}.svg", r.name));
                fs::write(&path, svg).expect("Failed to write SVG");
                eprintln!("{:<24} {:>3} petals -> {}", r.name, r.petals, path);
            }
            Err(e) => {
                failed += 1;
                eprintln!("{:<24} FAILED: {}", r.name, e);
            }
        }
    }

    eprintln!("\n{} rendered, {} failed", results.len() - failed, failed);
    if failed > 0 {
        std::process::exit(1);
    }
}

fn preview_html() {
    let results: Vec<Rendered> = fixtures().par_iter().map(|p| render_fixture(p)).collect();
    let output_path = workspace_root().join("preview.html");

    let mut html = String::from(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="UTF-8">
    <title>petalviz fixtures</title>
    <style>
        * {
            box-sizing: border-box;
        }
        body {
            font-family: system-ui, sans-serif;
            margin: 0;
            background: #eee;
            color: #333;
        }
        .page {
            max-width: 1400px;
            margin: 0 auto;
            padding: 24px;
        }
        h1 {
            font-weight: 600;
            font-size: 20px;
            margin: 0 0 24px 0;
        }
        .fixture-card {
            background: white;
            border-radius: 8px;
            box-shadow: 0 1px 3px rgba(0,0,0,0.08);
            margin-bottom: 16px;
            overflow: hidden;
        }
        .fixture-header {
            padding: 12px 16px;
            border-bottom: 1px solid #eee;
            background: #fafafa;
            font-weight: 600;
            font-size: 13px;
        }
        .comparison {
            display: grid;
            grid-template-columns: 1fr 1fr;
            gap: 12px;
            padding: 12px 16px;
        }
        .column-header {
            font-size: 11px;
            font-weight: 600;
            text-transform: uppercase;
            margin-bottom: 8px;
        }
        .svg-container svg {
            width: 100%;
            height: auto;
        }
        .petal__not_hovered, .category__not_hovered {
            opacity: 0.3;
        }
        .error {
            color: #991b1b;
            font-family: monospace;
            white-space: pre-wrap;
        }
    </style>
</head>
<body>
<div class="page">
<h1>petalviz fixtures</h1>
"#,
    );

    for r in &results {
        let idle = match &r.idle {
            Ok(svg) => svg.clone(),
            Err(e) => format!(r#"<div class="error">{}</div>"#, html_escape(e)),
        };
        let hovered = r.hovered.clone().unwrap_or_default();
        html.push_str(&format!(
            r#"
<div class="fixture-card" id="{name}">
    <div class="fixture-header">{name} ({petals} petals)</div>
    <div class="comparison">
        <div class="column">
            <div class="column-header">Idle</div>
            <div class="svg-container">{idle}</div>
        </div>
        <div class="column">
            <div class="column-header">First petal hovered</div>
            <div class="svg-container">{hovered}</div>
        </div>
    </div>
</div>
"#,
            name = html_escape(&r.name),
            petals = r.petals,
        ));
    }

    html.push_str("</div>\n</body>\n</html>\n");
    fs::write(&output_path, html).expect("Failed to write HTML");
    eprintln!("Wrote {}", output_path);
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
