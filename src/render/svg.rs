//! SVG generation
//!
//! Layers, back to front:
//! 1. Category rings with their curved labels
//! 2. Petals (shape, invisible hover target, label, detail button)
//! 3. Central content panel in a `foreignObject`

use std::borrow::Cow;
use std::fmt::Write;

use super::layout::{CategoryArcGeometry, PetalGeometry, RenderModel};
use super::path::fmt_num;
use crate::config::RenderOptions;
use crate::errors::RenderError;
use crate::interaction::CenterPanel;

/// Escape text for use in XML content and double-quoted attributes.
pub fn escape(s: &str) -> Cow<'_, str> {
    if !s.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(s);
    }
    let mut out = String::with_capacity(s.len() + 8);
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    Cow::Owned(out)
}

/// Render the model as a standalone SVG document.
///
/// `in_view` switches the figure between its resting scale and full size.
pub fn generate_svg(model: &RenderModel, options: &RenderOptions, in_view: bool) -> Result<String, RenderError> {
    let canvas = &model.canvas;
    let mut svg = String::with_capacity(8192 + model.petals.len() * 1024);
    let scale = if in_view { 1.0 } else { options.out_of_view_scale };

    writeln!(
        svg,
        r#"<svg viewBox="0 0 {w} {h}" xmlns="http://www.w3.org/2000/svg" class="solutions-viz{class}" style="transform: scale({scale})">"#,
        w = fmt_num(canvas.width),
        h = fmt_num(canvas.height),
        class = if in_view { " in-view" } else { "" },
        scale = fmt_num(scale),
    )?;
    writeln!(
        svg,
        r#"  <g transform="translate({}, {})">"#,
        fmt_num(canvas.center.x),
        fmt_num(canvas.center.y)
    )?;

    svg.push_str("    <g class=\"categories\">\n");
    for (index, category) in model.categories.iter().enumerate() {
        render_category(&mut svg, index, category)?;
    }
    svg.push_str("    </g>\n");

    svg.push_str("    <g class=\"petalGroups\">\n");
    for category in &model.categories {
        svg.push_str("      <g class=\"petalGroup\">\n");
        for petal in model.petals_of(category) {
            render_petal(&mut svg, petal, model.canvas.detail_button_size, options)?;
        }
        svg.push_str("      </g>\n");
    }
    svg.push_str("    </g>\n");

    render_inner_content(&mut svg, model, options)?;

    svg.push_str("  </g>\n</svg>\n");
    Ok(svg)
}

fn render_category(svg: &mut String, index: usize, category: &CategoryArcGeometry) -> Result<(), RenderError> {
    let name = escape(&category.name);
    writeln!(
        svg,
        r#"      <g class="category{}" data-category="{name}">"#,
        if category.dimmed { " category__not_hovered" } else { "" },
    )?;
    writeln!(svg, r#"        <path d="{}" fill="grey" />"#, category.path)?;
    writeln!(
        svg,
        r#"        <defs><path d="{}" id="category-path-{index}" fill="transparent" /></defs>"#,
        category.text_path
    )?;
    writeln!(
        svg,
        r##"        <text class="cat-text" dominant-baseline="hanging" dy="{}"><textPath href="#category-path-{index}" startOffset="50%" text-anchor="middle">{name}</textPath></text>"##,
        fmt_num(category.text_dy)
    )?;
    svg.push_str("      </g>\n");
    Ok(())
}

fn render_petal(
    svg: &mut String,
    petal: &PetalGeometry,
    button_size: f64,
    options: &RenderOptions,
) -> Result<(), RenderError> {
    let label = &petal.label;
    let rotation = fmt_num(label.text_rotation.raw());

    writeln!(
        svg,
        r#"        <g class="petal{}" data-category="{}" data-solution="{}" data-solution-id="{}" fill="grey">"#,
        if petal.dimmed { " petal__not_hovered" } else { "" },
        escape(&petal.category),
        escape(&petal.abbreviation),
        escape(petal.id.as_str()),
    )?;
    writeln!(svg, r#"          <path d="{}" stroke="none" />"#, petal.path)?;
    writeln!(
        svg,
        r#"          <path class="petal-hit" d="{}" opacity="0" stroke="red" />"#,
        petal.hover_path
    )?;
    writeln!(
        svg,
        r#"          <text text-anchor="middle" y="5" transform="rotate({rotation}) translate({},0)" fill="black">{}</text>"#,
        fmt_num(label.text_translate),
        escape(&petal.abbreviation),
    )?;
    writeln!(
        svg,
        r#"          <g class="detail-button-group{}" transform="rotate({rotation}) translate({},0) rotate({})">"#,
        if petal.hovered { " hovered" } else { "" },
        fmt_num(label.button_translate),
        fmt_num(label.button_counter_rotation.raw()),
    )?;
    writeln!(
        svg,
        r#"            <image href="{}/illustrations/detail-button.svg" alt="Arrow right" height="{size}px" width="{size}px" transform="translate({half},{half})" />"#,
        escape(&options.asset_base),
        size = fmt_num(button_size),
        half = fmt_num(-button_size / 2.0),
    )?;
    svg.push_str("          </g>\n        </g>\n");
    Ok(())
}

fn render_inner_content(svg: &mut String, model: &RenderModel, options: &RenderOptions) -> Result<(), RenderError> {
    let canvas = &model.canvas;
    let assets = escape(&options.asset_base);

    svg.push_str("    <g class=\"innerContent\">\n");
    writeln!(
        svg,
        r#"      <g transform="translate({},{})">"#,
        fmt_num(canvas.inner_content_offset.x),
        fmt_num(canvas.inner_content_offset.y)
    )?;
    writeln!(
        svg,
        r#"        <foreignObject x="0" y="0" width="{size}" height="{size}">"#,
        size = fmt_num(canvas.inner_content_size)
    )?;

    match &model.center {
        CenterPanel::Instructions => {
            svg.push_str(
                "          <div class=\"innerContent innerContent__default\" xmlns=\"http://www.w3.org/1999/xhtml\">\n",
            );
            svg.push_str("            <p class=\"title\">Childcare Solutions</p>\n");
            svg.push_str(
                "            <p class=\"subtitle\">Hover on a solution to preview, click in to see details and resources.</p>\n",
            );
            writeln!(
                svg,
                r#"            <img src="{assets}/illustrations/hover-click.svg" alt="Illustration of hover and click for the petals of the viz" class="hover-image" />"#
            )?;
        }
        CenterPanel::Preview(preview) => {
            let category = escape(&preview.category);
            svg.push_str(
                "          <div class=\"innerContent innerContent__hovered\" xmlns=\"http://www.w3.org/1999/xhtml\">\n",
            );
            writeln!(
                svg,
                r#"            <img src="{assets}/illustrations/{category}.svg" alt="{category}" class="category-image" />"#
            )?;
            writeln!(
                svg,
                r#"            <div class="category-pill" data-category="{category}">{category}</div>"#
            )?;
            writeln!(
                svg,
                r#"            <p class="solution-title">{}</p>"#,
                escape(&preview.abbreviation)
            )?;
            writeln!(
                svg,
                r#"            <p class="solution-subtitle">{}</p>"#,
                escape(&preview.name)
            )?;
        }
    }

    svg.push_str("          </div>\n        </foreignObject>\n      </g>\n    </g>\n");
    Ok(())
}
