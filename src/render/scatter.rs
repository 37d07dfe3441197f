//! Annotated scatter of goals per game against games played.

use super::svg::{escape_xml, viridis, Scale};
use crate::shaper::{ScatterData, TopPerformer};
use crate::utils::config::{CALLOUT_TEXT, SCATTER_TITLE};
use log::info;

const WIDTH: f64 = 1200.0;
const HEIGHT: f64 = 800.0;
const MARGIN_LEFT: f64 = 90.0;
const MARGIN_RIGHT: f64 = 50.0;
const MARGIN_TOP: f64 = 80.0;
const MARGIN_BOTTOM: f64 = 80.0;
const TICK_COUNT: usize = 6;
const GRID_COLOR: &str = "rgba(255,255,255,0.1)";
const ANNOTATION_COLOR: &str = "yellow";

/// Render the scatter plot as an SVG document
pub fn render_scatter_svg(data: &ScatterData) -> String {
    let (x_scale, y_scale) = scales(data);
    let (rate_min, rate_max) = rate_bounds(data);

    let mut svg = String::new();

    svg.push_str(&format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}" font-family="sans-serif">"#,
        w = WIDTH,
        h = HEIGHT
    ));
    svg.push_str(&format!(
        r#"<defs><marker id="arrowhead" viewBox="0 0 10 10" refX="9" refY="5" markerWidth="8" markerHeight="8" orient="auto-start-reverse"><path d="M 0 0 L 10 5 L 0 10 z" fill="{}"/></marker></defs>"#,
        ANNOTATION_COLOR
    ));
    svg.push_str(&format!(
        r#"<rect x="0" y="0" width="{}" height="{}" fill="black"/>"#,
        WIDTH, HEIGHT
    ));

    render_grid(&mut svg, &x_scale, &y_scale);
    render_axis_titles(&mut svg);

    // Markers with labels and tooltips
    for point in &data.points {
        let cx = x_scale.map(point.group.rate);
        let cy = y_scale.map(point.group.games);
        let t = (point.group.rate - rate_min) / (rate_max - rate_min);

        svg.push_str(&format!(
            r#"<g class="point"><title>{}</title><circle cx="{:.2}" cy="{:.2}" r="{}" fill="{}" fill-opacity="0.8" stroke="white" stroke-width="1"/>"#,
            escape_xml(point.hover.trim_end()),
            cx,
            cy,
            point.marker_size as f64 / 2.0,
            viridis(t)
        ));
        if !point.label.is_empty() {
            svg.push_str(&format!(
                r#"<text x="{:.2}" y="{:.2}" font-size="16" fill="white" text-anchor="middle">{}</text>"#,
                cx,
                cy + point.marker_size as f64 / 2.0 + 18.0,
                escape_xml(&point.label)
            ));
        }
        svg.push_str("</g>");
    }

    render_top_annotations(&mut svg, &data.top, &x_scale, &y_scale);
    render_callout(&mut svg, &data.top, &x_scale, &y_scale);

    svg.push_str("</svg>");

    info!(
        "Scatter chart generated ({} points, {} bytes)",
        data.points.len(),
        svg.len()
    );
    svg
}

/// Smallest and largest rate over all points (for the color scale)
fn rate_bounds(data: &ScatterData) -> (f64, f64) {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for point in &data.points {
        min = min.min(point.group.rate);
        max = max.max(point.group.rate);
    }
    if !min.is_finite() || !max.is_finite() {
        return (0.0, 1.0);
    }
    if (max - min).abs() < f64::EPSILON {
        return (min - 0.5, max + 0.5);
    }
    (min, max)
}

/// Axis scales covering every point and the callout above the leaders
fn scales(data: &ScatterData) -> (Scale, Scale) {
    let mut xs: Vec<f64> = data.points.iter().map(|p| p.group.rate).collect();
    let mut ys: Vec<f64> = data.points.iter().map(|p| p.group.games).collect();

    if let Some((x, y)) = callout_position(&data.top) {
        xs.push(x);
        ys.push(y);
    }

    let bounds = |values: &[f64]| {
        values
            .iter()
            .fold(None, |acc: Option<(f64, f64)>, &v| match acc {
                None => Some((v, v)),
                Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
            })
            .unwrap_or((0.0, 1.0))
    };

    let (x_min, x_max) = bounds(&xs);
    let (y_min, y_max) = bounds(&ys);

    (
        Scale::padded(x_min, x_max, 0.08, (MARGIN_LEFT, WIDTH - MARGIN_RIGHT)),
        Scale::padded(y_min, y_max, 0.08, (HEIGHT - MARGIN_BOTTOM, MARGIN_TOP)),
    )
}

/// Callout anchor: mean leader rate, two games above the most games played
fn callout_position(top: &[TopPerformer]) -> Option<(f64, f64)> {
    let rates: Vec<f64> = top.iter().filter_map(|t| t.rate).collect();
    let games_max = top.iter().filter_map(|t| t.games).fold(None, |acc: Option<f64>, g| {
        Some(acc.map_or(g, |a| a.max(g)))
    });

    if rates.is_empty() {
        return None;
    }
    let rate_mean = rates.iter().sum::<f64>() / rates.len() as f64;

    games_max.map(|g| (rate_mean, g + 2.0))
}

fn render_grid(svg: &mut String, x_scale: &Scale, y_scale: &Scale) {
    let (top, bottom) = (MARGIN_TOP, HEIGHT - MARGIN_BOTTOM);
    let (left, right) = (MARGIN_LEFT, WIDTH - MARGIN_RIGHT);

    for tick in x_scale.ticks(TICK_COUNT) {
        let x = x_scale.map(tick);
        svg.push_str(&format!(
            r#"<line x1="{x:.2}" y1="{top}" x2="{x:.2}" y2="{bottom}" stroke="{GRID_COLOR}" stroke-width="0.5"/>"#
        ));
        svg.push_str(&format!(
            r#"<text x="{:.2}" y="{}" font-size="12" fill="white" text-anchor="middle">{:.2}</text>"#,
            x,
            bottom + 20.0,
            tick
        ));
    }

    for tick in y_scale.ticks(TICK_COUNT) {
        let y = y_scale.map(tick);
        svg.push_str(&format!(
            r#"<line x1="{left}" y1="{y:.2}" x2="{right}" y2="{y:.2}" stroke="{GRID_COLOR}" stroke-width="0.5"/>"#
        ));
        svg.push_str(&format!(
            r#"<text x="{}" y="{:.2}" font-size="12" fill="white" text-anchor="end">{:.1}</text>"#,
            left - 8.0,
            y + 4.0,
            tick
        ));
    }
}

fn render_axis_titles(svg: &mut String) {
    svg.push_str(&format!(
        r#"<text x="{}" y="40" font-size="18" fill="white" text-anchor="middle">{}</text>"#,
        WIDTH / 2.0,
        escape_xml(SCATTER_TITLE)
    ));
    svg.push_str(&format!(
        r#"<text x="{}" y="{}" font-size="14" fill="white" text-anchor="middle">Goals Per Game</text>"#,
        (MARGIN_LEFT + WIDTH - MARGIN_RIGHT) / 2.0,
        HEIGHT - 25.0
    ));
    svg.push_str(&format!(
        r#"<text x="25" y="{y}" font-size="14" fill="white" text-anchor="middle" transform="rotate(-90 25 {y})">Games Played</text>"#,
        y = (MARGIN_TOP + HEIGHT - MARGIN_BOTTOM) / 2.0
    ));
}

/// Yellow arrowed name callouts, staggered so the leaders do not overlap
fn render_top_annotations(svg: &mut String, top: &[TopPerformer], x_scale: &Scale, y_scale: &Scale) {
    for performer in top {
        let (Some(rate), Some(games)) = (performer.rate, performer.games) else {
            continue;
        };

        let i = performer.position as f64;
        let (ax, ay) = (-80.0 + i * 80.0, -100.0 + i * 60.0);
        let (px, py) = (x_scale.map(rate), y_scale.map(games));
        let (tx, ty) = (px + ax, py + ay);

        svg.push_str(&format!(
            r#"<line x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}" stroke="{c}" stroke-width="1.5" marker-end="url(#arrowhead)"/>"#,
            tx,
            ty + 6.0,
            px,
            py,
            c = ANNOTATION_COLOR
        ));
        svg.push_str(&format!(
            r#"<text x="{:.2}" y="{:.2}" font-size="20" fill="{}" text-anchor="middle">{}</text>"#,
            tx,
            ty,
            ANNOTATION_COLOR,
            escape_xml(&performer.name)
        ));
    }
}

/// Boxed red headline above the top performers
fn render_callout(svg: &mut String, top: &[TopPerformer], x_scale: &Scale, y_scale: &Scale) {
    let Some((x, y)) = callout_position(top) else {
        return;
    };

    let (cx, cy) = (x_scale.map(x), y_scale.map(y));
    let box_width = CALLOUT_TEXT.chars().count() as f64 * 11.0 + 20.0;
    let box_height = 44.0;

    svg.push_str(&format!(
        r#"<rect x="{:.2}" y="{:.2}" width="{:.2}" height="{}" fill="rgba(50, 50, 50, 0.6)" stroke="white" stroke-width="2"/>"#,
        cx - box_width / 2.0,
        cy - box_height / 2.0,
        box_width,
        box_height
    ));
    svg.push_str(&format!(
        r#"<text x="{:.2}" y="{:.2}" font-size="20" fill="red" text-anchor="middle">{}</text>"#,
        cx,
        cy + 7.0,
        escape_xml(CALLOUT_TEXT)
    ));
}
