//! SVG output for a [`RenderDescription`].

use std::fmt::Write;

use geo::{LineString, MultiPolygon};

use super::RenderDescription;
use super::viewport::Viewport;
use crate::boundary::BoundarySource;

pub fn document(
    description: &RenderDescription,
    source: &BoundarySource,
    width: u32,
    height: u32,
) -> String {
    let (w, h) = (width as f64, height as f64);
    let mut svg = String::new();

    let _ = writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}">"#
    );
    let _ = writeln!(svg, "  <title>{}</title>", escape(&description.title));

    let regions = description
        .regions
        .iter()
        .filter_map(|style| source.get(&style.id).map(|region| (style, region)));

    for (style, region) in regions {
        let Some(viewport) = description.viewport else {
            break;
        };
        let _ = writeln!(
            svg,
            r#"  <path d="{}" fill="{}" stroke="{}" stroke-width="{}" fill-rule="evenodd"><title>{}</title></path>"#,
            path_data(region.geometry(), &viewport, w, h),
            style.fill,
            description.border.color,
            description.border.width,
            escape(&style.hover_label),
        );
    }

    svg.push_str("</svg>\n");
    svg
}

fn path_data(geometry: &MultiPolygon<f64>, viewport: &Viewport, w: f64, h: f64) -> String {
    let mut d = String::new();
    for polygon in geometry.iter() {
        ring_data(&mut d, polygon.exterior(), viewport, w, h);
        for interior in polygon.interiors() {
            ring_data(&mut d, interior, viewport, w, h);
        }
    }
    d.trim_end().to_string()
}

fn ring_data(d: &mut String, ring: &LineString<f64>, viewport: &Viewport, w: f64, h: f64) {
    for (i, coord) in ring.coords().enumerate() {
        let (x, y) = viewport.to_screen(coord.x, coord.y, w, h);
        let command = if i == 0 { 'M' } else { 'L' };
        let _ = write!(d, "{command}{x:.2} {y:.2} ");
    }
    d.push_str("Z ");
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
