//! # Choropleth Renderer
//!
//! Turns a [`BoundarySource`] into a [`RenderDescription`] a drawing surface can mount, and
//! turns raw clicks coming back from that surface into region identifiers.
//!
//! The description follows one fixed look: regions filled on a white → red scale, a uniform
//! red border, no axes, no grid, no color bar, and a viewport fitted to the union of all
//! region geometries.

use std::sync::Arc;

use choromap_common::model::click::ClickEvent;
use serde::Serialize;
use tracing::debug;

use crate::boundary::{BoundarySource, Region};

pub mod color;
pub mod svg;
pub mod viewport;

use color::{ColorScale, Rgb};
use viewport::Viewport;

pub const DEFAULT_TITLE: &str = "Click a region to open its link";
pub const DEFAULT_WIDTH: u32 = 960;
pub const DEFAULT_HEIGHT: u32 = 720;

/// Value assigned to a region by a [`ColorRule`] before it goes through the scale.
const HIGHLIGHTED: f64 = 1.0;
const DIMMED: f64 = 0.0;

#[derive(Clone, Debug, PartialEq)]
pub enum ColorRule {
    /// Every region at its own display value (`1` unless a value property is configured).
    Uniform,
    /// The named region at the top of the scale, every other region at the bottom.
    Highlight(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Border {
    pub color: Rgb,
    pub width: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Margin {
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
    pub left: u32,
}

/// Look shared by every rendering of a map.
#[derive(Clone, Debug)]
pub struct MapStyle {
    pub title: String,
    pub scale: ColorScale,
    pub border: Border,
    pub margin: Margin,
}

impl Default for MapStyle {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            scale: ColorScale::default(),
            border: Border {
                color: Rgb::RED,
                width: 1.0,
            },
            margin: Margin {
                top: 30,
                right: 0,
                bottom: 0,
                left: 0,
            },
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RegionStyle {
    pub id: String,
    pub value: f64,
    pub fill: Rgb,
    pub hover_label: String,
}

/// Everything a drawing surface needs to display the map.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RenderDescription {
    pub title: String,
    pub regions: Vec<RegionStyle>,
    pub border: Border,
    pub scale: ColorScale,
    pub margin: Margin,
    /// `None` only when no region has any coordinates.
    pub viewport: Option<Viewport>,
    pub show_axes: bool,
    pub show_grid: bool,
    pub show_color_bar: bool,
}

/// A click as reported by the drawing surface.
#[derive(Clone, Debug, PartialEq)]
pub enum RawClick {
    /// The surface already knows which feature was hit.
    Feature(String),
    /// Map coordinates of the click.
    Point { x: f64, y: f64 },
    /// Pixel position inside a `width` x `height` view drawn by this renderer.
    Screen { px: f64, py: f64, width: u32, height: u32 },
}

/// Receives `(region id or None, x, y)` once per click.
pub type ClickHandler = Box<dyn FnMut(Option<String>, f64, f64) + Send>;

pub struct ChoroplethRenderer {
    source: Arc<BoundarySource>,
    style: MapStyle,
    handler: Option<ClickHandler>,
}

impl ChoroplethRenderer {
    pub fn new(source: Arc<BoundarySource>) -> Self {
        Self::with_style(source, MapStyle::default())
    }

    pub fn with_style(source: Arc<BoundarySource>, style: MapStyle) -> Self {
        Self {
            source,
            style,
            handler: None,
        }
    }

    pub fn source(&self) -> &BoundarySource {
        &self.source
    }

    pub fn style(&self) -> &MapStyle {
        &self.style
    }

    pub fn render(&self, rule: &ColorRule) -> RenderDescription {
        let regions = self
            .source
            .regions()
            .iter()
            .map(|region| {
                let value = rule_value(rule, region);
                RegionStyle {
                    id: region.id.clone(),
                    value,
                    fill: self.style.scale.color_at(value),
                    hover_label: region.id.clone(),
                }
            })
            .collect();

        RenderDescription {
            title: self.style.title.clone(),
            regions,
            border: self.style.border,
            scale: self.style.scale,
            margin: self.style.margin,
            viewport: self.source.bounds().map(Viewport::fit),
            show_axes: false,
            show_grid: false,
            show_color_bar: false,
        }
    }

    pub fn render_svg(&self, rule: &ColorRule, width: u32, height: u32) -> String {
        svg::document(&self.render(rule), &self.source, width, height)
    }

    /// Registers the click callback, replacing any previous one.
    pub fn on_click(&mut self, handler: ClickHandler) {
        self.handler = Some(handler);
    }

    /// Turns a raw click into a [`ClickEvent`] without notifying the click handler.
    ///
    /// Feature clicks report the center of the region's bounding box; screen clicks report
    /// the map coordinates under the pixel.
    pub fn resolve_click(&self, raw: RawClick) -> ClickEvent {
        match raw {
            RawClick::Feature(key) => match self.source.get(&key) {
                Some(region) => {
                    let (x, y) = region.bounds().map(|b| b.center()).unwrap_or((f64::NAN, f64::NAN));
                    ClickEvent::new(Some(region.id.clone()), x, y)
                }
                None => {
                    debug!("Click on unknown feature key '{key}'");
                    ClickEvent::missed(f64::NAN, f64::NAN)
                }
            },
            RawClick::Point { x, y } => self.point_event(x, y),
            RawClick::Screen { px, py, width, height } => match self.source.bounds() {
                Some(bounds) => {
                    let (x, y) = Viewport::fit(bounds).to_map(px, py, width as f64, height as f64);
                    self.point_event(x, y)
                }
                None => ClickEvent::missed(f64::NAN, f64::NAN),
            },
        }
    }

    /// Resolves a raw click and hands it to the registered handler exactly once.
    pub fn click(&mut self, raw: RawClick) -> Option<String> {
        let event = self.resolve_click(raw);
        if let Some(handler) = self.handler.as_mut() {
            handler(event.region_id.clone(), event.x, event.y);
        }
        event.region_id
    }

    /// First region, in file order, whose geometry contains the point. Edges count as inside.
    pub fn hit_test(&self, x: f64, y: f64) -> Option<&Region> {
        self.source.regions().iter().find(|region| region.contains(x, y))
    }

    fn point_event(&self, x: f64, y: f64) -> ClickEvent {
        ClickEvent::new(self.hit_test(x, y).map(|r| r.id.clone()), x, y)
    }
}

fn rule_value(rule: &ColorRule, region: &Region) -> f64 {
    match rule {
        ColorRule::Uniform => region.value,
        ColorRule::Highlight(id) if *id == region.id => HIGHLIGHTED,
        ColorRule::Highlight(_) => DIMMED,
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
