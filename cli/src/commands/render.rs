use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Args, ValueEnum};
use choromap_common::{config::Config, success, warn};
use choromap_core::BoundaryCache;
use choromap_core::render::{ChoroplethRenderer, ColorRule, DEFAULT_HEIGHT, DEFAULT_WIDTH};

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Json,
    Svg,
}

#[derive(Args)]
pub struct RenderArgs {
    pub boundary: PathBuf,

    /// Paint only this region red
    #[arg(long)]
    pub highlight: Option<String>,

    #[arg(long, value_enum, default_value_t = Format::Json)]
    pub format: Format,

    /// Write to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// SVG width in pixels
    #[arg(long, default_value_t = DEFAULT_WIDTH)]
    pub width: u32,

    /// SVG height in pixels
    #[arg(long, default_value_t = DEFAULT_HEIGHT)]
    pub height: u32,
}

pub fn render(args: &RenderArgs, cache: &BoundaryCache, cfg: &Config) -> anyhow::Result<()> {
    let source = super::load_boundary(&args.boundary, cache, cfg)?;

    let rule = match &args.highlight {
        Some(id) => {
            if !source.contains_id(id) {
                warn!("'{id}' is not a region of this boundary, nothing is highlighted");
            }
            ColorRule::Highlight(id.clone())
        }
        None => ColorRule::Uniform,
    };

    let renderer = ChoroplethRenderer::new(source);
    let document = match args.format {
        Format::Json => serde_json::to_string_pretty(&renderer.render(&rule))?,
        Format::Svg => renderer.render_svg(&rule, args.width, args.height),
    };

    match &args.output {
        Some(path) => {
            fs::write(path, document).with_context(|| format!("writing {}", path.display()))?;
            success!("Map written to {}", path.display());
        }
        None => println!("{document}"),
    }
    Ok(())
}
