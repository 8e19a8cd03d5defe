pub mod regions;
pub mod render;
pub mod session;
pub mod validate;

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use choromap_common::config::{Config, DEFAULT_KEY_PROPERTY, LinkMode};
use choromap_common::warn;
use choromap_core::resolver::{self, RegionLinkResolver};
use choromap_core::validation::{self, CoverageReport};
use choromap_core::{BoundaryCache, BoundarySource, PropertyNames};

#[derive(Parser)]
#[command(name = "choromap")]
#[command(about = "A clickable choropleth navigator.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Feature property holding the region name
    #[arg(long, global = true, default_value = DEFAULT_KEY_PROPERTY)]
    pub key_property: String,

    /// Numeric feature property used to color regions
    #[arg(long, global = true)]
    pub value_property: Option<String>,

    #[command(flatten)]
    pub links: LinkArgs,

    /// Delay between the confirmation message and the navigation
    #[arg(long, global = true, default_value_t = 1000)]
    pub delay_ms: u64,

    /// Report navigations instead of opening a browser
    #[arg(long, global = true)]
    pub dry_run: bool,

    #[arg(long, global = true)]
    pub no_banner: bool,

    /// Less output (-q warnings only, -qq errors only)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub quiet: u8,
}

/// Where a clicked region leads. At most one of `--url`, `--template`, `--table`.
#[derive(Args, Default)]
pub struct LinkArgs {
    /// Open this URL for every region
    #[arg(long, global = true)]
    pub url: Option<String>,

    /// Open this URL with `{region}` replaced by the region name
    #[arg(long, global = true)]
    pub template: Option<String>,

    /// JSON object mapping region names to URLs
    #[arg(long, global = true)]
    pub table: Option<PathBuf>,

    /// URL for regions missing from --table
    #[arg(long, global = true)]
    pub fallback: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the regions of a boundary file
    #[command(alias = "r")]
    Regions { boundary: PathBuf },
    /// Check that the links match the regions of a boundary file
    #[command(alias = "v")]
    Validate { boundary: PathBuf },
    /// Write the map description as JSON or SVG
    #[command(alias = "m")]
    Render(render::RenderArgs),
    /// Read clicks from stdin and navigate to the clicked region's link
    #[command(alias = "s")]
    Session { boundary: PathBuf },
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn to_config(&self) -> anyhow::Result<Config> {
        Ok(Config {
            key_property: self.key_property.clone(),
            value_property: self.value_property.clone(),
            link_mode: self.links.to_link_mode()?,
            delay: Duration::from_millis(self.delay_ms),
            dry_run: self.dry_run,
            no_banner: self.no_banner,
            quiet: self.quiet,
        })
    }
}

impl LinkArgs {
    pub fn to_link_mode(&self) -> anyhow::Result<Option<LinkMode>> {
        let given = [self.url.is_some(), self.template.is_some(), self.table.is_some()];
        anyhow::ensure!(
            given.iter().filter(|g| **g).count() <= 1,
            "--url, --template and --table are mutually exclusive"
        );
        anyhow::ensure!(
            self.fallback.is_none() || self.table.is_some(),
            "--fallback only applies to --table"
        );

        if let Some(url) = &self.url {
            return Ok(Some(LinkMode::Fixed { url: url.clone() }));
        }
        if let Some(template) = &self.template {
            return Ok(Some(LinkMode::Templated {
                template: template.clone(),
            }));
        }
        if let Some(path) = &self.table {
            let entries = resolver::load_link_table(path)?;
            return Ok(Some(LinkMode::Table {
                entries,
                fallback: self.fallback.clone(),
            }));
        }
        Ok(None)
    }
}

pub fn property_names(cfg: &Config) -> PropertyNames {
    let names = PropertyNames::new(&cfg.key_property);
    match &cfg.value_property {
        Some(value) => names.with_value(value),
        None => names,
    }
}

pub fn load_boundary(
    path: &Path,
    cache: &BoundaryCache,
    cfg: &Config,
) -> anyhow::Result<Arc<BoundarySource>> {
    cache
        .get_or_load(path, &property_names(cfg))
        .with_context(|| format!("loading boundary {}", path.display()))
}

/// Everything a navigating command needs, checked before the first click.
pub struct Startup {
    pub source: Arc<BoundarySource>,
    pub resolver: RegionLinkResolver,
    pub report: CoverageReport,
}

pub fn startup(path: &Path, cache: &BoundaryCache, cfg: &Config) -> anyhow::Result<Startup> {
    let source = load_boundary(path, cache, cfg)?;
    let mode = cfg
        .link_mode
        .clone()
        .context("one of --url, --template or --table is required")?;
    let resolver = RegionLinkResolver::from_mode(mode);

    let report = validation::validate(&source, &resolver)
        .with_context(|| format!("links do not match the '{}' regions", cfg.key_property))?;

    if !report.unmapped.is_empty() {
        let target = if report.has_fallback { "the fallback" } else { "no URL" };
        warn!("{} regions have no link and use {target}", report.unmapped.len());
    }
    if !report.unknown_keys.is_empty() {
        warn!("{} link table keys match no region", report.unknown_keys.len());
    }

    Ok(Startup {
        source,
        resolver,
        report,
    })
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
