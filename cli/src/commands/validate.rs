use std::path::Path;

use choromap_common::config::{Config, LinkMode};
use choromap_common::success;
use choromap_core::BoundaryCache;

use crate::terminal::print;

pub fn validate(path: &Path, cache: &BoundaryCache, cfg: &Config) -> anyhow::Result<()> {
    let startup = super::startup(path, cache, cfg)?;
    let report = &startup.report;

    let mode: &str = match startup.resolver.mode() {
        LinkMode::Fixed { .. } => "fixed",
        LinkMode::Templated { .. } => "templated",
        LinkMode::Table { .. } => "table",
    };

    print::coverage_report(&cfg.key_property, mode, startup.source.len(), report);

    success!("Links match the boundary");
    Ok(())
}
