use std::path::Path;

use choromap_common::{config::Config, success};
use choromap_core::BoundaryCache;

use crate::terminal::print;

pub fn regions(path: &Path, cache: &BoundaryCache, cfg: &Config) -> anyhow::Result<()> {
    let source = super::load_boundary(path, cache, cfg)?;

    print::region_list(&source);

    let unit: &str = if source.len() == 1 { "region" } else { "regions" };
    success!("{} {unit} keyed by '{}'", source.len(), source.key_property());
    Ok(())
}
