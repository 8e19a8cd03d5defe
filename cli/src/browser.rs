use anyhow::Context;
use choromap_common::info;
use choromap_core::ports::Launcher;

/// Opens URLs in the system browser, or only reports them when `dry_run` is set.
pub struct BrowserLauncher {
    dry_run: bool,
}

impl BrowserLauncher {
    pub fn new(dry_run: bool) -> Self {
        Self { dry_run }
    }
}

impl Launcher for BrowserLauncher {
    fn launch(&self, url: &str) -> anyhow::Result<()> {
        if self.dry_run {
            info!("Would open {url}");
            return Ok(());
        }

        info!("Opening {url}");
        open::that(url).with_context(|| format!("opening {url} in the browser"))
    }
}
