use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use choromap_common::config::Config;
use choromap_core::navigation::TimedNavigation;
use choromap_core::render::{ChoroplethRenderer, DEFAULT_HEIGHT, DEFAULT_WIDTH, RawClick};
use choromap_core::{BoundaryCache, ClickNavigator, session};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc::{self, UnboundedSender};

use crate::browser::BrowserLauncher;
use crate::terminal::{print, status::TerminalStatus};

pub async fn session(path: &Path, cache: &BoundaryCache, cfg: &Config) -> anyhow::Result<()> {
    let startup = super::startup(path, cache, cfg)?;

    let (navigation, fired) = TimedNavigation::new(BrowserLauncher::new(cfg.dry_run));
    let renderer = ChoroplethRenderer::new(Arc::clone(&startup.source));
    let navigator = ClickNavigator::new(renderer, startup.resolver, navigation, TerminalStatus)
        .with_delay(cfg.delay);

    let (clicks_tx, clicks_rx) = mpsc::unbounded_channel();

    print::hint("Type a region name or 'x,y' map coordinates, one click per line");
    print::hint(&format!(
        "'@px,py' clicks a pixel of the {DEFAULT_WIDTH}x{DEFAULT_HEIGHT} rendered map"
    ));
    print::hint("Press Ctrl-D to finish");

    let reader = tokio::spawn(read_clicks(clicks_tx));
    let navigator = session::run(navigator, clicks_rx, fired).await;
    reader.await.context("click reader stopped unexpectedly")??;

    print::session_summary(navigator.last_clicked());
    Ok(())
}

/// Feeds stdin lines to the session until EOF. Dropping the sender closes the click channel.
async fn read_clicks(clicks: UnboundedSender<RawClick>) -> anyhow::Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        if let Some(raw) = parse_click(&line)
            && clicks.send(raw).is_err()
        {
            break;
        }
    }
    Ok(())
}

/// `x,y` is a point in map coordinates, `@px,py` a pixel of the default-sized rendering.
/// Any other non-empty text names a feature.
fn parse_click(line: &str) -> Option<RawClick> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    if let Some(pixel) = line.strip_prefix('@')
        && let Some((px, py)) = parse_pair(pixel)
    {
        return Some(RawClick::Screen {
            px,
            py,
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
        });
    }

    if let Some((x, y)) = parse_pair(line) {
        return Some(RawClick::Point { x, y });
    }

    Some(RawClick::Feature(line.to_string()))
}

fn parse_pair(text: &str) -> Option<(f64, f64)> {
    let (a, b) = text.split_once(',')?;
    Some((a.trim().parse().ok()?, b.trim().parse().ok()?))
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coordinates_become_points() {
        assert_eq!(
            parse_click(" 76.27, 10.85 "),
            Some(RawClick::Point { x: 76.27, y: 10.85 })
        );
    }

    #[test]
    fn names_become_features() {
        assert_eq!(
            parse_click("Andhra Pradesh"),
            Some(RawClick::Feature("Andhra Pradesh".to_string()))
        );
        // Not two numbers, so it is a (probably unknown) feature name.
        assert_eq!(
            parse_click("Jammu, Kashmir"),
            Some(RawClick::Feature("Jammu, Kashmir".to_string()))
        );
    }

    #[test]
    fn at_prefix_selects_pixels() {
        assert_eq!(
            parse_click("@480, 360"),
            Some(RawClick::Screen {
                px: 480.0,
                py: 360.0,
                width: DEFAULT_WIDTH,
                height: DEFAULT_HEIGHT,
            })
        );
        assert_eq!(parse_click("@Goa"), Some(RawClick::Feature("@Goa".to_string())));
    }

    #[test]
    fn blank_lines_are_skipped() {
        assert_eq!(parse_click("   "), None);
    }
}
