use std::collections::BTreeSet;

use choromap_core::BoundarySource;
use choromap_core::validation::CoverageReport;
use colored::*;
use tracing::info;
use unicode_width::UnicodeWidthStr;

use crate::terminal::colors;

pub const TOTAL_WIDTH: usize = 64;

/// Events on this target are printed without a level symbol.
pub const PRINT_TARGET: &str = "choromap::print";

pub fn print(msg: &str) {
    info!(target: PRINT_TARGET, "{msg}");
}

const BANNER: &str = r#"
          ▄▄▄▄▄ ▄   ▄  ▄▄▄  ▄▄▄▄   ▄▄▄  ▄▄   ▄▄  ▄▄▄  ▄▄▄▄
          █     █▄▄▄█ █   █ █▄▄▀  █   █ █ ▀▄▀ █ █▄▄▄█ █▄▄█
          █▄▄▄▄ █   █ ▀▄▄▄▀ █  ▀▄ ▀▄▄▄▀ █     █ █   █ █
"#;

pub fn banner(no_banner: bool, q_level: u8) {
    if no_banner || q_level > 0 {
        return;
    }

    let title = format!("⟦ CHOROMAP v{} ⟧ ", env!("CARGO_PKG_VERSION"));
    let side = "═".repeat(TOTAL_WIDTH.saturating_sub(title.width()) / 2);
    print(&format!(
        "{}{}{}",
        side.color(colors::SEPARATOR),
        title.color(colors::PRIMARY).bold(),
        side.color(colors::SEPARATOR)
    ));
    print(&format!("{}", BANNER.color(colors::REGION).bold()));
}

/// Section title centered in a thin rule.
pub fn section(title: &str, q_level: u8) {
    if q_level > 0 {
        return;
    }

    let label = format!("⟦ {} ⟧", title.to_uppercase());
    let dashes = TOTAL_WIDTH.saturating_sub(label.width());
    let left = "─".repeat(dashes / 2);
    let right = "─".repeat(dashes - dashes / 2);
    print(&format!(
        "{}{}{}",
        left.color(colors::SEPARATOR),
        label.color(colors::PRIMARY),
        right.color(colors::SEPARATOR)
    ));
}

pub fn rule() {
    print(&format!("{}", "═".repeat(TOTAL_WIDTH).color(colors::SEPARATOR)));
}

/// Prompt or progress line of an interactive command.
pub fn hint(msg: &str) {
    print(&format!("{} {}", ">".color(colors::SEPARATOR), msg.color(colors::TEXT_DEFAULT)));
}

/// Every region in file order with its display value.
pub fn region_list(source: &BoundarySource) {
    let index_width = source.len().saturating_sub(1).to_string().len();
    let id_width = source.regions().iter().map(|r| r.id.width()).max().unwrap_or(0);

    for (idx, region) in source.regions().iter().enumerate() {
        let id = pad(&region.id, id_width);
        print(&format!(
            "{}{}{} {} {}",
            "[".color(colors::SEPARATOR),
            format!("{idx:>index_width$}").color(colors::ACCENT),
            "]".color(colors::SEPARATOR),
            id.color(colors::REGION),
            format!("value {}", region.value).color(colors::SEPARATOR),
        ));
    }
}

/// Summary of how well the link configuration covers the boundary.
pub fn coverage_report(key_property: &str, mode: &str, regions: usize, report: &CoverageReport) {
    let fallback = if report.has_fallback { "yes" } else { "no" };
    let linked = format!("{}/{regions}", report.mapped.len());
    let linked = if report.is_complete() { linked.green() } else { linked.yellow() };
    let rows: [(&str, ColoredString); 4] = [
        ("Key property", key_property.color(colors::TEXT_DEFAULT)),
        ("Link mode", mode.color(colors::TEXT_DEFAULT)),
        ("Linked", linked),
        ("Fallback", fallback.color(colors::TEXT_DEFAULT)),
    ];

    let key_width = rows.iter().map(|(key, _)| key.width()).max().unwrap_or(0);
    for (key, value) in rows {
        hint(&format!("{} {value}", dotted_key(key, key_width)));
    }

    id_group("Regions without a link", &report.unmapped, colors::REGION);
    id_group("Table keys naming no region", &report.unknown_keys, Color::Yellow);
}

fn id_group(title: &str, ids: &BTreeSet<String>, color: Color) {
    if ids.is_empty() {
        return;
    }
    hint(&format!("{title} ({}):", ids.len()));
    for id in ids {
        print(&format!("    {} {}", "·".color(colors::SEPARATOR), id.color(color)));
    }
}

pub fn session_summary(last_clicked: Option<&str>) {
    let last: ColoredString = match last_clicked {
        Some(id) => id.color(colors::REGION).bold(),
        None => "nothing".dimmed(),
    };
    let msg = format!("Session finished, last click: {last}");
    let space = " ".repeat(TOTAL_WIDTH.saturating_sub(console::measure_text_width(&msg)) / 2);
    rule();
    print(&format!("{space}{msg}"));
}

fn pad(text: &str, width: usize) -> String {
    format!("{text}{}", " ".repeat(width.saturating_sub(text.width())))
}

fn dotted_key(key: &str, width: usize) -> String {
    let dots = ".".repeat((width + 1).saturating_sub(key.width()));
    format!(
        "{}{}{}",
        key.color(colors::PRIMARY),
        dots.color(colors::SEPARATOR),
        ":".color(colors::SEPARATOR)
    )
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
