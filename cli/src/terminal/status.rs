//! Terminal side of the user-visible status channel.

use choromap_common::model::status::StatusLevel;
use choromap_common::{info, success, warn};
use choromap_core::ports::StatusChannel;

pub struct TerminalStatus;

impl StatusChannel for TerminalStatus {
    fn show_message(&self, text: &str, level: StatusLevel) {
        match level {
            StatusLevel::Info => info!("{text}"),
            StatusLevel::Success => success!("{text}"),
            StatusLevel::Warning => warn!("{text}"),
        }
    }
}
