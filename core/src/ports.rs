//! # Outbound Ports
//!
//! The effectful edges of a session. The [`ClickNavigator`](crate::navigator::ClickNavigator)
//! only ever talks to these traits, so its state machine runs unchanged against a browser,
//! a terminal or a test double.

use std::fmt;
use std::time::Duration;

use choromap_common::model::status::StatusLevel;

/// Handle to a scheduled navigation, used to cancel it or to recognise it when it fires.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CancelToken(pub u64);

impl fmt::Display for CancelToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Schedules a navigation to happen later.
pub trait NavigationBoundary {
    /// Opens `url` once `delay` has elapsed unless cancelled first.
    fn navigate_after(&mut self, url: &str, delay: Duration) -> CancelToken;

    /// Cancels a pending navigation. Unknown or already fired tokens are ignored.
    fn cancel(&mut self, token: CancelToken);
}

/// Where user-visible messages go.
pub trait StatusChannel {
    fn show_message(&self, text: &str, level: StatusLevel);
}

/// The primitive that actually opens or redirects to a URL.
pub trait Launcher: Send + Sync + 'static {
    fn launch(&self, url: &str) -> anyhow::Result<()>;
}
