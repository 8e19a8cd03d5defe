//! # Click Navigator
//!
//! The state machine between a click and a navigation:
//!
//! ```text
//! Idle ─click─▶ Clicked ─id─▶ Resolved ─url─▶ Navigating ─fired─▶ Idle
//!                  │              │
//!                  └─none─▶ Idle  └─no action─▶ Idle
//! ```
//!
//! Raw clicks enter through [`ClickNavigator::handle_raw`], which asks the owned
//! [`ChoroplethRenderer`] for the region under the click before running the machine.
//!
//! `Clicked` and `Resolved` are passed through synchronously inside
//! [`ClickNavigator::handle_click`]; only `Idle` and `Navigating` are ever observed between
//! two events. A click that arrives while `Navigating` cancels the pending navigation before
//! it is processed, so at most one navigation is ever pending.

use std::mem;
use std::time::Duration;

use choromap_common::config::DEFAULT_NAVIGATION_DELAY;
use choromap_common::model::click::{ClickEvent, NavigationIntent};
use choromap_common::model::destination::Destination;
use choromap_common::model::status::StatusLevel;
use tracing::debug;

use crate::ports::{CancelToken, NavigationBoundary, StatusChannel};
use crate::render::{ChoroplethRenderer, RawClick};
use crate::resolver::RegionLinkResolver;

#[derive(Clone, Debug, PartialEq)]
pub enum NavState {
    Idle,
    Clicked(Option<String>),
    Resolved(Destination),
    Navigating {
        intent: NavigationIntent,
        token: CancelToken,
    },
}

/// What a single click led to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ClickOutcome {
    /// The click landed outside every region. Nothing is shown.
    Missed,
    /// The region has no link and no fallback. A warning is shown.
    Unresolved(String),
    Navigating(NavigationIntent),
}

pub struct ClickNavigator<N, S> {
    renderer: ChoroplethRenderer,
    resolver: RegionLinkResolver,
    navigation: N,
    status: S,
    delay: Duration,
    state: NavState,
    last_clicked: Option<String>,
}

impl<N, S> ClickNavigator<N, S>
where
    N: NavigationBoundary,
    S: StatusChannel,
{
    pub fn new(
        renderer: ChoroplethRenderer,
        resolver: RegionLinkResolver,
        navigation: N,
        status: S,
    ) -> Self {
        Self {
            renderer,
            resolver,
            navigation,
            status,
            delay: DEFAULT_NAVIGATION_DELAY,
            state: NavState::Idle,
            last_clicked: None,
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn state(&self) -> &NavState {
        &self.state
    }

    pub fn is_idle(&self) -> bool {
        self.state == NavState::Idle
    }

    /// Most recent click that hit a region, for highlighting.
    pub fn last_clicked(&self) -> Option<&str> {
        self.last_clicked.as_deref()
    }

    /// Token of the navigation currently waiting for its delay, if any.
    pub fn pending(&self) -> Option<CancelToken> {
        match &self.state {
            NavState::Navigating { token, .. } => Some(*token),
            _ => None,
        }
    }

    pub fn renderer(&self) -> &ChoroplethRenderer {
        &self.renderer
    }

    pub fn navigation(&self) -> &N {
        &self.navigation
    }

    pub fn status(&self) -> &S {
        &self.status
    }

    /// Resolves a click from the drawing surface to a region and handles it.
    pub fn handle_raw(&mut self, raw: RawClick) -> ClickOutcome {
        let event = self.renderer.resolve_click(raw);
        self.handle_click(event)
    }

    /// Handles a click whose region has already been resolved.
    pub fn handle_click(&mut self, event: ClickEvent) -> ClickOutcome {
        self.cancel_pending();
        self.transition(NavState::Clicked(event.region_id.clone()));

        let Some(region_id) = event.region_id else {
            self.transition(NavState::Idle);
            return ClickOutcome::Missed;
        };
        self.last_clicked = Some(region_id.clone());

        let destination = self.resolver.resolve(&region_id);
        self.transition(NavState::Resolved(destination.clone()));

        match destination {
            Destination::NoAction => {
                self.status.show_message(
                    &format!("No URL configured for: {region_id}"),
                    StatusLevel::Warning,
                );
                self.transition(NavState::Idle);
                ClickOutcome::Unresolved(region_id)
            }
            Destination::FixedUrl(url) => {
                self.status
                    .show_message(&format!("You clicked on: {region_id}"), StatusLevel::Success);
                self.status
                    .show_message(&format!("Redirecting to {url} ..."), StatusLevel::Info);

                let intent = NavigationIntent::new(url, self.delay);
                let token = self.navigation.navigate_after(&intent.url, intent.delay);
                self.transition(NavState::Navigating {
                    intent: intent.clone(),
                    token,
                });
                ClickOutcome::Navigating(intent)
            }
        }
    }

    /// Called by the host when the navigation behind `token` has happened.
    ///
    /// Returns `false` for a token that is no longer the pending one.
    pub fn navigation_fired(&mut self, token: CancelToken) -> bool {
        if self.pending() != Some(token) {
            debug!("Ignoring stale navigation {token}");
            return false;
        }
        self.transition(NavState::Idle);
        true
    }

    fn cancel_pending(&mut self) {
        if let NavState::Navigating { intent, token } = mem::replace(&mut self.state, NavState::Idle) {
            debug!("Superseded navigation {token} to {}", intent.url);
            self.navigation.cancel(token);
        }
    }

    fn transition(&mut self, next: NavState) {
        debug!("{:?} -> {:?}", self.state, next);
        self.state = next;
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
