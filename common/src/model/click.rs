//! # Click Model
//!
//! The transient values produced by a single user interaction.
//!
//! A [`ClickEvent`] is created once per click by the renderer, consumed synchronously by the
//! navigator and then dropped. When the click resolves to a URL the navigator produces a
//! [`NavigationIntent`], which lives only until the navigation boundary has scheduled it.

use std::time::Duration;

/// One discrete click on the map.
#[derive(Clone, Debug, PartialEq)]
pub struct ClickEvent {
    /// Identifier of the region under the cursor, `None` if the click missed every region.
    pub region_id: Option<String>,
    pub x: f64,
    pub y: f64,
}

impl ClickEvent {
    pub fn new(region_id: Option<String>, x: f64, y: f64) -> Self {
        Self { region_id, x, y }
    }

    /// A click that named a region directly, without coordinates.
    pub fn on_region(region_id: impl Into<String>) -> Self {
        Self::new(Some(region_id.into()), f64::NAN, f64::NAN)
    }

    pub fn missed(x: f64, y: f64) -> Self {
        Self::new(None, x, y)
    }

    pub fn is_miss(&self) -> bool {
        self.region_id.is_none()
    }
}

/// A resolved URL waiting to be opened after `delay`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavigationIntent {
    pub url: String,
    pub delay: Duration,
}

impl NavigationIntent {
    pub fn new(url: impl Into<String>, delay: Duration) -> Self {
        Self {
            url: url.into(),
            delay,
        }
    }
}
