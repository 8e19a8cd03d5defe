//! # choromap core
//!
//! The click → region → redirect pipeline of a clickable choropleth map.
//!
//! * **[`boundary`]**: loads a GeoJSON feature collection into an immutable [`BoundarySource`].
//! * **[`resolver`]**: maps a region identifier to a [`Destination`](choromap_common::model::destination::Destination).
//! * **[`render`]**: colors regions, fits the viewport and turns raw clicks into region ids.
//! * **[`validation`]**: startup check that boundary keys and link keys actually meet.
//! * **[`navigator`]**: the click state machine, free of any real timer or browser.
//! * **[`ports`]**: the effectful boundaries the navigator talks to.
//! * **[`navigation`]** and **[`session`]**: tokio implementations driving a live session.

pub mod boundary;
pub mod error;
pub mod navigation;
pub mod navigator;
pub mod ports;
pub mod render;
pub mod resolver;
pub mod session;
pub mod validation;

pub use boundary::{BoundarySource, PropertyNames, Region, cache::BoundaryCache};
pub use navigator::{ClickNavigator, ClickOutcome, NavState};
pub use resolver::RegionLinkResolver;
