//! Shared vocabulary of the `choromap` workspace.
//!
//! Everything in here is plain data: configuration assembled by the CLI, the transient
//! values that travel between a click and a navigation, and the status macros used by
//! every crate to talk to the terminal through `tracing`.

pub mod config;
pub mod model;
mod macros;

pub use macros::SUCCESS_TARGET;

#[doc(hidden)]
pub use tracing;
