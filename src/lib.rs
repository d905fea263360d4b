//! launch-dash: launch records dashboard.
//!
//! Loads a launch-records CSV once, builds a static page with a site
//! selector and a payload range selector, and answers two chart callbacks
//! (success pie, payload scatter) as pure functions of the current
//! selection and the shared dataset.

pub mod api;
pub mod core;
pub mod data;
pub mod error;
pub mod render;
pub mod telemetry;

#[cfg(feature = "server")]
pub mod server;

pub use api::{Dashboard, build_layout, compute_pie, compute_scatter};
pub use error::{DashError, DashResult};
