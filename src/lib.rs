//! Student Hub page scripting.
//!
//! The platform-neutral modules decide what the page does; `web` wires
//! them to the browser DOM when built for `wasm32`.

pub mod api;
pub mod binder;
pub mod config;
pub mod format;
pub mod models;
pub mod popup;
pub mod render;
pub mod routes;

#[cfg(target_arch = "wasm32")]
pub mod web;

pub use api::HubClient;
pub use config::HubConfig;
pub use models::{Assignment, AssignmentDetails, Id, Points};
