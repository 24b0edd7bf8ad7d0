//! HTTP gateway for the Snaplink URL shortener.
//!
//! Wires the assigner and resolver services behind the public surface:
//! `POST /shorten` to create a mapping, `GET /{shortCode}` to redirect,
//! and a health probe.

pub mod app;
pub mod error;
pub mod handlers;
pub mod model;
pub mod state;

pub use app::App;
pub use state::AppState;
