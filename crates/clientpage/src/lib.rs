//! Terminal host for the high net worth client record page.
//!
//! The page logic lives in `clientpage_core`. This crate supplies its ports:
//! - a background [`worker::ServiceWorker`] serving record reads, the
//!   classification check and updates from a YAML account store
//! - a toast queue shown in the status bar
//! - custom permissions granted in `config.yaml`
//!
//! and renders the page with ratatui.

pub mod app;
pub mod components;
pub mod data;
pub mod keybindings;
pub mod logging;
pub mod ports;
pub mod state;
pub mod util;
pub mod worker;

#[cfg(test)]
mod tests;

pub use app::App;
pub use logging::init_logging;
