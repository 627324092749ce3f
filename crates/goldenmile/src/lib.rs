//! Golden Mile advisory client
//!
//! Terminal and browser front-ends for the real-estate advisory backend.
//! The form logic lives in `goldenmile_core`; this crate provides:
//! - Configuration and the data directory (`config.yaml`, `keybindings.yaml`)
//! - A platform layer that runs requests off the UI thread (native thread or
//!   browser future) and handles report downloads
//! - The ratatui screen, components and modals
//! - A headless one-shot CLI driving the same controller

pub mod app;
pub mod components;
pub mod data;
pub mod event;
#[cfg(feature = "native")]
pub mod headless;
pub mod keybindings;
pub mod logging;
pub mod modals;
pub mod platform;
pub mod screens;
pub mod state;
pub mod util;

#[cfg(all(feature = "web", not(feature = "native")))]
mod web;

pub use app::App;
#[cfg(feature = "native")]
pub use logging::init_logging;
#[cfg(feature = "web")]
pub use logging::init_logging_web;
