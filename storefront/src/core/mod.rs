//! Core module, configuration and the application controller
//!
//! - [`Config`] - environment-driven configuration
//! - [`Storefront`] - the controller owning the app state
//! - [`Notice`] - one-shot add confirmation

pub mod config;
pub mod state;

pub use config::Config;
pub use state::{Notice, Storefront};
