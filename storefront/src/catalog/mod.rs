//! Product catalog

pub mod menu;
pub mod service;

pub use service::Catalog;
