//! Cart and application state types

pub mod types;

// Re-exports
pub use types::*;
