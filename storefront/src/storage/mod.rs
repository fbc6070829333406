//! Persistence layer

pub mod client_state;

pub use client_state::{StateStore, StorageError, StorageResult};
