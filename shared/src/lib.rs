//! Shared types for the Abeer Hotel storefront
//!
//! Common types used across the workspace: the display language and
//! bilingual text pair, the catalog models, and the cart/application
//! state mirrored to client-local storage.

pub mod cart;
pub mod lang;
pub mod models;

// Re-exports
pub use cart::{AppState, CartLine, SelectedOptions};
pub use lang::{Language, LocalizedText};
pub use models::{Category, ConfigurableProduct, OptionGroup, Product, SimpleProduct};
pub use serde::{Deserialize, Serialize};
