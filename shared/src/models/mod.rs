//! Catalog models
//!
//! Static configuration shared between the catalog service and the
//! presentation layer. Nothing here is ever mutated after startup.

pub mod category;
pub mod product;

// Re-exports
pub use category::*;
pub use product::*;
