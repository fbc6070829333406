//! Category Model

use serde::{Deserialize, Serialize};

use crate::lang::LocalizedText;

/// A menu category
///
/// The category set is static configuration: loaded once at startup,
/// enumerated in definition order, never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Stable identifier; the per-category product lists are keyed by it
    pub key: String,
    pub name: LocalizedText,
    /// Hex color tag the presentation layer uses for the category tab
    pub color: String,
}

impl Category {
    pub fn new(
        key: impl Into<String>,
        name: LocalizedText,
        color: impl Into<String>,
    ) -> Self {
        Self {
            key: key.into(),
            name,
            color: color.into(),
        }
    }
}
