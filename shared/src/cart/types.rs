//! Cart line and application state
//!
//! `CartLine` is the persisted snapshot of one product+options combination;
//! `AppState` is the full client state the persistence bridge mirrors to
//! local storage and rehydrates at startup.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::lang::{Language, LocalizedText};

/// The guest's chosen value for each option group of a product
///
/// Keyed by option-group key. The backing map is ordered, so equality is
/// structural and independent of construction order, and iteration always
/// yields sorted keys (the canonical order the identity key relies on).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SelectedOptions(BTreeMap<String, LocalizedText>);

impl SelectedOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the choice for one option group, replacing any earlier choice
    pub fn choose(&mut self, group_key: impl Into<String>, choice: LocalizedText) {
        self.0.insert(group_key.into(), choice);
    }

    pub fn get(&self, group_key: &str) -> Option<&LocalizedText> {
        self.0.get(group_key)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Entries in sorted key order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &LocalizedText)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl FromIterator<(String, LocalizedText)> for SelectedOptions {
    fn from_iter<T: IntoIterator<Item = (String, LocalizedText)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// One distinct product+options combination in the cart
///
/// Name and unit price are snapshots copied from the catalog at add time,
/// so a persisted cart renders without a catalog lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    pub product_id: String,
    pub name: LocalizedText,
    /// Unit price in SAR at the time the line was added
    pub unit_price: f64,
    #[serde(default, skip_serializing_if = "SelectedOptions::is_empty")]
    pub selected_options: SelectedOptions,
    /// Always >= 1; a line that would reach 0 is removed instead
    pub quantity: i32,
}

impl CartLine {
    /// A fresh line with quantity 1
    pub fn new(
        product_id: impl Into<String>,
        name: LocalizedText,
        unit_price: f64,
        selected_options: SelectedOptions,
    ) -> Self {
        Self {
            product_id: product_id.into(),
            name,
            unit_price,
            selected_options,
            quantity: 1,
        }
    }
}

/// The client's full persisted state: display language plus cart contents
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppState {
    pub language: Language,
    #[serde(default)]
    pub cart: Vec<CartLine>,
}
