//! Read-only catalog accessor
//!
//! Lookup over the static menu. The menu is trusted configuration and the
//! UI only offers keys taken from it, so an unknown key is a programming
//! error and panics instead of degrading silently.

use shared::{Category, Product};

use super::menu;

/// The static product catalog
pub struct Catalog {
    categories: Vec<Category>,
    /// Category key → products, parallel to `categories`
    sections: Vec<(String, Vec<Product>)>,
}

impl Catalog {
    /// Build the catalog from the built-in menu data
    pub fn built_in() -> Self {
        Self {
            categories: menu::categories(),
            sections: menu::products(),
        }
    }

    /// All categories in display order
    pub fn list_categories(&self) -> &[Category] {
        &self.categories
    }

    /// Products of one category, in display order
    ///
    /// # Panics
    ///
    /// Panics if `category_key` is not part of the menu.
    pub fn products_in(&self, category_key: &str) -> &[Product] {
        self.sections
            .iter()
            .find(|(key, _)| key == category_key)
            .map(|(_, products)| products.as_slice())
            .unwrap_or_else(|| panic!("Unknown category key: {category_key}"))
    }

    /// Look a product up by id
    ///
    /// # Panics
    ///
    /// Panics if `product_id` is not part of the menu.
    pub fn product(&self, product_id: &str) -> &Product {
        self.sections
            .iter()
            .flat_map(|(_, products)| products.iter())
            .find(|p| p.id() == product_id)
            .unwrap_or_else(|| panic!("Unknown product id: {product_id}"))
    }

    /// Whether a category key exists (for checks at the presentation boundary)
    pub fn contains_category(&self, category_key: &str) -> bool {
        self.sections.iter().any(|(key, _)| key == category_key)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::built_in()
    }
}
