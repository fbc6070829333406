//! Product Model
//!
//! Products come in two shapes: simple items sold as-is, and configurable
//! items (the breakfast sets) carrying option groups the guest chooses
//! from plus a list of included sides. The split is a tagged enum so the
//! cart engine's option handling is checked exhaustively at compile time
//! instead of being guarded by field-presence checks.

use serde::{Deserialize, Serialize};

use crate::lang::LocalizedText;

/// One selectable option group on a configurable product
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionGroup {
    /// Stable group key (`main`, `drink`); selections are keyed by it
    pub key: String,
    pub name: LocalizedText,
    /// Ordered, non-empty list of choices
    pub choices: Vec<LocalizedText>,
}

impl OptionGroup {
    pub fn new(
        key: impl Into<String>,
        name: LocalizedText,
        choices: Vec<LocalizedText>,
    ) -> Self {
        Self {
            key: key.into(),
            name,
            choices,
        }
    }
}

/// A product sold without any configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimpleProduct {
    /// Unique within the catalog
    pub id: String,
    pub name: LocalizedText,
    /// Unit price in SAR, non-negative
    pub price: f64,
}

/// A product the guest configures before adding to the cart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfigurableProduct {
    /// Unique within the catalog
    pub id: String,
    pub name: LocalizedText,
    /// Unit price in SAR, non-negative; choices do not alter it
    pub price: f64,
    /// Ordered, non-empty list of option groups
    pub option_groups: Vec<OptionGroup>,
    /// Sides included with every order, display only
    #[serde(default)]
    pub includes: Vec<LocalizedText>,
}

/// A catalog product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Product {
    Simple(SimpleProduct),
    Configurable(ConfigurableProduct),
}

impl Product {
    pub fn id(&self) -> &str {
        match self {
            Product::Simple(p) => &p.id,
            Product::Configurable(p) => &p.id,
        }
    }

    pub fn name(&self) -> &LocalizedText {
        match self {
            Product::Simple(p) => &p.name,
            Product::Configurable(p) => &p.name,
        }
    }

    pub fn price(&self) -> f64 {
        match self {
            Product::Simple(p) => p.price,
            Product::Configurable(p) => p.price,
        }
    }

    /// Option groups to choose from; empty for simple products
    pub fn option_groups(&self) -> &[OptionGroup] {
        match self {
            Product::Simple(_) => &[],
            Product::Configurable(p) => &p.option_groups,
        }
    }

    /// Included sides; empty for simple products
    pub fn includes(&self) -> &[LocalizedText] {
        match self {
            Product::Simple(_) => &[],
            Product::Configurable(p) => &p.includes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tea() -> LocalizedText {
        LocalizedText::new("Tea", "شاي")
    }

    #[test]
    fn accessors_cover_both_variants() {
        let simple = Product::Simple(SimpleProduct {
            id: "kitkat".to_string(),
            name: LocalizedText::new("KitKat", "كتكات"),
            price: 2.0,
        });
        assert_eq!(simple.id(), "kitkat");
        assert_eq!(simple.price(), 2.0);
        assert!(simple.option_groups().is_empty());
        assert!(simple.includes().is_empty());

        let configurable = Product::Configurable(ConfigurableProduct {
            id: "arabic-breakfast".to_string(),
            name: LocalizedText::new("Arabic Breakfast", "إفطار عربي"),
            price: 26.0,
            option_groups: vec![OptionGroup::new(
                "drink",
                LocalizedText::new("Drink", "المشروب"),
                vec![tea()],
            )],
            includes: vec![LocalizedText::new("Honey", "عسل")],
        });
        assert_eq!(configurable.id(), "arabic-breakfast");
        assert_eq!(configurable.option_groups().len(), 1);
        assert_eq!(configurable.includes().len(), 1);
    }

    #[test]
    fn tagged_serialization_distinguishes_variants() {
        let simple = Product::Simple(SimpleProduct {
            id: "twix".to_string(),
            name: LocalizedText::new("Twix", "توكس"),
            price: 2.0,
        });
        let json = serde_json::to_string(&simple).unwrap();
        assert!(json.contains("\"type\":\"simple\""));

        let back: Product = serde_json::from_str(&json).unwrap();
        assert_eq!(back, simple);
    }
}
