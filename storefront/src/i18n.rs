//! UI string tables (Arabic/English) with safe fallback
//!
//! Arabic is the base table; English is an overlay on top of it, so every
//! key resolvable in Arabic is resolvable in English too. Unknown keys
//! fall back to the key itself rather than failing a render.

use shared::Language;
use std::collections::HashMap;
use std::sync::OnceLock;

/// Currency suffix, identical in both languages
pub const CURRENCY: &str = "SAR";

/// Lookup keys for the UI string set
pub mod keys {
    pub const APP_TITLE: &str = "app.title";
    pub const CART_TITLE: &str = "cart.title";
    pub const CART_EMPTY: &str = "cart.empty";
    pub const CART_TOTAL: &str = "cart.total";
    pub const CART_CHECKOUT: &str = "cart.checkout";
    pub const CART_ADDED: &str = "cart.added";
    pub const PRODUCT_ADD: &str = "product.add";
    pub const PRODUCT_INCLUDES: &str = "product.includes";
}

pub type StringTable = HashMap<&'static str, &'static str>;

fn base_ar() -> StringTable {
    let pairs: [(&str, &str); 8] = [
        ("app.title", "فندق عبير"),
        ("cart.title", "سلة التسوق"),
        ("cart.empty", "السلة فارغة"),
        ("cart.total", "المجموع"),
        ("cart.checkout", "إتمام الطلب"),
        ("cart.added", "تمت الإضافة للسلة"),
        ("product.add", "إضافة للسلة"),
        ("product.includes", "يشمل"),
    ];
    pairs.into_iter().collect()
}

fn en_overlay() -> StringTable {
    let pairs: [(&str, &str); 8] = [
        ("app.title", "Abeer Hotel"),
        ("cart.title", "Shopping Cart"),
        ("cart.empty", "Cart is empty"),
        ("cart.total", "Total"),
        ("cart.checkout", "Checkout"),
        ("cart.added", "Added to cart"),
        ("product.add", "Add to Cart"),
        ("product.includes", "Includes"),
    ];
    pairs.into_iter().collect()
}

fn table(language: Language) -> &'static StringTable {
    static AR: OnceLock<StringTable> = OnceLock::new();
    static EN: OnceLock<StringTable> = OnceLock::new();

    match language {
        Language::Ar => AR.get_or_init(base_ar),
        Language::En => EN.get_or_init(|| {
            let mut map = base_ar();
            for (k, v) in en_overlay() {
                map.insert(k, v);
            }
            map
        }),
    }
}

/// Look a UI string up for the given language
pub fn tr(language: Language, key: &'static str) -> &'static str {
    table(language).get(key).copied().unwrap_or(key)
}
