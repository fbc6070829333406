//! Built-in menu data
//!
//! The Abeer Hotel menu: four categories and eleven products, defined in
//! display order. This is static configuration; it is assembled once at
//! startup and never mutated.

use shared::{Category, ConfigurableProduct, LocalizedText, OptionGroup, Product, SimpleProduct};

pub const ARABIC_BREAKFAST: &str = "arabicBreakfast";
pub const EASTERN_BREAKFAST: &str = "easternBreakfast";
pub const SNACKS: &str = "snacks";
pub const DRINKS: &str = "drinks";

fn text(en: &str, ar: &str) -> LocalizedText {
    LocalizedText::new(en, ar)
}

fn simple(id: &str, en: &str, ar: &str, price: f64) -> Product {
    Product::Simple(SimpleProduct {
        id: id.to_string(),
        name: text(en, ar),
        price,
    })
}

fn arabic_breakfast() -> Product {
    Product::Configurable(ConfigurableProduct {
        id: "arabic-breakfast".to_string(),
        name: text("Arabic Breakfast", "إفطار عربي"),
        price: 26.0,
        option_groups: vec![
            OptionGroup::new(
                "main",
                text("Main Dish", "الطبق الرئيسي"),
                vec![
                    text("Sunny Side Up Eggs", "بيض عيون"),
                    text("Boiled Eggs", "بيض مسلوق"),
                    text("Shakshuka", "شكشوكة"),
                    text("Omelette", "أملت"),
                ],
            ),
            OptionGroup::new(
                "drink",
                text("Drink", "المشروب"),
                vec![text("Tea", "شاي"), text("Juice", "عصير")],
            ),
        ],
        includes: vec![
            text("Fresh Bread", "خبز طازج"),
            text("Cream", "قشطة"),
            text("Honey", "عسل"),
        ],
    })
}

fn eastern_breakfast() -> Product {
    Product::Configurable(ConfigurableProduct {
        id: "eastern-breakfast".to_string(),
        name: text("Eastern Breakfast", "إفطار شرقي"),
        price: 26.0,
        option_groups: vec![
            OptionGroup::new(
                "main",
                text("Main Dish", "الطبق الرئيسي"),
                vec![
                    text("Foul with Tahini", "فول بطحينة وزيت وكمون"),
                    text("Foul with Tomatoes", "فول بالطماطم"),
                ],
            ),
            OptionGroup::new(
                "drink",
                text("Drink", "المشروب"),
                vec![text("Tea", "شاي"), text("Juice", "عصير")],
            ),
        ],
        includes: vec![
            text("Fresh Bread", "خبز طازج"),
            text("Cheese", "جبن"),
            text("Hummus", "حمص"),
        ],
    })
}

/// The four menu categories, in display order
pub fn categories() -> Vec<Category> {
    vec![
        Category::new(
            ARABIC_BREAKFAST,
            text("Arabic Breakfast", "إفطار عربي"),
            "#D2B48C",
        ),
        Category::new(
            EASTERN_BREAKFAST,
            text("Eastern Breakfast", "إفطار شرقي"),
            "#A78A7F",
        ),
        Category::new(SNACKS, text("Snacks", "سناك"), "#C4A484"),
        Category::new(DRINKS, text("Drinks", "مشروبات"), "#D8B5A6"),
    ]
}

/// Products per category key, in the same order as [`categories`]
pub fn products() -> Vec<(String, Vec<Product>)> {
    vec![
        (ARABIC_BREAKFAST.to_string(), vec![arabic_breakfast()]),
        (EASTERN_BREAKFAST.to_string(), vec![eastern_breakfast()]),
        (
            SNACKS.to_string(),
            vec![
                simple("kitkat", "KitKat", "كتكات", 2.0),
                simple("twix", "Twix", "توكس", 2.0),
                simple("galaxy-fingers", "Galaxy Fingers", "جلاكسي صوابع", 3.0),
                simple("galaxy", "Galaxy", "جلاكسي", 3.0),
                simple("snickers", "Snickers", "سنيكرز", 3.0),
            ],
        ),
        (
            DRINKS.to_string(),
            vec![
                simple("orange-juice", "Almarai Orange Juice", "عصير مراعي بالبرتقال", 1.0),
                simple("mango-juice", "Almarai Mango Juice", "عصير مانجو مراعي", 1.0),
                simple("apple-juice", "Almarai Apple Juice", "عصير تفاح مراعي", 1.0),
                simple("mixed-juice", "Almarai Mixed Fruit Juice", "عصير مشكل فواكه مراعي", 1.0),
            ],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_category_has_a_product_section() {
        let category_keys: Vec<String> =
            categories().into_iter().map(|c| c.key).collect();
        let section_keys: Vec<String> = products().into_iter().map(|(k, _)| k).collect();
        assert_eq!(category_keys, section_keys);
    }

    #[test]
    fn breakfast_sets_carry_both_option_groups() {
        for product in [arabic_breakfast(), eastern_breakfast()] {
            let keys: Vec<&str> = product
                .option_groups()
                .iter()
                .map(|g| g.key.as_str())
                .collect();
            assert_eq!(keys, vec!["main", "drink"]);
            assert!(!product.includes().is_empty());
            assert_eq!(product.price(), 26.0);
        }
    }

    #[test]
    fn drinks_are_priced_at_one_riyal() {
        let sections = products();
        let (_, drinks) = sections.iter().find(|(k, _)| k == DRINKS).unwrap();
        assert_eq!(drinks.len(), 4);
        assert!(drinks.iter().all(|p| p.price() == 1.0));
    }
}
