//! Storefront controller
//!
//! `Storefront` owns the application state and composes the injected
//! collaborators (catalog, state store). It is the single writer: every
//! mutation runs to completion, including its storage mirror, before the
//! next event is handled, so the in-memory state and the stored state
//! never drift apart within a session.

use anyhow::Context;
use shared::{AppState, CartLine, Language, Product, SelectedOptions};
use tracing::{info, warn};

use crate::cart::{self, QuantityOutcome};
use crate::catalog::Catalog;
use crate::core::Config;
use crate::i18n::{self, keys};
use crate::storage::{StateStore, StorageResult};

/// One-shot confirmation shown after an add
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    /// Localized "Added to cart" headline
    pub title: String,
    /// Product name in the active language
    pub detail: String,
}

/// Application controller holding state and collaborators
pub struct Storefront {
    catalog: Catalog,
    store: StateStore,
    state: AppState,
    notice: Option<Notice>,
}

impl Storefront {
    /// Initialize the storefront from configuration
    ///
    /// In order:
    /// 1. Ensure the data directory exists
    /// 2. Open the client state store
    /// 3. Rehydrate language and cart from storage
    pub fn initialize(config: &Config) -> anyhow::Result<Self> {
        std::fs::create_dir_all(&config.data_dir)
            .with_context(|| format!("Failed to create data directory {:?}", config.data_dir))?;

        let store = StateStore::open(config.db_path())
            .with_context(|| format!("Failed to open state store at {:?}", config.db_path()))?;

        let storefront =
            Self::with_parts(Catalog::built_in(), store).context("Failed to load stored state")?;
        Ok(storefront)
    }

    /// Assemble from injected collaborators, rehydrating persisted state
    ///
    /// Production code goes through [`initialize`](Self::initialize); this
    /// entry exists for embedding and tests.
    pub fn with_parts(catalog: Catalog, store: StateStore) -> StorageResult<Self> {
        let state = store.load_state()?;
        info!(
            language = state.language.code(),
            lines = state.cart.len(),
            "Loaded stored client state"
        );

        Ok(Self {
            catalog,
            store,
            state,
            notice: None,
        })
    }

    // ========== Cart mutations ==========

    /// Add one unit of a product with the given selections
    ///
    /// Merges into an existing line when the (product, selections) identity
    /// matches, mirrors the cart, and records the confirmation notice in
    /// the active language. Returns the line's identity key.
    ///
    /// # Panics
    ///
    /// Panics on an unknown product id, on selections passed for a simple
    /// product, and on a selection keyed by an option group the product
    /// does not have. The UI only offers catalog entries, so these are
    /// programming errors.
    pub fn add_item(&mut self, product_id: &str, selections: SelectedOptions) -> String {
        let product = self.catalog.product(product_id);
        match product {
            Product::Simple(_) => {
                assert!(
                    selections.is_empty(),
                    "Simple product {product_id} takes no options"
                );
            }
            Product::Configurable(p) => {
                for (key, _) in selections.iter() {
                    assert!(
                        p.option_groups.iter().any(|g| &g.key == key),
                        "Product {product_id} has no option group {key}"
                    );
                }
            }
        }

        let line = CartLine::new(product_id, product.name().clone(), product.price(), selections);
        let key = cart::add_or_merge_line(&mut self.state.cart, line);

        let language = self.state.language;
        self.notice = Some(Notice {
            title: i18n::tr(language, keys::CART_ADDED).to_string(),
            detail: product.name().get(language).to_string(),
        });

        info!(product_id = %product_id, "Item added to cart");
        self.mirror_cart();
        key
    }

    /// Adjust the quantity of the line matching (product, selections)
    ///
    /// A resulting quantity of zero or less removes the line. Unknown
    /// identities are a no-op and nothing is written.
    pub fn update_quantity(
        &mut self,
        product_id: &str,
        selections: &SelectedOptions,
        delta: i32,
    ) -> QuantityOutcome {
        let key = cart::line_key(product_id, selections);
        let outcome = cart::apply_quantity_delta(&mut self.state.cart, &key, delta);
        if outcome != QuantityOutcome::NotFound {
            self.mirror_cart();
        }
        outcome
    }

    /// Remove the line matching (product, selections) entirely
    pub fn remove_item(&mut self, product_id: &str, selections: &SelectedOptions) -> bool {
        let key = cart::line_key(product_id, selections);
        let removed = cart::remove_line(&mut self.state.cart, &key);
        if removed {
            self.mirror_cart();
        }
        removed
    }

    // ========== Language ==========

    pub fn language(&self) -> Language {
        self.state.language
    }

    /// Switch to the given language, persisting the preference on change
    pub fn set_language(&mut self, language: Language) {
        if self.state.language == language {
            return;
        }
        self.state.language = language;
        if let Err(e) = self.store.save_language(language) {
            warn!(error = %e, "Failed to persist language preference");
        }
    }

    pub fn toggle_language(&mut self) {
        self.set_language(self.state.language.toggled());
    }

    // ========== Read-only views ==========

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn cart(&self) -> &[CartLine] {
        &self.state.cart
    }

    /// Cart total in SAR, recomputed fresh on every call
    pub fn total_amount(&self) -> f64 {
        cart::cart_total(&self.state.cart)
    }

    /// Total number of units across all lines
    pub fn item_count(&self) -> i32 {
        cart::item_count(&self.state.cart)
    }

    /// Whether the checkout control should be enabled (the action itself
    /// is intentionally inert)
    pub fn can_checkout(&self) -> bool {
        !self.state.cart.is_empty()
    }

    /// Hand the pending confirmation notice to the presentation layer
    pub fn take_notice(&mut self) -> Option<Notice> {
        self.notice.take()
    }

    fn mirror_cart(&self) {
        if let Err(e) = self.store.save_cart(&self.state.cart) {
            warn!(error = %e, "Failed to mirror cart to storage");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::LocalizedText;

    fn storefront() -> Storefront {
        let store = StateStore::open_in_memory().unwrap();
        Storefront::with_parts(Catalog::built_in(), store).unwrap()
    }

    fn breakfast_selections(drink_en: &str, drink_ar: &str) -> SelectedOptions {
        let mut selections = SelectedOptions::new();
        selections.choose("main", LocalizedText::new("Shakshuka", "شكشوكة"));
        selections.choose("drink", LocalizedText::new(drink_en, drink_ar));
        selections
    }

    #[test]
    fn adding_twice_merges_and_derives_fresh_totals() {
        let mut app = storefront();

        app.add_item("kitkat", SelectedOptions::new());
        app.add_item("kitkat", SelectedOptions::new());

        assert_eq!(app.cart().len(), 1);
        assert_eq!(app.cart()[0].quantity, 2);
        assert_eq!(app.total_amount(), 4.0);
        assert_eq!(app.item_count(), 2);
    }

    #[test]
    fn selections_split_lines_for_the_same_product() {
        let mut app = storefront();

        app.add_item("arabic-breakfast", breakfast_selections("Tea", "شاي"));
        app.add_item("arabic-breakfast", breakfast_selections("Juice", "عصير"));

        assert_eq!(app.cart().len(), 2);
        assert_eq!(app.total_amount(), 52.0);
    }

    #[test]
    fn notice_follows_the_active_language() {
        let mut app = storefront();

        app.add_item("kitkat", SelectedOptions::new());
        let notice = app.take_notice().unwrap();
        assert_eq!(notice.title, "تمت الإضافة للسلة");
        assert_eq!(notice.detail, "كتكات");
        // One-shot: a second take yields nothing
        assert!(app.take_notice().is_none());

        app.set_language(Language::En);
        app.add_item("kitkat", SelectedOptions::new());
        let notice = app.take_notice().unwrap();
        assert_eq!(notice.title, "Added to cart");
        assert_eq!(notice.detail, "KitKat");
    }

    #[test]
    fn mutations_are_mirrored_to_the_store() {
        let store = StateStore::open_in_memory().unwrap();
        let mirror = store.clone();
        let mut app = Storefront::with_parts(Catalog::built_in(), store).unwrap();

        app.add_item("snickers", SelectedOptions::new());
        assert_eq!(mirror.load_state().unwrap().cart.len(), 1);

        app.remove_item("snickers", &SelectedOptions::new());
        assert!(mirror.load_state().unwrap().cart.is_empty());
    }

    #[test]
    fn language_change_is_persisted() {
        let store = StateStore::open_in_memory().unwrap();
        let mirror = store.clone();
        let mut app = Storefront::with_parts(Catalog::built_in(), store).unwrap();

        app.toggle_language();
        assert_eq!(app.language(), Language::En);
        assert_eq!(mirror.load_state().unwrap().language, Language::En);
    }

    #[test]
    fn can_checkout_flips_with_cart_emptiness() {
        let mut app = storefront();
        assert!(!app.can_checkout());

        app.add_item("twix", SelectedOptions::new());
        assert!(app.can_checkout());

        app.update_quantity("twix", &SelectedOptions::new(), -1);
        assert!(!app.can_checkout());
    }

    #[test]
    fn quantity_updates_locate_lines_by_identity() {
        let mut app = storefront();
        app.add_item("arabic-breakfast", breakfast_selections("Tea", "شاي"));
        app.add_item("arabic-breakfast", breakfast_selections("Juice", "عصير"));

        let outcome =
            app.update_quantity("arabic-breakfast", &breakfast_selections("Tea", "شاي"), 2);
        assert_eq!(outcome, QuantityOutcome::Updated(3));

        // The other selection is untouched
        let juice = breakfast_selections("Juice", "عصير");
        let juice_key = cart::line_key("arabic-breakfast", &juice);
        let line = app
            .cart()
            .iter()
            .find(|l| cart::key_of(l) == juice_key)
            .unwrap();
        assert_eq!(line.quantity, 1);
    }

    #[test]
    fn unknown_identity_update_is_a_no_op() {
        let mut app = storefront();
        app.add_item("kitkat", SelectedOptions::new());

        let outcome = app.update_quantity("twix", &SelectedOptions::new(), -1);
        assert_eq!(outcome, QuantityOutcome::NotFound);
        assert_eq!(app.cart().len(), 1);
    }

    #[test]
    #[should_panic(expected = "takes no options")]
    fn selections_on_a_simple_product_panic() {
        let mut app = storefront();
        let mut selections = SelectedOptions::new();
        selections.choose("drink", LocalizedText::new("Tea", "شاي"));
        app.add_item("kitkat", selections);
    }

    #[test]
    #[should_panic(expected = "has no option group")]
    fn selections_outside_the_product_groups_panic() {
        let mut app = storefront();
        let mut selections = SelectedOptions::new();
        selections.choose("size", LocalizedText::new("Large", "كبير"));
        app.add_item("arabic-breakfast", selections);
    }
}
