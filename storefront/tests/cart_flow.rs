//! End-to-end cart flows through the storefront controller
//! Run: cargo test -p storefront --test cart_flow

use std::collections::BTreeMap;
use std::path::Path;

use rand::Rng;
use shared::{LocalizedText, SelectedOptions};
use storefront::{Catalog, QuantityOutcome, StateStore, Storefront};

const RANDOM_ADD_COUNT: usize = 400;

fn open_storefront(dir: &Path) -> Storefront {
    let store = StateStore::open(dir.join("storefront.redb")).unwrap();
    Storefront::with_parts(Catalog::built_in(), store).unwrap()
}

fn tea() -> LocalizedText {
    LocalizedText::new("Tea", "شاي")
}

fn juice() -> LocalizedText {
    LocalizedText::new("Juice", "عصير")
}

/// Full Arabic-breakfast selections with the given drink
fn breakfast_with(drink: LocalizedText) -> SelectedOptions {
    let mut selections = SelectedOptions::new();
    selections.choose("main", LocalizedText::new("Shakshuka", "شكشوكة"));
    selections.choose("drink", drink);
    selections
}

#[test]
fn empty_cart_walkthrough_to_empty_again() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = open_storefront(dir.path());

    assert!(app.cart().is_empty());
    assert!(!app.can_checkout());
    assert_eq!(app.total_amount(), 0.0);

    // First add creates the line
    app.add_item("kitkat", SelectedOptions::new());
    assert_eq!(app.cart().len(), 1);
    assert_eq!(app.cart()[0].product_id, "kitkat");
    assert_eq!(app.cart()[0].quantity, 1);
    assert_eq!(app.total_amount(), 2.0);
    assert!(app.can_checkout());
    assert!(app.take_notice().is_some());

    // Second add merges into it
    app.add_item("kitkat", SelectedOptions::new());
    assert_eq!(app.cart().len(), 1);
    assert_eq!(app.cart()[0].quantity, 2);
    assert_eq!(app.total_amount(), 4.0);
    assert_eq!(app.item_count(), 2);

    // Step back down
    let outcome = app.update_quantity("kitkat", &SelectedOptions::new(), -1);
    assert_eq!(outcome, QuantityOutcome::Updated(1));
    assert_eq!(app.total_amount(), 2.0);

    // Reaching zero removes the line entirely
    let outcome = app.update_quantity("kitkat", &SelectedOptions::new(), -1);
    assert_eq!(outcome, QuantityOutcome::Removed);
    assert!(app.cart().is_empty());
    assert_eq!(app.total_amount(), 0.0);
    assert_eq!(app.item_count(), 0);
    assert!(!app.can_checkout());
}

#[test]
fn same_product_with_different_choices_keeps_separate_lines() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = open_storefront(dir.path());

    app.add_item("arabic-breakfast", breakfast_with(tea()));
    app.add_item("arabic-breakfast", breakfast_with(tea()));
    app.add_item("arabic-breakfast", breakfast_with(juice()));

    assert_eq!(app.cart().len(), 2);
    assert_eq!(app.cart()[0].quantity, 2);
    assert_eq!(app.cart()[1].quantity, 1);
    assert_eq!(app.total_amount(), 78.0);
    assert_eq!(app.item_count(), 3);

    // Adjusting the tea line leaves the juice line untouched
    let outcome = app.update_quantity("arabic-breakfast", &breakfast_with(tea()), -1);
    assert_eq!(outcome, QuantityOutcome::Updated(1));
    assert_eq!(app.cart().len(), 2);
    assert_eq!(app.cart()[1].selected_options.get("drink"), Some(&juice()));
    assert_eq!(app.cart()[1].quantity, 1);
    assert_eq!(app.total_amount(), 52.0);
}

#[test]
fn choice_order_does_not_affect_line_identity() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = open_storefront(dir.path());

    let mut drink_first = SelectedOptions::new();
    drink_first.choose("drink", tea());
    drink_first.choose("main", LocalizedText::new("Shakshuka", "شكشوكة"));

    let mut main_first = SelectedOptions::new();
    main_first.choose("main", LocalizedText::new("Shakshuka", "شكشوكة"));
    main_first.choose("drink", tea());

    app.add_item("arabic-breakfast", drink_first);
    app.add_item("arabic-breakfast", main_first);

    assert_eq!(app.cart().len(), 1);
    assert_eq!(app.cart()[0].quantity, 2);
}

#[test]
fn mixed_cart_totals_and_item_count() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = open_storefront(dir.path());

    app.add_item("arabic-breakfast", breakfast_with(tea()));
    app.add_item("orange-juice", SelectedOptions::new());
    app.add_item("orange-juice", SelectedOptions::new());
    app.add_item("orange-juice", SelectedOptions::new());
    app.add_item("kitkat", SelectedOptions::new());

    assert_eq!(app.cart().len(), 3);
    assert_eq!(app.total_amount(), 31.0);
    assert_eq!(app.item_count(), 5);
}

#[test]
fn removing_one_identity_leaves_the_rest() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = open_storefront(dir.path());

    app.add_item("arabic-breakfast", breakfast_with(tea()));
    app.add_item("arabic-breakfast", breakfast_with(juice()));
    app.add_item("snickers", SelectedOptions::new());

    assert!(app.remove_item("arabic-breakfast", &breakfast_with(tea())));
    assert_eq!(app.cart().len(), 2);
    assert_eq!(app.cart()[0].selected_options.get("drink"), Some(&juice()));
    assert_eq!(app.cart()[1].product_id, "snickers");

    // Same identity a second time finds nothing
    assert!(!app.remove_item("arabic-breakfast", &breakfast_with(tea())));
    assert_eq!(app.cart().len(), 2);
}

#[test]
fn random_snack_adds_settle_into_merged_lines() {
    let snack_ids = ["kitkat", "twix", "galaxy-fingers", "galaxy", "snickers"];

    let dir = tempfile::tempdir().unwrap();
    let mut app = open_storefront(dir.path());
    let mut rng = rand::thread_rng();

    let mut expected: BTreeMap<&str, i32> = BTreeMap::new();
    for _ in 0..RANDOM_ADD_COUNT {
        let id = snack_ids[rng.gen_range(0..snack_ids.len())];
        app.add_item(id, SelectedOptions::new());
        *expected.entry(id).or_insert(0) += 1;
    }

    // One line per distinct product, quantities fully merged
    assert_eq!(app.cart().len(), expected.len());
    for line in app.cart() {
        assert_eq!(line.quantity, expected[line.product_id.as_str()]);
    }

    let expected_total: f64 = expected
        .iter()
        .map(|(id, count)| app.catalog().product(id).price() * f64::from(*count))
        .sum();
    assert_eq!(app.total_amount(), expected_total);
    assert_eq!(app.item_count(), RANDOM_ADD_COUNT as i32);

    println!(
        "{} adds settled into {} lines, total {} SAR",
        RANDOM_ADD_COUNT,
        app.cart().len(),
        app.total_amount()
    );
}
