//! Cart domain
//!
//! Identity keys, in-memory mutations and money math for the cart.

pub mod engine;
pub mod key;
pub mod money;

pub use engine::{QuantityOutcome, add_or_merge_line, apply_quantity_delta, remove_line};
pub use key::{canonical_options, key_of, line_key};
pub use money::{cart_total, item_count, line_total, to_decimal, to_f64};
