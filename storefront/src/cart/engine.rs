//! Cart mutations
//!
//! Pure in-memory operations over the cart line list; callers mirror the
//! result to storage afterwards. Lines are matched by their content-
//! addressed identity key, so two selections with the same chosen values
//! always land on the same line regardless of construction order.

use shared::CartLine;
use tracing::debug;

use super::key;

/// Outcome of a quantity delta
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityOutcome {
    /// No line with that identity exists; nothing changed
    NotFound,
    /// Quantity replaced in place
    Updated(i32),
    /// The delta took the quantity to zero or below; the line was dropped
    Removed,
}

/// Add a line, merging into an existing line with the same identity key
///
/// A merge increments the existing line's quantity and keeps its position;
/// otherwise the line is appended at the end. Returns the identity key.
pub fn add_or_merge_line(lines: &mut Vec<CartLine>, line: CartLine) -> String {
    let key = key::key_of(&line);

    if let Some(existing) = lines.iter_mut().find(|l| key::key_of(l) == key) {
        existing.quantity = existing.quantity.saturating_add(line.quantity);
        debug!(
            product_id = %existing.product_id,
            quantity = existing.quantity,
            "Merged cart line"
        );
    } else {
        debug!(product_id = %line.product_id, "Appended cart line");
        lines.push(line);
    }

    key
}

/// Apply a quantity delta to the line with the given identity key
///
/// A resulting quantity ≤ 0 drops the line entirely (zero-floor); the
/// order of the remaining lines is preserved. Unknown keys are a no-op.
/// `delta` is typically ±1 but any integer is accepted.
pub fn apply_quantity_delta(
    lines: &mut Vec<CartLine>,
    target_key: &str,
    delta: i32,
) -> QuantityOutcome {
    let Some(pos) = lines.iter().position(|l| key::key_of(l) == target_key) else {
        return QuantityOutcome::NotFound;
    };

    let new_quantity = lines[pos].quantity.saturating_add(delta);
    if new_quantity <= 0 {
        let removed = lines.remove(pos);
        debug!(product_id = %removed.product_id, "Dropped cart line at quantity floor");
        QuantityOutcome::Removed
    } else {
        lines[pos].quantity = new_quantity;
        QuantityOutcome::Updated(new_quantity)
    }
}

/// Remove the line with the given identity key; reports whether one existed
pub fn remove_line(lines: &mut Vec<CartLine>, target_key: &str) -> bool {
    let before = lines.len();
    lines.retain(|l| key::key_of(l) != target_key);
    lines.len() != before
}
