//! Cart line identity
//!
//! A cart line's identity is the product plus the exact set of chosen
//! options. `canonical_options` defines the canonical serialized form of a
//! selection (sorted group keys, both language forms of each choice);
//! `line_key` derives a content-addressed id from it. Lines with the same
//! key can be merged (quantities added together).

use sha2::{Digest, Sha256};
use shared::{CartLine, SelectedOptions};

// Variable-length string fields need explicit delimiters to keep the
// canonical form unambiguous.
const FIELD_SEP: char = '\u{1f}';
const ENTRY_SEP: char = '\u{1e}';

/// Canonical serialized form of a selection
///
/// Entries in sorted group-key order, each as `key`/`en`/`ar` separated by
/// the unit separator, entries joined by the record separator. Identical
/// for any construction order of the same selection.
pub fn canonical_options(selections: &SelectedOptions) -> String {
    let mut out = String::new();
    for (group_key, choice) in selections.iter() {
        if !out.is_empty() {
            out.push(ENTRY_SEP);
        }
        out.push_str(group_key);
        out.push(FIELD_SEP);
        out.push_str(&choice.en);
        out.push(FIELD_SEP);
        out.push_str(&choice.ar);
    }
    out
}

/// Content-addressed identity key for a (product, selections) pair
///
/// SHA-256 over the product id and the canonical option form, truncated to
/// 16 bytes and hex-encoded. Unit price is not part of the identity: the
/// catalog is static, so one product id has exactly one price.
pub fn line_key(product_id: &str, selections: &SelectedOptions) -> String {
    let mut hasher = Sha256::new();

    hasher.update(product_id.as_bytes());
    hasher.update([0u8]);
    hasher.update(canonical_options(selections).as_bytes());

    let result = hasher.finalize();
    hex::encode(&result[..16]) // First 16 bytes keep the key short
}

/// Identity key of an existing cart line
pub fn key_of(line: &CartLine) -> String {
    line_key(&line.product_id, &line.selected_options)
}
