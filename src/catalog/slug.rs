//! Slug, SKU, and POS-id derivation.
//!
//! Seeded products carry their POS id in both slug and SKU so that retrying a
//! seed run never collides with rows it already wrote.

/// Lowercase a name into a URL slug: ASCII alphanumeric runs joined by `-`.
pub fn slugify(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut pending_sep = false;
    for ch in name.chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_sep && !out.is_empty() {
                out.push('-');
            }
            pending_sep = false;
            out.push(ch.to_ascii_lowercase());
        } else {
            pending_sep = true;
        }
    }
    out
}

/// Slug for a seeded item: `{base}-{ext_pos_id}`.
pub fn item_slug(base: &str, ext_pos_id: i64) -> String {
    format!("{}-{}", slugify(base), ext_pos_id)
}

/// SKU for a seeded item: `{PREFIX}-{ext_pos_id:06}`.
pub fn item_sku(prefix: &str, ext_pos_id: i64) -> String {
    format!("{}-{:06}", prefix, ext_pos_id)
}

/// Three-letter SKU prefix derived from a category slug
/// (e.g. `chitrali-dry-fruits` becomes `DRY`).
pub fn category_sku_prefix(category_slug: &str) -> String {
    category_slug
        .trim_start_matches("chitrali-")
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .take(3)
        .map(|c| c.to_ascii_uppercase())
        .collect()
}
