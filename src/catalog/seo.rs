//! SEO text builders: meta titles, meta descriptions, keyword packs, and the
//! long-form product description used by the bulk rewrite command.

/// An SEO payload for one product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeoPayload {
    pub description: String,
    pub meta_title: String,
    pub meta_description: String,
}

/// Collapse internal whitespace and trim.
pub fn clean_text(value: &str) -> String {
    value.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Truncate to `max_len` characters, replacing the tail with an ellipsis.
/// Operates on characters, not bytes, so multi-byte text stays valid.
pub fn truncate(value: &str, max_len: usize) -> String {
    let value = clean_text(value);
    if value.chars().count() <= max_len {
        return value;
    }
    let cut: String = value.chars().take(max_len.saturating_sub(1)).collect();
    format!("{}…", cut.trim_end())
}

/// Keyword pack for a product, picked from its category name.
pub fn keyword_pack(category_name: Option<&str>, product_name: &str) -> String {
    let name = category_name.unwrap_or("").to_lowercase();
    if name.contains("salajit") || name.contains("shilajit") {
        return "pure salajit, shilajit, himalayan, original, authentic".to_string();
    }
    if name.contains("dry") || name.contains("fruit") {
        return "dry fruits, premium quality, fresh, healthy snack".to_string();
    }
    if name.contains("honey") {
        return "organic honey, pure, raw honey, mountain honey".to_string();
    }
    if name.contains("nuts") {
        return "nuts, premium nuts, healthy fats, protein".to_string();
    }
    if name.contains("spice") || name.contains("herb") {
        return "spices, herbs, organic, natural".to_string();
    }
    if name.contains("oil") {
        return "cold pressed oil, natural oil, pure".to_string();
    }
    if name.contains("wool") {
        return "handmade, traditional, wool products, chitral".to_string();
    }
    if name.contains("pickle") {
        return "homemade pickles, traditional taste, spicy".to_string();
    }
    if name.contains("jam") || name.contains("preserve") {
        return "jams, preserves, homemade, natural".to_string();
    }
    if name.contains("seed") {
        return "seeds, organic seeds, healthy".to_string();
    }
    format!("{}, chitral, pakistan, buy online", product_name)
}

/// Build the full SEO payload for a product and its primary category.
pub fn build_seo(product_name: &str, category_name: Option<&str>) -> SeoPayload {
    let product_name = clean_text(product_name);
    let category_name = clean_text(category_name.unwrap_or(""));

    // Keyword pack is computed for parity with the category mapping even
    // though the current templates inline their own keywords.
    let _keywords = keyword_pack(
        if category_name.is_empty() { None } else { Some(category_name.as_str()) },
        &product_name,
    );
    let category_phrase = if category_name.is_empty() {
        String::new()
    } else {
        format!(" in {}", category_name)
    };

    let meta_title = truncate(
        &format!(
            "{}{} | Buy Online in Pakistan - Chitral Hive",
            product_name, category_phrase
        ),
        150,
    );

    let meta_description = truncate(
        &format!(
            "Buy {}{} online from Chitral Hive. Authentic Chitrali quality, \
             safe packaging, nationwide delivery across Pakistan.",
            product_name, category_phrase
        ),
        300,
    );

    let description = format!(
        "{}{} from Chitral Hive.\n\n\
         Why you'll love it:\n\
         - Authentic Chitrali quality\n\
         - Carefully packed for freshness\n\
         - Fast delivery across Pakistan\n\n\
         How to use:\n\
         - Enjoy daily as needed, or add to your recipes\n\n\
         Order now from Chitral Hive and enjoy genuine taste from Chitral.",
        product_name, category_phrase
    );
    let description = if description.chars().count() > 2000 {
        truncate(&description, 2000)
    } else {
        description
    };

    SeoPayload {
        description,
        meta_title,
        meta_description,
    }
}

/// The kind of record a meta URL or meta title is generated for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Category,
    Product,
    Bundle,
}

/// SEO-friendly path for a record.
pub fn meta_url(kind: Kind, slug: &str) -> String {
    match kind {
        Kind::Category => format!("/categories/{}", slug),
        Kind::Product => format!("/products/{}", slug),
        Kind::Bundle => format!("/bundles/{}", slug),
    }
}

/// SEO-friendly page title for a record.
pub fn meta_title(kind: Kind, name: &str) -> String {
    match kind {
        Kind::Category => format!("{} - Shop Online | ChitralHive", name),
        Kind::Product => format!("{} - Buy Online | ChitralHive", name),
        Kind::Bundle => format!("{} - Special Bundle | ChitralHive", name),
    }
}

/// SEO-friendly meta description, clamped to 160 characters.
pub fn meta_description(kind: Kind, name: &str, description: &str) -> String {
    let prefix = match kind {
        Kind::Category => format!("Shop {} online", name),
        Kind::Product => format!("Buy {} online", name),
        Kind::Bundle => format!("Get {} - Special bundle offer", name),
    };
    let full = format!("{}. {}", prefix, description);
    if full.chars().count() > 160 {
        let cut: String = full.chars().take(157).collect();
        format!("{}...", cut)
    } else {
        full
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_text_collapses_whitespace() {
        assert_eq!(clean_text("  a \t b\n\nc "), "a b c");
    }

    #[test]
    fn truncate_keeps_short_values() {
        assert_eq!(truncate("short", 10), "short");
    }

    #[test]
    fn truncate_appends_ellipsis() {
        let out = truncate("abcdefghij", 5);
        assert_eq!(out.chars().count(), 5);
        assert!(out.ends_with('…'));
    }

    #[test]
    fn keyword_pack_matches_category() {
        assert_eq!(
            keyword_pack(Some("Chitrali Honey"), "x"),
            "organic honey, pure, raw honey, mountain honey"
        );
        assert_eq!(
            keyword_pack(Some("Pure Salajit"), "x"),
            "pure salajit, shilajit, himalayan, original, authentic"
        );
        // Dry fruits wins over nuts when both words appear.
        assert_eq!(
            keyword_pack(Some("Dry Fruits & Nuts"), "x"),
            "dry fruits, premium quality, fresh, healthy snack"
        );
    }

    #[test]
    fn keyword_pack_falls_back_to_product() {
        assert_eq!(
            keyword_pack(None, "Pakol Cap"),
            "Pakol Cap, chitral, pakistan, buy online"
        );
        assert_eq!(
            keyword_pack(Some("Gift Boxes"), "Gift Box"),
            "Gift Box, chitral, pakistan, buy online"
        );
    }

    #[test]
    fn build_seo_shapes() {
        let seo = build_seo("Raw Mountain Honey", Some("Chitrali Honey"));
        assert_eq!(
            seo.meta_title,
            "Raw Mountain Honey in Chitrali Honey | Buy Online in Pakistan - Chitral Hive"
        );
        assert!(seo.meta_description.starts_with("Buy Raw Mountain Honey in Chitrali Honey online"));
        assert!(seo.meta_description.chars().count() <= 300);
        assert!(seo.description.contains("Why you'll love it:"));
        assert!(seo.description.chars().count() <= 2000);
    }

    #[test]
    fn build_seo_without_category() {
        let seo = build_seo("Walnut Oil", None);
        assert_eq!(
            seo.meta_title,
            "Walnut Oil | Buy Online in Pakistan - Chitral Hive"
        );
        assert!(!seo.meta_title.contains(" in "));
    }

    #[test]
    fn meta_helpers() {
        assert_eq!(meta_url(Kind::Product, "walnuts-1"), "/products/walnuts-1");
        assert_eq!(meta_url(Kind::Category, "honey"), "/categories/honey");
        assert_eq!(meta_url(Kind::Bundle, "combo"), "/bundles/combo");
        assert_eq!(
            meta_title(Kind::Bundle, "Combo Pack"),
            "Combo Pack - Special Bundle | ChitralHive"
        );
        let long = "d".repeat(300);
        let desc = meta_description(Kind::Product, "X", &long);
        assert_eq!(desc.chars().count(), 160);
        assert!(desc.ends_with("..."));
    }
}
