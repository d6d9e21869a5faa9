//! Best-effort storefront scraping.
//!
//! Tiers, tried in order until one yields products:
//! 1. Shopify-style JSON endpoints (fast, structured)
//! 2. JSON-LD blocks embedded in the listing page
//! 3. Raw-HTML heuristics (regex over product cards)
//! 4. Crawling the individual product pages linked from the listing
//!
//! A source that fails every tier contributes an empty list; nothing here
//! aborts a run.

pub mod html;
pub mod jsonld;
pub mod net;
pub mod seed;
pub mod shopify;
pub mod sources;

use net::Fetcher;

/// A product lifted from a remote storefront.
#[derive(Debug, Clone, PartialEq)]
pub struct ScrapedProduct {
    pub name: String,
    pub price: i64,
    pub sale_price: i64,
    pub image: String,
    pub source: String,
}

/// Options shared by the extraction tiers.
#[derive(Debug, Clone)]
pub struct FetchOptions {
    /// Keep only titles containing this word (case-insensitive).
    pub keyword: Option<String>,
    /// Price to assume when a listing carries none.
    pub fallback_price: i64,
}

impl FetchOptions {
    pub fn title_matches(&self, title: &str) -> bool {
        match &self.keyword {
            Some(kw) => title.to_lowercase().contains(&kw.to_lowercase()),
            None => true,
        }
    }
}

/// Coerce a JSON price (string or number, possibly with thousands commas)
/// into integer rupees, falling back when unparseable.
pub fn price_value(raw: Option<&serde_json::Value>, fallback: i64) -> i64 {
    let text = match raw {
        Some(serde_json::Value::String(s)) => s.clone(),
        Some(serde_json::Value::Number(n)) => n.to_string(),
        _ => return fallback,
    };
    match text.replace(',', "").trim().parse::<f64>() {
        Ok(v) if v.is_finite() && v >= 0.0 => v as i64,
        _ => fallback,
    }
}

/// Resolve a possibly-relative URL against a base. Returns the input
/// unchanged when the base itself does not parse.
pub fn resolve_url(base: &str, href: &str) -> String {
    match reqwest::Url::parse(base).and_then(|b| b.join(href)) {
        Ok(url) => url.to_string(),
        Err(_) => href.to_string(),
    }
}

/// Fetch products from one storefront URL, trying each tier in order.
pub fn fetch_products(fetcher: &Fetcher, shop_url: &str, opts: &FetchOptions) -> Vec<ScrapedProduct> {
    let from_shopify = shopify::fetch(fetcher, shop_url, opts);
    if !from_shopify.is_empty() {
        return from_shopify;
    }

    let html = match fetcher.get_text(shop_url) {
        Ok(body) => body,
        Err(e) => {
            println!("  error fetching {}: {}", shop_url, e);
            return Vec::new();
        }
    };

    let from_jsonld = jsonld::extract_products(&html, shop_url, opts);
    if !from_jsonld.is_empty() {
        return from_jsonld;
    }

    let from_cards = html::extract_products(&html, shop_url, opts);
    if !from_cards.is_empty() {
        return from_cards;
    }

    // Last resort: walk individual product pages, politely.
    let mut products = Vec::new();
    for link in html::product_links(&html, shop_url) {
        if let Ok(page) = fetcher.get_text(&link) {
            products.extend(html::product_from_page(&page, &link, opts));
        }
        std::thread::sleep(std::time::Duration::from_millis(300));
    }
    products
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_value_parses_strings_and_numbers() {
        assert_eq!(price_value(Some(&serde_json::json!("1,250.00")), 600), 1250);
        assert_eq!(price_value(Some(&serde_json::json!(900)), 600), 900);
        assert_eq!(price_value(Some(&serde_json::json!(899.5)), 600), 899);
    }

    #[test]
    fn price_value_falls_back() {
        assert_eq!(price_value(None, 600), 600);
        assert_eq!(price_value(Some(&serde_json::json!("n/a")), 600), 600);
        assert_eq!(price_value(Some(&serde_json::json!(null)), 600), 600);
        assert_eq!(price_value(Some(&serde_json::json!("-5")), 600), 600);
    }

    #[test]
    fn resolve_url_joins_relative() {
        assert_eq!(
            resolve_url("https://shop.example/collections/honey", "/img/a.jpg"),
            "https://shop.example/img/a.jpg"
        );
        assert_eq!(
            resolve_url("https://shop.example/", "https://cdn.example/b.png"),
            "https://cdn.example/b.png"
        );
    }

    #[test]
    fn keyword_filter_is_case_insensitive() {
        let opts = FetchOptions { keyword: Some("honey".to_string()), fallback_price: 1000 };
        assert!(opts.title_matches("Raw HONEY 500g"));
        assert!(!opts.title_matches("Walnut Oil"));
        let open = FetchOptions { keyword: None, fallback_price: 1000 };
        assert!(open.title_matches("anything"));
    }
}
