//! Shopify-style catalog endpoints (`products.json`), also served by several
//! WooCommerce storefronts through compatibility plugins.

use super::{price_value, resolve_url, FetchOptions, ScrapedProduct};
use crate::scrape::net::Fetcher;
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub products: Vec<Product>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Product {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub images: Vec<Image>,
    #[serde(default)]
    pub variants: Vec<Variant>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Image {
    #[serde(default)]
    pub src: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct Variant {
    // Shopify serves prices as strings, some clones as numbers.
    #[serde(default)]
    pub price: Option<serde_json::Value>,
}

/// Candidate JSON endpoints for a shop URL. A `/collections/{slug}` page maps
/// to that collection's product feed; anything else gets the two site-wide
/// feeds.
pub fn endpoints(shop_url: &str) -> Vec<String> {
    if let Some(rest) = shop_url.split("/collections/").nth(1) {
        let slug = rest.split(['?', '/']).next().unwrap_or("");
        if !slug.is_empty() {
            return vec![format!("/collections/{}/products.json?limit=250", slug)];
        }
    }
    vec![
        "/products.json?limit=250".to_string(),
        "/collections/all/products.json?limit=250".to_string(),
    ]
}

/// Convert one catalog payload into scraped products: first image, first
/// variant with a price, keyword filter on the title.
pub fn products_from_catalog(
    catalog: &Catalog,
    base_url: &str,
    opts: &FetchOptions,
) -> Vec<ScrapedProduct> {
    let mut products = Vec::new();
    for product in &catalog.products {
        let title = product.title.trim();
        if title.is_empty() || !opts.title_matches(title) {
            continue;
        }
        let image = match product.images.first() {
            Some(img) if !img.src.is_empty() => resolve_url(base_url, &img.src),
            _ => continue,
        };
        let raw_price = product.variants.iter().find_map(|v| {
            v.price.as_ref().filter(|p| match p {
                serde_json::Value::String(s) => !s.trim().is_empty(),
                serde_json::Value::Null => false,
                _ => true,
            })
        });
        let price = price_value(raw_price, opts.fallback_price);
        products.push(ScrapedProduct {
            name: title.to_string(),
            price,
            sale_price: price,
            image,
            source: base_url.to_string(),
        });
    }
    products
}

/// Fetch products via the JSON endpoints. Endpoint failures are silent; the
/// first endpoint that yields products wins.
pub fn fetch(fetcher: &Fetcher, shop_url: &str, opts: &FetchOptions) -> Vec<ScrapedProduct> {
    for endpoint in endpoints(shop_url) {
        let url = resolve_url(shop_url, &endpoint);
        let Ok(catalog) = fetcher.get_json::<Catalog>(&url) else {
            continue;
        };
        let products = products_from_catalog(&catalog, shop_url, opts);
        if !products.is_empty() {
            return products;
        }
    }
    Vec::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opts(keyword: Option<&str>) -> FetchOptions {
        FetchOptions {
            keyword: keyword.map(str::to_string),
            fallback_price: 1000,
        }
    }

    #[test]
    fn collection_url_maps_to_collection_feed() {
        assert_eq!(
            endpoints("https://www.shubinak.com/collections/honey"),
            vec!["/collections/honey/products.json?limit=250"]
        );
        assert_eq!(
            endpoints("https://shop.example/collections/honey?page=2"),
            vec!["/collections/honey/products.json?limit=250"]
        );
    }

    #[test]
    fn plain_url_gets_sitewide_feeds() {
        let eps = endpoints("https://www.northendryfruits.com/shop");
        assert_eq!(eps.len(), 2);
        assert!(eps[0].starts_with("/products.json"));
        assert!(eps[1].starts_with("/collections/all/"));
    }

    #[test]
    fn catalog_parses_and_filters() {
        let payload = r#"{
            "products": [
                {"title": "Sidr Honey 500g",
                 "images": [{"src": "//cdn.example/sidr.jpg"}],
                 "variants": [{"price": null}, {"price": "1,500.00"}]},
                {"title": "Pine Nuts",
                 "images": [{"src": "https://cdn.example/pine.jpg"}],
                 "variants": [{"price": "3500.00"}]},
                {"title": "Honey Without Image", "images": [], "variants": []}
            ]
        }"#;
        let catalog: Catalog = serde_json::from_str(payload).unwrap();
        let products =
            products_from_catalog(&catalog, "https://shop.example/collections/honey", &opts(Some("honey")));
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].name, "Sidr Honey 500g");
        // Null variant prices are skipped in favor of the first real one.
        assert_eq!(products[0].price, 1500);
        // Protocol-relative image sources resolve against the shop URL.
        assert_eq!(products[0].image, "https://cdn.example/sidr.jpg");
    }

    #[test]
    fn missing_fields_default() {
        let catalog: Catalog = serde_json::from_str(r#"{"products": [{}]}"#).unwrap();
        assert!(products_from_catalog(&catalog, "https://x/", &opts(None)).is_empty());
        let empty: Catalog = serde_json::from_str("{}").unwrap();
        assert!(empty.products.is_empty());
    }

    #[test]
    fn fallback_price_applies_when_variants_lack_one() {
        let payload = r#"{"products": [
            {"title": "Dried Mulberries", "images": [{"src": "/m.jpg"}], "variants": []}
        ]}"#;
        let catalog: Catalog = serde_json::from_str(payload).unwrap();
        let products = products_from_catalog(&catalog, "https://shop.example/", &opts(None));
        assert_eq!(products[0].price, 1000);
    }
}
