//! JSON-LD extraction: `ItemList` and single-`Product` schemas embedded in
//! `<script type="application/ld+json">` blocks.

use super::{price_value, resolve_url, FetchOptions, ScrapedProduct};
use regex::Regex;
use serde_json::Value;

fn script_blocks(html: &str) -> Vec<String> {
    let re = Regex::new(
        r#"(?is)<script[^>]+type=["']application/ld\+json["'][^>]*>(.*?)</script>"#,
    )
    .expect("static regex");
    re.captures_iter(html)
        .map(|cap| cap[1].trim().to_string())
        .collect()
}

/// Image field may be a bare string or a list of strings.
fn first_image(value: &Value) -> String {
    match value.get("image") {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Array(items)) => items
            .first()
            .and_then(Value::as_str)
            .unwrap_or("")
            .to_string(),
        _ => String::new(),
    }
}

fn item_list_products(data: &Value, base_url: &str, opts: &FetchOptions) -> Vec<ScrapedProduct> {
    let mut products = Vec::new();
    let elements = data
        .get("itemListElement")
        .and_then(Value::as_array)
        .cloned()
        .unwrap_or_default();
    for element in &elements {
        // ListItem wrappers carry the payload under "item".
        let item = element.get("item").unwrap_or(element);
        if !item.is_object() {
            continue;
        }
        let title = item
            .get("name")
            .and_then(Value::as_str)
            .unwrap_or("")
            .trim()
            .to_string();
        if title.is_empty() || !opts.title_matches(&title) {
            continue;
        }
        let image = first_image(item);
        if image.is_empty() {
            continue;
        }
        let url = item.get("url").and_then(Value::as_str).unwrap_or(base_url);
        products.push(ScrapedProduct {
            name: title,
            price: opts.fallback_price,
            sale_price: opts.fallback_price,
            image: resolve_url(base_url, &image),
            source: resolve_url(base_url, url),
        });
    }
    products
}

fn single_product(data: &Value, base_url: &str, opts: &FetchOptions) -> Option<ScrapedProduct> {
    let title = data
        .get("name")
        .and_then(Value::as_str)
        .unwrap_or("")
        .trim()
        .to_string();
    if title.is_empty() || !opts.title_matches(&title) {
        return None;
    }
    let image = first_image(data);
    if image.is_empty() {
        return None;
    }
    let price = price_value(
        data.get("offers").and_then(|offers| offers.get("price")),
        opts.fallback_price,
    );
    Some(ScrapedProduct {
        name: title,
        price,
        sale_price: price,
        image: resolve_url(base_url, &image),
        source: base_url.to_string(),
    })
}

/// Extract products from every JSON-LD block on a page. Blocks that fail to
/// parse are skipped.
pub fn extract_products(html: &str, base_url: &str, opts: &FetchOptions) -> Vec<ScrapedProduct> {
    let mut products = Vec::new();
    for block in script_blocks(html) {
        let Ok(data) = serde_json::from_str::<Value>(&block) else {
            continue;
        };
        match data.get("@type").and_then(Value::as_str) {
            Some("ItemList") => products.extend(item_list_products(&data, base_url, opts)),
            Some("Product") => products.extend(single_product(&data, base_url, opts)),
            _ => {}
        }
    }
    products
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opts(keyword: Option<&str>) -> FetchOptions {
        FetchOptions {
            keyword: keyword.map(str::to_string),
            fallback_price: 600,
        }
    }

    const ITEM_LIST_PAGE: &str = r#"
        <html><head>
        <script type="application/ld+json">
        {
          "@type": "ItemList",
          "itemListElement": [
            {"item": {"name": "Kaghzi Almonds", "image": "/img/almonds.jpg", "url": "/products/almonds"}},
            {"item": {"name": "Dried Apricots", "image": ["/img/apricots.jpg", "/img/b.jpg"]}},
            {"item": {"name": "No Image Product"}},
            "not-an-object"
          ]
        }
        </script>
        </head></html>
    "#;

    #[test]
    fn item_list_is_extracted() {
        let products = extract_products(ITEM_LIST_PAGE, "https://shop.example/", &opts(None));
        assert_eq!(products.len(), 2);
        assert_eq!(products[0].name, "Kaghzi Almonds");
        assert_eq!(products[0].image, "https://shop.example/img/almonds.jpg");
        assert_eq!(products[0].source, "https://shop.example/products/almonds");
        assert_eq!(products[0].price, 600);
        // First entry of an image list wins.
        assert_eq!(products[1].image, "https://shop.example/img/apricots.jpg");
    }

    #[test]
    fn single_product_with_offer_price() {
        let html = r#"
            <script type="application/ld+json">
            {"@type": "Product", "name": "Wild Honey 1kg",
             "image": "https://cdn.example/honey.jpg",
             "offers": {"price": "2,100.00"}}
            </script>
        "#;
        let products = extract_products(html, "https://shop.example/", &opts(None));
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].price, 2100);
        assert_eq!(products[0].sale_price, 2100);
    }

    #[test]
    fn keyword_filter_applies() {
        let products =
            extract_products(ITEM_LIST_PAGE, "https://shop.example/", &opts(Some("almond")));
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].name, "Kaghzi Almonds");
    }

    #[test]
    fn malformed_json_is_skipped() {
        let html = r#"
            <script type="application/ld+json">{not json</script>
            <script type="application/ld+json">
            {"@type": "Product", "name": "Valid One", "image": "/a.jpg"}
            </script>
        "#;
        let products = extract_products(html, "https://shop.example/", &opts(None));
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].name, "Valid One");
    }

    #[test]
    fn unrelated_schema_types_are_ignored() {
        let html = r#"
            <script type="application/ld+json">
            {"@type": "BreadcrumbList", "name": "crumbs"}
            </script>
        "#;
        assert!(extract_products(html, "https://shop.example/", &opts(None)).is_empty());
    }
}
