//! Raw-HTML extraction heuristics.
//!
//! These are last-resort regex passes over heterogeneous storefront markup:
//! product-card headings, title-proximity image and price search, and a
//! validity filter that keeps tracker pixels and theme assets out of the
//! results. Proximity searches anchor on the first 30 characters of the
//! title, escaped, with a non-greedy gap.

use super::{resolve_url, FetchOptions, ScrapedProduct};
use regex::Regex;
use rustc_hash::FxHashSet;

/// Patterns that locate product titles in listing markup.
const TITLE_PATTERNS: [&str; 2] = [
    r#"(?is)<h[23][^>]*class=["'][^"']*product[^"']*["'][^>]*>(.*?)</h[23]>"#,
    r#"(?is)<a[^>]*href=["'][^"']*product[^"']*["'][^>]*>.*?<h[23][^>]*>(.*?)</h[23]>"#,
];

const LAZY_IMAGE_ATTRS: [&str; 3] = ["data-src", "data-original", "data-lazy-src"];

/// Remove markup tags and collapse whitespace.
pub fn strip_tags(fragment: &str) -> String {
    let re = Regex::new(r"<[^>]+>").expect("static regex");
    let text = re.replace_all(fragment, " ");
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// The escaped title prefix used to anchor proximity searches.
fn title_anchor(title: &str) -> String {
    let prefix: String = title.chars().take(30).collect();
    regex::escape(&prefix)
}

/// Find an image URL near a product title, checking `src` first and then the
/// common lazy-load attributes.
pub fn image_near_title(html: &str, title: &str, base_url: &str) -> Option<String> {
    let anchor = title_anchor(title);
    let src_pattern = format!(r#"(?is){}.*?<img[^>]+src=["']([^"']+)["']"#, anchor);
    if let Ok(re) = Regex::new(&src_pattern) {
        if let Some(cap) = re.captures(html) {
            let src = cap[1].trim();
            if is_valid_image_url(src) {
                return Some(resolve_url(base_url, src));
            }
        }
    }
    for attr in LAZY_IMAGE_ATTRS {
        let pattern = format!(r#"(?is){}.*?<img[^>]+{}=["']([^"']+)["']"#, anchor, attr);
        if let Ok(re) = Regex::new(&pattern) {
            if let Some(cap) = re.captures(html) {
                let src = cap[1].trim();
                if is_valid_image_url(src) {
                    return Some(resolve_url(base_url, src));
                }
            }
        }
    }
    None
}

/// Find a `PKR`/`Rs` price near a product title.
pub fn price_near_title(html: &str, title: &str) -> Option<i64> {
    let pattern = format!(r#"(?is){}.*?(?:PKR|Rs\.?)\s*([0-9,]+)"#, title_anchor(title));
    let re = Regex::new(&pattern).ok()?;
    let cap = re.captures(html)?;
    cap[1].replace(',', "").parse().ok()
}

/// Filter out tracker, asset, and icon URLs; accept known image extensions or
/// CDN-looking hosts.
pub fn is_valid_image_url(url: &str) -> bool {
    if url.is_empty() {
        return false;
    }
    let lower = url.to_lowercase();
    const BAD: [&str; 17] = [
        "googletagmanager",
        "google-analytics",
        "facebook",
        "twitter",
        "instagram",
        "script",
        "javascript:",
        "data:text",
        "logo",
        "icon",
        "favicon",
        ".js",
        ".css",
        ".json",
        "api/",
        "/api/",
        "sprite",
    ];
    if BAD.iter().any(|bad| lower.contains(bad)) {
        return false;
    }
    const EXTENSIONS: [&str; 6] = [".jpg", ".jpeg", ".png", ".webp", ".gif", ".svg"];
    if EXTENSIONS.iter().any(|ext| lower.contains(ext)) {
        return true;
    }
    const IMAGE_HOSTS: [&str; 8] = [
        "img", "image", "cdn", "static", "media", "assets", "photos", "pics",
    ];
    IMAGE_HOSTS.iter().any(|host| lower.contains(host))
}

/// Extract products from listing markup via the title patterns, resolving an
/// image and price for each distinct title.
pub fn extract_products(html: &str, base_url: &str, opts: &FetchOptions) -> Vec<ScrapedProduct> {
    let mut products = Vec::new();
    let mut seen_titles: FxHashSet<String> = FxHashSet::default();

    for pattern in TITLE_PATTERNS {
        let re = Regex::new(pattern).expect("static regex");
        for cap in re.captures_iter(html) {
            let title = strip_tags(&cap[1]);
            if title.chars().count() < 5 || !opts.title_matches(&title) {
                continue;
            }
            if !seen_titles.insert(title.to_lowercase()) {
                continue;
            }

            let Some(image) = image_near_title(html, &title, base_url) else {
                continue;
            };
            let price = price_near_title(html, &title).unwrap_or(opts.fallback_price);

            products.push(ScrapedProduct {
                name: title,
                price,
                sale_price: price,
                image,
                source: base_url.to_string(),
            });
        }
    }

    products
}

/// Collect product-page links from listing markup.
pub fn product_links(html: &str, base_url: &str) -> Vec<String> {
    let re = Regex::new(r#"(?i)href=["']([^"']+)["']"#).expect("static regex");
    let mut links: FxHashSet<String> = FxHashSet::default();
    for cap in re.captures_iter(html) {
        let href = cap[1].trim();
        if !href.contains("/product") {
            continue;
        }
        links.insert(resolve_url(base_url, href));
    }
    let mut out: Vec<String> = links.into_iter().collect();
    out.sort();
    out
}

/// First `<h1>` or `<title>` text on a product page, capped at 140 chars.
pub fn page_title(html: &str) -> Option<String> {
    for pattern in [r"(?is)<h1[^>]*>(.*?)</h1>", r"(?is)<title[^>]*>(.*?)</title>"] {
        let re = Regex::new(pattern).expect("static regex");
        if let Some(cap) = re.captures(html) {
            let text = strip_tags(&cap[1]);
            if !text.is_empty() {
                return Some(text.chars().take(140).collect());
            }
        }
    }
    None
}

/// First plausible image `src` on a product page (logos and icons skipped).
pub fn primary_image(html: &str, base_url: &str) -> Option<String> {
    let re = Regex::new(r#"(?i)\bsrc=["']([^"']+)["']"#).expect("static regex");
    for cap in re.captures_iter(html) {
        let src = cap[1].trim();
        if src.is_empty() {
            continue;
        }
        let lower = src.to_lowercase();
        if lower.contains("logo") || lower.contains("icon") {
            continue;
        }
        return Some(resolve_url(base_url, src));
    }
    None
}

/// Lift one product from a product page: heading, first plausible image,
/// first price on the page.
pub fn product_from_page(page: &str, url: &str, opts: &FetchOptions) -> Option<ScrapedProduct> {
    let title = page_title(page)?;
    if !opts.title_matches(&title) {
        return None;
    }
    let image = primary_image(page, url)?;
    let price = page_price(page).unwrap_or(opts.fallback_price);
    Some(ScrapedProduct {
        name: title,
        price,
        sale_price: price,
        image,
        source: url.to_string(),
    })
}

/// First `PKR`/`Rs` price anywhere on a page.
pub fn page_price(html: &str) -> Option<i64> {
    let re = Regex::new(r"(?i)(?:PKR|Rs\.?)\s*([0-9,]+)").expect("static regex");
    for cap in re.captures_iter(html) {
        if let Ok(price) = cap[1].replace(',', "").parse() {
            return Some(price);
        }
    }
    None
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

    const LISTING: &str = r#"
        <div class="grid">
          <div class="card">
            <h3 class="product-title"><span>Raw Sidr Honey 500g</span></h3>
            <img src="https://cdn.shop.example/products/sidr.jpg">
            <span class="price">Rs. 1,850</span>
          </div>
          <div class="card">
            <h3 class="product-title">Wild Honey Combo</h3>
            <img data-src="/media/wild.webp">
            <span class="price">PKR 2400</span>
          </div>
          <div class="card">
            <h3 class="product-title">Walnut Oil 250ml</h3>
            <img src="/media/oil.png">
            <span class="price">Rs 990</span>
          </div>
        </div>
    "#;

    #[test]
    fn strip_tags_flattens_markup() {
        assert_eq!(strip_tags("<b>Raw</b>  <i>Honey</i>"), "Raw Honey");
        assert_eq!(strip_tags("no tags"), "no tags");
    }

    #[test]
    fn extracts_products_from_cards() {
        let products = extract_products(LISTING, "https://shop.example/", &opts(None));
        assert_eq!(products.len(), 3);
        assert_eq!(products[0].name, "Raw Sidr Honey 500g");
        assert_eq!(products[0].price, 1850);
        assert_eq!(products[0].image, "https://cdn.shop.example/products/sidr.jpg");
    }

    #[test]
    fn keyword_filters_titles() {
        let products = extract_products(LISTING, "https://shop.example/", &opts(Some("honey")));
        assert_eq!(products.len(), 2);
        assert!(products.iter().all(|p| p.name.to_lowercase().contains("honey")));
    }

    #[test]
    fn relative_image_urls_resolve_against_base() {
        let products = extract_products(LISTING, "https://shop.example/", &opts(Some("wild")));
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].image, "https://shop.example/media/wild.webp");
        assert_eq!(products[0].price, 2400);
    }

    #[test]
    fn duplicate_titles_are_deduped() {
        let html = r#"
            <h2 class="product">Raw Honey</h2><img src="/a.jpg">
            <h2 class="product">RAW HONEY</h2><img src="/b.jpg">
        "#;
        let products = extract_products(html, "https://shop.example/", &opts(None));
        assert_eq!(products.len(), 1);
    }

    #[test]
    fn short_titles_are_skipped() {
        let html = r#"<h2 class="product">Hi</h2><img src="/a.jpg">"#;
        assert!(extract_products(html, "https://shop.example/", &opts(None)).is_empty());
    }

    #[test]
    fn missing_image_drops_the_product() {
        let html = r#"<h2 class="product">Honey Without Picture</h2>"#;
        assert!(extract_products(html, "https://shop.example/", &opts(None)).is_empty());
    }

    #[test]
    fn image_validity_filter() {
        assert!(is_valid_image_url("https://cdn.x.com/p/a.jpg"));
        assert!(is_valid_image_url("https://images.x.com/p/a"));
        assert!(!is_valid_image_url("https://x.com/theme/logo.png"));
        assert!(!is_valid_image_url("https://x.com/favicon.ico"));
        assert!(!is_valid_image_url("https://www.googletagmanager.com/x.png"));
        assert!(!is_valid_image_url("main.css"));
        assert!(!is_valid_image_url(""));
    }

    #[test]
    fn product_links_are_absolute_and_unique() {
        let html = r#"
            <a href="/products/honey-1">a</a>
            <a href="/products/honey-1">again</a>
            <a href="/about">skip</a>
            <a href="https://other.example/product/x">b</a>
        "#;
        let links = product_links(html, "https://shop.example/");
        assert_eq!(
            links,
            vec![
                "https://other.example/product/x".to_string(),
                "https://shop.example/products/honey-1".to_string(),
            ]
        );
    }

    #[test]
    fn page_title_prefers_h1() {
        let html = "<title>Store</title><h1 class=\"t\">Apricot <b>Kernel</b> Oil</h1>";
        assert_eq!(page_title(html).as_deref(), Some("Apricot Kernel Oil"));
        assert_eq!(page_title("<title>Only Title</title>").as_deref(), Some("Only Title"));
        assert_eq!(page_title("<p>nothing</p>"), None);
    }

    #[test]
    fn primary_image_skips_branding() {
        let html = r#"
            <img src="/theme/logo.png">
            <img src="/favicon-icon.png">
            <img src="/media/walnuts.jpg">
        "#;
        assert_eq!(
            primary_image(html, "https://shop.example/").as_deref(),
            Some("https://shop.example/media/walnuts.jpg")
        );
    }

    #[test]
    fn product_from_page_combines_helpers() {
        let page = r#"
            <title>Shop</title>
            <h1>Dried Apricots 1kg</h1>
            <img src="/theme/logo.png">
            <img src="/media/apricots.jpg">
            <span>Rs. 1,150</span>
        "#;
        let product = product_from_page(page, "https://shop.example/products/apricots", &opts(None)).unwrap();
        assert_eq!(product.name, "Dried Apricots 1kg");
        assert_eq!(product.image, "https://shop.example/media/apricots.jpg");
        assert_eq!(product.price, 1150);
        assert_eq!(product.source, "https://shop.example/products/apricots");

        // Keyword filter applies on page titles too.
        assert!(product_from_page(page, "https://shop.example/p", &opts(Some("honey"))).is_none());
    }

    #[test]
    fn page_price_parses_first_match() {
        assert_eq!(page_price("from Rs. 2,500 was PKR 3,000"), Some(2500));
        assert_eq!(page_price("no price here"), None);
    }
}
