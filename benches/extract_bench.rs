//! Benchmarks for the scrape extraction heuristics.
//!
//! Run with: cargo bench
//!
//! Results include 95% confidence intervals via Criterion.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use hivectl::scrape::{html, jsonld, FetchOptions};

fn listing_fixture(cards: usize) -> String {
    let mut page = String::from("<html><body><div class=\"grid\">");
    for i in 0..cards {
        page.push_str(&format!(
            "<div class=\"card\">\
             <h3 class=\"product-title\">Chitrali Honey Jar {}</h3>\
             <img src=\"https://cdn.example/p/{}.jpg\">\
             <span>Rs. {},500</span></div>",
            i,
            i,
            1 + i % 9
        ));
    }
    page.push_str("</div></body></html>");
    page
}

fn jsonld_fixture(items: usize) -> String {
    let elements: Vec<String> = (0..items)
        .map(|i| {
            format!(
                "{{\"item\": {{\"name\": \"Honey {}\", \"image\": \"/img/{}.jpg\"}}}}",
                i, i
            )
        })
        .collect();
    format!(
        "<script type=\"application/ld+json\">{{\"@type\": \"ItemList\", \
         \"itemListElement\": [{}]}}</script>",
        elements.join(",")
    )
}

fn bench_html_extract(c: &mut Criterion) {
    let opts = FetchOptions {
        keyword: Some("honey".to_string()),
        fallback_price: 1000,
    };
    let mut group = c.benchmark_group("html_extract");
    for cards in [10, 50, 200] {
        let page = listing_fixture(cards);
        group.bench_with_input(BenchmarkId::from_parameter(cards), &page, |b, page| {
            b.iter(|| {
                let products =
                    html::extract_products(black_box(page), "https://shop.example/", &opts);
                black_box(products);
            });
        });
    }
    group.finish();
}

fn bench_jsonld_extract(c: &mut Criterion) {
    let opts = FetchOptions {
        keyword: None,
        fallback_price: 600,
    };
    let mut group = c.benchmark_group("jsonld_extract");
    for items in [10, 100] {
        let page = jsonld_fixture(items);
        group.bench_with_input(BenchmarkId::from_parameter(items), &page, |b, page| {
            b.iter(|| {
                let products =
                    jsonld::extract_products(black_box(page), "https://shop.example/", &opts);
                black_box(products);
            });
        });
    }
    group.finish();
}

fn bench_strip_tags(c: &mut Criterion) {
    let fragment = "<a href=\"/products/x\"><b>Raw</b> <i>Mountain</i> Honey <span>500g</span></a>"
        .repeat(20);
    c.bench_function("strip_tags", |b| {
        b.iter(|| black_box(html::strip_tags(black_box(&fragment))));
    });
}

criterion_group!(
    benches,
    bench_html_extract,
    bench_jsonld_extract,
    bench_strip_tags
);
criterion_main!(benches);
