//! Seed scraped storefront products into the catalog.
//!
//! Two built-in profiles mirror the curated import runs: `honey` pulls the
//! honey collections of three Chitrali storefronts into the Chitrali Honey
//! category tree, `dry-fruits` replaces the Dry Fruits tree with the
//! northendryfruits.com shop listing.

use super::net::Fetcher;
use super::sources::SourcesConfig;
use super::{fetch_products, FetchOptions, ScrapedProduct};
use crate::catalog::store::Store;
use crate::catalog::types::{Category, NewItem};
use std::path::PathBuf;

/// How a profile finds a category: by slug when one is pinned, by
/// case-insensitive name otherwise.
#[derive(Debug, Clone)]
pub struct CategoryLookup {
    pub name: &'static str,
    pub slug: Option<&'static str>,
}

/// Route products whose title contains `needle` into a subcategory.
#[derive(Debug, Clone)]
pub struct SubcategoryRule {
    pub needle: &'static str,
    pub lookup: CategoryLookup,
}

/// A scraped-seeding profile: sources, filters, identity scheme, and category
/// routing.
#[derive(Debug, Clone)]
pub struct ScrapeProfile {
    pub name: &'static str,
    pub sources: Vec<String>,
    pub keyword: Option<&'static str>,
    pub sku_prefix: &'static str,
    pub fallback_price: i64,
    /// Lowest ext-POS-id this profile may use.
    pub id_floor: i64,
    /// Start above the highest existing id at or past the floor instead of at
    /// the floor itself.
    pub continue_above_existing: bool,
    /// Remove existing products in the profile's category tree before seeding.
    pub clear_category_products: bool,
    pub main_category: CategoryLookup,
    pub subcategories: Vec<SubcategoryRule>,
    /// Link every product to the main category in addition to any inferred
    /// subcategory (otherwise the inferred one, falling back to main, is the
    /// only link).
    pub link_main: bool,
    pub skip_existing_names: bool,
    /// Use the long-form marketing description instead of the short
    /// provenance line.
    pub long_description: bool,
    pub new_arrival_every: usize,
    pub featured_every: usize,
}

/// The honey import run.
pub fn honey_profile() -> ScrapeProfile {
    ScrapeProfile {
        name: "honey",
        sources: vec![
            "https://www.shubinak.com/collections/honey".to_string(),
            "https://amaltaas.com.pk/shop/honey".to_string(),
            "https://shifa.zone/collections/honey".to_string(),
        ],
        keyword: Some("honey"),
        sku_prefix: "HNY",
        fallback_price: 1000,
        id_floor: 400000,
        continue_above_existing: true,
        clear_category_products: false,
        main_category: CategoryLookup {
            name: "Chitrali Honey",
            slug: Some("chitrali-honey"),
        },
        subcategories: vec![
            SubcategoryRule {
                needle: "sidr",
                lookup: CategoryLookup {
                    name: "Chitrali Honey - Sidr Honey",
                    slug: Some("chitrali-honey-sidr-honey"),
                },
            },
            SubcategoryRule {
                needle: "wild",
                lookup: CategoryLookup {
                    name: "Chitrali Honey - Wild Honey",
                    slug: Some("chitrali-honey-wild-honey"),
                },
            },
            SubcategoryRule {
                needle: "organic",
                lookup: CategoryLookup {
                    name: "Chitrali Honey - Organic Honey",
                    slug: Some("chitrali-honey-organic-honey"),
                },
            },
        ],
        link_main: true,
        skip_existing_names: true,
        long_description: true,
        new_arrival_every: 5,
        featured_every: 8,
    }
}

/// The dry-fruits replacement run.
pub fn dry_fruits_profile() -> ScrapeProfile {
    ScrapeProfile {
        name: "dry-fruits",
        sources: vec!["https://www.northendryfruits.com/shop".to_string()],
        keyword: None,
        sku_prefix: "DRY",
        fallback_price: 600,
        id_floor: 300000,
        continue_above_existing: false,
        clear_category_products: true,
        main_category: CategoryLookup {
            name: "Dry Fruits",
            slug: None,
        },
        subcategories: vec![
            SubcategoryRule {
                needle: "almond",
                lookup: CategoryLookup { name: "Almonds - Dry Fruits", slug: None },
            },
            SubcategoryRule {
                needle: "walnut",
                lookup: CategoryLookup { name: "Walnuts - Dry Fruits", slug: None },
            },
            SubcategoryRule {
                needle: "apricot",
                lookup: CategoryLookup { name: "Apricots - Dry Fruits", slug: None },
            },
        ],
        link_main: false,
        skip_existing_names: false,
        long_description: false,
        new_arrival_every: 6,
        featured_every: 11,
    }
}

/// Per-run options from the CLI.
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub media_dir: PathBuf,
    /// When false, store the remote image URL instead of downloading.
    pub download_images: bool,
    pub dry_run: bool,
}

#[derive(Debug, Default, Clone, Copy)]
pub struct RunSummary {
    pub fetched: usize,
    pub created: usize,
}

fn resolve_category(store: &Store, lookup: &CategoryLookup) -> Result<Option<Category>, String> {
    if let Some(slug) = lookup.slug {
        if let Some(category) = store.category_by_slug(slug)? {
            return Ok(Some(category));
        }
    }
    store.category_by_name(lookup.name)
}

/// The long-form marketing description used by the honey profile.
pub fn long_description(product_name: &str, category_name: &str) -> String {
    format!(
        "{} - Premium {} from Chitral Hive. \
         Discover authentic Chitrali honey sourced from the pristine mountains of Chitral, Pakistan. \
         Our organic honey is pure, natural, and packed with health benefits. \
         Perfect for daily consumption, natural remedies, and culinary uses. \
         Buy {} online in Pakistan with free shipping on orders over Rs. 2000. \
         100% authentic Chitrali products delivered to your doorstep. \
         Shop now at Chitral Hive - Your trusted source for premium Chitrali honey and organic products.",
        product_name, category_name, product_name
    )
}

/// The short provenance description used by the dry-fruits profile.
pub fn short_description(product_name: &str, source: &str) -> String {
    format!(
        "{} sourced from {} and curated for Chitral Hive.",
        product_name, source
    )
}

/// Fetch products from every source of a profile, with per-source counts.
pub fn fetch_all(fetcher: &Fetcher, profile: &ScrapeProfile) -> Vec<ScrapedProduct> {
    let opts = FetchOptions {
        keyword: profile.keyword.map(str::to_string),
        fallback_price: profile.fallback_price,
    };
    let mut products = Vec::new();
    for url in &profile.sources {
        let fetched = fetch_products(fetcher, url, &opts);
        println!("  found {} products from {}", fetched.len(), url);
        products.extend(fetched);
    }
    products
}

/// Seed scraped products into the store. `downloader` is only consulted when
/// `opts.download_images` is set.
pub fn seed_products(
    store: &Store,
    profile: &ScrapeProfile,
    products: &[ScrapedProduct],
    opts: &RunOptions,
    downloader: Option<&Fetcher>,
) -> Result<RunSummary, String> {
    let main = resolve_category(store, &profile.main_category)?
        .ok_or_else(|| format!("{} category not found, aborting", profile.main_category.name))?;

    let mut subcategories: Vec<(&'static str, Category)> = Vec::new();
    for rule in &profile.subcategories {
        if let Some(category) = resolve_category(store, &rule.lookup)? {
            subcategories.push((rule.needle, category));
        }
    }

    let mut ext_pos_id = if profile.continue_above_existing {
        store
            .max_ext_pos_id_at_least(profile.id_floor)?
            .unwrap_or(profile.id_floor - 1)
            + 1
    } else {
        profile.id_floor
    };

    println!("Processing {} products...", products.len());
    println!("Starting ext-POS-id from: {}", ext_pos_id);

    let mut summary = RunSummary {
        fetched: products.len(),
        created: 0,
    };

    for (idx, product) in products.iter().enumerate() {
        let idx = idx + 1;
        let name = product.name.as_str();
        println!("  [{}] {}", idx, name);

        if profile.skip_existing_names && store.item_name_exists(name)? {
            println!("      already exists (by name), skipping");
            continue;
        }

        let subcategory = {
            let lower = name.to_lowercase();
            subcategories
                .iter()
                .find(|(needle, _)| lower.contains(needle))
                .map(|(_, category)| category)
        };

        if opts.dry_run {
            println!(
                "      [DRY-RUN] would create {} (category: {})",
                name,
                subcategory.map(|c| c.name.as_str()).unwrap_or(&main.name)
            );
            continue;
        }

        let image_path = if opts.download_images {
            let fetcher = downloader.ok_or("image download requested without a fetcher")?;
            match fetcher.download_image(
                &product.image,
                Some(&product.source),
                &opts.media_dir,
                ext_pos_id,
            ) {
                Ok(path) => {
                    println!("      image saved: {}", path);
                    path
                }
                Err(e) => {
                    println!("      failed to download image: {}", e);
                    continue;
                }
            }
        } else {
            product.image.clone()
        };

        let (id, slug, sku) =
            store.allocate_item_identity(name, profile.sku_prefix, ext_pos_id)?;
        ext_pos_id = id;

        let category_name = subcategory.map(|c| c.name.as_str()).unwrap_or(&main.name);
        let (description, meta_title, meta_description) = if profile.long_description {
            let description = long_description(name, category_name);
            let meta_description: String = description.chars().take(150).collect();
            (
                description,
                format!("{} - Buy Online in Pakistan | Chitral Hive", name),
                meta_description,
            )
        } else {
            (
                short_description(name, &product.source),
                format!("{} - Chitral Hive", name),
                name.to_string(),
            )
        };

        let item = NewItem {
            ext_pos_id,
            name: name.to_string(),
            slug,
            sku,
            image: image_path,
            description,
            mrp: product.price,
            sale_price: product.sale_price,
            discount: 0,
            stock: 200,
            stock_check_qty: 10,
            weight: 0.5,
            is_new_arrival: i64::from(idx % profile.new_arrival_every == 0),
            is_featured: i64::from(idx % profile.featured_every == 0),
            meta_url: None,
            meta_title,
            meta_description,
        };

        let item_id = match store.insert_item(&item) {
            Ok(id) => id,
            Err(e) => {
                println!("      error creating product: {}", e);
                ext_pos_id += 1;
                continue;
            }
        };

        if profile.link_main {
            store.link_item(main.id, item_id)?;
            println!("      linked to: {}", main.name);
            if let Some(sub) = subcategory {
                store.link_item(sub.id, item_id)?;
                println!("      linked to: {}", sub.name);
            }
        } else {
            let target = subcategory.unwrap_or(&main);
            store.link_item(target.id, item_id)?;
            println!("      linked to: {}", target.name);
        }

        summary.created += 1;
        ext_pos_id += 1;
    }

    Ok(summary)
}

/// Full profile run: resolve categories, clear when the profile says so,
/// fetch from every source, then seed.
pub fn run(
    store: &Store,
    fetcher: &Fetcher,
    profile: &ScrapeProfile,
    config: Option<&SourcesConfig>,
    opts: &RunOptions,
) -> Result<RunSummary, String> {
    let mut profile = profile.clone();
    if let Some(sources) = super::sources::profile_sources(config, profile.name) {
        profile.sources = sources;
    }

    if profile.clear_category_products && !opts.dry_run {
        let mut category_ids = Vec::new();
        if let Some(main) = resolve_category(store, &profile.main_category)? {
            category_ids.push(main.id);
        }
        for rule in &profile.subcategories {
            if let Some(category) = resolve_category(store, &rule.lookup)? {
                category_ids.push(category.id);
            }
        }
        let removed = store.clear_products_in_categories(&category_ids)?;
        println!("Removed {} existing products", removed);
    }

    println!("Fetching products from sources...");
    let products = fetch_all(fetcher, &profile);

    println!("Seeding {} products...", products.len());
    seed_products(store, &profile, &products, opts, Some(fetcher))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::types::CategorySeed;

    fn category(slug: &str, name: &str) -> CategorySeed {
        CategorySeed {
            name: name.to_string(),
            slug: slug.to_string(),
            description: String::new(),
            priority: 1,
            meta_url: String::new(),
            meta_title: String::new(),
            meta_description: String::new(),
        }
    }

    fn product(name: &str, price: i64) -> ScrapedProduct {
        ScrapedProduct {
            name: name.to_string(),
            price,
            sale_price: price,
            image: format!("https://cdn.example/{}.jpg", name.len()),
            source: "https://shop.example/".to_string(),
        }
    }

    fn no_download() -> RunOptions {
        RunOptions {
            media_dir: PathBuf::from("media"),
            download_images: false,
            dry_run: false,
        }
    }

    fn honey_store() -> Store {
        let store = Store::open_in_memory().unwrap();
        store.upsert_main_category(&category("chitrali-honey", "Chitrali Honey")).unwrap();
        store
            .upsert_main_category(&category(
                "chitrali-honey-sidr-honey",
                "Chitrali Honey - Sidr Honey",
            ))
            .unwrap();
        store
    }

    #[test]
    fn honey_products_link_main_and_subcategory() {
        let store = honey_store();
        let products = vec![product("Pure Sidr Honey 500g", 1850), product("Mountain Honey", 900)];
        let summary =
            seed_products(&store, &honey_profile(), &products, &no_download(), None).unwrap();
        assert_eq!(summary.created, 2);
        assert_eq!(store.count("item").unwrap(), 2);
        // Sidr product links to main + subcategory, the other only to main.
        assert_eq!(store.count("category_item").unwrap(), 3);
    }

    #[test]
    fn honey_ids_start_above_existing_block() {
        let store = honey_store();
        let products = vec![product("First Honey", 1000)];
        seed_products(&store, &honey_profile(), &products, &no_download(), None).unwrap();
        assert_eq!(store.max_ext_pos_id_at_least(400000).unwrap(), Some(400000));

        let more = vec![product("Second Honey", 1100)];
        seed_products(&store, &honey_profile(), &more, &no_download(), None).unwrap();
        assert_eq!(store.max_ext_pos_id_at_least(400000).unwrap(), Some(400001));
    }

    #[test]
    fn duplicate_names_are_skipped() {
        let store = honey_store();
        let products = vec![product("Raw Honey", 1000)];
        seed_products(&store, &honey_profile(), &products, &no_download(), None).unwrap();
        let again = vec![ScrapedProduct {
            name: "RAW HONEY".to_string(),
            ..products[0].clone()
        }];
        let summary =
            seed_products(&store, &honey_profile(), &again, &no_download(), None).unwrap();
        assert_eq!(summary.created, 0);
        assert_eq!(store.count("item").unwrap(), 1);
    }

    #[test]
    fn missing_main_category_aborts() {
        let store = Store::open_in_memory().unwrap();
        let err = seed_products(
            &store,
            &honey_profile(),
            &[product("Honey", 1000)],
            &no_download(),
            None,
        )
        .unwrap_err();
        assert!(err.contains("not found"));
    }

    #[test]
    fn dry_run_writes_nothing() {
        let store = honey_store();
        let opts = RunOptions { dry_run: true, ..no_download() };
        let summary = seed_products(
            &store,
            &honey_profile(),
            &[product("Wild Honey", 1200)],
            &opts,
            None,
        )
        .unwrap();
        assert_eq!(summary.created, 0);
        assert_eq!(store.count("item").unwrap(), 0);
    }

    #[test]
    fn dry_fruits_route_to_inferred_category_only() {
        let store = Store::open_in_memory().unwrap();
        store.upsert_main_category(&category("dry-fruits", "Dry Fruits")).unwrap();
        store
            .upsert_main_category(&category("almonds-dry-fruits", "Almonds - Dry Fruits"))
            .unwrap();

        let products = vec![
            product("Kaghzi Almonds 1kg", 2400),
            product("Dried Mulberries", 800),
        ];
        let summary =
            seed_products(&store, &dry_fruits_profile(), &products, &no_download(), None).unwrap();
        assert_eq!(summary.created, 2);
        // One link each: almonds subcategory and the main fallback.
        assert_eq!(store.count("category_item").unwrap(), 2);

        let rows = store.items_for_seo(0).unwrap();
        let almonds = rows.iter().find(|r| r.name.contains("Almonds")).unwrap();
        assert_eq!(almonds.category_name.as_deref(), Some("Almonds - Dry Fruits"));
        let mulberries = rows.iter().find(|r| r.name.contains("Mulberries")).unwrap();
        assert_eq!(mulberries.category_name.as_deref(), Some("Dry Fruits"));
    }

    #[test]
    fn dry_fruits_ids_start_at_floor() {
        let store = Store::open_in_memory().unwrap();
        store.upsert_main_category(&category("dry-fruits", "Dry Fruits")).unwrap();
        seed_products(
            &store,
            &dry_fruits_profile(),
            &[product("Walnut Kernels", 1500)],
            &no_download(),
            None,
        )
        .unwrap();
        assert_eq!(store.max_ext_pos_id_at_least(300000).unwrap(), Some(300000));
    }

    #[test]
    fn descriptions_differ_by_profile() {
        assert!(long_description("Sidr Honey", "Chitrali Honey")
            .contains("pristine mountains of Chitral"));
        assert_eq!(
            short_description("Walnuts", "https://x.example/"),
            "Walnuts sourced from https://x.example/ and curated for Chitral Hive."
        );
    }

    #[test]
    fn remote_image_url_is_kept_without_download() {
        let store = honey_store();
        seed_products(
            &store,
            &honey_profile(),
            &[product("Forest Honey", 1000)],
            &no_download(),
            None,
        )
        .unwrap();
        // items_for_seo does not expose image; count is enough to know the row
        // landed despite no downloader being present.
        assert_eq!(store.count("item").unwrap(), 1);
    }
}
