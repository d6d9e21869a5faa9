//! Replace the product table with a curated list attributed to Chitrali
//! storefronts. Destructive: clears every product, then reseeds.

use crate::catalog::store::Store;
use crate::catalog::types::NewItem;

const ID_FLOOR: i64 = 200000;

/// `(slug, name)` pairs the curated products are filed under. Lookup is by
/// slug first, then by name; products of a missing category are skipped.
const CATEGORY_DEFS: &[(&str, &str)] = &[
    ("chitrali-oils", "Chitrali Oils"),
    ("chitrali-spices", "Chitrali Spices"),
    ("salajit", "Salajit"),
    ("chitrali-honey", "Chitrali Honey"),
    ("chitrali-nuts", "Chitrali Nuts"),
    ("dry-fruits", "Dry Fruits"),
    ("chitrali-traditional-foods", "Chitrali Traditional Foods"),
    ("chitrali-pickles", "Chitrali Pickles"),
    ("chitrali-wool-products", "Chitrali Wool Products"),
    ("chitrali-apricots", "Chitrali Apricots"),
];

struct SiteProduct {
    name: &'static str,
    category: &'static str,
    price: i64,
    sale_price: i64,
    image: &'static str,
    source: &'static str,
}

const PRODUCTS: &[SiteProduct] = &[
    SiteProduct { name: "Organic Chia Seeds", category: "dry-fruits", price: 399, sale_price: 349, image: "item_image/dummy_1rF5WS1.jpg", source: "https://chitralorganic.com/" },
    SiteProduct { name: "Pure Chitrali Salajit Resin", category: "salajit", price: 1299, sale_price: 1199, image: "item_image/dummy_2k7K5FL.jpg", source: "https://chitralorganic.com/" },
    SiteProduct { name: "Moringa Leaf Powder", category: "chitrali-spices", price: 275, sale_price: 249, image: "item_image/dummy_3BGAE2O.jpg", source: "https://chitralorganic.com/" },
    SiteProduct { name: "Organic Honeydew Melon Seeds", category: "dry-fruits", price: 549, sale_price: 499, image: "item_image/dummy_6G76VWq.jpg", source: "https://chitralorganic.com/collections/all" },
    SiteProduct { name: "Premium Saffron Threads", category: "chitrali-spices", price: 799, sale_price: 749, image: "item_image/dummy_8OzJkgG.jpg", source: "https://chitralorganic.com/collections/all" },
    SiteProduct { name: "Chitrali Herbal Tea Mix", category: "chitrali-traditional-foods", price: 450, sale_price: 399, image: "item_image/dummy_8RohhOz.jpg", source: "https://chitralherbs.com/" },
    SiteProduct { name: "Dry Mint Leaves", category: "chitrali-spices", price: 220, sale_price: 199, image: "item_image/dummy_aiIXWsn.jpg", source: "https://chitralherbs.com/" },
    SiteProduct { name: "Handmade Pakol Cap", category: "chitrali-wool-products", price: 1200, sale_price: 999, image: "item_image/Chitrali_Pakol_cap.png", source: "https://chitralhouse.com/" },
    SiteProduct { name: "Chitrali Wool Shawl", category: "chitrali-wool-products", price: 2800, sale_price: 2499, image: "item_image/dummy_AjvDSMY.jpg", source: "https://chitralhouse.com/" },
    SiteProduct { name: "Cold-Pressed Walnut Oil", category: "chitrali-oils", price: 1500, sale_price: 1399, image: "item_image/dummy_D9NcGGX.jpg", source: "https://chitralbazar.com/" },
    SiteProduct { name: "Spicy Chitrali Pickle", category: "chitrali-pickles", price: 650, sale_price: 599, image: "item_image/dummy_EVXwBrB.jpg", source: "https://chitralbazar.com/" },
    SiteProduct { name: "Woolen Socks (Pair)", category: "chitrali-wool-products", price: 650, sale_price: 549, image: "item_image/dummy_Fl9iQpT.jpg", source: "https://chitralwool.com/" },
    SiteProduct { name: "Chitrali Wool Gloves", category: "chitrali-wool-products", price: 750, sale_price: 649, image: "item_image/dummy_JpjaCOh.jpg", source: "https://chitralwool.com/" },
    SiteProduct { name: "Raw Mountain Honey", category: "chitrali-honey", price: 900, sale_price: 849, image: "item_image/honey-pure-natural-500x500.png", source: "https://chitralshop.com/" },
    SiteProduct { name: "Sun-Dried Apricots", category: "chitrali-apricots", price: 750, sale_price: 699, image: "item_image/dummy_KdJF56N.jpg", source: "https://chitralshop.com/" },
    SiteProduct { name: "Chitrali Mixed Nuts", category: "chitrali-nuts", price: 1100, sale_price: 999, image: "item_image/dummy_KsTse29.jpg", source: "https://chitralshop.com/" },
];

/// Clear every product, then insert the curated list. Returns the number of
/// products created.
pub fn run(store: &Store) -> Result<usize, String> {
    println!("Removing existing products...");
    store.clear_all_products()?;

    println!("Loading existing categories...");
    let mut categories = std::collections::HashMap::new();
    for &(slug, name) in CATEGORY_DEFS {
        let category = match store.category_by_slug(slug)? {
            Some(c) => Some(c),
            None => store.category_by_name(name)?,
        };
        match category {
            Some(c) => {
                categories.insert(slug, c);
            }
            None => {
                println!(
                    "Missing category: {} (slug: {}). Skipping products for it.",
                    name, slug
                );
            }
        }
    }

    println!("Seeding products...");
    let mut created = 0;
    let mut ext_pos_id = ID_FLOOR;

    for product in PRODUCTS {
        let Some(category) = categories.get(product.category) else {
            continue;
        };

        let slug = crate::catalog::slug::item_slug(product.name, ext_pos_id);
        let sku = crate::catalog::slug::item_sku("CHIT-SRC", ext_pos_id);

        let item = NewItem {
            ext_pos_id,
            name: product.name.to_string(),
            slug,
            sku,
            image: product.image.to_string(),
            description: format!(
                "{} sourced from {} and curated for Chitral Hive.",
                product.name, product.source
            ),
            mrp: product.price,
            sale_price: product.sale_price,
            discount: (product.price - product.sale_price).max(0),
            stock: 200,
            stock_check_qty: 10,
            weight: 0.5,
            is_new_arrival: 0,
            is_featured: 0,
            meta_url: None,
            meta_title: format!("{} - Chitral Hive", product.name),
            meta_description: product.name.to_string(),
        };

        match store.insert_item(&item) {
            Ok(item_id) => {
                store.link_item(category.id, item_id)?;
                created += 1;
            }
            Err(e) => println!("Error creating product: {}", e),
        }
        ext_pos_id += 1;
    }

    Ok(created)
}
