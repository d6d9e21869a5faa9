//! Synthetic catalog seeding: 17 ChitralHive categories, template-generated
//! products, and 5 curated bundles, all with SEO fields filled in.
//!
//! Generation is deterministic: the same `--seed` always produces the same
//! catalog, which keeps repeat runs and fixtures reproducible.

use crate::catalog::seo::{self, Kind};
use crate::catalog::slug::{category_sku_prefix, item_sku, slugify};
use crate::catalog::store::Store;
use crate::catalog::types::{CategorySeed, NewBundle, NewItem};
use indexmap::IndexMap;

/// SplitMix64. Small, seedable, and good enough for catalog fixtures.
pub struct Rng(u64);

impl Rng {
    pub fn new(seed: u64) -> Self {
        Rng(seed)
    }

    fn next_u64(&mut self) -> u64 {
        self.0 = self.0.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.0;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }

    /// Uniform value in `lo..=hi`.
    pub fn range(&mut self, lo: i64, hi: i64) -> i64 {
        debug_assert!(lo <= hi);
        let span = (hi - lo + 1) as u64;
        lo + (self.next_u64() % span) as i64
    }

    /// Uniform pick from a non-empty slice.
    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        &items[(self.next_u64() % items.len() as u64) as usize]
    }
}

struct CategoryDef {
    name: &'static str,
    slug: &'static str,
    description: &'static str,
    meta_title: &'static str,
    meta_description: &'static str,
    products_count: usize,
}

struct ProductTemplate {
    names: &'static [&'static str],
    weights: &'static [&'static str],
    price_range: (i64, i64),
}

const DEFAULT_TEMPLATE: ProductTemplate = ProductTemplate {
    names: &["Chitrali Product"],
    weights: &["100g", "250g", "500g", "1kg"],
    price_range: (500, 5000),
};

const CATEGORY_DEFS: &[CategoryDef] = &[
    CategoryDef {
        name: "Dry Fruits",
        slug: "chitrali-dry-fruits",
        description: "Premium Chitrali dry fruits including almonds, walnuts, apricots, raisins, dates, and more. Naturally dried, rich in nutrients, perfect for healthy snacking.",
        meta_title: "Chitrali Dry Fruits - Premium Dried Fruits Online | ChitralHive",
        meta_description: "Buy premium Chitrali dry fruits online. Natural almonds, walnuts, apricots, dates, and more. Rich in vitamins and minerals. Free shipping available.",
        products_count: 600,
    },
    CategoryDef {
        name: "Salajit",
        slug: "chitrali-salajit",
        description: "Pure Chitrali Salajit (Shilajit) - Natural mineral pitch with traditional health benefits. Rich in fulvic acid and 84+ minerals from pristine Chitral mountains.",
        meta_title: "Pure Chitrali Salajit (Shilajit) - Natural Mineral Pitch | ChitralHive",
        meta_description: "Buy authentic Chitrali Salajit online. Pure Shilajit resin, powder, and capsules. Rich in minerals and fulvic acid. Traditional health benefits.",
        products_count: 200,
    },
    CategoryDef {
        name: "Chitrali Herbs",
        slug: "chitrali-herbs",
        description: "Traditional Chitrali herbs and medicinal plants. Organic, hand-picked herbs preserved naturally for culinary and traditional medicinal use.",
        meta_title: "Chitrali Herbs - Traditional Medicinal Herbs Online | ChitralHive",
        meta_description: "Shop traditional Chitrali herbs online. Organic mint, thyme, basil, sage, and more. Hand-picked and naturally preserved. Perfect for cooking and remedies.",
        products_count: 300,
    },
    CategoryDef {
        name: "Chitrali Honey",
        slug: "chitrali-honey",
        description: "Pure organic Chitrali honey from mountain wildflowers. Raw, unfiltered, and unpasteurized honey preserving all natural enzymes and nutrients.",
        meta_title: "Pure Chitrali Honey - Organic Mountain Honey Online | ChitralHive",
        meta_description: "Buy pure Chitrali honey online. Organic, raw, unfiltered mountain honey. Rich in natural enzymes. Available in various sizes. Free shipping.",
        products_count: 150,
    },
    CategoryDef {
        name: "Chitrali Nuts",
        slug: "chitrali-nuts",
        description: "Fresh Chitrali nuts including walnuts, almonds, pine nuts, hazelnuts, and more. Naturally grown, rich in healthy fats, protein, and essential nutrients.",
        meta_title: "Chitrali Nuts - Fresh Premium Nuts Online | ChitralHive",
        meta_description: "Shop fresh Chitrali nuts online. Premium walnuts, almonds, pine nuts, and more. Rich in healthy fats and protein. Natural, no chemicals.",
        products_count: 250,
    },
    CategoryDef {
        name: "Chitrali Spices",
        slug: "chitrali-spices",
        description: "Authentic Chitrali spices and seasonings. Traditional spices sun-dried and ground to preserve natural flavors and aromas. Essential for Chitrali cuisine.",
        meta_title: "Chitrali Spices - Authentic Traditional Spices Online | ChitralHive",
        meta_description: "Buy authentic Chitrali spices online. Traditional cumin, coriander, turmeric, cardamom, and more. Sun-dried and naturally ground. Perfect for cooking.",
        products_count: 200,
    },
    CategoryDef {
        name: "Chitrali Apricots",
        slug: "chitrali-apricots",
        description: "Sweet and nutritious Chitrali apricots - dried and fresh. Rich in fiber, vitamins A and C. No added sugar, pure Chitrali quality from famous orchards.",
        meta_title: "Chitrali Apricots - Sweet Dried Apricots Online | ChitralHive",
        meta_description: "Shop Chitrali apricots online. Sweet dried apricots, halves, whole, and preserves. Rich in fiber and vitamins. No added sugar. Free shipping.",
        products_count: 150,
    },
    CategoryDef {
        name: "Chitrali Grains",
        slug: "chitrali-grains",
        description: "Organic Chitrali grains and cereals. Naturally grown whole grains rich in fiber and essential nutrients. Perfect for healthy cooking and traditional recipes.",
        meta_title: "Chitrali Grains - Organic Whole Grains Online | ChitralHive",
        meta_description: "Buy organic Chitrali grains online. Whole wheat, barley, oats, quinoa, and more. Rich in fiber and nutrients. Perfect for healthy cooking.",
        products_count: 150,
    },
    CategoryDef {
        name: "Chitrali Oils",
        slug: "chitrali-oils",
        description: "Pure Chitrali cold-pressed oils including walnut oil, apricot kernel oil, almond oil, and more. Natural, unrefined oils rich in healthy fats and nutrients.",
        meta_title: "Chitrali Oils - Pure Cold-Pressed Oils Online | ChitralHive",
        meta_description: "Buy pure Chitrali oils online. Cold-pressed walnut oil, apricot kernel oil, almond oil. Natural, unrefined, rich in healthy fats. Free shipping.",
        products_count: 100,
    },
    CategoryDef {
        name: "Chitrali Tea",
        slug: "chitrali-tea",
        description: "Premium Chitrali tea blends including green tea, herbal tea, and traditional Chitrali tea. Natural, organic tea leaves from mountain regions.",
        meta_title: "Chitrali Tea - Premium Tea Blends Online | ChitralHive",
        meta_description: "Shop premium Chitrali tea online. Green tea, herbal tea, traditional blends. Natural, organic tea leaves. Rich in antioxidants. Free shipping.",
        products_count: 80,
    },
    CategoryDef {
        name: "Chitrali Jams & Preserves",
        slug: "chitrali-jams-preserves",
        description: "Natural Chitrali jams and preserves made from fresh fruits. Apricot jam, mulberry jam, apple preserve, and more. No artificial preservatives.",
        meta_title: "Chitrali Jams & Preserves - Natural Fruit Preserves Online | ChitralHive",
        meta_description: "Buy natural Chitrali jams and preserves online. Apricot jam, mulberry jam, apple preserve. Made from fresh fruits, no artificial preservatives.",
        products_count: 60,
    },
    CategoryDef {
        name: "Chitrali Seeds",
        slug: "chitrali-seeds",
        description: "Premium Chitrali seeds including pumpkin seeds, sunflower seeds, chia seeds, flax seeds, and more. Rich in protein, fiber, and healthy fats.",
        meta_title: "Chitrali Seeds - Premium Seeds Online | ChitralHive",
        meta_description: "Shop premium Chitrali seeds online. Pumpkin seeds, sunflower seeds, chia seeds, flax seeds. Rich in protein and healthy fats. Natural quality.",
        products_count: 120,
    },
    CategoryDef {
        name: "Chitrali Pickles",
        slug: "chitrali-pickles",
        description: "Traditional Chitrali pickles made with authentic recipes. Mango pickle, lemon pickle, mixed vegetable pickle, and more. Preserved naturally.",
        meta_title: "Chitrali Pickles - Traditional Pickles Online | ChitralHive",
        meta_description: "Buy traditional Chitrali pickles online. Mango pickle, lemon pickle, mixed vegetable pickle. Authentic recipes, naturally preserved. Free shipping.",
        products_count: 70,
    },
    CategoryDef {
        name: "Chitrali Rice & Pulses",
        slug: "chitrali-rice-pulses",
        description: "Organic Chitrali rice and pulses. Basmati rice, brown rice, lentils, chickpeas, kidney beans, and more. Naturally grown, rich in protein and fiber.",
        meta_title: "Chitrali Rice & Pulses - Organic Rice and Lentils Online | ChitralHive",
        meta_description: "Shop organic Chitrali rice and pulses online. Basmati rice, brown rice, lentils, chickpeas. Rich in protein and fiber. Natural, organic quality.",
        products_count: 100,
    },
    CategoryDef {
        name: "Chitrali Medicinal Plants",
        slug: "chitrali-medicinal-plants",
        description: "Traditional Chitrali medicinal plants and herbs. Used in traditional medicine for centuries. Organic, hand-picked, naturally preserved.",
        meta_title: "Chitrali Medicinal Plants - Traditional Herbs Online | ChitralHive",
        meta_description: "Buy traditional Chitrali medicinal plants online. Organic, hand-picked herbs used in traditional medicine. Naturally preserved. Free shipping.",
        products_count: 90,
    },
    CategoryDef {
        name: "Chitrali Wool Products",
        slug: "chitrali-wool-products",
        description: "Authentic Chitrali wool products including shawls, blankets, caps, and traditional woolen items. Handwoven, natural wool from Chitral sheep.",
        meta_title: "Chitrali Wool Products - Handwoven Wool Items Online | ChitralHive",
        meta_description: "Shop authentic Chitrali wool products online. Shawls, blankets, caps, traditional items. Handwoven, natural wool. Traditional craftsmanship.",
        products_count: 50,
    },
    CategoryDef {
        name: "Chitrali Traditional Foods",
        slug: "chitrali-traditional-foods",
        description: "Authentic Chitrali traditional foods and ready-to-eat items. Prepared using traditional recipes and methods. Natural ingredients, no preservatives.",
        meta_title: "Chitrali Traditional Foods - Authentic Ready-to-Eat Items | ChitralHive",
        meta_description: "Buy authentic Chitrali traditional foods online. Ready-to-eat items prepared with traditional recipes. Natural ingredients, no preservatives.",
        products_count: 40,
    },
];

fn product_template(category_slug: &str) -> ProductTemplate {
    match category_slug {
        "chitrali-dry-fruits" => ProductTemplate {
            names: &[
                "Chitrali Almonds", "Chitrali Walnuts", "Chitrali Apricots", "Chitrali Raisins",
                "Chitrali Dates", "Chitrali Figs", "Chitrali Pistachios", "Chitrali Cashews",
                "Chitrali Pine Nuts", "Chitrali Hazelnuts", "Chitrali Prunes", "Chitrali Cranberries",
                "Chitrali Dried Apricots", "Chitrali Dried Peaches", "Chitrali Dried Plums",
            ],
            weights: &["100g", "250g", "500g", "1kg", "2kg", "5kg"],
            price_range: (500, 5000),
        },
        "chitrali-salajit" => ProductTemplate {
            names: &[
                "Pure Chitrali Salajit", "Chitrali Shilajit Resin", "Premium Chitrali Salajit",
                "Organic Chitrali Salajit", "Raw Chitrali Salajit", "Purified Chitrali Salajit",
                "Chitrali Salajit Powder", "Chitrali Salajit Capsules", "Chitrali Salajit Extract",
                "Mountain Chitrali Salajit",
            ],
            weights: &["10g", "25g", "50g", "100g", "250g", "500g"],
            price_range: (1000, 10000),
        },
        "chitrali-herbs" => ProductTemplate {
            names: &[
                "Chitrali Mint", "Chitrali Thyme", "Chitrali Basil", "Chitrali Oregano",
                "Chitrali Sage", "Chitrali Rosemary", "Chitrali Chamomile", "Chitrali Lavender",
                "Chitrali Eucalyptus", "Chitrali Calendula", "Chitrali Nettle", "Chitrali Dandelion",
            ],
            weights: &["50g", "100g", "250g", "500g", "1kg"],
            price_range: (300, 3000),
        },
        "chitrali-honey" => ProductTemplate {
            names: &[
                "Pure Chitrali Honey", "Organic Chitrali Honey", "Wild Chitrali Honey",
                "Mountain Chitrali Honey", "Chitrali Acacia Honey", "Chitrali Forest Honey",
                "Raw Chitrali Honey", "Chitrali Sidr Honey", "Chitrali Spring Honey",
            ],
            weights: &["250g", "500g", "1kg", "2kg", "5kg"],
            price_range: (800, 8000),
        },
        "chitrali-nuts" => ProductTemplate {
            names: &[
                "Chitrali Walnuts", "Chitrali Almonds", "Chitrali Pine Nuts", "Chitrali Hazelnuts",
                "Chitrali Pistachios", "Chitrali Cashews", "Chitrali Pecans", "Chitrali Macadamia",
                "Chitrali Brazil Nuts", "Chitrali Chestnuts",
            ],
            weights: &["100g", "250g", "500g", "1kg", "2kg"],
            price_range: (600, 6000),
        },
        "chitrali-spices" => ProductTemplate {
            names: &[
                "Chitrali Cumin", "Chitrali Coriander", "Chitrali Turmeric", "Chitrali Red Chili",
                "Chitrali Black Pepper", "Chitrali Cardamom", "Chitrali Cinnamon", "Chitrali Cloves",
                "Chitrali Nutmeg", "Chitrali Fenugreek", "Chitrali Mustard Seeds", "Chitrali Fennel",
            ],
            weights: &["50g", "100g", "250g", "500g", "1kg"],
            price_range: (200, 2000),
        },
        "chitrali-apricots" => ProductTemplate {
            names: &[
                "Chitrali Dried Apricots", "Sweet Chitrali Apricots", "Organic Chitrali Apricots",
                "Chitrali Apricot Halves", "Chitrali Apricot Whole", "Chitrali Apricot Pulp",
                "Chitrali Apricot Jam", "Chitrali Apricot Preserve",
            ],
            weights: &["250g", "500g", "1kg", "2kg", "5kg"],
            price_range: (400, 4000),
        },
        "chitrali-grains" => ProductTemplate {
            names: &[
                "Chitrali Wheat", "Chitrali Barley", "Chitrali Oats", "Chitrali Millet",
                "Chitrali Quinoa", "Chitrali Buckwheat", "Chitrali Rice", "Chitrali Corn",
            ],
            weights: &["500g", "1kg", "2kg", "5kg", "10kg"],
            price_range: (300, 3000),
        },
        "chitrali-oils" => ProductTemplate {
            names: &[
                "Chitrali Walnut Oil", "Chitrali Apricot Kernel Oil", "Chitrali Almond Oil",
                "Chitrali Olive Oil", "Chitrali Sesame Oil", "Chitrali Sunflower Oil",
                "Chitrali Mustard Oil", "Chitrali Coconut Oil", "Chitrali Flaxseed Oil",
            ],
            weights: &["250ml", "500ml", "1L", "2L", "5L"],
            price_range: (800, 6000),
        },
        "chitrali-tea" => ProductTemplate {
            names: &[
                "Chitrali Green Tea", "Chitrali Herbal Tea", "Chitrali Black Tea",
                "Chitrali Mint Tea", "Chitrali Chamomile Tea", "Chitrali Jasmine Tea",
                "Chitrali Traditional Tea", "Chitrali Mountain Tea", "Chitrali Organic Tea",
            ],
            weights: &["50g", "100g", "250g", "500g", "1kg"],
            price_range: (400, 3000),
        },
        "chitrali-jams-preserves" => ProductTemplate {
            names: &[
                "Chitrali Apricot Jam", "Chitrali Mulberry Jam", "Chitrali Apple Preserve",
                "Chitrali Peach Jam", "Chitrali Strawberry Jam", "Chitrali Mixed Fruit Jam",
                "Chitrali Grape Preserve", "Chitrali Fig Jam",
            ],
            weights: &["250g", "500g", "1kg", "2kg"],
            price_range: (500, 2500),
        },
        "chitrali-seeds" => ProductTemplate {
            names: &[
                "Chitrali Pumpkin Seeds", "Chitrali Sunflower Seeds", "Chitrali Chia Seeds",
                "Chitrali Flax Seeds", "Chitrali Sesame Seeds", "Chitrali Poppy Seeds",
                "Chitrali Fennel Seeds", "Chitrali Cumin Seeds", "Chitrali Mustard Seeds",
            ],
            weights: &["100g", "250g", "500g", "1kg", "2kg"],
            price_range: (300, 2500),
        },
        "chitrali-pickles" => ProductTemplate {
            names: &[
                "Chitrali Mango Pickle", "Chitrali Lemon Pickle", "Chitrali Mixed Vegetable Pickle",
                "Chitrali Chili Pickle", "Chitrali Garlic Pickle", "Chitrali Carrot Pickle",
                "Chitrali Turnip Pickle", "Chitrali Cauliflower Pickle",
            ],
            weights: &["250g", "500g", "1kg", "2kg"],
            price_range: (400, 2000),
        },
        "chitrali-rice-pulses" => ProductTemplate {
            names: &[
                "Chitrali Basmati Rice", "Chitrali Brown Rice", "Chitrali Red Rice",
                "Chitrali Lentils", "Chitrali Chickpeas", "Chitrali Kidney Beans",
                "Chitrali Black Beans", "Chitrali Mung Beans", "Chitrali Split Peas",
            ],
            weights: &["500g", "1kg", "2kg", "5kg", "10kg"],
            price_range: (300, 3000),
        },
        "chitrali-medicinal-plants" => ProductTemplate {
            names: &[
                "Chitrali Neem Leaves", "Chitrali Aloe Vera", "Chitrali Turmeric Root",
                "Chitrali Ginger Root", "Chitrali Garlic Bulbs", "Chitrali Fenugreek Seeds",
                "Chitrali Cumin Seeds", "Chitrali Fennel Seeds", "Chitrali Coriander Seeds",
            ],
            weights: &["50g", "100g", "250g", "500g", "1kg"],
            price_range: (200, 2000),
        },
        "chitrali-wool-products" => ProductTemplate {
            names: &[
                "Chitrali Wool Shawl", "Chitrali Wool Blanket", "Chitrali Wool Cap",
                "Chitrali Wool Scarf", "Chitrali Wool Socks", "Chitrali Wool Gloves",
                "Chitrali Wool Sweater", "Chitrali Wool Shawl Traditional",
            ],
            weights: &["1 piece", "Set of 2", "Set of 3"],
            price_range: (1500, 8000),
        },
        "chitrali-traditional-foods" => ProductTemplate {
            names: &[
                "Chitrali Chapshuro", "Chitrali Shish Kebab", "Chitrali Mantu",
                "Chitrali Qorma", "Chitrali Pulao", "Chitrali Bread",
                "Chitrali Traditional Soup", "Chitrali Rice Dish",
            ],
            weights: &["250g", "500g", "1kg", "2kg"],
            price_range: (600, 4000),
        },
        _ => DEFAULT_TEMPLATE,
    }
}

/// Category-flavored product description.
fn synthetic_description(category_slug: &str, product_name: &str, weight: &str) -> String {
    match category_slug {
        "chitrali-dry-fruits" => format!(
            "Premium {} sourced directly from Chitral's mountain regions. \
             These naturally dried fruits are rich in vitamins, minerals, and antioxidants. \
             Perfect for snacking, cooking, or as a healthy addition to your diet. \
             100% natural, no preservatives added. Available in {} pack.",
            product_name, weight
        ),
        "chitrali-salajit" => format!(
            "Pure {} extracted from the pristine mountains of Chitral. \
             Salajit (Shilajit) is a natural mineral pitch known for its traditional health benefits. \
             Rich in fulvic acid and over 84 minerals. Authentic Chitrali quality guaranteed. \
             Available in {} pack.",
            product_name, weight
        ),
        "chitrali-herbs" => format!(
            "Traditional {} grown in Chitral's fertile valleys. \
             These organic herbs are hand-picked and carefully dried to preserve their natural properties. \
             Perfect for culinary use and traditional remedies. Available in {} pack.",
            product_name, weight
        ),
        "chitrali-honey" => format!(
            "Pure {} collected from Chitral's wildflower meadows. \
             This organic honey is raw, unfiltered, and unpasteurized, preserving all natural enzymes and nutrients. \
             Rich flavor with natural sweetness. Available in {} jar.",
            product_name, weight
        ),
        "chitrali-nuts" => format!(
            "Fresh {} from Chitral's orchards. \
             These premium nuts are naturally grown without chemicals, rich in healthy fats, protein, and essential nutrients. \
             Perfect for snacking or cooking. Available in {} pack.",
            product_name, weight
        ),
        "chitrali-spices" => format!(
            "Authentic {} from Chitral. \
             These traditional spices are sun-dried and ground to preserve their natural flavors and aromas. \
             Essential for Chitrali cuisine. Available in {} pack.",
            product_name, weight
        ),
        "chitrali-apricots" => format!(
            "Sweet {} from Chitral's famous apricot orchards. \
             These naturally dried apricots are rich in fiber, vitamins A and C. \
             No added sugar, pure Chitrali quality. Available in {} pack.",
            product_name, weight
        ),
        "chitrali-grains" => format!(
            "Organic {} grown in Chitral's fertile soil. \
             These whole grains are naturally grown, rich in fiber and essential nutrients. \
             Perfect for healthy cooking and traditional Chitrali recipes. Available in {} pack.",
            product_name, weight
        ),
        "chitrali-oils" => format!(
            "Pure {} cold-pressed from Chitral's finest sources. \
             Natural, unrefined oil rich in healthy fats and nutrients. \
             Perfect for cooking and traditional use. Available in {} bottle.",
            product_name, weight
        ),
        "chitrali-tea" => format!(
            "Premium {} from Chitral's mountain regions. \
             Natural, organic tea leaves rich in antioxidants. \
             Traditional brewing methods preserved. Available in {} pack.",
            product_name, weight
        ),
        "chitrali-jams-preserves" => format!(
            "Natural {} made from fresh Chitrali fruits. \
             No artificial preservatives, pure fruit goodness. \
             Perfect for breakfast and desserts. Available in {} jar.",
            product_name, weight
        ),
        "chitrali-seeds" => format!(
            "Premium {} from Chitral. \
             Rich in protein, fiber, and healthy fats. \
             Natural, no chemicals. Perfect for snacking and cooking. Available in {} pack.",
            product_name, weight
        ),
        "chitrali-pickles" => format!(
            "Traditional {} made with authentic Chitrali recipes. \
             Naturally preserved, full of flavor. \
             Perfect accompaniment to meals. Available in {} jar.",
            product_name, weight
        ),
        "chitrali-rice-pulses" => format!(
            "Organic {} from Chitral's farms. \
             Naturally grown, rich in protein and fiber. \
             Perfect for healthy cooking. Available in {} pack.",
            product_name, weight
        ),
        "chitrali-medicinal-plants" => format!(
            "Traditional {} from Chitral. \
             Used in traditional medicine for centuries. \
             Organic, hand-picked, naturally preserved. Available in {} pack.",
            product_name, weight
        ),
        "chitrali-wool-products" => format!(
            "Authentic {} handwoven in Chitral. \
             Natural wool from Chitral sheep, traditional craftsmanship. \
             Warm and durable. Available as {}.",
            product_name, weight
        ),
        "chitrali-traditional-foods" => format!(
            "Authentic {} prepared with traditional Chitrali recipes. \
             Natural ingredients, no preservatives. \
             Ready-to-eat traditional delicacy. Available in {} pack.",
            product_name, weight
        ),
        _ => format!(
            "Premium {} from Chitral. Authentic quality, natural ingredients. \
             Available in {} pack.",
            product_name, weight
        ),
    }
}

struct BundleTemplate {
    name: &'static str,
    description: &'static str,
    category_slug: &'static str,
    price_range: (i64, i64),
}

const BUNDLE_TEMPLATES: &[BundleTemplate] = &[
    BundleTemplate {
        name: "Chitrali Dry Fruits Combo Pack",
        description: "Premium assortment of Chitrali dry fruits including almonds, walnuts, apricots, dates, and raisins. Perfect gift pack.",
        category_slug: "chitrali-dry-fruits",
        price_range: (2000, 5000),
    },
    BundleTemplate {
        name: "Chitrali Wellness Bundle",
        description: "Complete wellness package with Chitrali Salajit, Honey, and Herbs. Natural health benefits in one bundle.",
        category_slug: "chitrali-salajit",
        price_range: (3000, 8000),
    },
    BundleTemplate {
        name: "Chitrali Spice Collection",
        description: "Authentic Chitrali spices collection including cumin, coriander, turmeric, cardamom, and more. Essential for Chitrali cuisine.",
        category_slug: "chitrali-spices",
        price_range: (1500, 4000),
    },
    BundleTemplate {
        name: "Chitrali Nut Mix Premium",
        description: "Premium mix of Chitrali nuts including walnuts, almonds, pine nuts, and hazelnuts. Rich in healthy fats and protein.",
        category_slug: "chitrali-nuts",
        price_range: (2500, 6000),
    },
    BundleTemplate {
        name: "Chitrali Honey & Herbs Gift Set",
        description: "Perfect gift set with pure Chitrali honey and traditional herbs. Organic and natural.",
        category_slug: "chitrali-honey",
        price_range: (2000, 5000),
    },
];

const PRODUCT_ID_FLOOR: i64 = 100000;
const BUNDLE_ID_FLOOR: i64 = 200000;

const PRODUCT_DISCOUNTS: [i64; 6] = [0, 5, 10, 15, 20, 25];
const BUNDLE_DISCOUNTS: [i64; 4] = [10, 15, 20, 25];

#[derive(Debug, Default, Clone, Copy)]
pub struct SeedSummary {
    pub categories: usize,
    pub products: usize,
    pub bundles: usize,
}

/// Seed the full synthetic catalog. `limit` caps products per category
/// (0 = template counts); `seed` drives the PRNG.
pub fn seed_catalog(store: &Store, limit: usize, seed: u64) -> Result<SeedSummary, String> {
    let mut rng = Rng::new(seed);
    let mut summary = SeedSummary::default();

    // Ordered map: products and bundles are seeded in definition order.
    let mut categories: IndexMap<&'static str, (i64, usize)> = IndexMap::new();
    for (idx, def) in CATEGORY_DEFS.iter().enumerate() {
        let seed_row = CategorySeed {
            name: def.name.to_string(),
            slug: def.slug.to_string(),
            description: def.description.to_string(),
            priority: (idx + 1) as i64,
            meta_url: seo::meta_url(Kind::Category, def.slug),
            meta_title: def.meta_title.to_string(),
            meta_description: def.meta_description.to_string(),
        };
        let (id, created) = store.upsert_main_category(&seed_row)?;
        println!(
            "{} main category: {}",
            if created { "Created" } else { "Updated" },
            def.name
        );
        categories.insert(def.slug, (id, def.products_count));
        summary.categories += 1;
    }

    summary.products = seed_products(store, &categories, limit, &mut rng)?;
    summary.bundles = seed_bundles(store, &categories, &mut rng)?;
    Ok(summary)
}

fn seed_products(
    store: &Store,
    categories: &IndexMap<&'static str, (i64, usize)>,
    limit: usize,
    rng: &mut Rng,
) -> Result<usize, String> {
    let mut created = 0;
    let mut ext_pos_id = PRODUCT_ID_FLOOR;

    for (&category_slug, &(category_id, products_count)) in categories {
        let template = product_template(category_slug);
        let count = if limit > 0 {
            products_count.min(limit)
        } else {
            products_count
        };
        let sku_cat = category_sku_prefix(category_slug);

        for i in 0..count {
            let base_name = *rng.pick(template.names);
            let weight = *rng.pick(template.weights);
            let product_name = format!("{} - {}", base_name, weight);

            let slug = format!("{}-{}-{}", slugify(base_name), slugify(weight), ext_pos_id);
            let sku = item_sku(&format!("CHIT-{}", sku_cat), ext_pos_id);

            if store.item_slug_exists(&slug)? || store.item_sku_exists(&sku)? {
                ext_pos_id += 1;
                continue;
            }

            let (min_price, max_price) = template.price_range;
            let mrp = rng.range(min_price, max_price);
            let discount = *rng.pick(&PRODUCT_DISCOUNTS);
            let sale_price = mrp * (100 - discount) / 100;

            let description = synthetic_description(category_slug, base_name, weight);
            let meta_description_tail: String = description.chars().take(150).collect();

            let item = NewItem {
                ext_pos_id,
                name: product_name.clone(),
                slug: slug.clone(),
                sku,
                image: String::new(),
                description,
                mrp,
                sale_price,
                discount,
                stock: rng.range(10, 1000),
                stock_check_qty: rng.range(5, 100),
                weight: rng.range(1, 50) as f64 / 10.0,
                is_new_arrival: rng.range(0, 1),
                is_featured: if i % 10 == 0 { rng.range(0, 1) } else { 0 },
                meta_url: Some(seo::meta_url(Kind::Product, &slug)),
                meta_title: seo::meta_title(Kind::Product, &product_name),
                meta_description: format!(
                    "{}... Buy {} online from ChitralHive. Premium quality, free shipping available.",
                    meta_description_tail, product_name
                ),
            };

            match store.insert_item(&item) {
                Ok(item_id) => {
                    store.link_item(category_id, item_id)?;
                    created += 1;
                    ext_pos_id += 1;
                    if created % 100 == 0 {
                        println!("Created {} products...", created);
                    }
                }
                Err(e) => {
                    println!("Error creating product: {}", e);
                    ext_pos_id += 1;
                }
            }
        }
    }

    Ok(created)
}

fn seed_bundles(
    store: &Store,
    categories: &IndexMap<&'static str, (i64, usize)>,
    rng: &mut Rng,
) -> Result<usize, String> {
    let mut created = 0;
    let mut ext_pos_id = BUNDLE_ID_FLOOR;

    for template in BUNDLE_TEMPLATES {
        let slug = slugify(template.name);
        let sku = item_sku("CHIT-BUNDLE", ext_pos_id);

        if store.bundle_slug_exists(&slug)? || store.bundle_sku_exists(&sku)? {
            ext_pos_id += 1;
            continue;
        }

        let category_id = categories.get(template.category_slug).map(|&(id, _)| id);

        let (min_price, max_price) = template.price_range;
        let mrp = rng.range(min_price, max_price);
        let discount = *rng.pick(&BUNDLE_DISCOUNTS);
        let sale_price = mrp * (100 - discount) / 100;

        let bundle = NewBundle {
            name: template.name.to_string(),
            slug: slug.clone(),
            sku,
            description: template.description.to_string(),
            mrp,
            sale_price,
            category_id,
            priority: rng.range(1, 10),
            meta_url: seo::meta_url(Kind::Bundle, &slug),
            meta_title: format!("{} - Buy Online | ChitralHive", template.name),
            meta_description: format!(
                "{} Buy {} online from ChitralHive. Premium quality, special bundle discount available.",
                template.description, template.name
            ),
        };

        let bundle_id = match store.insert_bundle(&bundle) {
            Ok(id) => id,
            Err(e) => {
                println!("Error creating bundle: {}", e);
                ext_pos_id += 1;
                continue;
            }
        };

        if let Some(category_id) = category_id {
            let member_count = rng.range(3, 6) as usize;
            for item_id in store.active_items_in_category(category_id, member_count)? {
                store.insert_bundle_item(bundle_id, item_id, rng.range(1, 3), rng.range(1, 10))?;
            }
        }

        println!("Created bundle: {}", template.name);
        created += 1;
        ext_pos_id += 1;
    }

    Ok(created)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::store::Store;

    #[test]
    fn rng_is_deterministic() {
        fn sequence(seed: u64) -> Vec<i64> {
            let mut rng = Rng::new(seed);
            (0..10).map(|_| rng.range(0, 1000)).collect()
        }
        assert_eq!(sequence(42), sequence(42));
        assert_ne!(sequence(42), sequence(43));
    }

    #[test]
    fn rng_range_is_inclusive_and_bounded() {
        let mut rng = Rng::new(7);
        for _ in 0..200 {
            let v = rng.range(5, 8);
            assert!((5..=8).contains(&v));
        }
    }

    #[test]
    fn seeds_all_categories() {
        let store = Store::open_in_memory().unwrap();
        let summary = seed_catalog(&store, 1, 42).unwrap();
        assert_eq!(summary.categories, 17);
        assert_eq!(store.count("category").unwrap(), 17);
    }

    #[test]
    fn limit_caps_products_per_category() {
        let store = Store::open_in_memory().unwrap();
        let summary = seed_catalog(&store, 2, 42).unwrap();
        assert_eq!(summary.products, 34);
        assert_eq!(store.count("category_item").unwrap(), 34);
    }

    #[test]
    fn bundles_reference_category_items() {
        let store = Store::open_in_memory().unwrap();
        let summary = seed_catalog(&store, 5, 42).unwrap();
        assert_eq!(summary.bundles, 5);
        assert_eq!(store.count("bundle").unwrap(), 5);
        // Each bundle draws 3 to 6 members, capped by the 5 items seeded
        // into its category.
        let members = store.count("bundle_item").unwrap();
        assert!((15..=25).contains(&members), "members = {}", members);
    }

    #[test]
    fn rerun_does_not_duplicate() {
        let store = Store::open_in_memory().unwrap();
        seed_catalog(&store, 1, 42).unwrap();
        let again = seed_catalog(&store, 1, 42).unwrap();
        assert_eq!(again.products, 0);
        assert_eq!(again.bundles, 0);
        assert_eq!(store.count("category").unwrap(), 17);
        assert_eq!(store.count("item").unwrap(), 17);
        assert_eq!(store.count("bundle").unwrap(), 5);
    }

    #[test]
    fn same_seed_same_catalog() {
        let a = Store::open_in_memory().unwrap();
        let b = Store::open_in_memory().unwrap();
        seed_catalog(&a, 3, 99).unwrap();
        seed_catalog(&b, 3, 99).unwrap();
        let rows_a: Vec<String> = a.items_for_seo(0).unwrap().into_iter().map(|r| r.name).collect();
        let rows_b: Vec<String> = b.items_for_seo(0).unwrap().into_iter().map(|r| r.name).collect();
        assert_eq!(rows_a, rows_b);
    }

    #[test]
    fn descriptions_mention_weight() {
        let text = synthetic_description("chitrali-honey", "Raw Chitrali Honey", "1kg");
        assert!(text.contains("1kg jar"));
        let fallback = synthetic_description("unknown-slug", "Thing", "250g");
        assert!(fallback.contains("250g pack"));
    }
}
