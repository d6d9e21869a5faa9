//! Row types shared by the store and the seeding commands.
//!
//! Statuses are plain integers (1 = active, 0 = inactive) and prices are
//! integer rupees, mirroring the storefront's schema.

/// Active status value for categories, items, links, and bundles.
pub const ACTIVE: i64 = 1;

/// A catalog category.
#[derive(Debug, Clone)]
pub struct Category {
    pub id: i64,
    pub name: String,
    pub slug: String,
    pub description: String,
    pub parent_id: Option<i64>,
    pub is_brand: bool,
    pub status: i64,
    pub applies_online: i64,
    pub show_at_home: i64,
    pub priority: i64,
    pub icon: Option<String>,
    pub meta_url: Option<String>,
    pub meta_title: Option<String>,
    pub meta_description: Option<String>,
}

impl Category {
    /// The slug used in homepage links: meta_url when present, slug otherwise.
    pub fn seo_slug(&self) -> &str {
        match self.meta_url.as_deref() {
            Some(url) if !url.is_empty() => url,
            _ => &self.slug,
        }
    }

    /// The display name used in homepage links: meta_title when present.
    pub fn seo_name(&self) -> &str {
        match self.meta_title.as_deref() {
            Some(title) if !title.is_empty() => title,
            _ => &self.name,
        }
    }

    /// Icon path, falling back to the default category icon.
    pub fn icon_or_default(&self) -> &str {
        match self.icon.as_deref() {
            Some(icon) if !icon.is_empty() => icon,
            _ => "category_icon/default-category-icon.jpg",
        }
    }

    /// Whether any SEO field has been filled in.
    pub fn has_seo(&self) -> bool {
        self.meta_url.as_deref().is_some_and(|s| !s.is_empty())
            || self.meta_title.as_deref().is_some_and(|s| !s.is_empty())
            || self.meta_description.as_deref().is_some_and(|s| !s.is_empty())
    }
}

/// Fields for creating or updating a category during seeding.
#[derive(Debug, Clone)]
pub struct CategorySeed {
    pub name: String,
    pub slug: String,
    pub description: String,
    pub priority: i64,
    pub meta_url: String,
    pub meta_title: String,
    pub meta_description: String,
}

/// Fields for inserting a product.
#[derive(Debug, Clone)]
pub struct NewItem {
    pub ext_pos_id: i64,
    pub name: String,
    pub slug: String,
    pub sku: String,
    pub image: String,
    pub description: String,
    pub mrp: i64,
    pub sale_price: i64,
    pub discount: i64,
    pub stock: i64,
    pub stock_check_qty: i64,
    pub weight: f64,
    pub is_new_arrival: i64,
    pub is_featured: i64,
    pub meta_url: Option<String>,
    pub meta_title: String,
    pub meta_description: String,
}

/// Fields for inserting a bundle.
#[derive(Debug, Clone)]
pub struct NewBundle {
    pub name: String,
    pub slug: String,
    pub sku: String,
    pub description: String,
    pub mrp: i64,
    pub sale_price: i64,
    pub category_id: Option<i64>,
    pub priority: i64,
    pub meta_url: String,
    pub meta_title: String,
    pub meta_description: String,
}

/// One item row joined with its primary category, for the SEO rewrite pass.
#[derive(Debug, Clone)]
pub struct SeoRow {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub meta_title: String,
    pub meta_description: String,
    pub category_name: Option<String>,
}

/// Homepage box entry kinds.
pub mod box_kind {
    pub const SECTION: &str = "section";
    pub const SECTION_SUBCATEGORY: &str = "section_subcategory";
    pub const BOX: &str = "box";
}
