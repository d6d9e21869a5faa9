//! SQLite-backed catalog store.
//!
//! Every command opens the same single-file database; the schema is applied
//! idempotently on open so a fresh file is usable immediately. Writes are
//! per-row autocommits, matching the one-record-at-a-time pace of the
//! seeding commands.

use crate::catalog::types::{
    box_kind, Category, CategorySeed, NewBundle, NewItem, SeoRow, ACTIVE,
};
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;

const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS category (
    id               INTEGER PRIMARY KEY,
    name             TEXT NOT NULL,
    slug             TEXT NOT NULL UNIQUE,
    description      TEXT NOT NULL DEFAULT '',
    parent_id        INTEGER REFERENCES category(id),
    is_brand         INTEGER NOT NULL DEFAULT 0,
    status           INTEGER NOT NULL DEFAULT 1,
    applies_online   INTEGER NOT NULL DEFAULT 1,
    show_at_home     INTEGER NOT NULL DEFAULT 0,
    priority         INTEGER NOT NULL DEFAULT 0,
    icon             TEXT,
    meta_url         TEXT,
    meta_title       TEXT,
    meta_description TEXT
);
CREATE INDEX IF NOT EXISTS idx_category_parent ON category(parent_id);

CREATE TABLE IF NOT EXISTS item (
    id               INTEGER PRIMARY KEY,
    ext_pos_id       INTEGER NOT NULL UNIQUE,
    name             TEXT NOT NULL,
    slug             TEXT NOT NULL UNIQUE,
    sku              TEXT NOT NULL UNIQUE,
    image            TEXT NOT NULL DEFAULT '',
    description      TEXT NOT NULL DEFAULT '',
    mrp              INTEGER NOT NULL,
    sale_price       INTEGER NOT NULL,
    discount         INTEGER NOT NULL DEFAULT 0,
    stock            INTEGER NOT NULL DEFAULT 0,
    stock_check_qty  INTEGER NOT NULL DEFAULT 0,
    weight           REAL NOT NULL DEFAULT 0,
    applies_online   INTEGER NOT NULL DEFAULT 1,
    status           INTEGER NOT NULL DEFAULT 1,
    is_new_arrival   INTEGER NOT NULL DEFAULT 0,
    is_featured      INTEGER NOT NULL DEFAULT 0,
    manufacturer     TEXT NOT NULL DEFAULT '',
    meta_url         TEXT,
    meta_title       TEXT NOT NULL DEFAULT '',
    meta_description TEXT NOT NULL DEFAULT '',
    created_at       TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%SZ', 'now'))
);
CREATE INDEX IF NOT EXISTS idx_item_name ON item(name);

CREATE TABLE IF NOT EXISTS category_item (
    id          INTEGER PRIMARY KEY,
    category_id INTEGER NOT NULL REFERENCES category(id),
    item_id     INTEGER NOT NULL REFERENCES item(id),
    level       INTEGER NOT NULL DEFAULT 2,
    status      INTEGER NOT NULL DEFAULT 1
);
CREATE INDEX IF NOT EXISTS idx_category_item_item ON category_item(item_id);
CREATE INDEX IF NOT EXISTS idx_category_item_category ON category_item(category_id);

CREATE TABLE IF NOT EXISTS item_gallery (
    id      INTEGER PRIMARY KEY,
    item_id INTEGER NOT NULL REFERENCES item(id),
    image   TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS item_tag (
    id      INTEGER PRIMARY KEY,
    item_id INTEGER NOT NULL REFERENCES item(id),
    tag     TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS bundle (
    id               INTEGER PRIMARY KEY,
    name             TEXT NOT NULL,
    slug             TEXT NOT NULL UNIQUE,
    sku              TEXT NOT NULL UNIQUE,
    description      TEXT NOT NULL DEFAULT '',
    mrp              INTEGER NOT NULL,
    sale_price       INTEGER NOT NULL,
    bundle_type      TEXT NOT NULL DEFAULT 'product',
    category_id      INTEGER REFERENCES category(id),
    show_at_home     INTEGER NOT NULL DEFAULT 0,
    priority         INTEGER NOT NULL DEFAULT 0,
    status           INTEGER NOT NULL DEFAULT 1,
    meta_url         TEXT,
    meta_title       TEXT NOT NULL DEFAULT '',
    meta_description TEXT NOT NULL DEFAULT ''
);

CREATE TABLE IF NOT EXISTS bundle_item (
    id        INTEGER PRIMARY KEY,
    bundle_id INTEGER NOT NULL REFERENCES bundle(id),
    item_id   INTEGER NOT NULL REFERENCES item(id),
    quantity  INTEGER NOT NULL DEFAULT 1,
    priority  INTEGER NOT NULL DEFAULT 0,
    status    INTEGER NOT NULL DEFAULT 1
);

CREATE TABLE IF NOT EXISTS box_order (
    id            INTEGER PRIMARY KEY,
    sequence_no   INTEGER NOT NULL,
    kind          TEXT NOT NULL,
    category_id   INTEGER REFERENCES category(id),
    category_slug TEXT NOT NULL DEFAULT '',
    category_name TEXT NOT NULL DEFAULT '',
    image         TEXT NOT NULL DEFAULT '',
    parent        INTEGER
);

CREATE TABLE IF NOT EXISTS section_sequence (
    id            INTEGER PRIMARY KEY,
    sequence_no   INTEGER NOT NULL UNIQUE,
    category_id   INTEGER REFERENCES category(id),
    category_slug TEXT NOT NULL DEFAULT '',
    name          TEXT NOT NULL DEFAULT ''
);

CREATE TABLE IF NOT EXISTS section_child (
    id          INTEGER PRIMARY KEY,
    section_no  INTEGER NOT NULL,
    position    INTEGER NOT NULL,
    category_id INTEGER NOT NULL REFERENCES category(id),
    name        TEXT NOT NULL DEFAULT '',
    slug        TEXT NOT NULL DEFAULT '',
    UNIQUE(section_no, position)
);

CREATE TABLE IF NOT EXISTS configuration (
    id       INTEGER PRIMARY KEY,
    name     TEXT NOT NULL,
    location TEXT NOT NULL DEFAULT '',
    value    TEXT NOT NULL DEFAULT '',
    UNIQUE(name, location)
);
";

/// Handle to the catalog database.
pub struct Store {
    conn: Connection,
}

fn category_from_row(row: &rusqlite::Row) -> rusqlite::Result<Category> {
    Ok(Category {
        id: row.get(0)?,
        name: row.get(1)?,
        slug: row.get(2)?,
        description: row.get(3)?,
        parent_id: row.get(4)?,
        is_brand: row.get::<_, i64>(5)? != 0,
        status: row.get(6)?,
        applies_online: row.get(7)?,
        show_at_home: row.get(8)?,
        priority: row.get(9)?,
        icon: row.get(10)?,
        meta_url: row.get(11)?,
        meta_title: row.get(12)?,
        meta_description: row.get(13)?,
    })
}

const CATEGORY_COLS: &str = "id, name, slug, description, parent_id, is_brand, status, \
                             applies_online, show_at_home, priority, icon, meta_url, \
                             meta_title, meta_description";

impl Store {
    /// Open (or create) the catalog database at `path` and apply the schema.
    pub fn open(path: &Path) -> Result<Self, String> {
        let conn = Connection::open(path)
            .map_err(|e| format!("cannot open database {}: {}", path.display(), e))?;
        Self::from_connection(conn)
    }

    /// In-memory store for tests.
    pub fn open_in_memory() -> Result<Self, String> {
        let conn = Connection::open_in_memory()
            .map_err(|e| format!("cannot open in-memory database: {}", e))?;
        Self::from_connection(conn)
    }

    fn from_connection(conn: Connection) -> Result<Self, String> {
        conn.execute_batch(SCHEMA)
            .map_err(|e| format!("cannot apply schema: {}", e))?;
        Ok(Store { conn })
    }

    // -- Categories --

    pub fn category_by_slug(&self, slug: &str) -> Result<Option<Category>, String> {
        self.conn
            .query_row(
                &format!("SELECT {} FROM category WHERE slug = ?1", CATEGORY_COLS),
                params![slug],
                category_from_row,
            )
            .optional()
            .map_err(|e| format!("category lookup failed for slug '{}': {}", slug, e))
    }

    /// Case-insensitive name lookup, first match by id.
    pub fn category_by_name(&self, name: &str) -> Result<Option<Category>, String> {
        self.conn
            .query_row(
                &format!(
                    "SELECT {} FROM category WHERE name = ?1 COLLATE NOCASE ORDER BY id LIMIT 1",
                    CATEGORY_COLS
                ),
                params![name],
                category_from_row,
            )
            .optional()
            .map_err(|e| format!("category lookup failed for name '{}': {}", name, e))
    }

    /// Active child categories of `parent_id`, ordered by id, capped at `limit`.
    pub fn children_of(&self, parent_id: i64, limit: usize) -> Result<Vec<Category>, String> {
        let mut stmt = self
            .conn
            .prepare(&format!(
                "SELECT {} FROM category WHERE parent_id = ?1 AND status = ?2 \
                 ORDER BY id LIMIT ?3",
                CATEGORY_COLS
            ))
            .map_err(|e| format!("query error: {}", e))?;
        let rows = stmt
            .query_map(params![parent_id, ACTIVE, limit as i64], category_from_row)
            .map_err(|e| format!("query error: {}", e))?;
        rows.collect::<Result<Vec<_>, _>>()
            .map_err(|e| format!("row error: {}", e))
    }

    /// Top-level categories eligible for the homepage: active, non-brand,
    /// flagged show-at-home, with a non-empty slug.
    pub fn eligible_home_categories(&self) -> Result<Vec<Category>, String> {
        let mut stmt = self
            .conn
            .prepare(&format!(
                "SELECT {} FROM category \
                 WHERE parent_id IS NULL AND is_brand = 0 AND status = ?1 \
                   AND show_at_home = 1 AND slug <> '' \
                 ORDER BY id",
                CATEGORY_COLS
            ))
            .map_err(|e| format!("query error: {}", e))?;
        let rows = stmt
            .query_map(params![ACTIVE], category_from_row)
            .map_err(|e| format!("query error: {}", e))?;
        rows.collect::<Result<Vec<_>, _>>()
            .map_err(|e| format!("row error: {}", e))
    }

    /// Create a main category by slug, or refresh an existing one so it is a
    /// top-level, non-brand, show-at-home, active category. Returns the id and
    /// whether a row was created.
    pub fn upsert_main_category(&self, seed: &CategorySeed) -> Result<(i64, bool), String> {
        if let Some(existing) = self.category_by_slug(&seed.slug)? {
            self.conn
                .execute(
                    "UPDATE category SET parent_id = NULL, is_brand = 0, \
                     show_at_home = 1, status = ?1 WHERE id = ?2",
                    params![ACTIVE, existing.id],
                )
                .map_err(|e| format!("cannot update category '{}': {}", seed.slug, e))?;
            return Ok((existing.id, false));
        }
        self.conn
            .execute(
                "INSERT INTO category (name, slug, description, parent_id, is_brand, status, \
                 applies_online, show_at_home, priority, meta_url, meta_title, meta_description) \
                 VALUES (?1, ?2, ?3, NULL, 0, ?4, 1, 1, ?5, ?6, ?7, ?8)",
                params![
                    seed.name,
                    seed.slug,
                    seed.description,
                    ACTIVE,
                    seed.priority,
                    seed.meta_url,
                    seed.meta_title,
                    seed.meta_description,
                ],
            )
            .map_err(|e| format!("cannot insert category '{}': {}", seed.slug, e))?;
        Ok((self.conn.last_insert_rowid(), true))
    }

    // -- Items --

    pub fn insert_item(&self, item: &NewItem) -> Result<i64, String> {
        self.conn
            .execute(
                "INSERT INTO item (ext_pos_id, name, slug, sku, image, description, mrp, \
                 sale_price, discount, stock, stock_check_qty, weight, applies_online, status, \
                 is_new_arrival, is_featured, manufacturer, meta_url, meta_title, meta_description) \
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, 1, ?13, ?14, ?15, \
                 'Chitral Hive', ?16, ?17, ?18)",
                params![
                    item.ext_pos_id,
                    item.name,
                    item.slug,
                    item.sku,
                    item.image,
                    item.description,
                    item.mrp,
                    item.sale_price,
                    item.discount,
                    item.stock,
                    item.stock_check_qty,
                    item.weight,
                    ACTIVE,
                    item.is_new_arrival,
                    item.is_featured,
                    item.meta_url,
                    item.meta_title,
                    item.meta_description,
                ],
            )
            .map_err(|e| format!("cannot insert item '{}': {}", item.name, e))?;
        Ok(self.conn.last_insert_rowid())
    }

    pub fn item_slug_exists(&self, slug: &str) -> Result<bool, String> {
        self.exists("SELECT 1 FROM item WHERE slug = ?1", slug)
    }

    pub fn item_sku_exists(&self, sku: &str) -> Result<bool, String> {
        self.exists("SELECT 1 FROM item WHERE sku = ?1", sku)
    }

    /// Case-insensitive product name check.
    pub fn item_name_exists(&self, name: &str) -> Result<bool, String> {
        self.exists("SELECT 1 FROM item WHERE name = ?1 COLLATE NOCASE", name)
    }

    fn exists(&self, sql: &str, value: &str) -> Result<bool, String> {
        self.conn
            .query_row(sql, params![value], |_| Ok(()))
            .optional()
            .map(|found| found.is_some())
            .map_err(|e| format!("existence check failed: {}", e))
    }

    /// Highest ext-POS-id at or above `floor`, if any row reaches it.
    pub fn max_ext_pos_id_at_least(&self, floor: i64) -> Result<Option<i64>, String> {
        self.conn
            .query_row(
                "SELECT MAX(ext_pos_id) FROM item WHERE ext_pos_id >= ?1",
                params![floor],
                |row| row.get::<_, Option<i64>>(0),
            )
            .map_err(|e| format!("max ext_pos_id query failed: {}", e))
    }

    /// Find the first ext-POS-id at or above `start` whose derived slug and
    /// SKU are both free. Returns `(ext_pos_id, slug, sku)`.
    pub fn allocate_item_identity(
        &self,
        slug_base: &str,
        sku_prefix: &str,
        start: i64,
    ) -> Result<(i64, String, String), String> {
        let mut ext_pos_id = start;
        loop {
            let slug = crate::catalog::slug::item_slug(slug_base, ext_pos_id);
            let sku = crate::catalog::slug::item_sku(sku_prefix, ext_pos_id);
            if !self.item_slug_exists(&slug)? && !self.item_sku_exists(&sku)? {
                return Ok((ext_pos_id, slug, sku));
            }
            ext_pos_id += 1;
        }
    }

    pub fn link_item(&self, category_id: i64, item_id: i64) -> Result<(), String> {
        self.conn
            .execute(
                "INSERT INTO category_item (category_id, item_id, level, status) \
                 VALUES (?1, ?2, 2, ?3)",
                params![category_id, item_id, ACTIVE],
            )
            .map_err(|e| format!("cannot link item {} to category {}: {}", item_id, category_id, e))?;
        Ok(())
    }

    /// Delete every product along with its links, gallery rows, and tags.
    pub fn clear_all_products(&self) -> Result<(), String> {
        self.conn
            .execute_batch(
                "DELETE FROM bundle_item;
                 DELETE FROM category_item;
                 DELETE FROM item_gallery;
                 DELETE FROM item_tag;
                 DELETE FROM item;",
            )
            .map_err(|e| format!("cannot clear products: {}", e))
    }

    /// Delete products linked to any of the given categories (plus their
    /// links, gallery rows, and tags everywhere).
    pub fn clear_products_in_categories(&self, category_ids: &[i64]) -> Result<usize, String> {
        let mut removed = 0;
        for &category_id in category_ids {
            let item_ids: Vec<i64> = {
                let mut stmt = self
                    .conn
                    .prepare("SELECT DISTINCT item_id FROM category_item WHERE category_id = ?1")
                    .map_err(|e| format!("query error: {}", e))?;
                let rows = stmt
                    .query_map(params![category_id], |row| row.get(0))
                    .map_err(|e| format!("query error: {}", e))?;
                rows.collect::<Result<Vec<_>, _>>()
                    .map_err(|e| format!("row error: {}", e))?
            };
            for item_id in item_ids {
                for sql in [
                    "DELETE FROM bundle_item WHERE item_id = ?1",
                    "DELETE FROM category_item WHERE item_id = ?1",
                    "DELETE FROM item_gallery WHERE item_id = ?1",
                    "DELETE FROM item_tag WHERE item_id = ?1",
                    "DELETE FROM item WHERE id = ?1",
                ] {
                    self.conn
                        .execute(sql, params![item_id])
                        .map_err(|e| format!("cannot delete item {}: {}", item_id, e))?;
                }
                removed += 1;
            }
        }
        Ok(removed)
    }

    /// Ids of active items linked to a category, ordered by id.
    pub fn active_items_in_category(
        &self,
        category_id: i64,
        limit: usize,
    ) -> Result<Vec<i64>, String> {
        let mut stmt = self
            .conn
            .prepare(
                "SELECT i.id FROM item i \
                 JOIN category_item ci ON ci.item_id = i.id \
                 WHERE ci.category_id = ?1 AND i.status = ?2 \
                 ORDER BY i.id LIMIT ?3",
            )
            .map_err(|e| format!("query error: {}", e))?;
        let rows = stmt
            .query_map(params![category_id, ACTIVE, limit as i64], |row| row.get(0))
            .map_err(|e| format!("query error: {}", e))?;
        rows.collect::<Result<Vec<_>, _>>()
            .map_err(|e| format!("row error: {}", e))
    }

    // -- Bundles --

    pub fn insert_bundle(&self, bundle: &NewBundle) -> Result<i64, String> {
        self.conn
            .execute(
                "INSERT INTO bundle (name, slug, sku, description, mrp, sale_price, bundle_type, \
                 category_id, show_at_home, priority, status, meta_url, meta_title, meta_description) \
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, 'product', ?7, 1, ?8, ?9, ?10, ?11, ?12)",
                params![
                    bundle.name,
                    bundle.slug,
                    bundle.sku,
                    bundle.description,
                    bundle.mrp,
                    bundle.sale_price,
                    bundle.category_id,
                    bundle.priority,
                    ACTIVE,
                    bundle.meta_url,
                    bundle.meta_title,
                    bundle.meta_description,
                ],
            )
            .map_err(|e| format!("cannot insert bundle '{}': {}", bundle.name, e))?;
        Ok(self.conn.last_insert_rowid())
    }

    pub fn bundle_slug_exists(&self, slug: &str) -> Result<bool, String> {
        self.exists("SELECT 1 FROM bundle WHERE slug = ?1", slug)
    }

    pub fn bundle_sku_exists(&self, sku: &str) -> Result<bool, String> {
        self.exists("SELECT 1 FROM bundle WHERE sku = ?1", sku)
    }

    pub fn insert_bundle_item(
        &self,
        bundle_id: i64,
        item_id: i64,
        quantity: i64,
        priority: i64,
    ) -> Result<(), String> {
        self.conn
            .execute(
                "INSERT INTO bundle_item (bundle_id, item_id, quantity, priority, status) \
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                params![bundle_id, item_id, quantity, priority, ACTIVE],
            )
            .map_err(|e| format!("cannot insert bundle item: {}", e))?;
        Ok(())
    }

    // -- Homepage layout --

    /// `update_or_create` on (sequence_no, kind) for top-level boxes/sections.
    pub fn upsert_box(
        &self,
        sequence_no: i64,
        kind: &str,
        category: &Category,
    ) -> Result<bool, String> {
        let existing: Option<i64> = self
            .conn
            .query_row(
                "SELECT id FROM box_order WHERE sequence_no = ?1 AND kind = ?2 AND parent IS NULL",
                params![sequence_no, kind],
                |row| row.get(0),
            )
            .optional()
            .map_err(|e| format!("box lookup failed: {}", e))?;
        match existing {
            Some(id) => {
                self.conn
                    .execute(
                        "UPDATE box_order SET category_id = ?1, category_slug = ?2, \
                         category_name = ?3, image = ?4 WHERE id = ?5",
                        params![
                            category.id,
                            category.seo_slug(),
                            category.seo_name(),
                            category.icon_or_default(),
                            id
                        ],
                    )
                    .map_err(|e| format!("cannot update box {}: {}", sequence_no, e))?;
                Ok(false)
            }
            None => {
                self.conn
                    .execute(
                        "INSERT INTO box_order (sequence_no, kind, category_id, category_slug, \
                         category_name, image, parent) VALUES (?1, ?2, ?3, ?4, ?5, ?6, NULL)",
                        params![
                            sequence_no,
                            kind,
                            category.id,
                            category.seo_slug(),
                            category.seo_name(),
                            category.icon_or_default()
                        ],
                    )
                    .map_err(|e| format!("cannot insert box {}: {}", sequence_no, e))?;
                Ok(true)
            }
        }
    }

    /// `update_or_create` on (kind, category_id, parent) for subcategory boxes.
    pub fn upsert_subcategory_box(
        &self,
        parent_category_id: i64,
        sequence_no: i64,
        child: &Category,
    ) -> Result<bool, String> {
        let existing: Option<i64> = self
            .conn
            .query_row(
                "SELECT id FROM box_order WHERE kind = ?1 AND category_id = ?2 AND parent = ?3",
                params![box_kind::SECTION_SUBCATEGORY, child.id, parent_category_id],
                |row| row.get(0),
            )
            .optional()
            .map_err(|e| format!("subcategory box lookup failed: {}", e))?;
        match existing {
            Some(id) => {
                self.conn
                    .execute(
                        "UPDATE box_order SET sequence_no = ?1, category_slug = ?2, \
                         category_name = ?3, image = ?4 WHERE id = ?5",
                        params![
                            sequence_no,
                            child.seo_slug(),
                            child.seo_name(),
                            child.icon_or_default(),
                            id
                        ],
                    )
                    .map_err(|e| format!("cannot update subcategory box: {}", e))?;
                Ok(false)
            }
            None => {
                self.conn
                    .execute(
                        "INSERT INTO box_order (sequence_no, kind, category_id, category_slug, \
                         category_name, image, parent) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
                        params![
                            sequence_no,
                            box_kind::SECTION_SUBCATEGORY,
                            child.id,
                            child.seo_slug(),
                            child.seo_name(),
                            child.icon_or_default(),
                            parent_category_id
                        ],
                    )
                    .map_err(|e| format!("cannot insert subcategory box: {}", e))?;
                Ok(true)
            }
        }
    }

    /// `update_or_create` on sequence_no for a section sequence row.
    /// `name` is passed explicitly because callers differ on whether the
    /// category name or its meta title is shown.
    pub fn upsert_section_sequence(
        &self,
        sequence_no: i64,
        category: &Category,
        name: &str,
    ) -> Result<bool, String> {
        let changed = self
            .conn
            .execute(
                "INSERT INTO section_sequence (sequence_no, category_id, category_slug, name) \
                 VALUES (?1, ?2, ?3, ?4) \
                 ON CONFLICT(sequence_no) DO UPDATE SET \
                 category_id = excluded.category_id, category_slug = excluded.category_slug, \
                 name = excluded.name",
                params![sequence_no, category.id, category.seo_slug(), name],
            )
            .map_err(|e| format!("cannot upsert section {}: {}", sequence_no, e))?;
        // One changed row for both the insert and the update path.
        Ok(changed > 0)
    }

    /// Replace the child slots of a section with the given categories.
    pub fn replace_section_children(
        &self,
        section_no: i64,
        children: &[Category],
    ) -> Result<(), String> {
        self.conn
            .execute(
                "DELETE FROM section_child WHERE section_no = ?1",
                params![section_no],
            )
            .map_err(|e| format!("cannot clear section {} children: {}", section_no, e))?;
        for (idx, child) in children.iter().enumerate() {
            self.conn
                .execute(
                    "INSERT INTO section_child (section_no, position, category_id, name, slug) \
                     VALUES (?1, ?2, ?3, ?4, ?5)",
                    params![
                        section_no,
                        (idx + 1) as i64,
                        child.id,
                        child.seo_name(),
                        child.seo_slug()
                    ],
                )
                .map_err(|e| format!("cannot insert section child: {}", e))?;
        }
        Ok(())
    }

    /// Wipe the homepage layout tables.
    pub fn clear_homepage(&self) -> Result<(), String> {
        self.conn
            .execute_batch(
                "DELETE FROM box_order;
                 DELETE FROM section_child;
                 DELETE FROM section_sequence;",
            )
            .map_err(|e| format!("cannot clear homepage layout: {}", e))
    }

    /// `update_or_create` on (name, location) for a configuration value.
    pub fn set_configuration(&self, name: &str, location: &str, value: &str) -> Result<(), String> {
        self.conn
            .execute(
                "INSERT INTO configuration (name, location, value) VALUES (?1, ?2, ?3) \
                 ON CONFLICT(name, location) DO UPDATE SET value = excluded.value",
                params![name, location, value],
            )
            .map_err(|e| format!("cannot set configuration '{}': {}", name, e))?;
        Ok(())
    }

    // -- SEO rewrite --

    /// Items in id order with their primary active category name (lowest
    /// category_item id wins). `limit` of 0 means all.
    pub fn items_for_seo(&self, limit: usize) -> Result<Vec<SeoRow>, String> {
        let sql = "SELECT i.id, i.name, i.description, i.meta_title, i.meta_description, \
                   (SELECT c.name FROM category_item ci JOIN category c ON c.id = ci.category_id \
                    WHERE ci.item_id = i.id AND ci.status = 1 ORDER BY ci.id LIMIT 1) \
                   FROM item i ORDER BY i.id";
        let mut stmt = self
            .conn
            .prepare(sql)
            .map_err(|e| format!("query error: {}", e))?;
        let rows = stmt
            .query_map([], |row| {
                Ok(SeoRow {
                    id: row.get(0)?,
                    name: row.get(1)?,
                    description: row.get(2)?,
                    meta_title: row.get(3)?,
                    meta_description: row.get(4)?,
                    category_name: row.get(5)?,
                })
            })
            .map_err(|e| format!("query error: {}", e))?;
        let mut out = Vec::new();
        for row in rows {
            let row = row.map_err(|e| format!("row error: {}", e))?;
            out.push(row);
            if limit > 0 && out.len() >= limit {
                break;
            }
        }
        Ok(out)
    }

    pub fn update_item_seo(
        &self,
        item_id: i64,
        description: &str,
        meta_title: &str,
        meta_description: &str,
    ) -> Result<(), String> {
        self.conn
            .execute(
                "UPDATE item SET description = ?1, meta_title = ?2, meta_description = ?3 \
                 WHERE id = ?4",
                params![description, meta_title, meta_description, item_id],
            )
            .map_err(|e| format!("cannot update item {} SEO: {}", item_id, e))?;
        Ok(())
    }

    // -- Counts (used by summaries and tests) --

    pub fn count(&self, table: &str) -> Result<i64, String> {
        // Table names come from code, never user input.
        self.conn
            .query_row(&format!("SELECT COUNT(*) FROM {}", table), [], |row| row.get(0))
            .map_err(|e| format!("count failed for {}: {}", table, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::types::CategorySeed;

    fn seed(slug: &str, name: &str) -> CategorySeed {
        CategorySeed {
            name: name.to_string(),
            slug: slug.to_string(),
            description: String::new(),
            priority: 1,
            meta_url: format!("/categories/{}", slug),
            meta_title: format!("{} | ChitralHive", name),
            meta_description: String::new(),
        }
    }

    fn item(ext_pos_id: i64, name: &str) -> NewItem {
        NewItem {
            ext_pos_id,
            name: name.to_string(),
            slug: crate::catalog::slug::item_slug(name, ext_pos_id),
            sku: crate::catalog::slug::item_sku("TST", ext_pos_id),
            image: String::new(),
            description: String::new(),
            mrp: 100,
            sale_price: 90,
            discount: 10,
            stock: 200,
            stock_check_qty: 10,
            weight: 0.5,
            is_new_arrival: 0,
            is_featured: 0,
            meta_url: None,
            meta_title: String::new(),
            meta_description: String::new(),
        }
    }

    #[test]
    fn schema_applies_on_open() {
        let store = Store::open_in_memory().unwrap();
        assert_eq!(store.count("item").unwrap(), 0);
        assert_eq!(store.count("category").unwrap(), 0);
    }

    #[test]
    fn open_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.db");
        Store::open(&path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn upsert_main_category_creates_then_updates() {
        let store = Store::open_in_memory().unwrap();
        let (id, created) = store.upsert_main_category(&seed("chitrali-honey", "Chitrali Honey")).unwrap();
        assert!(created);
        let (id2, created2) = store.upsert_main_category(&seed("chitrali-honey", "Chitrali Honey")).unwrap();
        assert!(!created2);
        assert_eq!(id, id2);
        assert_eq!(store.count("category").unwrap(), 1);
    }

    #[test]
    fn category_lookups() {
        let store = Store::open_in_memory().unwrap();
        store.upsert_main_category(&seed("chitrali-honey", "Chitrali Honey")).unwrap();
        assert!(store.category_by_slug("chitrali-honey").unwrap().is_some());
        assert!(store.category_by_slug("missing").unwrap().is_none());
        // Name lookup is case-insensitive.
        assert!(store.category_by_name("CHITRALI HONEY").unwrap().is_some());
    }

    #[test]
    fn allocate_identity_advances_past_collisions() {
        let store = Store::open_in_memory().unwrap();
        let mut row = item(400000, "Raw Honey");
        store.insert_item(&row).unwrap();
        row.ext_pos_id = 400001;
        row.slug = crate::catalog::slug::item_slug("Raw Honey", 400001);
        row.sku = crate::catalog::slug::item_sku("TST", 400001);
        store.insert_item(&row).unwrap();

        let (id, slug, sku) = store.allocate_item_identity("Raw Honey", "TST", 400000).unwrap();
        assert_eq!(id, 400002);
        assert_eq!(slug, "raw-honey-400002");
        assert_eq!(sku, "TST-400002");
    }

    #[test]
    fn max_ext_pos_id_respects_floor() {
        let store = Store::open_in_memory().unwrap();
        store.insert_item(&item(100001, "Low")).unwrap();
        store.insert_item(&item(400005, "High")).unwrap();
        assert_eq!(store.max_ext_pos_id_at_least(400000).unwrap(), Some(400005));
        assert_eq!(store.max_ext_pos_id_at_least(500000).unwrap(), None);
    }

    #[test]
    fn name_exists_is_case_insensitive() {
        let store = Store::open_in_memory().unwrap();
        store.insert_item(&item(1, "Sidr Honey")).unwrap();
        assert!(store.item_name_exists("sidr honey").unwrap());
        assert!(!store.item_name_exists("wild honey").unwrap());
    }

    #[test]
    fn clear_products_in_categories_only_touches_linked() {
        let store = Store::open_in_memory().unwrap();
        let (cat_a, _) = store.upsert_main_category(&seed("a", "A")).unwrap();
        let (cat_b, _) = store.upsert_main_category(&seed("b", "B")).unwrap();
        let item_a = store.insert_item(&item(1, "In A")).unwrap();
        let item_b = store.insert_item(&item(2, "In B")).unwrap();
        store.link_item(cat_a, item_a).unwrap();
        store.link_item(cat_b, item_b).unwrap();

        let removed = store.clear_products_in_categories(&[cat_a]).unwrap();
        assert_eq!(removed, 1);
        assert_eq!(store.count("item").unwrap(), 1);
        assert!(store.item_name_exists("In B").unwrap());
    }

    #[test]
    fn clear_all_products_empties_tables() {
        let store = Store::open_in_memory().unwrap();
        let (cat, _) = store.upsert_main_category(&seed("a", "A")).unwrap();
        let id = store.insert_item(&item(1, "X")).unwrap();
        store.link_item(cat, id).unwrap();
        store.clear_all_products().unwrap();
        assert_eq!(store.count("item").unwrap(), 0);
        assert_eq!(store.count("category_item").unwrap(), 0);
        // Categories survive.
        assert_eq!(store.count("category").unwrap(), 1);
    }

    #[test]
    fn configuration_upserts() {
        let store = Store::open_in_memory().unwrap();
        store.set_configuration("box", "homepage", "8").unwrap();
        store.set_configuration("box", "homepage", "6").unwrap();
        assert_eq!(store.count("configuration").unwrap(), 1);
    }

    #[test]
    fn items_for_seo_returns_primary_category() {
        let store = Store::open_in_memory().unwrap();
        let (first, _) = store.upsert_main_category(&seed("first", "First")).unwrap();
        let (second, _) = store.upsert_main_category(&seed("second", "Second")).unwrap();
        let id = store.insert_item(&item(1, "X")).unwrap();
        store.link_item(first, id).unwrap();
        store.link_item(second, id).unwrap();

        let rows = store.items_for_seo(0).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].category_name.as_deref(), Some("First"));
    }

    #[test]
    fn items_for_seo_honors_limit() {
        let store = Store::open_in_memory().unwrap();
        for i in 1..=5 {
            store.insert_item(&item(i, &format!("Item {}", i))).unwrap();
        }
        assert_eq!(store.items_for_seo(3).unwrap().len(), 3);
        assert_eq!(store.items_for_seo(0).unwrap().len(), 5);
    }
}
