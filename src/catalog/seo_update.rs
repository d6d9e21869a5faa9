//! Bulk SEO rewrite over the product table.
//!
//! Walks items in id order, rebuilds description/meta fields from the SEO
//! templates, and writes only rows that actually change.

use crate::catalog::seo::build_seo;
use crate::catalog::store::Store;

#[derive(Debug, Clone, Copy)]
pub struct UpdateOptions {
    pub dry_run: bool,
    /// 0 means no cap.
    pub limit: usize,
    /// Only touch items missing a description or meta field.
    pub only_missing: bool,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct UpdateSummary {
    pub scanned: usize,
    pub updated: usize,
}

pub fn run(store: &Store, opts: &UpdateOptions) -> Result<UpdateSummary, String> {
    let rows = store.items_for_seo(opts.limit)?;
    let mut summary = UpdateSummary::default();

    for row in rows {
        summary.scanned += 1;

        if opts.only_missing
            && !row.description.is_empty()
            && !row.meta_title.is_empty()
            && !row.meta_description.is_empty()
        {
            continue;
        }

        let seo = build_seo(&row.name, row.category_name.as_deref());

        let changed = row.description != seo.description
            || row.meta_title != seo.meta_title
            || row.meta_description != seo.meta_description;
        if !changed {
            continue;
        }

        if opts.dry_run {
            let preview: String = seo.meta_description.chars().take(80).collect();
            println!(
                "[DRY-RUN] {} {} -> metaTitle='{}' metaDescription='{}...'",
                row.id, row.name, seo.meta_title, preview
            );
        } else {
            store.update_item_seo(row.id, &seo.description, &seo.meta_title, &seo.meta_description)?;
        }
        summary.updated += 1;
    }

    println!(
        "Scanned: {}, Updated: {}, Dry-run: {}",
        summary.scanned, summary.updated, opts.dry_run
    );
    Ok(summary)
}
