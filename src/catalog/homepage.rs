//! Homepage layout setup: section boxes, category boxes, section sequences,
//! and the configuration rows the storefront reads at render time.

use crate::catalog::store::Store;
use crate::catalog::types::{box_kind, Category};

/// Fixed `(sequence_no, section_no)` layout: section 1 holds boxes 1-2,
/// section 2 holds boxes 3-8.
const BOX_SEQUENCE: [(i64, i64); 8] = [
    (1, 1),
    (2, 1),
    (3, 2),
    (4, 2),
    (5, 2),
    (6, 2),
    (7, 2),
    (8, 2),
];

const MAX_HOME_CATEGORIES: usize = 8;
const SECTION_COUNT: usize = 2;
const MAX_SUBCATEGORIES_PER_SECTION: usize = 5;
const SECTION_SEQUENCE_COUNT: usize = 3;
const MAX_SECTION_CHILDREN: usize = 7;

#[derive(Debug, Default, Clone, Copy)]
pub struct SetupSummary {
    pub boxes: usize,
    pub sections: usize,
}

/// Categories picked for the homepage: SEO-complete ones first, each group
/// ordered by (priority, id), capped at eight.
pub fn pick_home_categories(store: &Store) -> Result<Vec<Category>, String> {
    let all = store.eligible_home_categories()?;

    let (mut with_seo, mut without_seo): (Vec<Category>, Vec<Category>) =
        all.into_iter().partition(Category::has_seo);
    with_seo.sort_by_key(|c| (c.priority, c.id));
    without_seo.sort_by_key(|c| (c.priority, c.id));

    let mut picked = with_seo;
    picked.extend(without_seo);
    picked.truncate(MAX_HOME_CATEGORIES);
    Ok(picked)
}

/// Set up the whole homepage layout. `clear` wipes existing layout rows first.
pub fn setup(store: &Store, clear: bool) -> Result<SetupSummary, String> {
    if clear {
        println!("Clearing all existing layout data...");
        store.clear_homepage()?;
    } else {
        println!("Keeping existing layout data (use --clear to remove all)");
    }

    let categories = pick_home_categories(store)?;
    if categories.is_empty() {
        return Err(
            "no homepage categories found; run seed-catalog first".to_string(),
        );
    }

    println!("Categories selected (SEO-optimized first):");
    for category in &categories {
        if category.has_seo() {
            println!("  {} (SEO fields present)", category.name);
        } else {
            println!("  {} (no SEO fields, using slug: {})", category.name, category.slug);
        }
    }

    let mut summary = SetupSummary::default();
    summary.boxes += create_section_boxes(store, &categories)?;
    summary.boxes += create_category_boxes(store, &categories)?;
    setup_configuration(store, categories.len())?;
    summary.sections = create_section_sequences(store, &categories)?;
    Ok(summary)
}

/// The two section entries plus up to five subcategory boxes each.
fn create_section_boxes(store: &Store, categories: &[Category]) -> Result<usize, String> {
    let mut boxes = 0;
    if categories.len() < SECTION_COUNT {
        return Ok(0);
    }

    for section_idx in 1..=SECTION_COUNT {
        let category = &categories[section_idx - 1];
        let created = store.upsert_box(section_idx as i64, box_kind::SECTION, category)?;
        println!(
            "{} section {}: {}",
            if created { "Created" } else { "Updated" },
            section_idx,
            category.name
        );
        boxes += 1;

        let children = store.children_of(category.id, MAX_SUBCATEGORIES_PER_SECTION)?;
        for (child_idx, child) in children.iter().enumerate() {
            let created =
                store.upsert_subcategory_box(category.id, (child_idx + 1) as i64, child)?;
            if created {
                println!("  Created subcategory: {}", child.name);
            }
            boxes += 1;
        }
    }

    Ok(boxes)
}

/// One box per category following the fixed sequence table.
fn create_category_boxes(store: &Store, categories: &[Category]) -> Result<usize, String> {
    let mut boxes = 0;
    for (idx, &(sequence_no, _section_no)) in BOX_SEQUENCE.iter().enumerate() {
        let Some(category) = categories.get(idx) else {
            break;
        };
        let created = store.upsert_box(sequence_no, box_kind::BOX, category)?;
        println!(
            "{} box {}: {}",
            if created { "Created" } else { "Updated" },
            sequence_no,
            category.name
        );
        boxes += 1;
    }
    Ok(boxes)
}

fn setup_configuration(store: &Store, num_boxes: usize) -> Result<(), String> {
    println!("Setting up configuration...");
    store.set_configuration("box", "homepage", &num_boxes.to_string())?;
    store.set_configuration("section", "homepage", &SECTION_SEQUENCE_COUNT.to_string())?;
    println!(
        "Configuration set: {} sections, {} boxes",
        SECTION_SEQUENCE_COUNT, num_boxes
    );
    Ok(())
}

/// Section sequences for the first three categories, each with up to seven
/// child slots.
fn create_section_sequences(store: &Store, categories: &[Category]) -> Result<usize, String> {
    let mut sections = 0;
    for (idx, category) in categories.iter().take(SECTION_SEQUENCE_COUNT).enumerate() {
        let sequence_no = (idx + 1) as i64;
        store.upsert_section_sequence(sequence_no, category, category.seo_name())?;

        let children = store.children_of(category.id, MAX_SECTION_CHILDREN)?;
        store.replace_section_children(sequence_no, &children)?;

        println!("Section {} set to {}", sequence_no, category.name);
        sections += 1;
    }
    Ok(sections)
}

/// Point one homepage section at a category by slug.
pub fn set_section(store: &Store, sequence_no: i64, slug: &str) -> Result<(), String> {
    let category = store
        .category_by_slug(slug)?
        .ok_or_else(|| format!("category not found for slug: {}", slug))?;

    store.upsert_box(sequence_no, box_kind::SECTION, &category)?;
    // The sequence row shows the plain category name, not the meta title.
    store.upsert_section_sequence(sequence_no, &category, &category.name)?;

    println!(
        "Section {} set to {} ({})",
        sequence_no, category.name, category.slug
    );
    Ok(())
}
