//! CLI subcommands: optimize-images, seed-catalog, seed-sites, seed-scraped,
//! setup-homepage, set-section, update-seo.

use crate::catalog::{homepage, seeder, seo_update, sites, store::Store};
use crate::media::optimize;
use crate::scrape::{net::Fetcher, seed as scrape_seed, sources};
use clap::{Subcommand, ValueEnum};
use std::path::{Path, PathBuf};

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Convert PNG/JPEG media to bounded lossless WebP
    OptimizeImages {
        /// Folder to scan for images
        #[arg(long, default_value = "media")]
        path: PathBuf,

        /// Maximum width for images
        #[arg(long, default_value_t = 1920)]
        max_width: u32,

        /// Maximum height for images
        #[arg(long, default_value_t = 1080)]
        max_height: u32,

        /// Keep a .backup copy of each original
        #[arg(long)]
        backup: bool,

        /// Show what would be done without doing it
        #[arg(long)]
        dry_run: bool,
    },

    /// Seed the synthetic ChitralHive catalog (categories, products, bundles)
    SeedCatalog {
        /// Catalog database
        #[arg(long, default_value = "chitralhive.db")]
        db: PathBuf,

        /// Cap products per category (0 = template counts)
        #[arg(long, default_value_t = 0)]
        limit: usize,

        /// PRNG seed for reproducible catalogs
        #[arg(long, default_value_t = 42)]
        seed: u64,
    },

    /// Clear all products and seed the curated Chitrali-site list
    SeedSites {
        /// Catalog database
        #[arg(long, default_value = "chitralhive.db")]
        db: PathBuf,
    },

    /// Scrape storefronts and seed their products
    SeedScraped {
        /// Catalog database
        #[arg(long, default_value = "chitralhive.db")]
        db: PathBuf,

        /// Which import profile to run
        #[arg(long, value_enum)]
        profile: Profile,

        /// YAML file overriding the profile's source URLs
        #[arg(long)]
        config: Option<PathBuf>,

        /// Folder product images are saved under
        #[arg(long, default_value = "media")]
        media_dir: PathBuf,

        /// Record remote image URLs instead of downloading
        #[arg(long)]
        no_download: bool,

        /// Scrape and report without writing to the catalog
        #[arg(long)]
        dry_run: bool,
    },

    /// Configure homepage sections, boxes, and section sequences
    SetupHomepage {
        /// Catalog database
        #[arg(long, default_value = "chitralhive.db")]
        db: PathBuf,

        /// Clear existing layout rows before setting up
        #[arg(long)]
        clear: bool,
    },

    /// Point one homepage section at a category
    SetSection {
        /// Catalog database
        #[arg(long, default_value = "chitralhive.db")]
        db: PathBuf,

        /// Section sequence number
        #[arg(long)]
        sequence: i64,

        /// Category slug
        #[arg(long)]
        slug: String,
    },

    /// Rewrite product SEO fields from the templates
    UpdateSeo {
        /// Catalog database
        #[arg(long, default_value = "chitralhive.db")]
        db: PathBuf,

        /// Print changes without saving
        #[arg(long)]
        dry_run: bool,

        /// Limit number of items processed (0 = all)
        #[arg(long, default_value_t = 0)]
        limit: usize,

        /// Only update items missing description/meta fields
        #[arg(long)]
        only_missing: bool,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profile {
    Honey,
    DryFruits,
}

/// Dispatch a CLI command.
pub fn dispatch(cmd: Commands) -> Result<(), String> {
    match cmd {
        Commands::OptimizeImages {
            path,
            max_width,
            max_height,
            backup,
            dry_run,
        } => cmd_optimize_images(path, max_width, max_height, backup, dry_run),
        Commands::SeedCatalog { db, limit, seed } => cmd_seed_catalog(&db, limit, seed),
        Commands::SeedSites { db } => cmd_seed_sites(&db),
        Commands::SeedScraped {
            db,
            profile,
            config,
            media_dir,
            no_download,
            dry_run,
        } => cmd_seed_scraped(&db, profile, config.as_deref(), media_dir, no_download, dry_run),
        Commands::SetupHomepage { db, clear } => cmd_setup_homepage(&db, clear),
        Commands::SetSection { db, sequence, slug } => cmd_set_section(&db, sequence, &slug),
        Commands::UpdateSeo {
            db,
            dry_run,
            limit,
            only_missing,
        } => cmd_update_seo(&db, dry_run, limit, only_missing),
    }
}

fn cmd_optimize_images(
    path: PathBuf,
    max_width: u32,
    max_height: u32,
    backup: bool,
    dry_run: bool,
) -> Result<(), String> {
    optimize::run(&optimize::OptimizeOptions {
        path,
        max_width,
        max_height,
        backup,
        dry_run,
    })
    .map(|_| ())
}

fn cmd_seed_catalog(db: &Path, limit: usize, seed: u64) -> Result<(), String> {
    let store = Store::open(db)?;
    println!("Seeding ChitralHive catalog...");
    let summary = seeder::seed_catalog(&store, limit, seed)?;
    println!();
    println!("Successfully created:");
    println!("   categories: {}", summary.categories);
    println!("   products: {}", summary.products);
    println!("   bundles: {}", summary.bundles);
    Ok(())
}

fn cmd_seed_sites(db: &Path) -> Result<(), String> {
    let store = Store::open(db)?;
    let created = sites::run(&store)?;
    println!("Created {} products.", created);
    Ok(())
}

fn cmd_seed_scraped(
    db: &Path,
    profile: Profile,
    config_path: Option<&Path>,
    media_dir: PathBuf,
    no_download: bool,
    dry_run: bool,
) -> Result<(), String> {
    let config = match config_path {
        Some(path) => {
            let config = sources::parse_sources_file(path)?;
            let errors = sources::validate_sources(&config);
            if !errors.is_empty() {
                for e in &errors {
                    eprintln!("  ERROR: {}", e);
                }
                return Err(format!("{} config error(s)", errors.len()));
            }
            Some(config)
        }
        None => None,
    };

    let store = Store::open(db)?;
    let fetcher = Fetcher::new()?;
    let profile = match profile {
        Profile::Honey => scrape_seed::honey_profile(),
        Profile::DryFruits => scrape_seed::dry_fruits_profile(),
    };
    let opts = scrape_seed::RunOptions {
        media_dir,
        download_images: !no_download,
        dry_run,
    };

    let summary = scrape_seed::run(&store, &fetcher, &profile, config.as_ref(), &opts)?;
    println!(
        "Fetched {} products, created {}.",
        summary.fetched, summary.created
    );
    Ok(())
}

fn cmd_setup_homepage(db: &Path, clear: bool) -> Result<(), String> {
    let store = Store::open(db)?;
    println!("Setting up home page sections...");
    let summary = homepage::setup(&store, clear)?;
    println!();
    println!("Successfully set up:");
    println!("   boxes: {}", summary.boxes);
    println!("   section sequences: {}", summary.sections);
    println!("Home page sections are now configured.");
    Ok(())
}

fn cmd_set_section(db: &Path, sequence: i64, slug: &str) -> Result<(), String> {
    let store = Store::open(db)?;
    homepage::set_section(&store, sequence, slug)
}

fn cmd_update_seo(db: &Path, dry_run: bool, limit: usize, only_missing: bool) -> Result<(), String> {
    let store = Store::open(db)?;
    seo_update::run(
        &store,
        &seo_update::UpdateOptions {
            dry_run,
            limit,
            only_missing,
        },
    )
    .map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_db(dir: &tempfile::TempDir) -> PathBuf {
        dir.path().join("catalog.db")
    }

    #[test]
    fn seed_catalog_then_sites_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let db = temp_db(&dir);
        cmd_seed_catalog(&db, 1, 42).unwrap();

        // seed-sites only keeps products whose categories exist; the synthetic
        // catalog provides some of them (honey, apricots, wool, pickles, ...).
        cmd_seed_sites(&db).unwrap();
        let store = Store::open(&db).unwrap();
        assert!(store.count("item").unwrap() > 0);
        // The synthetic products were cleared, curated ids took their place.
        assert!(store.max_ext_pos_id_at_least(200000).unwrap().is_some());
        assert!(store.max_ext_pos_id_at_least(100000).unwrap().unwrap() >= 200000);
    }

    #[test]
    fn setup_homepage_via_dispatch() {
        let dir = tempfile::tempdir().unwrap();
        let db = temp_db(&dir);
        cmd_seed_catalog(&db, 1, 42).unwrap();
        dispatch(Commands::SetupHomepage { db: db.clone(), clear: false }).unwrap();
        let store = Store::open(&db).unwrap();
        assert_eq!(store.count("box_order").unwrap(), 10);
    }

    #[test]
    fn set_section_via_dispatch() {
        let dir = tempfile::tempdir().unwrap();
        let db = temp_db(&dir);
        cmd_seed_catalog(&db, 1, 42).unwrap();
        dispatch(Commands::SetSection {
            db: db.clone(),
            sequence: 2,
            slug: "chitrali-honey".to_string(),
        })
        .unwrap();
        let store = Store::open(&db).unwrap();
        assert_eq!(store.count("section_sequence").unwrap(), 1);
    }

    #[test]
    fn set_section_unknown_slug_errors() {
        let dir = tempfile::tempdir().unwrap();
        let db = temp_db(&dir);
        cmd_seed_catalog(&db, 1, 42).unwrap();
        let result = cmd_set_section(&db, 1, "missing-slug");
        assert!(result.is_err());
    }

    #[test]
    fn update_seo_dry_run_via_dispatch() {
        let dir = tempfile::tempdir().unwrap();
        let db = temp_db(&dir);
        cmd_seed_catalog(&db, 1, 42).unwrap();
        dispatch(Commands::UpdateSeo {
            db,
            dry_run: true,
            limit: 5,
            only_missing: false,
        })
        .unwrap();
    }

    #[test]
    fn optimize_images_missing_path_errors() {
        let result = cmd_optimize_images(PathBuf::from("/nonexistent"), 1920, 1080, false, false);
        assert!(result.is_err());
    }

    #[test]
    fn optimize_images_dry_run_on_empty_dir() {
        let dir = tempfile::tempdir().unwrap();
        cmd_optimize_images(dir.path().to_path_buf(), 1920, 1080, false, true).unwrap();
    }

    #[test]
    fn seed_scraped_rejects_invalid_config() {
        let dir = tempfile::tempdir().unwrap();
        let db = temp_db(&dir);
        let config = dir.path().join("sources.yaml");
        std::fs::write(&config, "profiles:\n  honey:\n    sources: []\n").unwrap();
        let result = cmd_seed_scraped(
            &db,
            Profile::Honey,
            Some(&config),
            dir.path().join("media"),
            true,
            true,
        );
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("config error"));
    }

    #[test]
    fn seed_scraped_missing_config_file_errors() {
        let dir = tempfile::tempdir().unwrap();
        let db = temp_db(&dir);
        let result = cmd_seed_scraped(
            &db,
            Profile::DryFruits,
            Some(&dir.path().join("missing.yaml")),
            dir.path().join("media"),
            true,
            true,
        );
        assert!(result.is_err());
    }
}
