//! Batch image optimization: PNG/JPEG to lossless WebP with bounded
//! dimensions, aspect ratio preserved, transparency flattened onto white.
//!
//! A WebP sibling that is already smaller than its source counts as done and
//! is skipped. Failures are per-image: log and move on.

use glob::glob;
use image::imageops::FilterType;
use image::{DynamicImage, ExtendedColorType, RgbImage};
use std::path::{Path, PathBuf};

const IMAGE_PATTERNS: [&str; 6] = ["*.png", "*.PNG", "*.jpg", "*.JPG", "*.jpeg", "*.JPEG"];

#[derive(Debug, Clone)]
pub struct OptimizeOptions {
    pub path: PathBuf,
    pub max_width: u32,
    pub max_height: u32,
    pub backup: bool,
    pub dry_run: bool,
}

#[derive(Debug, Default, Clone, Copy)]
pub struct OptimizeSummary {
    pub optimized: usize,
    pub skipped: usize,
    pub original_bytes: u64,
    pub optimized_bytes: u64,
}

/// Human-readable byte size.
pub fn format_size(bytes: u64) -> String {
    let mut size = bytes as f64;
    for unit in ["B", "KB", "MB", "GB"] {
        if size < 1024.0 {
            return format!("{:.2} {}", size, unit);
        }
        size /= 1024.0;
    }
    format!("{:.2} TB", size)
}

/// All PNG/JPEG files under `root`, recursively, in sorted order.
pub fn find_images(root: &Path) -> Result<Vec<PathBuf>, String> {
    let mut files = Vec::new();
    for pattern in IMAGE_PATTERNS {
        let full = format!("{}/**/{}", root.display(), pattern);
        let paths = glob(&full).map_err(|e| format!("bad glob pattern {}: {}", full, e))?;
        for entry in paths {
            match entry {
                Ok(path) => files.push(path),
                Err(e) => println!("  cannot read {}: {}", e.path().display(), e),
            }
        }
    }
    files.sort();
    files.dedup();
    Ok(files)
}

fn webp_sibling(path: &Path) -> PathBuf {
    path.with_extension("webp")
}

fn backup_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_os_string();
    name.push(".backup");
    PathBuf::from(name)
}

/// Flatten any alpha channel onto a white background.
fn flatten_to_rgb(img: DynamicImage) -> RgbImage {
    if !img.color().has_alpha() {
        return img.to_rgb8();
    }
    let rgba = img.to_rgba8();
    let (width, height) = rgba.dimensions();
    let mut rgb = RgbImage::new(width, height);
    for (x, y, pixel) in rgba.enumerate_pixels() {
        let alpha = u32::from(pixel[3]);
        let blend = |c: u8| ((u32::from(c) * alpha + 255 * (255 - alpha)) / 255) as u8;
        rgb.put_pixel(x, y, image::Rgb([blend(pixel[0]), blend(pixel[1]), blend(pixel[2])]));
    }
    rgb
}

/// Optimize one image to its WebP sibling. Returns the output size.
fn optimize_one(path: &Path, opts: &OptimizeOptions) -> Result<u64, String> {
    let img = image::open(path).map_err(|e| format!("cannot open {}: {}", path.display(), e))?;

    let (orig_w, orig_h) = (img.width(), img.height());
    let img = if orig_w > opts.max_width || orig_h > opts.max_height {
        let resized = img.resize(opts.max_width, opts.max_height, FilterType::Lanczos3);
        println!(
            "   resized from {}x{} to {}x{}",
            orig_w,
            orig_h,
            resized.width(),
            resized.height()
        );
        resized
    } else {
        img
    };

    if opts.backup {
        let backup = backup_path(path);
        if !backup.exists() {
            std::fs::copy(path, &backup)
                .map_err(|e| format!("cannot back up {}: {}", path.display(), e))?;
        }
    }

    let rgb = flatten_to_rgb(img);
    let out_path = webp_sibling(path);
    let file = std::fs::File::create(&out_path)
        .map_err(|e| format!("cannot create {}: {}", out_path.display(), e))?;
    let writer = std::io::BufWriter::new(file);
    let encoder = image::codecs::webp::WebPEncoder::new_lossless(writer);
    encoder
        .encode(rgb.as_raw(), rgb.width(), rgb.height(), ExtendedColorType::Rgb8)
        .map_err(|e| format!("cannot encode {}: {}", out_path.display(), e))?;

    std::fs::metadata(&out_path)
        .map(|m| m.len())
        .map_err(|e| format!("cannot stat {}: {}", out_path.display(), e))
}

/// Run the optimization pass. Errors on a missing root path; everything past
/// that is per-image best effort.
pub fn run(opts: &OptimizeOptions) -> Result<OptimizeSummary, String> {
    if !opts.path.exists() {
        return Err(format!("path does not exist: {}", opts.path.display()));
    }

    println!("Scanning for images in: {}", opts.path.display());
    let images = find_images(&opts.path)?;
    if images.is_empty() {
        println!("No images found to optimize");
        return Ok(OptimizeSummary::default());
    }
    println!("Found {} images to optimize", images.len());

    let mut summary = OptimizeSummary::default();

    for path in &images {
        let original_size = match std::fs::metadata(path) {
            Ok(m) => m.len(),
            Err(e) => {
                println!("  error reading {}: {}", path.display(), e);
                continue;
            }
        };
        summary.original_bytes += original_size;

        let webp = webp_sibling(path);
        if let Ok(meta) = std::fs::metadata(&webp) {
            if meta.len() < original_size {
                println!("  skipping {} (WebP version exists)", file_name(path));
                summary.skipped += 1;
                continue;
            }
        }

        if opts.dry_run {
            println!(
                "  would optimize: {} ({})",
                file_name(path),
                format_size(original_size)
            );
            continue;
        }

        match optimize_one(path, opts) {
            Ok(optimized_size) => {
                summary.optimized_bytes += optimized_size;
                summary.optimized += 1;

                let savings = original_size.saturating_sub(optimized_size);
                let percent = if original_size > 0 {
                    savings as f64 / original_size as f64 * 100.0
                } else {
                    0.0
                };
                println!(
                    "  {} -> {}\n   original: {} -> optimized: {}\n   saved: {} ({:.1}%)",
                    file_name(path),
                    file_name(&webp),
                    format_size(original_size),
                    format_size(optimized_size),
                    format_size(savings),
                    percent
                );
                if optimized_size < original_size * 7 / 10 {
                    println!("   consider removing {} to save space", file_name(path));
                }
            }
            Err(e) => {
                println!("  error optimizing {}: {}", file_name(path), e);
                continue;
            }
        }
    }

    print_summary(&summary, opts.dry_run);
    Ok(summary)
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}

fn print_summary(summary: &OptimizeSummary, dry_run: bool) {
    println!("{}", "=".repeat(60));
    if dry_run {
        println!("DRY RUN - no changes made");
    } else {
        println!("Optimization summary:");
        println!("   images optimized: {}", summary.optimized);
        println!("   images skipped: {}", summary.skipped);
        if summary.optimized > 0 {
            println!("   total original size: {}", format_size(summary.original_bytes));
            println!("   total optimized size: {}", format_size(summary.optimized_bytes));
            let saved = summary.original_bytes.saturating_sub(summary.optimized_bytes);
            let percent = if summary.original_bytes > 0 {
                saved as f64 / summary.original_bytes as f64 * 100.0
            } else {
                0.0
            };
            println!("   total saved: {} ({:.1}%)", format_size(saved), percent);
        }
    }
    println!("{}", "=".repeat(60));
}
