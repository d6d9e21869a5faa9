//! Blocking HTTP plumbing: page fetches, JSON feeds, and image downloads
//! with magic-byte sniffing.

use std::path::Path;
use std::time::Duration;

const USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 \
                          (KHTML, like Gecko) Chrome/121.0 Safari/537.36";
const FETCH_TIMEOUT: Duration = Duration::from_secs(25);
const DOWNLOAD_TIMEOUT: Duration = Duration::from_secs(30);

/// Minimum byte size below which a downloaded image is treated as junk
/// (error pages, tracking pixels).
const MIN_IMAGE_BYTES: usize = 1024;

/// Blocking HTTP client wrapper shared by the scraping commands.
pub struct Fetcher {
    client: reqwest::blocking::Client,
}

impl Fetcher {
    pub fn new() -> Result<Self, String> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(FETCH_TIMEOUT)
            .build()
            .map_err(|e| format!("cannot build HTTP client: {}", e))?;
        Ok(Fetcher { client })
    }

    /// GET a page body. Non-200 statuses are errors.
    pub fn get_text(&self, url: &str) -> Result<String, String> {
        let resp = self
            .client
            .get(url)
            .send()
            .map_err(|e| format!("request failed for {}: {}", url, e))?;
        if !resp.status().is_success() {
            return Err(format!("HTTP {} for {}", resp.status(), url));
        }
        resp.text().map_err(|e| format!("cannot read body of {}: {}", url, e))
    }

    /// GET and deserialize a JSON payload.
    pub fn get_json<T: serde::de::DeserializeOwned>(&self, url: &str) -> Result<T, String> {
        let resp = self
            .client
            .get(url)
            .send()
            .map_err(|e| format!("request failed for {}: {}", url, e))?;
        if !resp.status().is_success() {
            return Err(format!("HTTP {} for {}", resp.status(), url));
        }
        resp.json().map_err(|e| format!("invalid JSON from {}: {}", url, e))
    }

    /// Download a product image to `{media_dir}/item_image/{ext_pos_id}{ext}`.
    /// Returns the media-relative path (`item_image/...`).
    ///
    /// The extension is picked from magic bytes, then Content-Type, then the
    /// URL path. Bodies that are neither image-shaped nor image-typed, and
    /// bodies under 1 KiB, are rejected.
    pub fn download_image(
        &self,
        url: &str,
        referer: Option<&str>,
        media_dir: &Path,
        ext_pos_id: i64,
    ) -> Result<String, String> {
        let url = absolutize(url, referer)?;
        let resp = self
            .client
            .get(&url)
            .timeout(DOWNLOAD_TIMEOUT)
            .header("Referer", referer.unwrap_or(&url))
            .header("Accept", "image/webp,image/apng,image/*,*/*;q=0.8")
            .send()
            .map_err(|e| format!("image request failed for {}: {}", url, e))?;
        if !resp.status().is_success() {
            return Err(format!("HTTP {} for image {}", resp.status(), url));
        }

        let content_type = resp
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("")
            .to_lowercase();
        let body = resp
            .bytes()
            .map_err(|e| format!("cannot read image body of {}: {}", url, e))?;

        if sniff_image_ext(&body).is_none() && !content_type_is_image(&content_type) {
            return Err(format!("not an image: {}", url));
        }
        if body.len() < MIN_IMAGE_BYTES {
            return Err(format!("image too small ({} bytes): {}", body.len(), url));
        }

        let ext = sniff_image_ext(&body)
            .or_else(|| ext_from_content_type(&content_type))
            .or_else(|| ext_from_url(&url))
            .unwrap_or(".jpg");

        let file_name = format!("{}{}", ext_pos_id, ext);
        let target_dir = media_dir.join("item_image");
        std::fs::create_dir_all(&target_dir)
            .map_err(|e| format!("cannot create {}: {}", target_dir.display(), e))?;
        let file_path = target_dir.join(&file_name);
        std::fs::write(&file_path, &body)
            .map_err(|e| format!("cannot write {}: {}", file_path.display(), e))?;

        Ok(format!("item_image/{}", file_name))
    }
}

/// Resolve a relative image URL against the page it was found on.
fn absolutize(url: &str, referer: Option<&str>) -> Result<String, String> {
    if url.starts_with("http://") || url.starts_with("https://") {
        return Ok(url.to_string());
    }
    match referer {
        Some(base) => Ok(super::resolve_url(base, url)),
        None => Err(format!("relative image URL without referer: {}", url)),
    }
}

/// Recognize JPEG, PNG, WebP, and GIF headers.
pub fn sniff_image_ext(bytes: &[u8]) -> Option<&'static str> {
    if bytes.starts_with(b"\xff\xd8\xff") {
        return Some(".jpg");
    }
    if bytes.starts_with(b"\x89PNG\r\n\x1a\n") {
        return Some(".png");
    }
    if bytes.len() >= 12 && bytes.starts_with(b"RIFF") && &bytes[8..12] == b"WEBP" {
        return Some(".webp");
    }
    if bytes.starts_with(b"GIF87a") || bytes.starts_with(b"GIF89a") {
        return Some(".gif");
    }
    None
}

fn content_type_is_image(content_type: &str) -> bool {
    ["image/", "jpeg", "jpg", "png", "webp", "gif"]
        .iter()
        .any(|marker| content_type.contains(marker))
}

fn ext_from_content_type(content_type: &str) -> Option<&'static str> {
    if content_type.contains("png") {
        Some(".png")
    } else if content_type.contains("webp") {
        Some(".webp")
    } else if content_type.contains("jpeg") || content_type.contains("jpg") {
        Some(".jpg")
    } else if content_type.contains("gif") {
        Some(".gif")
    } else {
        None
    }
}

fn ext_from_url(url: &str) -> Option<&'static str> {
    let path = url.split('?').next().unwrap_or(url).to_lowercase();
    if path.ends_with(".png") {
        Some(".png")
    } else if path.ends_with(".webp") {
        Some(".webp")
    } else if path.ends_with(".jpg") || path.ends_with(".jpeg") {
        Some(".jpg")
    } else if path.ends_with(".gif") {
        Some(".gif")
    } else {
        None
    }
}
