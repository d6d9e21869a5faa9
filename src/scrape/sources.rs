//! Scrape-source configuration: optional YAML file overriding the built-in
//! source lists per profile.
//!
//! ```yaml
//! profiles:
//!   honey:
//!     sources:
//!       - https://www.shubinak.com/collections/honey
//!   dry-fruits:
//!     sources:
//!       - https://www.northendryfruits.com/shop
//! ```

use indexmap::IndexMap;
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Default, Deserialize)]
pub struct SourcesConfig {
    #[serde(default)]
    pub profiles: IndexMap<String, ProfileSources>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ProfileSources {
    #[serde(default)]
    pub sources: Vec<String>,
}

/// Parse a sources file from disk.
pub fn parse_sources_file(path: &Path) -> Result<SourcesConfig, String> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| format!("failed to read {}: {}", path.display(), e))?;
    parse_sources(&content)
}

/// Parse a sources file from a string.
pub fn parse_sources(yaml: &str) -> Result<SourcesConfig, String> {
    serde_yaml_ng::from_str(yaml).map_err(|e| format!("YAML parse error: {}", e))
}

/// Validate a parsed config. Returns a list of error messages (empty = valid).
pub fn validate_sources(config: &SourcesConfig) -> Vec<String> {
    let mut errors = Vec::new();
    for (profile, entry) in &config.profiles {
        if entry.sources.is_empty() {
            errors.push(format!("profile '{}' has no sources", profile));
        }
        for url in &entry.sources {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                errors.push(format!(
                    "profile '{}': source '{}' is not an http(s) URL",
                    profile, url
                ));
            }
        }
    }
    errors
}

/// Sources for one profile from an optional config file; `None` when the file
/// does not define that profile.
pub fn profile_sources(
    config: Option<&SourcesConfig>,
    profile: &str,
) -> Option<Vec<String>> {
    config
        .and_then(|c| c.profiles.get(profile))
        .map(|entry| entry.sources.clone())
}
