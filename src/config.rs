//! Site configuration module.
//!
//! Handles loading and validating `config.toml` from the site directory.
//! Configuration is sparse: stock defaults are the base layer and a user
//! file overrides only the keys it names.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! base_url = "https://imgaize.app"   # Canonical site origin, no trailing slash
//! site_name = "Imgaize"              # Product name in page titles
//!
//! [sitemap]
//! # lastmod = "2026-08-01"           # Emitted verbatim; bump on deploy
//! ```
//!
//! `lastmod` is deliberately operator-supplied rather than computed from the
//! clock: sitemap output must be deterministic for identical inputs.
//!
//! Unknown keys are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Site configuration loaded from `config.toml`.
///
/// All fields have working defaults. User config files need only specify
/// the values they want to override. Unknown keys are rejected.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Canonical site origin used for sitemap `<loc>` entries.
    /// Validation strips a trailing slash so slug joining stays uniform.
    pub base_url: String,
    /// Product name, appears in the `| {site_name}` title suffix.
    pub site_name: String,
    /// Sitemap entry settings.
    pub sitemap: SitemapConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_url: "https://imgaize.app".to_string(),
            site_name: "Imgaize".to_string(),
            sitemap: SitemapConfig::default(),
        }
    }
}

/// Sitemap entry settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SitemapConfig {
    /// `<lastmod>` date (`YYYY-MM-DD`) for every entry. Omitted from the
    /// document when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lastmod: Option<String>,
}

impl SiteConfig {
    /// Validate config values and normalize the base URL.
    pub fn validate(&mut self) -> Result<(), ConfigError> {
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ConfigError::Validation(
                "base_url must start with http:// or https://".into(),
            ));
        }
        while self.base_url.ends_with('/') {
            self.base_url.pop();
        }
        if self.base_url.len() <= "https://".len() {
            return Err(ConfigError::Validation("base_url has no host".into()));
        }
        if self.site_name.trim().is_empty() {
            return Err(ConfigError::Validation("site_name must not be empty".into()));
        }
        if let Some(date) = &self.sitemap.lastmod {
            if !is_iso_date(date) {
                return Err(ConfigError::Validation(format!(
                    "sitemap.lastmod must be YYYY-MM-DD, got {date:?}"
                )));
            }
        }
        Ok(())
    }
}

/// Shape check only (`YYYY-MM-DD`); calendar validity is the operator's
/// problem, the value is emitted verbatim.
fn is_iso_date(s: &str) -> bool {
    let b = s.as_bytes();
    b.len() == 10
        && b[4] == b'-'
        && b[7] == b'-'
        && b.iter()
            .enumerate()
            .all(|(i, c)| if i == 4 || i == 7 { true } else { c.is_ascii_digit() })
}

/// Returns the stock default config as a `toml::Value::Table`, the base
/// layer user overrides merge onto.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(SiteConfig::default()).expect("default config must serialize")
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load config from `config.toml` in the given directory.
///
/// Merges user values on top of stock defaults, rejects unknown keys,
/// and validates the result. Uses pure defaults when no file exists.
pub fn load_config(root: &Path) -> Result<SiteConfig, ConfigError> {
    let mut merged = stock_defaults_value();
    let config_path = root.join("config.toml");
    if config_path.exists() {
        let content = fs::read_to_string(&config_path)?;
        let overlay: toml::Value = toml::from_str(&content)?;
        merged = merge_toml(merged, overlay);
    }
    let mut config: SiteConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Returns a fully-commented stock `config.toml` with all keys explained.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Imgaize Site Configuration
# ==========================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults. Unknown keys will cause an error.

# Canonical site origin. Used to build sitemap <loc> URLs.
# A trailing slash is stripped on load.
base_url = "https://imgaize.app"

# Product name. Appears as the "| Imgaize" suffix in page titles.
site_name = "Imgaize"

# ---------------------------------------------------------------------------
# Sitemap
# ---------------------------------------------------------------------------
[sitemap]
# Last-modified date (YYYY-MM-DD) stamped on every sitemap entry.
# Bump this when you deploy; omit it to leave <lastmod> out entirely.
# Never computed automatically - builds must be reproducible.
# lastmod = "2026-08-01"
"##
}
