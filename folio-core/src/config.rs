//! Site configuration.
//!
//! Loaded once at startup and passed into whatever needs it; nothing
//! reads it from a global.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{FolioError, Result};
use crate::links::LinkBuilder;
use crate::reveal::SimulatedLatency;
use crate::view::{ListSettings, POSTS_PAGE_SIZE, PROJECTS_PAGE_SIZE};

/// Environment override for `base_path`
pub const BASE_PATH_ENV: &str = "FOLIO_BASE_PATH";

/// Site metadata plus listing behaviour
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub title: String,
    pub author: String,
    pub description: String,
    pub site_url: String,
    pub locale: String,
    pub base_path: String,
    pub lists: ListsConfig,
}

/// `[lists]` table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListsConfig {
    pub posts_page_size: usize,
    pub projects_page_size: usize,
    pub reveal_latency_ms: u64,
    pub show_drafts: bool,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Portfolio".to_string(),
            author: String::new(),
            description: String::new(),
            site_url: "http://localhost:3000".to_string(),
            locale: "en-US".to_string(),
            base_path: String::new(),
            lists: ListsConfig::default(),
        }
    }
}

impl Default for ListsConfig {
    fn default() -> Self {
        Self {
            posts_page_size: POSTS_PAGE_SIZE,
            projects_page_size: PROJECTS_PAGE_SIZE,
            reveal_latency_ms: 500,
            show_drafts: false,
        }
    }
}

impl ListsConfig {
    pub fn posts(&self) -> ListSettings {
        ListSettings::new(self.posts_page_size)
    }

    pub fn projects(&self) -> ListSettings {
        ListSettings::new(self.projects_page_size)
    }

    pub fn reveal_latency(&self) -> SimulatedLatency {
        SimulatedLatency::from_millis(self.reveal_latency_ms)
    }
}

impl SiteConfig {
    /// Default config file: ~/.folio/config.toml
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".folio/config.toml")
    }

    /// Load config.
    ///
    /// An explicit path must exist. Without one, the default location is
    /// used if present and built-in defaults otherwise.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) => {
                if !path.exists() {
                    return Err(FolioError::path_not_found(path));
                }
                Self::from_file(path)?
            }
            None => {
                let default_path = Self::config_path();
                if default_path.exists() {
                    Self::from_file(&default_path)?
                } else {
                    debug!(path = %default_path.display(), "no config file, using defaults");
                    Self::default()
                }
            }
        };

        if let Ok(base_path) = env::var(BASE_PATH_ENV) {
            config.base_path = base_path;
        }

        config.validate()?;
        Ok(config)
    }

    /// Parse a config file without env overrides or validation
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)
            .map_err(|e| FolioError::toml(path.display().to_string(), e))?;
        debug!(path = %path.display(), "loaded site config");
        Ok(config)
    }

    /// Reject settings the list views cannot work with
    pub fn validate(&self) -> Result<()> {
        if self.lists.posts_page_size == 0 {
            return Err(FolioError::config("lists.posts_page_size must be at least 1"));
        }
        if self.lists.projects_page_size == 0 {
            return Err(FolioError::config("lists.projects_page_size must be at least 1"));
        }
        Ok(())
    }

    /// Link builder for this site
    pub fn links(&self) -> LinkBuilder {
        LinkBuilder::new(self.site_url.clone(), self.base_path.clone())
    }

    /// Serialise as TOML (used by `folio config init`)
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| FolioError::config(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_match_listing_page_sizes() {
        let config = SiteConfig::default();
        assert_eq!(config.lists.posts().page_size(), 10);
        assert_eq!(config.lists.projects().page_size(), 6);
        assert_eq!(config.lists.reveal_latency().delay().as_millis(), 500);
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "title = \"Jane Doe | Portfolio\"\nsite_url = \"https://jane.dev\"\n\n[lists]\nprojects_page_size = 9"
        )
        .unwrap();

        let config = SiteConfig::from_file(file.path()).unwrap();
        assert_eq!(config.title, "Jane Doe | Portfolio");
        assert_eq!(config.lists.projects_page_size, 9);
        assert_eq!(config.lists.posts_page_size, 10);
        assert_eq!(config.locale, "en-US");
    }

    #[test]
    fn missing_explicit_path_is_an_error() {
        let err = SiteConfig::load(Some(Path::new("/definitely/not/here.toml"))).unwrap_err();
        assert!(matches!(err, FolioError::PathNotFound { .. }));
    }

    #[test]
    fn zero_page_size_fails_validation() {
        let mut config = SiteConfig::default();
        config.lists.posts_page_size = 0;
        assert!(matches!(config.validate(), Err(FolioError::Config { .. })));
    }

    #[test]
    fn toml_round_trip_keeps_lists_table() {
        let config = SiteConfig::default();
        let text = config.to_toml().unwrap();
        assert!(text.contains("[lists]"));
        let parsed: SiteConfig = toml::from_str(&text).unwrap();
        assert_eq!(parsed, config);
    }
}
