//! Content catalog loading.
//!
//! A catalog is one file holding every post and project, as `.toml` or
//! `.json`. Dates are strings, or native dates in TOML. Loading drops
//! drafts (unless asked not to) and sorts each collection newest first,
//! which is the order the list views expect to receive.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{FolioError, Result};
use crate::model::{sort_newest_first, Post, Project};

/// All site content
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub posts: Vec<Post>,
    #[serde(default)]
    pub projects: Vec<Project>,
}

impl Catalog {
    /// Default catalog location: ~/.folio/catalog.toml
    pub fn default_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".folio/catalog.toml")
    }

    /// Read, filter and sort a catalog file
    pub fn load(path: &Path, show_drafts: bool) -> Result<Self> {
        if !path.exists() {
            return Err(FolioError::path_not_found(path));
        }

        let content = fs::read_to_string(path)?;
        let context = path.display().to_string();
        let catalog = match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Self::from_toml_str(&content, &context)?,
            Some("json") => Self::from_json_str(&content, &context)?,
            _ => return Err(FolioError::unsupported_format(path)),
        };

        let catalog = catalog.prepare(show_drafts);
        info!(
            path = %path.display(),
            posts = catalog.posts.len(),
            projects = catalog.projects.len(),
            "catalog loaded"
        );
        Ok(catalog)
    }

    pub fn from_toml_str(content: &str, context: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| FolioError::toml(context, e))
    }

    pub fn from_json_str(content: &str, context: &str) -> Result<Self> {
        serde_json::from_str(content).map_err(|e| FolioError::json(context, e))
    }

    /// Drop drafts and put both collections in display order
    pub fn prepare(mut self, show_drafts: bool) -> Self {
        if !show_drafts {
            let before = self.posts.len();
            self.posts.retain(|post| !post.draft);
            debug!(dropped = before - self.posts.len(), "filtered draft posts");
        }
        sort_newest_first(&mut self.posts);
        sort_newest_first(&mut self.projects);
        self
    }
}
