//! Link building for item targets.

use serde::{Deserialize, Serialize};

/// Turns item targets into hrefs
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkBuilder {
    /// Public site origin, e.g. `https://example.com`
    pub site_url: String,
    /// Prefix for deployments under a sub-path, e.g. `/portfolio`
    pub base_path: String,
}

fn is_external(target: &str) -> bool {
    target.starts_with("http://") || target.starts_with("https://")
}

impl LinkBuilder {
    pub fn new(site_url: impl Into<String>, base_path: impl Into<String>) -> Self {
        Self {
            site_url: site_url.into(),
            base_path: base_path.into(),
        }
    }

    /// Site-relative href. External targets pass through.
    pub fn href(&self, target: &str) -> String {
        if is_external(target) {
            return target.to_string();
        }

        let base = self.base_path.trim_end_matches('/');
        let path = target.trim_start_matches('/');
        format!("{}/{}", base, path)
    }

    /// Fully-qualified URL. External targets pass through.
    pub fn absolute(&self, target: &str) -> String {
        if is_external(target) {
            return target.to_string();
        }
        format!("{}{}", self.site_url.trim_end_matches('/'), self.href(target))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relative_targets_get_base_path() {
        let links = LinkBuilder::new("https://example.com", "");
        assert_eq!(links.href("blog/hello"), "/blog/hello");

        let links = LinkBuilder::new("https://example.com/", "/portfolio/");
        assert_eq!(links.href("/blog/hello"), "/portfolio/blog/hello");
        assert_eq!(links.absolute("blog/hello"), "https://example.com/portfolio/blog/hello");
    }

    #[test]
    fn external_targets_pass_through() {
        let links = LinkBuilder::new("https://example.com", "/portfolio");
        let gh = "https://github.com/example/weather";
        assert_eq!(links.href(gh), gh);
        assert_eq!(links.absolute(gh), gh);
    }
}
