//! Project facets: selected tag, type and status.
//!
//! Facets narrow the listing on top of the free-text query and are
//! AND-combined with it.

use serde::Serialize;

use crate::model::{Listable, ProjectStatus, ProjectType};

/// Current facet selection. `None` means "all".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Facets {
    pub tag: Option<String>,
    pub project_type: Option<ProjectType>,
    pub status: Option<ProjectStatus>,
}

impl Facets {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    pub fn with_type(mut self, project_type: ProjectType) -> Self {
        self.project_type = Some(project_type);
        self
    }

    pub fn with_status(mut self, status: ProjectStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Whether any facet is selected
    pub fn is_active(&self) -> bool {
        self.tag.is_some() || self.project_type.is_some() || self.status.is_some()
    }

    /// Whether `item` passes every selected facet.
    ///
    /// Tag selection is an exact match against the item's tags.
    pub fn accepts<T: Listable>(&self, item: &T) -> bool {
        let tag_ok = match &self.tag {
            Some(tag) => item.tags().iter().any(|t| t == tag),
            None => true,
        };
        let type_ok = self.project_type.is_none() || item.project_type() == self.project_type;
        let status_ok = self.status.is_none() || item.status() == self.status;

        tag_ok && type_ok && status_ok
    }
}

/// One entry of the tag sidebar: "Python (3)"
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagCount {
    pub tag: String,
    pub count: usize,
}

/// Count tags across items, in first-seen order.
pub fn tag_counts<T: Listable>(items: &[T]) -> Vec<TagCount> {
    let mut counts: Vec<TagCount> = Vec::new();

    for item in items {
        for tag in item.tags() {
            match counts.iter_mut().find(|c| &c.tag == tag) {
                Some(entry) => entry.count += 1,
                None => counts.push(TagCount {
                    tag: tag.clone(),
                    count: 1,
                }),
            }
        }
    }

    counts
}
