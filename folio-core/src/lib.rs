//! Core library for the folio portfolio site.
//!
//! Holds the content model (posts and projects), the text and facet
//! filters, and the incremental list view that backs the blog and
//! projects listings: a search box plus an infinite-scroll reveal.

pub mod catalog;
pub mod config;
pub mod error;
pub mod facets;
pub mod filter;
pub mod format;
pub mod links;
pub mod model;
pub mod pagination;
pub mod reveal;
pub mod view;

pub use catalog::Catalog;
pub use config::{ListsConfig, SiteConfig};
pub use error::{FolioError, Result};
pub use facets::{Facets, TagCount};
pub use filter::{filter_items, matches};
pub use format::DateStyle;
pub use links::LinkBuilder;
pub use model::{Identity, ItemCard, Listable, Post, Project, ProjectStatus, ProjectType};
pub use pagination::{Page, Pagination};
pub use reveal::{ChannelTrigger, Immediate, PageFetch, PageRequest, RevealTrigger, SimulatedLatency, TriggerHandle};
pub use view::{ListSettings, ListView, RevealOutcome, ViewMode};
