//! Incremental list view: search filtering plus progressive reveal.
//!
//! A view owns a read-only collection, a free-text query, optional facets
//! and a reveal cursor (`visible_count`). With no filter active it shows
//! the first `visible_count` items and grows by one page each time the
//! scroll sentinel comes into view. With a filter active it shows every
//! match at once.
//!
//! Query changes reset the cursor to the base page size, except when the
//! query is cleared: returning to browse mode keeps whatever was
//! revealed last.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::debug;

use crate::facets::Facets;
use crate::filter::matches_lowered;
use crate::model::{ItemCard, Listable};
use crate::reveal::{PageFetch, PageRequest};

/// Base page size for the blog listing
pub const POSTS_PAGE_SIZE: usize = 10;
/// Base page size for the projects listing
pub const PROJECTS_PAGE_SIZE: usize = 6;

/// Per-listing settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListSettings {
    page_size: usize,
}

impl ListSettings {
    /// Page size is clamped to at least 1
    pub fn new(page_size: usize) -> Self {
        Self {
            page_size: page_size.max(1),
        }
    }

    pub fn posts() -> Self {
        Self::new(POSTS_PAGE_SIZE)
    }

    pub fn projects() -> Self {
        Self::new(PROJECTS_PAGE_SIZE)
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }
}

/// What the view is currently doing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    /// No filter; reveal-gated
    Browsing,
    /// Filter active; every match is shown
    Searching,
    /// Browsing with a page reveal in flight
    Loading,
}

/// Result of a [`ListView::request_more`] call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealOutcome {
    /// A page was revealed
    Revealed { visible: usize },
    /// Another reveal was already running
    InFlight,
    /// Everything is already visible
    Exhausted,
    /// A filter is active, so the cursor does not apply
    Filtering,
    /// The view was torn down
    Unmounted,
}

#[derive(Debug)]
struct ViewState {
    query: String,
    facets: Facets,
    visible_count: usize,
    loading: bool,
    mounted: bool,
}

impl ViewState {
    fn is_filtering(&self) -> bool {
        !self.query.is_empty() || self.facets.is_active()
    }
}

/// Handle onto one list view. Clones share the same state.
#[derive(Clone)]
pub struct ListView<T> {
    items: Arc<[T]>,
    settings: ListSettings,
    fetcher: Arc<dyn PageFetch>,
    state: Arc<Mutex<ViewState>>,
}

impl<T: Listable> ListView<T> {
    /// Mount a view over `items`, which must already be in display order.
    pub fn new(items: impl Into<Arc<[T]>>, settings: ListSettings, fetcher: Arc<dyn PageFetch>) -> Self {
        let items = items.into();
        let visible_count = settings.page_size().min(items.len());
        debug!(total = items.len(), visible_count, "list view mounted");

        Self {
            items,
            settings,
            fetcher,
            state: Arc::new(Mutex::new(ViewState {
                query: String::new(),
                facets: Facets::default(),
                visible_count,
                loading: false,
                mounted: true,
            })),
        }
    }

    fn state(&self) -> MutexGuard<'_, ViewState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Items passing the query and facets, in source order
    fn filtered<'a>(&'a self, state: &'a ViewState) -> impl Iterator<Item = &'a T> + 'a {
        let needle = state.query.to_lowercase();
        self.items
            .iter()
            .filter(move |item| matches_lowered(*item, &needle) && state.facets.accepts(*item))
    }

    fn base_count(&self) -> usize {
        self.settings.page_size().min(self.items.len())
    }

    /// Update the search text.
    ///
    /// A changed, non-empty query restarts the reveal cursor at the base
    /// page size. Clearing the query leaves the cursor alone.
    pub fn set_query(&self, text: impl Into<String>) {
        let text = text.into();
        let base = self.base_count();
        let mut state = self.state();

        if state.query == text {
            return;
        }
        if !text.is_empty() {
            state.visible_count = base;
        }
        debug!(query = %text, visible_count = state.visible_count, "query changed");
        state.query = text;
    }

    /// Current search text
    pub fn query(&self) -> String {
        self.state().query.clone()
    }

    /// Replace the facet selection
    pub fn set_facets(&self, facets: Facets) {
        let mut state = self.state();
        if state.facets != facets {
            debug!(?facets, "facets changed");
            state.facets = facets;
        }
    }

    /// Current facet selection
    pub fn facets(&self) -> Facets {
        self.state().facets.clone()
    }

    /// Items to render right now.
    pub fn compute_visible(&self) -> Vec<T> {
        let state = self.state();

        if state.is_filtering() {
            self.filtered(&state).cloned().collect()
        } else {
            let end = state.visible_count.min(self.items.len());
            self.items[..end].to_vec()
        }
    }

    /// Render-ready cards for [`Self::compute_visible`]
    pub fn cards(&self) -> Vec<ItemCard> {
        self.compute_visible().iter().map(Listable::card).collect()
    }

    /// The full source collection
    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn mode(&self) -> ViewMode {
        let state = self.state();
        if state.is_filtering() {
            ViewMode::Searching
        } else if state.loading {
            ViewMode::Loading
        } else {
            ViewMode::Browsing
        }
    }

    pub fn settings(&self) -> ListSettings {
        self.settings
    }

    pub fn visible_count(&self) -> usize {
        self.state().visible_count
    }

    pub fn total_count(&self) -> usize {
        self.items.len()
    }

    /// Number of items passing the current filter (all of them when none)
    pub fn filtered_count(&self) -> usize {
        let state = self.state();
        if !state.is_filtering() {
            return self.items.len();
        }
        self.filtered(&state).count()
    }

    pub fn is_loading(&self) -> bool {
        self.state().loading
    }

    pub fn is_mounted(&self) -> bool {
        self.state().mounted
    }

    /// Whether browse mode still has unrevealed items (including while a
    /// reveal is in flight)
    pub fn has_more(&self) -> bool {
        let state = self.state();
        state.mounted && !state.is_filtering() && state.visible_count < self.items.len()
    }

    /// Whether the "load more" sentinel should be rendered and observed
    pub fn sentinel_visible(&self) -> bool {
        let state = self.state();
        state.mounted
            && !state.is_filtering()
            && !state.loading
            && state.visible_count < self.items.len()
    }

    /// Reveal the next page.
    ///
    /// Suspends once on the page fetch. While that is pending, further
    /// calls return [`RevealOutcome::InFlight`] without doing anything.
    /// If the view is unmounted before the fetch resolves, the result is
    /// dropped.
    pub async fn request_more(&self) -> RevealOutcome {
        let total = self.items.len();
        let request = {
            let mut state = self.state();
            if !state.mounted {
                return RevealOutcome::Unmounted;
            }
            if state.loading {
                debug!("reveal already in flight");
                return RevealOutcome::InFlight;
            }
            if state.is_filtering() {
                return RevealOutcome::Filtering;
            }
            if state.visible_count >= total {
                return RevealOutcome::Exhausted;
            }
            state.loading = true;
            PageRequest {
                offset: state.visible_count,
                page_size: self.settings.page_size(),
            }
        };

        debug!(offset = request.offset, "revealing page");
        self.fetcher.fetch_page(request).await;

        let mut state = self.state();
        if !state.mounted {
            debug!("view unmounted during reveal; dropping result");
            return RevealOutcome::Unmounted;
        }
        state.loading = false;
        state.visible_count = (state.visible_count + self.settings.page_size()).min(total);
        debug!(visible_count = state.visible_count, total, "page revealed");

        RevealOutcome::Revealed {
            visible: state.visible_count,
        }
    }

    /// Tear the view down. Pending reveals resolve as no-ops.
    pub fn unmount(&self) {
        let mut state = self.state();
        if state.mounted {
            state.mounted = false;
            debug!("list view unmounted");
        }
    }
}
