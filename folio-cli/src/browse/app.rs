//! Browser state: input mode, search box, selection and the rows on screen

use folio_core::{ItemCard, LinkBuilder, Listable, ListView, TriggerHandle, ViewMode};
use ratatui::widgets::ListState;

use crate::Listing;

/// Lines per card in the list
pub const CARD_HEIGHT: usize = 3;

/// Input mode for the browser
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Navigate the list
    #[default]
    Normal,
    /// Typing into the search box
    Search,
}

/// Main application state
pub struct App<T> {
    /// The list view being hosted
    pub view: ListView<T>,
    /// Sentinel crossings go here
    pub trigger: TriggerHandle,
    /// Blog or projects
    pub listing: Listing,
    /// Builds hrefs for the status line
    pub links: LinkBuilder,
    /// Current input mode
    pub mode: Mode,
    /// Search box text
    pub search_input: String,
    /// Search cursor position (in chars)
    pub search_cursor: usize,
    /// Selection and scroll offset of the list widget
    pub list_state: ListState,
    /// How many cards fit in the list area (set during render)
    pub viewport_rows: usize,
    /// Lines inside the list border (set during render)
    pub viewport_lines: usize,
    /// Cards currently rendered
    pub rows: Vec<ItemCard>,
    /// Status message (shown in status bar)
    pub status_message: Option<String>,
}

impl<T: Listable> App<T> {
    /// Create a new App over a mounted view
    pub fn new(view: ListView<T>, trigger: TriggerHandle, listing: Listing, links: LinkBuilder) -> Self {
        let mut app = Self {
            view,
            trigger,
            listing,
            links,
            mode: Mode::Normal,
            search_input: String::new(),
            search_cursor: 0,
            list_state: ListState::default(),
            viewport_rows: 0,
            viewport_lines: 0,
            rows: Vec::new(),
            status_message: None,
        };
        app.refresh();
        app
    }

    /// Pull the current visible set from the view and keep the selection in range
    pub fn refresh(&mut self) {
        self.rows = self.view.cards();

        if self.rows.is_empty() {
            self.list_state.select(None);
        } else {
            let last = self.rows.len() - 1;
            let selected = self.list_state.selected().unwrap_or(0).min(last);
            self.list_state.select(Some(selected));
        }
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view.mode()
    }

    /// Whether a sentinel row follows the cards
    pub fn shows_sentinel(&self) -> bool {
        self.view.has_more()
    }

    /// Whether the sentinel row is on screen.
    ///
    /// Selecting the last card counts as reaching it, since selection
    /// cannot move past the cards. Otherwise the cards below the scroll
    /// offset must leave at least one free line for it.
    pub fn sentinel_in_viewport(&self) -> bool {
        if !self.shows_sentinel() {
            return false;
        }
        let last = self.rows.len().saturating_sub(1);
        if self.list_state.selected() == Some(last) {
            return true;
        }
        let cards_below = self.rows.len().saturating_sub(self.list_state.offset());
        cards_below * CARD_HEIGHT < self.viewport_lines
    }

    /// Report a crossing when the sentinel is on screen and observable
    pub fn observe_sentinel(&mut self) -> bool {
        if self.sentinel_in_viewport() && self.view.sentinel_visible() {
            return self.trigger.fire();
        }
        false
    }

    /// Set status message
    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = Some(msg.into());
    }

    /// Clear status message
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// Enter search mode, keeping the current text
    pub fn enter_search(&mut self) {
        self.mode = Mode::Search;
        self.search_cursor = self.search_input.chars().count();
    }

    /// Exit current mode back to normal
    pub fn exit_mode(&mut self) {
        self.mode = Mode::Normal;
    }

    /// Push the search box into the view
    fn apply_query(&mut self) {
        self.view.set_query(self.search_input.clone());
        self.list_state.select(Some(0));
        *self.list_state.offset_mut() = 0;
        self.refresh();
    }

    /// Empty the search box and return to browsing
    pub fn clear_search(&mut self) {
        self.search_input.clear();
        self.search_cursor = 0;
        self.apply_query();
    }

    fn byte_index(&self, char_pos: usize) -> usize {
        self.search_input
            .char_indices()
            .nth(char_pos)
            .map(|(i, _)| i)
            .unwrap_or(self.search_input.len())
    }

    /// Add text to search input
    pub fn search_insert(&mut self, c: char) {
        let idx = self.byte_index(self.search_cursor);
        self.search_input.insert(idx, c);
        self.search_cursor += 1;
        self.apply_query();
    }

    /// Delete char before cursor in search
    pub fn search_backspace(&mut self) {
        if self.search_cursor > 0 {
            self.search_cursor -= 1;
            let idx = self.byte_index(self.search_cursor);
            self.search_input.remove(idx);
            self.apply_query();
        }
    }

    pub fn cursor_left(&mut self) {
        self.search_cursor = self.search_cursor.saturating_sub(1);
    }

    pub fn cursor_right(&mut self) {
        if self.search_cursor < self.search_input.chars().count() {
            self.search_cursor += 1;
        }
    }

    /// Select next item in list (stops at the last card)
    pub fn select_next(&mut self) {
        if self.rows.is_empty() {
            return;
        }
        let next = self
            .list_state
            .selected()
            .map(|i| (i + 1).min(self.rows.len() - 1))
            .unwrap_or(0);
        self.list_state.select(Some(next));
    }

    /// Select previous item in list
    pub fn select_prev(&mut self) {
        if self.rows.is_empty() {
            return;
        }
        let prev = self
            .list_state
            .selected()
            .map(|i| i.saturating_sub(1))
            .unwrap_or(0);
        self.list_state.select(Some(prev));
    }

    pub fn select_first(&mut self) {
        if !self.rows.is_empty() {
            self.list_state.select(Some(0));
        }
    }

    pub fn select_last(&mut self) {
        if !self.rows.is_empty() {
            self.list_state.select(Some(self.rows.len() - 1));
        }
    }

    /// Get currently selected card
    pub fn selected_card(&self) -> Option<&ItemCard> {
        self.list_state.selected().and_then(|i| self.rows.get(i))
    }

    /// Show where the selected card links to
    pub fn open_selected(&mut self) {
        let href = self.selected_card().map(|card| self.links.href(&card.target));
        match href {
            Some(href) => self.set_status(format!("Link: {}", href)),
            None => self.set_status("Nothing selected"),
        }
    }
}
