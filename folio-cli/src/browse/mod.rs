//! Interactive listing browser
//!
//! A single-listing terminal view over a [`folio_core::ListView`]:
//! - Search box that filters as you type
//! - Scrolling list of cards with a "load more" sentinel row
//! - Reaching the sentinel reveals the next page after a short pause

pub mod app;
pub mod event;
pub mod terminal;
pub mod ui;

pub use terminal::run;
