//! UI rendering using ratatui

use folio_core::{DateStyle, ItemCard, Listable, ViewMode};
use ratatui::{
    layout::{Constraint, Direction, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use super::app::{App, Mode, CARD_HEIGHT};

/// Primary accent color
const ACCENT: Color = Color::Yellow;
/// Secondary color for less important elements
const SECONDARY: Color = Color::DarkGray;
/// Tag color
const TAG: Color = Color::Blue;
/// Dim text color
const DIM: Color = Color::Rgb(100, 100, 100);

/// Render the entire UI
pub fn render<T: Listable>(frame: &mut Frame, app: &mut App<T>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Search box
            Constraint::Min(5),    // Cards
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    render_search(frame, app, chunks[0]);
    render_list(frame, app, chunks[1]);
    render_status_bar(frame, app, chunks[2]);
}

/// Render the search box
fn render_search<T: Listable>(frame: &mut Frame, app: &App<T>, area: Rect) {
    let editing = app.mode == Mode::Search;
    let border_style = if editing {
        Style::default().fg(ACCENT)
    } else {
        Style::default().fg(SECONDARY)
    };

    let placeholder = format!("Search {}...", app.listing.title().to_lowercase());
    let content = if app.search_input.is_empty() && !editing {
        Line::from(Span::styled(placeholder, Style::default().fg(DIM)))
    } else {
        Line::from(app.search_input.as_str())
    };

    let block = Block::default()
        .title(format!(" {} ", app.listing.title()))
        .title_style(Style::default().fg(ACCENT).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(Paragraph::new(content).block(block), area);

    if editing {
        let cursor_x = area.x + 1 + app.search_cursor as u16;
        frame.set_cursor_position(Position::new(cursor_x.min(area.right().saturating_sub(2)), area.y + 1));
    }
}

/// Build the list row for one card
fn card_item(card: &ItemCard, dates: DateStyle) -> ListItem<'static> {
    let mut meta = Vec::new();
    if let Some(date) = &card.date {
        meta.push(Span::styled(dates.format(date), Style::default().fg(DIM)));
    }
    for tag in &card.tags {
        if !meta.is_empty() {
            meta.push(Span::raw(" "));
        }
        meta.push(Span::styled(format!("#{}", tag), Style::default().fg(TAG)));
    }

    ListItem::new(vec![
        Line::from(Span::styled(
            card.title.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("  {}", card.description),
            Style::default().fg(SECONDARY),
        )),
        Line::from(meta),
    ])
}

/// Render the card list plus the sentinel row
fn render_list<T: Listable>(frame: &mut Frame, app: &mut App<T>, area: Rect) {
    let inner_height = area.height.saturating_sub(2) as usize;
    app.viewport_lines = inner_height;
    app.viewport_rows = inner_height / CARD_HEIGHT;

    let mode = app.view_mode();
    let title = match mode {
        ViewMode::Searching => format!(" '{}' ({} results) ", app.search_input, app.rows.len()),
        _ => format!(" {} of {} ", app.rows.len(), app.view.total_count()),
    };

    let dates = app.listing.date_style();
    let mut items: Vec<ListItem> = app.rows.iter().map(|card| card_item(card, dates)).collect();

    if app.shows_sentinel() {
        let label = if mode == ViewMode::Loading {
            "  Loading more..."
        } else {
            "  Scroll for more"
        };
        items.push(ListItem::new(Line::from(Span::styled(
            label,
            Style::default().fg(DIM).add_modifier(Modifier::ITALIC),
        ))));
    }

    if app.rows.is_empty() {
        let message = if mode == ViewMode::Searching {
            "No matches"
        } else {
            "Nothing here yet"
        };
        items.push(ListItem::new(Line::from(Span::styled(message, Style::default().fg(DIM)))));
    }

    let list = List::new(items)
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_style(Style::default().fg(if app.mode == Mode::Normal { ACCENT } else { SECONDARY })),
        )
        .highlight_style(Style::default().bg(Color::Rgb(40, 40, 40)))
        .highlight_symbol("▶ ");

    frame.render_stateful_widget(list, area, &mut app.list_state);
}

/// Render the status bar
fn render_status_bar<T: Listable>(frame: &mut Frame, app: &App<T>, area: Rect) {
    let hints = match app.mode {
        Mode::Normal => "j/k move  / search  Esc clear  Enter link  q quit",
        Mode::Search => "type to filter  Enter done  Esc clear",
    };

    let line = match &app.status_message {
        Some(msg) => Line::from(Span::styled(msg.clone(), Style::default().fg(ACCENT))),
        None => Line::from(Span::styled(hints, Style::default().fg(DIM))),
    };

    frame.render_widget(Paragraph::new(line), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Listing;
    use folio_core::format::parse_date;
    use folio_core::{ChannelTrigger, Immediate, LinkBuilder, ListSettings, ListView, Post};
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;
    use std::sync::Arc;

    fn browser(n: usize, page_size: usize) -> (App<Post>, ChannelTrigger) {
        let posts: Vec<Post> = (0..n)
            .map(|i| Post {
                slug: format!("post-{}", i),
                title: format!("Post {}", i),
                summary: format!("Summary {}", i),
                date: parse_date("2025-01-05T08:30:00").ok(),
                tags: vec![],
                draft: false,
            })
            .collect();
        let view = ListView::new(posts, ListSettings::new(page_size), Arc::new(Immediate));
        let (handle, trigger) = ChannelTrigger::new();
        (App::new(view, handle, Listing::Posts, LinkBuilder::default()), trigger)
    }

    fn screen(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        buffer.content().iter().map(|cell| cell.symbol()).collect()
    }

    #[tokio::test]
    async fn scrolling_to_the_bottom_reveals_every_page() {
        let (mut app, _trigger) = browser(25, 10);
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        let mut fired = 0;

        for _ in 0..80 {
            app.refresh();
            terminal.draw(|frame| render(frame, &mut app)).unwrap();
            if app.observe_sentinel() {
                fired += 1;
                app.view.request_more().await;
            }
            app.select_next();
        }
        app.refresh();

        assert_eq!(fired, 2);
        assert_eq!(app.rows.len(), 25);
        assert!(!app.shows_sentinel());
        assert_eq!(app.list_state.selected(), Some(24));
    }

    #[test]
    fn short_list_shows_sentinel_without_scrolling() {
        let (mut app, _trigger) = browser(8, 3);
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();

        terminal.draw(|frame| render(frame, &mut app)).unwrap();

        assert_eq!(app.viewport_lines, 18);
        assert!(screen(&terminal).contains("Scroll for more"));
        assert!(app.observe_sentinel());
    }

    #[test]
    fn post_cards_show_time_of_day() {
        let (mut app, _trigger) = browser(2, 10);
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();

        terminal.draw(|frame| render(frame, &mut app)).unwrap();

        assert!(screen(&terminal).contains("January 5, 2025 08:30"));
    }
}
