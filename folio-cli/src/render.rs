//! Plain-text and JSON rendering of listing cards

use std::fmt::Write as _;

use anyhow::{Context, Result};
use clap::ValueEnum;
use folio_core::{DateStyle, ItemCard, LinkBuilder};
use serde::Serialize;

/// Output format for `folio list`
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// A card with its date formatted and link built
#[derive(Debug, Serialize)]
pub struct RenderedCard<'a> {
    pub id: &'a str,
    pub title: &'a str,
    pub description: &'a str,
    pub date: Option<String>,
    pub tags: &'a [String],
    pub href: String,
}

impl<'a> RenderedCard<'a> {
    pub fn new(card: &'a ItemCard, links: &LinkBuilder, dates: DateStyle) -> Self {
        Self {
            id: card.identity.as_str(),
            title: &card.title,
            description: &card.description,
            date: card.date.as_ref().map(|date| dates.format(date)),
            tags: &card.tags,
            href: links.href(&card.target),
        }
    }
}

/// Summary line under a listing
#[derive(Debug, Serialize)]
pub struct ListingFooter {
    pub shown: usize,
    pub total: usize,
    pub has_more: bool,
}

/// Render cards as readable text blocks
pub fn render_text(
    cards: &[ItemCard],
    links: &LinkBuilder,
    dates: DateStyle,
    footer: &ListingFooter,
) -> String {
    let mut out = String::new();

    for card in cards {
        let card = RenderedCard::new(card, links, dates);
        if let Some(date) = &card.date {
            let _ = writeln!(out, "{}", date);
        }
        let _ = writeln!(out, "{}", card.title);
        if !card.description.is_empty() {
            let _ = writeln!(out, "  {}", card.description);
        }
        if !card.tags.is_empty() {
            let tags: Vec<String> = card.tags.iter().map(|t| format!("#{}", t)).collect();
            let _ = writeln!(out, "  {}", tags.join(" "));
        }
        let _ = writeln!(out, "  -> {}", card.href);
        out.push('\n');
    }

    let _ = write!(out, "Showing {} of {}", footer.shown, footer.total);
    if footer.has_more {
        out.push_str(" (more available)");
    }
    out.push('\n');
    out
}

/// Render cards plus footer as pretty JSON
pub fn render_json(
    cards: &[ItemCard],
    links: &LinkBuilder,
    dates: DateStyle,
    footer: &ListingFooter,
) -> Result<String> {
    #[derive(Serialize)]
    struct Listing<'a> {
        items: Vec<RenderedCard<'a>>,
        #[serde(flatten)]
        footer: &'a ListingFooter,
    }

    let listing = Listing {
        items: cards.iter().map(|c| RenderedCard::new(c, links, dates)).collect(),
        footer,
    };
    serde_json::to_string_pretty(&listing).context("Failed to serialize listing")
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::format::parse_date;
    use folio_core::Identity;

    fn card() -> ItemCard {
        ItemCard {
            identity: Identity::new("blog/async-rust"),
            title: "Async Rust".to_string(),
            description: "Notes on tokio".to_string(),
            date: Some(parse_date("2025-01-05T08:00:00").unwrap()),
            tags: vec!["Rust".to_string(), "Tokio".to_string()],
            target: "blog/async-rust".to_string(),
        }
    }

    #[test]
    fn text_output_formats_date_and_link() {
        let links = LinkBuilder::new("https://example.com", "");
        let footer = ListingFooter {
            shown: 1,
            total: 3,
            has_more: true,
        };
        let text = render_text(&[card()], &links, DateStyle::Date, &footer);

        assert!(text.contains("January 5, 2025\n"));
        assert!(text.contains("#Rust #Tokio"));
        assert!(text.contains("-> /blog/async-rust"));
        assert!(text.ends_with("Showing 1 of 3 (more available)\n"));
    }

    #[test]
    fn json_output_has_footer_fields() {
        let links = LinkBuilder::default();
        let footer = ListingFooter {
            shown: 1,
            total: 1,
            has_more: false,
        };
        let json = render_json(&[card()], &links, DateStyle::Date, &footer).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["total"], 1);
        assert_eq!(value["has_more"], false);
        assert_eq!(value["items"][0]["href"], "/blog/async-rust");
        assert_eq!(value["items"][0]["date"], "January 5, 2025");
    }

    #[test]
    fn post_dates_include_time_of_day() {
        let links = LinkBuilder::default();
        let footer = ListingFooter {
            shown: 1,
            total: 1,
            has_more: false,
        };

        let text = render_text(&[card()], &links, DateStyle::DateTime, &footer);
        assert!(text.starts_with("January 5, 2025 08:00\n"));

        let json = render_json(&[card()], &links, DateStyle::DateTime, &footer).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["items"][0]["date"], "January 5, 2025 08:00");
    }
}
