//! `folio page` - one numbered page of the static listing layout

use std::fmt::Write as _;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use folio_core::format::format_long_date;
use folio_core::pagination::paginate;
use folio_core::{ItemCard, LinkBuilder, Listable, Page, Pagination};
use serde::Serialize;

use crate::render::RenderedCard;
use crate::{load_catalog, load_site_config, Listing};

#[derive(Parser, Debug)]
pub struct PageArgs {
    /// Which listing to paginate
    #[arg(value_enum)]
    pub listing: Listing,

    /// Page number, starting at 1
    #[arg(default_value_t = 1)]
    pub page: usize,

    /// Items per page (default: the listing's page size)
    #[arg(long)]
    pub per_page: Option<usize>,

    /// Catalog file (default: ~/.folio/catalog.toml)
    #[arg(long)]
    pub catalog: Option<PathBuf>,

    /// Emit JSON instead of text
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: PageArgs, config_path: Option<&PathBuf>) -> Result<()> {
    let site = load_site_config(config_path)?;
    let catalog = load_catalog(args.catalog.as_ref(), &site)?;
    let links = site.links();

    let (cards, default_per_page) = match args.listing {
        Listing::Posts => (cards_of(&catalog.posts), site.lists.posts_page_size),
        Listing::Projects => (cards_of(&catalog.projects), site.lists.projects_page_size),
    };
    let pagination = Pagination::new(args.page, args.per_page.unwrap_or(default_per_page));
    let page = paginate(&cards, pagination);

    if args.page > page.total_pages() {
        bail!(
            "Page {} is out of range ({} has {} pages)",
            args.page,
            args.listing.title(),
            page.total_pages()
        );
    }

    let output = if args.json {
        render_page_json(&page, args.listing, &links)?
    } else {
        render_page_text(&page, args.listing, &links)
    };
    print!("{}", output);
    Ok(())
}

fn cards_of<T: Listable>(items: &[T]) -> Vec<ItemCard> {
    items.iter().map(Listable::card).collect()
}

fn render_page_text(page: &Page<ItemCard>, listing: Listing, links: &LinkBuilder) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} - page {} of {}\n", listing.title(), page.page, page.total_pages());

    for card in &page.items {
        if let Some(date) = &card.date {
            let _ = writeln!(out, "{}", format_long_date(date));
        }
        let _ = writeln!(out, "{}", card.title);
        let _ = writeln!(out, "  -> {}\n", links.absolute(&card.target));
    }

    if let Some(prev) = page.prev_href(listing.route()) {
        let _ = writeln!(out, "Previous: {}", links.absolute(&prev));
    }
    if let Some(next) = page.next_href(listing.route()) {
        let _ = writeln!(out, "Next: {}", links.absolute(&next));
    }
    out
}

fn render_page_json(page: &Page<ItemCard>, listing: Listing, links: &LinkBuilder) -> Result<String> {
    #[derive(Serialize)]
    struct PageJson<'a> {
        items: Vec<RenderedCard<'a>>,
        page: usize,
        total_pages: usize,
        total: usize,
        prev: Option<String>,
        next: Option<String>,
    }

    let json = PageJson {
        items: page
            .items
            .iter()
            .map(|c| RenderedCard::new(c, links, listing.date_style()))
            .collect(),
        page: page.page,
        total_pages: page.total_pages(),
        total: page.total,
        prev: page.prev_href(listing.route()).map(|href| links.absolute(&href)),
        next: page.next_href(listing.route()).map(|href| links.absolute(&href)),
    };
    let mut text = serde_json::to_string_pretty(&json).context("Failed to serialize page")?;
    text.push('\n');
    Ok(text)
}
