//! `folio list` - print what a listing renders

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use folio_core::{Facets, Immediate, LinkBuilder, Listable, ListView, ProjectStatus, ProjectType};
use tracing::debug;

use crate::render::{render_json, render_text, ListingFooter, OutputFormat};
use crate::{load_catalog, load_site_config, Listing};

#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Which listing to show
    #[arg(value_enum)]
    pub listing: Listing,

    /// Search text (matches title, description or tags)
    #[arg(long, short)]
    pub query: Option<String>,

    /// Only items carrying this exact tag
    #[arg(long)]
    pub tag: Option<String>,

    /// Only projects of this type (personal, work, client)
    #[arg(long = "type")]
    pub project_type: Option<ProjectType>,

    /// Only projects with this status (active, completed)
    #[arg(long)]
    pub status: Option<ProjectStatus>,

    /// Extra pages to reveal, as if scrolled to the bottom this many times
    #[arg(long, default_value_t = 0)]
    pub reveal: usize,

    /// Catalog file (default: ~/.folio/catalog.toml)
    #[arg(long)]
    pub catalog: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

impl ListArgs {
    fn facets(&self) -> Facets {
        Facets {
            tag: self.tag.clone(),
            project_type: self.project_type,
            status: self.status,
        }
    }
}

pub async fn run(args: ListArgs, config_path: Option<&PathBuf>) -> Result<()> {
    let site = load_site_config(config_path)?;
    let catalog = load_catalog(args.catalog.as_ref(), &site)?;
    let links = site.links();

    let output = match args.listing {
        Listing::Posts => {
            let view = ListView::new(catalog.posts, site.lists.posts(), Arc::new(Immediate));
            show(&view, &args, &links).await?
        }
        Listing::Projects => {
            let view = ListView::new(catalog.projects, site.lists.projects(), Arc::new(Immediate));
            show(&view, &args, &links).await?
        }
    };

    print!("{}", output);
    Ok(())
}

async fn show<T: Listable>(view: &ListView<T>, args: &ListArgs, links: &LinkBuilder) -> Result<String> {
    for page in 0..args.reveal {
        if !view.sentinel_visible() {
            debug!(page, "nothing left to reveal");
            break;
        }
        view.request_more().await;
    }

    view.set_facets(args.facets());
    if let Some(query) = &args.query {
        view.set_query(query.as_str());
    }

    let cards = view.cards();
    let footer = ListingFooter {
        shown: cards.len(),
        total: view.filtered_count(),
        has_more: view.has_more(),
    };

    match args.format {
        OutputFormat::Text => Ok(render_text(&cards, links, args.listing.date_style(), &footer)),
        OutputFormat::Json => render_json(&cards, links, args.listing.date_style(), &footer),
    }
}
