//! `folio browse` - interactive listing browser

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use folio_core::reveal::drive;
use folio_core::{ChannelTrigger, LinkBuilder, Listable, ListView};
use tracing::info;

use crate::{browse, load_catalog, load_site_config, Listing};

#[derive(Parser, Debug)]
pub struct BrowseArgs {
    /// Which listing to browse
    #[arg(value_enum)]
    pub listing: Listing,

    /// Catalog file (default: ~/.folio/catalog.toml)
    #[arg(long)]
    pub catalog: Option<PathBuf>,
}

pub async fn run(args: BrowseArgs, config_path: Option<&PathBuf>) -> Result<()> {
    let site = load_site_config(config_path)?;
    let catalog = load_catalog(args.catalog.as_ref(), &site)?;
    let links = site.links();
    let fetcher = Arc::new(site.lists.reveal_latency());

    match args.listing {
        Listing::Posts => {
            let view = ListView::new(catalog.posts, site.lists.posts(), fetcher);
            host(view, args.listing, links).await
        }
        Listing::Projects => {
            let view = ListView::new(catalog.projects, site.lists.projects(), fetcher);
            host(view, args.listing, links).await
        }
    }
}

/// Mount the view, run the terminal UI on a blocking thread, then tear down
async fn host<T: Listable>(view: ListView<T>, listing: Listing, links: LinkBuilder) -> Result<()> {
    let (handle, trigger) = ChannelTrigger::new();
    let driver = tokio::spawn(drive(view.clone(), trigger));

    let ui_view = view.clone();
    let result = tokio::task::spawn_blocking(move || browse::run(ui_view, handle, listing, links))
        .await
        .context("Browser thread panicked")?;

    view.unmount();
    driver.await.context("Reveal driver panicked")?;
    info!(listing = ?listing, "browser closed");

    result
}
