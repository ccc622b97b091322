//! `folio tags` - project tag sidebar

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use folio_core::facets::tag_counts;

use crate::{load_catalog, load_site_config};

#[derive(Parser, Debug)]
pub struct TagsArgs {
    /// Catalog file (default: ~/.folio/catalog.toml)
    #[arg(long)]
    pub catalog: Option<PathBuf>,

    /// Emit JSON instead of text
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: TagsArgs, config_path: Option<&PathBuf>) -> Result<()> {
    let site = load_site_config(config_path)?;
    let catalog = load_catalog(args.catalog.as_ref(), &site)?;
    let counts = tag_counts(&catalog.projects);

    if args.json {
        let json = serde_json::to_string_pretty(&counts).context("Failed to serialize tag counts")?;
        println!("{}", json);
        return Ok(());
    }

    if counts.is_empty() {
        println!("No project tags");
        return Ok(());
    }
    for entry in counts {
        println!("{} ({})", entry.tag, entry.count);
    }
    Ok(())
}
