//! folio CLI - portfolio listings from the terminal
//!
//! Hosts the blog and projects list views:
//! - `list` prints what a listing would render for a query and reveal depth
//! - `browse` is the interactive search-as-you-type, scroll-to-reveal browser
//! - `page` prints one numbered page of the static listing layout
//! - `tags` prints the project tag sidebar
//! - `config` manages ~/.folio/config.toml

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use folio_core::{Catalog, DateStyle, SiteConfig};
use tracing::debug;

mod browse;
mod commands;
mod config;
mod render;
mod tracing_setup;

#[derive(Parser, Debug)]
#[command(
    name = "folio",
    author,
    version,
    about = "Browse and preview the portfolio's blog and project listings",
    long_about = "Loads the site catalog and drives the same filtered, incrementally \
                  revealed listings the blog and projects pages use."
)]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    /// Site config file (default: ~/.folio/config.toml)
    #[arg(long, global = true, env = "FOLIO_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the items a listing shows for a query and reveal depth
    List(commands::list::ListArgs),
    /// Interactive listing browser (search as you type, scroll to reveal)
    Browse(commands::browse::BrowseArgs),
    /// Print one numbered page of the static listing layout
    Page(commands::page::PageArgs),
    /// Show project tag counts
    Tags(commands::tags::TagsArgs),
    /// Manage folio configuration (path, show, init)
    Config(config::ConfigArgs),
    /// Generate shell completion scripts
    Completions(CompletionsArgs),
}

/// Which collection a command works on
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Listing {
    Posts,
    Projects,
}

impl Listing {
    pub fn title(&self) -> &'static str {
        match self {
            Listing::Posts => "Blog",
            Listing::Projects => "Projects",
        }
    }

    /// Post cards carry the time of day; project cards only the date
    pub fn date_style(&self) -> DateStyle {
        match self {
            Listing::Posts => DateStyle::DateTime,
            Listing::Projects => DateStyle::Date,
        }
    }

    /// Site route the listing lives under
    pub fn route(&self) -> &'static str {
        match self {
            Listing::Posts => "blog",
            Listing::Projects => "projects",
        }
    }
}

#[derive(Parser, Debug)]
struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    shell: clap_complete::Shell,
}

/// Load site config, honouring the global `--config` flag
pub fn load_site_config(path: Option<&PathBuf>) -> Result<SiteConfig> {
    SiteConfig::load(path.map(|p| p.as_path())).context("Failed to load site config")
}

/// Load the content catalog from `--catalog` or the default location
pub fn load_catalog(path: Option<&PathBuf>, site: &SiteConfig) -> Result<Catalog> {
    let path = path.cloned().unwrap_or_else(Catalog::default_path);
    debug!(path = %path.display(), "loading catalog");
    Catalog::load(&path, site.lists.show_drafts)
        .with_context(|| format!("Failed to load catalog from {}", path.display()))
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_setup::init(&tracing_setup::TracingConfig {
        debug: cli.debug,
        interactive: matches!(cli.command, Commands::Browse(_)),
    })?;

    match cli.command {
        Commands::List(args) => commands::list::run(args, cli.config.as_ref()).await,
        Commands::Browse(args) => commands::browse::run(args, cli.config.as_ref()).await,
        Commands::Page(args) => commands::page::run(args, cli.config.as_ref()),
        Commands::Tags(args) => commands::tags::run(args, cli.config.as_ref()),
        Commands::Config(args) => config::run_config(args, cli.config.as_ref()),
        Commands::Completions(args) => {
            let mut cmd = Cli::command();
            clap_complete::generate(args.shell, &mut cmd, "folio", &mut std::io::stdout());
            Ok(())
        }
    }
}
