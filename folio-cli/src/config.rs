use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use folio_core::SiteConfig;

use crate::load_site_config;

#[derive(Parser, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show config file path
    Path,
    /// Print the effective configuration as TOML
    Show,
    /// Write a config file with default values
    Init(InitArgs),
}

#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Force overwrite existing config
    #[arg(long, short)]
    pub force: bool,
}

pub fn run_config(args: ConfigArgs, config_path: Option<&PathBuf>) -> Result<()> {
    match args.command {
        ConfigCommands::Path => run_path(config_path),
        ConfigCommands::Show => run_show(config_path),
        ConfigCommands::Init(args) => run_init(args, config_path),
    }
}

fn target_path(config_path: Option<&PathBuf>) -> PathBuf {
    config_path.cloned().unwrap_or_else(SiteConfig::config_path)
}

fn run_path(config_path: Option<&PathBuf>) -> Result<()> {
    println!("{}", target_path(config_path).display());
    Ok(())
}

fn run_show(config_path: Option<&PathBuf>) -> Result<()> {
    let config = load_site_config(config_path)?;
    print!("{}", config.to_toml()?);
    Ok(())
}

fn run_init(args: InitArgs, config_path: Option<&PathBuf>) -> Result<()> {
    let path = target_path(config_path);

    if path.exists() && !args.force {
        return Err(anyhow::anyhow!(
            "Config already exists at {:?}\n\nUse --force to overwrite",
            path
        ));
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .context(format!("Failed to create {}", parent.display()))?;
    }

    let content = SiteConfig::default().to_toml()?;
    std::fs::write(&path, content).context(format!("Failed to write config file: {:?}", path))?;

    println!("Created config at: {}", path.display());
    println!("\nNext steps:");
    println!("  1. Edit the config: $EDITOR {}", path.display());
    println!("  2. Point `folio list --catalog` at your content catalog");
    Ok(())
}
