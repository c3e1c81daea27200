// CLI module - command-line argument parsing and handlers
//
// With no subcommand the interactive viewer runs. Subcommands:
// - list: print one page of the filtered view as plain text
// - categories: print the category roster
// - export: write the static HTML site
// - config --show / --path / --reset

use crate::config::{Config, VERSION};
use crate::pipeline::filter::{CategorySelector, FilterCriteria};
use crate::pipeline::BrowseState;
use crate::render::export::{export_site, ExportOptions};
use crate::render::{build_page, text};
use crate::thoughts::loader::{self, Source, LOAD_FAILED_MESSAGE};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::PathBuf;

/// Thoughtbook - browse, search and share a collection of quotations
#[derive(Parser)]
#[command(name = "thoughtbook")]
#[command(version = VERSION)]
#[command(about = "Browse, search and share a collection of quotations", long_about = None)]
pub struct Cli {
    /// Thoughts JSON file or http(s) URL (overrides config and THOUGHTBOOK_SOURCE)
    #[arg(long, global = true)]
    pub source: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print one page of thoughts as plain text
    List {
        /// Page number (clamped to the available range)
        #[arg(long, default_value_t = 1)]
        page: usize,

        /// Case-insensitive search over quote, explanation and author
        #[arg(long)]
        search: Option<String>,

        /// Category to show ("All" for every category)
        #[arg(long)]
        category: Option<String>,
    },

    /// Print the category roster
    Categories,

    /// Write the collection as a static HTML site
    Export {
        /// Output directory (defaults to export_dir from config)
        #[arg(long)]
        out: Option<PathBuf>,

        /// Search baked into every exported view
        #[arg(long)]
        search: Option<String>,
    },

    /// Manage configuration
    Config {
        /// Show effective configuration
        #[arg(long)]
        show: bool,

        /// Reset config file to defaults
        #[arg(long)]
        reset: bool,

        /// Show config file path
        #[arg(long)]
        path: bool,
    },
}

/// Run a headless subcommand to completion
pub async fn run_command(command: Commands, config: &Config) -> Result<()> {
    match command {
        Commands::List {
            page,
            search,
            category,
        } => {
            let mut state = load_state(config).await?;
            state.set_filters(FilterCriteria::new(
                search.unwrap_or_default(),
                category
                    .as_deref()
                    .map(CategorySelector::from)
                    .unwrap_or_default(),
            ));
            state.go_to_page(page);
            print!("{}", render_listing(&state));
            Ok(())
        }
        Commands::Categories => {
            let state = load_state(config).await?;
            for category in state.categories() {
                println!("{}", category);
            }
            Ok(())
        }
        Commands::Export { out, search } => {
            let state = load_state(config).await?;
            let options = ExportOptions {
                out_dir: out.unwrap_or_else(|| config.export_dir.clone()),
                search: search.unwrap_or_default(),
                page_url: config.page_url.clone(),
            };
            let summary = export_site(&state, &options)?;
            println!(
                "Wrote {} pages across {} views to {}",
                summary.files,
                summary.views,
                options.out_dir.display()
            );
            Ok(())
        }
        Commands::Config { show, reset, path } => {
            if path {
                handle_config_path()
            } else if show {
                handle_config_show(config);
                Ok(())
            } else if reset {
                handle_config_reset()
            } else {
                // No flag provided, show help
                println!("Usage: thoughtbook config [--show|--reset|--path]");
                println!();
                println!("Options:");
                println!("  --show    Display effective configuration");
                println!("  --reset   Reset config file to defaults");
                println!("  --path    Show config file path");
                Ok(())
            }
        }
    }
}

/// Current page of `state` as plain text
pub fn render_listing(state: &BrowseState) -> String {
    let blocks = build_page(&state.visible(), state.keywords());
    text::render_page(&blocks, state.current_page(), state.page_count())
}

async fn load_state(config: &Config) -> Result<BrowseState> {
    let source = Source::parse(&config.source);
    match loader::load(&source).await {
        Ok(thoughts) => Ok(BrowseState::new(thoughts)),
        Err(e) => {
            tracing::error!("Failed to load {}: {}", source, e);
            Err(anyhow::Error::new(e).context(LOAD_FAILED_MESSAGE))
        }
    }
}

fn handle_config_path() -> Result<()> {
    let path = Config::config_path().context("Could not determine config path")?;
    println!("{}", path.display());
    Ok(())
}

fn handle_config_show(config: &Config) {
    println!("# Effective configuration (cli > env > file > defaults)");
    println!();
    print!("{}", config.to_toml());

    println!();
    if let Some(path) = Config::config_path() {
        if path.exists() {
            println!("# Source: {}", path.display());
        } else {
            println!("# Source: defaults (no config file)");
        }
    }
}

fn handle_config_reset() -> Result<()> {
    let path = Config::config_path().context("Could not determine config path")?;

    if path.exists() {
        eprint!(
            "Config file exists at {}. Overwrite? [y/N] ",
            path.display()
        );
        std::io::stderr().flush()?;

        let mut input = String::new();
        std::io::stdin()
            .read_line(&mut input)
            .context("Failed to read confirmation")?;

        if !input.trim().eq_ignore_ascii_case("y") {
            println!("Aborted.");
            return Ok(());
        }
    }

    Config::default()
        .save()
        .with_context(|| format!("Failed to write config: {}", path.display()))?;

    println!("Config reset to defaults: {}", path.display());
    Ok(())
}
