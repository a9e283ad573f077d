//! Facade CLI - pick a starter website template, customise it, export it.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use facade_render::ViewportMode;
use tracing_subscriber::{fmt, EnvFilter};

mod commands;

#[derive(Parser)]
#[command(name = "facade")]
#[command(about = "Website template builder")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to site.toml config file
    #[arg(short, long, default_value = "site.toml")]
    config: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a site file from a starter template
    Init {
        /// Catalog id of the template to start from
        #[arg(short, long)]
        template: Option<String>,

        /// Overwrite an existing site file
        #[arg(short, long)]
        yes: bool,
    },

    /// List catalog templates
    List {
        /// Only show one category (ecommerce, business, portfolio, blog)
        #[arg(short, long)]
        category: Option<String>,

        /// Case-insensitive name or category search
        #[arg(short, long)]
        search: Option<String>,
    },

    /// Build the customised site
    Build {
        /// Output directory (defaults to config or "dist")
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Viewport to frame the page in
        #[arg(long)]
        viewport: Option<ViewportMode>,

        /// Skip minification
        #[arg(long)]
        no_minify: bool,

        /// Build every catalog template plus a gallery page instead
        #[arg(long)]
        all: bool,
    },

    /// Write the customised template as JSON
    Export {
        /// Directory to write into
        #[arg(short, long, default_value = ".")]
        output: PathBuf,
    },

    /// Start live preview server
    Dev {
        /// Port to listen on
        #[arg(short, long, default_value = "7777")]
        port: u16,

        /// Do not open browser
        #[arg(long)]
        no_open: bool,
    },

    /// Preview a built site
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value = "4000")]
        port: u16,

        /// Directory to serve (defaults to the configured output)
        #[arg(short, long)]
        dir: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    fmt().with_env_filter(filter).with_target(false).init();

    match cli.command {
        Commands::Init { template, yes } => {
            commands::init::run(&cli.config, template, yes).await?;
        }
        Commands::List { category, search } => {
            commands::list::run(&cli.config, category, search).await?;
        }
        Commands::Build {
            output,
            viewport,
            no_minify,
            all,
        } => {
            let minify = if no_minify { Some(false) } else { None };
            commands::build::run(&cli.config, output, viewport, minify, all).await?;
        }
        Commands::Export { output } => {
            commands::export::run(&cli.config, output).await?;
        }
        Commands::Dev { port, no_open } => {
            commands::dev::run(&cli.config, port, !no_open).await?;
        }
        Commands::Serve { port, dir } => {
            commands::serve::run(&cli.config, port, dir).await?;
        }
    }

    Ok(())
}
