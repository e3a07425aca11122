//! CLI entry point for folio-rs

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use folio_rs::commands::show::ShowFormat;

#[derive(Parser)]
#[command(name = "folio-rs")]
#[command(version)]
#[command(about = "Markdown content engine for a personal portfolio and blog", long_about = None)]
struct Cli {
    /// Set the base directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List posts or tags
    List {
        /// Type of content to list (post, tag)
        #[arg(default_value = "post")]
        r#type: String,
    },

    /// Search posts by title/excerpt and tag
    Search {
        /// Case-insensitive text to look for (empty matches everything)
        #[arg(default_value = "")]
        query: String,

        /// Only posts carrying this exact tag
        #[arg(short, long)]
        tag: Option<String>,

        /// Print matches as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show a post with its table of contents and related posts
    Show {
        /// Slug of the post
        slug: String,

        /// Print the rendered HTML body
        #[arg(long, conflicts_with = "json")]
        html: bool,

        /// Print the post, its table of contents and related slugs as JSON
        #[arg(long)]
        json: bool,
    },

    /// Generate sitemap.xml
    Sitemap {
        /// Output directory (defaults to the configured public_dir)
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Create a new post
    New {
        /// Title of the new post
        title: String,

        /// Comma separated tags
        #[arg(short, long, value_delimiter = ',')]
        tags: Vec<String>,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "folio_rs=debug,info"
    } else {
        "folio_rs=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Determine base directory
    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    match cli.command {
        Commands::List { r#type } => {
            let folio = folio_rs::Folio::new(&base_dir)?;
            folio_rs::commands::list::run(&folio, &r#type)?;
        }

        Commands::Search { query, tag, json } => {
            let folio = folio_rs::Folio::new(&base_dir)?;
            folio_rs::commands::search::run(&folio, &query, tag.as_deref(), json)?;
        }

        Commands::Show { slug, html, json } => {
            let folio = folio_rs::Folio::new(&base_dir)?;
            let format = if html {
                ShowFormat::Html
            } else if json {
                ShowFormat::Json
            } else {
                ShowFormat::Text
            };
            folio_rs::commands::show::run(&folio, &slug, format)?;
        }

        Commands::Sitemap { out } => {
            let folio = folio_rs::Folio::new(&base_dir)?;
            tracing::info!("Generating sitemap...");
            let path = folio_rs::commands::sitemap::run(&folio, out.as_deref())?;
            println!("Generated {}", path.display());
        }

        Commands::New { title, tags } => {
            let folio = folio_rs::Folio::new(&base_dir)?;
            tracing::info!("Creating new post with title: {}", title);
            let path = folio.new_post(&title, &tags)?;
            println!("Created: {}", path.display());
        }

        Commands::Version => {
            println!("folio-rs version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
