//! CLI entry point for folio

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use folio_rs::content::DEFAULT_LIMIT;

#[derive(Parser)]
#[command(name = "folio")]
#[command(version)]
#[command(about = "Blog backend for a personal portfolio site", long_about = None)]
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
    /// List blog content
    #[command(alias = "ls")]
    List {
        /// Type of content to list (post, latest, draft, tag)
        #[arg(default_value = "post")]
        r#type: String,

        /// Number of posts for `latest`
        #[arg(short, long, default_value_t = DEFAULT_LIMIT)]
        limit: usize,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Show a post and its related posts
    Show {
        /// Slug of the post
        slug: String,

        /// Number of related posts to show
        #[arg(short, long, default_value_t = DEFAULT_LIMIT)]
        related: usize,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Print the navigation links
    Nav {
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Serve the JSON API
    #[command(alias = "s")]
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value = "4000")]
        port: u16,

        /// IP address to bind to
        #[arg(short, long, default_value = "localhost")]
        ip: String,
    },

    /// Display version information
    Version,
}

#[tokio::main]
async fn main() -> Result<()> {
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
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Determine base directory
    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir().context("Cannot determine current directory")?,
    };

    match cli.command {
        Commands::List {
            r#type,
            limit,
            json,
        } => {
            let folio = folio_rs::Folio::new(&base_dir)?;
            folio_rs::commands::list::run(&folio, &r#type, limit, json)?;
        }

        Commands::Show {
            slug,
            related,
            json,
        } => {
            let folio = folio_rs::Folio::new(&base_dir)?;
            folio_rs::commands::show::run(&folio, &slug, related, json)?;
        }

        Commands::Nav { json } => {
            let folio = folio_rs::Folio::new(&base_dir)?;
            folio_rs::commands::nav::run(&folio, json)?;
        }

        Commands::Serve { port, ip } => {
            let folio = folio_rs::Folio::new(&base_dir)?;
            tracing::info!("Starting server at http://{}:{}", ip, port);
            folio_rs::server::start(&folio, &ip, port).await?;
        }

        Commands::Version => {
            println!("folio version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
