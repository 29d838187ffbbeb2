//! Quantum CLI - manga catalog reader.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use quantum::catalog::{CatalogClient, parse_manga_id};
use quantum::config::Config;
use quantum::console::Console;
use quantum::error::LoaderError;
use quantum::{loaders, server};
use std::path::PathBuf;

/// Browse and read manga from the public catalog.
#[derive(Parser, Debug)]
#[command(name = "quantum")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to config file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Serve the web reader.
    Serve {
        /// Address to bind.
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on.
        #[arg(long)]
        port: Option<u16>,
    },

    /// List one page of the catalog.
    List {
        /// Page number (1-based).
        #[arg(long, default_value = "1")]
        page: String,
    },

    /// Show a manga and its chapters.
    Manga {
        /// Manga id or catalog title URL.
        manga: String,
    },

    /// List the page images of a chapter.
    Chapter {
        /// Chapter id.
        chapter_id: String,
    },
}

fn init_logging() {
    let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| {
        let level = std::env::var("QUANTUM_LOG").unwrap_or_else(|_| "info".to_string());
        format!("quantum={},tower_http={}", level, level)
    });

    env_logger::Builder::new().parse_filters(&filter).init();
}

#[tokio::main]
async fn main() -> Result<()> {
    init_logging();
    let args = Args::parse();
    let console = Console::new();

    let mut config = match &args.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("Failed to load configuration")?;

    if let Command::Serve { host, port } = &args.command {
        if let Some(host) = host {
            config.server.host = host.clone();
        }
        if let Some(port) = port {
            config.server.port = *port;
        }
    }

    config.validate().context("Invalid configuration")?;
    log::debug!("config: {:?}", config);

    let catalog = CatalogClient::new(&config).context("Failed to create catalog client")?;

    match args.command {
        Command::Serve { .. } => server::serve(&config, catalog).await,
        Command::List { page } => {
            let data = loaders::load_home(&catalog, Some(&page), config.reader.page_size)
                .await
                .context("Failed to load catalog page")?;
            console.print_home(&data);
            Ok(())
        }
        Command::Manga { manga } => {
            let Some(manga_id) = parse_manga_id(&manga) else {
                console.error(&format!("Not a manga id or title URL: {}", manga));
                anyhow::bail!("invalid manga reference");
            };
            let data = report_not_found(&console, loaders::load_manga(&catalog, &manga_id).await)?;
            console.print_manga(&data);
            Ok(())
        }
        Command::Chapter { chapter_id } => {
            let data = report_not_found(
                &console,
                loaders::load_chapter(&catalog, None, &chapter_id).await,
            )?;
            console.print_chapter(&data);
            Ok(())
        }
    }
}

/// Prints a friendly warning for not-found outcomes before failing.
fn report_not_found<T>(console: &Console, result: Result<T, LoaderError>) -> Result<T> {
    result.map_err(|e| {
        if let LoaderError::NotFound(msg) = &e {
            console.warning(&format!("Nothing found: {}", msg));
        }
        anyhow::Error::new(e)
    })
}
