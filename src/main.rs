use std::sync::Arc;

use clap::{Parser, Subcommand};
use moviedb::{AppState, catalog::Catalog, config::Config, db, seed};

#[derive(Debug, Parser)]
#[command(name = "moviedb", about = "Movie and actor catalog")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Run the web server (default).
    Serve,
    /// Create the tables and load the fixture catalog.
    Forge {
        /// Drop existing tables first.
        #[arg(long)]
        drop: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "info,moviedb=debug,sqlx=warn".to_string()),
        )
        .init();

    let cli = Cli::parse();
    let config = Arc::new(Config::from_env()?);

    match cli.command.unwrap_or(Command::Serve) {
        Command::Forge { drop } => {
            let db = db::connect(&config.database_url).await?;
            let summary = seed::forge(&db, drop).await?;
            println!(
                "Done. {} movies, {} actors, {} relations.",
                summary.movies, summary.actors, summary.relations
            );
        },
        Command::Serve => {
            let db = db::connect_and_migrate(&config.database_url).await?;
            let state = Arc::new(AppState { config: config.clone(), catalog: Catalog::new(db) });

            let listener = tokio::net::TcpListener::bind(config.addr).await?;
            tracing::info!(addr = %config.addr, static_dir = %config.static_dir.display(), "listening");
            axum::serve(listener, moviedb::app(state)).await?;
        },
    }

    Ok(())
}
