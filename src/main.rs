use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use std::sync::Arc;

use wikisearch::api::{AppState, create_router};
use wikisearch::config::CONFIG;
use wikisearch::{HtmlRegions, KeyEvent, SearchWidget, SubmitOutcome, WikipediaClient};

#[derive(Parser)]
#[command(name = "wikisearch", version, about = "Search Wikipedia and render the hits")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run one search and print the rendered result cards
    Search {
        /// Search term; several words are joined with spaces
        #[arg(required = true)]
        term: Vec<String>,
    },
    /// Serve the search page over HTTP
    Serve {
        /// Address to listen on (defaults to WIKISEARCH_ADDR)
        #[arg(long)]
        addr: Option<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing subscriber (also picks up log crate records)
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let client = WikipediaClient::from_config(&CONFIG.search)?;

    match cli.command {
        Command::Search { term } => {
            let regions = HtmlRegions::with_input(term.join(" "));
            let mut widget = SearchWidget::from_config(client, regions, &CONFIG.search);

            let outcome = widget.on_key_down(&KeyEvent::new("Enter")).await;
            let regions = widget.into_view();
            match outcome {
                Some(SubmitOutcome::Rendered(_)) => println!("{}", regions.results_html()),
                Some(SubmitOutcome::Failed(_)) => bail!(regions.error_text().to_string()),
                Some(SubmitOutcome::Skipped) => bail!("nothing to search for"),
                Some(SubmitOutcome::Blocked) | None => bail!("search did not run"),
            }
        }
        Command::Serve { addr } => {
            let addr = addr.unwrap_or_else(|| CONFIG.addr.clone());
            let state = Arc::new(AppState::new(Arc::new(client), CONFIG.search.clone()));
            let router = create_router(state);

            let listener = tokio::net::TcpListener::bind(&addr)
                .await
                .with_context(|| format!("Failed to bind {addr}"))?;
            tracing::info!("listening on http://{addr}");
            axum::serve(listener, router).await.context("Server error")?;
        }
    }
    Ok(())
}
