use anyhow::Result;
use clap::{Parser, Subcommand};
use rmcp::{ServiceExt, transport::stdio};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use component_docs::http::{self, AppState};
use component_docs::{AppConfig, ComponentDocsService, DocsStorage, RateLimiter};

/// MCP and HTTP server for browsing and searching component documentation
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Documentation root directory (defaults to ~/.component-docs/docs)
    #[arg(long, env = "COMPONENT_DOCS_ROOT")]
    docs_root: Option<PathBuf>,

    /// Path to a TOML configuration file
    #[arg(long, env = "COMPONENT_DOCS_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Serve the REST API instead of MCP over stdio
    ServeHttp {
        /// Address to listen on (defaults to 127.0.0.1:8080)
        #[arg(long)]
        bind: Option<SocketAddr>,
        /// Identify clients by the first X-Forwarded-For entry
        #[arg(long)]
        trust_forwarded_for: bool,
    },
    /// Print the documentation overview as JSON and exit
    Overview {
        #[arg(long)]
        pretty: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize tracing to stderr to avoid conflicts with stdio transport
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    let mut config = AppConfig::load(args.config.as_deref())?;
    if let Some(docs_root) = args.docs_root {
        config.docs_root = Some(docs_root);
    }

    let docs_root = config.resolve_docs_root()?;
    if !docs_root.is_dir() {
        tracing::warn!(
            "Documentation root {} does not exist; every component will report as unavailable",
            docs_root.display()
        );
    }
    let storage = Arc::new(DocsStorage::new(docs_root));
    let rate_limiter = Arc::new(RateLimiter::new(config.rate_limit));

    match args.command {
        Some(Commands::ServeHttp {
            bind,
            trust_forwarded_for,
        }) => {
            let bind = bind.unwrap_or(config.http.bind);
            let trust_forwarded_for = trust_forwarded_for || config.http.trust_forwarded_for;
            tracing::info!(
                "Serving documentation from {} over HTTP",
                storage.docs_root().display()
            );
            http::serve(
                AppState::new(storage, rate_limiter, trust_forwarded_for),
                bind,
            )
            .await
        }
        Some(Commands::Overview { pretty }) => {
            let overview = storage.documentation_overview();
            let json = if pretty {
                serde_json::to_string_pretty(&overview)?
            } else {
                serde_json::to_string(&overview)?
            };
            println!("{json}");
            Ok(())
        }
        None => serve_stdio(storage, rate_limiter).await,
    }
}

async fn serve_stdio(storage: Arc<DocsStorage>, rate_limiter: Arc<RateLimiter>) -> Result<()> {
    tracing::info!(
        "Starting MCP component docs server on stdio, serving {}",
        storage.docs_root().display()
    );

    let service = ComponentDocsService::new(storage, rate_limiter)
        .serve(stdio())
        .await
        .inspect_err(|e| {
            tracing::error!("serving error: {:?}", e);
        })?;

    service.waiting().await?;
    Ok(())
}
