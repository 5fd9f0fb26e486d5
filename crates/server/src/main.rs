//! # Portfolio Server
//!
//! Axum server that renders the portfolio site from the bundled content
//! datasets and serves the embedded static assets.

mod pages;
mod views;

use anyhow::{Context, Result};
use axum::{
    body::Body,
    extract::State,
    http::{header, StatusCode, Uri},
    response::Response,
    routing::{get, post},
    Router,
};
use clap::{Parser, Subcommand};
use portfolio_core::content::ContentStore;
use rust_embed::RustEmbed;
use serde::Deserialize;
use std::{
    net::{IpAddr, SocketAddr},
    path::{Path, PathBuf},
    sync::Arc,
};
use tokio::net::TcpListener;

/// Embedded stylesheet, form script, and image assets
#[derive(RustEmbed)]
#[folder = "assets"]
struct Assets;

/// Application state: the immutable site content
pub struct AppState {
    pub content: ContentStore,
}

pub type SharedState = Arc<AppState>;

#[derive(Parser)]
#[command(author, version, about = "Portfolio - personal developer portfolio site")]
struct Args {
    #[command(subcommand)]
    command: Option<CliCommand>,
}

#[derive(Subcommand)]
enum CliCommand {
    /// Start the portfolio server (default)
    Serve {
        /// Port to listen on
        #[arg(short, long)]
        port: Option<u16>,
        /// Address to bind
        #[arg(long)]
        host: Option<String>,
        /// Load datasets from a directory instead of the bundled content
        #[arg(long)]
        content_dir: Option<PathBuf>,
    },
    /// Load the datasets and run the integrity checks
    Check {
        /// Directory to check instead of the bundled content
        #[arg(long)]
        content_dir: Option<PathBuf>,
    },
}

/// Optional `portfolio.json` config file, merged under CLI flags
#[derive(Debug, Clone, Default, Deserialize)]
struct FileConfig {
    port: Option<u16>,
    host: Option<String>,
    content_dir: Option<PathBuf>,
}

impl FileConfig {
    fn load() -> Self {
        let path = Path::new("portfolio.json");
        if path.exists() {
            match std::fs::read_to_string(path) {
                Ok(content) => serde_json::from_str(&content).unwrap_or_default(),
                Err(_) => Self::default(),
            }
        } else {
            Self::default()
        }
    }
}

fn load_content(dir: Option<&Path>) -> Result<ContentStore> {
    let store = match dir {
        Some(dir) => ContentStore::load(dir)?,
        None => ContentStore::bundled()?,
    };
    store.verify().context("content integrity check failed")?;
    Ok(store)
}

// === Static File Serving ===

async fn serve_static(State(state): State<SharedState>, uri: Uri) -> Response {
    let path = uri.path().trim_start_matches('/');

    if let Some(file) = Assets::get(path) {
        let mime = mime_guess::from_path(path).first_or_octet_stream();
        return Response::builder()
            .status(StatusCode::OK)
            .header(header::CONTENT_TYPE, mime.as_ref())
            .body(Body::from(file.data.to_vec()))
            .unwrap();
    }

    pages::not_found(&state)
}

// === Server Entry ===

pub async fn run_server() -> Result<()> {
    dotenvy::dotenv().ok();

    let args = Args::parse();
    let file_config = FileConfig::load();

    let (port, host, content_dir) = match args.command {
        Some(CliCommand::Check { content_dir }) => {
            let dir = content_dir.or(file_config.content_dir);
            let store = load_content(dir.as_deref())?;
            println!(
                "✅ Content OK: {} projects, {} skills, {} experience entries",
                store.projects().len(),
                store.profile().skills.len(),
                store.profile().experience.len()
            );
            return Ok(());
        }
        Some(CliCommand::Serve {
            port,
            host,
            content_dir,
        }) => (
            port.or(file_config.port),
            host.or(file_config.host),
            content_dir.or(file_config.content_dir),
        ),
        None => (
            file_config.port,
            file_config.host,
            file_config.content_dir,
        ),
    };

    let content = load_content(content_dir.as_deref())?;
    let state: SharedState = Arc::new(AppState { content });

    let app = Router::new()
        .route("/", get(pages::home))
        .route("/projects/:id", get(pages::project_detail))
        .route("/contact", post(pages::submit_contact))
        .fallback(get(serve_static))
        .with_state(state);

    let ip: IpAddr = host
        .as_deref()
        .unwrap_or("127.0.0.1")
        .parse()
        .context("invalid host address")?;
    let addr = SocketAddr::new(ip, port.unwrap_or(8080));

    println!("🚀 Portfolio running at http://{}", addr);
    println!("   Landing:  GET  /  (?category=web|mobile|uiux|other)");
    println!("   Details:  GET  /projects/:id");
    println!("   Contact:  POST /contact");

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    run_server().await
}
