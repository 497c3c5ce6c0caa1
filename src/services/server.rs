use anyhow::{Context, Result};
use axum::{
    Router,
    extract::State,
    http::{StatusCode, header},
    response::IntoResponse,
    routing::get,
};
use log::{info, warn};
use std::io::ErrorKind;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::config::{FeedSettings, ServerSettings};

/// Serves a stats feed file the way the static host does in production.
///
/// The file is read on every request so a regenerated feed shows up
/// without a restart.
pub struct ServerService {
    port: u16,
    feed_path: &'static str,
    feed_file: PathBuf,
}

struct FeedFile {
    path: PathBuf,
}

impl ServerService {
    pub fn new(server: &ServerSettings, feed: &FeedSettings) -> Self {
        Self {
            port: server.port,
            feed_path: feed.feed_path,
            feed_file: PathBuf::from(&server.feed_file),
        }
    }

    pub fn router(&self) -> Router {
        create_router(self.feed_path, self.feed_file.clone())
    }

    pub async fn run(&self) -> Result<()> {
        if !self.feed_file.exists() {
            warn!("Feed file {} does not exist yet", self.feed_file.display());
        }

        let app = self.router();

        let addr = SocketAddr::from(([0, 0, 0, 0], self.port));
        info!("Serving {} at http://{}{}", self.feed_file.display(), addr, self.feed_path);

        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .with_context(|| format!("Failed to bind {}", addr))?;
        axum::serve(listener, app).await?;

        Ok(())
    }
}

pub fn create_router(feed_path: &str, feed_file: PathBuf) -> Router {
    let state = Arc::new(FeedFile { path: feed_file });

    Router::new()
        .route(feed_path, get(serve_feed))
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

async fn serve_feed(State(feed): State<Arc<FeedFile>>) -> impl IntoResponse {
    match tokio::fs::read(&feed.path).await {
        Ok(bytes) => ([(header::CONTENT_TYPE, "application/json")], bytes).into_response(),
        Err(e) if e.kind() == ErrorKind::NotFound => StatusCode::NOT_FOUND.into_response(),
        Err(e) => {
            warn!("Failed to read {}: {}", feed.path.display(), e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Failed to read feed").into_response()
        }
    }
}
