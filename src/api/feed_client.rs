use log::{error, info};
use std::future::Future;

use crate::config::FeedSettings;
use crate::domain::{Dataset, parse_feed};
use crate::errors::LoadError;
use crate::http::FeedHttpClient;

/// Anything that can produce one stats snapshot
pub trait DataSource {
    fn load(&self) -> impl Future<Output = Result<Dataset, LoadError>>;
}

/// Reads the stats feed over HTTP. One GET per `load`, no retries.
#[derive(Debug, Clone)]
pub struct HttpFeedSource {
    client: FeedHttpClient,
    url: String,
}

impl HttpFeedSource {
    pub fn new(client: FeedHttpClient, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }

    pub fn from_settings(settings: &FeedSettings) -> anyhow::Result<Self> {
        let client = FeedHttpClient::from_settings(settings)?;
        Ok(Self::new(client, settings.feed_url()))
    }

    async fn fetch_body(&self) -> Result<String, LoadError> {
        let response = self.client.get(&self.url).await?;

        if !response.status().is_success() {
            return Err(LoadError::bad_status(response.status()));
        }

        Ok(response.text().await?)
    }
}

impl DataSource for HttpFeedSource {
    async fn load(&self) -> Result<Dataset, LoadError> {
        info!("Fetching stats from {}", self.url);

        let result = self.fetch_body().await.and_then(|body| parse_feed(&body));

        match &result {
            Ok(dataset) => info!("Loaded {} players", dataset.len()),
            Err(e) => error!("Error fetching stats: {}", e),
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{Router, http::StatusCode, routing::get};
    use tokio::net::TcpListener;

    const FEED: &str = r#"{
        "lastUpdated": "2025-05-10T18:30:00Z",
        "players": [
            {"rank":2,"name":"Bob","level":9,"xp":30,"wins":3,"goals":1,"assists":0,"matches":8,"mvps":1},
            {"rank":1,"name":"Ana","level":12,"xp":10,"wins":5,"goals":7,"assists":2,"matches":9,"mvps":3}
        ]
    }"#;

    async fn spawn_feed_host(router: Router) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{}", addr)
    }

    fn source_for(base: &str) -> HttpFeedSource {
        let client = FeedHttpClient::new("test-agent", 5).unwrap();
        HttpFeedSource::new(client, format!("{}/stats.json", base))
    }

    #[tokio::test]
    async fn test_load_success_keeps_feed_order() {
        let base = spawn_feed_host(Router::new().route("/stats.json", get(|| async { FEED }))).await;

        let dataset = source_for(&base).load().await.unwrap();

        let ranks: Vec<u32> = dataset.players.iter().map(|p| p.rank).collect();
        assert_eq!(ranks, vec![2, 1]);
        assert_eq!(dataset.last_updated.as_deref(), Some("2025-05-10T18:30:00Z"));
    }

    #[tokio::test]
    async fn test_load_server_error_is_load_error() {
        let router = Router::new().route(
            "/stats.json",
            get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
        );
        let base = spawn_feed_host(router).await;

        let err = source_for(&base).load().await.unwrap_err();

        assert!(err.message.contains("500"), "unexpected message: {}", err.message);
    }

    #[tokio::test]
    async fn test_load_missing_feed_is_load_error() {
        let base = spawn_feed_host(Router::new()).await;
        let err = source_for(&base).load().await.unwrap_err();
        assert!(err.message.contains("404"));
    }

    #[tokio::test]
    async fn test_load_malformed_body_is_load_error() {
        let base = spawn_feed_host(Router::new().route("/stats.json", get(|| async { "not json" }))).await;
        assert!(source_for(&base).load().await.is_err());
    }

    #[tokio::test]
    async fn test_load_unreachable_host_is_load_error() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let err = source_for(&format!("http://{}", addr)).load().await.unwrap_err();

        assert!(!err.message.is_empty());
    }
}
