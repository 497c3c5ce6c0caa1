use anyhow::{Context, Result};
use reqwest::Client;
use std::time::Duration;

use crate::config::FeedSettings;

/// Thin reqwest wrapper configured for the stats feed host
#[derive(Debug, Clone)]
pub struct FeedHttpClient {
    client: Client,
}

impl FeedHttpClient {
    pub fn new(user_agent: &str, timeout_secs: u64) -> Result<Self> {
        let client = Self::build_client(user_agent, timeout_secs)?;
        Ok(Self { client })
    }

    pub fn from_settings(settings: &FeedSettings) -> Result<Self> {
        Self::new(settings.user_agent, settings.timeout_secs)
    }

    pub async fn get(&self, url: &str) -> reqwest::Result<reqwest::Response> {
        self.client.get(url).send().await
    }

    fn build_client(user_agent: &str, timeout_secs: u64) -> Result<Client> {
        Client::builder()
            .user_agent(user_agent)
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .context("Failed to build HTTP client")
    }
}
