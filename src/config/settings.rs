/// Where the stats feed lives and how to fetch it
#[derive(Debug, Clone)]
pub struct FeedSettings {
    pub public_url: String,
    pub feed_path: &'static str,
    pub user_agent: &'static str,
    pub timeout_secs: u64,
}

impl FeedSettings {
    /// Base URL baked in at build time through `PUBLIC_URL`
    pub const BUILD_PUBLIC_URL: &'static str = match option_env!("PUBLIC_URL") {
        Some(url) => url,
        None => "http://localhost:3000",
    };

    pub fn feed_url(&self) -> String {
        format!("{}{}", self.public_url.trim_end_matches('/'), self.feed_path)
    }
}

impl Default for FeedSettings {
    fn default() -> Self {
        Self {
            public_url: Self::BUILD_PUBLIC_URL.to_string(),
            feed_path: "/stats.json",
            user_agent: "LnbLeaderboard/0.1",
            timeout_secs: 30,
        }
    }
}

#[derive(Debug, Clone)]
pub struct DisplaySettings {
    pub colored: bool,
    pub not_available: &'static str,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            colored: true,
            not_available: "N/A",
        }
    }
}

/// Local preview host for a feed file
#[derive(Debug, Clone)]
pub struct ServerSettings {
    pub port: u16,
    pub feed_file: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            port: 3000,
            feed_file: "stats.json".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub feed: FeedSettings,
    pub display: DisplaySettings,
    pub server: ServerSettings,
}

impl AppConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_public_url(mut self, url: Option<String>) -> Self {
        if let Some(url) = url {
            self.feed.public_url = url;
        }
        self
    }

    pub fn with_colors(mut self, colored: bool) -> Self {
        self.display.colored = colored;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feed_url_joins_without_double_slash() {
        let config = AppConfig::new().with_public_url(Some("http://example.org/lnb/".to_string()));
        assert_eq!(config.feed.feed_url(), "http://example.org/lnb/stats.json");
    }

    #[test]
    fn test_public_url_override_is_optional() {
        let config = AppConfig::new().with_public_url(None);
        assert_eq!(config.feed.public_url, FeedSettings::BUILD_PUBLIC_URL);
    }
}
