pub mod settings;

pub use settings::{AppConfig, DisplaySettings, FeedSettings, ServerSettings};
