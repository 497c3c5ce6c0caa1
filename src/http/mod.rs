pub mod client;

pub use client::FeedHttpClient;
