pub mod models;
pub mod parsers;

pub use models::{Dataset, Player, SortDirection, SortKey, SortSpec};
pub use parsers::parse_feed;
