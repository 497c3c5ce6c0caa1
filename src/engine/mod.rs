pub mod filter;
pub mod sort;

pub use filter::filter_players;
pub use sort::sort_players;
