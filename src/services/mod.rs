pub mod browse;
pub mod server;

pub use browse::{BrowseCommand, BrowseSession};
pub use server::ServerService;
