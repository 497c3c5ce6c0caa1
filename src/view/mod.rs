pub mod controller;
pub mod format;
pub mod presenter;

pub use controller::{LoadTicket, ViewStateController};
pub use presenter::{HeaderCell, Presenter, headers};
