//! Port definitions: traits that adapters implement.
//!
//! Ports are the boundaries between the console and the outside world.
//! Futures returned by ports are not required to be `Send`: the console
//! runs on a single-threaded UI event loop.

pub mod console_view;
pub mod node_api;

pub use console_view::ConsoleView;
pub use node_api::{ApiError, NodeApi};
