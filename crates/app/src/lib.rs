//! # nodeconsole-app
//!
//! Application layer: the node console controller and **port definitions**
//! (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement:
//!   - `NodeApi`: the three backend endpoints (list, action, set number)
//!   - `ConsoleView`: where the console state is displayed
//! - Hold the console state explicitly (`ConsoleState`) instead of in
//!   globals, so it can be inspected in tests
//! - Drive the use-cases: load nodes, select, send action, set number,
//!   resynchronise after every write
//!
//! ## Dependency rule
//! Depends on `nodeconsole-domain` only. Never imports adapter crates.
//! Adapters depend on *this* crate, not the reverse.

pub mod console;
pub mod ports;
pub mod state;
