//! # nodeconsole-domain
//!
//! Pure domain model for the nodeconsole front end.
//!
//! ## Responsibilities
//! - Define **Nodes** (remotely controlled devices exposing optional switch,
//!   number and sensor capabilities) as fetched from `api/nodes`
//! - Define **Commands** (`on`, `off`, `toggle`, set number) and their
//!   outbound request bodies
//! - Define the **Selection** and its invariant against the cached list
//! - Resolve API paths under a hosting platform's **ingress prefix**
//! - Render the selectable option list and the node detail text
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;

pub mod command;
pub mod ingress;
pub mod node;
pub mod render;
pub mod selection;
