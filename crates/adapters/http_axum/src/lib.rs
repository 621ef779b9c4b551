//! # nodeconsole-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the compiled browser console (`index.html`, wasm, css) from a
//!   directory: `/` and `/index.html` return the page, `/<path>` any other
//!   bundle file
//! - Answer `/health` for liveness probes
//! - Trace every request through `tower-http`
//!
//! The node API (`api/nodes`, `api/action`, `api/set_number`) belongs to the
//! backend and is not served here.

pub mod router;
