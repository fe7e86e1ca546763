//! tokenpage - fragment-token page frontend
//!
//! A single-page browser frontend that, on load, parses the URL fragment left
//! by an OAuth authorization redirect and renders one of two views into the
//! page's container:
//! - a non-empty `access_token` param: the token in a read-only field, with
//!   "Copy token to clipboard" and "Log out" buttons
//! - otherwise: a login prompt with a "LOG IN" button
//!
//! The crate splits into a pure core (fragment parsing, view-state
//! derivation, URL building) that compiles and tests on the native host, and
//! a wasm32-only DOM layer entered via `#[wasm_bindgen(start)]`.
//!
//! ## Usage
//!
//! ```bash
//! cargo build --target wasm32-unknown-unknown
//! ```

// Core modules (available on all platforms)
pub mod auth;
pub mod constants;
pub mod fragment;
pub mod view;

// Debug logging (category mask, console on wasm / stderr on native)
pub mod debug;

// DOM rendering and the wasm-facing exports (browser only).
// Keep surface tight to avoid pulling wasm_bindgen into native targets.
#[cfg(target_arch = "wasm32")]
pub mod dom;
#[cfg(target_arch = "wasm32")]
pub mod wasm_api;

// Re-export commonly used items
pub use fragment::parse_fragment;
pub use view::ViewState;
