//! HTTP surface for Priohub.
//!
//! A thin axum layer over priohub-core: every handler re-fetches from the
//! board, runs the pure pipeline, and writes a `{success, ...}` JSON
//! envelope. No state is shared between requests beyond the read-only
//! [`state::AppState`].

pub mod error;
pub mod routes;
pub mod state;
