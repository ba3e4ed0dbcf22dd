//! Stendhal item catalogue client library
//!
//! A Rust async client for the game's published item catalogue: release
//! discovery, per-category XML feeds, and a dynamically-columned,
//! sortable table model.

pub mod cache;
pub mod error;
pub mod feed;
pub mod model;
pub mod response;
pub mod table;

mod client;

pub use client::*;
pub use response::CacheStatus;
pub use response::Response;
