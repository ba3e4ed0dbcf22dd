//! Error types

mod api;
mod feed;
mod version;

pub use api::*;
pub use feed::*;
pub use version::*;

/// Top-level error for catalogue operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A fetch against the data host failed.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// Release discovery failed.
    #[error("version discovery failed: {0}")]
    Version(#[from] VersionError),

    /// A category feed could not be decoded.
    #[error("feed decode failed: {0}")]
    Feed(#[from] FeedError),
}
