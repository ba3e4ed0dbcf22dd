//! Feed decoding error types

use quick_xml::events::attributes::AttrError;

/// Errors that can occur while decoding a category feed.
///
/// Only document-level problems surface as errors. A malformed item
/// record inside a well-formed document is tolerated and decoded as
/// far as its structure allows.
#[derive(Debug, thiserror::Error)]
pub enum FeedError {
    /// The feed document is not well-formed XML.
    #[error("XML syntax error at byte {position}: {source}")]
    Syntax {
        /// Byte offset the reader had reached.
        position: u64,
        /// The underlying parser error.
        source: quick_xml::Error,
    },

    /// An element carried an attribute list that could not be decoded.
    #[error("malformed attribute: {0}")]
    Attr(#[from] AttrError),
}
