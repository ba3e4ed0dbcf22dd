//! Category feed decoding and URL construction

pub mod urls;

mod xml;

pub use xml::parse_items;
