//! Typed models for categories, item records and game versions

mod category;
mod item;
mod version;

pub use category::*;
pub use item::*;
pub use version::*;
