//! Unit value types and the unit decoding seam
//!
//! Monster, item, object and roster layouts are decoded by a [`UnitSource`];
//! this crate only fixes the value types the snapshot carries.

mod source;
mod types;

pub use source::*;
pub use types::*;
