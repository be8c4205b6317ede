//! Scalar value types for the showcase.
//!
//! This crate contains pure domain types with no IO and minimal dependencies:
//! labels, one value per Rust primitive, the groups they print under, and the
//! text rendering of the whole showcase.

mod label;
mod showcase;
mod value;

pub use label::Label;
pub use showcase::{Entry, Section, Showcase, ShowcaseError};
pub use value::{ScalarGroup, ScalarValue};
