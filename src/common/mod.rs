//! Common types and utilities shared by the package writer and the guide builder.

pub mod style;
pub mod xml;

pub use style::{HalfPoints, RGBColor, Twips};
pub use xml::escape_xml;
