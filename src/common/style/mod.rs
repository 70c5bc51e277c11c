//! Colour and length types used by run, paragraph and style properties.

pub mod color;
pub mod len;

pub use color::RGBColor;
pub use len::{HalfPoints, Twips};
