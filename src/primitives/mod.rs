//! Cell primitives - the hidden visual attributes carried by each grid cell
//!
//! Each primitive renders to the string the presentation layer writes
//! into the cell's data attributes (`to_css()`, `as_char()`).

pub mod color;
pub mod token;

pub use color::Rgb;
pub use token::Token;
