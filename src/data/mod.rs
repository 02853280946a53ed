//! Level data access
//!
//! Reading level sources line by line and decoding the color tokens they
//! contain.

pub mod color;
pub mod line_stream;

pub use color::{invert, parse_hex_rgb, to_hex_rgb, ColorParseError};
pub use line_stream::LineStream;
