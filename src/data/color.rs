//! Color helpers for point markers
//!
//! Level files store colors as bare `RRGGBB` hex tokens; the editor also needs
//! the inverted color to halo the selected marker.

use bevy::color::Srgba;
use thiserror::Error;

/// Reasons a color token can be rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorParseError {
    #[error("expected 6 hex digits, got {0} characters")]
    Length(usize),
    #[error("'{0}' is not a hexadecimal color")]
    NotHex(String),
}

/// Decode an `RRGGBB` token (no leading `#`) into an opaque color
pub fn parse_hex_rgb(token: &str) -> Result<Srgba, ColorParseError> {
    if token.len() != 6 {
        return Err(ColorParseError::Length(token.len()));
    }
    if !token.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(ColorParseError::NotHex(token.to_string()));
    }
    Srgba::hex(token).map_err(|_| ColorParseError::NotHex(token.to_string()))
}

/// Format a color back into the `RRGGBB` form used by level files.
/// Alpha is dropped.
pub fn to_hex_rgb(color: Srgba) -> String {
    let channel = |value: f32| (value.clamp(0.0, 1.0) * 255.0).round() as u8;
    format!(
        "{:02x}{:02x}{:02x}",
        channel(color.red),
        channel(color.green),
        channel(color.blue)
    )
}

/// Invert the RGB channels, keeping alpha
pub fn invert(color: Srgba) -> Srgba {
    Srgba::new(
        1.0 - color.red,
        1.0 - color.green,
        1.0 - color.blue,
        color.alpha,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_primary_colors() {
        assert_eq!(parse_hex_rgb("ff0000"), Ok(Srgba::rgb(1.0, 0.0, 0.0)));
        assert_eq!(parse_hex_rgb("00ff00"), Ok(Srgba::rgb(0.0, 1.0, 0.0)));
        assert_eq!(parse_hex_rgb("0000FF"), Ok(Srgba::rgb(0.0, 0.0, 1.0)));
    }

    #[test]
    fn test_parsed_colors_are_opaque() {
        let color = parse_hex_rgb("123456").unwrap();
        assert_eq!(color.alpha, 1.0);
    }

    #[test]
    fn test_parse_rejects_bad_tokens() {
        assert_eq!(parse_hex_rgb("#ff000"), Err(ColorParseError::NotHex("#ff000".into())));
        assert_eq!(parse_hex_rgb("ff00"), Err(ColorParseError::Length(4)));
        assert_eq!(parse_hex_rgb("ff0000ff"), Err(ColorParseError::Length(8)));
        assert_eq!(parse_hex_rgb("gg0000"), Err(ColorParseError::NotHex("gg0000".into())));
        assert_eq!(parse_hex_rgb(""), Err(ColorParseError::Length(0)));
    }

    #[test]
    fn test_hex_round_trip_through_formatting() {
        let color = parse_hex_rgb("a1b2c3").unwrap();
        assert_eq!(to_hex_rgb(color), "a1b2c3");
    }

    #[test]
    fn test_invert_keeps_alpha() {
        let inverted = invert(Srgba::new(1.0, 0.25, 0.0, 0.5));
        assert_eq!(inverted, Srgba::new(0.0, 0.75, 1.0, 0.5));
        assert_eq!(invert(inverted), Srgba::new(1.0, 0.25, 0.0, 0.5));
    }
}
