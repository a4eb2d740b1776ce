//! Color name parsing shared by the config loader and the replay tool.

use crate::draw::{Color, color::*};

/// Maps a palette name or `#RRGGBB` / `#AARRGGBB` hex string to a [`Color`].
///
/// # Supported Names (case-insensitive)
/// - "black", "red", "green", "blue", "yellow", "white"
///
/// # Returns
/// - `Some(Color)` if the name matches a palette color or parses as hex
/// - `None` otherwise
pub fn parse_color(name: &str) -> Option<Color> {
    let name = name.trim();
    if let Some(hex) = name.strip_prefix('#') {
        return parse_hex(hex);
    }

    match name.to_lowercase().as_str() {
        "black" => Some(BLACK),
        "red" => Some(RED),
        "green" => Some(GREEN),
        "blue" => Some(BLUE),
        "yellow" => Some(YELLOW),
        "white" => Some(WHITE),
        _ => None,
    }
}

fn parse_hex(hex: &str) -> Option<Color> {
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let value = u32::from_str_radix(hex, 16).ok()?;
    match hex.len() {
        6 => Some(Color::from_argb(0xFF00_0000 | value)),
        8 => Some(Color::from_argb(value)),
        _ => None,
    }
}
