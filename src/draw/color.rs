//! RGBA color type and the stock ink palette.

/// Represents an RGBA color with floating-point components.
///
/// All components are in the range 0.0 (minimum) to 1.0 (maximum).
///
/// # Examples
///
/// ```
/// use inkboard::draw::Color;
/// let red = Color { r: 1.0, g: 0.0, b: 0.0, a: 1.0 };
/// assert_eq!(Color::from_argb(0xFFFF0000), red);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    /// Red component (0.0 = no red, 1.0 = full red)
    pub r: f64,
    /// Green component (0.0 = no green, 1.0 = full green)
    pub g: f64,
    /// Blue component (0.0 = no blue, 1.0 = full blue)
    pub b: f64,
    /// Alpha/transparency (0.0 = fully transparent, 1.0 = fully opaque)
    pub a: f64,
}

impl Color {
    /// Creates a new color from RGBA components.
    pub fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Builds a color from a packed `0xAARRGGBB` integer.
    pub const fn from_argb(argb: u32) -> Self {
        Self {
            r: ((argb >> 16) & 0xFF) as f64 / 255.0,
            g: ((argb >> 8) & 0xFF) as f64 / 255.0,
            b: (argb & 0xFF) as f64 / 255.0,
            a: ((argb >> 24) & 0xFF) as f64 / 255.0,
        }
    }

    /// Packs the color back into `0xAARRGGBB`, rounding each channel.
    pub fn to_argb(self) -> u32 {
        let channel = |v: f64| (v.clamp(0.0, 1.0) * 255.0).round() as u32;
        (channel(self.a) << 24) | (channel(self.r) << 16) | (channel(self.g) << 8) | channel(self.b)
    }

    /// Clamps every component into 0.0..=1.0. NaN components become 0.0.
    pub fn clamped(self) -> Self {
        let clamp = |v: f64| if v.is_nan() { 0.0 } else { v.clamp(0.0, 1.0) };
        Self {
            r: clamp(self.r),
            g: clamp(self.g),
            b: clamp(self.b),
            a: clamp(self.a),
        }
    }

    /// Returns true when every component lies in 0.0..=1.0.
    pub fn is_normalized(&self) -> bool {
        [self.r, self.g, self.b, self.a]
            .iter()
            .all(|c| (0.0..=1.0).contains(c))
    }
}

// ============================================================================
// Stock palette (the swatches offered by the drawing toolbar)
// ============================================================================

/// Opaque black, the default ink.
pub const BLACK: Color = Color::from_argb(0xFF000000);

/// Material red 600 (`#E53935`)
pub const RED: Color = Color::from_argb(0xFFE53935);

/// Material green 600 (`#43A047`)
pub const GREEN: Color = Color::from_argb(0xFF43A047);

/// Material blue 600 (`#1E88E5`)
pub const BLUE: Color = Color::from_argb(0xFF1E88E5);

/// Material yellow 600 (`#FDD835`)
pub const YELLOW: Color = Color::from_argb(0xFFFDD835);

/// Opaque white, used as the canvas background when exporting.
pub const WHITE: Color = Color::from_argb(0xFFFFFFFF);

/// Palette order as presented by the toolbar.
pub const PALETTE: [Color; 5] = [BLACK, RED, GREEN, BLUE, YELLOW];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn argb_round_trips_palette() {
        assert_eq!(RED.to_argb(), 0xFFE53935);
        assert_eq!(YELLOW.to_argb(), 0xFFFDD835);
        assert_eq!(BLACK, Color::new(0.0, 0.0, 0.0, 1.0));
    }

    #[test]
    fn is_normalized_rejects_out_of_range() {
        assert!(BLUE.is_normalized());
        assert!(!Color::new(1.2, 0.0, 0.0, 1.0).is_normalized());
        assert!(!Color::new(0.0, 0.0, 0.0, -0.1).is_normalized());
    }

    #[test]
    fn clamped_pulls_components_into_range() {
        let color = Color::new(1.2, -0.5, f64::NAN, 0.5).clamped();
        assert_eq!(color, Color::new(1.0, 0.0, 0.0, 0.5));
        assert!(color.is_normalized());
        assert_eq!(BLUE.clamped(), BLUE);
    }
}
