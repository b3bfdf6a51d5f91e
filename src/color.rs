//! Colors and the fixed nine-entry palette.
//!
//! Shapes refer to colors by *palette index*, while pixel writes carry a
//! literal [`Color`] value. The two are validated separately:
//!
//! - [`index_valid`]: range check on an index (`0 <= i < 9`).
//! - [`color_value_valid`]: exact membership of a value in the palette.

// ============================================================================
// Color
// ============================================================================

/// RGB color with integer components.
///
/// Components are conventionally `0..=255` but the type does not enforce
/// it; equality is exact and component-wise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
    pub r: i32,
    pub g: i32,
    pub b: i32,
}

impl Color {
    pub const fn new(r: i32, g: i32, b: i32) -> Self {
        Self { r, g, b }
    }

    /// Largest of the three channels.
    #[inline]
    pub fn max_channel(&self) -> i32 {
        self.r.max(self.g).max(self.b)
    }
}

// ============================================================================
// Palette
// ============================================================================

pub const RED: i32 = 0;
pub const GREEN: i32 = 1;
pub const BLUE: i32 = 2;
pub const YELLOW: i32 = 3;
pub const ORANGE: i32 = 4;
pub const PURPLE: i32 = 5;
pub const BROWN: i32 = 6;
pub const BLACK: i32 = 7;
pub const WHITE: i32 = 8;

/// Number of palette entries.
pub const PALETTE_SIZE: usize = 9;

/// The fixed palette, ordered by index.
pub const PALETTE: [Color; PALETTE_SIZE] = [
    Color::new(255, 0, 0),
    Color::new(0, 255, 0),
    Color::new(0, 0, 255),
    Color::new(255, 255, 0),
    Color::new(255, 164, 0),
    Color::new(128, 0, 128),
    Color::new(165, 42, 42),
    Color::new(0, 0, 0),
    Color::new(255, 255, 255),
];

/// Lowercase names, parallel to [`PALETTE`].
pub const PALETTE_NAMES: [&str; PALETTE_SIZE] = [
    "red", "green", "blue", "yellow", "orange", "purple", "brown", "black", "white",
];

/// Background color of a fresh or cleared canvas.
pub const BACKGROUND: Color = PALETTE[WHITE as usize];

/// True iff `index` selects a palette entry.
#[inline]
pub fn index_valid(index: i32) -> bool {
    (0..PALETTE_SIZE as i32).contains(&index)
}

/// True iff `c` exactly equals one of the palette colors.
pub fn color_value_valid(c: &Color) -> bool {
    PALETTE.iter().any(|p| p == c)
}

/// Palette color at `index`, or `None` when the index is out of range.
pub fn palette_color(index: i32) -> Option<Color> {
    if index_valid(index) {
        Some(PALETTE[index as usize])
    } else {
        None
    }
}

/// Name of the palette entry equal to `c`, if any.
pub fn palette_name(c: &Color) -> Option<&'static str> {
    PALETTE
        .iter()
        .position(|p| p == c)
        .map(|i| PALETTE_NAMES[i])
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_range() {
        for i in 0..9 {
            assert!(index_valid(i));
        }
        assert!(!index_valid(-1));
        assert!(!index_valid(9));
        assert!(!index_valid(102));
    }

    #[test]
    fn test_value_membership() {
        for c in PALETTE.iter() {
            assert!(color_value_valid(c));
        }
        assert!(!color_value_valid(&Color::new(255, 0, 1)));
        assert!(!color_value_valid(&Color::new(1, 2, 3)));
    }

    #[test]
    fn test_value_check_is_not_range_check() {
        // Every channel in range, yet not a palette entry.
        assert!(!color_value_valid(&Color::new(10, 20, 30)));
        // Out-of-range channels are never palette entries either.
        assert!(!color_value_valid(&Color::new(256, 0, 0)));
    }

    #[test]
    fn test_palette_color() {
        assert_eq!(palette_color(RED), Some(Color::new(255, 0, 0)));
        assert_eq!(palette_color(WHITE), Some(BACKGROUND));
        assert_eq!(palette_color(9), None);
        assert_eq!(palette_color(-1), None);
    }

    #[test]
    fn test_names() {
        assert_eq!(palette_name(&PALETTE[ORANGE as usize]), Some("orange"));
        assert_eq!(palette_name(&Color::new(1, 1, 1)), None);
    }

    #[test]
    fn test_max_channel() {
        assert_eq!(PALETTE[BROWN as usize].max_channel(), 165);
        assert_eq!(PALETTE[BLACK as usize].max_channel(), 0);
    }
}
