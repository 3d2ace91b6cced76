// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

use crate::config::DEFAULT_UNIQUE_COLORS;

/// Size of the 24-bit RGB color space.
const TOTAL_COLORS: u64 = 1 << 24;

/// Color type for visualization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color(pub u8, pub u8, pub u8);

impl Color {
    /// White color.
    pub const WHITE: Color = Color(255, 255, 255);
    /// Black color.
    pub const BLACK: Color = Color(0, 0, 0);

    /// Create a new color from RGB values.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self(r, g, b)
    }

    /// Color of a tracked body with the default 200-step partition.
    pub fn from_track_id(track_id: u32) -> Self {
        assign_color(track_id, DEFAULT_UNIQUE_COLORS)
    }

    /// RGB channels as an array.
    pub const fn to_array(self) -> [u8; 3] {
        [self.0, self.1, self.2]
    }
}

impl From<Color> for image::Rgb<u8> {
    fn from(color: Color) -> Self {
        image::Rgb(color.to_array())
    }
}

/// Deterministic color for a track id.
///
/// The 24-bit color space is split into `unique_colors` equal steps and the
/// id picks step `track_id`. Ids at or above `unique_colors` run past the top
/// of the space; the excess high bits are masked off, so those ids alias onto
/// colors already handed out.
#[allow(clippy::cast_possible_truncation)]
pub fn assign_color(track_id: u32, unique_colors: u32) -> Color {
    let step = TOTAL_COLORS / u64::from(unique_colors.max(1));
    let packed = u64::from(track_id) * step;
    Color(
        ((packed >> 16) & 0xFF) as u8,
        ((packed >> 8) & 0xFF) as u8,
        (packed & 0xFF) as u8,
    )
}
