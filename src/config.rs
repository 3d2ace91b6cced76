// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Overlay configuration.
//!
//! This module defines the [`OverlayConfig`] struct, which controls how a
//! skeleton is drawn: color partitioning, stroke sizes, the id label and
//! whether joint markers are drawn at all.

use crate::skeleton::LABEL_JOINT;

/// Default number of distinguishable body colors.
pub const DEFAULT_UNIQUE_COLORS: u32 = 200;

/// Configuration for skeleton overlay rendering.
///
/// It uses a builder pattern for convenient construction.
///
/// # Example
///
/// ```rust
/// use skeleton_overlay::OverlayConfig;
///
/// let config = OverlayConfig::new()
///     .with_unique_colors(64)
///     .with_show_id(true)
///     .with_only_segments(true);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayConfig {
    /// Number of equally spaced steps the 24-bit color space is split into.
    /// Track ids below this value get pairwise distinct colors.
    pub unique_colors: u32,
    /// Bone stroke width in pixels.
    pub line_width: u32,
    /// Joint marker radius in pixels.
    pub joint_radius: u32,
    /// Joint marker stroke thickness in pixels.
    pub joint_thickness: u32,
    /// Topology index of the joint the id label is anchored to.
    pub label_joint: usize,
    /// Label font scale. `1.0` is 32 px text.
    pub font_scale: f32,
    /// Draw bones only, without joint markers.
    pub only_segments: bool,
    /// Draw the track id next to the label joint.
    pub show_id: bool,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            unique_colors: DEFAULT_UNIQUE_COLORS,
            line_width: 2,
            joint_radius: 3,
            joint_thickness: 3,
            label_joint: LABEL_JOINT,
            font_scale: 1.0,
            only_segments: false,
            show_id: false,
        }
    }
}

impl OverlayConfig {
    /// Create a new configuration with default values.
    ///
    /// # Returns
    ///
    /// * A new `OverlayConfig` instance with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of distinguishable body colors.
    ///
    /// # Arguments
    ///
    /// * `n` - Color steps. Zero is treated as one.
    ///
    /// # Returns
    ///
    /// * The modified `OverlayConfig`.
    #[must_use]
    pub const fn with_unique_colors(mut self, n: u32) -> Self {
        self.unique_colors = n;
        self
    }

    /// Set the bone stroke width.
    #[must_use]
    pub const fn with_line_width(mut self, width: u32) -> Self {
        self.line_width = width;
        self
    }

    /// Set the joint marker radius and stroke thickness.
    ///
    /// # Arguments
    ///
    /// * `radius` - Circle radius in pixels.
    /// * `thickness` - Stroke thickness in pixels. A thickness of at least
    ///   `radius` yields a filled marker.
    ///
    /// # Returns
    ///
    /// * The modified `OverlayConfig`.
    #[must_use]
    pub const fn with_joint_radius(mut self, radius: u32, thickness: u32) -> Self {
        self.joint_radius = radius;
        self.joint_thickness = thickness;
        self
    }

    /// Set the joint the id label is anchored to.
    #[must_use]
    pub const fn with_label_joint(mut self, index: usize) -> Self {
        self.label_joint = index;
        self
    }

    /// Set the label font scale.
    #[must_use]
    pub const fn with_font_scale(mut self, scale: f32) -> Self {
        self.font_scale = scale;
        self
    }

    /// Draw bones only.
    #[must_use]
    pub const fn with_only_segments(mut self, only_segments: bool) -> Self {
        self.only_segments = only_segments;
        self
    }

    /// Enable or disable the track id label.
    #[must_use]
    pub const fn with_show_id(mut self, show_id: bool) -> Self {
        self.show_id = show_id;
        self
    }
}
