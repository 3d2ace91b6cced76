// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Skeleton overlay rendering.

use crate::body::Body2D;
use crate::config::OverlayConfig;
use crate::error::{OverlayError, Result};
use crate::skeleton::{JOINT_COUNT, SEGMENT_PAIRS, SegmentPair};
use crate::verbose;
use crate::visualizer::surface::{DrawSurface, TextStyle};
use crate::visualizer::{Color, assign_color};

/// Draws tracked bodies onto a [`DrawSurface`].
///
/// Each pass over a body issues, in order: one line per bone whose two joints
/// were both detected, the optional track id label, then one marker per joint.
#[derive(Debug, Clone, Default)]
pub struct SkeletonRenderer {
    config: OverlayConfig,
}

impl SkeletonRenderer {
    /// Create a renderer.
    #[must_use]
    pub const fn new(config: OverlayConfig) -> Self {
        Self { config }
    }

    /// Rendering configuration.
    #[must_use]
    pub const fn config(&self) -> &OverlayConfig {
        &self.config
    }

    /// Color assigned to a track id under this configuration.
    #[must_use]
    pub fn color(&self, track_id: u32) -> Color {
        assign_color(track_id, self.config.unique_colors)
    }

    /// Draw `body` with the default body-tracking bone table.
    ///
    /// # Errors
    ///
    /// Returns the first error reported by `surface`.
    pub fn draw<'s, S: DrawSurface + ?Sized>(
        &self,
        surface: &'s mut S,
        body: &Body2D,
    ) -> Result<&'s mut S> {
        self.render(surface, body, &SEGMENT_PAIRS)
    }

    /// Draw `body` using a custom bone table.
    ///
    /// Bodies that are not ready (uninitialized or destroyed) produce no draw
    /// calls.
    ///
    /// # Errors
    ///
    /// * [`OverlayError::InvalidTopology`] if `segments` names a joint outside
    ///   the skeleton; nothing is drawn in that case.
    /// * Any error reported by `surface`, returned unchanged.
    pub fn render<'s, S: DrawSurface + ?Sized>(
        &self,
        surface: &'s mut S,
        body: &Body2D,
        segments: &[SegmentPair],
    ) -> Result<&'s mut S> {
        if !body.is_valid() {
            verbose!("Skipping body {} in state {:?}", body.id(), body.state());
            return Ok(surface);
        }
        if let Some([a, b]) = segments
            .iter()
            .find(|[a, b]| *a >= JOINT_COUNT || *b >= JOINT_COUNT)
        {
            return Err(OverlayError::InvalidTopology(format!(
                "segment [{a}, {b}] exceeds {JOINT_COUNT} joints"
            )));
        }

        let color = self.color(body.id());
        let joints = body.joints();

        for &[a, b] in segments {
            let (Some(p1), Some(p2)) = (joints[a].position(), joints[b].position()) else {
                continue;
            };
            surface.draw_line(p1, p2, color, self.config.line_width)?;
        }

        if self.config.show_id {
            let anchor = body
                .joint(self.config.label_joint)
                .map(|j| j.coordinates())
                .unwrap_or_default();
            let style = TextStyle {
                color: Color::WHITE,
                scale: self.config.font_scale,
                thickness: 1,
            };
            surface.draw_text(&body.id().to_string(), anchor, &style)?;
        }

        if self.config.only_segments {
            return Ok(surface);
        }

        for joint in joints {
            surface.draw_circle(
                joint.coordinates(),
                self.config.joint_radius,
                color,
                self.config.joint_thickness,
            )?;
        }

        Ok(surface)
    }
}

/// Draw one body with the default bone table and default sizes.
///
/// # Errors
///
/// Returns the first error reported by `surface`.
pub fn draw_body<'s, S: DrawSurface + ?Sized>(
    surface: &'s mut S,
    body: &Body2D,
    only_segments: bool,
    show_id: bool,
) -> Result<&'s mut S> {
    let config = OverlayConfig::new()
        .with_only_segments(only_segments)
        .with_show_id(show_id);
    SkeletonRenderer::new(config).draw(surface, body)
}
