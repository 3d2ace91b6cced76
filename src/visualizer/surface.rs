// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Drawing surfaces the skeleton renderer writes to.

use crate::body::Point2;
use crate::error::Result;
use crate::visualizer::Color;

/// Text appearance for [`DrawSurface::draw_text`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    /// Text color.
    pub color: Color,
    /// Font scale. `1.0` renders 32 px glyphs.
    pub scale: f32,
    /// Stroke thickness in pixels.
    pub thickness: u32,
}

impl TextStyle {
    /// Glyph height in pixels at scale `1.0`.
    pub const BASE_PX: f32 = 32.0;

    /// Glyph height in pixels.
    pub fn px(&self) -> f32 {
        Self::BASE_PX * self.scale
    }
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            color: Color::WHITE,
            scale: 1.0,
            thickness: 1,
        }
    }
}

/// An image-like target accepting line, circle and text primitives.
///
/// Coordinates are pixels; primitives partly or wholly outside the surface are
/// clipped by the implementation.
pub trait DrawSurface {
    /// Draw a straight line of `width` pixels between two points.
    fn draw_line(&mut self, from: Point2, to: Point2, color: Color, width: u32) -> Result<()>;

    /// Draw a circle outline of `thickness` pixels around `center`.
    fn draw_circle(
        &mut self,
        center: Point2,
        radius: u32,
        color: Color,
        thickness: u32,
    ) -> Result<()>;

    /// Draw `text` with its baseline starting at `anchor`.
    fn draw_text(&mut self, text: &str, anchor: Point2, style: &TextStyle) -> Result<()>;
}

/// A single primitive issued against a surface.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Line {
        from: Point2,
        to: Point2,
        color: Color,
        width: u32,
    },
    Circle {
        center: Point2,
        radius: u32,
        color: Color,
        thickness: u32,
    },
    Text {
        text: String,
        anchor: Point2,
        style: TextStyle,
    },
}

/// Surface that records commands instead of rasterising them.
///
/// Useful for replaying an overlay onto another backend, or for inspecting
/// exactly what a render pass produced.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CommandList {
    commands: Vec<DrawCommand>,
}

impl CommandList {
    /// Create an empty command list.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            commands: Vec::new(),
        }
    }

    /// Recorded commands in issue order.
    #[must_use]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Number of recorded line commands.
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Line { .. }))
            .count()
    }

    /// Number of recorded circle commands.
    #[must_use]
    pub fn circle_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Circle { .. }))
            .count()
    }

    /// Number of recorded text commands.
    #[must_use]
    pub fn text_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Text { .. }))
            .count()
    }

    /// Issue every recorded command, in order, against another surface.
    ///
    /// # Errors
    ///
    /// Stops at and returns the first error from `target`.
    pub fn replay<S: DrawSurface + ?Sized>(&self, target: &mut S) -> Result<()> {
        for command in &self.commands {
            match command {
                DrawCommand::Line {
                    from,
                    to,
                    color,
                    width,
                } => target.draw_line(*from, *to, *color, *width)?,
                DrawCommand::Circle {
                    center,
                    radius,
                    color,
                    thickness,
                } => target.draw_circle(*center, *radius, *color, *thickness)?,
                DrawCommand::Text {
                    text,
                    anchor,
                    style,
                } => target.draw_text(text, *anchor, style)?,
            }
        }
        Ok(())
    }
}

impl DrawSurface for CommandList {
    fn draw_line(&mut self, from: Point2, to: Point2, color: Color, width: u32) -> Result<()> {
        self.commands.push(DrawCommand::Line {
            from,
            to,
            color,
            width,
        });
        Ok(())
    }

    fn draw_circle(
        &mut self,
        center: Point2,
        radius: u32,
        color: Color,
        thickness: u32,
    ) -> Result<()> {
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            color,
            thickness,
        });
        Ok(())
    }

    fn draw_text(&mut self, text: &str, anchor: Point2, style: &TextStyle) -> Result<()> {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            anchor,
            style: *style,
        });
        Ok(())
    }
}


#[cfg(feature = "annotate")]
pub use image_surface::ImageSurface;

#[cfg(feature = "annotate")]
mod image_surface {
    use ab_glyph::{FontVec, PxScale};
    use image::{Rgb, RgbImage};
    use imageproc::drawing::{
        draw_filled_circle_mut, draw_hollow_circle_mut, draw_line_segment_mut, draw_text_mut,
        text_size,
    };

    use super::{DrawSurface, TextStyle};
    use crate::body::Point2;
    use crate::error::Result;
    use crate::verbose;
    use crate::visualizer::Color;

    /// [`DrawSurface`] over an RGB image using `imageproc` primitives.
    pub struct ImageSurface<'f> {
        image: RgbImage,
        font: Option<&'f FontVec>,
    }

    impl<'f> ImageSurface<'f> {
        /// Wrap an image. Text is skipped until a font is attached.
        #[must_use]
        pub const fn new(image: RgbImage) -> Self {
            Self { image, font: None }
        }

        /// Attach the font used for text.
        #[must_use]
        pub fn with_font(mut self, font: &'f FontVec) -> Self {
            self.font = Some(font);
            self
        }

        /// Borrow the image drawn so far.
        #[must_use]
        pub const fn image(&self) -> &RgbImage {
            &self.image
        }

        /// Take back the drawn image.
        #[must_use]
        pub fn into_image(self) -> RgbImage {
            self.image
        }
    }

    /// Clip a segment to the box `[lo, hi.0] x [lo, hi.1]` (Liang-Barsky).
    fn clip_segment(
        from: (f64, f64),
        to: (f64, f64),
        lo: f64,
        hi: (f64, f64),
    ) -> Option<((f64, f64), (f64, f64))> {
        let (dx, dy) = (to.0 - from.0, to.1 - from.1);
        let (mut t0, mut t1) = (0.0_f64, 1.0_f64);
        for (p, q) in [
            (-dx, from.0 - lo),
            (dx, hi.0 - from.0),
            (-dy, from.1 - lo),
            (dy, hi.1 - from.1),
        ] {
            if p == 0.0 {
                if q < 0.0 {
                    return None;
                }
                continue;
            }
            let r = q / p;
            if p < 0.0 {
                t0 = t0.max(r);
            } else {
                t1 = t1.min(r);
            }
            if t0 > t1 {
                return None;
            }
        }
        Some((
            (from.0 + t0 * dx, from.1 + t0 * dy),
            (from.0 + t1 * dx, from.1 + t1 * dy),
        ))
    }

    #[allow(
        clippy::cast_precision_loss,
        clippy::cast_possible_wrap,
        clippy::cast_possible_truncation
    )]
    impl DrawSurface for ImageSurface<'_> {
        fn draw_line(&mut self, from: Point2, to: Point2, color: Color, width: u32) -> Result<()> {
            let rgb: Rgb<u8> = color.into();
            let width = i64::from(width.max(1));
            let (x0, y0) = (i64::from(from.x), i64::from(from.y));
            let (x1, y1) = (i64::from(to.x), i64::from(to.y));
            // Thicken along the minor axis of the line.
            let horizontal = (x1 - x0).abs() >= (y1 - y0).abs();
            let bounds = (
                f64::from(self.image.width()),
                f64::from(self.image.height()),
            );
            for t in 0..width {
                let o = t - (width - 1) / 2;
                let (ox, oy) = if horizontal { (0, o) } else { (o, 0) };
                let Some((a, b)) = clip_segment(
                    ((x0 + ox) as f64, (y0 + oy) as f64),
                    ((x1 + ox) as f64, (y1 + oy) as f64),
                    -1.0,
                    bounds,
                ) else {
                    continue;
                };
                draw_line_segment_mut(
                    &mut self.image,
                    (a.0 as f32, a.1 as f32),
                    (b.0 as f32, b.1 as f32),
                    rgb,
                );
            }
            Ok(())
        }

        fn draw_circle(
            &mut self,
            center: Point2,
            radius: u32,
            color: Color,
            thickness: u32,
        ) -> Result<()> {
            let reach = i64::from(radius) + i64::from(thickness);
            let (cx, cy) = (i64::from(center.x), i64::from(center.y));
            if cx + reach < 0
                || cy + reach < 0
                || cx - reach > i64::from(self.image.width())
                || cy - reach > i64::from(self.image.height())
            {
                return Ok(());
            }
            let rgb: Rgb<u8> = color.into();
            let (r, t) = (radius as i32, thickness as i32);
            let center = (center.x, center.y);
            if t == 0 || t >= r {
                // The stroke covers the whole disc.
                draw_filled_circle_mut(&mut self.image, center, r + t / 2, rgb);
                return Ok(());
            }
            for ring in (r - t / 2)..=(r + (t - 1) / 2) {
                draw_hollow_circle_mut(&mut self.image, center, ring, rgb);
            }
            Ok(())
        }

        fn draw_text(&mut self, text: &str, anchor: Point2, style: &TextStyle) -> Result<()> {
            let Some(font) = self.font else {
                verbose!("No font loaded, skipping label '{text}'");
                return Ok(());
            };
            let scale = PxScale::from(style.px());
            let (width, height) = text_size(scale, font, text);
            let thickness = style.thickness.max(1);
            let (ax, ay) = (i64::from(anchor.x), i64::from(anchor.y));
            if ax + i64::from(width) + i64::from(thickness) < 0
                || ay < 0
                || ax > i64::from(self.image.width())
                || ay - i64::from(height) > i64::from(self.image.height())
            {
                return Ok(());
            }
            let top = anchor.y - height as i32;
            let rgb: Rgb<u8> = style.color.into();
            for t in 0..thickness as i32 {
                draw_text_mut(&mut self.image, rgb, anchor.x + t, top, scale, font, text);
            }
            Ok(())
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        fn blank() -> ImageSurface<'static> {
            ImageSurface::new(RgbImage::new(40, 40))
        }

        #[test]
        fn test_horizontal_line_width() {
            let mut surface = blank();
            let red = Color::new(255, 0, 0);
            surface
                .draw_line(Point2::new(5, 10), Point2::new(30, 10), red, 2)
                .unwrap();
            let img = surface.into_image();

            assert_eq!(img.get_pixel(15, 10), &Rgb([255, 0, 0]));
            assert_eq!(img.get_pixel(15, 11), &Rgb([255, 0, 0]));
            assert_eq!(img.get_pixel(15, 12), &Rgb([0, 0, 0]));
            assert_eq!(img.get_pixel(15, 9), &Rgb([0, 0, 0]));
        }

        #[test]
        fn test_filled_joint_marker() {
            let mut surface = blank();
            let green = Color::new(0, 255, 0);
            surface
                .draw_circle(Point2::new(20, 20), 3, green, 3)
                .unwrap();
            let img = surface.image();

            assert_eq!(img.get_pixel(20, 20), &Rgb([0, 255, 0]));
            assert_eq!(img.get_pixel(23, 20), &Rgb([0, 255, 0]));
            assert_eq!(img.get_pixel(30, 20), &Rgb([0, 0, 0]));
        }

        #[test]
        fn test_thin_ring_leaves_center() {
            let mut surface = blank();
            surface
                .draw_circle(Point2::new(20, 20), 8, Color::WHITE, 1)
                .unwrap();
            let img = surface.image();

            assert_eq!(img.get_pixel(20, 20), &Rgb([0, 0, 0]));
            assert_eq!(img.get_pixel(28, 20), &Rgb([255, 255, 255]));
        }

        #[test]
        fn test_clipped_primitives() {
            let mut surface = blank();
            surface
                .draw_line(Point2::new(-50, -50), Point2::new(100, 100), Color::WHITE, 2)
                .unwrap();
            surface
                .draw_circle(Point2::new(0, 0), 3, Color::WHITE, 3)
                .unwrap();
            assert_eq!(surface.image().get_pixel(0, 0), &Rgb([255, 255, 255]));
        }

        #[test]
        fn test_extreme_coordinates_are_clipped() {
            use crate::body::{Confidence, Joint2D};

            let far = Joint2D::from_sensor(1, -3.0e9, 5.0, Confidence::Low);
            assert_eq!(far.position(), Some(Point2::new(i32::MIN, 5)));

            let mut surface = blank();
            surface
                .draw_line(far.coordinates(), Point2::new(20, 5), Color::WHITE, 2)
                .unwrap();
            surface
                .draw_line(
                    Point2::new(i32::MAX, i32::MIN),
                    Point2::new(i32::MIN, i32::MAX),
                    Color::WHITE,
                    3,
                )
                .unwrap();
            surface
                .draw_circle(far.coordinates(), 3, Color::WHITE, 3)
                .unwrap();
            surface
                .draw_circle(Point2::new(i32::MAX, i32::MAX), 3, Color::WHITE, 3)
                .unwrap();
            let img = surface.image();

            assert_eq!(img.get_pixel(0, 5), &Rgb([255, 255, 255]));
            assert_eq!(img.get_pixel(10, 5), &Rgb([255, 255, 255]));
            assert_eq!(img.get_pixel(30, 5), &Rgb([0, 0, 0]));
        }

        #[test]
        fn test_segment_outside_image_is_dropped() {
            assert!(clip_segment((-10.0, -10.0), (-5.0, 30.0), -1.0, (40.0, 40.0)).is_none());
            let (a, b) = clip_segment((-100.0, 5.0), (20.0, 5.0), -1.0, (40.0, 40.0)).unwrap();
            assert!((a.0 + 1.0).abs() < f64::EPSILON && (a.1 - 5.0).abs() < f64::EPSILON);
            assert!((b.0 - 20.0).abs() < f64::EPSILON);
        }

        #[test]
        fn test_text_without_font_is_skipped() {
            let mut surface = blank();
            surface
                .draw_text("7", Point2::new(10, 30), &TextStyle::default())
                .unwrap();
            assert!(surface.image().pixels().all(|p| *p == Rgb([0, 0, 0])));
        }
    }
}
