// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Frame annotation: fonts, output directories and drawing bodies onto images.

use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};

use ab_glyph::FontVec;
use image::DynamicImage;

use crate::body::Body2D;
use crate::error::{OverlayError, Result};
use crate::skeleton::SegmentPair;
use crate::visualizer::{ImageSurface, SkeletonRenderer};
use crate::{verbose, warn};

/// Release page of a public GitHub assets repository that hosts the default
/// label font; `<ASSETS_URL>/<font name>` is fetched when no font is cached.
const ASSETS_URL: &str = "https://github.com/ultralytics/assets/releases/download/v0.0.0";

/// Directory under the user config directory where downloaded fonts are kept.
///
/// # Errors
///
/// Returns [`OverlayError::FontError`] if the platform has no config directory.
pub fn font_cache_dir() -> Result<PathBuf> {
    dirs::config_dir()
        .map(|dir| dir.join(crate::NAME))
        .ok_or_else(|| OverlayError::FontError("no user config directory".to_string()))
}

/// Font used for track id labels.
pub const DEFAULT_FONT: &str = "Arial.ttf";

/// Find the next available run directory (render, render2, render3, etc.)
pub fn find_next_run_dir(base: &Path, prefix: &str) -> PathBuf {
    let first = base.join(prefix);
    if !first.exists() {
        return first;
    }
    (2..)
        .map(|i| base.join(format!("{prefix}{i}")))
        .find(|dir| !dir.exists())
        .unwrap_or(first)
}

/// Locate a font in the user config directory, downloading it when missing.
///
/// # Errors
///
/// Returns [`OverlayError::FontError`] if the config directory is unknown or
/// the download fails, and [`OverlayError::Io`] on filesystem errors.
pub fn check_font(font: &str) -> Result<PathBuf> {
    let font_name = Path::new(font)
        .file_name()
        .ok_or_else(|| OverlayError::FontError(format!("invalid font name '{font}'")))?
        .to_string_lossy()
        .into_owned();
    let config_dir = font_cache_dir()?;
    let font_path = config_dir.join(&font_name);

    if font_path.exists() {
        return Ok(font_path);
    }

    fs::create_dir_all(&config_dir)?;

    let url = format!("{ASSETS_URL}/{font_name}");
    verbose!("Downloading {url} to {}", font_path.display());

    let response = ureq::get(&url)
        .call()
        .map_err(|e| OverlayError::FontError(format!("failed to download {url}: {e}")))?;
    let mut reader = response.into_body().into_reader();
    let mut file = File::create(&font_path)?;
    if let Err(e) = io::copy(&mut reader, &mut file) {
        // Do not leave a truncated font behind.
        let _ = fs::remove_file(&font_path);
        return Err(e.into());
    }

    Ok(font_path)
}

/// Parse a TrueType/OpenType font file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not a valid font.
pub fn load_font(path: &Path) -> Result<FontVec> {
    let data = fs::read(path)?;
    FontVec::try_from_vec(data)
        .map_err(|e| OverlayError::FontError(format!("{}: {e}", path.display())))
}

/// Load the label font from `path`, or fetch the default font.
///
/// Failures are reported as warnings; labels are then skipped.
pub fn resolve_font(path: Option<&Path>) -> Option<FontVec> {
    let found = match path {
        Some(p) => Ok(p.to_path_buf()),
        None => check_font(DEFAULT_FONT),
    };
    match found.and_then(|p| load_font(&p)) {
        Ok(font) => Some(font),
        Err(e) => {
            warn!("Labels disabled, font unavailable: {e}");
            None
        }
    }
}

/// Draw every valid body onto a copy of `image`.
///
/// Bodies are drawn in slice order, so later bodies cover earlier ones where
/// they overlap.
///
/// # Errors
///
/// Returns the first rendering error.
pub fn annotate_image(
    image: &DynamicImage,
    bodies: &[Body2D],
    segments: &[SegmentPair],
    renderer: &SkeletonRenderer,
    font: Option<&FontVec>,
) -> Result<DynamicImage> {
    let mut surface = ImageSurface::new(image.to_rgb8());
    if let Some(font) = font {
        surface = surface.with_font(font);
    }
    for body in bodies {
        renderer.render(&mut surface, body, segments)?;
    }
    Ok(DynamicImage::ImageRgb8(surface.into_image()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::body::{Confidence, Joint2D, Point2};
    use crate::skeleton::{JOINT_COUNT, SEGMENT_PAIRS};
    use crate::visualizer::assign_color;
    use image::{Rgb, RgbImage};

    fn body(id: u32, offset: i32) -> Body2D {
        let mut joints = [Joint2D::absent(0); JOINT_COUNT];
        joints[0] = Joint2D::new(0, Some(Point2::new(10 + offset, 10)), Confidence::High);
        joints[1] = Joint2D::new(1, Some(Point2::new(10 + offset, 50)), Confidence::High);
        Body2D::new(id, joints)
    }

    #[test]
    fn test_find_next_run_dir() {
        let tmp = tempfile::tempdir().unwrap();
        assert_eq!(find_next_run_dir(tmp.path(), "render"), tmp.path().join("render"));

        fs::create_dir(tmp.path().join("render")).unwrap();
        fs::create_dir(tmp.path().join("render2")).unwrap();
        assert_eq!(find_next_run_dir(tmp.path(), "render"), tmp.path().join("render3"));
    }

    #[test]
    fn test_font_cache_dir_is_crate_specific() {
        if let Ok(dir) = font_cache_dir() {
            assert_eq!(dir.file_name().unwrap(), "skeleton-overlay");
            assert_eq!(dir.parent(), dirs::config_dir().as_deref());
        }
    }

    #[test]
    fn test_load_font_rejects_garbage() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("bad.ttf");
        fs::write(&path, b"not a font").unwrap();
        assert!(matches!(load_font(&path), Err(OverlayError::FontError(_))));
        assert!(matches!(
            load_font(&tmp.path().join("missing.ttf")),
            Err(OverlayError::Io(_))
        ));
    }

    #[test]
    fn test_annotate_draws_bones() {
        let image = DynamicImage::ImageRgb8(RgbImage::new(64, 64));
        let bodies = [body(1, 0), body(2, 20)];
        let out = annotate_image(
            &image,
            &bodies,
            &SEGMENT_PAIRS,
            &SkeletonRenderer::default(),
            None,
        )
        .unwrap()
        .to_rgb8();

        let c1: Rgb<u8> = assign_color(1, 200).into();
        let c2: Rgb<u8> = assign_color(2, 200).into();
        assert_eq!(out.get_pixel(10, 30), &c1);
        assert_eq!(out.get_pixel(30, 30), &c2);
        // The input frame is left untouched.
        assert_eq!(image.to_rgb8().get_pixel(10, 30), &Rgb([0, 0, 0]));
    }
}
