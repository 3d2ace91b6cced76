// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

use std::path::{Path, PathBuf};
use std::process;

use crate::annotate::{annotate_image, find_next_run_dir, resolve_font};
use crate::cli::args::{DumpArgs, RenderArgs};
use crate::cli::logging::set_verbose;
use crate::error::Result;
use crate::io::{BodyFrame, save_image};
use crate::skeleton::SEGMENT_PAIRS;
use crate::utils::count_label;
use crate::{OverlayConfig, SkeletonRenderer, VERSION, error, info, section, success, verbose};

/// Run the render command, exiting with status 1 on failure.
pub fn run_render(args: &RenderArgs) {
    set_verbose(args.verbose);
    match render(args) {
        Ok(path) => success!("Results saved to {}", path.display()),
        Err(e) => {
            error!("{e}");
            process::exit(1);
        }
    }
}

/// Run the dump command, exiting with status 1 on failure.
pub fn run_dump(args: &DumpArgs) {
    match dump(args) {
        Ok(text) => info!("{}", text.trim_end()),
        Err(e) => {
            error!("{e}");
            process::exit(1);
        }
    }
}

/// Draw the bodies in `args.bodies` onto `args.image` and save the result.
///
/// # Errors
///
/// Returns an error if an input cannot be read or the output cannot be saved.
pub fn render(args: &RenderArgs) -> Result<PathBuf> {
    section!("Skeleton Overlay {VERSION}");

    let frame = BodyFrame::read(&args.bodies)?;
    let image = image::open(&args.image)?;
    verbose!(
        "{}: {}x{}, {}",
        args.image.display(),
        image.width(),
        image.height(),
        frame_summary(&frame)
    );

    let config = OverlayConfig::new()
        .with_unique_colors(args.unique_colors)
        .with_only_segments(args.only_segments)
        .with_show_id(args.show_id);
    let font = if args.show_id {
        resolve_font(args.font.as_deref())
    } else {
        None
    };

    let annotated = annotate_image(
        &image,
        &frame.bodies,
        &SEGMENT_PAIRS,
        &SkeletonRenderer::new(config),
        font.as_ref(),
    )?;

    let output = args
        .output
        .clone()
        .unwrap_or_else(|| default_output(&args.image));
    save_image(&annotated, &output)?;
    Ok(output)
}

/// Format the bodies in `args.bodies` as text or coordinate arrays.
///
/// # Errors
///
/// Returns an error if the bodies file cannot be read.
pub fn dump(args: &DumpArgs) -> Result<String> {
    let frame = BodyFrame::read(&args.bodies)?;
    let mut out = String::new();
    for body in &frame.bodies {
        if args.numeric {
            out.push_str(&format!("Body Id: {}\n{}\n", body.id(), body.to_array()));
        } else {
            out.push_str(&body.to_string());
        }
        out.push('\n');
    }
    Ok(out)
}

/// Body count, noting bodies without any detected joint.
fn frame_summary(frame: &BodyFrame) -> String {
    let total = count_label(frame.bodies.len(), "body");
    let empty = frame
        .bodies
        .iter()
        .filter(|b| b.detected_count() == 0)
        .count();
    if empty == 0 {
        total
    } else {
        format!("{total} ({empty} without detected joints)")
    }
}

fn default_output(image: &Path) -> PathBuf {
    let name = image
        .file_name()
        .map_or_else(|| PathBuf::from("render.png"), PathBuf::from);
    find_next_run_dir(Path::new("runs"), "render").join(name)
}
