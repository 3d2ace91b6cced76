// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

#![allow(clippy::multiple_crate_versions)]
#![cfg_attr(docsrs, feature(doc_cfg))]

//! # Skeleton Overlay
//!
//! Skeleton overlay rendering for body-tracking sensors. Takes the per-frame
//! output of a body tracker (32-joint Azure Kinect topology), reprojects 3D
//! skeletons into a camera's image plane through the sensor's calibration, and
//! draws bones, joints and track id labels onto video frames.
//!
//! ## Features
//!
//! - **Deterministic colors** - Each track id maps to a fixed color, distinct
//!   for the first `unique_colors` ids
//! - **Sentinel-aware drawing** - Undetected joints never produce bones
//! - **Pluggable surfaces** - Draw onto `image` buffers or record commands for
//!   any other backend
//! - **Reprojection** - Fan a 3D skeleton through any [`Calibration`] service
//! - **Dumps** - Text and `ndarray` views of a body for logging and analysis
//!
//! ## Quick Start (Library)
//!
//! ```no_run
//! use skeleton_overlay::{BodyFrame, ImageSurface, OverlayConfig, SkeletonRenderer};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let frame = BodyFrame::read("frame.json")?;
//!     let image = image::open("frame.jpg")?;
//!
//!     let renderer = SkeletonRenderer::new(OverlayConfig::new().with_only_segments(true));
//!     let mut surface = ImageSurface::new(image.to_rgb8());
//!     for body in &frame.bodies {
//!         renderer.draw(&mut surface, body)?;
//!         println!("{body}");
//!     }
//!     surface.into_image().save("annotated.jpg")?;
//!     Ok(())
//! }
//! ```
//!
//! ## Recording Draw Commands
//!
//! ```rust
//! use skeleton_overlay::{Body2D, CommandList, SkeletonRenderer};
//!
//! let mut commands = CommandList::new();
//! SkeletonRenderer::default()
//!     .draw(&mut commands, &Body2D::uninitialized())
//!     .unwrap();
//! // Uninitialized bodies draw nothing.
//! assert!(commands.commands().is_empty());
//! ```
//!
//! ## CLI Usage
//!
//! ```bash
//! # Draw every body in frame.json onto frame.jpg
//! skeleton-overlay render --bodies frame.json --image frame.jpg
//!
//! # Bones only, with track id labels
//! skeleton-overlay render -b frame.json -i frame.jpg --only-segments --show-id
//!
//! # Print joints as text or as coordinate arrays
//! skeleton-overlay dump --bodies frame.json
//! skeleton-overlay dump --bodies frame.json --numeric
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`body`] | Tracked body types ([`Body2D`], [`Joint2D`], [`Body3D`]) |
//! | [`skeleton`] | Joint names and the bone table ([`SEGMENT_PAIRS`]) |
//! | [`projection`] | [`Calibration`] trait and [`project`] |
//! | [`visualizer`] | Colors, drawing surfaces and [`SkeletonRenderer`] |
//! | [`config`] | [`OverlayConfig`] for customizing the overlay |
//! | [`io`] | Body frame files and image saving |
//! | [`error`] | Error types ([`OverlayError`], [`Result`]) |
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `annotate` | Image surface, font download and the CLI (default) |

// Modules
#[cfg(feature = "annotate")]
pub mod annotate;
pub mod body;
pub mod cli;
pub mod config;
pub mod error;
pub mod io;
pub mod projection;
pub mod skeleton;
pub mod utils;
pub mod visualizer;

// Re-export main types for convenience
pub use body::{Body2D, Body3D, BodyState, Confidence, Joint2D, Joint3D, Point2};
pub use config::OverlayConfig;
pub use error::{OverlayError, Result};
pub use io::BodyFrame;
pub use projection::{Calibration, CalibrationType, project};
pub use skeleton::{JOINT_COUNT, JointId, SEGMENT_PAIRS, SegmentPair};
pub use visualizer::{
    Color, CommandList, DrawCommand, DrawSurface, SkeletonRenderer, TextStyle, assign_color,
    draw_body,
};

#[cfg(feature = "annotate")]
pub use visualizer::ImageSurface;

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name.
pub const NAME: &str = env!("CARGO_PKG_NAME");
