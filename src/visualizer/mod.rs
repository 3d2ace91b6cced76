// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Visualization tools for tracked skeletons.

/// Track id colors.
pub mod color;

/// Skeleton overlay rendering.
pub mod renderer;

/// Drawing surface abstraction and implementations.
pub mod surface;

pub use color::{Color, assign_color};
pub use renderer::{SkeletonRenderer, draw_body};
pub use surface::{CommandList, DrawCommand, DrawSurface, TextStyle};

#[cfg(feature = "annotate")]
pub use surface::ImageSurface;
