// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Reprojection of 3D skeletons into a camera's image plane.
//!
//! The geometry lives in the sensor's calibration service; this module only
//! fans the joints out to it and reassembles the answers into a [`Body2D`].

use std::fmt;

use crate::body::{Body2D, Body3D, Joint2D};
use crate::skeleton::JOINT_COUNT;

/// Coordinate system a point is expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CalibrationType {
    /// Depth camera.
    Depth,
    /// Color camera.
    Color,
    /// Gyroscope sensor.
    Gyro,
    /// Accelerometer sensor.
    Accel,
}

impl fmt::Display for CalibrationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Depth => "depth",
            Self::Color => "color",
            Self::Gyro => "gyro",
            Self::Accel => "accel",
        };
        f.write_str(name)
    }
}

/// A calibration service able to map 3D points onto a camera's pixels.
pub trait Calibration {
    /// Error reported by the service.
    type Error;

    /// Convert a 3D point (millimetres) in `source` space to a pixel in the
    /// image plane of `target`.
    ///
    /// # Returns
    ///
    /// * `Ok(None)` when the point has no valid projection, e.g. it lies
    ///   behind the camera or outside the calibrated range.
    fn convert_3d_to_2d(
        &self,
        point: [f32; 3],
        source: CalibrationType,
        target: CalibrationType,
    ) -> Result<Option<[f32; 2]>, Self::Error>;
}

/// Project a 3D body into the image plane of `target`.
///
/// Joint order, count and confidence levels are carried over unchanged.
/// Joints without a valid projection become absent.
///
/// # Errors
///
/// The first error reported by `calibration` is returned as is.
pub fn project<C: Calibration>(
    body: &Body3D,
    calibration: &C,
    source: CalibrationType,
    target: CalibrationType,
) -> Result<Body2D, C::Error> {
    let mut joints = [Joint2D::absent(0); JOINT_COUNT];
    for (i, (slot, joint)) in joints.iter_mut().zip(&body.joints).enumerate() {
        *slot = match calibration.convert_3d_to_2d(joint.position, source, target)? {
            Some([x, y]) => Joint2D::from_sensor(i, x, y, joint.confidence),
            None => Joint2D::new(i, None, joint.confidence),
        };
    }
    Ok(Body2D::new(body.id, joints))
}
