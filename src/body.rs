// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Tracked body data: per-joint positions, confidences and track ids.
//!
//! A [`Body2D`] always holds exactly [`JOINT_COUNT`] joints in topology order.
//! Sensor output reports undetected joints at pixel `(0, 0)`; that sentinel is
//! resolved once, when a [`Joint2D`] is built, into an absent position.

use std::fmt;

use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::error::OverlayError;
use crate::skeleton::{JOINT_COUNT, JointId};

/// Per-joint confidence reported by the body tracker.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    /// Joint is out of range or not tracked.
    #[default]
    None = 0,
    /// Joint is predicted rather than observed.
    Low = 1,
    /// Joint is observed.
    Medium = 2,
    /// Reserved by the sensor SDK.
    High = 3,
}

impl Confidence {
    /// Convert a raw sensor confidence level.
    ///
    /// # Returns
    ///
    /// * `None` if the level is outside `0..=3`.
    #[must_use]
    pub const fn from_level(level: u32) -> Option<Self> {
        match level {
            0 => Some(Self::None),
            1 => Some(Self::Low),
            2 => Some(Self::Medium),
            3 => Some(Self::High),
            _ => None,
        }
    }

    /// Raw sensor confidence level.
    #[must_use]
    pub const fn level(self) -> u32 {
        self as u32
    }

    /// Lowercase name of the level.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Integer pixel position in image space.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Point2 {
    pub x: i32,
    pub y: i32,
}

impl Point2 {
    /// Create a new point.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl From<(i32, i32)> for Point2 {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

/// One skeletal landmark in image space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Joint2D {
    index: usize,
    position: Option<Point2>,
    confidence: Confidence,
}

impl Joint2D {
    /// Create a joint with an explicit (possibly absent) position.
    ///
    /// `Some((0, 0))` is the sensor's "not available" sentinel and is stored
    /// as absent.
    #[must_use]
    pub const fn new(index: usize, position: Option<Point2>, confidence: Confidence) -> Self {
        let position = match position {
            Some(Point2 { x: 0, y: 0 }) => None,
            p => p,
        };
        Self {
            index,
            position,
            confidence,
        }
    }

    /// Create a joint from raw sensor pixel coordinates.
    ///
    /// Coordinates are truncated to whole pixels. A position that truncates to
    /// `(0, 0)` is the sensor's "not available" sentinel and becomes absent.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn from_sensor(index: usize, x: f32, y: f32, confidence: Confidence) -> Self {
        Self::new(index, Some(Point2::new(x as i32, y as i32)), confidence)
    }

    /// An undetected joint.
    #[must_use]
    pub const fn absent(index: usize) -> Self {
        Self::new(index, None, Confidence::None)
    }

    /// Topology index of the joint.
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Named joint for this index, if it belongs to the topology.
    #[must_use]
    pub fn joint_id(&self) -> Option<JointId> {
        JointId::from_index(self.index)
    }

    /// Pixel position, or `None` if the tracker did not locate the joint.
    #[must_use]
    pub const fn position(&self) -> Option<Point2> {
        self.position
    }

    /// Tracker confidence.
    #[must_use]
    pub const fn confidence(&self) -> Confidence {
        self.confidence
    }

    /// Whether the joint has a usable position.
    #[must_use]
    pub const fn is_detected(&self) -> bool {
        self.position.is_some()
    }

    /// Pixel coordinates, with absent joints at `(0, 0)`.
    #[must_use]
    pub fn coordinates(&self) -> Point2 {
        self.position.unwrap_or_default()
    }
}

impl fmt::Display for Joint2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = self.joint_id().map_or("unknown", JointId::name);
        match self.position {
            Some(p) => write!(
                f,
                "{} {name}: position [{}, {}], confidence {}",
                self.index, p.x, p.y, self.confidence
            ),
            None => write!(
                f,
                "{} {name}: position absent, confidence {}",
                self.index, self.confidence
            ),
        }
    }
}

/// Lifecycle of a body record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BodyState {
    /// Placeholder with no tracking data.
    #[default]
    Uninitialized,
    /// Built from tracking output and usable.
    Ready,
    /// Released by its owner; no longer usable.
    Destroyed,
}

/// One tracked person's 2D skeleton at one frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Body2DRecord", into = "Body2DRecord")]
pub struct Body2D {
    id: u32,
    joints: [Joint2D; JOINT_COUNT],
    state: BodyState,
}

impl Body2D {
    /// Create a ready body from joints in topology order.
    ///
    /// Joint indices are restamped from their array position.
    ///
    /// # Arguments
    ///
    /// * `id` - Track id, stable across frames for the same person.
    /// * `joints` - Exactly [`JOINT_COUNT`] joints.
    #[must_use]
    pub fn new(id: u32, mut joints: [Joint2D; JOINT_COUNT]) -> Self {
        for (i, joint) in joints.iter_mut().enumerate() {
            joint.index = i;
        }
        Self {
            id,
            joints,
            state: BodyState::Ready,
        }
    }

    /// A body slot holding no tracking data.
    #[must_use]
    pub fn uninitialized() -> Self {
        Self {
            id: 0,
            joints: std::array::from_fn(Joint2D::absent),
            state: BodyState::Uninitialized,
        }
    }

    /// Track id.
    #[must_use]
    pub const fn id(&self) -> u32 {
        self.id
    }

    /// Lifecycle state.
    #[must_use]
    pub const fn state(&self) -> BodyState {
        self.state
    }

    /// Whether the body holds usable tracking data.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.state == BodyState::Ready
    }

    /// Release the body. Subsequent validity checks return `false`.
    pub fn destroy(&mut self) {
        if self.is_valid() {
            self.state = BodyState::Destroyed;
        }
    }

    /// All joints in topology order.
    #[must_use]
    pub const fn joints(&self) -> &[Joint2D; JOINT_COUNT] {
        &self.joints
    }

    /// Joint at a topology index.
    #[must_use]
    pub fn joint(&self, index: usize) -> Option<&Joint2D> {
        self.joints.get(index)
    }

    /// Number of joints with a usable position.
    #[must_use]
    pub fn detected_count(&self) -> usize {
        self.joints.iter().filter(|j| j.is_detected()).count()
    }

    /// Pixel coordinates as a `(JOINT_COUNT, 2)` array, absent joints at `(0, 0)`.
    ///
    /// # Returns
    ///
    /// * An owned array of `[x, y]` rows in topology order.
    #[must_use]
    pub fn to_array(&self) -> Array2<i32> {
        Array2::from_shape_fn((JOINT_COUNT, 2), |(i, c)| {
            let p = self.joints[i].coordinates();
            if c == 0 { p.x } else { p.y }
        })
    }
}

impl Default for Body2D {
    fn default() -> Self {
        Self::uninitialized()
    }
}

impl fmt::Display for Body2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Body Id: {}", self.id)?;
        writeln!(f)?;
        for joint in &self.joints {
            writeln!(f, "{joint}")?;
        }
        Ok(())
    }
}

/// One skeletal landmark in sensor space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Joint3D {
    /// Position in millimetres.
    pub position: [f32; 3],
    /// Orientation quaternion `[w, x, y, z]`.
    #[serde(default = "identity_orientation")]
    pub orientation: [f32; 4],
    /// Tracker confidence.
    #[serde(default)]
    pub confidence: Confidence,
}

const fn identity_orientation() -> [f32; 4] {
    [1.0, 0.0, 0.0, 0.0]
}

impl Joint3D {
    /// Create a joint with identity orientation.
    #[must_use]
    pub const fn new(position: [f32; 3], confidence: Confidence) -> Self {
        Self {
            position,
            orientation: identity_orientation(),
            confidence,
        }
    }
}

/// One tracked person's 3D skeleton in sensor space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Body3DRecord", into = "Body3DRecord")]
pub struct Body3D {
    /// Track id.
    pub id: u32,
    /// Joints in topology order.
    pub joints: [Joint3D; JOINT_COUNT],
}

impl Body3D {
    /// Create a 3D body.
    #[must_use]
    pub const fn new(id: u32, joints: [Joint3D; JOINT_COUNT]) -> Self {
        Self { id, joints }
    }
}

fn joint_count_error(got: usize) -> OverlayError {
    OverlayError::InvalidBody(format!("expected {JOINT_COUNT} joints, got {got}"))
}

#[derive(Serialize, Deserialize)]
struct Joint2DRecord {
    position: Option<[f32; 2]>,
    #[serde(default)]
    confidence: Confidence,
}

#[derive(Serialize, Deserialize)]
struct Body2DRecord {
    id: u32,
    joints: Vec<Joint2DRecord>,
}

impl TryFrom<Body2DRecord> for Body2D {
    type Error = OverlayError;

    fn try_from(record: Body2DRecord) -> Result<Self, Self::Error> {
        let joints: Vec<Joint2D> = record
            .joints
            .into_iter()
            .enumerate()
            .map(|(i, j)| match j.position {
                Some([x, y]) => Joint2D::from_sensor(i, x, y, j.confidence),
                None => Joint2D::new(i, None, j.confidence),
            })
            .collect();
        let joints: [Joint2D; JOINT_COUNT] = joints
            .try_into()
            .map_err(|v: Vec<Joint2D>| joint_count_error(v.len()))?;
        Ok(Self::new(record.id, joints))
    }
}

impl From<Body2D> for Body2DRecord {
    #[allow(clippy::cast_precision_loss)]
    fn from(body: Body2D) -> Self {
        Self {
            id: body.id,
            joints: body
                .joints
                .iter()
                .map(|j| Joint2DRecord {
                    position: j.position.map(|p| [p.x as f32, p.y as f32]),
                    confidence: j.confidence,
                })
                .collect(),
        }
    }
}

#[derive(Serialize, Deserialize)]
struct Body3DRecord {
    id: u32,
    joints: Vec<Joint3D>,
}

impl TryFrom<Body3DRecord> for Body3D {
    type Error = OverlayError;

    fn try_from(record: Body3DRecord) -> Result<Self, Self::Error> {
        let joints: [Joint3D; JOINT_COUNT] = record
            .joints
            .try_into()
            .map_err(|v: Vec<Joint3D>| joint_count_error(v.len()))?;
        Ok(Self::new(record.id, joints))
    }
}

impl From<Body3D> for Body3DRecord {
    fn from(body: Body3D) -> Self {
        Self {
            id: body.id,
            joints: body.joints.to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_body(id: u32) -> Body2D {
        let joints = std::array::from_fn(|i| {
            let v = i32::try_from(i).unwrap();
            Joint2D::new(i, Some(Point2::new(10 * v + 1, 20 * v + 2)), Confidence::Medium)
        });
        Body2D::new(id, joints)
    }

    #[test]
    fn test_sentinel_becomes_absent() {
        let joint = Joint2D::from_sensor(3, 0.0, 0.0, Confidence::Low);
        assert!(!joint.is_detected());
        assert_eq!(joint.coordinates(), Point2::new(0, 0));
        assert_eq!(joint.confidence(), Confidence::Low);

        // Sub-pixel positions truncate onto the sentinel as well.
        assert!(!Joint2D::from_sensor(0, 0.4, 0.9, Confidence::Medium).is_detected());
        // The origin on only one axis is a real position.
        let edge = Joint2D::from_sensor(0, 0.0, 15.7, Confidence::Medium);
        assert_eq!(edge.position(), Some(Point2::new(0, 15)));

        let explicit = Joint2D::new(4, Some((0, 0).into()), Confidence::High);
        assert_eq!(explicit.position(), None);
        assert_eq!(explicit.confidence(), Confidence::High);
    }

    #[test]
    fn test_confidence_levels() {
        assert_eq!(Confidence::from_level(2), Some(Confidence::Medium));
        assert_eq!(Confidence::from_level(4), None);
        assert_eq!(Confidence::High.level(), 3);
        assert!(Confidence::Low < Confidence::Medium);
    }

    #[test]
    fn test_body_lifecycle() {
        let mut body = sample_body(4);
        assert_eq!(body.state(), BodyState::Ready);
        assert!(body.is_valid());

        body.destroy();
        assert_eq!(body.state(), BodyState::Destroyed);
        assert!(!body.is_valid());

        let empty = Body2D::default();
        assert_eq!(empty.state(), BodyState::Uninitialized);
        assert!(!empty.is_valid());
        assert_eq!(empty.detected_count(), 0);
    }

    #[test]
    fn test_new_restamps_indices() {
        let joints = [Joint2D::absent(7); JOINT_COUNT];
        let body = Body2D::new(1, joints);
        for (i, joint) in body.joints().iter().enumerate() {
            assert_eq!(joint.index(), i);
        }
    }

    #[test]
    fn test_to_array() {
        let mut joints = *sample_body(0).joints();
        joints[5] = Joint2D::absent(5);
        let body = Body2D::new(9, joints);
        let arr = body.to_array();

        assert_eq!(arr.shape(), &[JOINT_COUNT, 2]);
        assert_eq!(arr[[0, 0]], 1);
        assert_eq!(arr[[0, 1]], 2);
        assert_eq!(arr[[31, 0]], 311);
        assert_eq!(arr[[31, 1]], 622);
        assert_eq!(arr[[5, 0]], 0);
        assert_eq!(arr[[5, 1]], 0);
    }

    #[test]
    fn test_text_dump() {
        let mut joints = *sample_body(0).joints();
        joints[1] = Joint2D::absent(1);
        let text = Body2D::new(12, joints).to_string();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "Body Id: 12");
        assert_eq!(lines[1], "");
        assert_eq!(lines[2], "0 pelvis: position [1, 2], confidence medium");
        assert_eq!(lines[3], "1 spine navel: position absent, confidence none");
        assert_eq!(lines.len(), 2 + JOINT_COUNT);
        assert!(lines[29].starts_with("27 nose:"));
    }

    #[test]
    fn test_json_roundtrip_keeps_absent_joints() {
        let mut joints = *sample_body(0).joints();
        joints[2] = Joint2D::absent(2);
        let body = Body2D::new(3, joints);

        let json = serde_json::to_string(&body).unwrap();
        let back: Body2D = serde_json::from_str(&json).unwrap();
        assert_eq!(back, body);
        assert!(!back.joints()[2].is_detected());
    }

    #[test]
    fn test_json_zero_position_is_sentinel() {
        let mut joints = vec![serde_json::json!({"position": [5.5, 6.5], "confidence": "high"}); 32];
        joints[0] = serde_json::json!({"position": [0, 0], "confidence": "low"});
        let value = serde_json::json!({"id": 2, "joints": joints});

        let body: Body2D = serde_json::from_value(value).unwrap();
        assert!(!body.joints()[0].is_detected());
        assert_eq!(body.joints()[1].position(), Some(Point2::new(5, 6)));
        assert_eq!(body.joints()[1].confidence(), Confidence::High);
    }

    #[test]
    fn test_json_rejects_wrong_joint_count() {
        let value = serde_json::json!({
            "id": 1,
            "joints": [{"position": [1, 1]}, {"position": [2, 2]}],
        });
        let err = serde_json::from_value::<Body2D>(value).unwrap_err();
        assert!(err.to_string().contains("expected 32 joints, got 2"));

        let value = serde_json::json!({"id": 1, "joints": [{"position": [1.0, 2.0, 3.0]}]});
        assert!(serde_json::from_value::<Body3D>(value).is_err());
    }

    #[test]
    fn test_body3d_defaults() {
        let joints = vec![serde_json::json!({"position": [1.0, 2.0, 3.0]}); 32];
        let body: Body3D = serde_json::from_value(serde_json::json!({"id": 8, "joints": joints})).unwrap();
        assert_eq!(body.id, 8);
        assert_eq!(body.joints[0].orientation, [1.0, 0.0, 0.0, 0.0]);
        assert_eq!(body.joints[0].confidence, Confidence::None);
    }
}
