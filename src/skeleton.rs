// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Azure Kinect body-tracking skeleton topology.
//!
//! Joint order and bone pairs follow the sensor SDK's joint enumeration. The
//! order is fixed: joint `i` of every body is always the same landmark.

use std::fmt;

/// Number of joints in a tracked skeleton.
pub const JOINT_COUNT: usize = 32;

/// A drawable bone: pair of joint indices.
pub type SegmentPair = [usize; 2];

/// Named joints of the body-tracking skeleton, in topology order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(usize)]
pub enum JointId {
    Pelvis = 0,
    SpineNavel,
    SpineChest,
    Neck,
    ClavicleLeft,
    ShoulderLeft,
    ElbowLeft,
    WristLeft,
    HandLeft,
    HandtipLeft,
    ThumbLeft,
    ClavicleRight,
    ShoulderRight,
    ElbowRight,
    WristRight,
    HandRight,
    HandtipRight,
    ThumbRight,
    HipLeft,
    KneeLeft,
    AnkleLeft,
    FootLeft,
    HipRight,
    KneeRight,
    AnkleRight,
    FootRight,
    Head,
    Nose,
    EyeLeft,
    EarLeft,
    EyeRight,
    EarRight,
}

impl JointId {
    /// All joints in index order.
    pub const ALL: [JointId; JOINT_COUNT] = [
        Self::Pelvis,
        Self::SpineNavel,
        Self::SpineChest,
        Self::Neck,
        Self::ClavicleLeft,
        Self::ShoulderLeft,
        Self::ElbowLeft,
        Self::WristLeft,
        Self::HandLeft,
        Self::HandtipLeft,
        Self::ThumbLeft,
        Self::ClavicleRight,
        Self::ShoulderRight,
        Self::ElbowRight,
        Self::WristRight,
        Self::HandRight,
        Self::HandtipRight,
        Self::ThumbRight,
        Self::HipLeft,
        Self::KneeLeft,
        Self::AnkleLeft,
        Self::FootLeft,
        Self::HipRight,
        Self::KneeRight,
        Self::AnkleRight,
        Self::FootRight,
        Self::Head,
        Self::Nose,
        Self::EyeLeft,
        Self::EarLeft,
        Self::EyeRight,
        Self::EarRight,
    ];

    /// Look up a joint by its topology index.
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Topology index of this joint.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Human-readable joint name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Pelvis => "pelvis",
            Self::SpineNavel => "spine navel",
            Self::SpineChest => "spine chest",
            Self::Neck => "neck",
            Self::ClavicleLeft => "clavicle left",
            Self::ShoulderLeft => "shoulder left",
            Self::ElbowLeft => "elbow left",
            Self::WristLeft => "wrist left",
            Self::HandLeft => "hand left",
            Self::HandtipLeft => "handtip left",
            Self::ThumbLeft => "thumb left",
            Self::ClavicleRight => "clavicle right",
            Self::ShoulderRight => "shoulder right",
            Self::ElbowRight => "elbow right",
            Self::WristRight => "wrist right",
            Self::HandRight => "hand right",
            Self::HandtipRight => "handtip right",
            Self::ThumbRight => "thumb right",
            Self::HipLeft => "hip left",
            Self::KneeLeft => "knee left",
            Self::AnkleLeft => "ankle left",
            Self::FootLeft => "foot left",
            Self::HipRight => "hip right",
            Self::KneeRight => "knee right",
            Self::AnkleRight => "ankle right",
            Self::FootRight => "foot right",
            Self::Head => "head",
            Self::Nose => "nose",
            Self::EyeLeft => "eye left",
            Self::EarLeft => "ear left",
            Self::EyeRight => "eye right",
            Self::EarRight => "ear right",
        }
    }
}

impl fmt::Display for JointId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Joint the track id label is anchored to.
pub const LABEL_JOINT: usize = JointId::Nose as usize;

/// Body-tracking skeleton structure (pairs of joint indices).
/// Every joint except the pelvis hangs off exactly one parent.
pub const SEGMENT_PAIRS: [SegmentPair; 31] = [
    [1, 0],   // spine navel to pelvis
    [2, 1],   // spine chest to spine navel
    [3, 2],   // neck to spine chest
    [4, 2],   // left clavicle to spine chest
    [5, 4],   // left shoulder to left clavicle
    [6, 5],   // left elbow to left shoulder
    [7, 6],   // left wrist to left elbow
    [8, 7],   // left hand to left wrist
    [9, 8],   // left handtip to left hand
    [10, 7],  // left thumb to left wrist
    [11, 2],  // right clavicle to spine chest
    [12, 11], // right shoulder to right clavicle
    [13, 12], // right elbow to right shoulder
    [14, 13], // right wrist to right elbow
    [15, 14], // right hand to right wrist
    [16, 15], // right handtip to right hand
    [17, 14], // right thumb to right wrist
    [18, 0],  // left hip to pelvis
    [19, 18], // left knee to left hip
    [20, 19], // left ankle to left knee
    [21, 20], // left foot to left ankle
    [22, 0],  // right hip to pelvis
    [23, 22], // right knee to right hip
    [24, 23], // right ankle to right knee
    [25, 24], // right foot to right ankle
    [26, 3],  // head to neck
    [27, 26], // nose to head
    [28, 26], // left eye to head
    [29, 26], // left ear to head
    [30, 26], // right eye to head
    [31, 26], // right ear to head
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_joint_indices_match_order() {
        for (i, joint) in JointId::ALL.iter().enumerate() {
            assert_eq!(joint.index(), i);
            assert_eq!(JointId::from_index(i), Some(*joint));
        }
        assert_eq!(JointId::from_index(JOINT_COUNT), None);
    }

    #[test]
    fn test_label_joint_is_nose() {
        assert_eq!(LABEL_JOINT, 27);
        assert_eq!(JointId::Nose.to_string(), "nose");
    }

    #[test]
    fn test_segment_pairs_in_range() {
        for [a, b] in SEGMENT_PAIRS {
            assert!(a < JOINT_COUNT && b < JOINT_COUNT);
            assert_ne!(a, b);
        }
    }

    #[test]
    fn test_segment_pairs_form_tree() {
        // Each non-root joint appears exactly once as a child.
        let mut seen = [false; JOINT_COUNT];
        for [child, _] in SEGMENT_PAIRS {
            assert!(!seen[child], "joint {child} has two parents");
            seen[child] = true;
        }
        assert!(!seen[JointId::Pelvis.index()]);
        assert_eq!(seen.iter().filter(|s| **s).count(), JOINT_COUNT - 1);
    }
}
