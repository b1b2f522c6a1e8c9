//! Core types for the hand model
//!
//! Defines the raw detector sample and the derived joint/hand aggregates that
//! flow through the frame pipeline.

use crate::geometry::Point3;
use crate::model::joint_table::JointId;
use serde::{Deserialize, Serialize};

/// One raw input element from the upstream pose detector, identified only by
/// its slot index. Produced per frame, consumed immediately, never persisted
/// directly.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LandmarkSample {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    /// Visibility/confidence score. Conventionally `[0, 1]` but the detector
    /// does not clamp it.
    #[serde(default)]
    pub visibility: f64,
}

impl LandmarkSample {
    pub const fn new(x: f64, y: f64, z: f64, visibility: f64) -> Self {
        Self { x, y, z, visibility }
    }

    /// The sample's position as a geometry point.
    pub fn position(&self) -> Point3 {
        Point3::new(self.x, self.y, self.z)
    }
}

/// Anatomical grouping of a joint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JointCategory {
    Wrist,
    Palm,
    Finger,
}

/// A named anatomical point derived from exactly one landmark sample,
/// enriched with an optional computed angle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Joint {
    /// Joint identity
    pub id: JointId,
    /// Anatomical grouping
    pub category: JointCategory,
    /// Position copied verbatim from the landmark sample
    pub position: Point3,
    /// Confidence copied verbatim from the sample's visibility
    pub confidence: f64,
    /// Landmark slot this joint was derived from (0-20)
    pub source_index: usize,
    /// Flexion angle at this joint, present only when the joint has a
    /// kinematic triple. Fingertips never carry an angle.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub angle_degrees: Option<f64>,
}

/// The thumb's four joints, proximal to distal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Thumb {
    pub cmc: Joint,
    pub mcp: Joint,
    pub ip: Joint,
    pub tip: Joint,
}

/// A non-thumb digit's four joints, proximal to distal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Finger {
    pub mcp: Joint,
    pub pip: Joint,
    pub dip: Joint,
    pub tip: Joint,
}

/// All five digits of one hand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fingers {
    pub thumb: Thumb,
    pub index: Finger,
    pub middle: Finger,
    pub ring: Finger,
    pub pinky: Finger,
}

/// A fully populated hand model: one wrist joint plus five digits.
///
/// A hand that is not visible to the detector is represented as `None` at the
/// call sites, never as a zero-filled `Hand`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hand {
    pub wrist: Joint,
    pub fingers: Fingers,
}

impl Hand {
    /// Look up a joint by identity.
    pub fn joint(&self, id: JointId) -> &Joint {
        let f = &self.fingers;
        match id {
            JointId::Wrist => &self.wrist,
            JointId::ThumbCmc => &f.thumb.cmc,
            JointId::ThumbMcp => &f.thumb.mcp,
            JointId::ThumbIp => &f.thumb.ip,
            JointId::ThumbTip => &f.thumb.tip,
            JointId::IndexMcp => &f.index.mcp,
            JointId::IndexPip => &f.index.pip,
            JointId::IndexDip => &f.index.dip,
            JointId::IndexTip => &f.index.tip,
            JointId::MiddleMcp => &f.middle.mcp,
            JointId::MiddlePip => &f.middle.pip,
            JointId::MiddleDip => &f.middle.dip,
            JointId::MiddleTip => &f.middle.tip,
            JointId::RingMcp => &f.ring.mcp,
            JointId::RingPip => &f.ring.pip,
            JointId::RingDip => &f.ring.dip,
            JointId::RingTip => &f.ring.tip,
            JointId::PinkyMcp => &f.pinky.mcp,
            JointId::PinkyPip => &f.pinky.pip,
            JointId::PinkyDip => &f.pinky.dip,
            JointId::PinkyTip => &f.pinky.tip,
        }
    }

    /// All 21 joints in landmark slot order.
    pub fn joints(&self) -> impl Iterator<Item = &Joint> {
        JointId::ALL.iter().map(|id| self.joint(*id))
    }
}
