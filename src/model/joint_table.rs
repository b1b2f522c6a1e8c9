//! Joint Table
//!
//! The fixed bidirectional mapping between landmark slot indices and
//! anatomical joint identities, plus the kinematic triple used to compute the
//! angle at each articulated joint. Both tables are compile-time constant;
//! nothing in the process mutates them.
//!
//! Slot order follows the MediaPipe hand-landmark convention: wrist first,
//! then thumb CMC/MCP/IP/TIP, then MCP/PIP/DIP/TIP for index, middle, ring
//! and pinky.

use crate::model::types::JointCategory;
use serde::{Deserialize, Serialize};

/// Number of landmark slots in one hand frame.
pub const LANDMARK_COUNT: usize = 21;

/// The 21 canonical anatomical joints of one hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum JointId {
    Wrist = 0,
    ThumbCmc = 1,
    ThumbMcp = 2,
    ThumbIp = 3,
    ThumbTip = 4,
    IndexMcp = 5,
    IndexPip = 6,
    IndexDip = 7,
    IndexTip = 8,
    MiddleMcp = 9,
    MiddlePip = 10,
    MiddleDip = 11,
    MiddleTip = 12,
    RingMcp = 13,
    RingPip = 14,
    RingDip = 15,
    RingTip = 16,
    PinkyMcp = 17,
    PinkyPip = 18,
    PinkyDip = 19,
    PinkyTip = 20,
}

impl JointId {
    /// Every joint in landmark slot order.
    pub const ALL: [JointId; LANDMARK_COUNT] = [
        JointId::Wrist,
        JointId::ThumbCmc,
        JointId::ThumbMcp,
        JointId::ThumbIp,
        JointId::ThumbTip,
        JointId::IndexMcp,
        JointId::IndexPip,
        JointId::IndexDip,
        JointId::IndexTip,
        JointId::MiddleMcp,
        JointId::MiddlePip,
        JointId::MiddleDip,
        JointId::MiddleTip,
        JointId::RingMcp,
        JointId::RingPip,
        JointId::RingDip,
        JointId::RingTip,
        JointId::PinkyMcp,
        JointId::PinkyPip,
        JointId::PinkyDip,
        JointId::PinkyTip,
    ];

    /// Resolve a landmark slot index to its joint identity.
    pub fn from_index(index: usize) -> Option<JointId> {
        Self::ALL.get(index).copied()
    }

    /// The landmark slot this joint is derived from.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Anatomical grouping of the joint.
    pub fn category(self) -> JointCategory {
        match self {
            JointId::Wrist => JointCategory::Wrist,
            _ => JointCategory::Finger,
        }
    }

    /// Whether this is a terminal joint (fingertip). Tips have no downstream
    /// neighbor and therefore no kinematic triple.
    pub fn is_tip(self) -> bool {
        matches!(
            self,
            JointId::ThumbTip
                | JointId::IndexTip
                | JointId::MiddleTip
                | JointId::RingTip
                | JointId::PinkyTip
        )
    }

    /// The ordered triple `(a, b, c)` whose angle at vertex `b == self`
    /// defines this joint's flexion angle. `None` for fingertips.
    pub fn kinematic_triple(self) -> Option<[JointId; 3]> {
        use JointId::*;
        match self {
            Wrist => Some([ThumbCmc, Wrist, IndexMcp]),
            ThumbCmc => Some([Wrist, ThumbCmc, ThumbMcp]),
            ThumbMcp => Some([ThumbCmc, ThumbMcp, ThumbIp]),
            ThumbIp => Some([ThumbMcp, ThumbIp, ThumbTip]),
            IndexMcp => Some([Wrist, IndexMcp, IndexPip]),
            IndexPip => Some([IndexMcp, IndexPip, IndexDip]),
            IndexDip => Some([IndexPip, IndexDip, IndexTip]),
            MiddleMcp => Some([Wrist, MiddleMcp, MiddlePip]),
            MiddlePip => Some([MiddleMcp, MiddlePip, MiddleDip]),
            MiddleDip => Some([MiddlePip, MiddleDip, MiddleTip]),
            RingMcp => Some([Wrist, RingMcp, RingPip]),
            RingPip => Some([RingMcp, RingPip, RingDip]),
            RingDip => Some([RingPip, RingDip, RingTip]),
            PinkyMcp => Some([Wrist, PinkyMcp, PinkyPip]),
            PinkyPip => Some([PinkyMcp, PinkyPip, PinkyDip]),
            PinkyDip => Some([PinkyPip, PinkyDip, PinkyTip]),
            ThumbTip | IndexTip | MiddleTip | RingTip | PinkyTip => None,
        }
    }
}
