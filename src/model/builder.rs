//! Kinematic Model Builder
//!
//! Consumes one frame of raw landmark samples and produces a fully populated
//! [`Hand`]. The builder is pure: no I/O, no shared state, called once per
//! frame independently for the left and right hand.

use crate::geometry::angle_at_vertex;
use crate::model::joint_table::{JointId, LANDMARK_COUNT};
use crate::model::types::{Finger, Fingers, Hand, Joint, LandmarkSample, Thumb};
use crate::{Error, Result};

/// Build a hand model from one frame of landmark samples.
///
/// Returns `Ok(None)` when the landmark sequence is absent or empty - a hand
/// that is not currently visible to the detector is an expected outcome, not
/// a failure. A non-empty sequence whose length is not exactly
/// [`LANDMARK_COUNT`] fails with [`Error::MalformedFrame`]; partial
/// detections are never silently accepted.
pub fn build_hand(landmarks: Option<&[LandmarkSample]>) -> Result<Option<Hand>> {
    let samples = match landmarks {
        None => return Ok(None),
        Some(s) if s.is_empty() => return Ok(None),
        Some(s) if s.len() != LANDMARK_COUNT => {
            return Err(Error::MalformedFrame {
                expected: LANDMARK_COUNT,
                actual: s.len(),
            })
        }
        Some(s) => s,
    };

    // One parametrized constructor for all 21 entries; the assembly below is
    // a pure structural transform over the fixed joint table.
    let j = |id: JointId| build_joint(id, samples);

    Ok(Some(Hand {
        wrist: j(JointId::Wrist)?,
        fingers: Fingers {
            thumb: Thumb {
                cmc: j(JointId::ThumbCmc)?,
                mcp: j(JointId::ThumbMcp)?,
                ip: j(JointId::ThumbIp)?,
                tip: j(JointId::ThumbTip)?,
            },
            index: Finger {
                mcp: j(JointId::IndexMcp)?,
                pip: j(JointId::IndexPip)?,
                dip: j(JointId::IndexDip)?,
                tip: j(JointId::IndexTip)?,
            },
            middle: Finger {
                mcp: j(JointId::MiddleMcp)?,
                pip: j(JointId::MiddlePip)?,
                dip: j(JointId::MiddleDip)?,
                tip: j(JointId::MiddleTip)?,
            },
            ring: Finger {
                mcp: j(JointId::RingMcp)?,
                pip: j(JointId::RingPip)?,
                dip: j(JointId::RingDip)?,
                tip: j(JointId::RingTip)?,
            },
            pinky: Finger {
                mcp: j(JointId::PinkyMcp)?,
                pip: j(JointId::PinkyPip)?,
                dip: j(JointId::PinkyDip)?,
                tip: j(JointId::PinkyTip)?,
            },
        },
    }))
}

/// Construct one joint: a pure copy of its landmark sample, plus the angle
/// from its kinematic triple when one is defined. "No triple" means "no
/// angle," never an error; a degenerate triple propagates up so the caller
/// can skip the hand rather than record a fabricated angle.
fn build_joint(id: JointId, samples: &[LandmarkSample]) -> Result<Joint> {
    let sample = &samples[id.index()];

    let angle_degrees = match id.kinematic_triple() {
        Some([a, b, c]) => Some(angle_at_vertex(
            samples[a.index()].position(),
            samples[b.index()].position(),
            samples[c.index()].position(),
        )?),
        None => None,
    };

    Ok(Joint {
        id,
        category: id.category(),
        position: sample.position(),
        confidence: sample.visibility,
        source_index: id.index(),
        angle_degrees,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A synthetic frame with every landmark at a distinct position, so no
    /// kinematic triple is degenerate.
    fn spread_frame() -> Vec<LandmarkSample> {
        (0..LANDMARK_COUNT)
            .map(|i| {
                let t = i as f64;
                LandmarkSample::new(t * 0.01, (t * 0.02).sin(), (t * 0.03).cos(), 0.5 + t * 0.01)
            })
            .collect()
    }

    #[test]
    fn test_absent_landmarks_build_no_hand() {
        assert!(build_hand(None).unwrap().is_none());
    }

    #[test]
    fn test_empty_landmarks_build_no_hand() {
        assert!(build_hand(Some(&[])).unwrap().is_none());
    }

    #[test]
    fn test_partial_frame_is_malformed() {
        let samples = vec![LandmarkSample::new(0.0, 0.0, 0.0, 1.0); 20];
        let err = build_hand(Some(&samples)).unwrap_err();
        assert!(matches!(
            err,
            Error::MalformedFrame {
                expected: 21,
                actual: 20
            }
        ));
    }

    #[test]
    fn test_oversized_frame_is_malformed() {
        let samples = vec![LandmarkSample::new(0.1, 0.2, 0.3, 1.0); 22];
        let err = build_hand(Some(&samples)).unwrap_err();
        assert!(matches!(err, Error::MalformedFrame { actual: 22, .. }));
    }

    #[test]
    fn test_every_joint_copies_its_sample() {
        let samples = spread_frame();
        let hand = build_hand(Some(&samples)).unwrap().unwrap();

        for id in JointId::ALL {
            let joint = hand.joint(id);
            let sample = &samples[id.index()];
            assert_eq!(joint.position, sample.position(), "{:?}", id);
            assert_eq!(joint.confidence, sample.visibility, "{:?}", id);
            assert_eq!(joint.source_index, id.index(), "{:?}", id);
            assert_eq!(joint.category, id.category(), "{:?}", id);
        }
    }

    #[test]
    fn test_tips_have_no_angle_others_do() {
        let samples = spread_frame();
        let hand = build_hand(Some(&samples)).unwrap().unwrap();

        for id in JointId::ALL {
            let joint = hand.joint(id);
            if id.is_tip() {
                assert!(joint.angle_degrees.is_none(), "{:?}", id);
            } else {
                let angle = joint.angle_degrees.unwrap();
                assert!((0.0..=180.0).contains(&angle), "{:?} -> {}", id, angle);
            }
        }
    }

    #[test]
    fn test_wrist_right_angle_scenario() {
        // Wrist at origin, thumb CMC along +x, index MCP along +y: the
        // wrist's triple (ThumbCmc, Wrist, IndexMcp) spans a right angle.
        let mut samples = spread_frame();
        samples[JointId::Wrist.index()] = LandmarkSample::new(0.0, 0.0, 0.0, 1.0);
        samples[JointId::ThumbCmc.index()] = LandmarkSample::new(1.0, 0.0, 0.0, 1.0);
        samples[JointId::IndexMcp.index()] = LandmarkSample::new(0.0, 1.0, 0.0, 1.0);

        let hand = build_hand(Some(&samples)).unwrap().unwrap();
        let angle = hand.wrist.angle_degrees.unwrap();
        assert!((angle - 90.0).abs() < 1e-6);
    }

    #[test]
    fn test_degenerate_triple_propagates() {
        // Index PIP coincides with index MCP, so the PIP triple collapses.
        let mut samples = spread_frame();
        samples[JointId::IndexPip.index()] = samples[JointId::IndexMcp.index()];

        let err = build_hand(Some(&samples)).unwrap_err();
        assert!(matches!(err, Error::DegenerateVector(_)));
    }

    #[test]
    fn test_builder_is_deterministic() {
        let samples = spread_frame();
        let first = build_hand(Some(&samples)).unwrap().unwrap();
        let second = build_hand(Some(&samples)).unwrap().unwrap();
        assert_eq!(first, second);
        assert_eq!(first.joints().count(), LANDMARK_COUNT);
    }
}
