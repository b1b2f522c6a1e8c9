//! Frame Pipeline
//!
//! Wires the kinematic model builder, the frame serializer and the session
//! recorder into the per-frame path: each incoming frame is built, encoded
//! and appended synchronously, in arrival order. Construction faults are
//! isolated to the frame (and to the affected hand); only recorder misuse and
//! storage failures surface to the caller.

use crate::model::{build_hand, Hand, LandmarkSample};
use crate::recording::{serialize_frame, SessionRecorder, SessionState};
use crate::Result;
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::warn;

/// One frame as delivered by the external frame source: a timestamp plus the
/// left/right landmark sequences, either of which may be absent when the
/// corresponding hand is not in view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrameInput {
    pub timestamp: i64,
    #[serde(default)]
    pub left: Option<Vec<LandmarkSample>>,
    #[serde(default)]
    pub right: Option<Vec<LandmarkSample>>,
}

/// Per-frame build -> serialize -> append pipeline around one recorder.
///
/// Appends are serialized through a lock, so no two records can interleave
/// their bytes even if frames arrive from multiple threads.
pub struct FramePipeline {
    recorder: Mutex<SessionRecorder>,
}

impl FramePipeline {
    pub fn new(recorder: SessionRecorder) -> Self {
        Self {
            recorder: Mutex::new(recorder),
        }
    }

    /// Start a recording session. See [`SessionRecorder::start`].
    pub fn start(&self) -> Result<()> {
        self.recorder.lock().start()
    }

    /// Process one frame: build both hand models, serialize, append.
    ///
    /// A hand that fails to build (wrong landmark count, degenerate triple)
    /// is logged and recorded as `null` for this frame; the other hand and
    /// the session are unaffected. A failed append does not advance the
    /// frames-recorded counter.
    pub fn process_frame(&self, frame: &FrameInput) -> Result<()> {
        // Building is pure; keep it outside the writer lock.
        let left = checked_hand("left", frame.timestamp, frame.left.as_deref());
        let right = checked_hand("right", frame.timestamp, frame.right.as_deref());

        let record = serialize_frame(frame.timestamp, left.as_ref(), right.as_ref())?;
        self.recorder.lock().append(&record)
    }

    /// Finalize the session, returning the permanent recording path.
    pub fn finish(&self) -> Result<PathBuf> {
        self.recorder.lock().finalize()
    }

    /// Abandon the session, deleting the working file.
    pub fn discard(&self) -> Result<()> {
        self.recorder.lock().discard()
    }

    pub fn state(&self) -> SessionState {
        self.recorder.lock().state()
    }

    pub fn frames_recorded(&self) -> u64 {
        self.recorder.lock().frames_recorded()
    }

    /// The fixed scratch location of the working file.
    pub fn working_path(&self) -> PathBuf {
        self.recorder.lock().working_path()
    }
}

/// Build one hand, isolating faults to this frame. Left and right are
/// independent: a malformed left hand never blocks a valid right hand.
fn checked_hand(side: &'static str, timestamp: i64, landmarks: Option<&[LandmarkSample]>) -> Option<Hand> {
    match build_hand(landmarks) {
        Ok(hand) => hand,
        Err(e) => {
            warn!(side, timestamp, error = %e, "dropping hand for this frame");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_input_deserializes_with_missing_hands() {
        let frame: FrameInput = serde_json::from_str(r#"{"timestamp":1234}"#).unwrap();
        assert_eq!(frame.timestamp, 1234);
        assert!(frame.left.is_none());
        assert!(frame.right.is_none());
    }

    #[test]
    fn test_frame_input_deserializes_landmarks() {
        let frame: FrameInput = serde_json::from_str(
            r#"{"timestamp":5,"left":[{"x":0.1,"y":0.2,"z":0.3,"visibility":0.9}],"right":null}"#,
        )
        .unwrap();
        let left = frame.left.unwrap();
        assert_eq!(left.len(), 1);
        assert_eq!(left[0].x, 0.1);
        assert!(frame.right.is_none());
    }

    #[test]
    fn test_checked_hand_swallows_malformed_frames() {
        let short = vec![LandmarkSample::new(0.0, 0.0, 0.0, 1.0); 3];
        assert!(checked_hand("left", 0, Some(&short)).is_none());
    }

    #[test]
    fn test_checked_hand_passes_absent_through() {
        assert!(checked_hand("right", 0, None).is_none());
    }
}
