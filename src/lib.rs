//! # Handtrace
//!
//! A hand-motion recording engine that turns per-frame streams of 21
//! normalized hand landmarks (from an external pose-estimation model such as
//! the MediaPipe hand landmarker) into typed anatomical hand models and
//! persists them as durable, appendable recording sessions on disk.
//!
//! ## Quick Start
//!
//! ```no_run
//! use handtrace::pipeline::{FrameInput, FramePipeline};
//! use handtrace::recording::SessionRecorder;
//! use std::path::PathBuf;
//!
//! // One recorder per process; scratch and destination dirs come from config.
//! let recorder = SessionRecorder::new(
//!     PathBuf::from("/tmp/handtrace-scratch"),
//!     PathBuf::from("/tmp/handtrace-out"),
//! );
//! let pipeline = FramePipeline::new(recorder);
//!
//! pipeline.start().expect("failed to start session");
//!
//! // ... one call per frame from the detector ...
//! let frame = FrameInput { timestamp: 0, left: None, right: None };
//! pipeline.process_frame(&frame).expect("append failed");
//!
//! let final_path = pipeline.finish().expect("failed to finalize");
//! println!("session written to {}", final_path.display());
//! ```
//!
//! ## Architecture
//!
//! - [`geometry`]: 3D points and the joint-angle primitive
//! - [`model`]: the 21-entry joint table and the kinematic model builder
//! - [`recording`]: frame serialization and the session recorder state machine
//! - [`pipeline`]: per-frame build -> serialize -> append plumbing
//! - [`discovery`]: bounded timed advertisement scan for capture peripherals
//! - [`app`]: CLI and configuration management
//!
//! ## Frame Pipeline
//!
//! ```text
//! ┌─────────────┐    ┌─────────────┐    ┌─────────────┐    ┌─────────────┐
//! │  Detector   │───▶│   Model     │───▶│   Frame     │───▶│   Session   │
//! │ (landmarks) │    │   Builder   │    │ Serializer  │    │  Recorder   │
//! └─────────────┘    └─────────────┘    └─────────────┘    └─────────────┘
//!                     left + right       one CSV record      durable append
//! ```
//!
//! Each incoming frame runs the whole pipeline synchronously; the builder and
//! serializer are pure, and only the recorder touches the filesystem.

pub mod app;
pub mod discovery;
pub mod geometry;
pub mod model;
pub mod pipeline;
pub mod recording;

// Re-export commonly used types
pub use geometry::{angle_at_vertex, Point3};
pub use model::{build_hand, Hand, Joint, JointCategory, JointId, LandmarkSample};
pub use pipeline::{FrameInput, FramePipeline};
pub use recording::{SessionRecorder, SessionState};

/// Result type alias for the recording engine
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the recording engine
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The angle at a joint is undefined because one of the two vectors from
    /// the vertex has zero length. Callers must skip the angle rather than
    /// substitute a default.
    #[error("angle undefined: {0} vector has zero length")]
    DegenerateVector(&'static str),

    /// A non-empty landmark frame did not carry exactly one sample per joint.
    #[error("malformed landmark frame: expected {expected} samples, got {actual}")]
    MalformedFrame { expected: usize, actual: usize },

    /// `append`/`finalize`/`discard` was called outside the `Active` state.
    #[error("recorder not active: cannot {op} while {state}")]
    RecorderNotActive { op: &'static str, state: &'static str },

    /// The working file could not be moved to its final destination. The
    /// session stays `Active` so the caller may retry.
    #[error("failed to finalize session: {0}")]
    Finalize(#[source] std::io::Error),

    #[error("bluetooth scan failed: {0}")]
    Scan(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
