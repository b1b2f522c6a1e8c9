//! Kinematic Hand Model
//!
//! Maps the detector's 21 landmark slots onto a named anatomical joint graph.
//! [`joint_table`] holds the fixed slot-to-identity mapping and the kinematic
//! triples; [`builder`] turns one frame of raw samples into a [`Hand`].

pub mod builder;
pub mod joint_table;
pub mod types;

pub use builder::build_hand;
pub use joint_table::{JointId, LANDMARK_COUNT};
pub use types::{Finger, Fingers, Hand, Joint, JointCategory, LandmarkSample, Thumb};
