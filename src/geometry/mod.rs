//! Vector Geometry
//!
//! 3D points in the detector's normalized model space and the joint-angle
//! primitive used by the kinematic model builder.

pub mod angle;

pub use angle::{angle_at_vertex, Point3};
