//! Recording Sessions
//!
//! Turns hand models into delimited text records ([`serializer`]) and owns
//! the lifecycle of the on-disk session file ([`recorder`]).

pub mod recorder;
pub mod serializer;

pub use recorder::{SessionRecorder, SessionState, WORKING_FILE_NAME};
pub use serializer::{serialize_frame, ESCAPE_CHAR, FIELD_DELIMITER, HEADER};
