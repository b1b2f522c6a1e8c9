//! Session Recorder
//!
//! State machine owning the lifecycle of one recording session: create the
//! working file, append serialized frames, and atomically relocate the file
//! to its permanent destination on finalize.
//!
//! The working path is fixed per machine rather than session-scoped, so two
//! overlapping sessions are not representable. One recorder instance exists
//! per process; concurrent writers go through the pipeline's lock.

use crate::recording::serializer::HEADER;
use crate::{Error, Result};
use chrono::Utc;
use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Name of the scratch file written during an `Active` session.
pub const WORKING_FILE_NAME: &str = "session.csv";

/// Lifecycle state of the recorder.
///
/// `Finalizing` is transient: it is only ever observable from within
/// [`SessionRecorder::finalize`] itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    Active,
    Finalizing,
}

impl SessionState {
    pub fn as_str(self) -> &'static str {
        match self {
            SessionState::Idle => "idle",
            SessionState::Active => "active",
            SessionState::Finalizing => "finalizing",
        }
    }
}

/// Owns one recording session's working file.
#[derive(Debug)]
pub struct SessionRecorder {
    state: SessionState,
    scratch_dir: PathBuf,
    destination_dir: PathBuf,
    working_file: Option<File>,
    frames_recorded: u64,
}

impl SessionRecorder {
    /// Create an idle recorder. Nothing touches the filesystem until
    /// [`start`](Self::start).
    pub fn new(scratch_dir: PathBuf, destination_dir: PathBuf) -> Self {
        Self {
            state: SessionState::Idle,
            scratch_dir,
            destination_dir,
            working_file: None,
            frames_recorded: 0,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Frames durably appended to the current (or most recently finalized)
    /// session. A failed append never advances this counter.
    pub fn frames_recorded(&self) -> u64 {
        self.frames_recorded
    }

    /// The fixed scratch location of the working file.
    pub fn working_path(&self) -> PathBuf {
        self.scratch_dir.join(WORKING_FILE_NAME)
    }

    pub fn destination_dir(&self) -> &Path {
        &self.destination_dir
    }

    /// Begin a session: ensure the scratch directory exists, (re)write the
    /// working file with the header row, and transition to `Active`.
    ///
    /// Starting while already `Active` truncates and restarts rather than
    /// interleaving two sessions' data in one file; the previous session's
    /// unfinalized frames are lost and a warning is logged.
    pub fn start(&mut self) -> Result<()> {
        if self.state == SessionState::Active {
            warn!(
                frames = self.frames_recorded,
                "start while active: truncating working file and restarting session"
            );
        }

        fs::create_dir_all(&self.scratch_dir)?;

        let mut file = File::create(self.working_path())?;
        file.write_all(HEADER.as_bytes())?;
        file.write_all(b"\n")?;
        file.flush()?;

        self.working_file = Some(file);
        self.frames_recorded = 0;
        self.state = SessionState::Active;
        info!(path = %self.working_path().display(), "recording session started");
        Ok(())
    }

    /// Append one serialized record as a new line to the working file.
    ///
    /// The write goes straight to the file handle (no userspace buffering),
    /// so a crash after `append` returns cannot lose the frame. Fails with
    /// [`Error::RecorderNotActive`] outside the `Active` state.
    pub fn append(&mut self, record: &str) -> Result<()> {
        if self.state != SessionState::Active {
            return Err(Error::RecorderNotActive {
                op: "append",
                state: self.state.as_str(),
            });
        }

        // A failed finalize drops the handle; reopen it in append mode so the
        // session keeps accepting frames.
        if self.working_file.is_none() {
            self.working_file = Some(OpenOptions::new().append(true).open(self.working_path())?);
        }
        let Some(file) = self.working_file.as_mut() else {
            return Err(Error::RecorderNotActive {
                op: "append",
                state: self.state.as_str(),
            });
        };

        file.write_all(record.as_bytes())?;
        file.write_all(b"\n")?;
        file.flush()?;

        self.frames_recorded += 1;
        Ok(())
    }

    /// Close the session: relocate the working file to
    /// `<destination_dir>/recording-<epoch_millis>.csv` and return to `Idle`.
    ///
    /// The destination name uses the time of finalize, so repeated sessions
    /// never collide. On failure the recorder stays `Active` and the working
    /// file is untouched; the caller may retry.
    pub fn finalize(&mut self) -> Result<PathBuf> {
        if self.state != SessionState::Active {
            return Err(Error::RecorderNotActive {
                op: "finalize",
                state: self.state.as_str(),
            });
        }

        self.state = SessionState::Finalizing;
        // Close the handle before the rename; the move must see settled bytes.
        self.working_file = None;

        match self.relocate() {
            Ok(final_path) => {
                self.state = SessionState::Idle;
                info!(
                    frames = self.frames_recorded,
                    path = %final_path.display(),
                    "recording session finalized"
                );
                Ok(final_path)
            }
            Err(e) => {
                self.state = SessionState::Active;
                warn!(error = %e, "finalize failed; session stays active for retry");
                Err(Error::Finalize(e))
            }
        }
    }

    fn relocate(&self) -> std::io::Result<PathBuf> {
        fs::create_dir_all(&self.destination_dir)?;
        let final_path = self
            .destination_dir
            .join(format!("recording-{}.csv", Utc::now().timestamp_millis()));
        fs::rename(self.working_path(), &final_path)?;
        Ok(final_path)
    }

    /// Abandon the session: delete the working file and return to `Idle`.
    /// This is the only abrupt-stop path; callers that do not want the data
    /// must still go through here (or `finalize`) to leave the recorder
    /// clean.
    pub fn discard(&mut self) -> Result<()> {
        if self.state != SessionState::Active {
            return Err(Error::RecorderNotActive {
                op: "discard",
                state: self.state.as_str(),
            });
        }

        self.working_file = None;
        fs::remove_file(self.working_path())?;
        self.state = SessionState::Idle;
        info!("recording session discarded");
        Ok(())
    }
}
