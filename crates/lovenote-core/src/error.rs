//! Error types for Lovenote
//!
//! The only anticipated failure in the whole card is audio startup: the
//! platform may have no output device, the track file may be missing, or
//! the bytes may not decode. All of these are caught by the music player
//! and degrade to silence.

use thiserror::Error;

/// Main error type for Lovenote operations
#[derive(Error, Debug)]
pub enum CardError {
    /// No usable audio output device (or the backend refused to open one)
    #[error("audio device unavailable: {0}")]
    AudioDevice(String),

    /// The music track exists but could not be decoded
    #[error("audio track error: {0}")]
    AudioTrack(String),

    /// General I/O error (typically the track file is missing)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
