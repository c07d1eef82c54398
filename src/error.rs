//! Error types for chat-state.
//!
//! These only travel between the internal layers (raw file store, codec) and
//! the state controller, which logs them and degrades to an outcome. The
//! public load/save API never returns them.

use std::io;
use thiserror::Error;

/// Result type alias for chat-state operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while reading or writing state files.
#[derive(Debug, Error)]
pub enum Error {
    /// File or directory I/O error.
    #[error("state file i/o error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization error.
    #[error("state serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}
