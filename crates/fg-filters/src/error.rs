//! Error types for the fg-filters crate.
//!
//! Dispatch and derivation cannot fail; only loading the channel list from
//! outside the process can.

use camino::{Utf8Path, Utf8PathBuf};
use fg_core::ChannelId;

/// Errors that can occur while loading a channel list.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// The channel file does not exist.
    #[error("channel list not found: {0}")]
    NotFound(Utf8PathBuf),

    /// Reading the channel file failed.
    #[error("failed to read channel list '{path}': {source}")]
    Io {
        /// The file being read.
        path: Utf8PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The channel file is not a valid channel list.
    #[error("failed to parse channel list '{path}': {source}")]
    Parse {
        /// The file being parsed.
        path: Utf8PathBuf,
        /// The underlying JSON error.
        #[source]
        source: serde_json::Error,
    },

    /// Two channels share an id, so partitioning would be ambiguous.
    #[error("duplicate channel id {0} in channel list")]
    DuplicateId(ChannelId),
}

impl SourceError {
    /// Returns the file path associated with this error, if any.
    #[must_use]
    pub fn path(&self) -> Option<&Utf8Path> {
        match self {
            Self::NotFound(path) | Self::Io { path, .. } | Self::Parse { path, .. } => {
                Some(path.as_path())
            }
            Self::DuplicateId(_) => None,
        }
    }
}
