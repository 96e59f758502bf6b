//! Upstream channel list.
//!
//! The channel list is fetched elsewhere; this module only describes what
//! the filter core needs from it: the channels, or the fact that they are
//! still loading.

use camino::{Utf8Path, Utf8PathBuf};
use fg_core::{Channel, ChannelId, FxHashSet, fx_hash_set};
use serde::{Deserialize, Serialize};

use crate::error::SourceError;

/// Current state of the channel list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ChannelListing {
    /// The list has not arrived yet.
    #[default]
    Loading,
    /// The list is available.
    Ready(Vec<Channel>),
}

impl ChannelListing {
    /// Returns the channels, or an empty slice while loading.
    #[must_use]
    pub fn channels(&self) -> &[Channel] {
        match self {
            Self::Loading => &[],
            Self::Ready(channels) => channels,
        }
    }

    /// Returns `true` while the list has not arrived.
    #[inline]
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Looks up a channel by id.
    #[must_use]
    pub fn find(&self, id: ChannelId) -> Option<&Channel> {
        self.channels().iter().find(|channel| channel.id == id)
    }
}

/// Anything that can report the current channel list.
pub trait ChannelSource {
    /// Returns the channel list as it stands now.
    fn listing(&self) -> ChannelListing;
}

/// A source whose list never arrives.
#[derive(Debug, Clone, Copy, Default)]
pub struct PendingSource;

impl ChannelSource for PendingSource {
    fn listing(&self) -> ChannelListing {
        ChannelListing::Loading
    }
}

/// An in-memory channel list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaticChannels(pub Vec<Channel>);

impl ChannelSource for StaticChannels {
    fn listing(&self) -> ChannelListing {
        ChannelListing::Ready(self.0.clone())
    }
}

/// Body of the channel list endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelsResponse {
    /// Every channel, premium and standard.
    pub channels: Vec<Channel>,
}

/// A channel list read from a JSON file in the endpoint's response shape.
///
/// # Examples
///
/// ```
/// use fg_filters::{ChannelSource, JsonFileSource};
///
/// let source = JsonFileSource::from_json(
///     "inline.json",
///     r#"{"channels": [{"id": 1, "name": "RTP1", "is_premium": false}]}"#,
/// ).unwrap();
/// assert_eq!(source.listing().channels().len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: Utf8PathBuf,
    channels: StaticChannels,
}

impl JsonFileSource {
    /// Reads and validates a channel file.
    pub fn load(path: &Utf8Path) -> Result<Self, SourceError> {
        if !path.exists() {
            return Err(SourceError::NotFound(path.to_owned()));
        }
        let raw = std::fs::read_to_string(path).map_err(|source| SourceError::Io {
            path: path.to_owned(),
            source,
        })?;
        Self::from_json(path, &raw)
    }

    /// Parses and validates channel JSON attributed to `path`.
    pub fn from_json(path: impl Into<Utf8PathBuf>, raw: &str) -> Result<Self, SourceError> {
        let path = path.into();
        let response: ChannelsResponse =
            serde_json::from_str(raw).map_err(|source| SourceError::Parse {
                path: path.clone(),
                source,
            })?;

        let mut seen: FxHashSet<ChannelId> = fx_hash_set();
        for channel in &response.channels {
            if !seen.insert(channel.id) {
                return Err(SourceError::DuplicateId(channel.id));
            }
        }

        tracing::debug!(path = %path, count = response.channels.len(), "channel list loaded");
        Ok(Self {
            path,
            channels: StaticChannels(response.channels),
        })
    }

    /// Returns the file this list was read from.
    #[must_use]
    pub fn path(&self) -> &Utf8Path {
        &self.path
    }
}

impl ChannelSource for JsonFileSource {
    fn listing(&self) -> ChannelListing {
        self.channels.listing()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{"channels": [
        {"id": 1, "name": "RTP1", "is_premium": false},
        {"id": 2, "name": "TVCine Top", "is_premium": true}
    ]}"#;

    #[test]
    fn test_loading_listing_is_empty() {
        let listing = PendingSource.listing();
        assert!(listing.is_loading());
        assert!(listing.channels().is_empty());
        assert!(listing.find(ChannelId(1)).is_none());
    }

    #[test]
    fn test_static_channels() {
        let source = StaticChannels(vec![Channel::new(5, "SIC", false)]);
        let listing = source.listing();
        assert!(!listing.is_loading());
        assert_eq!(
            listing.find(ChannelId(5)).map(|c| c.name.as_str()),
            Some("SIC")
        );
    }

    #[test]
    fn test_from_json() {
        let source = JsonFileSource::from_json("sample.json", SAMPLE).unwrap();
        let listing = source.listing();
        assert_eq!(listing.channels().len(), 2);
        assert!(listing.find(ChannelId(2)).is_some_and(|c| c.is_premium));
        assert_eq!(source.path().as_str(), "sample.json");
    }

    #[test]
    fn test_from_json_rejects_duplicates() {
        let raw = r#"{"channels": [
            {"id": 1, "name": "A", "is_premium": false},
            {"id": 1, "name": "B", "is_premium": true}
        ]}"#;
        let err = JsonFileSource::from_json("dup.json", raw).unwrap_err();
        assert!(matches!(err, SourceError::DuplicateId(ChannelId(1))));
    }

    #[test]
    fn test_from_json_rejects_bad_shape() {
        let err = JsonFileSource::from_json("bad.json", r#"[1, 2, 3]"#).unwrap_err();
        assert!(matches!(err, SourceError::Parse { .. }));
    }

    #[test]
    fn test_load_from_disk() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = Utf8PathBuf::from_path_buf(dir.path().join("channels.json")).unwrap();
        std::fs::write(&path, SAMPLE).unwrap();

        let source = JsonFileSource::load(&path).unwrap();
        assert_eq!(source.listing().channels().len(), 2);
    }

    #[test]
    fn test_load_missing_file() {
        let err = JsonFileSource::load(Utf8Path::new("/nonexistent/channels.json")).unwrap_err();
        assert!(matches!(err, SourceError::NotFound(_)));
        assert_eq!(
            err.path().map(Utf8Path::as_str),
            Some("/nonexistent/channels.json")
        );
    }
}
