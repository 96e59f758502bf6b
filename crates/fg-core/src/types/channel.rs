//! Channel types.
//!
//! Channels come from the upstream channel list and are read-only here.
//! Each channel belongs to exactly one [`ChannelGroup`], decided by its
//! premium flag.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseValueError;

/// Upstream identifier of a channel.
///
/// Serialized as a bare integer.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ChannelId(pub u32);

impl fmt::Display for ChannelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for ChannelId {
    #[inline]
    fn from(id: u32) -> Self {
        Self(id)
    }
}

/// A broadcast channel as delivered by the channel list endpoint.
///
/// # Examples
///
/// ```
/// use fg_core::{Channel, ChannelGroup, ChannelId};
///
/// let channel: Channel =
///     serde_json::from_str(r#"{"id": 7, "name": "TVCine Top", "is_premium": true}"#).unwrap();
/// assert_eq!(channel.id, ChannelId(7));
/// assert_eq!(channel.group(), ChannelGroup::Premium);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Channel {
    /// Upstream id.
    pub id: ChannelId,

    /// Display name.
    pub name: String,

    /// Whether the channel is part of a premium package.
    pub is_premium: bool,
}

impl Channel {
    /// Creates a new channel.
    #[must_use]
    pub fn new(id: u32, name: impl Into<String>, is_premium: bool) -> Self {
        Self {
            id: ChannelId(id),
            name: name.into(),
            is_premium,
        }
    }

    /// Returns the group this channel is listed under.
    #[inline]
    #[must_use]
    pub const fn group(&self) -> ChannelGroup {
        ChannelGroup::of(self.is_premium)
    }
}

/// The two channel sections of the sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChannelGroup {
    /// Premium channels; exclusions live in `FilterCriteria::premium`.
    Premium,
    /// Everything else; exclusions live in `FilterCriteria::channels`.
    Standard,
}

impl ChannelGroup {
    /// Both groups, in sidebar order.
    pub const ALL: [Self; 2] = [Self::Premium, Self::Standard];

    /// Returns the group for a premium flag.
    #[inline]
    #[must_use]
    pub const fn of(is_premium: bool) -> Self {
        if is_premium {
            Self::Premium
        } else {
            Self::Standard
        }
    }

    /// Returns the wire spelling.
    #[inline]
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Premium => "premium",
            Self::Standard => "standard",
        }
    }

    /// Returns the section title shown above the group.
    #[inline]
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Premium => "Premium Channels",
            Self::Standard => "Channels",
        }
    }
}

impl fmt::Display for ChannelGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChannelGroup {
    type Err = ParseValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "premium" => Ok(Self::Premium),
            "standard" | "channels" => Ok(Self::Standard),
            other => Err(ParseValueError::new("channel group", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_group_of() {
        assert_eq!(ChannelGroup::of(true), ChannelGroup::Premium);
        assert_eq!(ChannelGroup::of(false), ChannelGroup::Standard);
        assert_eq!(Channel::new(1, "RTP1", false).group(), ChannelGroup::Standard);
    }

    #[test]
    fn test_channel_group_titles() {
        assert_eq!(ChannelGroup::Premium.title(), "Premium Channels");
        assert_eq!(ChannelGroup::Standard.title(), "Channels");
    }

    #[test]
    fn test_channel_group_parse() {
        assert_eq!(
            "channels".parse::<ChannelGroup>().unwrap(),
            ChannelGroup::Standard
        );
        assert!("sports".parse::<ChannelGroup>().is_err());
    }

    #[test]
    fn test_channel_id_is_bare_integer() {
        assert_eq!(serde_json::to_string(&ChannelId(42)).unwrap(), "42");
    }
}
