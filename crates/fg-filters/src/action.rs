//! Filter actions.
//!
//! This module defines the [`Action`] enum, the closed set of mutations the
//! [`FilterStore`](crate::FilterStore) accepts. Every change to the filter
//! criteria is expressed as one of these.
//!
//! # Action Flow
//!
//! ```text
//! Sidebar/Topbar gesture → FilterSession → Action → FilterStore::dispatch
//! ```
//!
//! # Wire Shape
//!
//! Actions (de)serialize as `{"type": "SET_SORT", "payload": "rotten"}`.
//! Genre and year payloads also accept the select sentinel `"any"` as
//! "no restriction".

use std::str::FromStr;

use fg_core::{ChannelGroup, ChannelId, Decade, Genre, ParseValueError, SortOrder, parse_optional};
use serde::{Deserialize, Deserializer, Serialize};

/// A mutation of the filter criteria.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Action {
    // =========================================================================
    // Listing
    // =========================================================================
    /// Replace the sort order.
    SetSort(SortOrder),

    /// Replace the genre restriction.
    SetGenre(#[serde(deserialize_with = "optional_choice")] Option<Genre>),

    /// Replace the decade restriction.
    SetYear(#[serde(deserialize_with = "optional_choice")] Option<Decade>),

    /// Flip the national-only flag.
    ToggleNational,

    /// Replace the search text verbatim.
    SetSearch(String),

    // =========================================================================
    // Channels
    // =========================================================================
    /// Replace the premium exclusion set with exactly these ids.
    SetPremium(Vec<ChannelId>),

    /// Replace the standard exclusion set with exactly these ids.
    SetChannels(Vec<ChannelId>),

    /// Hide the premium channel if shown, show it if hidden.
    TogglePremium(ChannelId),

    /// Hide the standard channel if shown, show it if hidden.
    ToggleChannel(ChannelId),
}

impl Action {
    /// Builds the bulk replacement action for `group`.
    #[must_use]
    pub fn replace_group(group: ChannelGroup, ids: Vec<ChannelId>) -> Self {
        match group {
            ChannelGroup::Premium => Self::SetPremium(ids),
            ChannelGroup::Standard => Self::SetChannels(ids),
        }
    }

    /// Builds the single-channel toggle action for `group`.
    #[must_use]
    pub const fn toggle_in(group: ChannelGroup, id: ChannelId) -> Self {
        match group {
            ChannelGroup::Premium => Self::TogglePremium(id),
            ChannelGroup::Standard => Self::ToggleChannel(id),
        }
    }

    /// Returns the wire kind (`"SET_SORT"`, ...), used in logs.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::SetSort(_) => "SET_SORT",
            Self::SetGenre(_) => "SET_GENRE",
            Self::SetYear(_) => "SET_YEAR",
            Self::ToggleNational => "TOGGLE_NATIONAL",
            Self::SetSearch(_) => "SET_SEARCH",
            Self::SetPremium(_) => "SET_PREMIUM",
            Self::SetChannels(_) => "SET_CHANNELS",
            Self::TogglePremium(_) => "TOGGLE_PREMIUM",
            Self::ToggleChannel(_) => "TOGGLE_CHANNEL",
        }
    }

    /// Returns the channel group this action touches, if any.
    #[must_use]
    pub const fn group(&self) -> Option<ChannelGroup> {
        match self {
            Self::SetPremium(_) | Self::TogglePremium(_) => Some(ChannelGroup::Premium),
            Self::SetChannels(_) | Self::ToggleChannel(_) => Some(ChannelGroup::Standard),
            _ => None,
        }
    }
}

/// Accepts `null`, `"any"`, `""` or a member name for optional choices.
///
/// For use with `#[serde(deserialize_with = "...")]` on `Option<Genre>` and
/// `Option<Decade>` fields.
///
/// # Errors
///
/// Fails on any other spelling.
pub fn optional_choice<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr<Err = ParseValueError>,
{
    match Option::<String>::deserialize(deserializer)? {
        None => Ok(None),
        Some(raw) => parse_optional(&raw).map_err(serde::de::Error::custom),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_kind() {
        assert_eq!(Action::ToggleNational.kind(), "TOGGLE_NATIONAL");
        assert_eq!(Action::SetSearch("x".to_owned()).kind(), "SET_SEARCH");
        assert_eq!(Action::TogglePremium(ChannelId(1)).kind(), "TOGGLE_PREMIUM");
    }

    #[test]
    fn test_action_group() {
        assert_eq!(
            Action::SetPremium(vec![]).group(),
            Some(ChannelGroup::Premium)
        );
        assert_eq!(
            Action::ToggleChannel(ChannelId(2)).group(),
            Some(ChannelGroup::Standard)
        );
        assert_eq!(Action::SetSort(SortOrder::Rotten).group(), None);
    }

    #[test]
    fn test_group_constructors() {
        assert_eq!(
            Action::replace_group(ChannelGroup::Standard, vec![ChannelId(4)]),
            Action::SetChannels(vec![ChannelId(4)])
        );
        assert_eq!(
            Action::toggle_in(ChannelGroup::Premium, ChannelId(4)),
            Action::TogglePremium(ChannelId(4))
        );
    }

    #[test]
    fn test_action_wire_shape() {
        let json = serde_json::to_value(Action::SetSort(SortOrder::Rotten)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"type": "SET_SORT", "payload": "rotten"})
        );

        let json = serde_json::to_value(Action::ToggleNational).unwrap();
        assert_eq!(json, serde_json::json!({"type": "TOGGLE_NATIONAL"}));
    }

    #[test]
    fn test_deserialize_any_sentinel() {
        let action: Action =
            serde_json::from_str(r#"{"type": "SET_YEAR", "payload": "any"}"#).unwrap();
        assert_eq!(action, Action::SetYear(None));

        let action: Action =
            serde_json::from_str(r#"{"type": "SET_GENRE", "payload": null}"#).unwrap();
        assert_eq!(action, Action::SetGenre(None));

        let action: Action =
            serde_json::from_str(r#"{"type": "SET_GENRE", "payload": "Sci-Fi"}"#).unwrap();
        assert_eq!(action, Action::SetGenre(Some(Genre::SciFi)));
    }

    #[test]
    fn test_deserialize_rejects_unknown_choice() {
        let result: Result<Action, _> =
            serde_json::from_str(r#"{"type": "SET_YEAR", "payload": "1985"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_deserialize_channel_actions() {
        let action: Action =
            serde_json::from_str(r#"{"type": "SET_CHANNELS", "payload": [1, 2, 3]}"#).unwrap();
        assert_eq!(
            action,
            Action::SetChannels(vec![ChannelId(1), ChannelId(2), ChannelId(3)])
        );
    }
}
