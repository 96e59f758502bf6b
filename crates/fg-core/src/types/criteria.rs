//! The canonical filter record.

use serde::{Deserialize, Serialize, Serializer};

use crate::hash::{ChannelIdSet, sorted_ids};
use crate::types::{Channel, ChannelGroup, ChannelId, Decade, Genre, SortOrder};

/// Every filter the listing can be narrowed by.
///
/// One instance exists per session. The channel sets are *exclusion* sets:
/// an id in [`premium`](Self::premium) or [`channels`](Self::channels) is
/// hidden from results. Ids of channels that have since disappeared from the
/// upstream list may linger; they match nothing and are harmless.
///
/// # Examples
///
/// ```
/// use fg_core::{FilterCriteria, SortOrder};
///
/// let criteria = FilterCriteria::default();
/// assert!(criteria.search.is_empty());
/// assert_eq!(criteria.sort, SortOrder::Imdb);
/// assert!(!criteria.is_active());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterCriteria {
    /// Free-text search, stored verbatim.
    pub search: String,

    /// Listing order.
    pub sort: SortOrder,

    /// Genre restriction; `None` is any genre.
    pub genre: Option<Genre>,

    /// Decade restriction; `None` is any year.
    pub year: Option<Decade>,

    /// Only show national productions.
    pub national_only: bool,

    /// Premium channels currently hidden.
    #[serde(serialize_with = "serialize_id_set")]
    pub premium: ChannelIdSet,

    /// Standard channels currently hidden.
    #[serde(serialize_with = "serialize_id_set")]
    pub channels: ChannelIdSet,
}

impl FilterCriteria {
    /// Returns the exclusion set that governs `group`.
    #[inline]
    #[must_use]
    pub const fn excluded(&self, group: ChannelGroup) -> &ChannelIdSet {
        match group {
            ChannelGroup::Premium => &self.premium,
            ChannelGroup::Standard => &self.channels,
        }
    }

    /// Returns `true` if `id` is not hidden within `group`.
    #[inline]
    #[must_use]
    pub fn is_shown(&self, group: ChannelGroup, id: ChannelId) -> bool {
        !self.excluded(group).contains(&id)
    }

    /// Returns `true` if `channel` is not hidden.
    #[inline]
    #[must_use]
    pub fn shows(&self, channel: &Channel) -> bool {
        self.is_shown(channel.group(), channel.id)
    }

    /// Returns `true` if any filter differs from its default.
    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.search.is_empty()
            || self.sort != SortOrder::default()
            || self.genre.is_some()
            || self.year.is_some()
            || self.national_only
            || !self.premium.is_empty()
            || !self.channels.is_empty()
    }
}

fn serialize_id_set<S: Serializer>(set: &ChannelIdSet, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_seq(sorted_ids(set))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_criteria() {
        let criteria = FilterCriteria::default();
        assert_eq!(criteria.search, "");
        assert_eq!(criteria.sort, SortOrder::Imdb);
        assert_eq!(criteria.genre, None);
        assert_eq!(criteria.year, None);
        assert!(!criteria.national_only);
        assert!(criteria.premium.is_empty());
        assert!(criteria.channels.is_empty());
    }

    #[test]
    fn test_excluded_routes_by_group() {
        let mut criteria = FilterCriteria::default();
        criteria.premium.insert(ChannelId(1));
        assert!(criteria.excluded(ChannelGroup::Premium).contains(&ChannelId(1)));
        assert!(criteria.excluded(ChannelGroup::Standard).is_empty());
        assert!(!criteria.is_shown(ChannelGroup::Premium, ChannelId(1)));
        assert!(criteria.is_shown(ChannelGroup::Standard, ChannelId(1)));
    }

    #[test]
    fn test_shows_uses_channel_group() {
        let mut criteria = FilterCriteria::default();
        criteria.channels.insert(ChannelId(3));
        assert!(!criteria.shows(&Channel::new(3, "SIC", false)));
        assert!(criteria.shows(&Channel::new(3, "SIC Premium", true)));
    }

    #[test]
    fn test_is_active() {
        let mut criteria = FilterCriteria::default();
        assert!(!criteria.is_active());
        criteria.national_only = true;
        assert!(criteria.is_active());
    }

    #[test]
    fn test_serialization_sorts_exclusions() {
        let mut criteria = FilterCriteria::default();
        criteria.premium.extend([ChannelId(9), ChannelId(4), ChannelId(6)]);
        criteria.genre = Some(Genre::SciFi);
        let value = serde_json::to_value(&criteria).unwrap();
        assert_eq!(value["premium"], serde_json::json!([4, 6, 9]));
        assert_eq!(value["genre"], serde_json::json!("Sci-Fi"));
        assert_eq!(value["year"], serde_json::Value::Null);
    }

    #[test]
    fn test_deserialize_partial() {
        let criteria: FilterCriteria =
            serde_json::from_str(r#"{"year": "1980", "channels": [2, 2, 5]}"#).unwrap();
        assert_eq!(criteria.year, Some(Decade::D1980));
        assert_eq!(criteria.channels.len(), 2);
        assert_eq!(criteria.sort, SortOrder::Imdb);
    }
}
