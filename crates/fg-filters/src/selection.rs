//! Channel selection derivation.
//!
//! Everything here is a pure function of the channel list and the current
//! [`FilterCriteria`]. Nothing is cached: callers derive a fresh
//! [`Selection`] whenever they need one, so the result always agrees with
//! the latest state even if the channel list grew or shrank in between.
//!
//! # Bulk Toggle Rule
//!
//! For a group of `total` channels with `excluded` ids in its exclusion set:
//!
//! ```text
//! excluded <  total  →  "None"  →  hide every channel in the group
//! excluded >= total  →  "All"   →  show every channel in the group
//! ```
//!
//! The count is the size of the exclusion set, stale ids included, so a
//! group with nothing hidden and a group with everything shown look alike.

use fg_core::{Channel, ChannelGroup, ChannelId, FilterCriteria};
use serde::Serialize;

use crate::action::Action;
use crate::source::ChannelListing;

/// The channel list split by premium flag.
///
/// Borrowed from the listing; rebuilt on demand.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Partition<'a> {
    premium: Vec<&'a Channel>,
    standard: Vec<&'a Channel>,
}

impl<'a> Partition<'a> {
    /// Splits `channels`, preserving their order within each group.
    #[must_use]
    pub fn of(channels: &'a [Channel]) -> Self {
        let (premium, standard) = channels.iter().partition(|channel| channel.is_premium);
        Self { premium, standard }
    }

    /// Returns the channels of `group`.
    #[must_use]
    pub fn group(&self, group: ChannelGroup) -> &[&'a Channel] {
        match group {
            ChannelGroup::Premium => &self.premium,
            ChannelGroup::Standard => &self.standard,
        }
    }

    /// Returns the premium channels.
    #[must_use]
    pub fn premium(&self) -> &[&'a Channel] {
        &self.premium
    }

    /// Returns the standard channels.
    #[must_use]
    pub fn standard(&self) -> &[&'a Channel] {
        &self.standard
    }

    /// Returns `true` if neither group has channels.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.premium.is_empty() && self.standard.is_empty()
    }
}

/// What the bulk button of a group does when pressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum BulkToggle {
    /// Labeled "None"; hides the whole group.
    #[serde(rename = "None")]
    HideAll,
    /// Labeled "All"; shows the whole group.
    #[serde(rename = "All")]
    ShowAll,
}

impl BulkToggle {
    /// Applies the threshold rule.
    ///
    /// # Examples
    ///
    /// ```
    /// use fg_filters::BulkToggle;
    ///
    /// assert_eq!(BulkToggle::for_counts(5, 2), BulkToggle::HideAll);
    /// assert_eq!(BulkToggle::for_counts(5, 5), BulkToggle::ShowAll);
    /// ```
    #[inline]
    #[must_use]
    pub const fn for_counts(total: usize, excluded: usize) -> Self {
        if excluded < total {
            Self::HideAll
        } else {
            Self::ShowAll
        }
    }

    /// Returns the button label.
    #[inline]
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::HideAll => "None",
            Self::ShowAll => "All",
        }
    }

    /// Returns the exclusion set the button installs for `channels`.
    #[must_use]
    pub fn payload(self, channels: &[&Channel]) -> Vec<ChannelId> {
        match self {
            Self::HideAll => channels.iter().map(|channel| channel.id).collect(),
            Self::ShowAll => Vec::new(),
        }
    }
}

/// Derives the bulk toggle for one group.
///
/// Returns `None` for an empty group, which has no bulk control.
#[must_use]
pub fn bulk_toggle(
    group: ChannelGroup,
    channels: &[&Channel],
    criteria: &FilterCriteria,
) -> Option<BulkToggle> {
    if channels.is_empty() {
        return None;
    }
    Some(BulkToggle::for_counts(
        channels.len(),
        criteria.excluded(group).len(),
    ))
}

/// Derives the action the bulk button of `group` dispatches.
#[must_use]
pub fn bulk_action(
    group: ChannelGroup,
    channels: &[&Channel],
    criteria: &FilterCriteria,
) -> Option<Action> {
    bulk_toggle(group, channels, criteria)
        .map(|toggle| Action::replace_group(group, toggle.payload(channels)))
}

/// One checkbox row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChannelRow<'a> {
    /// The channel.
    pub channel: &'a Channel,
    /// Whether its checkbox is ticked (not excluded).
    pub shown: bool,
}

/// A non-empty channel section with its bulk control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupSelection<'a> {
    /// Which section this is.
    pub group: ChannelGroup,
    /// Rows in listing order.
    pub rows: Vec<ChannelRow<'a>>,
    /// The bulk button.
    pub bulk: BulkToggle,
}

impl GroupSelection<'_> {
    /// Returns the section title.
    #[must_use]
    pub const fn title(&self) -> &'static str {
        self.group.title()
    }

    /// Returns how many rows are ticked.
    #[must_use]
    pub fn shown_count(&self) -> usize {
        self.rows.iter().filter(|row| row.shown).count()
    }

    /// Returns the action the bulk button dispatches.
    #[must_use]
    pub fn bulk_action(&self) -> Action {
        let channels: Vec<&Channel> = self.rows.iter().map(|row| row.channel).collect();
        Action::replace_group(self.group, self.bulk.payload(&channels))
    }
}

/// The derived channel sidebar.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Selection<'a> {
    /// The channel list has not arrived; no sections are shown.
    pub loading: bool,
    /// Premium section, absent when there are no premium channels.
    pub premium: Option<GroupSelection<'a>>,
    /// Standard section, absent when there are no standard channels.
    pub standard: Option<GroupSelection<'a>>,
}

impl<'a> Selection<'a> {
    /// Returns the section for `group`, if shown.
    #[must_use]
    pub const fn group(&self, group: ChannelGroup) -> Option<&GroupSelection<'a>> {
        match group {
            ChannelGroup::Premium => self.premium.as_ref(),
            ChannelGroup::Standard => self.standard.as_ref(),
        }
    }

    /// Iterates over the shown sections in sidebar order.
    pub fn groups(&self) -> impl Iterator<Item = &GroupSelection<'a>> {
        self.premium.iter().chain(self.standard.iter())
    }
}

/// Derives the channel sidebar from the listing and the criteria.
///
/// # Examples
///
/// ```
/// use fg_core::{Channel, ChannelGroup, FilterCriteria};
/// use fg_filters::{BulkToggle, ChannelListing, derive_selection};
///
/// let listing = ChannelListing::Ready(vec![
///     Channel::new(1, "RTP1", false),
///     Channel::new(2, "TVCine Top", true),
/// ]);
/// let selection = derive_selection(&listing, &FilterCriteria::default());
///
/// let standard = selection.group(ChannelGroup::Standard).unwrap();
/// assert_eq!(standard.bulk, BulkToggle::HideAll);
/// assert!(standard.rows[0].shown);
/// ```
#[must_use]
pub fn derive_selection<'a>(
    listing: &'a ChannelListing,
    criteria: &FilterCriteria,
) -> Selection<'a> {
    if listing.is_loading() {
        return Selection {
            loading: true,
            ..Selection::default()
        };
    }

    let partition = Partition::of(listing.channels());
    Selection {
        loading: false,
        premium: derive_group(ChannelGroup::Premium, &partition, criteria),
        standard: derive_group(ChannelGroup::Standard, &partition, criteria),
    }
}

fn derive_group<'a>(
    group: ChannelGroup,
    partition: &Partition<'a>,
    criteria: &FilterCriteria,
) -> Option<GroupSelection<'a>> {
    let channels = partition.group(group);
    let bulk = bulk_toggle(group, channels, criteria)?;
    let rows = channels
        .iter()
        .map(|&channel| ChannelRow {
            channel,
            shown: criteria.shows(channel),
        })
        .collect();
    Some(GroupSelection { group, rows, bulk })
}
