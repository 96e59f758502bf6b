//! The filter store.
//!
//! [`FilterStore`] is the single owner of the session's [`FilterCriteria`].
//! The only way to change the criteria is [`FilterStore::dispatch`]; reads
//! hand out shared references only.

use fg_core::{ChannelGroup, ChannelId, ChannelIdSet, FilterCriteria};

use crate::action::Action;

/// Owner of the filter criteria.
///
/// Dispatch is synchronous and total: every [`Action`] produces a valid
/// state and there is no rejection path. Channel ids that match no known
/// channel are stored as-is and simply have no visible effect.
///
/// # Examples
///
/// ```
/// use fg_core::{ChannelId, SortOrder};
/// use fg_filters::{Action, FilterStore};
///
/// let mut store = FilterStore::new();
/// store.dispatch(Action::SetSort(SortOrder::Rotten));
/// store.dispatch(Action::ToggleChannel(ChannelId(3)));
///
/// assert_eq!(store.state().sort, SortOrder::Rotten);
/// assert!(store.state().channels.contains(&ChannelId(3)));
/// assert_eq!(store.revision(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct FilterStore {
    state: FilterCriteria,
    revision: u64,
}

impl FilterStore {
    /// Creates a store holding the default criteria.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store seeded with `state`.
    #[must_use]
    pub const fn with_state(state: FilterCriteria) -> Self {
        Self { state, revision: 0 }
    }

    /// Returns the current criteria.
    #[inline]
    #[must_use]
    pub const fn state(&self) -> &FilterCriteria {
        &self.state
    }

    /// Returns how many actions have been dispatched.
    #[inline]
    #[must_use]
    pub const fn revision(&self) -> u64 {
        self.revision
    }

    /// Applies `action` to the criteria.
    pub fn dispatch(&mut self, action: Action) {
        let kind = action.kind();
        let group = action.group().map(ChannelGroup::as_str);
        reduce(&mut self.state, action);
        self.revision += 1;
        tracing::debug!(kind, group, revision = self.revision, "filter action dispatched");
    }

    /// Consumes the store, returning the final criteria.
    #[must_use]
    pub fn into_state(self) -> FilterCriteria {
        self.state
    }
}

/// Applies one action to `state` in place.
///
/// This is the whole reducer; [`FilterStore::dispatch`] adds bookkeeping
/// around it.
pub fn reduce(state: &mut FilterCriteria, action: Action) {
    match action {
        Action::SetSort(sort) => state.sort = sort,
        Action::SetGenre(genre) => state.genre = genre,
        Action::SetYear(year) => state.year = year,
        Action::ToggleNational => state.national_only = !state.national_only,
        Action::SetSearch(search) => state.search = search,
        Action::SetPremium(ids) => state.premium = ids.into_iter().collect(),
        Action::SetChannels(ids) => state.channels = ids.into_iter().collect(),
        Action::TogglePremium(id) => toggle(&mut state.premium, id),
        Action::ToggleChannel(id) => toggle(&mut state.channels, id),
    }
}

/// Symmetric difference with `{id}`.
fn toggle(set: &mut ChannelIdSet, id: ChannelId) {
    if !set.remove(&id) {
        set.insert(id);
    }
}
