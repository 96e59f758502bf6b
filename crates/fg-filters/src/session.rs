//! The sidebar and topbar intent layer.
//!
//! A [`FilterSession`] has one method per user gesture. Each method reports
//! the gesture to the [`TelemetrySink`] and then dispatches the matching
//! [`Action`]. Telemetry payloads always describe the state the gesture
//! produces, e.g. `checked` is whether the channel is shown afterwards.

use std::time::Duration;

use fg_core::{Channel, ChannelGroup, Decade, FilterCriteria, Genre, SortOrder};
use fg_debounce::DebounceError;

use crate::action::Action;
use crate::search_sync::SearchSync;
use crate::selection::{self, BulkToggle, Partition, Selection, derive_selection};
use crate::source::ChannelListing;
use crate::store::FilterStore;
use crate::telemetry::{TelemetryEvent, TelemetrySink};

/// One user's filter session.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use fg_core::{Channel, Genre, SortOrder};
/// use fg_filters::{ChannelListing, FilterSession, RecordingSink};
///
/// let sink = RecordingSink::new();
/// let mut session = FilterSession::new(&sink, Duration::from_millis(500));
/// let listing = ChannelListing::Ready(vec![Channel::new(1, "RTP1", false)]);
///
/// session.select_sort(SortOrder::Rotten);
/// session.select_genre(Some(Genre::Western));
/// assert!(session.bulk_toggle(fg_core::ChannelGroup::Standard, &listing));
///
/// assert_eq!(sink.names(), vec!["sort", "genre", "all channels"]);
/// assert_eq!(session.state().channels.len(), 1);
/// ```
#[derive(Debug)]
pub struct FilterSession<S> {
    store: FilterStore,
    search: SearchSync,
    sink: S,
}

impl<S: TelemetrySink> FilterSession<S> {
    /// Starts a session with default criteria.
    #[must_use]
    pub fn new(sink: S, delay: Duration) -> Self {
        Self::with_store(FilterStore::new(), sink, delay)
    }

    /// Starts a session on an existing store.
    ///
    /// The store's search text is committed once on attach, without
    /// telemetry.
    #[must_use]
    pub fn with_store(mut store: FilterStore, sink: S, delay: Duration) -> Self {
        let search = SearchSync::attach(&mut store, delay);
        tracing::info!(
            delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX),
            active = store.state().is_active(),
            "filter session started"
        );
        Self {
            store,
            search,
            sink,
        }
    }

    /// Returns the current criteria.
    #[inline]
    #[must_use]
    pub const fn state(&self) -> &FilterCriteria {
        self.store.state()
    }

    /// Returns the underlying store.
    #[must_use]
    pub const fn store(&self) -> &FilterStore {
        &self.store
    }

    /// Returns the telemetry sink.
    #[must_use]
    pub const fn sink(&self) -> &S {
        &self.sink
    }

    /// Returns the search box.
    #[must_use]
    pub const fn search(&self) -> &SearchSync {
        &self.search
    }

    /// Derives the channel sidebar for `listing` from the current criteria.
    #[must_use]
    pub fn selection<'a>(&self, listing: &'a ChannelListing) -> Selection<'a> {
        derive_selection(listing, self.store.state())
    }

    /// Sort select changed.
    pub fn select_sort(&mut self, value: SortOrder) {
        self.sink.emit(TelemetryEvent::Sort { value });
        self.store.dispatch(Action::SetSort(value));
    }

    /// Genre select changed.
    pub fn select_genre(&mut self, genre: Option<Genre>) {
        self.sink.emit(TelemetryEvent::Genre { genre });
        self.store.dispatch(Action::SetGenre(genre));
    }

    /// National-only checkbox clicked.
    pub fn toggle_national(&mut self) {
        let only_national = !self.store.state().national_only;
        self.sink.emit(TelemetryEvent::National { only_national });
        self.store.dispatch(Action::ToggleNational);
    }

    /// Year select changed.
    pub fn select_year(&mut self, year: Option<Decade>) {
        self.sink.emit(TelemetryEvent::Year { year });
        self.store.dispatch(Action::SetYear(year));
    }

    /// Keystroke in the search box.
    ///
    /// Nothing reaches the store until the text settles; see
    /// [`next_search_commit`](Self::next_search_commit).
    ///
    /// # Errors
    ///
    /// Returns [`DebounceError::NoRuntime`] if called outside a tokio runtime.
    pub fn type_search(&mut self, raw: impl Into<String>) -> Result<(), DebounceError> {
        self.search.input(raw)
    }

    /// Commits settled search text.
    pub fn commit_search(&mut self, query: String) {
        self.sink.emit(TelemetryEvent::Search {
            query: query.clone(),
        });
        self.store.dispatch(Action::SetSearch(query));
    }

    /// Waits for the search box to settle and commits the result.
    ///
    /// Returns `false` when nothing was pending or the settled text equals
    /// the committed one.
    pub async fn next_search_commit(&mut self) -> bool {
        match self.search.next_commit().await {
            Some(query) => {
                self.commit_search(query);
                true
            }
            None => false,
        }
    }

    /// Commits settled search text without waiting.
    pub fn commit_ready_search(&mut self) -> bool {
        match self.search.try_commit() {
            Some(query) => {
                self.commit_search(query);
                true
            }
            None => false,
        }
    }

    /// Bulk button of `group` pressed.
    ///
    /// Returns `false`, doing nothing, when the listing is loading or the
    /// group is empty.
    pub fn bulk_toggle(&mut self, group: ChannelGroup, listing: &ChannelListing) -> bool {
        if listing.is_loading() {
            return false;
        }
        let partition = Partition::of(listing.channels());
        let channels = partition.group(group);
        let Some(toggle) = selection::bulk_toggle(group, channels, self.store.state()) else {
            return false;
        };

        self.sink.emit(bulk_event(group, toggle));
        self.store
            .dispatch(Action::replace_group(group, toggle.payload(channels)));
        true
    }

    /// Channel checkbox clicked.
    pub fn toggle_channel(&mut self, channel: &Channel) {
        let group = channel.group();
        let checked = !self.store.state().is_shown(group, channel.id);
        let channel_name = channel.name.clone();
        let event = match group {
            ChannelGroup::Premium => TelemetryEvent::PremiumChannel {
                channel: channel.id,
                channel_name,
                checked,
            },
            ChannelGroup::Standard => TelemetryEvent::Channel {
                channel: channel.id,
                channel_name,
                checked,
            },
        };
        self.sink.emit(event);
        self.store.dispatch(Action::toggle_in(group, channel.id));
    }

    /// Dispatches `action` directly, without telemetry.
    pub fn dispatch(&mut self, action: Action) {
        self.store.dispatch(action);
    }

    /// Ends the session, returning the final criteria.
    ///
    /// A pending search draft is discarded.
    #[must_use]
    pub fn into_state(self) -> FilterCriteria {
        tracing::info!(
            revision = self.store.revision(),
            pending_search = self.search.is_pending(),
            "filter session finished"
        );
        self.store.into_state()
    }
}

const fn bulk_event(group: ChannelGroup, value: BulkToggle) -> TelemetryEvent {
    match group {
        ChannelGroup::Premium => TelemetryEvent::AllPremium { value },
        ChannelGroup::Standard => TelemetryEvent::AllChannels { value },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::telemetry::RecordingSink;
    use fg_core::ChannelId;

    const DELAY: Duration = Duration::from_millis(500);

    fn listing() -> ChannelListing {
        ChannelListing::Ready(vec![
            Channel::new(1, "RTP1", false),
            Channel::new(2, "TVCine Top", true),
            Channel::new(3, "SIC", false),
            Channel::new(4, "TVCine Edition", true),
            Channel::new(5, "TVI", false),
        ])
    }

    #[test]
    fn test_scalar_gestures_emit_then_dispatch() {
        let sink = RecordingSink::new();
        let mut session = FilterSession::new(&sink, DELAY);

        session.select_sort(SortOrder::Rotten);
        session.select_genre(Some(Genre::Horror));
        session.select_year(Some(Decade::D1980));
        session.toggle_national();

        assert_eq!(
            sink.events(),
            vec![
                TelemetryEvent::Sort {
                    value: SortOrder::Rotten
                },
                TelemetryEvent::Genre {
                    genre: Some(Genre::Horror)
                },
                TelemetryEvent::Year {
                    year: Some(Decade::D1980)
                },
                TelemetryEvent::National {
                    only_national: true
                },
            ]
        );
        assert_eq!(session.state().sort, SortOrder::Rotten);
        assert_eq!(session.state().genre, Some(Genre::Horror));
        assert_eq!(session.state().year, Some(Decade::D1980));
        assert!(session.state().national_only);
        assert_eq!(session.store().revision(), 5);
    }

    #[test]
    fn test_national_reports_new_value() {
        let sink = RecordingSink::new();
        let mut session = FilterSession::new(&sink, DELAY);

        session.toggle_national();
        session.toggle_national();

        assert_eq!(
            sink.take(),
            vec![
                TelemetryEvent::National {
                    only_national: true
                },
                TelemetryEvent::National {
                    only_national: false
                },
            ]
        );
        assert!(!session.state().national_only);
    }

    #[test]
    fn test_bulk_toggle_hides_then_shows() {
        let sink = RecordingSink::new();
        let mut session = FilterSession::new(&sink, DELAY);
        let listing = listing();

        assert!(session.bulk_toggle(ChannelGroup::Standard, &listing));
        let mut hidden: Vec<_> = session.state().channels.iter().copied().collect();
        hidden.sort();
        assert_eq!(hidden, vec![ChannelId(1), ChannelId(3), ChannelId(5)]);

        assert!(session.bulk_toggle(ChannelGroup::Standard, &listing));
        assert!(session.state().channels.is_empty());

        assert_eq!(
            sink.events(),
            vec![
                TelemetryEvent::AllChannels {
                    value: BulkToggle::HideAll
                },
                TelemetryEvent::AllChannels {
                    value: BulkToggle::ShowAll
                },
            ]
        );
    }

    #[test]
    fn test_bulk_toggle_premium_routes_to_premium_set() {
        let sink = RecordingSink::new();
        let mut session = FilterSession::new(&sink, DELAY);

        assert!(session.bulk_toggle(ChannelGroup::Premium, &listing()));
        assert_eq!(session.state().premium.len(), 2);
        assert!(session.state().channels.is_empty());
        assert_eq!(sink.names(), vec!["all premium"]);
    }

    #[test]
    fn test_bulk_toggle_without_channels_is_noop() {
        let sink = RecordingSink::new();
        let mut session = FilterSession::new(&sink, DELAY);

        assert!(!session.bulk_toggle(ChannelGroup::Standard, &ChannelListing::Loading));
        let premium_only = ChannelListing::Ready(vec![Channel::new(9, "Premium", true)]);
        assert!(!session.bulk_toggle(ChannelGroup::Standard, &premium_only));

        assert!(sink.is_empty());
        assert_eq!(session.store().revision(), 1);
    }

    #[test]
    fn test_toggle_channel_reports_checked_state() {
        let sink = RecordingSink::new();
        let mut session = FilterSession::new(&sink, DELAY);
        let listing = listing();
        let premium = listing.find(ChannelId(2)).unwrap();
        let standard = listing.find(ChannelId(3)).unwrap();

        session.toggle_channel(premium);
        session.toggle_channel(standard);
        session.toggle_channel(standard);

        assert_eq!(
            sink.events(),
            vec![
                TelemetryEvent::PremiumChannel {
                    channel: ChannelId(2),
                    channel_name: "TVCine Top".to_owned(),
                    checked: false,
                },
                TelemetryEvent::Channel {
                    channel: ChannelId(3),
                    channel_name: "SIC".to_owned(),
                    checked: false,
                },
                TelemetryEvent::Channel {
                    channel: ChannelId(3),
                    channel_name: "SIC".to_owned(),
                    checked: true,
                },
            ]
        );
        assert!(session.state().premium.contains(&ChannelId(2)));
        assert!(session.state().channels.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_search_commits_once_with_telemetry() {
        let sink = RecordingSink::new();
        let mut session = FilterSession::new(&sink, DELAY);

        session.type_search("m").unwrap();
        session.type_search("ma").unwrap();
        session.type_search("mad").unwrap();
        assert_eq!(session.search().draft(), "mad");
        assert!(sink.is_empty());

        assert!(session.next_search_commit().await);
        assert!(!session.next_search_commit().await);

        assert_eq!(session.state().search, "mad");
        assert_eq!(
            sink.events(),
            vec![TelemetryEvent::Search {
                query: "mad".to_owned()
            }]
        );
    }

    #[test]
    fn test_selection_follows_state() {
        let sink = RecordingSink::new();
        let mut session = FilterSession::new(&sink, DELAY);
        let listing = listing();

        session.toggle_channel(listing.find(ChannelId(1)).unwrap());
        let selection = session.selection(&listing);
        let standard = selection.group(ChannelGroup::Standard).unwrap();
        assert_eq!(standard.shown_count(), 2);
        assert_eq!(standard.bulk, BulkToggle::HideAll);
    }

    #[test]
    fn test_attach_commits_search_without_telemetry() {
        let sink = RecordingSink::new();
        let store = FilterStore::with_state(FilterCriteria {
            search: "noir".to_owned(),
            ..FilterCriteria::default()
        });
        let session = FilterSession::with_store(store, &sink, DELAY);

        assert_eq!(session.store().revision(), 1);
        assert_eq!(session.state().search, "noir");
        assert_eq!(session.search().draft(), "noir");
        assert!(sink.is_empty());
    }

    #[test]
    fn test_dispatch_skips_telemetry() {
        let sink = RecordingSink::new();
        let mut session = FilterSession::new(&sink, DELAY);

        session.dispatch(Action::SetSearch("raw".to_owned()));
        assert!(sink.is_empty());
        assert_eq!(session.into_state().search, "raw");
    }
}
