//! Filter state and channel selection for filmguide.
//!
//! This crate holds the live behavior of the schedule filters:
//!
//! - [`FilterStore`] - single owner of the criteria, mutated by [`Action`]s
//! - [`derive_selection`] - channel sidebar groups and bulk toggles
//! - [`SearchSync`] - debounced link between the search box and the store
//! - [`FilterSession`] - one method per user gesture, with telemetry
//! - [`ChannelSource`] - where the channel list comes from
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//! use fg_core::{Channel, ChannelGroup};
//! use fg_filters::{BulkToggle, ChannelListing, FilterSession, NoopSink};
//!
//! let listing = ChannelListing::Ready(vec![
//!     Channel::new(1, "RTP1", false),
//!     Channel::new(2, "SIC", false),
//! ]);
//! let mut session = FilterSession::new(NoopSink, Duration::from_millis(500));
//!
//! session.bulk_toggle(ChannelGroup::Standard, &listing);
//! let selection = session.selection(&listing);
//! let standard = selection.group(ChannelGroup::Standard).unwrap();
//! assert_eq!(standard.shown_count(), 0);
//! assert_eq!(standard.bulk, BulkToggle::ShowAll);
//! ```

#![deny(clippy::all)]
#![warn(missing_docs)]

pub mod action;
pub mod error;
pub mod search_sync;
pub mod selection;
pub mod session;
pub mod source;
pub mod store;
pub mod telemetry;

pub use action::Action;
pub use error::SourceError;
pub use search_sync::SearchSync;
pub use selection::{
    BulkToggle, ChannelRow, GroupSelection, Partition, Selection, bulk_action, bulk_toggle,
    derive_selection,
};
pub use session::FilterSession;
pub use source::{
    ChannelListing, ChannelSource, ChannelsResponse, JsonFileSource, PendingSource,
    StaticChannels,
};
pub use store::{FilterStore, reduce};
pub use telemetry::{NoopSink, RecordingSink, TelemetryEvent, TelemetrySink, TracingSink, sink_for};
