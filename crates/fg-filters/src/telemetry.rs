//! User-action telemetry.
//!
//! Each state-changing gesture is described by a [`TelemetryEvent`] and
//! handed to a [`TelemetrySink`]. Sinks are fire-and-forget: `emit` returns
//! nothing and the filter logic never depends on what a sink does.
//!
//! Events serialize as `{"event": "<name>", "props": {...}}`, using the
//! analytics event names and prop keys of the web frontend.

use std::sync::Arc;

use fg_core::{ChannelId, Decade, Genre, SortOrder, TelemetryConfig};
use parking_lot::Mutex;
use serde::Serialize;

use crate::selection::BulkToggle;

/// A user action worth reporting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", content = "props")]
pub enum TelemetryEvent {
    /// Sort order picked.
    #[serde(rename = "sort")]
    Sort {
        /// The new order.
        value: SortOrder,
    },

    /// Genre picked (`None` for "Any genre").
    #[serde(rename = "genre")]
    Genre {
        /// The new genre.
        genre: Option<Genre>,
    },

    /// National-only checkbox changed.
    #[serde(rename = "national")]
    National {
        /// The new value of the flag.
        #[serde(rename = "onlyNational")]
        only_national: bool,
    },

    /// Decade picked (`None` for "Any year").
    #[serde(rename = "year")]
    Year {
        /// The new decade.
        year: Option<Decade>,
    },

    /// Search text committed after debouncing.
    #[serde(rename = "search")]
    Search {
        /// The committed text.
        query: String,
    },

    /// Premium bulk button pressed.
    #[serde(rename = "all premium")]
    AllPremium {
        /// The button as it was labeled when pressed.
        value: BulkToggle,
    },

    /// Standard bulk button pressed.
    #[serde(rename = "all channels")]
    AllChannels {
        /// The button as it was labeled when pressed.
        value: BulkToggle,
    },

    /// Premium channel checkbox changed.
    #[serde(rename = "premium channel")]
    PremiumChannel {
        /// Channel id.
        channel: ChannelId,
        /// Channel display name.
        #[serde(rename = "channelName")]
        channel_name: String,
        /// Whether the channel is now shown.
        checked: bool,
    },

    /// Standard channel checkbox changed.
    #[serde(rename = "channel")]
    Channel {
        /// Channel id.
        channel: ChannelId,
        /// Channel display name.
        #[serde(rename = "channelName")]
        channel_name: String,
        /// Whether the channel is now shown.
        checked: bool,
    },
}

impl TelemetryEvent {
    /// Returns the analytics event name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Sort { .. } => "sort",
            Self::Genre { .. } => "genre",
            Self::National { .. } => "national",
            Self::Year { .. } => "year",
            Self::Search { .. } => "search",
            Self::AllPremium { .. } => "all premium",
            Self::AllChannels { .. } => "all channels",
            Self::PremiumChannel { .. } => "premium channel",
            Self::Channel { .. } => "channel",
        }
    }

    /// Returns the event props as JSON.
    #[must_use]
    pub fn props(&self) -> serde_json::Value {
        serde_json::to_value(self)
            .ok()
            .and_then(|mut value| value.get_mut("props").map(serde_json::Value::take))
            .unwrap_or(serde_json::Value::Null)
    }
}

/// Receives telemetry events.
pub trait TelemetrySink {
    /// Delivers one event. Must not block on the analytics backend.
    fn emit(&self, event: TelemetryEvent);
}

impl<S: TelemetrySink + ?Sized> TelemetrySink for &S {
    fn emit(&self, event: TelemetryEvent) {
        (**self).emit(event);
    }
}

impl<S: TelemetrySink + ?Sized> TelemetrySink for Box<S> {
    fn emit(&self, event: TelemetryEvent) {
        (**self).emit(event);
    }
}

impl<S: TelemetrySink + ?Sized> TelemetrySink for Arc<S> {
    fn emit(&self, event: TelemetryEvent) {
        (**self).emit(event);
    }
}

/// Discards every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSink;

impl TelemetrySink for NoopSink {
    fn emit(&self, _event: TelemetryEvent) {}
}

/// Writes each event as a structured `info` record on target `telemetry`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl TelemetrySink for TracingSink {
    fn emit(&self, event: TelemetryEvent) {
        tracing::info!(
            target: "telemetry",
            event = event.name(),
            props = %event.props(),
            "user action"
        );
    }
}

/// Keeps every event in memory.
#[derive(Debug, Default)]
pub struct RecordingSink {
    events: Mutex<Vec<TelemetryEvent>>,
}

impl RecordingSink {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of the recorded events, oldest first.
    #[must_use]
    pub fn events(&self) -> Vec<TelemetryEvent> {
        self.events.lock().clone()
    }

    /// Returns the recorded event names, oldest first.
    #[must_use]
    pub fn names(&self) -> Vec<&'static str> {
        self.events.lock().iter().map(TelemetryEvent::name).collect()
    }

    /// Removes and returns the recorded events.
    pub fn take(&self) -> Vec<TelemetryEvent> {
        std::mem::take(&mut *self.events.lock())
    }

    /// Returns how many events were recorded.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.lock().len()
    }

    /// Returns `true` if nothing was recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.lock().is_empty()
    }
}

impl TelemetrySink for RecordingSink {
    fn emit(&self, event: TelemetryEvent) {
        self.events.lock().push(event);
    }
}

/// Picks the sink described by `config`.
#[must_use]
pub fn sink_for(config: &TelemetryConfig) -> Box<dyn TelemetrySink> {
    if config.is_active() {
        Box::new(TracingSink)
    } else {
        Box::new(NoopSink)
    }
}
