//! Timed replay scripts.
//!
//! A script is a JSON list of user gestures, each stamped with the offset
//! (in milliseconds from the start of the replay) at which it happens:
//!
//! ```json
//! {
//!   "steps": [
//!     { "at_ms": 0,   "gesture": "type",   "text": "b" },
//!     { "at_ms": 120, "gesture": "type",   "text": "bl" },
//!     { "at_ms": 900, "gesture": "genre",  "value": "Sci-Fi" },
//!     { "at_ms": 950, "gesture": "bulk",   "group": "premium" },
//!     { "at_ms": 990, "gesture": "toggle", "channel": 4 }
//!   ]
//! }
//! ```
//!
//! Replays run in real time so the search box debounces exactly as it
//! would for a person typing.

use std::time::Duration;

use camino::Utf8Path;
use color_eyre::eyre::{WrapErr, bail};
use fg_core::{ChannelGroup, ChannelId, Decade, FilterCriteria, Genre, SortOrder};
use fg_filters::action::optional_choice;
use fg_filters::{ChannelListing, FilterSession, RecordingSink, TelemetryEvent, TelemetrySink};
use serde::{Deserialize, Serialize};
use tokio::time::Instant;
use tracing::{debug, info, warn};

/// A parsed replay script.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ReplayScript {
    /// Gestures in the order they happen.
    #[serde(default)]
    pub steps: Vec<Step>,
}

/// One timed gesture.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Step {
    /// Offset from the start of the replay.
    #[serde(default)]
    pub at_ms: u64,

    /// What the user does.
    #[serde(flatten)]
    pub gesture: Gesture,
}

/// A user gesture on the sidebar or topbar.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "gesture", rename_all = "snake_case")]
pub enum Gesture {
    /// Pick a sort order.
    Sort {
        /// The order.
        value: SortOrder,
    },
    /// Pick a genre; `"any"` or `null` clears it.
    Genre {
        /// The genre.
        #[serde(default, deserialize_with = "optional_choice")]
        value: Option<Genre>,
    },
    /// Pick a decade; `"any"` or `null` clears it.
    Year {
        /// The decade.
        #[serde(default, deserialize_with = "optional_choice")]
        value: Option<Decade>,
    },
    /// Click the national-only checkbox.
    National,
    /// Replace the search box text.
    Type {
        /// Full text of the box after the keystroke.
        text: String,
    },
    /// Press a group's bulk button.
    Bulk {
        /// The group.
        group: ChannelGroup,
    },
    /// Click a channel checkbox.
    Toggle {
        /// The channel.
        channel: ChannelId,
    },
}

impl ReplayScript {
    /// Reads a script from disk.
    pub fn load(path: &Utf8Path) -> color_eyre::Result<Self> {
        let raw = std::fs::read_to_string(path.as_std_path())
            .wrap_err_with(|| format!("Failed to read replay script: {path}"))?;
        Self::parse(&raw).wrap_err_with(|| format!("Invalid replay script: {path}"))
    }

    /// Parses and validates a script.
    pub fn parse(raw: &str) -> color_eyre::Result<Self> {
        let script: Self = serde_json::from_str(raw)?;
        script.validate()?;
        Ok(script)
    }

    /// Rejects scripts whose offsets go backwards.
    pub fn validate(&self) -> color_eyre::Result<()> {
        for (index, pair) in self.steps.windows(2).enumerate() {
            if pair[1].at_ms < pair[0].at_ms {
                bail!(
                    "step {} at {}ms happens before step {} at {}ms",
                    index + 1,
                    pair[1].at_ms,
                    index,
                    pair[0].at_ms
                );
            }
        }
        Ok(())
    }

    /// Returns the offset of the last step.
    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.steps.last().map_or(0, |step| step.at_ms))
    }
}

/// Records every event and forwards it to the configured sink.
#[derive(Debug)]
pub struct ReplaySink<F> {
    recorded: RecordingSink,
    forward: F,
}

impl<F: TelemetrySink> ReplaySink<F> {
    /// Wraps `forward`.
    pub fn new(forward: F) -> Self {
        Self {
            recorded: RecordingSink::new(),
            forward,
        }
    }

    /// Returns the events seen so far.
    pub fn events(&self) -> Vec<TelemetryEvent> {
        self.recorded.events()
    }
}

impl<F: TelemetrySink> TelemetrySink for ReplaySink<F> {
    fn emit(&self, event: TelemetryEvent) {
        self.forward.emit(event.clone());
        self.recorded.emit(event);
    }
}

/// The result of a replay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReplayOutcome {
    /// Criteria after the last step and the final search commit.
    pub criteria: FilterCriteria,
    /// Telemetry in emission order.
    pub events: Vec<TelemetryEvent>,
    /// Number of steps applied.
    pub steps: usize,
    /// Number of toggle steps naming an unknown channel.
    pub skipped: usize,
}

/// Plays `script` against a fresh session and returns the outcome.
///
/// Search commits are interleaved with steps as their debounce windows
/// elapse. After the last step the replay waits for any pending search
/// text to settle.
pub async fn replay<F: TelemetrySink>(
    script: &ReplayScript,
    listing: &ChannelListing,
    forward: F,
    delay: Duration,
) -> color_eyre::Result<ReplayOutcome> {
    let sink = ReplaySink::new(forward);
    let mut session = FilterSession::new(&sink, delay);
    let mut commits = session.search().commits();
    let start = Instant::now();
    let mut skipped = 0;

    info!(steps = script.steps.len(), "Starting replay");

    for step in &script.steps {
        let due = start + Duration::from_millis(step.at_ms);
        loop {
            let wake = tokio::select! {
                biased;
                changed = commits.changed() => Wake::Commit(changed.is_ok()),
                () = tokio::time::sleep_until(due) => Wake::Due,
            };
            match wake {
                Wake::Commit(true) => {
                    commits.borrow_and_update();
                    session.commit_ready_search();
                }
                Wake::Commit(false) | Wake::Due => break,
            }
        }

        debug!(at_ms = step.at_ms, gesture = ?step.gesture, "Applying step");
        if !apply(&mut session, listing, &step.gesture)? {
            skipped += 1;
        }
    }

    while session.next_search_commit().await {}

    let criteria = session.into_state();
    info!(skipped, "Replay finished");

    Ok(ReplayOutcome {
        criteria,
        events: sink.events(),
        steps: script.steps.len(),
        skipped,
    })
}

enum Wake {
    Commit(bool),
    Due,
}

/// Applies one gesture. Returns `false` if it named an unknown channel.
fn apply<S: TelemetrySink>(
    session: &mut FilterSession<S>,
    listing: &ChannelListing,
    gesture: &Gesture,
) -> color_eyre::Result<bool> {
    match gesture {
        Gesture::Sort { value } => session.select_sort(*value),
        Gesture::Genre { value } => session.select_genre(*value),
        Gesture::Year { value } => session.select_year(*value),
        Gesture::National => session.toggle_national(),
        Gesture::Type { text } => session.type_search(text.as_str())?,
        Gesture::Bulk { group } => {
            if !session.bulk_toggle(*group, listing) {
                debug!(%group, "Bulk toggle on empty group ignored");
            }
        }
        Gesture::Toggle { channel } => match listing.find(*channel) {
            Some(found) => session.toggle_channel(found),
            None => {
                warn!(%channel, "Toggle for unknown channel skipped");
                return Ok(false);
            }
        },
    }
    Ok(true)
}
