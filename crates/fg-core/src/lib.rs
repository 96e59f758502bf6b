//! Core types, filter criteria, configuration, and errors for filmguide.
//!
//! This crate provides the foundational types used across the workspace:
//!
//! - Closed enumerations for the schedule filters ([`SortOrder`], [`Genre`], [`Decade`])
//! - Channel types ([`Channel`], [`ChannelId`], [`ChannelGroup`])
//! - The canonical [`FilterCriteria`] record
//! - Configuration structures ([`Config`])
//! - Error types for configuration and boundary parsing
//! - Type aliases for `FxHashSet` used by the exclusion sets

#![deny(clippy::all)]
#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod hash;
pub mod types;

pub use config::{ChannelsConfig, Config, SearchConfig, TelemetryConfig, TelemetryTarget};
pub use error::{ConfigError, ParseValueError};
pub use hash::{ChannelIdSet, FxHashSet, fx_hash_set, sorted_ids};
pub use types::{
    ANY, Channel, ChannelGroup, ChannelId, Decade, FilterCriteria, Genre, SortOrder, parse_optional,
};
