//! Domain types for filmguide.
//!
//! # Module Organization
//!
//! - [`channel`] - Channels, channel ids and the premium/standard grouping
//! - [`criteria`] - The canonical filter record
//! - [`decade`] - Decade filter values
//! - [`genre`] - Genre filter values
//! - [`sort`] - Sort order
//!
//! All public types are re-exported here and at the crate root:
//!
//! ```
//! use fg_core::{Channel, ChannelId, FilterCriteria, Genre, SortOrder};
//! ```

mod channel;
mod criteria;
mod decade;
mod genre;
mod sort;

use std::str::FromStr;

pub use channel::{Channel, ChannelGroup, ChannelId};
pub use criteria::FilterCriteria;
pub use decade::Decade;
pub use genre::Genre;
pub use sort::SortOrder;

use crate::error::ParseValueError;

/// Sentinel used by selects for "no restriction".
pub const ANY: &str = "any";

/// Parses an optional filter value.
///
/// The empty string and [`ANY`] (case-insensitive) mean "no restriction"
/// and yield `None`. Anything else must name a member of `T`.
///
/// # Examples
///
/// ```
/// use fg_core::{Decade, types::parse_optional};
///
/// assert_eq!(parse_optional::<Decade>("any").unwrap(), None);
/// assert_eq!(parse_optional::<Decade>("1990").unwrap(), Some(Decade::D1990));
/// assert!(parse_optional::<Decade>("1995").is_err());
/// ```
pub fn parse_optional<T>(input: &str) -> Result<Option<T>, ParseValueError>
where
    T: FromStr<Err = ParseValueError>,
{
    let input = input.trim();
    if input.is_empty() || input.eq_ignore_ascii_case(ANY) {
        return Ok(None);
    }
    input.parse().map(Some)
}
