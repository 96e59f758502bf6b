//! Sort order for the schedule listing.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseValueError;

/// Which score the listing is ordered by.
///
/// # Examples
///
/// ```
/// use fg_core::SortOrder;
///
/// assert_eq!(SortOrder::default(), SortOrder::Imdb);
/// assert_eq!("rotten".parse::<SortOrder>().unwrap(), SortOrder::Rotten);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Order by IMDb score.
    #[default]
    Imdb,
    /// Order by Rotten Tomatoes score.
    Rotten,
}

impl SortOrder {
    /// Every sort order, in menu order.
    pub const ALL: [Self; 2] = [Self::Imdb, Self::Rotten];

    /// Returns the wire spelling (`"imdb"` / `"rotten"`).
    #[inline]
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Imdb => "imdb",
            Self::Rotten => "rotten",
        }
    }

    /// Returns the menu label.
    #[inline]
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Imdb => "IMDB",
            Self::Rotten => "Rotten Tomatoes",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOrder {
    type Err = ParseValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|order| order.as_str() == s)
            .ok_or_else(|| ParseValueError::new("sort order", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_order_labels() {
        assert_eq!(SortOrder::Imdb.label(), "IMDB");
        assert_eq!(SortOrder::Rotten.label(), "Rotten Tomatoes");
    }

    #[test]
    fn test_sort_order_parse() {
        assert_eq!("imdb".parse::<SortOrder>().unwrap(), SortOrder::Imdb);
        assert!("metacritic".parse::<SortOrder>().is_err());
    }

    #[test]
    fn test_sort_order_serialization() {
        assert_eq!(
            serde_json::to_string(&SortOrder::Rotten).unwrap(),
            r#""rotten""#
        );
        let order: SortOrder = serde_json::from_str(r#""imdb""#).unwrap();
        assert_eq!(order, SortOrder::Imdb);
    }
}
