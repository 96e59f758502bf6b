//! Genre filter values.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseValueError;

/// One of the fifteen genres the sidebar offers.
///
/// The wire spelling equals the label; only [`Genre::SciFi`] differs from
/// its variant name (`"Sci-Fi"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[allow(missing_docs)]
pub enum Genre {
    Action,
    Adventure,
    Comedy,
    Crime,
    Documentary,
    Drama,
    History,
    Horror,
    Musical,
    Romance,
    /// Science fiction.
    #[serde(rename = "Sci-Fi")]
    SciFi,
    Sport,
    Thriller,
    War,
    Western,
}

impl Genre {
    /// Every genre, in sidebar order.
    pub const ALL: [Self; 15] = [
        Self::Action,
        Self::Adventure,
        Self::Comedy,
        Self::Crime,
        Self::Documentary,
        Self::Drama,
        Self::History,
        Self::Horror,
        Self::Musical,
        Self::Romance,
        Self::SciFi,
        Self::Sport,
        Self::Thriller,
        Self::War,
        Self::Western,
    ];

    /// Returns the label, which is also the wire spelling.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Action => "Action",
            Self::Adventure => "Adventure",
            Self::Comedy => "Comedy",
            Self::Crime => "Crime",
            Self::Documentary => "Documentary",
            Self::Drama => "Drama",
            Self::History => "History",
            Self::Horror => "Horror",
            Self::Musical => "Musical",
            Self::Romance => "Romance",
            Self::SciFi => "Sci-Fi",
            Self::Sport => "Sport",
            Self::Thriller => "Thriller",
            Self::War => "War",
            Self::Western => "Western",
        }
    }
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Genre {
    type Err = ParseValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|genre| genre.as_str() == s)
            .ok_or_else(|| ParseValueError::new("genre", s))
    }
}
