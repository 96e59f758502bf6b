//! Decade filter values.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseValueError;

/// A decade, identified on the wire by its start year (`"1990"`).
///
/// # Examples
///
/// ```
/// use fg_core::Decade;
///
/// assert_eq!(Decade::D1990.as_str(), "1990");
/// assert_eq!(Decade::D1990.label(), "1990s");
/// assert_eq!(Decade::D1990.start_year(), 1990);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[allow(missing_docs)]
pub enum Decade {
    #[serde(rename = "2020")]
    D2020,
    #[serde(rename = "2010")]
    D2010,
    #[serde(rename = "2000")]
    D2000,
    #[serde(rename = "1990")]
    D1990,
    #[serde(rename = "1980")]
    D1980,
    #[serde(rename = "1970")]
    D1970,
    #[serde(rename = "1960")]
    D1960,
    #[serde(rename = "1950")]
    D1950,
    #[serde(rename = "1940")]
    D1940,
    #[serde(rename = "1930")]
    D1930,
    #[serde(rename = "1920")]
    D1920,
}

impl Decade {
    /// Every decade, newest first (select order).
    pub const ALL: [Self; 11] = [
        Self::D2020,
        Self::D2010,
        Self::D2000,
        Self::D1990,
        Self::D1980,
        Self::D1970,
        Self::D1960,
        Self::D1950,
        Self::D1940,
        Self::D1930,
        Self::D1920,
    ];

    /// Returns the first year of the decade.
    #[must_use]
    pub const fn start_year(self) -> u16 {
        match self {
            Self::D2020 => 2020,
            Self::D2010 => 2010,
            Self::D2000 => 2000,
            Self::D1990 => 1990,
            Self::D1980 => 1980,
            Self::D1970 => 1970,
            Self::D1960 => 1960,
            Self::D1950 => 1950,
            Self::D1940 => 1940,
            Self::D1930 => 1930,
            Self::D1920 => 1920,
        }
    }

    /// Returns the wire spelling.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::D2020 => "2020",
            Self::D2010 => "2010",
            Self::D2000 => "2000",
            Self::D1990 => "1990",
            Self::D1980 => "1980",
            Self::D1970 => "1970",
            Self::D1960 => "1960",
            Self::D1950 => "1950",
            Self::D1940 => "1940",
            Self::D1930 => "1930",
            Self::D1920 => "1920",
        }
    }

    /// Returns the select label (`"1990s"`).
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::D2020 => "2020s",
            Self::D2010 => "2010s",
            Self::D2000 => "2000s",
            Self::D1990 => "1990s",
            Self::D1980 => "1980s",
            Self::D1970 => "1970s",
            Self::D1960 => "1960s",
            Self::D1950 => "1950s",
            Self::D1940 => "1940s",
            Self::D1930 => "1930s",
            Self::D1920 => "1920s",
        }
    }
}

impl fmt::Display for Decade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Decade {
    type Err = ParseValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|decade| decade.as_str() == s)
            .ok_or_else(|| ParseValueError::new("decade", s))
    }
}
