//! Content ratings and viewer suitability.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A content rating recognised by the advisor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContentRating {
    #[serde(rename = "TV-MA")]
    TvMa,
    #[serde(rename = "R")]
    R,
    #[serde(rename = "NC-17")]
    Nc17,
    #[serde(rename = "TV-14")]
    Tv14,
    #[serde(rename = "PG-13")]
    Pg13,
    #[serde(rename = "TV-PG")]
    TvPg,
    #[serde(rename = "PG")]
    Pg,
    #[serde(rename = "G")]
    G,
    #[serde(rename = "TV-G")]
    TvG,
    #[serde(rename = "TV-Y")]
    TvY,
    #[serde(rename = "TV-Y7")]
    TvY7,
    #[serde(rename = "TV-Y7-FV")]
    TvY7Fv,
}

impl ContentRating {
    pub const ALL: [Self; 12] = [
        Self::TvMa,
        Self::R,
        Self::Nc17,
        Self::Tv14,
        Self::Pg13,
        Self::TvPg,
        Self::Pg,
        Self::G,
        Self::TvG,
        Self::TvY,
        Self::TvY7,
        Self::TvY7Fv,
    ];

    /// Parse a stored rating string. Matching is exact.
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.as_str() == s)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TvMa => "TV-MA",
            Self::R => "R",
            Self::Nc17 => "NC-17",
            Self::Tv14 => "TV-14",
            Self::Pg13 => "PG-13",
            Self::TvPg => "TV-PG",
            Self::Pg => "PG",
            Self::G => "G",
            Self::TvG => "TV-G",
            Self::TvY => "TV-Y",
            Self::TvY7 => "TV-Y7",
            Self::TvY7Fv => "TV-Y7-FV",
        }
    }

    /// Age threshold for this rating.
    pub fn minimum_age(&self) -> u8 {
        match self {
            Self::TvMa | Self::R | Self::Nc17 => 17,
            Self::Tv14 => 14,
            Self::Pg13 => 13,
            Self::TvPg | Self::Pg => 8,
            Self::G | Self::TvG | Self::TvY | Self::TvY7 | Self::TvY7Fv => 0,
        }
    }

    /// Classify a viewer age against this rating's threshold.
    ///
    /// Older than the threshold is suitable, exactly the threshold calls for
    /// parental guidance, younger is not suitable.
    pub fn suitability(&self, age: i64) -> Suitability {
        let threshold = i64::from(self.minimum_age());
        match age.cmp(&threshold) {
            std::cmp::Ordering::Greater => Suitability::Suitable,
            std::cmp::Ordering::Equal => Suitability::ParentalGuidance,
            std::cmp::Ordering::Less => Suitability::NotSuitable,
        }
    }
}

impl fmt::Display for ContentRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of a rating check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Suitability {
    Suitable,
    ParentalGuidance,
    NotSuitable,
}

impl Suitability {
    pub fn message(&self) -> &'static str {
        match self {
            Self::Suitable => "This title is suitable for the viewer.",
            Self::ParentalGuidance => "Parental guidance is advised for this title.",
            Self::NotSuitable => "This title is not suitable for the viewer.",
        }
    }
}

impl fmt::Display for Suitability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}
