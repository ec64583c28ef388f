use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Genres offered by the explorer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Genre {
    Rock,
    Pop,
    Jazz,
    Classical,
    HipHop,
    Edm,
    Country,
    Metal,
    Indie,
    #[serde(rename = "r&b")]
    RnB,
}

impl Genre {
    pub const ALL: [Genre; 10] = [
        Genre::Rock,
        Genre::Pop,
        Genre::Jazz,
        Genre::Classical,
        Genre::HipHop,
        Genre::Edm,
        Genre::Country,
        Genre::Metal,
        Genre::Indie,
        Genre::RnB,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Genre::Rock => "rock",
            Genre::Pop => "pop",
            Genre::Jazz => "jazz",
            Genre::Classical => "classical",
            Genre::HipHop => "hip-hop",
            Genre::Edm => "edm",
            Genre::Country => "country",
            Genre::Metal => "metal",
            Genre::Indie => "indie",
            Genre::RnB => "r&b",
        }
    }
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unsupported genre {0:?}, expected one of: rock, pop, jazz, classical, hip-hop, edm, country, metal, indie, r&b")]
pub struct UnknownGenre(pub String);

impl FromStr for Genre {
    type Err = UnknownGenre;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Genre::ALL
            .into_iter()
            .find(|g| g.as_str() == wanted)
            .ok_or_else(|| UnknownGenre(s.to_string()))
    }
}

/// Number of tracks requested per search, always within
/// [`ResultLimit::MIN`]..=[`ResultLimit::MAX`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ResultLimit(u32);

impl ResultLimit {
    pub const MIN: u32 = 5;
    pub const MAX: u32 = 50;
    pub const DEFAULT: u32 = 15;

    /// Clamp any requested count into the supported bound
    pub fn clamped(requested: u32) -> Self {
        ResultLimit(requested.clamp(Self::MIN, Self::MAX))
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl Default for ResultLimit {
    fn default() -> Self {
        ResultLimit(Self::DEFAULT)
    }
}

/// One explore action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchRequest {
    pub genre: Genre,
    pub limit: ResultLimit,
}

impl SearchRequest {
    pub fn new(genre: Genre, limit: ResultLimit) -> Self {
        SearchRequest { genre, limit }
    }
}

/// How the track list is laid out
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Columns,
    Table,
}

impl FromStr for ViewMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "columns" => Ok(ViewMode::Columns),
            "table" => Ok(ViewMode::Table),
            other => Err(format!("unknown view mode {other:?}, expected columns or table")),
        }
    }
}
