use crate::error::TokenError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Ordering applied to every derived column. All orders are descending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SortKey {
    /// Newest `created` first.
    #[default]
    Recency,
    /// Largest `|change_24h|` first.
    AbsoluteChange,
    /// Largest `volume` first, missing volume counts as 0.
    Volume,
}

impl SortKey {
    pub const ALL: [SortKey; 3] = [SortKey::Recency, SortKey::AbsoluteChange, SortKey::Volume];

    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::Recency => "recency",
            SortKey::AbsoluteChange => "change",
            SortKey::Volume => "volume",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = TokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "recency" | "created" => Ok(SortKey::Recency),
            "change" | "change24h" | "absolute-change" => Ok(SortKey::AbsoluteChange),
            "volume" => Ok(SortKey::Volume),
            _ => Err(TokenError::UnknownSortKey(s.to_string())),
        }
    }
}
