//! The two personal lists a user curates.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Names one of the two independent meal lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListName {
    Favorites,
    Cooked,
}

impl ListName {
    /// Both lists, in display order.
    pub const ALL: [ListName; 2] = [ListName::Favorites, ListName::Cooked];

    /// Returns the record filename for this list.
    pub fn filename(&self) -> &'static str {
        match self {
            ListName::Favorites => "favorites.json",
            ListName::Cooked => "cooked.json",
        }
    }

    /// Human-facing label, capitalized.
    pub fn label(&self) -> &'static str {
        match self {
            ListName::Favorites => "Favorites",
            ListName::Cooked => "Cooked",
        }
    }
}

impl fmt::Display for ListName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListName::Favorites => write!(f, "favorites"),
            ListName::Cooked => write!(f, "cooked"),
        }
    }
}

impl FromStr for ListName {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "favorites" | "favourites" | "favs" | "f" => Ok(ListName::Favorites),
            "cooked" | "c" => Ok(ListName::Cooked),
            _ => Err(format!(
                "Invalid list '{}'. Valid options: favorites, cooked",
                s
            )),
        }
    }
}
