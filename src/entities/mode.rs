//! Mode entity - Selects whether the basket or the shopping list is shown.

use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// In-store / online toggle
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    /// Shopping in a physical store, the shopping list is active
    InStore,
    /// Ordering online, the basket is active
    #[default]
    Online,
}

impl Mode {
    /// The other mode.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::InStore => Self::Online,
            Self::Online => Self::InStore,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InStore => f.write_str("In-Store"),
            Self::Online => f.write_str("Online"),
        }
    }
}

impl FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "instore" | "in-store" | "store" => Ok(Self::InStore),
            "online" => Ok(Self::Online),
            other => Err(format!("Unknown mode '{other}', expected 'online' or 'instore'")),
        }
    }
}
