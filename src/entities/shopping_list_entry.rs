//! Shopping list entry entity - A free-text item on the in-store list.

use serde::Serialize;
use std::fmt;

/// Identity of a shopping list entry, assigned once when the entry is created
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct EntryId(u64);

impl EntryId {
    /// Wraps a raw entry number.
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw entry number.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Which of the two list sections an entry is in
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryStatus {
    /// Still to buy
    Planning,
    /// Already in the trolley
    Done,
}

impl EntryStatus {
    /// The other status.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Planning => Self::Done,
            Self::Done => Self::Planning,
        }
    }
}

/// A quantity-less shopping list item
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ShoppingListEntry {
    /// Identity preserved across moves between sections
    pub id: EntryId,
    /// What the user typed
    pub text: String,
    /// Current section
    pub status: EntryStatus,
}
