//! Shopping list business logic - The in-store checklist.
//!
//! Entries live in one of two ordered sections, Planning and Done. Toggling
//! moves an entry to the tail of the other section without changing its id.

use crate::entities::{EntryId, EntryStatus, ShoppingListEntry};
use tracing::debug;

/// Quantity-less list of things to pick up in the store
#[derive(Clone, Debug, Default)]
pub struct ShoppingList {
    planning: Vec<ShoppingListEntry>,
    done: Vec<ShoppingListEntry>,
    next_id: u64,
}

impl ShoppingList {
    /// Creates an empty list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a new entry to the Planning section.
    ///
    /// Blank text is ignored and yields `None`.
    pub fn add_entry(&mut self, text: &str) -> Option<EntryId> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }

        self.next_id += 1;
        let id = EntryId::new(self.next_id);
        self.planning.push(ShoppingListEntry {
            id,
            text: text.to_string(),
            status: EntryStatus::Planning,
        });
        debug!("Added shopping list entry {} '{}'", id, text);
        Some(id)
    }

    /// Moves an entry to the tail of the other section.
    ///
    /// Returns the entry's new status, or `None` if no entry has this id.
    pub fn toggle_entry(&mut self, id: EntryId) -> Option<EntryStatus> {
        let (source, destination) = if self.planning.iter().any(|entry| entry.id == id) {
            (&mut self.planning, &mut self.done)
        } else if self.done.iter().any(|entry| entry.id == id) {
            (&mut self.done, &mut self.planning)
        } else {
            debug!("No shopping list entry with id {}", id);
            return None;
        };

        let index = source.iter().position(|entry| entry.id == id)?;
        let mut entry = source.remove(index);
        entry.status = entry.status.toggled();
        let status = entry.status;
        destination.push(entry);
        debug!("Moved shopping list entry {} to {:?}", id, status);
        Some(status)
    }

    /// Entries still to buy, in order.
    #[must_use]
    pub fn planning(&self) -> &[ShoppingListEntry] {
        &self.planning
    }

    /// Entries already picked up, in order.
    #[must_use]
    pub fn done(&self) -> &[ShoppingListEntry] {
        &self.done
    }

    /// Looks up an entry in either section.
    #[must_use]
    pub fn entry(&self, id: EntryId) -> Option<&ShoppingListEntry> {
        self.planning
            .iter()
            .chain(&self.done)
            .find(|entry| entry.id == id)
    }

    /// Total number of entries across both sections.
    #[must_use]
    pub fn len(&self) -> usize {
        self.planning.len() + self.done.len()
    }

    /// True when both sections are empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.planning.is_empty() && self.done.is_empty()
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    fn texts(entries: &[ShoppingListEntry]) -> Vec<&str> {
        entries.iter().map(|entry| entry.text.as_str()).collect()
    }

    #[test]
    fn test_add_entry_appends_to_planning() {
        let mut list = ShoppingList::new();
        list.add_entry("Milk").unwrap();
        list.add_entry("Eggs").unwrap();

        assert_eq!(texts(list.planning()), vec!["Milk", "Eggs"]);
        assert!(list.done().is_empty());
    }

    #[test]
    fn test_blank_entry_is_ignored() {
        let mut list = ShoppingList::new();
        assert!(list.add_entry("").is_none());
        assert!(list.add_entry("   ").is_none());
        assert!(list.is_empty());
    }

    #[test]
    fn test_toggle_moves_exactly_once_and_back() {
        let mut list = ShoppingList::new();
        let milk = list.add_entry("Milk").unwrap();
        list.add_entry("Eggs").unwrap();

        assert_eq!(list.toggle_entry(milk), Some(EntryStatus::Done));
        assert_eq!(texts(list.planning()), vec!["Eggs"]);
        assert_eq!(texts(list.done()), vec!["Milk"]);
        assert_eq!(list.len(), 2);

        assert_eq!(list.toggle_entry(milk), Some(EntryStatus::Planning));
        assert_eq!(texts(list.planning()), vec!["Eggs", "Milk"]);
        assert!(list.done().is_empty());
        assert_eq!(list.entry(milk).unwrap().id, milk);
    }

    #[test]
    fn test_toggle_appends_to_destination_tail() {
        let mut list = ShoppingList::new();
        let a = list.add_entry("A").unwrap();
        let b = list.add_entry("B").unwrap();
        list.toggle_entry(b);
        list.toggle_entry(a);
        assert_eq!(texts(list.done()), vec!["B", "A"]);
    }

    #[test]
    fn test_toggle_unknown_id() {
        let mut list = ShoppingList::new();
        list.add_entry("Milk");
        assert_eq!(list.toggle_entry(EntryId::new(42)), None);
        assert_eq!(list.planning().len(), 1);
    }

    #[test]
    fn test_ids_are_not_reused() {
        let mut list = ShoppingList::new();
        let first = list.add_entry("Milk").unwrap();
        let second = list.add_entry("Milk").unwrap();
        assert_ne!(first, second);
    }
}
