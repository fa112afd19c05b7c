//! The generic entity manager.
//!
//! One [`Manager`] wraps one [`Records`] sequence. The three entity kinds
//! (bus, driver, line) share this single implementation, parameterized by
//! their [`Record`] shape descriptor.

use crate::{domain::Record, store::Records};

/// Manages the records of one entity kind.
#[derive(Debug, Clone)]
pub struct Manager<R> {
    records: Records<R>,
}

impl<R> Default for Manager<R> {
    fn default() -> Self {
        Self {
            records: Records::new(),
        }
    }
}

/// The result of listing a store's records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Listing<'a, R> {
    /// The store holds no records.
    Empty,
    /// All records, in insertion order. Display is 1-indexed.
    Records(&'a [R]),
}

/// The result of removing a record by natural key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoveOutcome<R> {
    /// The earliest record with a matching key, now removed from the store.
    Removed(R),
    /// No record matched; the store is unchanged.
    NotFound,
}

impl<R: Record> Manager<R> {
    /// Creates a manager over an empty store.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            records: Records::new(),
        }
    }

    /// Number of stored records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// `true` if the store holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Lists all records in insertion order.
    ///
    /// An empty store yields [`Listing::Empty`] rather than an empty slice,
    /// so the caller can render the two cases differently.
    #[must_use]
    pub fn list_items(&self) -> Listing<'_, R> {
        if self.records.is_empty() {
            Listing::Empty
        } else {
            Listing::Records(self.records.as_slice())
        }
    }

    /// Appends a record at the tail of the store.
    ///
    /// Always succeeds: values are not range-checked and duplicate natural
    /// keys are permitted.
    pub fn add_item(&mut self, record: R) {
        tracing::debug!(kind = R::KIND, key = record.key(), "record added");
        self.records.append(record);
    }

    /// Removes the first record whose natural key equals `key`.
    ///
    /// Matching is exact equality on the key field alone, never substring
    /// containment of a rendered row. On an empty store, or when no record
    /// matches, the store is left unchanged and the outcome is
    /// [`RemoveOutcome::NotFound`].
    pub fn remove_item(&mut self, key: &str) -> RemoveOutcome<R> {
        match self.records.remove_first_where(|record| record.key() == key) {
            Some(record) => {
                tracing::debug!(kind = R::KIND, key, "record removed");
                RemoveOutcome::Removed(record)
            }
            None => RemoveOutcome::NotFound,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Listing, Manager, RemoveOutcome};
    use crate::domain::{Bus, Driver};

    fn plates(manager: &Manager<Bus>) -> Vec<&str> {
        match manager.list_items() {
            Listing::Empty => Vec::new(),
            Listing::Records(records) => records.iter().map(Bus::plate).collect(),
        }
    }

    #[test]
    fn empty_store_lists_as_empty() {
        let manager: Manager<Bus> = Manager::new();
        assert_eq!(manager.list_items(), Listing::Empty);
    }

    #[test]
    fn listing_follows_insertion_order() {
        let mut manager = Manager::new();
        manager.add_item(Bus::new("ModelX", "PLATE1", 100));
        manager.add_item(Bus::new("ModelY", "PLATE2", 50));
        manager.add_item(Bus::new("ModelZ", "PLATE3", 0));
        assert_eq!(plates(&manager), ["PLATE1", "PLATE2", "PLATE3"]);
    }

    #[test]
    fn count_tracks_adds_minus_removes() {
        let mut manager = Manager::new();
        manager.add_item(Driver::new("Ada", 34, 12));
        manager.add_item(Driver::new("Brian", 51, 30));
        manager.add_item(Driver::new("Carol", 28, 4));
        assert_eq!(manager.len(), 3);

        assert!(matches!(
            manager.remove_item("Brian"),
            RemoveOutcome::Removed(_)
        ));
        assert_eq!(manager.len(), 2);
    }

    #[test]
    fn remove_on_empty_store_is_not_found() {
        let mut manager: Manager<Bus> = Manager::new();
        assert_eq!(manager.remove_item("PLATE1"), RemoveOutcome::NotFound);
    }

    #[test]
    fn remove_with_unknown_key_leaves_store_unchanged() {
        let mut manager = Manager::new();
        manager.add_item(Bus::new("ModelX", "PLATE1", 100));
        manager.add_item(Bus::new("ModelY", "PLATE2", 50));

        assert_eq!(manager.remove_item("PLATE9"), RemoveOutcome::NotFound);
        assert_eq!(plates(&manager), ["PLATE1", "PLATE2"]);
    }

    #[test]
    fn remove_takes_only_the_earliest_of_duplicate_keys() {
        let mut manager = Manager::new();
        manager.add_item(Bus::new("ModelX", "PLATE1", 100));
        manager.add_item(Bus::new("ModelY", "PLATE1", 50));

        let outcome = manager.remove_item("PLATE1");
        let RemoveOutcome::Removed(removed) = outcome else {
            panic!("expected a removal");
        };
        assert_eq!(removed.model(), "ModelX");
        assert_eq!(plates(&manager), ["PLATE1"]);
    }

    #[test]
    fn remove_matches_the_key_field_exactly() {
        // "PLATE1" appearing inside another field must not match.
        let mut manager = Manager::new();
        manager.add_item(Bus::new("PLATE1 special edition", "PLATE2", 10));
        assert_eq!(manager.remove_item("PLATE1"), RemoveOutcome::NotFound);

        // Nor may a key prefix match.
        assert_eq!(manager.remove_item("PLATE"), RemoveOutcome::NotFound);
        assert_eq!(manager.len(), 1);
    }

    #[test]
    fn add_remove_scenario() {
        let mut manager = Manager::new();
        manager.add_item(Bus::new("ModelX", "PLATE1", 100));
        manager.add_item(Bus::new("ModelY", "PLATE2", 50));

        assert!(matches!(
            manager.remove_item("PLATE1"),
            RemoveOutcome::Removed(_)
        ));

        let Listing::Records(records) = manager.list_items() else {
            panic!("expected a non-empty listing");
        };
        assert_eq!(records, &[Bus::new("ModelY", "PLATE2", 50)]);
    }
}
