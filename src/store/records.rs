//! An ordered sequence of records of one kind.

use std::slice;

/// An ordered, append-only-by-default sequence of records.
///
/// Insertion order is display order. The sequence knows nothing about
/// record shapes or natural keys; removal is by caller-supplied predicate
/// and always takes the earliest match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Records<R> {
    records: Vec<R>,
}

impl<R> Records<R> {
    /// Creates an empty sequence.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Number of stored records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// `true` if no records are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Appends a record at the tail.
    pub fn append(&mut self, record: R) {
        self.records.push(record);
    }

    /// All records, in insertion order.
    #[must_use]
    pub fn as_slice(&self) -> &[R] {
        &self.records
    }

    /// Iterates over the records in insertion order.
    pub fn iter(&self) -> slice::Iter<'_, R> {
        self.records.iter()
    }

    /// Removes and returns the first record matching the predicate.
    ///
    /// Scans in insertion order; later matches are left in place. Returns
    /// `None` (and leaves the sequence unchanged) when nothing matches.
    pub fn remove_first_where(&mut self, mut predicate: impl FnMut(&R) -> bool) -> Option<R> {
        let index = self.records.iter().position(|record| predicate(record))?;
        Some(self.records.remove(index))
    }
}

impl<R> Default for Records<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, R> IntoIterator for &'a Records<R> {
    type Item = &'a R;
    type IntoIter = slice::Iter<'a, R>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::Records;

    #[test]
    fn append_preserves_insertion_order() {
        let mut records = Records::new();
        records.append("a");
        records.append("b");
        records.append("c");
        assert_eq!(records.as_slice(), &["a", "b", "c"]);
    }

    #[test]
    fn remove_first_where_takes_earliest_match() {
        let mut records = Records::new();
        records.append(1);
        records.append(2);
        records.append(1);
        assert_eq!(records.remove_first_where(|&n| n == 1), Some(1));
        assert_eq!(records.as_slice(), &[2, 1]);
    }

    #[test]
    fn remove_first_where_without_match_changes_nothing() {
        let mut records = Records::new();
        records.append(1);
        records.append(2);
        assert_eq!(records.remove_first_where(|&n| n == 9), None);
        assert_eq!(records.len(), 2);
        assert_eq!(records.as_slice(), &[1, 2]);
    }

    #[test]
    fn remove_on_empty_is_none() {
        let mut records: Records<u32> = Records::new();
        assert_eq!(records.remove_first_where(|_| true), None);
    }
}
