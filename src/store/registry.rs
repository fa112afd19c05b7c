//! The assignment registry.
//!
//! Maps a line identifier to the ordered list of bus+driver pairs serving
//! it. Payloads live in a `HashMap` keyed by line; a separate list records
//! the order in which line keys first appeared, so listings iterate lines
//! in first-seen order.

use std::{collections::HashMap, slice};

use crate::domain::Assignment;

/// Registry of bus+driver assignments, keyed by line identifier.
///
/// A line key exists only once an assignment has been added under it, and
/// is never deleted afterwards: removing the last assignment leaves the
/// key present with an empty sequence.
#[derive(Debug, Default, Clone)]
pub struct Registry {
    /// Assignment sequences, keyed by line identifier.
    assignments: HashMap<String, Vec<Assignment>>,

    /// Line identifiers in the order they were first assigned to.
    /// Stored separately because `HashMap` iteration order is arbitrary.
    line_order: Vec<String>,
}

/// The result of recording an assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssignOutcome {
    /// The pair was appended under the line's key.
    Assigned,
    /// At least one identifier was empty; nothing was recorded.
    InvalidInput,
}

/// The result of removing an assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnassignOutcome {
    /// The line key exists; every matching pair was dropped.
    ///
    /// The count may be zero: a known line with no matching pair is still
    /// a successful removal, not an error.
    Removed(usize),
    /// The line key was never assigned to.
    NotFound,
}

/// The result of listing the registry.
#[derive(Debug)]
pub enum AssignmentListing<'a> {
    /// No line has ever been assigned to.
    Empty,
    /// Lines and their assignment sequences, in first-seen line order.
    Lines(LinesIter<'a>),
}

/// Iterator over `(line, assignments)` pairs in first-seen line order.
#[derive(Debug)]
pub struct LinesIter<'a> {
    order: slice::Iter<'a, String>,
    assignments: &'a HashMap<String, Vec<Assignment>>,
}

impl<'a> Iterator for LinesIter<'a> {
    type Item = (&'a str, &'a [Assignment]);

    fn next(&mut self) -> Option<Self::Item> {
        let line = self.order.next()?;
        // Every key in the order list was inserted into the map first.
        let assignments = self.assignments.get(line).map_or(&[][..], Vec::as_slice);
        Some((line.as_str(), assignments))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.order.size_hint()
    }
}

impl Registry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// `true` iff all three identifiers are non-empty.
    ///
    /// This is the only validation an assignment gets: there is no
    /// existence check against the bus, driver or line stores.
    #[must_use]
    pub fn is_valid_assignment(bus: &str, driver: &str, line: &str) -> bool {
        !bus.is_empty() && !driver.is_empty() && !line.is_empty()
    }

    /// Records that `bus` and `driver` serve `line`.
    ///
    /// The line key is created on first use. Identical pairs may be
    /// assigned to the same line more than once; nothing deduplicates.
    /// Invalid input leaves the registry untouched.
    pub fn assign(&mut self, bus: &str, driver: &str, line: &str) -> AssignOutcome {
        if !Self::is_valid_assignment(bus, driver, line) {
            return AssignOutcome::InvalidInput;
        }

        self.assignments
            .entry(line.to_owned())
            .or_insert_with(|| {
                self.line_order.push(line.to_owned());
                Vec::new()
            })
            .push(Assignment::new(bus, driver));

        tracing::debug!(bus, driver, line, "assignment recorded");
        AssignOutcome::Assigned
    }

    /// Drops every assignment under `line` matching both `bus` and `driver`.
    ///
    /// All matching pairs are removed, not just the first. An unknown line
    /// key yields [`UnassignOutcome::NotFound`]; a known key always yields
    /// [`UnassignOutcome::Removed`], even when nothing matched. The key
    /// itself survives with whatever sequence remains, possibly empty.
    pub fn remove_assignment(&mut self, bus: &str, driver: &str, line: &str) -> UnassignOutcome {
        let Some(assignments) = self.assignments.get_mut(line) else {
            return UnassignOutcome::NotFound;
        };

        let before = assignments.len();
        assignments.retain(|assignment| !assignment.matches(bus, driver));
        let removed = before - assignments.len();

        tracing::debug!(bus, driver, line, removed, "assignments removed");
        UnassignOutcome::Removed(removed)
    }

    /// Lists all lines and their assignments in first-seen line order.
    ///
    /// A registry that has never been assigned to yields
    /// [`AssignmentListing::Empty`]. A line whose assignments were all
    /// removed still appears, with an empty sequence.
    #[must_use]
    pub fn list_assignments(&self) -> AssignmentListing<'_> {
        if self.line_order.is_empty() {
            AssignmentListing::Empty
        } else {
            AssignmentListing::Lines(LinesIter {
                order: self.line_order.iter(),
                assignments: &self.assignments,
            })
        }
    }

    /// The assignments recorded under one line, in insertion order.
    ///
    /// `None` when the line key has never been assigned to.
    #[must_use]
    pub fn line(&self, line: &str) -> Option<&[Assignment]> {
        self.assignments.get(line).map(Vec::as_slice)
    }
}

#[cfg(test)]
mod tests {
    use super::{AssignOutcome, AssignmentListing, Registry, UnassignOutcome};
    use crate::domain::Assignment;

    fn listed(registry: &Registry) -> Vec<(String, Vec<Assignment>)> {
        match registry.list_assignments() {
            AssignmentListing::Empty => Vec::new(),
            AssignmentListing::Lines(lines) => lines
                .map(|(line, assignments)| (line.to_owned(), assignments.to_vec()))
                .collect(),
        }
    }

    #[test]
    fn validation_requires_all_three_identifiers() {
        assert!(Registry::is_valid_assignment("B1", "D1", "L1"));
        assert!(!Registry::is_valid_assignment("", "D1", "L1"));
        assert!(!Registry::is_valid_assignment("B1", "", "L1"));
        assert!(!Registry::is_valid_assignment("B1", "D1", ""));
    }

    #[test]
    fn new_registry_lists_as_empty() {
        let registry = Registry::new();
        assert!(matches!(
            registry.list_assignments(),
            AssignmentListing::Empty
        ));
    }

    #[test]
    fn assign_then_list() {
        let mut registry = Registry::new();
        assert_eq!(registry.assign("B1", "D1", "L1"), AssignOutcome::Assigned);

        let lines = listed(&registry);
        assert_eq!(
            lines,
            [("L1".to_owned(), vec![Assignment::new("B1", "D1")])]
        );
    }

    #[test]
    fn invalid_input_leaves_registry_unchanged() {
        let mut registry = Registry::new();
        registry.assign("B1", "D1", "L1");

        assert_eq!(registry.assign("", "D1", "L2"), AssignOutcome::InvalidInput);
        assert_eq!(registry.assign("B1", "", "L1"), AssignOutcome::InvalidInput);

        let lines = listed(&registry);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].1.len(), 1);
    }

    #[test]
    fn duplicate_assignments_are_permitted() {
        let mut registry = Registry::new();
        registry.assign("B1", "D1", "L1");
        registry.assign("B1", "D1", "L1");
        assert_eq!(registry.line("L1").unwrap().len(), 2);
    }

    #[test]
    fn lines_iterate_in_first_seen_order() {
        let mut registry = Registry::new();
        registry.assign("B1", "D1", "L3");
        registry.assign("B2", "D2", "L1");
        registry.assign("B3", "D3", "L3");
        registry.assign("B4", "D4", "L2");

        let order: Vec<String> = listed(&registry).into_iter().map(|(line, _)| line).collect();
        assert_eq!(order, ["L3", "L1", "L2"]);
    }

    #[test]
    fn remove_keeps_the_line_key_with_an_empty_sequence() {
        let mut registry = Registry::new();
        registry.assign("B1", "D1", "L1");

        assert_eq!(
            registry.remove_assignment("B1", "D1", "L1"),
            UnassignOutcome::Removed(1)
        );

        let lines = listed(&registry);
        assert_eq!(lines, [("L1".to_owned(), Vec::new())]);
    }

    #[test]
    fn remove_drops_every_matching_pair() {
        let mut registry = Registry::new();
        registry.assign("B1", "D1", "L1");
        registry.assign("B2", "D2", "L1");
        registry.assign("B1", "D1", "L1");

        assert_eq!(
            registry.remove_assignment("B1", "D1", "L1"),
            UnassignOutcome::Removed(2)
        );
        assert_eq!(registry.line("L1"), Some(&[Assignment::new("B2", "D2")][..]));
    }

    #[test]
    fn remove_requires_both_fields_to_match() {
        let mut registry = Registry::new();
        registry.assign("B1", "D1", "L1");
        registry.assign("B1", "D2", "L1");
        registry.assign("B2", "D1", "L1");

        assert_eq!(
            registry.remove_assignment("B1", "D1", "L1"),
            UnassignOutcome::Removed(1)
        );
        assert_eq!(registry.line("L1").unwrap().len(), 2);
    }

    #[test]
    fn remove_on_unknown_line_is_not_found() {
        let mut registry = Registry::new();
        registry.assign("B1", "D1", "L1");
        assert_eq!(
            registry.remove_assignment("B1", "D1", "L9"),
            UnassignOutcome::NotFound
        );
    }

    #[test]
    fn remove_with_no_matching_pair_still_succeeds() {
        let mut registry = Registry::new();
        registry.assign("B1", "D1", "L1");
        assert_eq!(
            registry.remove_assignment("B9", "D9", "L1"),
            UnassignOutcome::Removed(0)
        );
        assert_eq!(registry.line("L1").unwrap().len(), 1);
    }

    #[test]
    fn remove_leaves_other_lines_untouched() {
        let mut registry = Registry::new();
        registry.assign("B1", "D1", "L1");
        registry.assign("B1", "D1", "L2");

        registry.remove_assignment("B1", "D1", "L1");
        assert_eq!(registry.line("L2").unwrap().len(), 1);
    }
}
