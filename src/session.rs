//! Top-level session state.

use crate::{
    domain::{Bus, Driver, Line},
    store::{Manager, Registry},
};

/// The state of one interactive session.
///
/// Owns the three entity stores and the assignment registry. Created at
/// startup and dropped at exit; nothing is persisted and there are no
/// module-level singletons. The stores are independent: no operation on
/// one touches another, and assignments reference buses, drivers and
/// lines only as opaque text.
#[derive(Debug, Default)]
pub struct System {
    /// The bus fleet.
    pub buses: Manager<Bus>,
    /// The driver roster.
    pub drivers: Manager<Driver>,
    /// The transit lines.
    pub lines: Manager<Line>,
    /// Bus+driver assignments per line.
    pub assignments: Registry,
}

impl System {
    /// Creates a session with empty stores.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}
