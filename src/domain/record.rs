//! The shape descriptor shared by every entity kind.
//!
//! Each entity kind (bus, driver, line) is a configuration of the same
//! generic machinery: one store, one manager, one submenu. The [`Record`]
//! trait captures everything that varies between kinds, so a manager is
//! parameterized by a record type rather than subclassed per kind.

/// Describes the shape of one entity kind.
///
/// A record is immutable once stored; "editing" is not supported, only
/// add and remove.
pub trait Record {
    /// Human label for the kind, lowercase singular (e.g. `"bus"`).
    const KIND: &'static str;

    /// Column headers for tabular listings, in display order.
    const COLUMNS: [&'static str; 3];

    /// Prompt label for the natural key (e.g. `"license plate"`).
    const KEY_LABEL: &'static str;

    /// The natural key: the field a removal request is matched against.
    ///
    /// Matching is exact equality on this field alone. If several records
    /// share a key, only the earliest-inserted one is removed.
    fn key(&self) -> &str;

    /// Rendered cell values, in the same order as [`Self::COLUMNS`].
    fn cells(&self) -> [String; 3];
}
