//! Record management for a small public-transport operator.
//!
//! Buses, drivers and transit lines live in ordered in-memory stores, and
//! bus+driver pairs are assigned to lines through a registry. All operations
//! report their outcome as a plain enum; nothing here performs I/O.

pub mod domain;
pub use domain::{Assignment, Bus, Driver, Line, Record};

/// In-memory record stores and the assignment registry.
pub mod store;
pub use store::{
    AssignOutcome, AssignmentListing, Listing, Manager, Registry, RemoveOutcome, UnassignOutcome,
};

mod session;
pub use session::System;
