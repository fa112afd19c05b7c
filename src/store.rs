//! In-memory stores for the interactive session.
//!
//! Nothing in this module performs I/O or touches the terminal. Every
//! operation reports its outcome as a plain enum for the caller to render;
//! abnormal conditions (not found, invalid input, empty listing) are normal
//! outcomes, not errors, and nothing unwinds across this boundary.

mod records;
pub use records::Records;

mod manager;
pub use manager::{Listing, Manager, RemoveOutcome};

mod registry;
pub use registry::{AssignOutcome, AssignmentListing, LinesIter, Registry, UnassignOutcome};
