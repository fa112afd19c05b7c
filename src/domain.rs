//! Domain models for the transit operator.
//!
//! This module contains the entity records (buses, drivers, lines), the
//! shape descriptor shared by all of them, and the assignment pair.

mod assignment;
pub use assignment::Assignment;

mod bus;
pub use bus::Bus;

mod driver;
pub use driver::Driver;

mod line;
pub use line::Line;

/// The record-shape descriptor implemented by every entity kind.
pub mod record;
pub use record::Record;
