use serde::{Deserialize, Serialize};

use super::Record;

/// A bus in the operator's fleet.
///
/// The license plate is the natural key used for removal. Plates are not
/// required to be unique; duplicates are stored as-is and removal takes
/// the earliest match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bus {
    model: String,
    plate: String,
    kilometers: u32,
}

impl Bus {
    /// Constructs a new [`Bus`].
    #[must_use]
    pub fn new(model: impl Into<String>, plate: impl Into<String>, kilometers: u32) -> Self {
        Self {
            model: model.into(),
            plate: plate.into(),
            kilometers,
        }
    }

    /// The bus model.
    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }

    /// The license plate.
    #[must_use]
    pub fn plate(&self) -> &str {
        &self.plate
    }

    /// Total kilometers driven.
    #[must_use]
    pub const fn kilometers(&self) -> u32 {
        self.kilometers
    }
}

impl Record for Bus {
    const KIND: &'static str = "bus";
    const COLUMNS: [&'static str; 3] = ["Bus Model", "License Plate", "Kilometers"];
    const KEY_LABEL: &'static str = "license plate";

    fn key(&self) -> &str {
        &self.plate
    }

    fn cells(&self) -> [String; 3] {
        [
            self.model.clone(),
            self.plate.clone(),
            format!("{} KM", self.kilometers),
        ]
    }
}
