use serde::{Deserialize, Serialize};

use super::Record;

/// A transit line.
///
/// The line name is the natural key used for removal. The scheduled time
/// is the end-to-end duration in minutes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Line {
    name: String,
    route: String,
    minutes: u32,
}

impl Line {
    /// Constructs a new [`Line`].
    #[must_use]
    pub fn new(name: impl Into<String>, route: impl Into<String>, minutes: u32) -> Self {
        Self {
            name: name.into(),
            route: route.into(),
            minutes,
        }
    }

    /// The line name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Free-text route description.
    #[must_use]
    pub fn route(&self) -> &str {
        &self.route
    }

    /// Scheduled end-to-end time in minutes.
    #[must_use]
    pub const fn minutes(&self) -> u32 {
        self.minutes
    }
}

impl Record for Line {
    const KIND: &'static str = "line";
    const COLUMNS: [&'static str; 3] = ["Line Name", "Line Route", "Line Time"];
    const KEY_LABEL: &'static str = "line name";

    fn key(&self) -> &str {
        &self.name
    }

    fn cells(&self) -> [String; 3] {
        [
            self.name.clone(),
            self.route.clone(),
            format!("{} min", self.minutes),
        ]
    }
}
