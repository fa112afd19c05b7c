use serde::{Deserialize, Serialize};

use super::Record;

/// A driver employed by the operator.
///
/// The driver's name is the natural key used for removal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Driver {
    name: String,
    age: u32,
    experience_years: u32,
}

impl Driver {
    /// Constructs a new [`Driver`].
    #[must_use]
    pub fn new(name: impl Into<String>, age: u32, experience_years: u32) -> Self {
        Self {
            name: name.into(),
            age,
            experience_years,
        }
    }

    /// The driver's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The driver's age.
    #[must_use]
    pub const fn age(&self) -> u32 {
        self.age
    }

    /// Years of driving experience.
    #[must_use]
    pub const fn experience_years(&self) -> u32 {
        self.experience_years
    }
}

impl Record for Driver {
    const KIND: &'static str = "driver";
    const COLUMNS: [&'static str; 3] = ["Name", "Age", "Experience"];
    const KEY_LABEL: &'static str = "name";

    fn key(&self) -> &str {
        &self.name
    }

    fn cells(&self) -> [String; 3] {
        [
            self.name.clone(),
            self.age.to_string(),
            format!("{} Years", self.experience_years),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::{Driver, Record};

    #[test]
    fn key_is_the_name() {
        let driver = Driver::new("Ada", 34, 12);
        assert_eq!(driver.key(), "Ada");
    }
}
