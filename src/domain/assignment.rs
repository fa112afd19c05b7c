use serde::{Deserialize, Serialize};

/// A bus+driver pair assigned to a line.
///
/// Both identifiers are opaque text tokens. There is deliberately no
/// cross-check against the bus or driver stores: an assignment may name a
/// bus or driver that was never added, or was since removed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    /// Identifier of the assigned bus.
    pub bus: String,
    /// Identifier of the assigned driver.
    pub driver: String,
}

impl Assignment {
    /// Constructs a new [`Assignment`].
    #[must_use]
    pub fn new(bus: impl Into<String>, driver: impl Into<String>) -> Self {
        Self {
            bus: bus.into(),
            driver: driver.into(),
        }
    }

    /// `true` if this pair names exactly the given bus and driver.
    #[must_use]
    pub fn matches(&self, bus: &str, driver: &str) -> bool {
        self.bus == bus && self.driver == driver
    }
}
