use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// A kind of unit (apartment, studio, ...) with its footprint in metres.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UnitType {
    pub unit_type: String,
    /// Extent along the x-axis
    pub width: f64,
    /// Extent along the y-axis
    pub length: f64,
}

impl UnitType {
    pub fn new(unit_type: impl Into<String>, width: f64, length: f64) -> Self {
        Self {
            unit_type: unit_type.into(),
            width,
            length,
        }
    }
}

impl Display for UnitType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({} x {})", self.unit_type, self.width, self.length)
    }
}
