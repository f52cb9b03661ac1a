use serde::{Deserialize, Serialize};

/// External representation of the inputs of a [`Plan`](crate::entities::Plan).
/// Missing fields take the values of [`PlanInputs::default`](crate::nodes::PlanInputs).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtPlan {
    /// Shape tag: L, Mirrored L or U. Anything else yields a rectangular plan.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none", default)]
    pub tag: Option<String>,
    /// `[rows, cols]` in grid units
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub dimensions: Option<Vec<i64>>,
    /// Corridor width in metres
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub corridor_width: Option<f64>,
    /// Grid dimension in metres
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub grid_size: Option<f64>,
}

/// External representation of a [`Mix`](crate::entities::Mix): two parallel lists.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtMix {
    pub types: Vec<String>,
    pub densities: Vec<f64>,
}

/// External representation of a [`UnitType`](crate::entities::UnitType).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtUnitType {
    pub unit_type: String,
    pub width: f64,
    pub length: f64,
}

/// A complete request: a plan, a mix and the unit types to fill the plan with.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtFillRequest {
    #[serde(default)]
    pub name: String,
    pub plan: ExtPlan,
    pub mix: ExtMix,
    pub cells: Vec<ExtUnitType>,
}

/// External representation of a generated [`Plan`](crate::entities::Plan).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtPlanGrid {
    #[serde(rename = "type")]
    pub tag: String,
    pub shape: String,
    pub dimensions: [usize; 2],
    pub corridor_width: f64,
    pub grid_size: f64,
    /// Number of cells in the footprint
    pub n_occupied: usize,
    /// One string per row, `#` for an occupied cell and `.` for an empty one
    pub occupancy: Vec<String>,
}

/// External representation of a [`PlacedUnit`](crate::entities::PlacedUnit).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtPlacedUnit {
    pub unit_type: String,
    pub x_min: f64,
    pub y_min: f64,
    pub width: f64,
    pub length: f64,
}

/// Number of placed units of a single unit type.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtUnitCount {
    pub unit_type: String,
    pub count: usize,
}

/// External representation of a [`PackedLayout`](crate::entities::PackedLayout) on its plan.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtPackedLayout {
    pub plan: ExtPlanGrid,
    /// Area of the plan's footprint in square metres
    pub footprint_area: f64,
    /// Summed area of all placed units in square metres
    pub unit_area: f64,
    pub counts: Vec<ExtUnitCount>,
    pub placed_units: Vec<ExtPlacedUnit>,
}
