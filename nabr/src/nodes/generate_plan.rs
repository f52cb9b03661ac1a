use crate::entities::Plan;
use crate::error::{NodeError, ValidationError};
use crate::nodes::{DiagnosticsSink, absorb};
use serde::{Deserialize, Serialize};

/// Inputs of the plan node. Every field is optional on the host side, [`PlanInputs::default`] holds the fallbacks.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlanInputs {
    /// Shape tag (L, Mirrored L or U), see [`PlanShape::from_tag`](crate::entities::PlanShape::from_tag)
    pub tag: String,
    /// `[rows, cols]` in grid units
    pub dimensions: Vec<i64>,
    /// Corridor width in metres
    pub corridor_width: f64,
    /// Grid dimension in metres
    pub grid_size: f64,
}

impl Default for PlanInputs {
    fn default() -> Self {
        Self {
            tag: "L".to_string(),
            dimensions: vec![10, 5],
            corridor_width: 2.0,
            grid_size: 8.5,
        }
    }
}

pub fn try_generate_plan(
    inputs: &PlanInputs,
    sink: &mut impl DiagnosticsSink,
) -> Result<Plan, NodeError> {
    sink.log(&format!(
        "Attempting to generate a plan of type: {} with dimensions: {:?}, corridor width: {} and grid size: {}",
        inputs.tag, inputs.dimensions, inputs.corridor_width, inputs.grid_size
    ));
    let plan = Plan::try_new(
        inputs.tag.as_str(),
        &inputs.dimensions,
        inputs.corridor_width,
        inputs.grid_size,
    )
    .map_err(|e| ValidationError::InvalidPlan(e.to_string()))?;
    sink.log(&format!("Plan generated: {plan}"));
    Ok(plan)
}

/// Generates a plan, or reports why it could not.
pub fn generate_plan(inputs: &PlanInputs, sink: &mut impl DiagnosticsSink) -> Option<Plan> {
    absorb("PLAN", try_generate_plan(inputs, sink), sink)
}
