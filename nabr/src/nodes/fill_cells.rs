use crate::entities::{Mix, PackedLayout, Plan, UnitType};
use crate::error::NodeError;
use crate::nodes::{DiagnosticsSink, absorb};
use crate::packing;
use itertools::Itertools;

pub fn try_fill_cells(
    plan: Option<&Plan>,
    unit_types: Option<&[UnitType]>,
    mix: Option<&Mix>,
    sink: &mut impl DiagnosticsSink,
) -> Result<PackedLayout, NodeError> {
    let plan = plan.ok_or(NodeError::InputMissing("plan"))?;
    let unit_types = unit_types.ok_or(NodeError::InputMissing("cells"))?;
    let mix = mix.ok_or(NodeError::InputMissing("mix"))?;

    sink.log(&format!(
        "Attempting to fill cells for plan: {plan} with mix: {mix} and cells: [{}]",
        unit_types.iter().join(", ")
    ));
    let layout = packing::fill(plan, unit_types, mix)?;
    sink.log(&format!(
        "Filled {} cells with {} units",
        plan.n_occupied(),
        layout.len()
    ));
    Ok(layout)
}

/// Fills a plan with the units requested by a mix.
pub fn fill_cells(
    plan: Option<&Plan>,
    unit_types: Option<&[UnitType]>,
    mix: Option<&Mix>,
    sink: &mut impl DiagnosticsSink,
) -> Option<PackedLayout> {
    absorb("FILL", try_fill_cells(plan, unit_types, mix, sink), sink)
}
