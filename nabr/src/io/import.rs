use crate::entities::UnitType;
use crate::io::ext_repr::{ExtPlan, ExtUnitType};
use crate::nodes::PlanInputs;
use crate::util::FPA;
use anyhow::{Result, ensure};

/// Fills in the omitted plan inputs with [`PlanInputs::default`].
pub fn import_plan_inputs(ext_plan: &ExtPlan) -> PlanInputs {
    import_plan_inputs_with_defaults(ext_plan, PlanInputs::default())
}

/// Fills in the omitted plan inputs with `defaults`.
pub fn import_plan_inputs_with_defaults(ext_plan: &ExtPlan, defaults: PlanInputs) -> PlanInputs {
    PlanInputs {
        tag: ext_plan.tag.clone().unwrap_or(defaults.tag),
        dimensions: ext_plan.dimensions.clone().unwrap_or(defaults.dimensions),
        corridor_width: ext_plan.corridor_width.unwrap_or(defaults.corridor_width),
        grid_size: ext_plan.grid_size.unwrap_or(defaults.grid_size),
    }
}

pub fn import_unit_type(ext_unit_type: &ExtUnitType) -> Result<UnitType> {
    let ExtUnitType {
        unit_type,
        width,
        length,
    } = ext_unit_type;
    ensure!(
        width.is_finite()
            && FPA(*width) > FPA(0.0)
            && length.is_finite()
            && FPA(*length) > FPA(0.0),
        "unit type {unit_type} must have a positive width and length, got {width} x {length}"
    );
    Ok(UnitType::new(unit_type.as_str(), *width, *length))
}

pub fn import_unit_types(ext_unit_types: &[ExtUnitType]) -> Result<Vec<UnitType>> {
    ext_unit_types.iter().map(import_unit_type).collect()
}
