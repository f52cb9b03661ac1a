use crate::entities::{Mix, PackedLayout, Plan, UnitType};
use crate::geometry::primitives::{Point, Rect};
use crate::packing::target_count;
use log::error;

//Various checks to verify correctness of the state of the system
//Used in debug_assert!() blocks

pub fn grid_matches_dimensions(plan: &Plan) -> bool {
    let grid = plan.grid();
    (grid.n_rows(), grid.n_cols()) == (plan.rows(), plan.cols())
}

/// Every unit type is emitted as one contiguous run of the length its density asks for.
pub fn layout_matches_mix(
    plan: &Plan,
    unit_types: &[UnitType],
    mix: &Mix,
    layout: &PackedLayout,
) -> bool {
    let mut placed = layout.iter();
    for unit_type in unit_types {
        let Some(density) = mix.density(&unit_type.unit_type) else {
            continue;
        };
        if Rect::try_from_corner(Point::ORIGIN, unit_type.width, unit_type.length).is_err() {
            continue;
        }
        for _ in 0..target_count(density, plan.n_occupied()) {
            match placed.next() {
                Some(pu) if pu.unit_type == unit_type.unit_type => {}
                _ => {
                    error!("layout does not match mix for {}", unit_type.unit_type);
                    return false;
                }
            }
        }
    }
    placed.next().is_none()
}
