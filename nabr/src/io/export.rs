use crate::entities::{PackedLayout, Plan};
use crate::io::ext_repr::{ExtPackedLayout, ExtPlacedUnit, ExtPlanGrid, ExtUnitCount};

/// Exports a plan, with its occupancy rendered row by row.
pub fn export_plan(plan: &Plan) -> ExtPlanGrid {
    let occupancy = (0..plan.rows())
        .map(|r| {
            plan.grid()
                .row(r)
                .into_iter()
                .map(|occupied| if occupied { '#' } else { '.' })
                .collect::<String>()
        })
        .collect();

    ExtPlanGrid {
        tag: plan.tag().to_string(),
        shape: plan.shape().to_string(),
        dimensions: plan.dimensions(),
        corridor_width: plan.corridor_width(),
        grid_size: plan.grid_size(),
        n_occupied: plan.n_occupied(),
        occupancy,
    }
}

/// Exports a packed layout together with the plan it was derived from.
pub fn export_packed_layout(plan: &Plan, layout: &PackedLayout) -> ExtPackedLayout {
    let counts = layout
        .counts()
        .into_iter()
        .map(|(unit_type, count)| ExtUnitCount {
            unit_type: unit_type.to_string(),
            count,
        })
        .collect();

    let placed_units = layout
        .iter()
        .map(|pu| ExtPlacedUnit {
            unit_type: pu.unit_type.clone(),
            x_min: pu.rect.x_min,
            y_min: pu.rect.y_min,
            width: pu.rect.width(),
            length: pu.rect.height(),
        })
        .collect();

    ExtPackedLayout {
        plan: export_plan(plan),
        footprint_area: plan.footprint_area(),
        unit_area: layout.total_area(),
        counts,
        placed_units,
    }
}
