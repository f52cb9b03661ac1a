use crate::entities::{Mix, PackedLayout, Plan, PlacedUnit, UnitType};
use crate::error::ValidationError;
use crate::geometry::primitives::{Point, Rect};
use crate::util::assertions;
use log::{debug, warn};

/// Upper bound on the number of units a single fill may emit
pub const MAX_UNITS: usize = 1 << 20;

/// Number of units a `density` asks for in a footprint of `n_cells` cells.
/// The product is floored. Negative or non-finite products yield zero.
pub fn target_count(density: f64, n_cells: usize) -> usize {
    let count = (density * n_cells as f64).floor();
    match count.is_finite() && count > 0.0 {
        true => count as usize,
        false => 0,
    }
}

/// Emits the units requested by `mix` for the footprint of `plan`.
///
/// Unit types are visited in the given order. A type absent from the mix is skipped.
/// Every unit is emitted with its lower-left corner at the world origin: the units are counted, not spatially packed.
/// The per-type counts are floored independently, so their sum generally differs from the number of footprint cells.
///
/// Fails without emitting anything if the layout would hold more than [`MAX_UNITS`] units.
pub fn fill(
    plan: &Plan,
    unit_types: &[UnitType],
    mix: &Mix,
) -> Result<PackedLayout, ValidationError> {
    let n_cells = plan.n_occupied();
    let mut placed_units = vec![];

    for unit_type in unit_types {
        let Some(density) = mix.density(&unit_type.unit_type) else {
            debug!("[FILL] {} not in mix, skipping", unit_type.unit_type);
            continue;
        };
        let count = target_count(density, n_cells);
        let rect = match Rect::try_from_corner(Point::ORIGIN, unit_type.width, unit_type.length) {
            Ok(rect) => rect,
            Err(e) => {
                warn!("[FILL] skipping {unit_type}: {e}");
                continue;
            }
        };
        if placed_units.len().saturating_add(count) > MAX_UNITS {
            return Err(ValidationError::TooManyUnits {
                unit_type: unit_type.unit_type.clone(),
                density,
                max: MAX_UNITS,
            });
        }
        debug!("[FILL] {count} x {unit_type} (density {density}, {n_cells} cells)");
        placed_units.extend((0..count).map(|_| PlacedUnit {
            unit_type: unit_type.unit_type.clone(),
            rect,
        }));
    }

    let layout = PackedLayout { placed_units };
    debug_assert!(assertions::layout_matches_mix(plan, unit_types, mix, &layout));
    Ok(layout)
}
