use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Footprint of a [`Plan`](crate::entities::Plan) within its bounding box of `rows` x `cols` cells.
///
/// Every shape splits the rows in two bands: the top band holds the first `rows / 2` rows,
/// the bottom band the remaining ones.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlanShape {
    /// Left half of the top band plus the left `cols - cols / 2` columns of the bottom band.
    L,
    /// [`PlanShape::L`] mirrored around the vertical axis.
    MirroredL,
    /// Two outer thirds of the top band plus the left `cols - 2 * (cols / 3)` columns of the bottom band.
    U,
    /// Every cell of the bounding box.
    Rectangular,
}

impl PlanShape {
    /// Classifies a host-supplied tag. Unknown tags fall back to [`PlanShape::Rectangular`].
    pub fn from_tag(tag: &str) -> PlanShape {
        let normalized = tag.trim().to_lowercase();
        match normalized.as_str() {
            "l" | "l-shape" | "l shape" | "lshape" => PlanShape::L,
            "mirroredl" | "mirrored-l" | "mirrored l" | "mirrored-l-shape"
            | "mirrored l shape" => PlanShape::MirroredL,
            "u" | "u-shape" | "u shape" | "ushape" => PlanShape::U,
            _ => PlanShape::Rectangular,
        }
    }

    /// Whether the cell at (`row`, `col`) belongs to the footprint of a `rows` x `cols` plan.
    pub fn contains(&self, row: usize, col: usize, rows: usize, cols: usize) -> bool {
        let arm1_rows = rows / 2;
        let top_band = row < arm1_rows;
        match self {
            PlanShape::L => {
                let arm1_cols = cols / 2;
                let arm2_cols = cols - arm1_cols;
                (top_band && col < arm1_cols) || (!top_band && col < arm2_cols)
            }
            PlanShape::MirroredL => {
                let arm1_cols = cols / 2;
                let arm2_cols = cols - arm1_cols;
                (top_band && col >= cols - arm1_cols) || (!top_band && col >= cols - arm2_cols)
            }
            PlanShape::U => {
                let arm1_cols = cols / 3;
                let arm2_cols = cols - 2 * arm1_cols;
                (top_band && (col < arm1_cols || col >= cols - arm1_cols))
                    || (!top_band && col < arm2_cols)
            }
            PlanShape::Rectangular => true,
        }
    }
}

impl Display for PlanShape {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            PlanShape::L => "L",
            PlanShape::MirroredL => "Mirrored L",
            PlanShape::U => "U",
            PlanShape::Rectangular => "Rectangular",
        };
        write!(f, "{name}")
    }
}
