mod grid;
mod mix;
mod packed_layout;
mod plan;
mod plan_shape;
mod unit_type;

#[doc(inline)]
pub use grid::OccupancyGrid;
#[doc(inline)]
pub use mix::Mix;
#[doc(inline)]
pub use packed_layout::PackedLayout;
#[doc(inline)]
pub use packed_layout::PlacedUnit;
#[doc(inline)]
pub use plan::{MAX_CELLS, Plan};
#[doc(inline)]
pub use plan_shape::PlanShape;
#[doc(inline)]
pub use unit_type::UnitType;
