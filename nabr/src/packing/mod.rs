mod fill;

#[doc(inline)]
pub use fill::{MAX_UNITS, fill};
#[doc(inline)]
pub use fill::target_count;
