//! The three entry points exposed to a visual-programming host.
//!
//! A node never panics and never returns an error past its boundary: it either produces
//! its output, or produces nothing and (for validation failures) reports a single warning
//! on the [`DiagnosticsSink`] it was handed.

mod define_mix;
mod diagnostics;
mod fill_cells;
mod generate_plan;

#[doc(inline)]
pub use define_mix::{define_mix, try_define_mix};
#[doc(inline)]
pub use diagnostics::{DiagnosticsSink, LogSink, RecordingSink};
#[doc(inline)]
pub use fill_cells::{fill_cells, try_fill_cells};
#[doc(inline)]
pub use generate_plan::{PlanInputs, generate_plan, try_generate_plan};

use crate::error::NodeError;
use log::debug;

/// Absorbs the outcome of a node: missing inputs abort silently, validation failures emit one warning.
fn absorb<T>(
    node: &str,
    result: Result<T, NodeError>,
    sink: &mut impl DiagnosticsSink,
) -> Option<T> {
    match result {
        Ok(output) => Some(output),
        Err(NodeError::InputMissing(input)) => {
            debug!("[{node}] aborted, input `{input}` missing");
            None
        }
        Err(NodeError::Validation(e)) => {
            sink.warn(&e.to_string());
            None
        }
    }
}
