use crate::entities::Mix;
use crate::error::NodeError;
use crate::nodes::{DiagnosticsSink, absorb};

pub fn try_define_mix(
    types: Option<&[String]>,
    densities: Option<&[f64]>,
    sink: &mut impl DiagnosticsSink,
) -> Result<Mix, NodeError> {
    let types = types.ok_or(NodeError::InputMissing("types"))?;
    let densities = densities.ok_or(NodeError::InputMissing("densities"))?;
    let mix = Mix::try_new(types, densities)?;
    sink.log(&format!("Mix defined: {mix}"));
    Ok(mix)
}

/// Defines a mix, or emits a warning when the types and densities do not line up.
pub fn define_mix(
    types: Option<&[String]>,
    densities: Option<&[f64]>,
    sink: &mut impl DiagnosticsSink,
) -> Option<Mix> {
    absorb("MIX", try_define_mix(types, densities, sink), sink)
}
