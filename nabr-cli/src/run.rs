use anyhow::{Result, bail};
use log::info;
use nabr::entities::{PackedLayout, Plan};
use nabr::io::ext_repr::ExtFillRequest;
use nabr::io::import;
use nabr::nodes::{self, DiagnosticsSink, LogSink, RecordingSink};

use crate::config::NabrConfig;

/// Records diagnostics for the output file while forwarding them to the logger.
#[derive(Debug, Default)]
pub struct SessionSink {
    pub recorded: RecordingSink,
}

impl DiagnosticsSink for SessionSink {
    fn warn(&mut self, message: &str) {
        self.recorded.warn(message);
        LogSink.warn(message);
    }

    fn log(&mut self, message: &str) {
        self.recorded.log(message);
        LogSink.log(message);
    }
}

/// Runs the plan, mix and fill nodes on a request, in that order.
/// Fails if any of the nodes produced no output.
pub fn run(
    request: &ExtFillRequest,
    config: &NabrConfig,
    sink: &mut SessionSink,
) -> Result<(Plan, PackedLayout)> {
    let plan_inputs =
        import::import_plan_inputs_with_defaults(&request.plan, config.plan_defaults.clone());
    let Some(plan) = nodes::generate_plan(&plan_inputs, sink) else {
        bail!("no plan generated for request {:?}", request.name);
    };

    let Some(mix) = nodes::define_mix(
        Some(request.mix.types.as_slice()),
        Some(request.mix.densities.as_slice()),
        sink,
    ) else {
        bail!("no mix defined for request {:?}", request.name);
    };

    let unit_types = match import::import_unit_types(&request.cells) {
        Ok(unit_types) => unit_types,
        Err(e) => {
            sink.warn(&e.to_string());
            bail!("no cells imported for request {:?}", request.name);
        }
    };
    let Some(layout) =
        nodes::fill_cells(Some(&plan), Some(unit_types.as_slice()), Some(&mix), sink)
    else {
        bail!("no cells filled for request {:?}", request.name);
    };

    info!(
        "[RUN] {} occupied cells, {} units placed",
        plan.n_occupied(),
        layout.len()
    );
    Ok((plan, layout))
}
