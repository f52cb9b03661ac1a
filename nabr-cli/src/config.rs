use nabr::io::svg::SvgDrawOptions;
use nabr::nodes::PlanInputs;
use serde::{Deserialize, Serialize};

/// Configuration of the command line driver
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct NabrConfig {
    /// Plan inputs used for every field the request leaves out
    #[serde(default)]
    pub plan_defaults: PlanInputs,
    /// Write an SVG drawing of the plan next to the JSON output
    #[serde(default = "default_true")]
    pub export_svg: bool,
    /// Optional SVG drawing options
    #[serde(default)]
    pub svg_draw_options: SvgDrawOptions,
}

fn default_true() -> bool {
    true
}

impl Default for NabrConfig {
    fn default() -> Self {
        Self {
            plan_defaults: PlanInputs::default(),
            export_svg: true,
            svg_draw_options: SvgDrawOptions::default(),
        }
    }
}
