use crate::config::NabrConfig;
use nabr::io::ext_repr::{ExtFillRequest, ExtPackedLayout};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct FillOutput {
    pub request: ExtFillRequest,
    pub layout: ExtPackedLayout,
    /// Warnings raised while running the nodes
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub warnings: Vec<String>,
    pub config: NabrConfig,
}
