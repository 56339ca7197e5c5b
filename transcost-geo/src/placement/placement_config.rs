use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct PlacementConfig {
    /// draws per household before giving up on placing it
    #[serde(default = "default_max_tries")]
    pub max_tries: usize,
    /// seed for the random draws. if not provided, one is generated and logged
    /// so the run can be repeated.
    #[serde(default)]
    pub seed: Option<u64>,
    /// place households on all available threads. output order and values do
    /// not depend on this setting.
    #[serde(default)]
    pub parallel: bool,
}

impl Default for PlacementConfig {
    fn default() -> Self {
        Self {
            max_tries: default_max_tries(),
            seed: None,
            parallel: false,
        }
    }
}

fn default_max_tries() -> usize {
    10_000
}
