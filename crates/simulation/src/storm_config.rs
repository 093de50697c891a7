//! JSON configuration file for overriding the storm at startup.
//!
//! Every field is optional: a file containing `{"params": {"rain": {"fall_speed": 25}}}`
//! changes only the fall speed. Values are sanitized after parsing, so an
//! out-of-range file is clamped rather than rejected.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::sim_rng::DEFAULT_SEED;
use crate::storm_error::StormError;
use crate::storm_params::StormParams;

/// Environment variable naming the config file read by the app.
pub const CONFIG_ENV_VAR: &str = "STORMROAD_CONFIG";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StormConfig {
    /// Seed for `SimRng`.
    pub seed: u64,
    pub params: StormParams,
}

impl Default for StormConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            params: StormParams::default(),
        }
    }
}

/// Parse a config document. The returned params are already sanitized.
pub fn parse_config(text: &str) -> Result<StormConfig, StormError> {
    let mut config: StormConfig = serde_json::from_str(text)?;
    config.params.sanitize();
    Ok(config)
}

/// Read and parse the config file at `path`.
pub fn load_config(path: impl AsRef<Path>) -> Result<StormConfig, StormError> {
    let text = std::fs::read_to_string(path)?;
    parse_config(&text)
}
