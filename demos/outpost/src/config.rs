//! Run configuration loaded from an optional JSON file.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use hv_core::{HarvesterConfig, HazardConfig, SimConfig};
use hv_field::ScatterParams;
use serde::{Deserialize, Serialize};

/// Every section is optional; missing sections and fields take defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    pub sim:       SimConfig,
    pub harvester: HarvesterConfig,
    pub hazard:    HazardConfig,
    pub scatter:   ScatterParams,

    /// Directory for CSV telemetry.  `None` disables file output.
    pub output_dir: Option<PathBuf>,
}

impl RunConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))
    }
}
