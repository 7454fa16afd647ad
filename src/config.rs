use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::chart::{LineChartLayout, ScatterLayout};

/// Optional overrides file, looked up in the working directory.
pub const CONFIG_FILE: &str = "popscope.json";

// ---------------------------------------------------------------------------
// Application configuration
// ---------------------------------------------------------------------------

/// Everything fixed at startup. Every field has a default, so a partial
/// `popscope.json` only overrides what it names.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub dataset_path: PathBuf,
    pub line: LineChartLayout,
    pub scatter: ScatterLayout,
    pub tooltip: TooltipConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            dataset_path: PathBuf::from("./data/dataEveryYear.csv"),
            line: LineChartLayout::default(),
            scatter: ScatterLayout::default(),
            tooltip: TooltipConfig::default(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct TooltipConfig {
    /// Seconds for a full fade in or out.
    pub fade_secs: f64,
    /// Offset from the pointer to the tooltip's top-left corner.
    pub offset: [f32; 2],
    /// Extra pixels around the line stroke that still count as hovering.
    pub hover_tolerance: f32,
}

impl Default for TooltipConfig {
    fn default() -> Self {
        Self {
            fade_secs: 0.5,
            offset: [0.0, -28.0],
            hover_tolerance: 2.0,
        }
    }
}

impl AppConfig {
    /// Parse a JSON config file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        serde_json::from_str(&text)
            .with_context(|| format!("parsing {}", path.display()))
    }

    /// Defaults, overridden by `path` when it exists and parses.
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        match Self::from_file(path) {
            Ok(config) => {
                log::info!("Using configuration from {}", path.display());
                config
            }
            Err(e) => {
                log::warn!("Ignoring configuration: {e:#}");
                Self::default()
            }
        }
    }
}
