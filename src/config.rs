use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::model::DEFAULT_FEED_LIMIT;

pub const CONFIG_DIR_ENV: &str = "SMARTCROWD_CONFIG_DIR";

/// Dashboard settings, stored as `settings.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Number of incident feed rows shown on the command center page.
    pub feed_limit: usize,
    pub heatmap_seed: u64,
    pub heatmap_samples: usize,
    /// Standard deviation of the synthetic crowd around the venue centre, in degrees.
    pub heatmap_spread_deg: f64,
    pub heatmap_grid: usize,
    /// `None` draws a fresh accuracy curve each session.
    pub analytics_seed: Option<u64>,
    pub window_width: f32,
    pub window_height: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            feed_limit: DEFAULT_FEED_LIMIT,
            heatmap_seed: 42,
            heatmap_samples: 1500,
            heatmap_spread_deg: 0.01,
            heatmap_grid: 48,
            analytics_seed: None,
            window_width: 1280.0,
            window_height: 800.0,
        }
    }
}

pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    pub fn new(config_dir: PathBuf) -> Self {
        Self {
            config_path: config_dir.join("settings.json"),
        }
    }

    /// `$SMARTCROWD_CONFIG_DIR`, else the platform config dir, else the
    /// working directory.
    pub fn from_env() -> Self {
        let dir = std::env::var_os(CONFIG_DIR_ENV)
            .map(PathBuf::from)
            .or_else(|| dirs::config_dir().map(|d| d.join("smartcrowd")))
            .unwrap_or_else(|| PathBuf::from("."));
        Self::new(dir)
    }

    pub fn path(&self) -> &Path {
        &self.config_path
    }

    pub fn exists(&self) -> bool {
        self.config_path.exists()
    }

    /// Never fails: a missing file gives defaults, a broken one is logged and
    /// gives defaults too.
    pub fn load(&self) -> Settings {
        if !self.config_path.exists() {
            return Settings::default();
        }
        match self.try_load() {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("ignoring settings: {e:#}");
                Settings::default()
            }
        }
    }

    fn try_load(&self) -> Result<Settings> {
        let content = fs::read_to_string(&self.config_path)
            .with_context(|| format!("read {}", self.config_path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("parse {}", self.config_path.display()))
    }

    pub fn save(&self, settings: &Settings) -> Result<()> {
        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("create {}", parent.display()))?;
        }
        let content = serde_json::to_string_pretty(settings)?;
        fs::write(&self.config_path, content)
            .with_context(|| format!("write {}", self.config_path.display()))
    }
}
