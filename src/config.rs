// Config defaults, JSON overlay parsing, pure merge

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Fixed well-known path consulted by the in-UI reload key, independent of `--config`.
pub const RELOAD_PATH: &str = "~/.reslight.json";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: String,
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Thresholds {
    pub cpu_warning: u8,
    pub cpu_critical: u8,
    pub mem_warning: u8,
    pub mem_critical: u8,
    pub disk_warning: u8,
    pub disk_critical: u8,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            cpu_warning: 70,
            cpu_critical: 90,
            mem_warning: 75,
            mem_critical: 90,
            disk_warning: 80,
            disk_critical: 95,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Seconds between ticks.
    pub refresh_interval: f64,
    /// Samples retained per metric ring.
    pub history_length: usize,
    pub thresholds: Thresholds,
    pub disks_to_monitor: Vec<String>,
    pub network_interfaces: Vec<String>,
    pub log_file: String,
    pub enable_logging: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            refresh_interval: 1.0,
            history_length: 60,
            thresholds: Thresholds::default(),
            disks_to_monitor: vec!["/".into()],
            network_interfaces: vec!["eth0".into(), "wlan0".into()],
            log_file: "~/.reslight.log".into(),
            enable_logging: false,
        }
    }
}

/// Partial user document. Unknown keys are ignored by serde; absent keys
/// leave the base value untouched during `merge`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConfigOverlay {
    pub refresh_interval: Option<f64>,
    pub history_length: Option<usize>,
    pub thresholds: Option<ThresholdsOverlay>,
    pub disks_to_monitor: Option<Vec<String>>,
    pub network_interfaces: Option<Vec<String>>,
    pub log_file: Option<String>,
    pub enable_logging: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ThresholdsOverlay {
    pub cpu_warning: Option<u8>,
    pub cpu_critical: Option<u8>,
    pub mem_warning: Option<u8>,
    pub mem_critical: Option<u8>,
    pub disk_warning: Option<u8>,
    pub disk_critical: Option<u8>,
}

impl ConfigOverlay {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })
    }
}

/// Pure merge: scalar and list fields replaced wholesale when present in the
/// overlay, `thresholds` merged field-by-field.
pub fn merge(base: &Config, overlay: &ConfigOverlay) -> Config {
    let mut thresholds = base.thresholds;
    if let Some(t) = &overlay.thresholds {
        if let Some(v) = t.cpu_warning {
            thresholds.cpu_warning = v;
        }
        if let Some(v) = t.cpu_critical {
            thresholds.cpu_critical = v;
        }
        if let Some(v) = t.mem_warning {
            thresholds.mem_warning = v;
        }
        if let Some(v) = t.mem_critical {
            thresholds.mem_critical = v;
        }
        if let Some(v) = t.disk_warning {
            thresholds.disk_warning = v;
        }
        if let Some(v) = t.disk_critical {
            thresholds.disk_critical = v;
        }
    }

    let merged = Config {
        refresh_interval: overlay.refresh_interval.unwrap_or(base.refresh_interval),
        history_length: overlay.history_length.unwrap_or(base.history_length),
        thresholds,
        disks_to_monitor: overlay
            .disks_to_monitor
            .clone()
            .unwrap_or_else(|| base.disks_to_monitor.clone()),
        network_interfaces: overlay
            .network_interfaces
            .clone()
            .unwrap_or_else(|| base.network_interfaces.clone()),
        log_file: overlay
            .log_file
            .clone()
            .unwrap_or_else(|| base.log_file.clone()),
        enable_logging: overlay.enable_logging.unwrap_or(base.enable_logging),
    };

    // Warning above critical is tolerated (both comparisons stay independent
    // in the color logic), but worth flagging.
    for (name, warning, critical) in [
        ("cpu", merged.thresholds.cpu_warning, merged.thresholds.cpu_critical),
        ("mem", merged.thresholds.mem_warning, merged.thresholds.mem_critical),
        ("disk", merged.thresholds.disk_warning, merged.thresholds.disk_critical),
    ] {
        if warning > critical {
            tracing::warn!(
                resource = name,
                warning,
                critical,
                "warning threshold exceeds critical threshold"
            );
        }
    }

    merged
}

/// Expand a leading `~/` against `$HOME`.
pub fn expand_home(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/")
        && let Ok(home) = std::env::var("HOME")
    {
        return PathBuf::from(home).join(rest);
    }
    PathBuf::from(path)
}

pub fn reload_path() -> PathBuf {
    expand_home(RELOAD_PATH)
}
