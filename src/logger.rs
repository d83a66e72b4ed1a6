// Append-only metrics log, "<timestamp> - LEVEL - message" lines

use crate::config::expand_home;
use chrono::Local;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

pub struct MetricsLog {
    path: PathBuf,
    enabled: bool,
}

impl MetricsLog {
    pub fn new(path: &str, enabled: bool) -> Self {
        Self {
            path: expand_home(path),
            enabled,
        }
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn info(&self, message: &str) {
        if self.enabled {
            self.append("INFO", message);
        }
    }

    /// Errors are always recorded: a failed reload must leave a trace even
    /// when per-tick logging is off.
    pub fn error(&self, message: &str) {
        self.append("ERROR", message);
    }

    /// One line recording a state change, written regardless of the enabled
    /// flag so that toggling off still leaves a trace.
    pub fn announce(&self, message: &str) {
        self.append("INFO", message);
    }

    // A failed write degrades to a diagnostic; it must never abort a tick.
    fn append(&self, level: &str, message: &str) {
        let line = format!(
            "{} - {} - {}\n",
            Local::now().format("%Y-%m-%d %H:%M:%S"),
            level,
            message
        );
        let result = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .and_then(|mut f| f.write_all(line.as_bytes()));
        if let Err(e) = result {
            tracing::warn!(error = %e, path = %self.path.display(), "metrics log write failed");
        }
    }
}
