// Control loop: sample → record → render → input → sleep

use crate::config::{self, Config, ConfigOverlay};
use crate::history::History;
use crate::logger::MetricsLog;
use crate::models::Snapshot;
use crate::render;
use crate::sampler::Sampler;
use crate::units::format_speed;
use anyhow::Result;
use chrono::Local;
use crossterm::cursor::{Hide, Show};
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use std::io::{self, Write};
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

pub struct App {
    config: Config,
    sampler: Sampler,
    history: History,
    log: MetricsLog,
}

impl App {
    pub fn new(config: Config) -> Self {
        let history = History::new(config.history_length);
        let log = MetricsLog::new(&config.log_file, config.enable_logging);
        Self {
            config,
            sampler: Sampler::new(),
            history,
            log,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// Collect one snapshot, fold its scalars into history, and emit the
    /// per-tick log line.
    pub fn tick(&mut self) -> Snapshot {
        let snapshot = self.sampler.snapshot(&self.config);
        let disk_avg = snapshot.disk_average();
        self.history.record(
            snapshot.cpu_percent,
            snapshot.memory.percent,
            disk_avg,
            snapshot.network.up_bps,
            snapshot.network.down_bps,
        );
        self.log.info(&format!(
            "CPU: {:.1}%, MEM: {:.1}%, DISK: {:.1}%, NET_UP: {}, NET_DOWN: {}",
            snapshot.cpu_percent,
            snapshot.memory.percent,
            disk_avg,
            format_speed(snapshot.network.up_bps),
            format_speed(snapshot.network.down_bps),
        ));
        snapshot
    }

    /// Re-run the config loader against `path`. Non-fatal: a malformed or
    /// unreadable file logs one error and keeps the previous configuration.
    pub fn reload_config(&mut self, path: &Path) {
        match ConfigOverlay::load(path) {
            Ok(overlay) => {
                self.config = config::merge(&self.config, &overlay);
                self.history.resize(self.config.history_length);
                self.log = MetricsLog::new(&self.config.log_file, self.config.enable_logging);
                self.log.info("Configuration reloaded");
            }
            Err(e) => {
                self.log.error(&format!("Error loading config: {e}"));
            }
        }
    }

    pub fn toggle_logging(&mut self) {
        self.config.enable_logging = !self.config.enable_logging;
        self.log.set_enabled(self.config.enable_logging);
        self.log.announce(if self.config.enable_logging {
            "Logging enabled"
        } else {
            "Logging disabled"
        });
    }

    /// Apply one keystroke. Quit, reload, and logging toggle are the only
    /// actionable keys.
    pub fn handle_key(&mut self, code: KeyCode, reload_path: &Path) -> KeyAction {
        match code {
            KeyCode::Char('q') | KeyCode::Char('Q') => KeyAction::Quit,
            KeyCode::Char('r') | KeyCode::Char('R') => {
                self.reload_config(reload_path);
                KeyAction::Handled
            }
            KeyCode::Char('l') | KeyCode::Char('L') => {
                self.toggle_logging();
                KeyAction::Handled
            }
            _ => KeyAction::Ignored,
        }
    }

    fn refresh_interval(&self) -> Duration {
        Duration::from_secs_f64(self.config.refresh_interval.max(0.0))
    }
}

/// Outcome of one keystroke.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Quit,
    Handled,
    Ignored,
}

/// Headless stdout line for one tick.
pub fn headless_line(snapshot: &Snapshot) -> String {
    format!(
        "CPU: {:.1}%, MEM: {:.1}%, DISK: {:.1}%",
        snapshot.cpu_percent,
        snapshot.memory.percent,
        snapshot.disk_average()
    )
}

/// Interactive dashboard. The terminal is restored by this thread on every
/// exit path; the signal handler only flips `running`.
pub fn run_interactive(app: &mut App, running: &AtomicBool) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, Hide)?;
    let result = interactive_loop(app, running, &mut stdout);
    restore_terminal(&mut stdout);
    result
}

fn restore_terminal(stdout: &mut impl Write) {
    let _ = execute!(stdout, Show, LeaveAlternateScreen);
    let _ = disable_raw_mode();
}

fn interactive_loop(app: &mut App, running: &AtomicBool, stdout: &mut impl Write) -> Result<()> {
    while running.load(Ordering::Relaxed) {
        let snapshot = app.tick();
        let (width, height) = crossterm::terminal::size()?;
        let ops = render::layout(
            width,
            height,
            &snapshot,
            &app.history,
            &app.config,
            Local::now(),
        );
        render::present(stdout, &ops)?;

        // Spend the rest of the tick polling for input. Only the first key
        // press counts as this tick's keystroke; the rest is drained.
        let deadline = Instant::now() + app.refresh_interval();
        let mut read_one = false;
        loop {
            let timeout = deadline.saturating_duration_since(Instant::now());
            if timeout.is_zero() || !running.load(Ordering::Relaxed) {
                break;
            }
            if !event::poll(timeout)? {
                break;
            }
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press || read_one {
                    continue;
                }
                read_one = true;
                if app.handle_key(key.code, &config::reload_path()) == KeyAction::Quit {
                    return Ok(());
                }
            }
        }
    }
    Ok(())
}

/// Text-only loop: one stdout line per tick until interrupted.
pub fn run_headless(app: &mut App, running: &AtomicBool) -> Result<()> {
    while running.load(Ordering::Relaxed) {
        let snapshot = app.tick();
        println!("{}", headless_line(&snapshot));
        std::thread::sleep(app.refresh_interval());
    }
    Ok(())
}
