use anyhow::Result;
use clap::Parser;
use reslight::app::{self, App};
use reslight::config::{self, Config, ConfigOverlay};
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing_subscriber::EnvFilter;

/// Lightweight terminal resource monitor
#[derive(Parser, Debug)]
#[command(name = "reslight", version, about)]
struct Args {
    /// Path to config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Refresh interval in seconds
    #[arg(long)]
    interval: Option<f64>,

    /// Enable logging
    #[arg(long)]
    log: bool,

    /// Run in headless mode (text-only output)
    #[arg(long)]
    no_ui: bool,
}

/// Cleared by the signal handler; checked at the top of each loop iteration.
/// Terminal restore happens on the control thread, never in handler context.
static RUNNING: AtomicBool = AtomicBool::new(true);

extern "C" fn signal_handler(_: i32) {
    RUNNING.store(false, Ordering::Relaxed);
}

fn setup_signal_handler() {
    unsafe {
        libc::signal(libc::SIGINT, signal_handler as *const () as libc::sighandler_t);
        libc::signal(libc::SIGTERM, signal_handler as *const () as libc::sighandler_t);
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Diagnostics go to stderr, which only headless mode can use without
    // corrupting the dashboard.
    if args.no_ui {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    }

    let mut config = Config::default();
    if let Some(path) = &args.config {
        // An explicit --config that fails to load is fatal; the loop never starts.
        let overlay =
            ConfigOverlay::load(path).map_err(|e| anyhow::anyhow!("Error loading config: {e}"))?;
        config = config::merge(&config, &overlay);
    }
    if let Some(interval) = args.interval {
        config.refresh_interval = interval;
    }
    if args.log {
        config.enable_logging = true;
    }

    setup_signal_handler();

    let mut app = App::new(config);
    if args.no_ui {
        app::run_headless(&mut app, &RUNNING)?;
        println!("\nStopping...");
    } else {
        app::run_interactive(&mut app, &RUNNING)?;
        println!("\nreslight stopped");
    }
    Ok(())
}
