// Metrics log line format and enable/disable behavior

use reslight::logger::MetricsLog;

fn read_lines(path: &std::path::Path) -> Vec<String> {
    std::fs::read_to_string(path)
        .unwrap_or_default()
        .lines()
        .map(str::to_string)
        .collect()
}

#[test]
fn test_info_line_format() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("metrics.log");
    let log = MetricsLog::new(path.to_str().unwrap(), true);

    log.info("CPU: 10.0%, MEM: 20.0%, DISK: 30.0%, NET_UP: 0.0 B/s, NET_DOWN: 0.0 B/s");

    let lines = read_lines(&path);
    assert_eq!(lines.len(), 1);
    assert!(lines[0].contains(" - INFO - CPU: 10.0%"));
    // Leading timestamp, e.g. "2026-08-24 12:00:00".
    let ts = lines[0].split(" - ").next().unwrap();
    assert_eq!(ts.len(), 19);
}

#[test]
fn test_error_level() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("metrics.log");
    let log = MetricsLog::new(path.to_str().unwrap(), true);

    log.error("Error loading config: boom");

    let lines = read_lines(&path);
    assert_eq!(lines.len(), 1);
    assert!(lines[0].contains(" - ERROR - Error loading config: boom"));
}

#[test]
fn test_disabled_log_suppresses_info() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("metrics.log");
    let log = MetricsLog::new(path.to_str().unwrap(), false);

    log.info("should not appear");

    assert!(!path.exists());
}

#[test]
fn test_error_written_even_when_disabled() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("metrics.log");
    let log = MetricsLog::new(path.to_str().unwrap(), false);

    log.error("Error loading config: boom");

    let lines = read_lines(&path);
    assert_eq!(lines.len(), 1);
    assert!(lines[0].contains(" - ERROR - Error loading config: boom"));
}

#[test]
fn test_announce_ignores_enabled_flag() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("metrics.log");
    let log = MetricsLog::new(path.to_str().unwrap(), false);

    log.announce("Logging disabled");

    let lines = read_lines(&path);
    assert_eq!(lines.len(), 1);
    assert!(lines[0].contains(" - INFO - Logging disabled"));
}
