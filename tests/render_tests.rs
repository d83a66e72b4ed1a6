// Layout, gauge, and color classification tests

use chrono::TimeZone;
use crossterm::style::Color;
use reslight::config::{Config, Thresholds};
use reslight::history::History;
use reslight::models::{DiskUsage, InterfaceInfo, MemoryUsage, NetworkRates, ProcessEntry, Snapshot};
use reslight::render::{DrawOp, GaugeKind, gauge_fill, layout, threshold_color};

fn sample_snapshot() -> Snapshot {
    Snapshot {
        cpu_percent: 42.0,
        memory: MemoryUsage {
            percent: 50.0,
            used_mb: 8000,
            total_mb: 16000,
        },
        disks: vec![DiskUsage {
            mount: "/".into(),
            percent: 60.0,
            used_gb: 120,
            total_gb: 200,
        }],
        network: NetworkRates {
            up_bps: 2048.0,
            down_bps: 1_048_576.0,
        },
        interfaces: vec![
            InterfaceInfo {
                name: "eth0".into(),
                ip: "192.168.1.2".into(),
                is_up: true,
            },
            InterfaceInfo {
                name: "wlan0".into(),
                ip: "N/A".into(),
                is_up: false,
            },
        ],
        top_cpu: vec![ProcessEntry {
            pid: 1,
            name: "init".into(),
            percent: 3.0,
        }],
        top_mem: vec![ProcessEntry {
            pid: 2,
            name: "browser".into(),
            percent: 12.5,
        }],
    }
}

fn frame(width: u16, height: u16, snapshot: &Snapshot, history: &History) -> Vec<DrawOp> {
    let now = chrono::Local.with_ymd_and_hms(2026, 8, 24, 12, 0, 0).unwrap();
    layout(width, height, snapshot, history, &Config::default(), now)
}

fn find_at(ops: &[DrawOp], x: u16, y: u16) -> Option<&DrawOp> {
    ops.iter().find(|op| op.x == x && op.y == y)
}

#[test]
fn test_gauge_fill_clamped() {
    assert_eq!(gauge_fill(20, -1.0, 100.0), 0);
    assert_eq!(gauge_fill(20, 0.0, 100.0), 0);
    assert_eq!(gauge_fill(20, 50.0, 100.0), 10);
    assert_eq!(gauge_fill(20, 100.0, 100.0), 20);
    assert_eq!(gauge_fill(20, 150.0, 100.0), 20);
}

#[test]
fn test_gauge_fill_zero_max() {
    assert_eq!(gauge_fill(20, 50.0, 0.0), 0);
}

#[test]
fn test_threshold_color_boundaries() {
    let t = Thresholds::default(); // cpu 70/90
    assert_eq!(threshold_color(GaugeKind::Cpu, 69.0, &t), Color::Green);
    assert_eq!(threshold_color(GaugeKind::Cpu, 70.0, &t), Color::Yellow);
    assert_eq!(threshold_color(GaugeKind::Cpu, 89.9, &t), Color::Yellow);
    assert_eq!(threshold_color(GaugeKind::Cpu, 90.0, &t), Color::Red);
}

#[test]
fn test_threshold_color_per_resource_tag() {
    let t = Thresholds::default(); // disk 80/95
    assert_eq!(threshold_color(GaugeKind::Disk, 79.0, &t), Color::Green);
    assert_eq!(threshold_color(GaugeKind::Disk, 80.0, &t), Color::Yellow);
    assert_eq!(threshold_color(GaugeKind::Disk, 95.0, &t), Color::Red);
    // Untagged gauges never classify.
    assert_eq!(threshold_color(GaugeKind::Network, 100.0, &t), Color::Green);
    assert_eq!(threshold_color(GaugeKind::Other, 100.0, &t), Color::Green);
}

#[test]
fn test_layout_header_and_separator() {
    let ops = frame(80, 40, &sample_snapshot(), &History::new(10));
    let title = find_at(&ops, 0, 0).expect("title");
    assert!(title.text.contains("System Monitor"));
    assert!(title.text.contains("2026-08-24 12:00:00"));
    assert!(title.style.bold);
    assert_eq!(title.style.fg, Some(Color::Cyan));

    let rule = find_at(&ops, 0, 1).expect("separator");
    assert_eq!(rule.text, "=".repeat(80));
}

#[test]
fn test_layout_gauge_rows() {
    let ops = frame(80, 40, &sample_snapshot(), &History::new(10));

    assert_eq!(find_at(&ops, 2, 3).unwrap().text, "CPU:");
    let cpu_bar = find_at(&ops, 7, 3).expect("cpu bar");
    // round(20 * 42 / 100) = 8 filled cells.
    assert_eq!(cpu_bar.text, format!("[{}{}]", "#".repeat(8), " ".repeat(12)));
    assert_eq!(cpu_bar.style.fg, Some(Color::Green));
    assert_eq!(find_at(&ops, 29, 3).unwrap().text, "42.0%");

    assert_eq!(find_at(&ops, 2, 4).unwrap().text, "Memory:");
    assert_eq!(find_at(&ops, 50, 4).unwrap().text, "(8000 MB / 16000 MB)");

    assert_eq!(find_at(&ops, 2, 5).unwrap().text, "Disk /:");
    assert_eq!(find_at(&ops, 50, 5).unwrap().text, "(120 GB / 200 GB)");
}

#[test]
fn test_layout_network_and_interfaces() {
    let ops = frame(80, 40, &sample_snapshot(), &History::new(10));

    let net = find_at(&ops, 2, 6).expect("network row");
    assert_eq!(net.text, "Network: ▲ 2.0 KB/s ▼ 1.0 MB/s");
    assert_eq!(net.style.fg, Some(Color::Magenta));

    let eth0 = find_at(&ops, 2, 7).expect("eth0 row");
    assert_eq!(eth0.text, "eth0: 192.168.1.2 [UP]");
    assert_eq!(eth0.style.fg, Some(Color::Green));

    let wlan0 = find_at(&ops, 2, 8).expect("wlan0 row");
    assert_eq!(wlan0.text, "wlan0: N/A [DOWN]");
    assert_eq!(wlan0.style.fg, Some(Color::Red));
}

#[test]
fn test_layout_history_graphs_scaled_by_window_max() {
    let mut history = History::new(10);
    for (cpu, mem) in [(0.0, 0.0), (50.0, 0.0), (100.0, 0.0)] {
        history.record(cpu, mem, 0.0, 0.0, 0.0);
    }
    let ops = frame(80, 40, &sample_snapshot(), &history);

    // Second separator and graph labels: one disk + two interfaces puts the
    // graphs at row 11.
    assert_eq!(find_at(&ops, 0, 10).unwrap().text, "=".repeat(80));
    assert_eq!(find_at(&ops, 2, 11).unwrap().text, "CPU history:");

    // Samples [0, 50, 100] scale to heights [0, 2.5, 5] against max 100.
    assert_eq!(find_at(&ops, 2, 12).unwrap().text, "  #");
    assert_eq!(find_at(&ops, 2, 16).unwrap().text, " ##");
}

#[test]
fn test_layout_memory_graph_all_zero_uses_unit_scale() {
    let mut history = History::new(10);
    for _ in 0..3 {
        history.record(0.0, 0.0, 0.0, 0.0, 0.0);
    }
    let ops = frame(80, 40, &sample_snapshot(), &history);
    assert_eq!(find_at(&ops, 40, 11).unwrap().text, "Memory history:");
    // All-zero window divides by 1 and fills nothing.
    assert_eq!(find_at(&ops, 40, 12).unwrap().text, "   ");
}

#[test]
fn test_layout_process_tables_and_footer() {
    let ops = frame(80, 40, &sample_snapshot(), &History::new(10));

    let cpu_header = find_at(&ops, 2, 19).expect("cpu header");
    assert_eq!(cpu_header.text, "Top CPU processes:");
    assert!(cpu_header.style.bold);
    assert_eq!(find_at(&ops, 2, 20).unwrap().text, "init: 3.0%");

    assert_eq!(find_at(&ops, 40, 19).unwrap().text, "Top MEM processes:");
    assert_eq!(find_at(&ops, 40, 20).unwrap().text, "browser: 12.5%");

    let footer = find_at(&ops, 0, 39).expect("footer");
    assert_eq!(footer.text, "Q: Quit | R: Reload config | L: Toggle logging");
    assert!(footer.style.dim);
}

#[test]
fn test_layout_omits_sections_that_do_not_fit() {
    let mut history = History::new(10);
    history.record(50.0, 50.0, 50.0, 0.0, 0.0);
    let ops = frame(80, 10, &sample_snapshot(), &history);

    // Gauges fit, graphs and process tables do not.
    assert!(find_at(&ops, 2, 3).is_some());
    assert!(!ops.iter().any(|op| op.text.ends_with("history:")));
    assert!(!ops.iter().any(|op| op.text.starts_with("Top CPU")));
    // Footer moves with the terminal height.
    assert_eq!(
        find_at(&ops, 0, 9).unwrap().text,
        "Q: Quit | R: Reload config | L: Toggle logging"
    );
    assert!(ops.iter().all(|op| op.y < 10));
}

#[test]
fn test_layout_zero_size_terminal() {
    assert!(frame(0, 0, &sample_snapshot(), &History::new(10)).is_empty());
}
