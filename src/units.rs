// Human-readable units, base-1024 thresholds

const KB: f64 = 1024.0;
const MB: f64 = 1024.0 * 1024.0;
const GB: f64 = 1024.0 * 1024.0 * 1024.0;

/// Throughput with one decimal: B/s below 1024, KB/s below 1024², MB/s above.
pub fn format_speed(bytes_per_sec: f64) -> String {
    if bytes_per_sec >= MB {
        format!("{:.1} MB/s", bytes_per_sec / MB)
    } else if bytes_per_sec >= KB {
        format!("{:.1} KB/s", bytes_per_sec / KB)
    } else {
        format!("{:.1} B/s", bytes_per_sec)
    }
}

/// Size with one decimal; whole bytes below 1024.
pub fn format_bytes(bytes: u64) -> String {
    let v = bytes as f64;
    if v >= GB {
        format!("{:.1} GB", v / GB)
    } else if v >= MB {
        format!("{:.1} MB", v / MB)
    } else if v >= KB {
        format!("{:.1} KB", v / KB)
    } else {
        format!("{} B", bytes)
    }
}
