// Per-tick snapshot models

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MemoryUsage {
    pub percent: f64,
    pub used_mb: u64,
    pub total_mb: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DiskUsage {
    pub mount: String,
    pub percent: f64,
    pub used_gb: u64,
    pub total_gb: u64,
}

/// Derived throughput in bytes/sec; formatting happens at render and log time.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct NetworkRates {
    pub up_bps: f64,
    pub down_bps: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct InterfaceInfo {
    pub name: String,
    /// First IPv4 address, or "N/A".
    pub ip: String,
    pub is_up: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProcessEntry {
    pub pid: u32,
    pub name: String,
    pub percent: f64,
}

/// Everything one tick collects. Owned by the tick and discarded after
/// rendering; history keeps only the scalar summaries.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Snapshot {
    pub cpu_percent: f64,
    pub memory: MemoryUsage,
    pub disks: Vec<DiskUsage>,
    pub network: NetworkRates,
    pub interfaces: Vec<InterfaceInfo>,
    pub top_cpu: Vec<ProcessEntry>,
    pub top_mem: Vec<ProcessEntry>,
}

impl Snapshot {
    /// Mean usage across monitored mounts, 0 when none are readable.
    pub fn disk_average(&self) -> f64 {
        if self.disks.is_empty() {
            return 0.0;
        }
        self.disks.iter().map(|d| d.percent).sum::<f64>() / self.disks.len() as f64
    }
}
