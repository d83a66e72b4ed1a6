// Host counters via sysinfo

mod linux;

use crate::config::Config;
use crate::models::{DiskUsage, InterfaceInfo, MemoryUsage, NetworkRates, ProcessEntry, Snapshot};
use std::cmp::Ordering;
use std::path::Path;
use std::time::Instant;
use sysinfo::{Disks, Networks, ProcessesToUpdate, System};

/// Processes shown per top-list.
pub const TOP_PROCESS_COUNT: usize = 3;

/// Previous cumulative byte counters and when they were taken.
#[derive(Debug, Clone, Copy)]
struct NetBaseline {
    transmitted: u64,
    received: u64,
    taken_at: Instant,
}

pub struct Sampler {
    sys: System,
    disks: Disks,
    networks: Networks,
    last_net: Option<NetBaseline>,
}

impl Default for Sampler {
    fn default() -> Self {
        Self::new()
    }
}

impl Sampler {
    pub fn new() -> Self {
        let mut sys = System::new_all();
        sys.refresh_all();
        Self {
            sys,
            disks: Disks::new_with_refreshed_list(),
            networks: Networks::new_with_refreshed_list(),
            last_net: None,
        }
    }

    /// Global CPU percent integrated over a short blocking window; two
    /// refreshes spaced by the minimum interval sysinfo needs for a stable
    /// reading.
    pub fn cpu(&mut self) -> f64 {
        self.sys.refresh_cpu_all();
        std::thread::sleep(sysinfo::MINIMUM_CPU_UPDATE_INTERVAL);
        self.sys.refresh_cpu_all();
        (self.sys.global_cpu_usage() as f64).clamp(0.0, 100.0)
    }

    pub fn memory(&mut self) -> MemoryUsage {
        self.sys.refresh_memory();
        let total = self.sys.total_memory();
        let available = self.sys.available_memory();
        let used = total.saturating_sub(available);
        let percent = if total > 0 {
            (used as f64 / total as f64) * 100.0
        } else {
            0.0
        };
        MemoryUsage {
            percent,
            used_mb: used / (1024 * 1024),
            total_mb: total / (1024 * 1024),
        }
    }

    /// Usage per configured mount. Mounts the host does not expose (absent,
    /// unreadable) are skipped, not fatal.
    pub fn disks(&mut self, mounts: &[String]) -> Vec<DiskUsage> {
        self.disks.refresh(false);
        mounts
            .iter()
            .filter_map(|mount| {
                let disk = self
                    .disks
                    .list()
                    .iter()
                    .find(|d| d.mount_point() == Path::new(mount))?;
                let total = disk.total_space();
                let used = total.saturating_sub(disk.available_space());
                let percent = if total > 0 {
                    (used as f64 / total as f64) * 100.0
                } else {
                    0.0
                };
                Some(DiskUsage {
                    mount: mount.clone(),
                    percent,
                    used_gb: used / (1024 * 1024 * 1024),
                    total_gb: total / (1024 * 1024 * 1024),
                })
            })
            .collect()
    }

    /// Throughput from cumulative counter deltas across all interfaces.
    /// The stored baseline is only advanced when a positive interval has
    /// elapsed, so a zero-elapsed call yields zero rates rather than a
    /// division error.
    pub fn network_rate(&mut self) -> NetworkRates {
        self.networks.refresh(true);
        let mut transmitted = 0u64;
        let mut received = 0u64;
        for data in self.networks.list().values() {
            transmitted += data.total_transmitted();
            received += data.total_received();
        }

        let now = Instant::now();
        let rates = match self.last_net {
            Some(prev) => {
                let dt = now.duration_since(prev.taken_at).as_secs_f64();
                if dt <= 0.0 {
                    return NetworkRates::default();
                }
                rate_from_counters(
                    (prev.transmitted, prev.received),
                    (transmitted, received),
                    dt,
                )
            }
            None => NetworkRates::default(),
        };
        self.last_net = Some(NetBaseline {
            transmitted,
            received,
            taken_at: now,
        });
        rates
    }

    /// First IPv4 and up/down status per configured interface name; names
    /// absent on the host are omitted.
    pub fn interfaces(&mut self, names: &[String]) -> Vec<InterfaceInfo> {
        self.networks.refresh(true);
        names
            .iter()
            .filter_map(|name| {
                let data = self.networks.list().get(name)?;
                let ip = data
                    .ip_networks()
                    .iter()
                    .find(|n| n.addr.is_ipv4())
                    .map(|n| n.addr.to_string())
                    .unwrap_or_else(|| "N/A".into());
                Some(InterfaceInfo {
                    name: name.clone(),
                    ip,
                    is_up: linux::is_interface_up(name),
                })
            })
            .collect()
    }

    /// Two descending top-lists of at most `count` entries: by CPU percent
    /// and by memory percent. Processes vanishing mid-enumeration simply do
    /// not appear.
    pub fn top_processes(&mut self, count: usize) -> (Vec<ProcessEntry>, Vec<ProcessEntry>) {
        self.sys.refresh_processes(ProcessesToUpdate::All, true);
        let total_memory = self.sys.total_memory();

        let mut by_cpu: Vec<ProcessEntry> = Vec::with_capacity(self.sys.processes().len());
        let mut by_mem: Vec<ProcessEntry> = Vec::with_capacity(self.sys.processes().len());
        for (pid, process) in self.sys.processes() {
            let name = process.name().to_string_lossy().into_owned();
            let mem_percent = if total_memory > 0 {
                (process.memory() as f64 / total_memory as f64) * 100.0
            } else {
                0.0
            };
            by_cpu.push(ProcessEntry {
                pid: pid.as_u32(),
                name: name.clone(),
                percent: process.cpu_usage() as f64,
            });
            by_mem.push(ProcessEntry {
                pid: pid.as_u32(),
                name,
                percent: mem_percent,
            });
        }

        by_cpu.sort_by(|a, b| b.percent.partial_cmp(&a.percent).unwrap_or(Ordering::Equal));
        by_mem.sort_by(|a, b| b.percent.partial_cmp(&a.percent).unwrap_or(Ordering::Equal));
        by_cpu.truncate(count);
        by_mem.truncate(count);
        (by_cpu, by_mem)
    }

    /// Collect one full snapshot for the current tick.
    pub fn snapshot(&mut self, config: &Config) -> Snapshot {
        let cpu_percent = self.cpu();
        let memory = self.memory();
        let disks = self.disks(&config.disks_to_monitor);
        let network = self.network_rate();
        let interfaces = self.interfaces(&config.network_interfaces);
        let (top_cpu, top_mem) = self.top_processes(TOP_PROCESS_COUNT);
        Snapshot {
            cpu_percent,
            memory,
            disks,
            network,
            interfaces,
            top_cpu,
            top_mem,
        }
    }
}

/// Rate = Δbytes / Δtime, guarded against non-positive intervals and counter
/// resets.
pub fn rate_from_counters(prev: (u64, u64), curr: (u64, u64), dt_secs: f64) -> NetworkRates {
    if dt_secs <= 0.0 {
        return NetworkRates::default();
    }
    NetworkRates {
        up_bps: curr.0.saturating_sub(prev.0) as f64 / dt_secs,
        down_bps: curr.1.saturating_sub(prev.1) as f64 / dt_secs,
    }
}
