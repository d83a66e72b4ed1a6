// Fixed-capacity metric rings for sparkline history

use std::collections::VecDeque;

/// FIFO of the most recent `capacity` samples. Push never fails; capacity 0
/// is legal and simply never retains anything.
#[derive(Debug, Clone, Default)]
pub struct Ring {
    buf: VecDeque<f64>,
    capacity: usize,
}

impl Ring {
    pub fn new(capacity: usize) -> Self {
        Self {
            buf: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push(&mut self, value: f64) {
        if self.capacity == 0 {
            return;
        }
        if self.buf.len() == self.capacity {
            self.buf.pop_front();
        }
        self.buf.push_back(value);
    }

    /// Change capacity, keeping the most recent entries.
    pub fn resize(&mut self, capacity: usize) {
        while self.buf.len() > capacity {
            self.buf.pop_front();
        }
        self.capacity = capacity;
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Oldest-first copy for rendering.
    pub fn values(&self) -> Vec<f64> {
        self.buf.iter().copied().collect()
    }
}

/// One ring per dashboard metric, appended to in lockstep each tick.
#[derive(Debug, Clone, Default)]
pub struct History {
    pub cpu: Ring,
    pub mem: Ring,
    pub disk: Ring,
    pub net_up: Ring,
    pub net_down: Ring,
}

impl History {
    pub fn new(capacity: usize) -> Self {
        Self {
            cpu: Ring::new(capacity),
            mem: Ring::new(capacity),
            disk: Ring::new(capacity),
            net_up: Ring::new(capacity),
            net_down: Ring::new(capacity),
        }
    }

    pub fn record(&mut self, cpu: f64, mem: f64, disk_avg: f64, net_up: f64, net_down: f64) {
        self.cpu.push(cpu);
        self.mem.push(mem);
        self.disk.push(disk_avg);
        self.net_up.push(net_up);
        self.net_down.push(net_down);
    }

    pub fn resize(&mut self, capacity: usize) {
        self.cpu.resize(capacity);
        self.mem.resize(capacity);
        self.disk.resize(capacity);
        self.net_up.resize(capacity);
        self.net_down.resize(capacity);
    }
}
