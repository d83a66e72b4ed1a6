// Frame layout: positioned text ops recomputed against live terminal size.
// `layout` is pure; `present` is the only I/O in this module.

use crate::config::{Config, Thresholds};
use crate::history::History;
use crate::models::Snapshot;
use crate::units::{format_bytes, format_speed};
use chrono::{DateTime, Local};
use crossterm::cursor::MoveTo;
use crossterm::style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor};
use crossterm::terminal::{Clear, ClearType};
use crossterm::queue;
use std::io::{self, Write};

pub const BAR_WIDTH: usize = 20;
pub const GRAPH_HEIGHT: usize = 5;
pub const GRAPH_WIDTH: usize = 30;
/// X offset of the right-hand column (memory graph, MEM process table).
const RIGHT_COLUMN_X: u16 = 40;
/// X offset of the used/total suffix next to memory and disk gauges.
const SUFFIX_X: u16 = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextStyle {
    pub fg: Option<Color>,
    pub bold: bool,
    pub dim: bool,
}

impl TextStyle {
    pub fn plain() -> Self {
        Self::default()
    }

    pub fn fg(color: Color) -> Self {
        Self {
            fg: Some(color),
            ..Self::default()
        }
    }

    pub fn with_bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn with_dim(mut self) -> Self {
        self.dim = true;
        self
    }
}

/// One positioned piece of text to draw.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawOp {
    pub x: u16,
    pub y: u16,
    pub text: String,
    pub style: TextStyle,
}

/// Resource tag carried with each gauge so thresholds are looked up
/// explicitly instead of by inspecting display text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GaugeKind {
    Cpu,
    Memory,
    Disk,
    Network,
    Other,
}

/// Classify a value against the tag's thresholds. Both comparisons are
/// independent `>=` checks; untagged gauges default to green.
pub fn threshold_color(kind: GaugeKind, value: f64, thresholds: &Thresholds) -> Color {
    let (warning, critical) = match kind {
        GaugeKind::Cpu => (thresholds.cpu_warning, thresholds.cpu_critical),
        GaugeKind::Memory => (thresholds.mem_warning, thresholds.mem_critical),
        GaugeKind::Disk => (thresholds.disk_warning, thresholds.disk_critical),
        GaugeKind::Network | GaugeKind::Other => return Color::Green,
    };
    if value >= critical as f64 {
        Color::Red
    } else if value >= warning as f64 {
        Color::Yellow
    } else {
        Color::Green
    }
}

/// Filled cells of a bar: `round(width × value/max)` clamped to `[0, width]`.
pub fn gauge_fill(width: usize, value: f64, max: f64) -> usize {
    if max <= 0.0 {
        return 0;
    }
    let filled = (width as f64 * value / max).round();
    filled.clamp(0.0, width as f64) as usize
}

fn put(ops: &mut Vec<DrawOp>, height: u16, x: u16, y: u16, text: String, style: TextStyle) {
    if y < height {
        ops.push(DrawOp { x, y, text, style });
    }
}

#[allow(clippy::too_many_arguments)]
fn gauge_row(
    ops: &mut Vec<DrawOp>,
    height: u16,
    y: u16,
    x: u16,
    label: &str,
    kind: GaugeKind,
    value: f64,
    max: f64,
    thresholds: &Thresholds,
) {
    put(ops, height, x, y, format!("{label}:"), TextStyle::plain());

    let filled = gauge_fill(BAR_WIDTH, value, max);
    let bar = format!("[{}{}]", "#".repeat(filled), " ".repeat(BAR_WIDTH - filled));
    let bar_x = x + label.len() as u16 + 2;
    let color = threshold_color(kind, value, thresholds);
    put(ops, height, bar_x, y, bar, TextStyle::fg(color));

    let value_text = if max == 100.0 {
        format!("{value:.1}%")
    } else {
        format_bytes(value.max(0.0) as u64)
    };
    let value_x = bar_x + BAR_WIDTH as u16 + 2;
    put(ops, height, value_x, y, value_text, TextStyle::plain());
}

fn history_graph(ops: &mut Vec<DrawOp>, height: u16, x: u16, y: u16, data: &[f64], label: &str) {
    if data.is_empty() {
        return;
    }
    put(ops, height, x, y, format!("{label} history:"), TextStyle::plain());

    let window = &data[data.len().saturating_sub(GRAPH_WIDTH)..];
    let max_val = window.iter().copied().fold(0.0_f64, f64::max);
    let max_val = if max_val > 0.0 { max_val } else { 1.0 };

    // Row i covers the (GRAPH_HEIGHT - i)-th height step, top row highest.
    for i in 0..GRAPH_HEIGHT {
        let threshold = (GRAPH_HEIGHT - i) as f64;
        let line: String = window
            .iter()
            .map(|v| {
                if (v / max_val) * GRAPH_HEIGHT as f64 >= threshold {
                    '#'
                } else {
                    ' '
                }
            })
            .collect();
        put(ops, height, x, y + 1 + i as u16, line, TextStyle::plain());
    }
}

/// Lay out one frame. Sections that would not fit the current height are
/// omitted; nothing is cached between frames.
pub fn layout(
    width: u16,
    height: u16,
    snapshot: &Snapshot,
    history: &History,
    config: &Config,
    now: DateTime<Local>,
) -> Vec<DrawOp> {
    let mut ops = Vec::new();
    if width == 0 || height == 0 {
        return ops;
    }
    let thresholds = &config.thresholds;

    put(
        &mut ops,
        height,
        0,
        0,
        format!("reslight - System Monitor - {}", now.format("%Y-%m-%d %H:%M:%S")),
        TextStyle::fg(Color::Cyan).with_bold(),
    );
    put(
        &mut ops,
        height,
        0,
        1,
        "=".repeat(width as usize),
        TextStyle::plain(),
    );

    gauge_row(
        &mut ops,
        height,
        3,
        2,
        "CPU",
        GaugeKind::Cpu,
        snapshot.cpu_percent,
        100.0,
        thresholds,
    );

    gauge_row(
        &mut ops,
        height,
        4,
        2,
        "Memory",
        GaugeKind::Memory,
        snapshot.memory.percent,
        100.0,
        thresholds,
    );
    put(
        &mut ops,
        height,
        SUFFIX_X,
        4,
        format!(
            "({} MB / {} MB)",
            snapshot.memory.used_mb, snapshot.memory.total_mb
        ),
        TextStyle::plain(),
    );

    let mut row: u16 = 5;
    for disk in &snapshot.disks {
        gauge_row(
            &mut ops,
            height,
            row,
            2,
            &format!("Disk {}", disk.mount),
            GaugeKind::Disk,
            disk.percent,
            100.0,
            thresholds,
        );
        put(
            &mut ops,
            height,
            SUFFIX_X,
            row,
            format!("({} GB / {} GB)", disk.used_gb, disk.total_gb),
            TextStyle::plain(),
        );
        row += 1;
    }

    put(
        &mut ops,
        height,
        2,
        row,
        format!(
            "Network: ▲ {} ▼ {}",
            format_speed(snapshot.network.up_bps),
            format_speed(snapshot.network.down_bps)
        ),
        TextStyle::fg(Color::Magenta),
    );
    row += 1;

    for (i, iface) in snapshot.interfaces.iter().enumerate() {
        let (status, color) = if iface.is_up {
            ("UP", Color::Green)
        } else {
            ("DOWN", Color::Red)
        };
        put(
            &mut ops,
            height,
            2,
            row + i as u16,
            format!("{}: {} [{}]", iface.name, iface.ip, status),
            TextStyle::fg(color),
        );
    }

    let separator_row = row + snapshot.interfaces.len() as u16 + 1;
    put(
        &mut ops,
        height,
        0,
        separator_row,
        "=".repeat(width as usize),
        TextStyle::plain(),
    );

    let graph_row = separator_row + 1;
    if graph_row + 8 < height {
        history_graph(&mut ops, height, 2, graph_row, &history.cpu.values(), "CPU");
        history_graph(
            &mut ops,
            height,
            RIGHT_COLUMN_X,
            graph_row,
            &history.mem.values(),
            "Memory",
        );
    }

    let process_row = graph_row + 8;
    if process_row + 10 < height {
        put(
            &mut ops,
            height,
            2,
            process_row,
            "Top CPU processes:".into(),
            TextStyle::plain().with_bold(),
        );
        for (i, proc) in snapshot.top_cpu.iter().enumerate() {
            put(
                &mut ops,
                height,
                2,
                process_row + 1 + i as u16,
                format!("{}: {:.1}%", proc.name, proc.percent),
                TextStyle::plain(),
            );
        }

        put(
            &mut ops,
            height,
            RIGHT_COLUMN_X,
            process_row,
            "Top MEM processes:".into(),
            TextStyle::plain().with_bold(),
        );
        for (i, proc) in snapshot.top_mem.iter().enumerate() {
            put(
                &mut ops,
                height,
                RIGHT_COLUMN_X,
                process_row + 1 + i as u16,
                format!("{}: {:.1}%", proc.name, proc.percent),
                TextStyle::plain(),
            );
        }
    }

    if height > 2 {
        put(
            &mut ops,
            height,
            0,
            height - 1,
            "Q: Quit | R: Reload config | L: Toggle logging".into(),
            TextStyle::plain().with_dim(),
        );
    }

    ops
}

/// Queue the frame's ops and flush.
pub fn present(out: &mut impl Write, ops: &[DrawOp]) -> io::Result<()> {
    queue!(out, Clear(ClearType::All))?;
    for op in ops {
        queue!(out, MoveTo(op.x, op.y))?;
        if let Some(color) = op.style.fg {
            queue!(out, SetForegroundColor(color))?;
        }
        if op.style.bold {
            queue!(out, SetAttribute(Attribute::Bold))?;
        }
        if op.style.dim {
            queue!(out, SetAttribute(Attribute::Dim))?;
        }
        queue!(out, Print(&op.text), ResetColor, SetAttribute(Attribute::Reset))?;
    }
    out.flush()
}
