// src/gui/progress.rs
use chrono::Local;

use crate::progress::Progress;

/// Appends `[HH:MM:SS] message` lines to the log panel buffer.
pub struct GuiProgress<'a> {
    lines: &'a mut Vec<String>,
}

impl<'a> GuiProgress<'a> {
    pub fn new(lines: &'a mut Vec<String>) -> Self {
        Self { lines }
    }
}

pub fn stamp(msg: &str) -> String {
    format!("[{}] {msg}", Local::now().format("%H:%M:%S"))
}

impl Progress for GuiProgress<'_> {
    fn log(&mut self, msg: &str) {
        self.lines.push(stamp(msg));
    }
    fn item_done(&mut self, name: &str, version: &str) {
        self.lines.push(stamp(&format!("  ✓ {name} v{version}")));
    }
    fn item_failed(&mut self, name: &str) {
        self.lines.push(stamp(&format!("  ✗ {name} (failed)")));
    }
}
