// src/progress.rs
/// Lightweight progress reporting used by long-running operations
/// (discovery, detail fetches, git). Frontends (GUI/CLI) implement this to
/// surface status to users.
pub trait Progress {
    /// Called at the start with the total number of items (if known).
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// One package's metadata came back.
    fn item_done(&mut self, _name: &str, _version: &str) {}

    /// One package's metadata could not be fetched; the batch continues.
    fn item_failed(&mut self, _name: &str) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}

/// Collects every log line; handy for tests and for replaying output.
#[derive(Default, Debug)]
pub struct LinesProgress {
    pub lines: Vec<String>,
}

impl Progress for LinesProgress {
    fn log(&mut self, msg: &str) {
        self.lines.push(s!(msg));
    }
    fn item_done(&mut self, name: &str, version: &str) {
        self.lines.push(format!("  ✓ {name} v{version}"));
    }
    fn item_failed(&mut self, name: &str) {
        self.lines.push(format!("  ✗ {name} (failed)"));
    }
}
