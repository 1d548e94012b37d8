// src/progress.rs
/// Lightweight progress reporting used by long-running operations
/// (sheet fetch, API dumps). Frontends implement this to surface status.
pub trait Progress {
    /// Called at the start with the total number of items (if known).
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called when one logical unit completes (e.g., one item id dumped).
    fn item_done(&mut self, _n: usize) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}

/// Console sink for the CLI: status lines to stderr, one tick per
/// hundred items so long dumps stay readable.
pub struct ConsoleProgress {
    total: usize,
}

impl ConsoleProgress {
    pub fn new() -> Self { Self { total: 0 } }
}

impl Default for ConsoleProgress {
    fn default() -> Self { Self::new() }
}

impl Progress for ConsoleProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
    }
    fn log(&mut self, msg: &str) {
        eprintln!("{}", msg);
    }
    fn item_done(&mut self, n: usize) {
        if n % 100 == 0 {
            eprintln!("Processed {} / {}", n, self.total);
        }
    }
    fn finish(&mut self) {
        eprintln!("Done.");
    }
}
