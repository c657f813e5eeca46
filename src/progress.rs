// src/progress.rs
/// Lightweight progress reporting used by long-running operations (crawl/load).
/// Frontends implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the total number of items (if known).
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// One unit (a game) completed.
    fn item_done(&mut self, _id: u32) {}

    /// One unit failed; the run carries on.
    fn item_failed(&mut self, _id: u32, _reason: &str) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}

/// Writes `[n/total]` lines through the logging macros.
#[derive(Default)]
pub struct LogProgress {
    total: usize,
    done: usize,
    failed: usize,
}

impl LogProgress {
    pub fn new() -> Self {
        Self::default()
    }

    fn seen(&self) -> usize {
        self.done + self.failed
    }
}

impl Progress for LogProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
        self.done = 0;
        self.failed = 0;
    }

    fn log(&mut self, msg: &str) {
        logf!("{msg}");
    }

    fn item_done(&mut self, id: u32) {
        self.done += 1;
        logf!("[{}/{}] game {id} ok", self.seen(), self.total);
    }

    // The caller has already logged the error itself.
    fn item_failed(&mut self, id: u32, _reason: &str) {
        self.failed += 1;
        logd!("[{}/{}] game {id} failed", self.seen(), self.total);
    }

    fn finish(&mut self) {
        logf!("Finished: {} ok, {} failed", self.done, self.failed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_progress_counts() {
        let mut p = LogProgress::new();
        p.begin(3);
        p.item_done(1);
        p.item_failed(2, "boom");
        p.item_done(3);
        assert_eq!((p.done, p.failed, p.seen()), (2, 1, 3));
        p.finish();
    }
}
