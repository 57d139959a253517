// src/progress.rs
/// Lightweight progress reporting for a crawl.
/// Frontends implement this to surface status to users; every hook is optional.
pub trait Progress {
    /// Called once rows are extracted, with the number of rows to parse.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called for each course kept after filtering.
    fn item_done(&mut self, _course_id: &str) {}

    /// Called at the end of a successful crawl with the kept count.
    fn finish(&mut self, _kept: usize) {}
}
