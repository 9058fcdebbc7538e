/// Hook for watching one sort run step by step.
///
/// A presentation layer implements this to replay the distribution and
/// collection passes, e.g. as an animation. Each method fires exactly once
/// per event. All methods default to no-ops, so an observer overrides only
/// the events it cares about. Observers watch; they cannot steer the sort.
pub trait SortObserver {
    /// A bucket was created for `key` (first element with that key seen).
    fn bucket_created(&mut self, key: i64) {
        let _ = key;
    }

    /// An element moved from the input into the bucket for `key`.
    fn element_binned(&mut self, key: i64) {
        let _ = key;
    }

    /// An element moved from the bucket for `key` to output position `index`.
    fn element_placed(&mut self, key: i64, index: usize) {
        let _ = (key, index);
    }
}

/// Observer that ignores every event; backs the unobserved entry point.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopObserver;

impl SortObserver for NoopObserver {}
