//! Executor trait for running per-asset work, sequentially or in parallel.
//!
//! Each asset is assembled independently of every other asset, so a batch can
//! be spread over any number of workers as long as results come back in the
//! order the assets were discovered.

use std::fmt::Debug;

/// Runs a batch of independent work items.
///
/// # Implementations
///
/// - `SyncExecutor`: one item after another on the calling thread
/// - `RayonExecutor`: work-stealing thread pool (in `sfsym-executor`)
///
/// Implementations must return results in the same order as `items`.
pub trait Executor: Send + Sync + Debug {
    /// Applies `f` to every item and collects the results in input order.
    fn execute_all<T, R, F>(&self, items: Vec<T>, f: F) -> Vec<R>
    where
        T: Send + 'static,
        R: Send + 'static,
        F: Fn(T) -> R + Send + Sync + Clone + 'static;

    /// Number of items that may be processed at the same time.
    fn parallelism(&self) -> usize;

    /// Human-readable name, for logging.
    fn name(&self) -> &'static str;
}

/// Processes items one after another on the calling thread.
#[derive(Debug, Clone, Default)]
pub struct SyncExecutor;

impl SyncExecutor {
    pub fn new() -> Self {
        Self
    }
}

impl Executor for SyncExecutor {
    fn execute_all<T, R, F>(&self, items: Vec<T>, f: F) -> Vec<R>
    where
        T: Send + 'static,
        R: Send + 'static,
        F: Fn(T) -> R + Send + Sync + Clone + 'static,
    {
        items.into_iter().map(f).collect()
    }

    fn parallelism(&self) -> usize {
        1
    }

    fn name(&self) -> &'static str {
        "SyncExecutor"
    }
}
