//! Rayon-based parallel executor.

use rayon::prelude::*;
use sfsym_traits::Executor;

/// A parallel executor using rayon's global work-stealing thread pool.
///
/// Results are collected through an indexed parallel iterator, so they come
/// back in input order even though items finish out of order.
///
/// To limit the number of threads, configure rayon's global pool before the
/// first executor is created:
///
/// ```ignore
/// rayon::ThreadPoolBuilder::new()
///     .num_threads(4)
///     .build_global()
///     .unwrap();
/// let executor = RayonExecutor::new();
/// ```
#[derive(Debug, Clone)]
pub struct RayonExecutor {
    num_threads: usize,
}

impl RayonExecutor {
    pub fn new() -> Self {
        Self {
            num_threads: rayon::current_num_threads(),
        }
    }
}

impl Default for RayonExecutor {
    fn default() -> Self {
        Self::new()
    }
}

impl Executor for RayonExecutor {
    fn execute_all<T, R, F>(&self, items: Vec<T>, f: F) -> Vec<R>
    where
        T: Send + 'static,
        R: Send + 'static,
        F: Fn(T) -> R + Send + Sync + Clone + 'static,
    {
        items.into_par_iter().map(f).collect()
    }

    fn parallelism(&self) -> usize {
        self.num_threads
    }

    fn name(&self) -> &'static str {
        "RayonExecutor"
    }
}
