//! Conditionally parallel iteration.
//!
//! The trial-period loop is embarrassingly parallel: every iteration reads
//! only shared immutable inputs and produces one independent result. With
//! the `parallel` feature (default) the loop runs on rayon's thread pool;
//! without it the same code runs sequentially, which keeps the crate usable
//! on targets without threads.

/// Iterate an owned collection or range, in parallel when the `parallel`
/// feature is enabled.
///
/// ```ignore
/// let results: Vec<_> = iter_maybe_parallel!(0..n)
///     .map(|i| evaluate(i))
///     .collect();
/// ```
#[macro_export]
macro_rules! iter_maybe_parallel {
    ($expr:expr) => {{
        #[cfg(feature = "parallel")]
        {
            use rayon::iter::IntoParallelIterator;

            IntoParallelIterator::into_par_iter($expr)
        }
        #[cfg(not(feature = "parallel"))]
        {
            IntoIterator::into_iter($expr)
        }
    }};
}
