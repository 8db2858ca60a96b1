//! # transit-search
//!
//! Statistics engine for periodic-signal (transit-like) searches in
//! fixed-cadence time series.
//!
//! Provides the three numeric kernels of the search pipeline:
//! - [`filter::median_filter`]: robust windowed median smoother built on
//!   partition-exchange selection
//! - [`filter::moving_max`]: sliding-window maximum with a deterministic
//!   nearest-to-center tie-break
//! - [`fold::fold_periods`]: folded detection statistics over a grid of
//!   trial periods, evaluated independently per period
//!
//! Ephemeris math, file I/O, period-grid generation, and candidate vetting
//! live outside this crate; inputs and outputs are plain `f64` slices
//! aligned by cadence index.

#![allow(clippy::needless_range_loop)]

pub mod error;
pub mod filter;
pub mod fold;
pub mod parallel;

pub use error::{Result, SearchError};

pub mod prelude {
    pub use crate::error::{Result, SearchError};
    pub use crate::filter::{median_filter, moving_max, MovingMaxResult};
    pub use crate::fold::{fold_periods, FoldConfig, FoldOutputs, FoldResult};
}
