//! Windowed order-statistic filters over cadence series.
//!
//! This module provides the two robust smoothers used ahead of the period
//! search:
//! - [`median_filter`]: centered median with zero-substituted edges, built
//!   on partition-exchange selection
//! - [`moving_max`]: clipped sliding-window maximum with a deterministic
//!   nearest-to-center tie-break

mod extrema;
mod median;

pub use extrema::{moving_max, MovingMaxResult};
pub use median::{median_filter, select_kth_in_place};
