//! Folded detection statistics over a grid of trial periods.
//!
//! For every candidate period the matched-filter correlation and
//! normalization series are folded into phase bins, each qualifying bin is
//! scored as `sum(correlation) / sqrt(sum(normalization))`, and the best
//! and worst bin statistics are reported together with the phase lag at
//! which they occur. Period evaluations are independent of one another and
//! run on the rayon pool when the `parallel` feature is enabled.

mod bins;
mod engine;

pub use engine::{
    fold_periods, fold_single_period, FoldConfig, FoldOutputs, FoldResult, MAX_PHASE_BINS,
};
