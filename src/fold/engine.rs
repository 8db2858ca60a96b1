//! The period fold engine.
//!
//! Evaluates the folded detection statistic for every trial period in a
//! grid. Each evaluation is a pure function of the shared read-only inputs
//! and owns its working buffers, so the trial-period loop parallelizes
//! without locks; results land in four index-aligned output arrays, slot
//! `i` belonging to period `i` regardless of completion order.

use crate::error::{Result, SearchError};
use crate::fold::bins::PhaseBins;
use crate::iter_maybe_parallel;
#[cfg(feature = "parallel")]
use rayon::iter::ParallelIterator;

/// Upper bound on the phase-bin count implied by any single trial period.
///
/// `ceil(period / delta_lag)` above this limit is rejected up front; a
/// pathological period/resolution pair is a caller error, not something to
/// discover through a runaway allocation mid-search.
pub const MAX_PHASE_BINS: usize = 1 << 24;

/// Statistic value substituted when a period evaluation fails.
const FAILED_STATISTIC: f64 = 0.0;

/// Phase-lag sentinel substituted when a period evaluation fails. Real
/// lags are never negative, so the sentinel is detectable from the lag
/// arrays alone.
const FAILED_LAG: f64 = -1.0;

/// Configuration for the fold engine.
#[derive(Debug, Clone)]
pub struct FoldConfig {
    /// Phase resolution in cadences: the width of one phase bin.
    pub delta_lag: f64,
    /// Minimum number of contributing cadences before a bin's statistic
    /// is trusted.
    pub min_ses_count: usize,
}

impl Default for FoldConfig {
    fn default() -> Self {
        Self {
            delta_lag: 1.0,
            min_ses_count: 3,
        }
    }
}

impl FoldConfig {
    /// Create a configuration with the given bin width and count gate.
    pub fn new(delta_lag: f64, min_ses_count: usize) -> Self {
        Self {
            delta_lag,
            min_ses_count,
        }
    }

    /// Set the phase resolution in cadences.
    pub fn with_delta_lag(mut self, delta_lag: f64) -> Self {
        self.delta_lag = delta_lag;
        self
    }

    /// Set the minimum contributing-cadence count per bin.
    pub fn with_min_ses_count(mut self, min_ses_count: usize) -> Self {
        self.min_ses_count = min_ses_count;
        self
    }
}

/// Detection statistics for one trial period.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FoldResult {
    /// Largest qualifying bin statistic.
    pub max_statistic: f64,
    /// Smallest qualifying bin statistic.
    pub min_statistic: f64,
    /// Phase lag of the maximum, in cadences.
    pub max_phase_lag_cadences: f64,
    /// Phase lag of the minimum, in cadences.
    pub min_phase_lag_cadences: f64,
}

impl FoldResult {
    /// The defined failure tuple: zero statistics, negative lag sentinels.
    pub fn failure() -> Self {
        Self {
            max_statistic: FAILED_STATISTIC,
            min_statistic: FAILED_STATISTIC,
            max_phase_lag_cadences: FAILED_LAG,
            min_phase_lag_cadences: FAILED_LAG,
        }
    }

    /// True when this period carries the failure tuple instead of a
    /// measured statistic.
    pub fn is_failure(&self) -> bool {
        self.max_phase_lag_cadences < 0.0
    }
}

/// Per-period fold statistics as four index-aligned arrays.
///
/// Slot `i` of every array belongs to the `i`-th input period. This layout
/// is what the downstream ranking stage consumes, and it is also what lets
/// the per-period evaluations run without shared mutable state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FoldOutputs {
    /// Largest qualifying bin statistic per period.
    pub max_statistics: Vec<f64>,
    /// Smallest qualifying bin statistic per period.
    pub min_statistics: Vec<f64>,
    /// Phase lag of each maximum, in cadences.
    pub max_phase_lags: Vec<f64>,
    /// Phase lag of each minimum, in cadences.
    pub min_phase_lags: Vec<f64>,
}

impl FoldOutputs {
    fn from_results(results: &[FoldResult]) -> Self {
        Self {
            max_statistics: results.iter().map(|r| r.max_statistic).collect(),
            min_statistics: results.iter().map(|r| r.min_statistic).collect(),
            max_phase_lags: results.iter().map(|r| r.max_phase_lag_cadences).collect(),
            min_phase_lags: results.iter().map(|r| r.min_phase_lag_cadences).collect(),
        }
    }

    /// Number of periods evaluated.
    pub fn len(&self) -> usize {
        self.max_statistics.len()
    }

    /// True when no periods were evaluated.
    pub fn is_empty(&self) -> bool {
        self.max_statistics.is_empty()
    }

    /// The 4-tuple for period `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i >= self.len()`.
    pub fn result(&self, i: usize) -> FoldResult {
        FoldResult {
            max_statistic: self.max_statistics[i],
            min_statistic: self.min_statistics[i],
            max_phase_lag_cadences: self.max_phase_lags[i],
            min_phase_lag_cadences: self.min_phase_lags[i],
        }
    }

    /// True when period `i` carries the failure tuple.
    ///
    /// # Panics
    ///
    /// Panics if `i >= self.len()`.
    pub fn is_failure(&self, i: usize) -> bool {
        self.max_phase_lags[i] < 0.0
    }
}

/// Evaluate the folded detection statistic for every trial period.
///
/// Periods are evaluated independently, in parallel when the `parallel`
/// feature is enabled; output slot `i` is written from period `i` only.
/// A period for which no phase bin survives the gating rule receives the
/// failure tuple without disturbing any other period.
///
/// # Arguments
/// * `correlation` - Matched-filter correlation series
/// * `normalization` - Matched-filter normalization series, index-aligned
///   with `correlation`, assumed non-negative
/// * `periods` - Trial periods in cadences, each finite and positive
/// * `config` - Phase resolution and bin count gate
///
/// # Example
/// ```
/// use transit_search::fold::{fold_periods, FoldConfig};
///
/// let correlation = vec![1.0; 100];
/// let normalization = vec![1.0; 100];
/// let periods = vec![5.0, 10.0, 25.0];
/// let config = FoldConfig::new(1.0, 3);
///
/// let outputs = fold_periods(&correlation, &normalization, &periods, &config).unwrap();
/// assert_eq!(outputs.len(), periods.len());
/// ```
pub fn fold_periods(
    correlation: &[f64],
    normalization: &[f64],
    periods: &[f64],
    config: &FoldConfig,
) -> Result<FoldOutputs> {
    if correlation.is_empty() {
        return Err(SearchError::EmptyData);
    }
    if normalization.len() != correlation.len() {
        return Err(SearchError::DimensionMismatch {
            expected: correlation.len(),
            got: normalization.len(),
        });
    }
    if !(config.delta_lag.is_finite() && config.delta_lag > 0.0) {
        return Err(SearchError::InvalidParameter(format!(
            "delta lag must be finite and positive, got {}",
            config.delta_lag
        )));
    }
    for (i, &period) in periods.iter().enumerate() {
        if !(period.is_finite() && period > 0.0) {
            return Err(SearchError::InvalidParameter(format!(
                "trial period {i} must be finite and positive, got {period}"
            )));
        }
        if implied_bin_count(period, config.delta_lag) > MAX_PHASE_BINS as f64 {
            return Err(SearchError::InvalidParameter(format!(
                "trial period {i} implies more than {MAX_PHASE_BINS} phase bins \
                 at delta lag {}",
                config.delta_lag
            )));
        }
    }

    let results: Vec<FoldResult> = iter_maybe_parallel!(0..periods.len())
        .map(|i| fold_one(correlation, normalization, periods[i], config))
        .collect();

    Ok(FoldOutputs::from_results(&results))
}

/// Evaluate the folded detection statistic for a single trial period.
///
/// The per-period half of [`fold_periods`]: same folding, gating, and
/// extremum rules, without the whole-call validation. Inputs that cannot
/// be folded (non-positive or non-finite period, excessive bin count)
/// yield the failure tuple, matching the engine's local-recovery policy.
pub fn fold_single_period(
    correlation: &[f64],
    normalization: &[f64],
    period: f64,
    config: &FoldConfig,
) -> FoldResult {
    if correlation.is_empty() || normalization.len() != correlation.len() {
        return FoldResult::failure();
    }
    if !(config.delta_lag.is_finite() && config.delta_lag > 0.0) {
        return FoldResult::failure();
    }
    fold_one(correlation, normalization, period, config)
}

fn implied_bin_count(period: f64, delta_lag: f64) -> f64 {
    (period / delta_lag).ceil().max(1.0)
}

/// Fold one period and scan its bins for the extremum statistics.
fn fold_one(
    correlation: &[f64],
    normalization: &[f64],
    period: f64,
    config: &FoldConfig,
) -> FoldResult {
    if !(period.is_finite() && period > 0.0)
        || implied_bin_count(period, config.delta_lag) > MAX_PHASE_BINS as f64
    {
        return FoldResult::failure();
    }

    let mut bins = PhaseBins::new(period, config.delta_lag);
    bins.accumulate(correlation, normalization);

    let mut best: Option<(f64, f64)> = None;
    let mut worst: Option<(f64, f64)> = None;

    for bin in 0..bins.len() {
        let Some(statistic) = bins.statistic(bin, config.min_ses_count) else {
            continue;
        };
        let lag = bins.lag(bin);

        // Plain comparisons; the first bin in phase order keeps a tie.
        match best {
            Some((held, _)) if statistic <= held => {}
            _ => best = Some((statistic, lag)),
        }
        match worst {
            Some((held, _)) if statistic >= held => {}
            _ => worst = Some((statistic, lag)),
        }
    }

    match (best, worst) {
        (Some((max_statistic, max_lag)), Some((min_statistic, min_lag))) => FoldResult {
            max_statistic,
            min_statistic,
            max_phase_lag_cadences: max_lag,
            min_phase_lag_cadences: min_lag,
        },
        _ => FoldResult::failure(),
    }
}
