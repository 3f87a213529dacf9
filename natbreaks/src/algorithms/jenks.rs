//! Fisher-Jenks natural breaks.
//!
//! Exact optimal partition of sorted one-dimensional data into `k` contiguous
//! non-empty classes, minimizing the total within-class sum of squared
//! deviations (SSD). Classical dynamic program: O(n^2 k) time, O(n k) space.

use crate::algorithms::classify;
use crate::error::BreaksError;
use crate::limits;
use tracing::debug;

/// Returns the `num_classes` class start values in ascending order.
///
/// `out[0]` is always the minimum observation. Input order is irrelevant;
/// duplicates are kept. All validation happens before the tables are
/// allocated.
///
/// Cost grows as `n^2 * k`; `n` is capped by [`limits::max_observations_for`].
pub fn compute_breaks(values: &[f64], num_classes: usize) -> Result<Vec<f64>, BreaksError> {
    validate(values, num_classes)?;
    let mut data = values.to_vec();
    data.sort_by(f64::total_cmp);
    debug!(n = data.len(), k = num_classes, "computing natural breaks");
    let tables = JenksTables::build(&data, num_classes);
    Ok(tables.backtrack(&data))
}

fn validate(values: &[f64], k: usize) -> Result<(), BreaksError> {
    if !limits::in_class_bounds(k) {
        return Err(BreaksError::InvalidClassCount {
            classes: k,
            max: limits::MAX_CLASSES,
        });
    }
    if let Some(index) = values.iter().position(|v| !v.is_finite()) {
        return Err(BreaksError::NonFiniteInput { index });
    }
    if values.len() < k {
        return Err(BreaksError::InsufficientData {
            observations: values.len(),
            classes: k,
        });
    }
    let max = limits::max_observations_for(k);
    if values.len() > max {
        return Err(BreaksError::TooManyObservations {
            observations: values.len(),
            max,
        });
    }
    Ok(())
}

/// Row-major `(n+1) x (k+1)` tables; row = prefix length, column = class count.
pub(crate) struct JenksTables {
    cols: usize,
    k: usize,
    n: usize,
    // 1-based index of the first value of the last class
    lower_class_limit: Vec<usize>,
    // minimal total SSD for the prefix split into j classes
    variance: Vec<f64>,
}

impl JenksTables {
    #[inline]
    fn at(&self, l: usize, j: usize) -> usize { l * self.cols + j }

    pub(crate) fn build(data: &[f64], k: usize) -> JenksTables {
        let n = data.len();
        let cols = k + 1;
        let mut t = JenksTables {
            cols,
            k,
            n,
            lower_class_limit: vec![0; (n + 1) * cols],
            variance: vec![f64::INFINITY; (n + 1) * cols],
        };
        for j in 1..=k {
            let c = t.at(1, j);
            t.lower_class_limit[c] = 1;
            t.variance[c] = 0.0;
        }

        for l in 2..=n {
            // trailing window [lower..=l], grown downwards
            let mut sum = 0.0f64;
            let mut sum_sq = 0.0f64;
            let mut w = 0.0f64;
            let mut ssd = 0.0f64;
            for m in 1..=l {
                let lower = l - m + 1;
                let x = data[lower - 1];
                w += 1.0;
                sum += x;
                sum_sq += x * x;
                // ties are decided on these exact bits, keep the operation order
                ssd = (sum_sq - sum * sum / w).max(0.0);

                if lower > 1 {
                    let prev = lower - 1;
                    // j-1 leading classes need at least j-1 values
                    for j in 2..=k.min(lower) {
                        let cand = ssd + t.variance[t.at(prev, j - 1)];
                        let cell = t.at(l, j);
                        // >= keeps the later (smaller) window on ties
                        if t.variance[cell] >= cand {
                            t.lower_class_limit[cell] = lower;
                            t.variance[cell] = cand;
                        }
                    }
                }
            }
            let c = t.at(l, 1);
            t.lower_class_limit[c] = 1;
            t.variance[c] = ssd;
        }
        t
    }

    /// Minimal total within-class SSD for the whole input.
    pub(crate) fn optimal_ssd(&self) -> f64 { self.variance[self.at(self.n, self.k)] }

    pub(crate) fn backtrack(&self, data: &[f64]) -> Vec<f64> {
        let mut out = vec![0.0; self.k];
        let mut row = self.n;
        for j in (1..=self.k).rev() {
            let start = self.lower_class_limit[self.at(row, j)];
            debug_assert!(start >= 1 && start <= row, "unreachable table cell");
            out[j - 1] = data[start - 1];
            row = start - 1;
        }
        out
    }
}

/// Total within-class SSD of `values` under the classes induced by `breaks`.
///
/// Values that fall in no class are ignored.
pub fn within_class_ssd(values: &[f64], breaks: &[f64]) -> f64 {
    let mut acc = vec![(0usize, 0.0f64, 0.0f64); breaks.len()];
    for &v in values {
        if let Some(c) = classify::classify(Some(v), breaks) {
            let (count, mean, ssd) = &mut acc[c];
            *count += 1;
            let delta = v - *mean;
            *mean += delta / *count as f64;
            *ssd += delta * (v - *mean);
        }
    }
    acc.iter().map(|(_, _, s)| s).sum()
}

/// Goodness of variance fit: `1 - within / total`, in `[0, 1]`.
///
/// Returns 1.0 when every value is identical (nothing left to explain).
pub fn goodness_of_variance_fit(values: &[f64], breaks: &[f64]) -> f64 {
    let mut count = 0usize;
    let mut mean = 0.0f64;
    let mut total = 0.0f64;
    for &v in values.iter().filter(|v| v.is_finite()) {
        count += 1;
        let delta = v - mean;
        mean += delta / count as f64;
        total += delta * (v - mean);
    }
    if total <= 0.0 {
        return 1.0;
    }
    (1.0 - within_class_ssd(values, breaks) / total).clamp(0.0, 1.0)
}
