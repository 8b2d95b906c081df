//! Summary statistics for Hygeia cohort outcomes.
//!
//! The cohort aggregator hands each raw outcome vector (survival times,
//! discounted costs, ...) to [`SummaryStat`], which captures the usual
//! descriptors once at construction. Empty samples are tolerated: a cohort
//! of size zero must summarise without panicking.

use statrs::distribution::{ContinuousCDF, StudentsT};

/// Arithmetic mean of a slice. Returns 0.0 if empty.
pub fn mean(data: &[f64]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    let sum: f64 = data.iter().sum();
    sum / data.len() as f64
}

/// Sample variance with N-1 denominator. Returns 0.0 if fewer than 2 elements.
pub fn variance(data: &[f64]) -> f64 {
    let n = data.len();
    if n < 2 {
        return 0.0;
    }
    let nf = n as f64;
    let mean = data.iter().sum::<f64>() / nf;
    data.iter().map(|&x| (x - mean) * (x - mean)).sum::<f64>() / (nf - 1.0)
}

/// Sample standard deviation with N-1 denominator.
/// Returns 0.0 if fewer than 2 elements.
pub fn sd(data: &[f64]) -> f64 {
    variance(data).sqrt()
}

/// Summary descriptors of a numeric sample, computed once at construction.
#[derive(Debug, Clone)]
pub struct SummaryStat {
    name: String,
    n: usize,
    mean: f64,
    st_dev: f64,
    min: f64,
    max: f64,
}

impl SummaryStat {
    /// Summarises a sample under the given display name.
    ///
    /// An empty sample yields `n = 0` with zeroed moments and min/max of
    /// 0.0; no element of the result is NaN.
    pub fn new(name: impl Into<String>, data: &[f64]) -> Self {
        let (min, max) = data
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &x| {
                (lo.min(x), hi.max(x))
            });
        let empty = data.is_empty();
        Self {
            name: name.into(),
            n: data.len(),
            mean: mean(data),
            st_dev: sd(data),
            min: if empty { 0.0 } else { min },
            max: if empty { 0.0 } else { max },
        }
    }

    /// Returns the display name of the summarised metric.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the sample size.
    pub fn n(&self) -> usize {
        self.n
    }

    /// Returns the arithmetic mean (0.0 for an empty sample).
    pub fn mean(&self) -> f64 {
        self.mean
    }

    /// Returns the sample standard deviation (N-1 denominator).
    pub fn st_dev(&self) -> f64 {
        self.st_dev
    }

    /// Returns the smallest observation (0.0 for an empty sample).
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Returns the largest observation (0.0 for an empty sample).
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Two-sided `(1 - alpha)` Student-t confidence interval for the mean.
    ///
    /// Returns `None` when the sample has fewer than 2 observations or
    /// `alpha` is outside (0, 1).
    pub fn interval_estimate(&self, alpha: f64) -> Option<(f64, f64)> {
        if self.n < 2 || !(0.0..1.0).contains(&alpha) || alpha == 0.0 {
            return None;
        }
        let t = StudentsT::new(0.0, 1.0, (self.n - 1) as f64).ok()?;
        let q = t.inverse_cdf(1.0 - alpha / 2.0);
        let half_width = q * self.st_dev / (self.n as f64).sqrt();
        Some((self.mean - half_width, self.mean + half_width))
    }
}
