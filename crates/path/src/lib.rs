//! Prevalence sample paths for Hygeia cohorts.
//!
//! A [`PrevalencePath`] is a non-increasing step function of the number of
//! still-alive cohort members over simulation time. It starts at the
//! initial population size at time 0 and steps down at each recorded
//! death time; simultaneous deaths collapse into a single step.

/// Step function of alive-count over simulation time.
///
/// `times()[0]` is always 0.0 with `values()[0]` equal to the initial
/// population size; subsequent entries are the distinct event times in
/// ascending order with the population remaining after each.
#[derive(Debug, Clone)]
pub struct PrevalencePath {
    name: String,
    times: Vec<f64>,
    values: Vec<usize>,
}

impl PrevalencePath {
    /// Builds the path from an initial population size and raw event times.
    ///
    /// Event times may arrive in any order (parallel collection must not
    /// change the result); they are sorted ascending and ties are grouped
    /// into a single decrement of the tie count. More events than
    /// `initial_size` saturate at zero rather than underflowing.
    pub fn new(name: impl Into<String>, initial_size: usize, event_times: &[f64]) -> Self {
        let mut sorted = event_times.to_vec();
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

        let mut times = vec![0.0];
        let mut values = vec![initial_size];

        let mut i = 0;
        while i < sorted.len() {
            let t = sorted[i];
            let mut ties = 0;
            while i < sorted.len() && sorted[i] == t {
                ties += 1;
                i += 1;
            }
            let remaining = values.last().copied().unwrap_or(0).saturating_sub(ties);
            times.push(t);
            values.push(remaining);
        }

        Self {
            name: name.into(),
            times,
            values,
        }
    }

    /// Returns the display name of this path.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the step times, starting at 0.0, ascending.
    pub fn times(&self) -> &[f64] {
        &self.times
    }

    /// Returns the alive-count after each step time.
    pub fn values(&self) -> &[usize] {
        &self.values
    }

    /// Returns the population size at time 0.
    pub fn initial_size(&self) -> usize {
        self.values[0]
    }

    /// Evaluates the step function at time `t`.
    ///
    /// Returns the value of the most recent step at or before `t`; times
    /// before 0.0 return the initial size.
    pub fn value_at(&self, t: f64) -> usize {
        let idx = self.times.partition_point(|&x| x <= t);
        if idx == 0 {
            self.values[0]
        } else {
            self.values[idx - 1]
        }
    }
}
