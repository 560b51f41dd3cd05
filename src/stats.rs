//! Quantile helpers.
//!
//! Quantiles use linear interpolation between order statistics (type 7 in
//! Hyndman & Fan, the default of R and NumPy): for `n` sorted values the
//! `p`-th quantile sits at fractional rank `h = (n - 1) * p`.

/// Computes the `p`-th quantile of already sorted data.
///
/// Returns `None` if `sorted` is empty or `p` is outside `[0, 1]`.
pub fn quantile_sorted(sorted: &[f64], p: f64) -> Option<f64> {
    let n = sorted.len();
    if n == 0 || !(0.0..=1.0).contains(&p) {
        return None;
    }
    if n == 1 {
        return Some(sorted[0]);
    }

    let h = (n - 1) as f64 * p;
    let j = h.floor() as usize;
    let g = h - h.floor();

    if j + 1 >= n {
        Some(sorted[n - 1])
    } else {
        Some((1.0 - g) * sorted[j] + g * sorted[j + 1])
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quartiles {
    pub q1: f64,
    pub q2: f64,
    pub q3: f64,
}

impl Quartiles {
    /// Sorts a copy of `values` and reads off the three quartiles.
    pub fn from_values(values: &[f64]) -> Option<Self> {
        let mut sorted = values.to_vec();
        sorted.sort_by(|a, b| a.total_cmp(b));

        Some(Quartiles {
            q1: quantile_sorted(&sorted, 0.25)?,
            q2: quantile_sorted(&sorted, 0.5)?,
            q3: quantile_sorted(&sorted, 0.75)?,
        })
    }

    pub fn median(&self) -> f64 {
        self.q2
    }

    pub fn iqr(&self) -> f64 {
        self.q3 - self.q1
    }
}
