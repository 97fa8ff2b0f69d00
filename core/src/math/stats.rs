use ndarray::ArrayView1;

pub struct StatsHelper;

impl StatsHelper {
    pub fn sum(values: ArrayView1<f64>) -> f64 {
        values.iter().sum()
    }

    /// Arithmetic mean; an empty row yields NaN, so callers validate `p >= 1` first.
    pub fn mean(values: ArrayView1<f64>) -> f64 {
        Self::sum(values) / values.len() as f64
    }
}
