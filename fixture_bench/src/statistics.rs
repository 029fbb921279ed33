//!
//! Duration statistics.
//!

///
/// Mean and sample standard deviation of a duration series.
///
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Summary {
    /// The arithmetic mean.
    pub mean: f64,
    /// The sample standard deviation, undefined for a single sample.
    pub standard_deviation: Option<f64>,
}

impl Summary {
    ///
    /// Computes the summary of `samples`.
    ///
    /// Returns `None` for an empty series.
    ///
    pub fn new(samples: &[f64]) -> Option<Self> {
        if samples.is_empty() {
            return None;
        }

        let count = samples.len() as f64;
        let mean = samples.iter().sum::<f64>() / count;
        let standard_deviation = if samples.len() > 1 {
            let variance = samples
                .iter()
                .map(|sample| (sample - mean).powi(2))
                .sum::<f64>()
                / (count - 1.0);
            Some(variance.sqrt())
        } else {
            None
        };

        Some(Self {
            mean,
            standard_deviation,
        })
    }
}

///
/// Formula computing the mean of a cell range.
///
pub fn mean_formula(range: &str) -> String {
    format!("AVERAGE({range})")
}

///
/// Formula computing the sample standard deviation of a cell range.
///
pub fn standard_deviation_formula(range: &str) -> String {
    format!("STDEV({range})")
}
