//! Monte Carlo estimate with its standard error.

/// Result of a Monte Carlo pricing run.
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::mc::PricingResult;
///
/// let result = PricingResult::from_samples(&[1.0, 2.0, 3.0, 4.0]);
/// assert_eq!(result.price, 2.5);
/// assert_eq!(result.n_paths, 4);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PricingResult {
    /// Estimated present value.
    pub price: f64,
    /// Standard error of the estimate, `s / √n` with the unbiased sample
    /// deviation `s`. Zero for a single path.
    pub std_error: f64,
    /// Number of paths behind the estimate.
    pub n_paths: usize,
}

impl PricingResult {
    /// Estimate from per-path discounted values.
    ///
    /// An empty slice gives a NaN price; callers never pass one because
    /// path counts are validated to be at least 1.
    pub fn from_samples(samples: &[f64]) -> Self {
        let n = samples.len();
        let n_f = n as f64;
        let mean = samples.iter().sum::<f64>() / n_f;

        let std_error = if n > 1 {
            let sum_sq: f64 = samples.iter().map(|x| (x - mean) * (x - mean)).sum();
            (sum_sq / (n_f - 1.0)).sqrt() / n_f.sqrt()
        } else {
            0.0
        };

        Self {
            price: mean,
            std_error,
            n_paths: n,
        }
    }

    /// 95% confidence interval `price ± 1.96·std_error`.
    pub fn confidence_interval_95(&self) -> (f64, f64) {
        let half_width = 1.96 * self.std_error;
        (self.price - half_width, self.price + half_width)
    }
}
