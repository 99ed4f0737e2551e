/// Exponential moving average over a sample window.
///
/// Each call seeds the filter with the window's first sample, so smoothing
/// never carries over from one window to the next.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ema {
    alpha: f32,
}

impl Ema {
    /// `alpha` is the weight of each new sample.  Values outside `(0, 1]`
    /// (including NaN) are treated as `1.0`, i.e. no smoothing.
    pub fn new(alpha: f32) -> Self {
        let alpha = if alpha > 0.0 && alpha <= 1.0 { alpha } else { 1.0 };
        Self { alpha }
    }

    #[inline]
    pub fn alpha(&self) -> f32 {
        self.alpha
    }

    /// Smoothed copy of `samples`, same length and order.
    ///
    /// Non-finite samples hold the previous value instead of entering the
    /// filter; points before the first finite sample take that sample's value.
    /// A window with no finite sample is returned unchanged.
    pub fn smooth(&self, samples: &[f32]) -> Vec<f32> {
        let Some(mut acc) = samples.iter().copied().find(|v| v.is_finite()) else {
            return samples.to_vec();
        };

        samples
            .iter()
            .map(|&x| {
                if x.is_finite() {
                    if self.alpha >= 1.0 {
                        acc = x;
                    } else {
                        // Same as alpha*x + (1-alpha)*acc, but exact for constant input.
                        acc += self.alpha * (x - acc);
                    }
                }
                acc
            })
            .collect()
    }

    /// Smoothed samples truncated toward zero, ready to plot.
    pub fn smooth_points(&self, samples: &[f32]) -> Vec<i32> {
        self.smooth(samples).into_iter().map(|v| v as i32).collect()
    }
}

impl Default for Ema {
    fn default() -> Self {
        Self::new(0.02)
    }
}
