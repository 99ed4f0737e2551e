use std::collections::VecDeque;

/// Rolling window of the most recent samples, oldest first.
#[derive(Debug, Clone)]
pub struct SampleHistory {
    samples:  VecDeque<f32>,
    capacity: usize,
}

impl SampleHistory {
    /// A zero capacity is bumped to one.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            samples: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Push a new sample, evicting the oldest if at capacity.
    pub fn push(&mut self, value: f32) {
        if self.samples.len() == self.capacity {
            self.samples.pop_front();
        }
        self.samples.push_back(value);
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Smallest and largest sample, ignoring NaN.  `None` when empty.
    pub fn bounds(&self) -> Option<(f32, f32)> {
        if self.samples.is_empty() {
            return None;
        }
        Some(self.samples.iter().fold(
            (f32::INFINITY, f32::NEG_INFINITY),
            |(lo, hi), &v| (lo.min(v), hi.max(v)),
        ))
    }

    /// Average of all samples in the window.
    pub fn average(&self) -> f32 {
        if self.samples.is_empty() {
            return 0.0;
        }
        self.samples.iter().sum::<f32>() / self.samples.len() as f32
    }

    /// The window as one contiguous slice, oldest first.
    pub fn as_slice(&mut self) -> &[f32] {
        self.samples.make_contiguous()
    }
}

impl Extend<f32> for SampleHistory {
    fn extend<I: IntoIterator<Item = f32>>(&mut self, iter: I) {
        for v in iter {
            self.push(v);
        }
    }
}
