//! Exponential parameter ramps.

/// A value that moves from `start` to `end` along `start × (end/start)^p`
/// as normalized progress `p` goes from 0 to 1.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExpRamp {
    pub start: f64,
    pub end: f64,
}

impl ExpRamp {
    pub fn new(start: f64, end: f64) -> Self {
        ExpRamp { start, end }
    }

    /// Value at normalized progress `p`.
    ///
    /// A flat ramp returns `start` unchanged, so `0 → 0` yields silence
    /// instead of `0 × NaN`.
    pub fn at(&self, p: f64) -> f64 {
        if self.start == self.end {
            return self.start;
        }
        self.start * (self.end / self.start).powf(p)
    }
}
