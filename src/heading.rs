//! Compass low-pass filter
use crate::coords::{wrap_180, wrap_360};

/// One-pole low-pass filter over compass headings.
/// Differences are taken along the shortest angular path,
/// so the 0/360 boundary never produces a jump through 180.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeadingFilter {
    /// Filtered heading [ddeg], 0 until the first sample
    smoothed_deg: f64,
}

impl HeadingFilter {
    /// Current filtered heading [ddeg] in [0, 360).
    /// 0 when no heading was ever received (degraded compass mode).
    pub fn smoothed_deg(&self) -> f64 {
        self.smoothed_deg
    }
    /// Folds one raw heading [ddeg] in with given smoothing factor.
    /// Returns the new filtered heading.
    pub fn update(&mut self, raw_deg: f64, alpha: f64) -> f64 {
        let diff = wrap_180(raw_deg - self.smoothed_deg);
        self.smoothed_deg = wrap_360(self.smoothed_deg + diff * alpha);
        self.smoothed_deg
    }
    /// User-triggered compass reset, filtered heading returns to 0.
    pub fn recalibrate(&mut self) {
        self.smoothed_deg = 0.0;
    }
}
