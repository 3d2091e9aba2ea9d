//! Engine configuration
#[cfg(feature = "serde")]
use serde::Deserialize;

#[cfg(feature = "serde")]
fn default_accuracy_threshold() -> f64 {
    Config::DEFAULT_ACCURACY_THRESHOLD_M
}

#[cfg(feature = "serde")]
fn default_arrival_threshold() -> f64 {
    Config::DEFAULT_ARRIVAL_THRESHOLD_M
}

#[cfg(feature = "serde")]
fn default_smoothing_factor() -> f64 {
    Config::DEFAULT_SMOOTHING_FACTOR
}

#[cfg(feature = "serde")]
fn default_straight_threshold() -> f64 {
    Config::DEFAULT_STRAIGHT_THRESHOLD_DEG
}

#[cfg(feature = "serde")]
fn default_turn_threshold() -> f64 {
    Config::DEFAULT_TURN_THRESHOLD_DEG
}

#[cfg(feature = "serde")]
fn default_walking_speed() -> f64 {
    Config::DEFAULT_WALKING_SPEED_M_PER_MIN
}

/// Engine tuning. All values are latched for the duration of a
/// navigation session.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Deserialize))]
pub struct Config {
    /// Position fixes with a worse reported horizontal accuracy [m]
    /// are discarded (default: 50 m)
    #[cfg_attr(feature = "serde", serde(default = "default_accuracy_threshold"))]
    pub accuracy_threshold_m: f64,
    /// Arrival triggers within max(this, current accuracy) meters
    /// of the destination (default: 15 m)
    #[cfg_attr(feature = "serde", serde(default = "default_arrival_threshold"))]
    pub arrival_threshold_m: f64,
    /// Compass low-pass smoothing factor, 0 < alpha <= 1
    /// (default: 0.3)
    #[cfg_attr(feature = "serde", serde(default = "default_smoothing_factor"))]
    pub smoothing_factor: f64,
    /// Relative bearing [ddeg] below which an active turn resolves
    /// back to straight (default: 40)
    #[cfg_attr(feature = "serde", serde(default = "default_straight_threshold"))]
    pub straight_threshold_deg: f64,
    /// Relative bearing [ddeg] above which a turn is announced
    /// (default: 50). Must exceed `straight_threshold_deg`, the gap
    /// forms the hysteresis dead zone.
    #[cfg_attr(feature = "serde", serde(default = "default_turn_threshold"))]
    pub turn_threshold_deg: f64,
    /// Assumed walking speed [m/min] for ETA estimation (default: 80)
    #[cfg_attr(feature = "serde", serde(default = "default_walking_speed"))]
    pub walking_speed_m_per_min: f64,
}

impl Config {
    pub const DEFAULT_ACCURACY_THRESHOLD_M: f64 = 50.0;
    pub const DEFAULT_ARRIVAL_THRESHOLD_M: f64 = 15.0;
    pub const DEFAULT_SMOOTHING_FACTOR: f64 = 0.3;
    pub const DEFAULT_STRAIGHT_THRESHOLD_DEG: f64 = 40.0;
    pub const DEFAULT_TURN_THRESHOLD_DEG: f64 = 50.0;
    pub const DEFAULT_WALKING_SPEED_M_PER_MIN: f64 = 80.0;
}

impl Default for Config {
    fn default() -> Self {
        Self {
            accuracy_threshold_m: Self::DEFAULT_ACCURACY_THRESHOLD_M,
            arrival_threshold_m: Self::DEFAULT_ARRIVAL_THRESHOLD_M,
            smoothing_factor: Self::DEFAULT_SMOOTHING_FACTOR,
            straight_threshold_deg: Self::DEFAULT_STRAIGHT_THRESHOLD_DEG,
            turn_threshold_deg: Self::DEFAULT_TURN_THRESHOLD_DEG,
            walking_speed_m_per_min: Self::DEFAULT_WALKING_SPEED_M_PER_MIN,
        }
    }
}
