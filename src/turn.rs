//! Turn decision hysteresis
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Turn instruction towards the destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TurnDirection {
    /// Destination roughly ahead
    #[default]
    Straight,
    /// Turn left (counter clockwise)
    Left,
    /// Turn right (clockwise)
    Right,
}

impl std::fmt::Display for TurnDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Straight => write!(f, "straight"),
            Self::Left => write!(f, "left"),
            Self::Right => write!(f, "right"),
        }
    }
}

impl TurnDirection {
    /// Mealy transition on the relative bearing [ddeg, 0..360).
    /// Entering a turn requires crossing `turn_threshold_deg`, leaving it
    /// only requires dropping below `straight_threshold_deg` (or its wrap
    /// mirror at `360 - straight_threshold_deg`). The dead zone between
    /// the two thresholds prevents flicker when the bearing sits near
    /// a boundary.
    pub fn transition(
        self,
        relative_bearing_deg: f64,
        straight_threshold_deg: f64,
        turn_threshold_deg: f64,
    ) -> Self {
        let rb = relative_bearing_deg;
        let wrap_edge = 360.0 - straight_threshold_deg;
        match self {
            Self::Straight => {
                if rb > turn_threshold_deg && rb < 180.0 {
                    Self::Right
                } else if rb > 180.0 && rb < 360.0 - turn_threshold_deg {
                    Self::Left
                } else {
                    Self::Straight
                }
            },
            Self::Right => {
                if rb <= straight_threshold_deg || rb >= wrap_edge {
                    Self::Straight
                } else if rb > 180.0 {
                    Self::Left
                } else {
                    Self::Right
                }
            },
            Self::Left => {
                if rb <= straight_threshold_deg || rb >= wrap_edge {
                    Self::Straight
                } else if rb > straight_threshold_deg && rb < 180.0 {
                    Self::Right
                } else {
                    Self::Left
                }
            },
        }
    }
}
