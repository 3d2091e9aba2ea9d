//! Navigation state snapshots and session events
use hifitime::Duration;

use crate::turn::TurnDirection;

#[cfg(feature = "serde")]
use serde::Serialize;

/// Estimated walking time, rounded up to whole minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Eta {
    /// Whole minutes, rounded up
    minutes: u64,
}

impl Eta {
    /// Builds new [Eta] from a distance [m] and a walking speed [m/min].
    pub fn new(distance_m: f64, walking_speed_m_per_min: f64) -> Self {
        let minutes = (distance_m / walking_speed_m_per_min).ceil().max(0.0);
        Self {
            minutes: minutes as u64,
        }
    }
    /// ETA in whole minutes, rounded up. 0 only at zero distance.
    pub fn minutes(&self) -> u64 {
        self.minutes
    }
    /// ETA as a [Duration]
    pub fn duration(&self) -> Duration {
        Duration::from_seconds(self.minutes as f64 * 60.0)
    }
}

impl std::fmt::Display for Eta {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        if self.minutes < 1 {
            write!(f, "< 1 min")
        } else {
            write!(f, "{} min", self.minutes)
        }
    }
}

/// Immutable navigation snapshot, produced fresh on every accepted
/// sample. Distance is not monotonic: GPS noise can cause small
/// increases between snapshots.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct NavigationState {
    /// Great-circle distance to destination [m]
    pub distance_m: f64,
    /// Estimated walking time
    pub eta: Eta,
    /// Hysteretic turn instruction
    pub turn: TurnDirection,
    /// Clockwise angle [ddeg, 0..360) from the filtered heading
    /// to the destination bearing
    pub relative_bearing_deg: f64,
    /// True when no turn is required
    pub on_track: bool,
    /// Horizontal accuracy of the latest accepted fix [m]
    pub gps_accuracy_m: f64,
    /// Filtered compass heading [ddeg, 0..360)
    pub compass_heading_deg: f64,
}

/// Emitted exactly once per session when the destination is reached.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Arrival {
    /// Destination display name
    pub name: String,
    /// Optional picture for the arrival overlay
    pub image_url: Option<String>,
}

/// Session events, published in production order.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum Event {
    /// A new destination was latched, consumers should clear
    /// prior overlays
    DestinationChanged {
        /// New destination display name
        name: String,
    },
    /// Fresh navigation snapshot
    State(NavigationState),
    /// Destination reached, last event of the session
    Arrived(Arrival),
}
