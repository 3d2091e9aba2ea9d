use hifitime::Epoch;

use crate::coords::Coordinate;

/// Implement this trait to provide position fixes.
pub trait PositionIter {
    /// Provide position fixes in chronological order.
    /// Tie this to None when the feed is exhausted.
    fn next(&mut self) -> Option<PositionSample>;
}

/// Implement this trait to provide compass headings.
/// Heading and position feeds run at independent cadences,
/// the engine tolerates any interleaving.
pub trait HeadingIter {
    /// Provide compass headings in chronological order.
    /// Tie this to None when the feed is exhausted,
    /// or if no compass is available (degraded mode, heading held at 0).
    fn next(&mut self) -> Option<HeadingSample>;
}

/// One GNSS/GPS position fix.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PositionSample {
    /// Reported position
    pub coordinate: Coordinate,
    /// Reported horizontal accuracy (1 sigma) [m]
    pub horizontal_accuracy_m: f64,
    /// Sampling instant
    pub epoch: Epoch,
}

impl PositionSample {
    /// Builds new [PositionSample] from a fix and its reported
    /// horizontal accuracy [m].
    pub fn new(coordinate: Coordinate, horizontal_accuracy_m: f64, epoch: Epoch) -> Self {
        Self {
            coordinate,
            horizontal_accuracy_m,
            epoch,
        }
    }
}

/// One compass reading.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeadingSample {
    /// True heading [ddeg], 0 = North, clockwise
    pub true_heading_deg: f64,
    /// Sampling instant
    pub epoch: Epoch,
}

impl HeadingSample {
    /// Builds new [HeadingSample] from a true heading [ddeg].
    pub fn new(true_heading_deg: f64, epoch: Epoch) -> Self {
        Self {
            true_heading_deg,
            epoch,
        }
    }
}

/// Either sample kind, used when replaying both feeds in Epoch order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Sample {
    /// Position fix
    Position(PositionSample),
    /// Compass reading
    Heading(HeadingSample),
}

impl Sample {
    /// Sampling instant
    pub fn epoch(&self) -> Epoch {
        match self {
            Self::Position(fix) => fix.epoch,
            Self::Heading(heading) => heading.epoch,
        }
    }
}

impl PositionIter for std::vec::IntoIter<PositionSample> {
    fn next(&mut self) -> Option<PositionSample> {
        Iterator::next(self)
    }
}

impl HeadingIter for std::vec::IntoIter<HeadingSample> {
    fn next(&mut self) -> Option<HeadingSample> {
        Iterator::next(self)
    }
}
