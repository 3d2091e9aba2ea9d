//! Navigation engine
use log::{debug, info, warn};

use itertools::Itertools;

use crate::{
    cfg::Config,
    coords::wrap_360,
    destination::Destination,
    heading::HeadingFilter,
    sample::{HeadingIter, HeadingSample, PositionIter, PositionSample, Sample},
    state::{Arrival, Eta, Event, NavigationState},
    turn::TurnDirection,
};

/// Turn-by-turn navigation engine. Owns one session's state: the
/// latched destination, the last accepted fix, the filtered compass
/// heading and the turn hysteresis memory.
///
/// Feed it samples through [Engine::on_position] / [Engine::on_heading]
/// (synchronously, one caller at a time) or replay recorded feeds with
/// [Engine::run]. Each accepted sample produces at most one [Event].
#[derive(Debug, Clone)]
pub struct Engine {
    /// Latched tuning
    cfg: Config,
    /// Current destination, None before the first session
    destination: Option<Destination>,
    /// Last accepted fix
    fix: Option<PositionSample>,
    /// Compass filter, persists across destinations
    heading: HeadingFilter,
    /// Hysteresis memory
    last_turn: TurnDirection,
    /// Sticky until the next destination
    arrived: bool,
}

impl Engine {
    /// Builds new [Engine] with given [Config] latched for all
    /// subsequent sessions.
    pub fn new(cfg: Config) -> Self {
        Self {
            cfg,
            destination: None,
            fix: None,
            heading: HeadingFilter::default(),
            last_turn: TurnDirection::Straight,
            arrived: false,
        }
    }
    /// Latched [Config]
    pub fn cfg(&self) -> &Config {
        &self.cfg
    }
    /// Current destination
    pub fn destination(&self) -> Option<&Destination> {
        self.destination.as_ref()
    }
    /// Filtered compass heading [ddeg, 0..360)
    pub fn smoothed_heading_deg(&self) -> f64 {
        self.heading.smoothed_deg()
    }
    /// True once the active destination was reached
    pub fn has_arrived(&self) -> bool {
        self.arrived
    }
    /// Starts a new session towards given [Destination]: clears the
    /// arrival flag and the turn memory. The compass filter is left
    /// alone, its calibration carries over between destinations.
    pub fn set_destination(&mut self, destination: Destination) -> Event {
        info!("new destination \"{}\" {:?}", destination.name, destination.coordinate);
        let name = destination.name.clone();
        self.destination = Some(destination);
        self.arrived = false;
        self.last_turn = TurnDirection::Straight;
        Event::DestinationChanged {
            name,
        }
    }
    /// Ingests one position fix. Fixes are discarded while no
    /// destination is set, once arrived, and when the reported accuracy
    /// exceeds the configured threshold (noise rejection, not a fault).
    /// An accepted fix yields a fresh [NavigationState] snapshot, or the
    /// session's [Arrival].
    pub fn on_position(&mut self, sample: PositionSample) -> Option<Event> {
        if self.destination.is_none() || self.arrived {
            return None;
        }
        if sample.horizontal_accuracy_m > self.cfg.accuracy_threshold_m {
            debug!(
                "{:?} - fix discarded, accuracy {:.1} m above {:.1} m threshold",
                sample.epoch, sample.horizontal_accuracy_m, self.cfg.accuracy_threshold_m
            );
            return None;
        }
        self.fix = Some(sample);
        self.recompute()
    }
    /// Ingests one compass reading. The low-pass filter always runs
    /// (calibration is session independent); a state snapshot is only
    /// produced while navigating with a known fix.
    pub fn on_heading(&mut self, sample: HeadingSample) -> Option<Event> {
        self.heading.update(sample.true_heading_deg, self.cfg.smoothing_factor);
        if self.destination.is_none() || self.arrived {
            return None;
        }
        self.recompute()
    }
    /// User-triggered compass reset. Turn memory and arrival state
    /// are untouched.
    pub fn recalibrate(&mut self) {
        info!("compass recalibration");
        self.heading.recalibrate();
    }
    /// Drains both feeds and replays them in Epoch order, collecting
    /// every produced [Event] in order. Intended for recorded traces
    /// and simulated walks; live integrations call the per-sample
    /// methods instead.
    pub fn run<P: PositionIter, H: HeadingIter>(
        &mut self,
        mut positions: P,
        mut headings: H,
    ) -> Vec<Event> {
        let mut fixes = Vec::new();
        while let Some(fix) = positions.next() {
            fixes.push(Sample::Position(fix));
        }

        let mut compass = Vec::new();
        while let Some(heading) = headings.next() {
            compass.push(Sample::Heading(heading));
        }

        if compass.is_empty() {
            warn!("no compass feed, headings held at 0 (degraded mode)");
        }

        let mut events = Vec::new();
        let merged = fixes
            .into_iter()
            .merge_by(compass, |a, b| a.epoch() <= b.epoch());
        for sample in merged {
            let event = match sample {
                Sample::Position(fix) => self.on_position(fix),
                Sample::Heading(heading) => self.on_heading(heading),
            };
            if let Some(event) = event {
                events.push(event);
            }
        }
        events
    }
    /// Derives the next snapshot from the stored fix and filtered
    /// heading. Requires an active, unarrived session.
    fn recompute(&mut self) -> Option<Event> {
        let fix = self.fix?;
        let destination = self.destination.as_ref()?;

        let distance_m = fix.coordinate.distance_m(&destination.coordinate);
        let bearing_deg = fix.coordinate.bearing_deg(&destination.coordinate);

        let compass_heading_deg = self.heading.smoothed_deg();
        let relative_bearing_deg = wrap_360(bearing_deg - compass_heading_deg);

        let turn = self.last_turn.transition(
            relative_bearing_deg,
            self.cfg.straight_threshold_deg,
            self.cfg.turn_threshold_deg,
        );
        self.last_turn = turn;

        // GPS uncertainty widens the arrival radius
        let arrival_radius_m = self.cfg.arrival_threshold_m.max(fix.horizontal_accuracy_m);
        if distance_m < arrival_radius_m {
            self.arrived = true;
            info!(
                "{:?} - arrived at \"{}\" ({:.1} m, radius {:.1} m)",
                fix.epoch, destination.name, distance_m, arrival_radius_m
            );
            return Some(Event::Arrived(Arrival {
                name: destination.name.clone(),
                image_url: destination.image_url.clone(),
            }));
        }

        debug!(
            "{:?} - {:.1} m, bearing {:.1} rel {:.1}, turn {}",
            fix.epoch, distance_m, bearing_deg, relative_bearing_deg, turn
        );

        Some(Event::State(NavigationState {
            distance_m,
            eta: Eta::new(distance_m, self.cfg.walking_speed_m_per_min),
            turn,
            relative_bearing_deg,
            on_track: turn == TurnDirection::Straight,
            gps_accuracy_m: fix.horizontal_accuracy_m,
            compass_heading_deg,
        }))
    }
}

impl Default for Engine {
    /// Builds [Engine] with default [Config]
    fn default() -> Self {
        Self::new(Config::default())
    }
}
