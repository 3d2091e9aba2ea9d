use hifitime::{Epoch, Unit};
use rand::{rngs::SmallRng, Rng, SeedableRng};
use std::str::FromStr;

use crate::prelude::{
    Config, Coordinate, Destination, Engine, Event, HeadingSample, PositionSample, TurnDirection,
};

const LIBRARY: Coordinate = Coordinate {
    latitude: 12.9239,
    longitude: 77.5015,
};

const COURTYARD: Coordinate = Coordinate {
    latitude: 12.9233,
    longitude: 77.5011,
};

fn t0() -> Epoch {
    let _ = env_logger::builder().is_test(true).try_init();
    Epoch::from_str("2024-06-01T08:00:00 UTC").unwrap()
}

fn library_engine() -> Engine {
    let mut engine = Engine::new(Config::default());
    let event = engine.set_destination(
        Destination::new("Main Library", LIBRARY)
            .with_image_url("https://campus.example/library.jpg"),
    );
    assert!(matches!(event, Event::DestinationChanged { name } if name == "Main Library"));
    engine
}

#[test]
fn campus_walk_snapshot() {
    let mut engine = library_engine();

    let event = engine.on_position(PositionSample::new(COURTYARD, 10.0, t0()));
    let state = match event {
        Some(Event::State(state)) => state,
        other => panic!("expected a state snapshot, got {:?}", other),
    };

    assert!(
        state.distance_m > 75.0 && state.distance_m < 85.0,
        "distance = {}",
        state.distance_m
    );
    assert_eq!(state.eta.to_string(), "1 min");

    // no compass yet: heading held at 0, relative = absolute bearing (~33 deg NE)
    assert_eq!(state.compass_heading_deg, 0.0);
    assert!(
        state.relative_bearing_deg > 30.0 && state.relative_bearing_deg < 36.0,
        "relative bearing = {}",
        state.relative_bearing_deg
    );
    assert_eq!(state.turn, TurnDirection::Straight);
    assert!(state.on_track);
    assert_eq!(state.gps_accuracy_m, 10.0);
}

#[test]
fn samples_before_destination_are_ignored() {
    let t = t0();
    let mut engine = Engine::default();
    assert!(engine
        .on_position(PositionSample::new(COURTYARD, 5.0, t))
        .is_none());
    // heading filter still runs, calibration is session independent
    assert!(engine.on_heading(HeadingSample::new(90.0, t)).is_none());
    assert!(engine.smoothed_heading_deg() > 0.0);
}

#[test]
fn accuracy_gating_retains_prior_state() {
    let mut engine = library_engine();
    let t = t0();

    let first = engine.on_position(PositionSample::new(COURTYARD, 10.0, t));
    assert!(matches!(first, Some(Event::State(_))));

    // 60 m > 50 m threshold: discarded, no emission, no state change
    let noisy = PositionSample::new(
        Coordinate::new(12.9300, 77.5100),
        60.0,
        t + 1.0 * Unit::Second,
    );
    assert!(engine.on_position(noisy).is_none());

    // next heading recomputes from the retained fix, not the noisy one
    let event = engine.on_heading(HeadingSample::new(0.0, t + 2.0 * Unit::Second));
    let state = match event {
        Some(Event::State(state)) => state,
        other => panic!("expected a state snapshot, got {:?}", other),
    };
    assert!(
        state.distance_m < 85.0,
        "noisy fix leaked in: {} m",
        state.distance_m
    );
    assert_eq!(state.gps_accuracy_m, 10.0);
}

#[test]
fn arrival_is_emitted_once_then_sticky() {
    let mut engine = library_engine();
    let t = t0();

    // ~10 m out with 8 m accuracy: inside max(15, 8)
    let doorstep = Coordinate::new(12.92381, 77.50150);
    let event = engine.on_position(PositionSample::new(doorstep, 8.0, t));
    match event {
        Some(Event::Arrived(arrival)) => {
            assert_eq!(arrival.name, "Main Library");
            assert_eq!(
                arrival.image_url.as_deref(),
                Some("https://campus.example/library.jpg")
            );
        },
        other => panic!("expected arrival, got {:?}", other),
    }
    assert!(engine.has_arrived());

    // every further sample is suppressed until the next destination
    for i in 1..5 {
        let t_i = t + (i as f64) * Unit::Second;
        assert!(engine
            .on_position(PositionSample::new(doorstep, 8.0, t_i))
            .is_none());
        assert!(engine.on_heading(HeadingSample::new(10.0, t_i)).is_none());
    }

    // a new session re-arms arrival
    let event =
        engine.set_destination(Destination::new("Auditorium", Coordinate::new(12.9228, 77.5021)));
    assert!(matches!(event, Event::DestinationChanged { .. }));
    assert!(!engine.has_arrived());
    assert!(engine
        .on_position(PositionSample::new(doorstep, 8.0, t + 10.0 * Unit::Second))
        .is_some());
}

#[test]
fn accuracy_widens_arrival_radius() {
    let mut engine = library_engine();

    // ~30 m out: beyond the 15 m default radius, but a 40 m accuracy
    // fix stretches it to max(15, 40)
    let nearby = Coordinate::new(12.92363, 77.5015);
    let event = engine.on_position(PositionSample::new(nearby, 40.0, t0()));
    match event {
        Some(Event::Arrived(_)) => {},
        other => panic!("expected arrival, got {:?}", other),
    }
}

#[test]
fn compass_jitter_does_not_flicker() {
    let mut engine = library_engine();
    let t = t0();
    let mut rng = SmallRng::seed_from_u64(0x4152_4E41);

    engine.on_position(PositionSample::new(COURTYARD, 10.0, t));

    // settle the filter so the relative bearing sits mid dead-zone (~45 deg)
    for i in 0..60 {
        engine.on_heading(HeadingSample::new(
            348.0,
            t + (i as f64) * 0.2 * Unit::Second,
        ));
    }

    // jitter +/- 3 deg around the settled heading: relative bearing
    // oscillates inside the 40..50 dead zone, decision must hold
    for i in 0..100 {
        let raw = 348.0 + rng.random_range(-3.0..3.0);
        let raw = if raw >= 360.0 { raw - 360.0 } else { raw };
        let t_i = t + (60.0 + i as f64) * 0.2 * Unit::Second;
        match engine.on_heading(HeadingSample::new(raw, t_i)) {
            Some(Event::State(state)) => {
                assert_eq!(
                    state.turn,
                    TurnDirection::Straight,
                    "flicker at relative bearing {}",
                    state.relative_bearing_deg
                );
            },
            other => panic!("expected a state snapshot, got {:?}", other),
        }
    }
}

#[test]
fn turn_right_then_back_on_track() {
    let mut engine = library_engine();
    let t = t0();

    engine.on_position(PositionSample::new(COURTYARD, 10.0, t));

    // face west: destination bearing ~33, relative swings above 50
    let mut last = None;
    for i in 0..80 {
        last = engine.on_heading(HeadingSample::new(
            270.0,
            t + (i as f64) * 0.1 * Unit::Second,
        ));
    }
    match last {
        Some(Event::State(state)) => {
            assert_eq!(state.turn, TurnDirection::Right);
            assert!(!state.on_track);
        },
        other => panic!("expected a state snapshot, got {:?}", other),
    }

    // swing back towards the destination bearing: relative drops
    // below 40 and the decision resolves to straight
    let mut last = None;
    for i in 0..80 {
        last = engine.on_heading(HeadingSample::new(
            30.0,
            t + (8.0 + i as f64 * 0.1) * Unit::Second,
        ));
    }
    match last {
        Some(Event::State(state)) => {
            assert_eq!(state.turn, TurnDirection::Straight);
            assert!(state.on_track);
        },
        other => panic!("expected a state snapshot, got {:?}", other),
    }
}

#[test]
fn replay_merges_feeds_in_epoch_order() {
    let mut engine = library_engine();
    let t = t0();

    let step = |secs: f64| t + secs * Unit::Second;

    // walk towards the library, arriving on the last fix
    let positions = vec![
        PositionSample::new(Coordinate::new(12.9233, 77.5011), 10.0, step(0.0)),
        PositionSample::new(Coordinate::new(12.9235, 77.5012), 10.0, step(2.0)),
        PositionSample::new(Coordinate::new(12.9237, 77.5013), 10.0, step(4.0)),
        PositionSample::new(Coordinate::new(12.92385, 77.50145), 10.0, step(6.0)),
    ];
    let headings = vec![
        HeadingSample::new(30.0, step(1.0)),
        HeadingSample::new(32.0, step(3.0)),
        HeadingSample::new(33.0, step(5.0)),
    ];

    let events = engine.run(positions.into_iter(), headings.into_iter());

    // 6 snapshots (4 fixes + 3 headings, minus the arrival fix), then arrival
    assert_eq!(events.len(), 7);
    match events.last() {
        Some(Event::Arrived(arrival)) => assert_eq!(arrival.name, "Main Library"),
        other => panic!("expected trailing arrival, got {:?}", other),
    }
    for event in &events[..6] {
        assert!(matches!(event, Event::State(_)));
    }

    // distance narrows along the walk (not asserted per-sample,
    // GPS noise legitimately causes small increases)
    let first = match &events[0] {
        Event::State(state) => state.distance_m,
        _ => unreachable!(),
    };
    let last = match &events[5] {
        Event::State(state) => state.distance_m,
        _ => unreachable!(),
    };
    assert!(last < first, "{} m -> {} m", first, last);
}

#[test]
fn degraded_compass_replay() {
    let mut engine = library_engine();

    let positions = vec![PositionSample::new(COURTYARD, 10.0, t0())];
    let events = engine.run(positions.into_iter(), Vec::<HeadingSample>::new().into_iter());

    assert_eq!(events.len(), 1);
    match &events[0] {
        Event::State(state) => {
            assert_eq!(state.compass_heading_deg, 0.0);
            // relative bearing degrades to the absolute bearing
            assert!(state.relative_bearing_deg > 30.0 && state.relative_bearing_deg < 36.0);
        },
        other => panic!("expected a state snapshot, got {:?}", other),
    }
}

#[test]
fn recalibration_keeps_session_state() {
    let mut engine = library_engine();
    let t = t0();

    engine.on_position(PositionSample::new(COURTYARD, 10.0, t));
    for i in 0..60 {
        engine.on_heading(HeadingSample::new(
            270.0,
            t + (i as f64) * 0.1 * Unit::Second,
        ));
    }
    assert!(engine.smoothed_heading_deg() > 100.0);

    engine.recalibrate();
    assert_eq!(engine.smoothed_heading_deg(), 0.0);
    assert!(!engine.has_arrived());

    // next heading keeps navigating from the reset calibration
    let event = engine.on_heading(HeadingSample::new(0.0, t + 10.0 * Unit::Second));
    assert!(matches!(event, Some(Event::State(_))));
}
