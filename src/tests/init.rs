use rstest::*;

use crate::{
    prelude::{
        Config, Duration, EphemerisTable, Epoch, Error, GnssSatellites, Refill, State, Unit,
        Vector3,
    },
    tests::{daily_source, daily_sources, init_logger, reference_epoch},
};

#[fixture]
fn t0() -> Epoch {
    reference_epoch()
}

#[rstest]
#[case(0)]
#[case(1)]
#[case(2)]
#[case(8)]
fn invalid_window_size(t0: Epoch, #[case] window_size: usize) {
    init_logger();

    let cfg = Config::default().with_window_size(window_size);

    match GnssSatellites::new(cfg, daily_sources(1, 2), t0) {
        Err(e) => assert_eq!(e, Error::InvalidWindowSize(window_size)),
        Ok(_) => panic!("window size {} should be rejected", window_size),
    }
}

#[rstest]
fn no_source(t0: Epoch) {
    init_logger();

    match GnssSatellites::<EphemerisTable>::new(Config::default(), Vec::new(), t0) {
        Err(e) => assert_eq!(e, Error::NoEphemerisSource),
        Ok(_) => panic!("should have failed"),
    }
}

#[rstest]
fn empty_source(t0: Epoch) {
    init_logger();

    let sources = vec![daily_source(t0, 2), EphemerisTable::new(Vec::new())];

    match GnssSatellites::new(Config::default(), sources, t0) {
        Err(e) => assert_eq!(e, Error::EmptyEphemerisSource(1)),
        Ok(_) => panic!("should have failed"),
    }
}

#[rstest]
fn unsorted_sources(t0: Epoch) {
    init_logger();

    let sources = vec![
        daily_source(t0 + 1.0 * Unit::Day, 2),
        daily_source(t0, 2),
    ];

    match GnssSatellites::new(Config::default(), sources, t0) {
        Err(e) => assert_eq!(e, Error::UnsortedSources(1)),
        Ok(_) => panic!("should have failed"),
    }
}

#[rstest]
fn missing_satellites(t0: Epoch) {
    init_logger();

    let sources = vec![
        daily_source(t0, 3),
        daily_source(t0 + 1.0 * Unit::Day, 2),
    ];

    match GnssSatellites::new(Config::default(), sources, t0) {
        Err(e) => assert_eq!(e, Error::MissingSatellites(1)),
        Ok(_) => panic!("should have failed"),
    }
}

#[rstest]
#[case(-1.0 * Unit::Second)]
#[case(1.0 * Unit::Day)]
#[case(10.0 * Unit::Day)]
fn start_not_covered(t0: Epoch, #[case] offset: Duration) {
    init_logger();

    let start = t0 + offset;

    match GnssSatellites::new(Config::default(), daily_sources(1, 2), start) {
        Err(e) => assert_eq!(e, Error::TimeRangeMismatch(start)),
        Ok(_) => panic!("{} is not covered", start),
    }
}

#[rstest]
fn disabled(t0: Epoch) {
    init_logger();

    let cfg = Config::default().with_enabled(false);

    // sources are not even checked
    let mut satellites = GnssSatellites::<EphemerisTable>::new(cfg, Vec::new(), t0)
        .unwrap_or_else(|e| panic!("failed to build: {}", e));

    assert_eq!(satellites.state(), State::Uninitialized);
    assert_eq!(satellites.tracked_satellites(), 0);
    assert_eq!(satellites.update(t0 + 1.0 * Unit::Hour), Refill::Disabled);

    assert_eq!(satellites.position(0, None), Vector3::zeros());
    assert_eq!(satellites.clock_offset(0, None), 0.0);
    assert!(satellites.try_position(0, Some(t0)).is_none());
}

#[rstest]
fn seeding(t0: Epoch) {
    init_logger();

    let satellites = GnssSatellites::new(Config::default(), daily_sources(1, 2), t0)
        .unwrap_or_else(|e| panic!("failed to build: {}", e));

    assert_eq!(satellites.state(), State::Steady);
    assert_eq!(satellites.tracked_satellites(), 2);
    assert_eq!(satellites.reference_epoch(), t0);
    assert_eq!(satellites.current_epoch(), t0);
    assert_eq!(satellites.source_index(), 0);
    assert_eq!(satellites.epoch_index(), 9);

    for sat in 0..2 {
        assert!(satellites.is_tracked(sat));
        assert_eq!(
            satellites.window_time_offsets(sat),
            Some((0..9).map(|k| k as f64 * 900.0).collect::<Vec<_>>()),
        );
    }

    assert!(!satellites.is_tracked(2));
    assert!(satellites.satellite(2).is_none());
    assert!(satellites.window_time_offsets(2).is_none());

    let g02 = satellites
        .satellite(1)
        .unwrap_or_else(|| panic!("G02 should be tracked"));
    assert_eq!(g02.prn, 2);
}

#[rstest]
#[case(20.0 * 900.0 + 100.0, 16, 25)]
#[case(20.0 * 900.0 + 500.0, 17, 26)]
#[case(2.0 * 900.0, 0, 9)]
#[case(4.0 * 900.0 + 449.0, 0, 9)]
fn centered_window(
    t0: Epoch,
    #[case] start_offset_s: f64,
    #[case] anchor: usize,
    #[case] epoch_index: usize,
) {
    init_logger();

    let start = t0 + start_offset_s * Unit::Second;

    let satellites = GnssSatellites::new(Config::default(), daily_sources(1, 1), start)
        .unwrap_or_else(|e| panic!("failed to build: {}", e));

    assert_eq!(satellites.state(), State::Steady);
    assert_eq!(
        satellites.reference_epoch(),
        t0 + anchor as f64 * 15.0 * Unit::Minute
    );
    assert_eq!(satellites.epoch_index(), epoch_index);
}

#[rstest]
fn covering_source(t0: Epoch) {
    init_logger();

    let day = 1.0 * Unit::Day;

    for (start, reference) in [
        (t0 + 23.0 * Unit::Hour, t0 + day - 8.0 * 15.0 * Unit::Minute),
        (t0 + day, t0 + day),
        (t0 + day + 1.0 * Unit::Hour, t0 + day),
    ] {
        let satellites = GnssSatellites::new(Config::default(), daily_sources(2, 1), start)
            .unwrap_or_else(|e| panic!("failed to build: {}", e));

        assert_eq!(satellites.state(), State::Steady, "start={}", start);
        assert_eq!(satellites.reference_epoch(), reference, "start={}", start);

        // seeding always ends up in the 2nd product
        assert_eq!(satellites.source_index(), 1, "start={}", start);
    }
}
