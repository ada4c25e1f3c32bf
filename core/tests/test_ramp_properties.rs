// core/tests/test_ramp_properties.rs
use woz_mrc_core::ramp::ramp_segments;
use woz_mrc_core::{assemble, convert_ramp_to_mrc, Segment};

fn total(segs: &[Segment]) -> f64 {
    segs.iter().map(|s| s.duration_min).sum()
}

#[test]
fn durations_sum_to_parsed_total() {
    let cases = [
        ("9min @ 85rpm, from 88 to 95% FTP", 9.0),
        ("8min from 50 to 80% FTP", 8.0),
        ("8min 10sec from 50 to 80% FTP", 8.0 + 10.0 / 60.0),
        ("45sec from 100 to 130% FTP", 0.75),
        ("12min from 95 to 60% FTP", 12.0),
        ("3min 20sec @ 95rpm, from 60 to 61% FTP", 3.0 + 20.0 / 60.0),
    ];
    for step in [0.25, 0.5, 1.0] {
        for (line, expected) in cases {
            let segs = convert_ramp_to_mrc(line, step).unwrap();
            assert!(
                (total(&segs) - expected).abs() < 1e-9,
                "{line} @ {step}: {} != {expected}",
                total(&segs)
            );
            assert!(segs.iter().all(|s| s.duration_min >= 0.0), "{line} @ {step}");
        }
    }
}

#[test]
fn endpoints_are_exact() {
    for (start, end) in [(50.0, 80.0), (88.0, 95.0), (95.0, 60.0), (40.0, 41.0)] {
        for duration in [1.0, 7.5, 8.0 + 10.0 / 60.0, 20.0] {
            let segs = ramp_segments(duration, start, end, 0.5);
            let pts = assemble(&segs).unwrap();
            assert_eq!(pts.first().unwrap().power_pct, start);
            assert_eq!(pts.last().unwrap().power_pct, end);
        }
    }
}

#[test]
fn intermediate_powers_stay_between_endpoints() {
    for (start, end) in [(50.0, 80.0), (95.0, 60.0)] {
        let segs = ramp_segments(10.0, start, end, 0.5);
        let (lo, hi) = if start < end { (start, end) } else { (end, start) };
        assert!(segs.iter().all(|s| s.power_pct >= lo && s.power_pct <= hi));
    }
}

#[test]
fn flat_ramp_is_one_full_segment() {
    for duration in [0.5, 3.0, 9.25] {
        let segs = ramp_segments(duration, 70.0, 70.0, 0.5);
        assert_eq!(segs, vec![Segment::new(duration, 70.0)]);
    }
}
