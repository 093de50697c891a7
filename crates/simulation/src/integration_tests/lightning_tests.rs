use crate::lightning::LightningPreset;
use crate::storm_params::StormParams;
use crate::test_harness::TestStorm;

// ====================================================================
// Lightning process over the frame schedule
// ====================================================================

#[test]
fn test_no_strike_before_frequency_floor() {
    let mut storm = TestStorm::with_seed(1);
    storm.frames(179, None); // just under 3 seconds
    assert!(storm.strikes().is_empty(), "strikes: {:?}", storm.strikes());
    assert_eq!(storm.params().lightning.intensity, 0.0);
}

#[test]
fn test_a_minute_of_storm_flashes_repeatedly() {
    let mut storm = TestStorm::with_seed(2);
    storm.run_seconds(60);
    let strikes = storm.strikes();
    assert!(strikes.len() >= 3, "only {} strikes in a minute", strikes.len());
    let floor = storm.params().lightning.frequency_floor;
    for pair in strikes.windows(2) {
        assert!(pair[1].time - pair[0].time > floor);
    }
    for s in strikes {
        assert!((3.0..=8.0).contains(&s.intensity), "intensity {}", s.intensity);
    }
}

#[test]
fn test_same_seed_same_storm() {
    let mut a = TestStorm::with_seed(99);
    let mut b = TestStorm::with_seed(99);
    a.run_seconds(30);
    b.run_seconds(30);
    assert_eq!(a.strikes(), b.strikes());
    assert_eq!(a.params().lightning, b.params().lightning);
}

#[test]
fn test_intensity_stays_valid_every_frame() {
    let mut params = StormParams::default();
    params.lightning.preset = LightningPreset::Dramatic;
    params.lightning.frequency_floor = 0.5;
    let mut storm = TestStorm::with_seed(4).with_params(params);
    let mut last_flash = 0.0;
    for _ in 0..1800 {
        storm.frame(None);
        let l = &storm.params().lightning;
        assert!(l.intensity >= 0.0 && !l.intensity.is_nan());
        assert!(l.intensity <= 50.0);
        assert!(l.last_flash_time >= last_flash);
        last_flash = l.last_flash_time;
    }
}

#[test]
fn test_disabling_mid_flash_settles_to_zero() {
    let mut storm = TestStorm::with_seed(5);
    // Run until the first strike.
    for _ in 0..(60 * 60) {
        storm.frame(None);
        if !storm.strikes().is_empty() {
            break;
        }
    }
    assert!(storm.params().lightning.is_flashing(), "expected a strike within a minute");

    storm.params_mut().lightning.enabled = false;
    let strikes_before = storm.strikes().len();
    storm.run_seconds(10);
    assert_eq!(storm.params().lightning.intensity, 0.0);
    assert_eq!(storm.strikes().len(), strikes_before);
}
