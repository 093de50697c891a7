use crate::config::{DEFAULT_PARTICLE_COUNT, MIN_PARTICLE_COUNT};
use crate::rain::RainFieldEvent;
use crate::test_harness::TestStorm;

// ====================================================================
// Rain field rebuilds
// ====================================================================

#[test]
fn test_startup_builds_default_field() {
    let mut storm = TestStorm::new();
    storm.frame(None);
    assert_eq!(storm.rain().field().len(), DEFAULT_PARTICLE_COUNT as usize);
    assert_eq!(
        storm.rain_events(),
        &[RainFieldEvent::Rebuilt {
            count: DEFAULT_PARTICLE_COUNT,
            generation: 1
        }]
    );
}

#[test]
fn test_unchanged_count_never_rebuilds() {
    let mut storm = TestStorm::new();
    storm.frames(120, None);
    assert_eq!(storm.rain_events().len(), 1);
    assert_eq!(storm.rain().generation(), 1);
}

#[test]
fn test_count_change_rebuilds_wholesale() {
    let mut storm = TestStorm::new();
    storm.frame(None);
    storm.params_mut().rain.particle_count = 5_000;
    storm.frames(3, None);
    assert_eq!(storm.rain().field().len(), 5_000);
    assert_eq!(storm.rain().generation(), 2);
    assert_eq!(
        storm.rain_events().last(),
        Some(&RainFieldEvent::Rebuilt {
            count: 5_000,
            generation: 2
        })
    );
}

#[test]
fn test_zero_count_is_clamped_before_rebuild() {
    let mut storm = TestStorm::new();
    storm.frame(None);
    storm.params_mut().rain.particle_count = 0;
    storm.frame(None);
    assert_eq!(storm.rain().field().len(), MIN_PARTICLE_COUNT as usize);
    // No intermediate empty field was ever installed.
    assert_eq!(storm.rain_events().len(), 2);
}

#[test]
fn test_disabled_rain_keeps_field() {
    let mut storm = TestStorm::new();
    storm.frame(None);
    storm.params_mut().rain.enabled = false;
    storm.frames(30, None);
    assert_eq!(storm.rain().field().len(), DEFAULT_PARTICLE_COUNT as usize);
    assert_eq!(storm.rain().generation(), 1);
}
