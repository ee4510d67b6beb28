use flappy_bird::audio::{Cue, OneShot};

// Device-backed playback is not exercised here — only the trigger state
// machine the simulation depends on.

#[test]
fn one_shot_fires_exactly_once() {
    let mut shot = OneShot::Armed;
    assert!(shot.fire());
    assert!(!shot.fire());
    assert!(!shot.fire());
    assert_eq!(shot, OneShot::Played);
}

#[test]
fn one_shot_rearm_restores_the_trigger() {
    let mut shot = OneShot::Armed;
    assert!(shot.fire());
    shot.rearm();
    assert_eq!(shot, OneShot::Armed);
    assert!(shot.fire());
    assert!(!shot.fire());
}

#[test]
fn rearming_an_armed_trigger_is_harmless() {
    let mut shot = OneShot::Armed;
    shot.rearm();
    assert!(shot.fire());
}

#[test]
fn cue_equality() {
    assert_eq!(Cue::Flap, Cue::Flap);
    assert_ne!(Cue::Flap, Cue::Hit);
    assert_ne!(Cue::Score, Cue::Hit);
}
