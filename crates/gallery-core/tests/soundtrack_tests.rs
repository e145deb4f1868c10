// Host-side tests for the background music start rule.

use gallery_core::SoundtrackCue;

#[test]
fn gesture_after_decode_starts_immediately() {
    let mut cue = SoundtrackCue::default();
    assert!(!cue.on_decoded());
    assert!(!cue.is_playing());
    assert!(cue.on_gesture());
    assert!(cue.is_playing());
}

#[test]
fn gesture_before_decode_defers_start() {
    let mut cue = SoundtrackCue::default();
    assert!(!cue.on_gesture());
    assert!(!cue.is_playing());
    assert!(cue.on_decoded());
    assert!(cue.is_playing());
}

#[test]
fn starts_only_once() {
    let mut cue = SoundtrackCue::default();
    cue.on_decoded();
    assert!(cue.on_gesture());
    assert!(!cue.on_gesture());
    assert!(!cue.on_decoded());
}

#[test]
fn never_starts_without_decoded_track() {
    let mut cue = SoundtrackCue::default();
    for _ in 0..3 {
        assert!(!cue.on_gesture());
    }
    assert!(!cue.is_playing());
}
