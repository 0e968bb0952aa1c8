use super::*;

fn state(phrases: &[&str]) -> TypingState {
    TypingState::new(phrases.iter().map(|p| (*p).to_owned()).collect(), TypingTimings::default())
}

fn frame(text: &str, delay_ms: u32) -> TypingFrame {
    TypingFrame { text: text.into(), delay_ms }
}

#[test]
fn types_holds_deletes_and_pauses() {
    let mut typing = state(&["Web", "Rust"]);
    let frames = (0..6).map(|_| typing.tick()).collect::<Vec<_>>();
    assert_eq!(
        frames,
        vec![
            frame("W", 100),
            frame("We", 100),
            frame("Web", 2000),
            frame("We", 50),
            frame("W", 50),
            frame("", 500),
        ]
    );
    assert_eq!(typing.phrase_index, 1);
    assert!(!typing.deleting);
    assert_eq!(typing.tick(), frame("R", 100));
}

#[test]
fn wraps_back_to_first_phrase() {
    let mut typing = state(&["ab", "c"]);
    // "ab": 2 typed + 2 deleted, "c": 1 typed + 1 deleted.
    for _ in 0..6 {
        typing.tick();
    }
    assert_eq!(typing.phrase_index, 0);
    assert_eq!(typing.tick(), frame("a", 100));
}

#[test]
fn single_character_phrase_holds_immediately() {
    let mut typing = state(&["x"]);
    assert_eq!(typing.tick(), frame("x", 2000));
    assert!(typing.deleting);
    assert_eq!(typing.tick(), frame("", 500));
    assert_eq!(typing.phrase_index, 0);
}

#[test]
fn counts_unicode_scalars_not_bytes() {
    let mut typing = state(&["né"]);
    assert_eq!(typing.tick(), frame("n", 100));
    assert_eq!(typing.tick(), frame("né", 2000));
}

#[test]
fn empty_phrase_does_not_stall() {
    let mut typing = state(&["", "a"]);
    assert_eq!(typing.tick(), frame("", 2000));
    assert_eq!(typing.tick(), frame("", 500));
    assert_eq!(typing.tick(), frame("a", 2000));
}

#[test]
fn no_phrases_yields_blank_frames() {
    let mut typing = state(&[]);
    assert_eq!(typing.tick(), frame("", 500));
    assert_eq!(typing.tick(), frame("", 500));
}

#[test]
fn custom_timings_are_used() {
    let timings = TypingTimings { type_ms: 7, delete_ms: 3, hold_ms: 11, gap_ms: 5 };
    let mut typing = TypingState::new(vec!["ab".into()], timings);
    let delays = (0..4).map(|_| typing.tick().delay_ms).collect::<Vec<_>>();
    assert_eq!(delays, vec![7, 11, 3, 5]);
}
