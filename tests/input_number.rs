// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! End-to-end event sequences against the public API, driven the way a
//! UI shell would drive them: forward keystrokes with a tick, poll the
//! control on later ticks, feed committed values back through
//! `set_value`.

use rational_input::{NumberInput, Rational, Trigger, DEBOUNCE_INTERVAL};

fn ratio(numer: i64, denom: i64) -> Rational {
    Rational::ratio(numer, denom).unwrap()
}

/// A control set up like the reference fixture: value 10, maximum 100.
fn fixture() -> NumberInput {
    let mut control = NumberInput::new(Rational::from(10));
    control.set_maximum(Some(Rational::from(100)));
    control
}

#[test]
fn typing_a_mixed_number_commits_once_after_the_quiet_interval() {
    let mut control = fixture();
    let mut now = 0;
    let mut committed = Vec::new();

    // The user types "1 1/3" one keystroke at a time. Intermediate
    // states flip between valid ("1", "1 ") and invalid ("1 1",
    // "1 1/").
    for prefix in &["1", "1 ", "1 1", "1 1/", "1 1/3"] {
        control.on_edit(prefix, now);
        now += 50;
        committed.extend(control.poll(now));
    }
    // Nothing settles during the burst.
    assert_eq!(committed, vec![]);

    // One quiet interval after the last keystroke, exactly one commit.
    let last_edit = now - 50;
    committed.extend(control.poll(last_edit + DEBOUNCE_INTERVAL));
    committed.extend(control.poll(last_edit + DEBOUNCE_INTERVAL + 100));
    assert_eq!(committed, vec![ratio(4, 3)]);
    // Live edits keep the literal text.
    assert_eq!(control.buffer(), "1 1/3");
}

#[test]
fn ending_a_burst_on_garbage_suppresses_the_whole_burst() {
    let mut control = fixture();
    control.on_edit("4/3", 0);
    control.on_edit("abc", 100);
    assert_eq!(control.poll(100 + DEBOUNCE_INTERVAL), None);
    assert_eq!(control.poll(u64::MAX), None);
}

#[test]
fn blur_and_enter_commit_and_simplify_immediately() {
    for trigger in &[Trigger::Blur, Trigger::Enter] {
        let mut control = fixture();
        assert_eq!(control.change("1 1/3", *trigger, 0), Some(ratio(4, 3)));
        assert_eq!(control.buffer(), "4/3");
    }
}

#[test]
fn invalid_text_never_emits() {
    let mut control = fixture();
    for text in &["", "   ", "abc", "asdf", "1/0"] {
        control.on_edit(text, 0);
        assert_eq!(control.poll(u64::MAX), None);
        assert_eq!(control.on_blur(text, 0), None);
        assert_eq!(control.on_enter(text, 0), None);
    }
    // The buffer still shows the last committed value.
    assert_eq!(control.buffer(), "10");
}

#[test]
fn stepper_round_trip_through_the_consumer() {
    let mut control = fixture();

    let stepped = control.increase().unwrap();
    assert_eq!(stepped, Rational::from(11));
    // The consumer echoes the emission back, like a host binding would.
    control.set_value(stepped);
    assert_eq!(control.buffer(), "11");

    let stepped = control.decrease().unwrap();
    assert_eq!(stepped, Rational::from(10));
    control.set_value(stepped);

    // Fractional values snap to ceiling/floor before stepping by one.
    control.set_value(ratio(3, 2));
    assert_eq!(control.increase(), Some(Rational::from(2)));
    assert_eq!(control.decrease(), Some(Rational::from(1)));
}

#[test]
fn steppers_clamp_silently_at_the_bounds() {
    let mut control = fixture();
    control.set_value(Rational::from(100));
    assert_eq!(control.increase(), None);

    control.set_minimum(Some(Rational::from(0)));
    control.set_value(Rational::from(0));
    assert_eq!(control.decrease(), None);
}

#[test]
fn external_value_update_overwrites_an_invalid_buffer() {
    let mut control = fixture();
    control.on_edit("asdf", 0);
    control.set_value(Rational::from(3));
    assert_eq!(control.buffer(), "3");
}

#[test]
fn external_value_update_leaves_a_queued_commit_alone() {
    let mut control = fixture();
    control.on_edit("4/3", 0);
    control.set_value(Rational::from(50));
    assert_eq!(control.poll(DEBOUNCE_INTERVAL), Some(ratio(4, 3)));
}

#[test]
fn bound_updates_apply_to_the_next_evaluation() {
    let mut control = NumberInput::new(Rational::from(10));
    assert_eq!(control.on_enter("500", 0), Some(Rational::from(500)));
    control.set_maximum(Some(Rational::from(100)));
    assert_eq!(control.on_enter("500", 0), None);
    assert_eq!(control.on_enter("100", 0), Some(Rational::from(100)));
}

#[test]
fn boundary_values_commit_exactly() {
    let mut control = NumberInput::new(Rational::from(0));
    control.set_minimum(Some(ratio(1, 2)));
    control.set_maximum(Some(ratio(3, 2)));
    // Exactly on either bound is in bounds.
    assert_eq!(control.on_enter("1/2", 0), Some(ratio(1, 2)));
    assert_eq!(control.on_enter("3/2", 0), Some(ratio(3, 2)));
    assert_eq!(control.on_enter("0.5", 0), Some(ratio(1, 2)));
    // Just past the bound is not.
    assert_eq!(control.on_enter("499/1000", 0), None);
    assert_eq!(control.on_enter("1501/1000", 0), None);
}

#[test]
fn predicates_track_the_committed_value() {
    let mut control = fixture();
    control.set_minimum(Some(Rational::from(0)));
    assert!(!control.is_minimum());
    assert!(!control.is_maximum());

    control.set_value(Rational::from(0));
    assert!(control.is_minimum());

    control.set_value(Rational::from(100));
    assert!(control.is_maximum());

    // Garbage typed into the buffer never disturbs the predicates.
    control.on_edit("err", 0);
    assert!(control.is_maximum());

    control.set_minimum(None);
    control.set_maximum(None);
    assert!(!control.is_minimum());
    assert!(!control.is_maximum());
}

#[test]
fn repeated_stepping_stays_exact() {
    // A thousand round trips through the consumer stay on the integer
    // lattice; no representation drift accumulates.
    let mut control = NumberInput::new(Rational::from(0));
    for _ in 0..1000 {
        let stepped = control.increase().unwrap();
        control.set_value(stepped);
    }
    assert_eq!(control.value(), &Rational::from(1000));
    assert_eq!(control.buffer(), "1000");
}
