//! End-to-end dispatch through the public API with the recording injector.

use minikey_core::{default_buttons, VirtualKey};
use minikey_overlay::application::dispatch_combination::{
    CombinationDispatcher, DispatchSettings, KeyDirection, UnmatchedReleasePolicy,
};
use minikey_overlay::infrastructure::input_injection::mock::RecordingInjector;

use KeyDirection::{Down, Up};
use VirtualKey::*;

fn dispatcher() -> CombinationDispatcher<RecordingInjector> {
    CombinationDispatcher::new(RecordingInjector::new())
}

#[test]
fn test_every_stock_button_sends_a_balanced_sequence() {
    for button in default_buttons() {
        // Arrange
        let d = dispatcher();

        // Act
        let outcome = d.send_down(&button.key_combination);

        // Assert: n downs then n ups, mirrored
        let seq = d.injector().sequence();
        let n = button.combination().len();
        assert_eq!(seq.len(), 2 * n, "{}", button.display_text);
        for i in 0..n {
            assert_eq!(seq[i].1, Down);
            assert_eq!(seq[2 * n - 1 - i], (seq[i].0, Up));
        }
        assert!(outcome.is_clean());
        assert!(d.injector().pressed_keys().is_empty());
    }
}

#[test]
fn test_click_leaves_nothing_pressed_in_simulated_keyboard() {
    let d = dispatcher();
    d.send_down("LControlKey+LShiftKey+Escape");
    assert!(d.injector().pressed_keys().is_empty());
    assert!(!d.is_pressed(LeftControl));
}

#[test]
fn test_hold_is_visible_through_is_pressed() {
    // Arrange
    let mut d = dispatcher();

    // Act
    d.send_down_only("LShiftKey");

    // Assert
    assert!(d.is_pressed(LeftShift));
    d.send_up_only("LShiftKey");
    assert!(!d.is_pressed(LeftShift));
}

#[test]
fn test_extended_flag_reaches_the_injector() {
    let d = dispatcher();
    d.send_down("RAltKey+Delete+A");
    let extended: Vec<_> = d
        .injector()
        .events()
        .iter()
        .filter(|e| e.direction == Down)
        .map(|e| e.extended)
        .collect();
    assert_eq!(extended, vec![true, true, false]);
}

#[test]
fn test_untranslatable_key_is_still_injected_with_scan_code_zero() {
    // Arrange
    let injector = RecordingInjector::new();
    injector.fail_translation(F5);
    let d = CombinationDispatcher::new(injector);

    // Act
    let outcome = d.send_down("F5");

    // Assert
    assert_eq!(outcome.injected, 2);
    assert!(d.injector().events().iter().all(|e| e.scan_code == 0));
}

#[test]
fn test_failed_release_leaves_key_stuck_in_os() {
    // Arrange: the first release of C fails
    let injector = RecordingInjector::new();
    injector.fail_on(C, Up);
    let mut d = CombinationDispatcher::new(injector);

    // Act
    d.send_down_only("LControlKey+C");
    let up = d.send_up_only("LControlKey+C");

    // Assert: Control was still released, C is stuck in the OS
    assert_eq!(up.failures.len(), 1);
    assert_eq!(up.injected, 1);
    assert_eq!(d.injector().pressed_keys(), vec![C]);
}

#[test]
fn test_release_all_recovers_from_unpaired_hold() {
    // Arrange
    let mut d = dispatcher();
    d.send_down_only("LControlKey+LAltKey");
    d.send_down_only("Delete");
    assert_eq!(d.held_keys(), &[LeftControl, LeftAlt, Delete]);

    // Act
    d.release_all();

    // Assert
    assert!(d.held_keys().is_empty());
    assert!(d.injector().pressed_keys().is_empty());
    let tail: Vec<_> = d.injector().sequence().into_iter().skip(3).collect();
    assert_eq!(tail, vec![(Delete, Up), (LeftAlt, Up), (LeftControl, Up)]);
}

#[test]
fn test_reject_policy_refuses_stray_release() {
    // Arrange
    let settings = DispatchSettings {
        unmatched_release: UnmatchedReleasePolicy::Reject,
        ..Default::default()
    };
    let injector = RecordingInjector::new();
    injector.set_pressed(LeftWin, true);
    let mut d = CombinationDispatcher::with_settings(injector, settings);

    // Act
    let outcome = d.send_up_only("LWinKey");

    // Assert: the physically held key is left alone
    assert!(outcome.rejected);
    assert!(d.injector().events().is_empty());
    assert!(d.is_pressed(LeftWin));
}

#[test]
fn test_unknown_tokens_do_not_reach_the_injector() {
    let mut d = CombinationDispatcher::with_settings(
        RecordingInjector::new(),
        DispatchSettings {
            report_unresolved_tokens: false,
            ..Default::default()
        },
    );
    d.send_down("Ctrl+Alt+Del");
    d.send_down_only("Win");
    d.send_up_only("Win");
    assert!(d.injector().events().is_empty());
    assert!(d.held_keys().is_empty());
}

#[test]
fn test_query_failure_reads_as_not_pressed() {
    let injector = RecordingInjector::failing();
    injector.set_pressed(A, true);
    let d = CombinationDispatcher::new(injector);
    assert!(!d.is_pressed(A));
}

#[test]
fn test_mismatched_pairing_leaves_shift_stuck() {
    // Arrange
    let mut d = dispatcher();

    // Act: press Ctrl+Shift, release only Ctrl
    d.send_down_only("LControlKey+LShiftKey");
    d.send_up_only("LControlKey");

    // Assert: the OS still sees Shift held
    assert_eq!(d.injector().pressed_keys(), vec![LeftShift]);
    assert_eq!(d.held_keys(), &[LeftShift]);
    assert!(d.is_pressed(LeftShift));
}
