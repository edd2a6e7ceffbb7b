use clipshelf::clamp;
use clipshelf::shortcuts::{match_shortcut, ShortcutAction, FLAG_COMMAND, FLAG_CONTROL, KC_DIGITS, KC_V};
use clipshelf::AppEvent;

#[test]
fn clamp_keeps_inner_value() {
    assert_eq!(clamp(10.0, 0.0, 20.0), 10.0);
}

#[test]
fn clamp_limits_low_and_high() {
    assert_eq!(clamp(-1.0, 0.0, 1.0), 0.0);
    assert_eq!(clamp(2.0, 0.0, 1.0), 1.0);
}

#[test]
fn every_digit_maps_to_its_slot() {
    for (slot, &kc) in KC_DIGITS.iter().enumerate() {
        assert_eq!(
            match_shortcut(kc, FLAG_CONTROL),
            Some(ShortcutAction::PasteIndex(slot))
        );
    }
}

#[test]
fn command_v_is_left_alone() {
    // The synthetic paste must pass through the app's own tap.
    assert_eq!(match_shortcut(KC_V, FLAG_COMMAND), None);
    assert_eq!(match_shortcut(KC_V, FLAG_COMMAND | FLAG_CONTROL), None);
}

#[test]
fn control_v_toggles_popup() {
    let action = match_shortcut(KC_V, FLAG_CONTROL).unwrap();
    assert_eq!(action.to_event(), AppEvent::TogglePopup);
}
