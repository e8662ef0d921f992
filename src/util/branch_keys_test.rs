use super::*;

#[test]
fn h_and_l_map_to_steps() {
    assert_eq!(branch_key_action("h", Modifiers::default(), false), Some(BranchStep::Previous));
    assert_eq!(branch_key_action("l", Modifiers::default(), false), Some(BranchStep::Next));
}

#[test]
fn other_keys_are_ignored() {
    for key in ["j", "k", "H", "L", "ArrowLeft", " "] {
        assert_eq!(branch_key_action(key, Modifiers::default(), false), None, "key {key:?}");
    }
}

#[test]
fn chorded_presses_are_ignored() {
    let chords = [
        Modifiers { ctrl: true, ..Modifiers::default() },
        Modifiers { meta: true, ..Modifiers::default() },
        Modifiers { alt: true, ..Modifiers::default() },
    ];
    for modifiers in chords {
        assert_eq!(branch_key_action("h", modifiers, false), None);
        assert_eq!(branch_key_action("l", modifiers, false), None);
    }
}

#[test]
fn keys_typed_into_editable_elements_are_ignored() {
    assert_eq!(branch_key_action("h", Modifiers::default(), true), None);
    assert_eq!(branch_key_action("l", Modifiers::default(), true), None);
}

#[test]
fn editable_tags_are_recognized() {
    for tag in ["INPUT", "TEXTAREA", "SELECT", "input", "textarea"] {
        assert!(is_editable_tag(tag), "tag {tag:?}");
    }
    for tag in ["DIV", "BUTTON", "P", ""] {
        assert!(!is_editable_tag(tag), "tag {tag:?}");
    }
}
