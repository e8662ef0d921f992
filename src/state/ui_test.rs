use super::*;

#[test]
fn ui_state_default_theme_is_light() {
    assert_eq!(UiState::default().theme, Theme::Light);
}

#[test]
fn ui_state_default_not_editing() {
    assert_eq!(UiState::default().editing, None);
}
