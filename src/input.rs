use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Quit,
    SelectUp,
    SelectDown,
    Toggle,     // Enter/Space: mount or unmount the selected entry
    Refresh,    // r: force a live-table re-read
    ToggleList, // configured key: hide / show the mount list
    CycleTheme,
    ShowHelp,
    JumpTop,    // g: jump to first entry
    JumpBottom, // G: jump to last entry
    None,
}

/// `list_shortcut` is the user-configured visibility key (None = disabled).
/// It is checked first so it can shadow a fixed binding.
pub fn handle_key(key: KeyEvent, list_shortcut: Option<char>) -> Action {
    if let (KeyCode::Char(c), Some(s)) = (key.code, list_shortcut) {
        if c == s && key.modifiers.is_empty() {
            return Action::ToggleList;
        }
    }

    match (key.code, key.modifiers) {
        (KeyCode::Char('q'), _)
        | (KeyCode::Esc, _)
        | (KeyCode::Char('c'), KeyModifiers::CONTROL) => Action::Quit,

        // Navigation — arrow keys and vim jk
        (KeyCode::Up,   _) | (KeyCode::Char('k'), _) => Action::SelectUp,
        (KeyCode::Down, _) | (KeyCode::Char('j'), _) => Action::SelectDown,

        (KeyCode::Enter, _) | (KeyCode::Char(' '), _) => Action::Toggle,

        (KeyCode::Char('r'), _) => Action::Refresh,
        (KeyCode::Char('t'), _) => Action::CycleTheme,
        (KeyCode::Char('?'), _)
        | (KeyCode::F(1), _)    => Action::ShowHelp,

        // Jump to first / last
        (KeyCode::Char('g'), _) | (KeyCode::Home, _) => Action::JumpTop,
        (KeyCode::Char('G'), _) | (KeyCode::End,  _) => Action::JumpBottom,

        _ => Action::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn fixed_bindings_map() {
        assert_eq!(handle_key(key(KeyCode::Char('q')), None), Action::Quit);
        assert_eq!(handle_key(key(KeyCode::Up), None), Action::SelectUp);
        assert_eq!(handle_key(key(KeyCode::Char('j')), None), Action::SelectDown);
        assert_eq!(handle_key(key(KeyCode::Enter), None), Action::Toggle);
        assert_eq!(handle_key(key(KeyCode::Char('r')), None), Action::Refresh);
        assert_eq!(handle_key(key(KeyCode::Char('z')), None), Action::None);
    }

    #[test]
    fn configured_shortcut_toggles_list() {
        assert_eq!(handle_key(key(KeyCode::Char('m')), Some('m')), Action::ToggleList);
        // Disabled shortcut: 'm' falls through to no binding.
        assert_eq!(handle_key(key(KeyCode::Char('m')), None), Action::None);
    }

    #[test]
    fn shortcut_shadows_fixed_binding() {
        // A user binding the visibility toggle to 'r' takes it over.
        assert_eq!(handle_key(key(KeyCode::Char('r')), Some('r')), Action::ToggleList);
    }
}
