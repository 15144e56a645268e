//! UI events - messages from UI layer to App layer

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::router::AppRoute;

/// Events generated from user input in the UI layer
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    // Navigation
    /// Open the n-th sidebar entry (0-based)
    NavigateIndex(usize),
    OpenPathInput,
    PathChar(char),
    PathBackspace,
    SubmitPath,
    CancelPathInput,
    /// Re-mount the current page
    Reload,

    // Shell
    ToggleTheme,
    ToggleSidebar,

    // Login form
    OpenLogin,
    CloseLogin,
    LoginChar(char),
    LoginBackspace,
    LoginNextField,
    SubmitLogin,
    Logout,

    // Profile page
    EditProfile,
    CancelEdit,
    SaveProfile,
    NextField,
    PrevField,
    SelectNext,
    SelectPrev,

    // Input editing
    StartEditing,
    StopEditing,
    CharInput(char),
    Backspace,
    CursorLeft,
    CursorRight,

    // Popups
    ToggleHelp,
    CloseHelp,

    // System
    Quit,
}

/// Input mode
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum InputMode {
    #[default]
    Normal,
    Editing,
}

/// Everything key mapping depends on
#[derive(Clone, Copy, Debug, Default)]
pub struct KeyContext {
    pub route: AppRoute,
    pub input_mode: InputMode,
    pub is_auth: bool,
    pub profile_readonly: bool,
    pub field_is_select: bool,
    pub show_help: bool,
    pub show_login: bool,
    pub show_path_input: bool,
}

/// Convert a key event to a UiEvent based on current UI context
pub fn key_to_ui_event(key: KeyEvent, ctx: KeyContext) -> Option<UiEvent> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        if let KeyCode::Char('c') = key.code {
            return Some(UiEvent::Quit);
        }
        return None;
    }

    // Popups first
    if ctx.show_help {
        return Some(UiEvent::CloseHelp);
    }

    if ctx.show_login {
        return match key.code {
            KeyCode::Esc => Some(UiEvent::CloseLogin),
            KeyCode::Enter => Some(UiEvent::SubmitLogin),
            KeyCode::Tab | KeyCode::BackTab => Some(UiEvent::LoginNextField),
            KeyCode::Backspace => Some(UiEvent::LoginBackspace),
            KeyCode::Char(c) => Some(UiEvent::LoginChar(c)),
            _ => None,
        };
    }

    if ctx.show_path_input {
        return match key.code {
            KeyCode::Esc => Some(UiEvent::CancelPathInput),
            KeyCode::Enter => Some(UiEvent::SubmitPath),
            KeyCode::Backspace => Some(UiEvent::PathBackspace),
            KeyCode::Char(c) => Some(UiEvent::PathChar(c)),
            _ => None,
        };
    }

    if ctx.input_mode == InputMode::Editing {
        return match key.code {
            KeyCode::Esc | KeyCode::Enter => Some(UiEvent::StopEditing),
            KeyCode::Left => Some(UiEvent::CursorLeft),
            KeyCode::Right => Some(UiEvent::CursorRight),
            KeyCode::Backspace => Some(UiEvent::Backspace),
            KeyCode::Char(c) => Some(UiEvent::CharInput(c)),
            _ => None,
        };
    }

    if ctx.route == AppRoute::Profile {
        if let Some(event) = profile_page_keys(key, ctx) {
            return Some(event);
        }
    }

    match key.code {
        KeyCode::Char('q') => Some(UiEvent::Quit),
        KeyCode::Char('?') => Some(UiEvent::ToggleHelp),
        KeyCode::Char('t') => Some(UiEvent::ToggleTheme),
        KeyCode::Char('b') => Some(UiEvent::ToggleSidebar),
        KeyCode::Char('g') => Some(UiEvent::OpenPathInput),
        KeyCode::Char('r') => Some(UiEvent::Reload),
        KeyCode::Char('l') if !ctx.is_auth => Some(UiEvent::OpenLogin),
        KeyCode::Char('o') if ctx.is_auth => Some(UiEvent::Logout),
        KeyCode::Char(c @ '1'..='9') => {
            let index = c.to_digit(10).map(|d| d as usize - 1)?;
            Some(UiEvent::NavigateIndex(index))
        }
        _ => None,
    }
}

/// Keys that only mean something on the profile page
fn profile_page_keys(key: KeyEvent, ctx: KeyContext) -> Option<UiEvent> {
    if ctx.profile_readonly {
        return match key.code {
            KeyCode::Char('e') => Some(UiEvent::EditProfile),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Char('s') => Some(UiEvent::SaveProfile),
        KeyCode::Char('x') | KeyCode::Esc => Some(UiEvent::CancelEdit),
        KeyCode::Down | KeyCode::Tab => Some(UiEvent::NextField),
        KeyCode::Up | KeyCode::BackTab => Some(UiEvent::PrevField),
        KeyCode::Enter | KeyCode::Char('e') => {
            if ctx.field_is_select {
                Some(UiEvent::SelectNext)
            } else {
                Some(UiEvent::StartEditing)
            }
        }
        KeyCode::Right if ctx.field_is_select => Some(UiEvent::SelectNext),
        KeyCode::Left if ctx.field_is_select => Some(UiEvent::SelectPrev),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_digits_navigate_sidebar() {
        let event = key_to_ui_event(press(KeyCode::Char('2')), KeyContext::default());
        assert_eq!(event, Some(UiEvent::NavigateIndex(1)));
    }

    #[test]
    fn test_login_and_logout_depend_on_auth() {
        let anon = KeyContext::default();
        assert_eq!(key_to_ui_event(press(KeyCode::Char('l')), anon), Some(UiEvent::OpenLogin));
        assert_eq!(key_to_ui_event(press(KeyCode::Char('o')), anon), None);

        let authed = KeyContext { is_auth: true, ..anon };
        assert_eq!(key_to_ui_event(press(KeyCode::Char('o')), authed), Some(UiEvent::Logout));
    }

    #[test]
    fn test_popups_capture_typing() {
        let ctx = KeyContext {
            show_login: true,
            ..KeyContext::default()
        };
        assert_eq!(key_to_ui_event(press(KeyCode::Char('q')), ctx), Some(UiEvent::LoginChar('q')));

        let ctx = KeyContext {
            show_path_input: true,
            ..KeyContext::default()
        };
        assert_eq!(key_to_ui_event(press(KeyCode::Enter), ctx), Some(UiEvent::SubmitPath));
    }

    #[test]
    fn test_profile_keys_follow_readonly() {
        let readonly = KeyContext {
            route: AppRoute::Profile,
            is_auth: true,
            profile_readonly: true,
            ..KeyContext::default()
        };
        assert_eq!(key_to_ui_event(press(KeyCode::Char('e')), readonly), Some(UiEvent::EditProfile));
        assert_eq!(key_to_ui_event(press(KeyCode::Char('s')), readonly), None);

        let editable = KeyContext {
            profile_readonly: false,
            ..readonly
        };
        assert_eq!(key_to_ui_event(press(KeyCode::Char('s')), editable), Some(UiEvent::SaveProfile));
        assert_eq!(key_to_ui_event(press(KeyCode::Enter), editable), Some(UiEvent::StartEditing));

        let on_select = KeyContext {
            field_is_select: true,
            ..editable
        };
        assert_eq!(key_to_ui_event(press(KeyCode::Enter), on_select), Some(UiEvent::SelectNext));
        assert_eq!(key_to_ui_event(press(KeyCode::Left), on_select), Some(UiEvent::SelectPrev));
    }

    #[test]
    fn test_editing_mode_sends_characters() {
        let ctx = KeyContext {
            input_mode: InputMode::Editing,
            ..KeyContext::default()
        };
        assert_eq!(key_to_ui_event(press(KeyCode::Char('t')), ctx), Some(UiEvent::CharInput('t')));
        assert_eq!(key_to_ui_event(press(KeyCode::Esc), ctx), Some(UiEvent::StopEditing));
    }

    #[test]
    fn test_ctrl_c_quits_everywhere() {
        let ctx = KeyContext {
            show_login: true,
            ..KeyContext::default()
        };
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(key_to_ui_event(key, ctx), Some(UiEvent::Quit));
    }
}
