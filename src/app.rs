//! Application state and core logic

use crate::config::TuiConfig;
use crate::platform::SHORTCUT_MODIFIER;
use crate::state::{AppState, Focus, FormEvent};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Rendering preferences
    pub config: TuiConfig,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance
    pub fn new(config: TuiConfig) -> Self {
        Self {
            state: AppState::default(),
            config,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn quit(&mut self) {
        self.quit = true;
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Windows reports releases too
        if key.kind == KeyEventKind::Release {
            return;
        }

        if self.state.notice.is_some() {
            self.handle_notice_key(key);
            return;
        }

        if key.modifiers.contains(SHORTCUT_MODIFIER) {
            self.handle_shortcut(key);
            return;
        }

        match key.code {
            KeyCode::Esc => self.quit(),
            KeyCode::Tab | KeyCode::Down => self.state.focus = self.state.focus.next(),
            KeyCode::BackTab | KeyCode::Up => self.state.focus = self.state.focus.prev(),
            KeyCode::Enter => match self.state.focus {
                Focus::SubmitButton => self.submit(),
                Focus::Field(_) => self.state.focus = self.state.focus.next(),
            },
            KeyCode::Backspace => self.state.edit_focused(|value| {
                value.pop();
            }),
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::ALT) => {
                self.state.edit_focused(|value| value.push(c))
            }
            _ => {}
        }
    }

    fn handle_shortcut(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('s') => self.submit(),
            KeyCode::Char('u') => self.state.edit_focused(String::clear),
            KeyCode::Char('c') => self.quit(),
            _ => {}
        }
    }

    /// While a notice is open only dismiss and quit keys do anything
    fn handle_notice_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter | KeyCode::Esc => self.state.dismiss_notice(),
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => self.quit(),
            _ => {}
        }
    }

    fn submit(&mut self) {
        if let Some(outcome) = self.state.dispatch(FormEvent::Submit) {
            tracing::debug!(?outcome, "notice shown");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{Field, FormState, SubmissionOutcome};

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn ctrl(app: &mut App, c: char) {
        app.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL));
    }

    fn type_str(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn new_app() -> App {
        App::new(TuiConfig::default())
    }

    mod editing {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_typing_fills_focused_field() {
            let mut app = new_app();
            type_str(&mut app, "a@b.c");
            assert_eq!(app.state.form.value(Field::Email), "a@b.c");
            assert!(app.state.form.is_touched(Field::Email));
            assert!(!app.state.form.is_touched(Field::Password));
        }

        #[test]
        fn test_each_keystroke_revalidates() {
            let mut app = new_app();
            type_str(&mut app, "a@b.");
            assert!(app.state.form.visible_error(Field::Email).is_some());
            type_str(&mut app, "c");
            assert!(app.state.form.visible_error(Field::Email).is_none());
        }

        #[test]
        fn test_shift_chars_are_typed() {
            let mut app = new_app();
            app.handle_key(KeyEvent::new(KeyCode::Char('A'), KeyModifiers::SHIFT));
            assert_eq!(app.state.form.value(Field::Email), "A");
        }

        #[test]
        fn test_backspace_removes_last_char() {
            let mut app = new_app();
            type_str(&mut app, "ab");
            press(&mut app, KeyCode::Backspace);
            assert_eq!(app.state.form.value(Field::Email), "a");
        }

        #[test]
        fn test_backspace_on_empty_field_does_not_touch() {
            let mut app = new_app();
            press(&mut app, KeyCode::Backspace);
            assert!(!app.state.form.is_touched(Field::Email));
            assert_eq!(app.state.form.visible_error(Field::Email), None);
        }

        #[test]
        fn test_ctrl_u_on_empty_field_does_not_touch() {
            let mut app = new_app();
            press(&mut app, KeyCode::Tab);
            ctrl(&mut app, 'u');
            assert!(!app.state.form.is_touched(Field::Password));
            assert_eq!(app.state.form.visible_error(Field::Password), None);
        }

        #[test]
        fn test_ctrl_u_clears_field() {
            let mut app = new_app();
            type_str(&mut app, "abc");
            ctrl(&mut app, 'u');
            assert_eq!(app.state.form.value(Field::Email), "");
        }

        #[test]
        fn test_typing_on_button_does_nothing() {
            let mut app = new_app();
            app.state.focus = Focus::SubmitButton;
            type_str(&mut app, "xyz");
            assert_eq!(app.state.form, FormState::default());
        }

        #[test]
        fn test_release_events_are_ignored() {
            let mut app = new_app();
            let mut key = KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE);
            key.kind = KeyEventKind::Release;
            app.handle_key(key);
            assert_eq!(app.state.form.value(Field::Email), "");
        }
    }

    mod navigation {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_tab_and_backtab() {
            let mut app = new_app();
            press(&mut app, KeyCode::Tab);
            assert_eq!(app.state.focus, Focus::Field(Field::Password));
            press(&mut app, KeyCode::BackTab);
            press(&mut app, KeyCode::BackTab);
            assert_eq!(app.state.focus, Focus::SubmitButton);
        }

        #[test]
        fn test_enter_on_field_moves_next_without_submitting() {
            let mut app = new_app();
            press(&mut app, KeyCode::Enter);
            assert_eq!(app.state.focus, Focus::Field(Field::Password));
            assert_eq!(app.state.notice, None);
            assert!(!app.state.form.is_touched(Field::Email));
        }
    }

    mod submitting {
        use super::*;
        use pretty_assertions::assert_eq;

        fn fill_valid(app: &mut App) {
            type_str(app, "a@b.com");
            press(app, KeyCode::Tab);
            type_str(app, "abcdefgh");
            press(app, KeyCode::Tab);
            type_str(app, "abcdefgh");
        }

        #[test]
        fn test_enter_on_button_submits() {
            let mut app = new_app();
            fill_valid(&mut app);
            press(&mut app, KeyCode::Tab);
            press(&mut app, KeyCode::Enter);

            assert_eq!(app.state.notice, Some(SubmissionOutcome::Accepted));
            assert_eq!(app.state.form, FormState::default());
            assert_eq!(app.state.focus, Focus::Field(Field::Email));
        }

        #[test]
        fn test_ctrl_s_submits_from_a_field() {
            let mut app = new_app();
            type_str(&mut app, "bad");
            ctrl(&mut app, 's');

            assert_eq!(app.state.notice, Some(SubmissionOutcome::Rejected));
            assert_eq!(app.state.form.value(Field::Email), "bad");
            for field in Field::ALL {
                assert!(app.state.form.visible_error(field).is_some());
            }
        }

        #[test]
        fn test_notice_swallows_keys_until_dismissed() {
            let mut app = new_app();
            ctrl(&mut app, 's');
            type_str(&mut app, "x");
            press(&mut app, KeyCode::Tab);
            assert_eq!(app.state.form.value(Field::Email), "");
            assert_eq!(app.state.focus, Focus::Field(Field::Email));

            press(&mut app, KeyCode::Esc);
            assert_eq!(app.state.notice, None);
            assert!(!app.should_quit());
        }

        #[test]
        fn test_enter_dismisses_notice() {
            let mut app = new_app();
            ctrl(&mut app, 's');
            press(&mut app, KeyCode::Enter);
            assert_eq!(app.state.notice, None);
        }
    }

    mod quitting {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_esc_quits() {
            let mut app = new_app();
            press(&mut app, KeyCode::Esc);
            assert!(app.should_quit());
        }

        #[test]
        fn test_ctrl_c_quits_even_with_notice() {
            let mut app = new_app();
            ctrl(&mut app, 's');
            ctrl(&mut app, 'c');
            assert!(app.should_quit());
        }

        #[test]
        fn test_new_app_is_running() {
            assert!(!new_app().should_quit());
        }
    }
}
