use crate::storage::KeyValueSlot;
use crate::tui::app::App;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Handle memory form key events
/// Returns true if the application should quit
pub fn handle_form_modal<S: KeyValueSlot>(app: &mut App<S>, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Esc => app.cancel_form(),
        // Alt+Enter keeps multi-line stories possible
        KeyCode::Enter if key.modifiers.contains(KeyModifiers::ALT) => {
            app.form_mut().push_char('\n');
        }
        KeyCode::Enter => app.submit_form(),
        KeyCode::Tab | KeyCode::Down => app.form_mut().focus_next(),
        KeyCode::BackTab | KeyCode::Up => app.form_mut().focus_prev(),
        KeyCode::Char(c) => app.form_mut().push_char(c),
        KeyCode::Backspace => app.form_mut().pop_char(),
        _ => {}
    }

    false
}
