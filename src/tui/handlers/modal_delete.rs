use crate::storage::KeyValueSlot;
use crate::tui::app::{App, Message};
use crossterm::event::{KeyCode, KeyEvent};

/// Handle DeleteConfirm mode key events
/// Returns true if the application should quit
pub fn handle_delete_confirm<S: KeyValueSlot>(app: &mut App<S>, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Esc | KeyCode::Char('n') | KeyCode::Char('N') => {
            app.cancel_delete();
        }
        KeyCode::Enter | KeyCode::Char('y') | KeyCode::Char('Y') => {
            if let Err(e) = app.confirm_delete() {
                app.message = Some(Message::Error(format!("Delete failed: {}", e)));
            }
        }
        _ => {}
    }

    false
}
