use crate::storage::KeyValueSlot;
use crate::tui::app::App;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Handle Normal mode key events
/// Returns true if the application should quit
pub fn handle_normal_mode<S: KeyValueSlot>(app: &mut App<S>, key: KeyEvent) -> bool {
    // Shift moves five cells at a time
    let step = if key.modifiers.contains(KeyModifiers::SHIFT) {
        5
    } else {
        1
    };

    match key.code {
        KeyCode::Char('q') => return true,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => return true,
        KeyCode::Char('?') => app.show_help = !app.show_help,
        KeyCode::Esc => {
            if app.show_help {
                app.show_help = false;
            } else {
                app.map_mut().deselect();
            }
        }
        // Ctrl+arrows pan the map without moving the cursor
        KeyCode::Up if key.modifiers.contains(KeyModifiers::CONTROL) => app.map_mut().pan(1, 0),
        KeyCode::Down if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.map_mut().pan(-1, 0)
        }
        KeyCode::Left if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.map_mut().pan(0, -1)
        }
        KeyCode::Right if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.map_mut().pan(0, 1)
        }
        KeyCode::Up | KeyCode::Char('k') => app.map_mut().move_cursor(-step, 0),
        KeyCode::Down | KeyCode::Char('j') => app.map_mut().move_cursor(step, 0),
        KeyCode::Left | KeyCode::Char('h') => app.map_mut().move_cursor(0, -step),
        KeyCode::Right | KeyCode::Char('l') => app.map_mut().move_cursor(0, step),
        KeyCode::Char('K') => app.map_mut().move_cursor(-5, 0),
        KeyCode::Char('J') => app.map_mut().move_cursor(5, 0),
        KeyCode::Char('H') => app.map_mut().move_cursor(0, -5),
        KeyCode::Char('L') => app.map_mut().move_cursor(0, 5),
        KeyCode::Char('+') | KeyCode::Char('=') => app.map_mut().zoom_in(),
        KeyCode::Char('-') | KeyCode::Char('_') => app.map_mut().zoom_out(),
        KeyCode::Enter | KeyCode::Char('a') => app.open_form_at_cursor(),
        KeyCode::Tab | KeyCode::Char('n') => app.map_mut().select_next(),
        KeyCode::BackTab | KeyCode::Char('N') => app.map_mut().select_prev(),
        KeyCode::Char('f') => app.map_mut().focus_selected(),
        KeyCode::Char('d') | KeyCode::Delete => app.request_delete_selected(),
        KeyCode::Char('r') => app.refresh(),
        _ => {}
    }

    false
}
