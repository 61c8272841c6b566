use crate::storage::KeyValueSlot;
use crate::tui::app::{App, InputMode};
use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

/// Handle mouse events. Only the map in Normal mode reacts to the mouse.
pub fn handle_mouse<S: KeyValueSlot>(app: &mut App<S>, mouse_event: MouseEvent) {
    if app.input_mode != InputMode::Normal {
        return;
    }

    match mouse_event.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            app.handle_map_click(mouse_event.column, mouse_event.row);
        }
        MouseEventKind::ScrollUp => app.map_mut().zoom_in(),
        MouseEventKind::ScrollDown => app.map_mut().zoom_out(),
        _ => {}
    }
}
