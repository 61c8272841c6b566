//! Key and mouse handling, one module per input mode.

mod modal_delete;
mod modal_form;
mod mouse;
mod normal_mode;

pub use modal_delete::handle_delete_confirm;
pub use modal_form::handle_form_modal;
pub use mouse::handle_mouse;
pub use normal_mode::handle_normal_mode;

use crate::storage::KeyValueSlot;
use crate::tui::app::{App, InputMode};
use crossterm::event::KeyEvent;

/// Dispatches a key press to the handler of the current mode.
/// Returns true if the application should quit.
pub fn handle_key<S: KeyValueSlot>(app: &mut App<S>, key: KeyEvent) -> bool {
    match app.input_mode {
        InputMode::Normal => handle_normal_mode(app, key),
        InputMode::Form => handle_form_modal(app, key),
        InputMode::DeleteConfirm => handle_delete_confirm(app, key),
    }
}
