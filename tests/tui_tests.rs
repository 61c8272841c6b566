use atlas::map::{MapCanvas, MapView};
use atlas::model::{Coordinate, Memory};
use atlas::storage::{InMemorySlot, MemoryStore};
use atlas::tui::{App, InputMode, Message};
use ratatui::layout::Rect;

fn create_test_app(slot: &InMemorySlot) -> App<&InMemorySlot> {
    let mut app = App::new(
        MemoryStore::new(slot),
        MapView::new(Coordinate { lat: 0.0, lng: 0.0 }, 1),
    );
    // One cell per degree
    app.map_mut().set_area(Rect::new(0, 0, 360, 180));
    app
}

fn seed(slot: &InMemorySlot, id: i64, lat: f64, lng: f64, title: &str) {
    MemoryStore::new(slot)
        .append(Memory::new(id, Coordinate { lat, lng }).with_title(title))
        .unwrap();
}

#[test]
fn test_initial_state() {
    let slot = InMemorySlot::new();
    seed(&slot, 1, 10.0, 10.0, "One");
    seed(&slot, 2, 20.0, 20.0, "Two");

    let app = create_test_app(&slot);
    assert_eq!(app.input_mode, InputMode::Normal);
    assert!(!app.show_help);
    assert_eq!(app.map().pins().len(), 2);
    assert!(app.selected_pin().is_none());
    assert_eq!(
        app.message,
        Some(Message::Info("2 memories loaded".to_string()))
    );
}

#[test]
fn test_open_form_at_cursor() {
    let slot = InMemorySlot::new();
    let mut app = create_test_app(&slot);

    app.open_form_at_cursor();
    assert_eq!(app.input_mode, InputMode::Form);
    assert_eq!(app.form().pending(), Some(app.map().cursor()));
}

#[test]
fn test_form_submit_pins_and_selects() {
    let slot = InMemorySlot::new();
    let mut app = create_test_app(&slot);

    app.open_form_at_cursor();
    for c in "Home".chars() {
        app.form_mut().push_char(c);
    }
    app.submit_form();

    assert_eq!(app.input_mode, InputMode::Normal);
    assert_eq!(app.map().pins().len(), 1);
    assert_eq!(
        app.selected_pin().map(|p| p.popup.title.as_str()),
        Some("Home")
    );
    assert_eq!(MemoryStore::new(&slot).list().len(), 1);
}

#[test]
fn test_form_submit_invalid_date_stays_open() {
    let slot = InMemorySlot::new();
    let mut app = create_test_app(&slot);

    app.open_form_at_cursor();
    app.form_mut().fields.date = "31/12/2024".to_string();
    app.submit_form();

    assert_eq!(app.input_mode, InputMode::Form);
    assert!(matches!(app.message, Some(Message::Error(_))));
    assert!(app.map().pins().is_empty());
}

#[test]
fn test_form_cancel() {
    let slot = InMemorySlot::new();
    let mut app = create_test_app(&slot);

    app.open_form_at_cursor();
    app.form_mut().push_char('x');
    app.cancel_form();

    assert_eq!(app.input_mode, InputMode::Normal);
    assert!(!app.form().is_open());
    assert!(MemoryStore::new(&slot).list().is_empty());
}

#[test]
fn test_click_on_surface_opens_form_there() {
    let slot = InMemorySlot::new();
    let mut app = create_test_app(&slot);

    // Column 180 / row 90 is the cell just south-east of (0, 0)
    app.handle_map_click(180, 90);
    assert_eq!(app.input_mode, InputMode::Form);
    assert_eq!(
        app.form().pending(),
        Some(Coordinate {
            lat: -0.5,
            lng: 0.5
        })
    );
}

#[test]
fn test_click_on_pin_selects_it() {
    let slot = InMemorySlot::new();
    seed(&slot, 1, -0.5, 0.5, "Clicked");
    let mut app = create_test_app(&slot);

    app.handle_map_click(180, 90);
    assert_eq!(app.input_mode, InputMode::Normal);
    assert_eq!(app.selected_pin().map(|p| p.memory_id()), Some(1));
}

#[test]
fn test_delete_flow() {
    let slot = InMemorySlot::new();
    seed(&slot, 1, 10.0, 10.0, "Keep");
    seed(&slot, 2, 20.0, 20.0, "Drop");
    let mut app = create_test_app(&slot);

    // Nothing selected: no prompt
    app.request_delete_selected();
    assert_eq!(app.input_mode, InputMode::Normal);

    app.map_mut().select_prev();
    app.request_delete_selected();
    assert_eq!(app.input_mode, InputMode::DeleteConfirm);
    assert_eq!(app.pending_delete, Some(2));

    app.confirm_delete().unwrap();
    assert_eq!(app.input_mode, InputMode::Normal);
    assert!(app.pending_delete.is_none());
    assert_eq!(app.map().pins().len(), 1);
    assert_eq!(app.map().pins()[0].memory_id(), 1);
    assert!(app.selected_pin().is_none());

    let remaining = MemoryStore::new(&slot).list();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].title, "Keep");
}

#[test]
fn test_delete_cancel() {
    let slot = InMemorySlot::new();
    seed(&slot, 1, 10.0, 10.0, "Keep");
    let mut app = create_test_app(&slot);

    app.map_mut().select_next();
    app.request_delete_selected();
    app.cancel_delete();

    assert_eq!(app.input_mode, InputMode::Normal);
    assert!(app.pending_delete.is_none());
    assert_eq!(app.map().pins().len(), 1);
    assert_eq!(MemoryStore::new(&slot).list().len(), 1);
}

#[test]
fn test_delete_preserves_view() {
    let slot = InMemorySlot::new();
    seed(&slot, 1, 10.0, 10.0, "Somewhere");
    let mut app = create_test_app(&slot);

    app.map_mut().select_next();
    app.map_mut().focus_selected();
    app.map_mut().zoom_in();
    let view = *app.map().view();

    app.request_delete_selected();
    app.confirm_delete().unwrap();
    assert_eq!(*app.map().view(), view);
}

#[test]
fn test_refresh_reloads_store() {
    let slot = InMemorySlot::new();
    let mut app = create_test_app(&slot);
    assert!(app.map().pins().is_empty());

    seed(&slot, 5, 1.0, 1.0, "Added elsewhere");
    app.refresh();

    assert_eq!(app.map().pins().len(), 1);
    assert_eq!(
        app.message,
        Some(Message::Info("Reloaded 1 memories".to_string()))
    );
}

#[test]
fn test_zoom_changes_view() {
    let slot = InMemorySlot::new();
    let mut app = create_test_app(&slot);

    app.map_mut().zoom_in();
    assert_eq!(app.map().view().zoom, 2);
    app.map_mut().zoom_out();
    app.map_mut().zoom_out();
    assert_eq!(app.map().view().zoom, 1);
}
