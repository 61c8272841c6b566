use crate::map::{MapCanvas, MapClick, MapView, Pin, PinHandle, PinLayer};
use crate::model::Coordinate;
use crate::render::Popup;
use ratatui::layout::Rect;

/// Map attribution for the built-in world outline.
pub const TERMINAL_ATTRIBUTION: &str = "World outline: Natural Earth";

/// The terminal world map: a [`MapCanvas`] drawn with ratatui's canvas.
///
/// Tracks a keyboard cursor, the selected pin and the screen area the map
/// occupied on the last draw, which is what mouse clicks are resolved
/// against.
#[derive(Debug, Clone)]
pub struct TerminalMap {
    view: MapView,
    layer: PinLayer,
    cursor: Coordinate,
    selected: Option<PinHandle>,
    area: Rect,
}

impl TerminalMap {
    pub fn new(view: MapView) -> Self {
        Self {
            cursor: view.center,
            view,
            layer: PinLayer::new(),
            selected: None,
            area: Rect::default(),
        }
    }

    pub fn cursor(&self) -> Coordinate {
        self.cursor
    }

    /// Inner screen area used by the last draw.
    pub fn area(&self) -> Rect {
        self.area
    }

    pub fn set_area(&mut self, area: Rect) {
        self.area = area;
    }

    /// Moves the cursor by whole cells (a fortieth of the span before the
    /// first draw) and pans when it leaves the view.
    pub fn move_cursor(&mut self, rows: i32, cols: i32) {
        let (lat_step, lng_step) = self.cell_size();
        self.cursor = Coordinate::clamped(
            self.cursor.lat - f64::from(rows) * lat_step,
            self.cursor.lng + f64::from(cols) * lng_step,
        );
        if !self.view.contains(self.cursor) {
            self.view.center_on(self.cursor);
        }
    }

    pub fn set_cursor(&mut self, at: Coordinate) {
        self.cursor = at;
    }

    /// Pans the view by whole pan steps, pulling the cursor along when it
    /// falls out of sight.
    pub fn pan(&mut self, lat_steps: i32, lng_steps: i32) {
        self.view.pan(lat_steps, lng_steps);
        if !self.view.contains(self.cursor) {
            self.cursor = self.view.center;
        }
    }

    pub fn zoom_in(&mut self) {
        self.view.center_on(self.cursor);
        self.view.zoom_in();
    }

    pub fn zoom_out(&mut self) {
        self.view.zoom_out();
    }

    /// Resolves a terminal cell to what is under it.
    pub fn click_at(&self, column: u16, row: u16) -> Option<MapClick> {
        let area = self.area;
        if area.width == 0
            || area.height == 0
            || column < area.x
            || row < area.y
            || column >= area.x + area.width
            || row >= area.y + area.height
        {
            return None;
        }

        let cell = (column - area.x, row - area.y);
        let hit = self
            .layer
            .as_slice()
            .iter()
            .rev()
            .find(|pin| self.view.cell_of(area.width, area.height, pin.at) == Some(cell));
        if let Some(pin) = hit {
            return Some(MapClick::Pin(pin.handle));
        }

        Some(MapClick::Surface(self.view.coordinate_at(
            area.width,
            area.height,
            cell.0,
            cell.1,
        )))
    }

    pub fn selected(&self) -> Option<&Pin> {
        self.selected.and_then(|handle| self.layer.get(handle))
    }

    pub fn select(&mut self, handle: PinHandle) {
        if self.layer.get(handle).is_some() {
            self.selected = Some(handle);
        }
    }

    pub fn deselect(&mut self) {
        self.selected = None;
    }

    pub fn select_next(&mut self) {
        self.select_offset(1);
    }

    pub fn select_prev(&mut self) {
        self.select_offset(-1);
    }

    /// Centers the view and cursor on the selected pin.
    pub fn focus_selected(&mut self) {
        if let Some(at) = self.selected().map(|p| p.at) {
            self.cursor = at;
            self.view.center_on(at);
        }
    }

    fn select_offset(&mut self, offset: isize) {
        let pins = self.layer.as_slice();
        if pins.is_empty() {
            self.selected = None;
            return;
        }

        let count = pins.len() as isize;
        let next = match self
            .selected
            .and_then(|handle| pins.iter().position(|p| p.handle == handle))
        {
            Some(index) => (index as isize + offset).rem_euclid(count),
            None if offset >= 0 => 0,
            None => count - 1,
        };
        self.selected = Some(pins[next as usize].handle);
    }

    fn cell_size(&self) -> (f64, f64) {
        let width = if self.area.width == 0 { 40 } else { self.area.width };
        let height = if self.area.height == 0 { 40 } else { self.area.height };
        (
            self.view.lat_span() / f64::from(height),
            self.view.lng_span() / f64::from(width),
        )
    }
}

impl MapCanvas for TerminalMap {
    fn view(&self) -> &MapView {
        &self.view
    }

    fn view_mut(&mut self) -> &mut MapView {
        &mut self.view
    }

    fn place_pin(&mut self, at: Coordinate, popup: Popup) -> PinHandle {
        self.layer.place(at, popup)
    }

    fn remove_pin(&mut self, handle: PinHandle) -> bool {
        if self.selected == Some(handle) {
            self.selected = None;
        }
        self.layer.remove(handle)
    }

    fn clear(&mut self) {
        self.selected = None;
        self.layer.clear();
    }

    fn pins(&self) -> &[Pin] {
        self.layer.as_slice()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Memory;
    use crate::render::PinRenderer;

    fn world_map() -> TerminalMap {
        let mut map = TerminalMap::new(MapView::new(Coordinate { lat: 0.0, lng: 0.0 }, 1));
        map.set_area(Rect::new(10, 5, 360, 180));
        map
    }

    fn pin(map: &mut TerminalMap, id: i64, lat: f64, lng: f64) -> PinHandle {
        let at = Coordinate { lat, lng };
        map.place_pin(at, PinRenderer::new().render(&Memory::new(id, at)))
    }

    #[test]
    fn test_click_outside_area_is_ignored() {
        let map = world_map();
        assert_eq!(map.click_at(0, 0), None);
        assert_eq!(map.click_at(370, 100), None);
    }

    #[test]
    fn test_click_on_surface_yields_coordinate() {
        let map = world_map();
        assert_eq!(
            map.click_at(10, 5),
            Some(MapClick::Surface(Coordinate { lat: 89.5, lng: -179.5 }))
        );
    }

    #[test]
    fn test_click_on_pin_selects_pin() {
        let mut map = world_map();
        let handle = pin(&mut map, 1, 0.0, 0.0);
        assert_eq!(map.click_at(190, 95), Some(MapClick::Pin(handle)));
    }

    #[test]
    fn test_select_cycles_through_pins() {
        let mut map = world_map();
        let a = pin(&mut map, 1, 0.0, 0.0);
        let b = pin(&mut map, 2, 10.0, 10.0);

        map.select_next();
        assert_eq!(map.selected().map(|p| p.handle), Some(a));
        map.select_next();
        assert_eq!(map.selected().map(|p| p.handle), Some(b));
        map.select_next();
        assert_eq!(map.selected().map(|p| p.handle), Some(a));
        map.select_prev();
        assert_eq!(map.selected().map(|p| p.handle), Some(b));
    }

    #[test]
    fn test_removing_selected_pin_clears_selection() {
        let mut map = world_map();
        let a = pin(&mut map, 1, 0.0, 0.0);
        map.select(a);
        map.remove_pin(a);
        assert!(map.selected().is_none());
    }

    #[test]
    fn test_pan_moves_view_and_keeps_cursor_visible() {
        let mut map = TerminalMap::new(MapView::new(Coordinate { lat: 0.0, lng: 0.0 }, 3));
        map.pan(0, 1);
        assert_eq!(map.view().center, Coordinate { lat: 0.0, lng: 9.0 });
        assert_eq!(map.cursor(), Coordinate { lat: 0.0, lng: 0.0 });

        map.pan(0, 10);
        assert!(map.view().contains(map.cursor()));
        assert_eq!(map.cursor(), map.view().center);
    }

    #[test]
    fn test_cursor_moves_one_cell_and_pans_at_edge() {
        let mut map = TerminalMap::new(MapView::new(Coordinate { lat: 0.0, lng: 0.0 }, 3));
        map.set_area(Rect::new(0, 0, 90, 45));

        map.move_cursor(0, 1);
        assert_eq!(map.cursor(), Coordinate { lat: 0.0, lng: 1.0 });

        map.move_cursor(0, 60);
        assert!(map.view().contains(map.cursor()));
        assert_eq!(map.view().center, map.cursor());
    }
}
