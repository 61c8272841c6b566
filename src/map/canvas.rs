use super::view::MapView;
use crate::model::Coordinate;
use crate::render::Popup;

/// Identifies a pin placed on a canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PinHandle(u64);

/// A marker with the popup it shows when activated.
#[derive(Debug, Clone, PartialEq)]
pub struct Pin {
    pub handle: PinHandle,
    pub at: Coordinate,
    pub popup: Popup,
}

impl Pin {
    /// Id of the memory this pin's delete trigger is bound to.
    pub fn memory_id(&self) -> i64 {
        self.popup.memory_id
    }
}

/// What a click on the map surface landed on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MapClick {
    /// Empty map surface: carries the coordinate under the cursor.
    Surface(Coordinate),
    /// An existing pin.
    Pin(PinHandle),
}

/// The map widget seen by the controller.
///
/// Pins are a rendering-only projection of the store; a canvas may be
/// cleared and rebuilt at any time.
pub trait MapCanvas {
    fn view(&self) -> &MapView;

    fn view_mut(&mut self) -> &mut MapView;

    fn place_pin(&mut self, at: Coordinate, popup: Popup) -> PinHandle;

    /// Returns false if the handle is not on this canvas.
    fn remove_pin(&mut self, handle: PinHandle) -> bool;

    fn clear(&mut self);

    fn pins(&self) -> &[Pin];
}

/// Insertion-ordered pin storage shared by the canvas implementations.
#[derive(Debug, Clone, Default)]
pub struct PinLayer {
    pins: Vec<Pin>,
    next_handle: u64,
}

impl PinLayer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn place(&mut self, at: Coordinate, popup: Popup) -> PinHandle {
        let handle = PinHandle(self.next_handle);
        self.next_handle += 1;
        self.pins.push(Pin { handle, at, popup });
        handle
    }

    pub fn remove(&mut self, handle: PinHandle) -> bool {
        let before = self.pins.len();
        self.pins.retain(|p| p.handle != handle);
        self.pins.len() != before
    }

    pub fn clear(&mut self) {
        self.pins.clear();
    }

    pub fn get(&self, handle: PinHandle) -> Option<&Pin> {
        self.pins.iter().find(|p| p.handle == handle)
    }

    pub fn as_slice(&self) -> &[Pin] {
        &self.pins
    }

    pub fn len(&self) -> usize {
        self.pins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pins.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Memory;
    use crate::render::PinRenderer;

    fn popup(id: i64) -> Popup {
        PinRenderer::new().render(&Memory::new(id, Coordinate { lat: 1.0, lng: 2.0 }))
    }

    #[test]
    fn test_handles_are_never_reused() {
        let mut layer = PinLayer::new();
        let a = layer.place(Coordinate { lat: 0.0, lng: 0.0 }, popup(1));
        layer.clear();
        let b = layer.place(Coordinate { lat: 0.0, lng: 0.0 }, popup(1));
        assert_ne!(a, b);
    }

    #[test]
    fn test_remove_pin() {
        let mut layer = PinLayer::new();
        let a = layer.place(Coordinate { lat: 0.0, lng: 0.0 }, popup(1));
        let b = layer.place(Coordinate { lat: 5.0, lng: 5.0 }, popup(2));

        assert!(layer.remove(a));
        assert!(!layer.remove(a));
        assert_eq!(layer.len(), 1);
        assert_eq!(layer.get(b).map(Pin::memory_id), Some(2));
    }
}
