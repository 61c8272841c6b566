//! The app controller: wires the store, the form, the pin renderer and a
//! map canvas together.
//!
//! All state lives in [`AtlasController`]. Handlers run to completion on the
//! caller's thread; nothing is shared between instances except the slot the
//! store writes to.

use crate::error::Result;
use crate::form::MemoryForm;
use crate::map::{MapCanvas, Pin, PinHandle};
use crate::model::{Coordinate, Memory};
use crate::render::PinRenderer;
use crate::storage::{KeyValueSlot, MemoryStore};
use std::collections::HashMap;

/// Question asked before a memory is deleted.
pub const DELETE_PROMPT: &str = "Are you sure you want to delete this memory forever?";

/// A blocking yes/no question.
pub trait Confirm {
    fn confirm(&mut self, prompt: &str) -> bool;
}

/// Answers yes to everything (`--force`).
#[derive(Debug, Clone, Copy, Default)]
pub struct AutoConfirm;

impl Confirm for AutoConfirm {
    fn confirm(&mut self, _prompt: &str) -> bool {
        true
    }
}

impl<F: FnMut(&str) -> bool> Confirm for F {
    fn confirm(&mut self, prompt: &str) -> bool {
        self(prompt)
    }
}

pub struct AtlasController<S: KeyValueSlot, M: MapCanvas> {
    store: MemoryStore<S>,
    canvas: M,
    renderer: PinRenderer,
    form: MemoryForm,
    pins: HashMap<i64, Vec<PinHandle>>,
}

impl<S: KeyValueSlot, M: MapCanvas> AtlasController<S, M> {
    pub fn new(store: MemoryStore<S>, canvas: M) -> Self {
        Self {
            store,
            canvas,
            renderer: PinRenderer::new(),
            form: MemoryForm::new(),
            pins: HashMap::new(),
        }
    }

    /// Renders every stored memory onto the canvas. Returns the pin count.
    pub fn start(&mut self) -> usize {
        let memories = self.store.list();
        for memory in &memories {
            self.place(memory);
        }
        tracing::debug!(count = memories.len(), "Rendered stored memories");
        memories.len()
    }

    /// Rebuilds every pin from the store. The map view is left untouched.
    pub fn reload(&mut self) -> usize {
        self.canvas.clear();
        self.pins.clear();
        self.start()
    }

    /// A click on empty map surface opens the form for that spot.
    pub fn on_map_click(&mut self, at: Coordinate) {
        tracing::debug!(%at, "Map clicked");
        self.form.open(at);
    }

    /// Stores the memory described by the open form and pins it.
    ///
    /// When the store write fails the form is reopened with the same values.
    pub fn submit_form(&mut self) -> Result<Memory> {
        let id = self.store.next_id();
        let memory = self.form.submit(id)?;

        if let Err(e) = self.store.append(memory.clone()) {
            self.form.open(memory.coordinate());
            self.form.fields.title = memory.title;
            self.form.fields.date = memory.date;
            self.form.fields.story = memory.story;
            self.form.fields.photo_url = memory.photo_url;
            return Err(e);
        }

        self.place(&memory);
        Ok(memory)
    }

    pub fn cancel_form(&mut self) {
        self.form.cancel();
    }

    /// Asks `confirm` and, on yes, deletes the memory and its pin.
    ///
    /// Returns whether the deletion went ahead. Unknown ids are not an error.
    pub fn request_delete(&mut self, id: i64, confirm: &mut dyn Confirm) -> Result<bool> {
        if !confirm.confirm(DELETE_PROMPT) {
            tracing::debug!(id, "Deletion cancelled");
            return Ok(false);
        }
        self.delete(id)?;
        Ok(true)
    }

    /// Deletes without asking. Returns how many records were removed.
    pub fn delete(&mut self, id: i64) -> Result<usize> {
        let removed = self.store.remove(id)?;
        for handle in self.pins.remove(&id).unwrap_or_default() {
            self.canvas.remove_pin(handle);
        }
        Ok(removed)
    }

    pub fn pin_for(&self, id: i64) -> Option<&Pin> {
        let handle = self.pins.get(&id)?.first()?;
        self.canvas.pins().iter().find(|p| p.handle == *handle)
    }

    pub fn store(&self) -> &MemoryStore<S> {
        &self.store
    }

    pub fn canvas(&self) -> &M {
        &self.canvas
    }

    pub fn canvas_mut(&mut self) -> &mut M {
        &mut self.canvas
    }

    pub fn form(&self) -> &MemoryForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut MemoryForm {
        &mut self.form
    }

    pub fn into_canvas(self) -> M {
        self.canvas
    }

    fn place(&mut self, memory: &Memory) {
        let popup = self.renderer.render(memory);
        let handle = self.canvas.place_pin(memory.coordinate(), popup);
        self.pins.entry(memory.id).or_default().push(handle);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::{LeafletMap, MapView, TileLayer};
    use crate::storage::InMemorySlot;

    fn controller() -> AtlasController<InMemorySlot, LeafletMap> {
        AtlasController::new(
            MemoryStore::new(InMemorySlot::new()),
            LeafletMap::new(MapView::default(), TileLayer::default()),
        )
    }

    fn add(ctl: &mut AtlasController<InMemorySlot, LeafletMap>, title: &str) -> Memory {
        ctl.on_map_click(Coordinate::new(1.0, 2.0).unwrap());
        ctl.form_mut().fields.title = title.to_string();
        ctl.submit_form().unwrap()
    }

    #[test]
    fn test_start_renders_stored_memories() {
        let store = MemoryStore::new(InMemorySlot::new());
        store
            .append(Memory::new(1, Coordinate::new(0.0, 0.0).unwrap()))
            .unwrap();
        store
            .append(Memory::new(2, Coordinate::new(5.0, 5.0).unwrap()))
            .unwrap();

        let mut ctl = AtlasController::new(
            store,
            LeafletMap::new(MapView::default(), TileLayer::default()),
        );

        assert_eq!(ctl.start(), 2);
        assert_eq!(ctl.canvas().pins().len(), 2);
        assert_eq!(ctl.canvas().pins()[1].memory_id(), 2);
    }

    #[test]
    fn test_submit_appends_and_pins() {
        let mut ctl = controller();
        let memory = add(&mut ctl, "Lisbon");

        assert_eq!(ctl.store().list(), vec![memory.clone()]);
        assert_eq!(ctl.pin_for(memory.id).map(|p| p.popup.title.as_str()), Some("Lisbon"));
        assert!(!ctl.form().is_open());
    }

    #[test]
    fn test_rejected_submit_keeps_store_unchanged() {
        let mut ctl = controller();
        ctl.on_map_click(Coordinate::new(1.0, 2.0).unwrap());
        ctl.form_mut().fields.date = "yesterday".to_string();

        assert!(ctl.submit_form().is_err());
        assert!(ctl.store().list().is_empty());
        assert!(ctl.canvas().pins().is_empty());
        assert!(ctl.form().is_open());
    }

    #[test]
    fn test_declined_delete_changes_nothing() {
        let mut ctl = controller();
        let memory = add(&mut ctl, "Keep me");

        let deleted = ctl.request_delete(memory.id, &mut |_: &str| false).unwrap();

        assert!(!deleted);
        assert_eq!(ctl.store().list().len(), 1);
        assert_eq!(ctl.canvas().pins().len(), 1);
    }

    #[test]
    fn test_confirmed_delete_removes_record_and_pin() {
        let mut ctl = controller();
        let first = add(&mut ctl, "first");
        let second = add(&mut ctl, "second");

        let mut asked = String::new();
        let deleted = ctl
            .request_delete(first.id, &mut |prompt: &str| {
                asked = prompt.to_string();
                true
            })
            .unwrap();

        assert!(deleted);
        assert_eq!(asked, DELETE_PROMPT);
        assert_eq!(ctl.store().list(), vec![second.clone()]);
        assert_eq!(ctl.canvas().pins().len(), 1);
        assert!(ctl.pin_for(first.id).is_none());
    }

    #[test]
    fn test_delete_preserves_view() {
        let mut ctl = controller();
        let memory = add(&mut ctl, "x");
        ctl.canvas_mut().view_mut().zoom_in();
        let view = *ctl.canvas().view();

        ctl.request_delete(memory.id, &mut AutoConfirm).unwrap();

        assert_eq!(*ctl.canvas().view(), view);
    }

    #[test]
    fn test_reload_matches_store() {
        let mut ctl = controller();
        add(&mut ctl, "a");
        add(&mut ctl, "b");

        assert_eq!(ctl.reload(), 2);
        assert_eq!(ctl.canvas().pins().len(), 2);
    }
}
