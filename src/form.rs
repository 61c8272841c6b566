//! The memory form: a two-state controller capturing one new memory.
//!
//! ```text
//! Closed --open(coordinate)--> Open --submit / cancel--> Closed
//! ```

use crate::error::{AtlasError, Result};
use crate::model::{Coordinate, Memory};
use chrono::NaiveDate;

/// Date format accepted by the date field.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Title,
    Date,
    Story,
    PhotoUrl,
}

impl FormField {
    pub const ALL: [FormField; 4] = [
        FormField::Title,
        FormField::Date,
        FormField::Story,
        FormField::PhotoUrl,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            FormField::Title => "Title",
            FormField::Date => "Date",
            FormField::Story => "Story",
            FormField::PhotoUrl => "Photo URL",
        }
    }

    pub fn next(&self) -> Self {
        match self {
            FormField::Title => FormField::Date,
            FormField::Date => FormField::Story,
            FormField::Story => FormField::PhotoUrl,
            FormField::PhotoUrl => FormField::Title,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            FormField::Title => FormField::PhotoUrl,
            FormField::Date => FormField::Title,
            FormField::Story => FormField::Date,
            FormField::PhotoUrl => FormField::Story,
        }
    }
}

/// Current values of the form inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields {
    pub title: String,
    pub date: String,
    pub story: String,
    pub photo_url: String,
}

impl FormFields {
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Title => &self.title,
            FormField::Date => &self.date,
            FormField::Story => &self.story,
            FormField::PhotoUrl => &self.photo_url,
        }
    }

    pub fn get_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::Title => &mut self.title,
            FormField::Date => &mut self.date,
            FormField::Story => &mut self.story,
            FormField::PhotoUrl => &mut self.photo_url,
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum FormState {
    #[default]
    Closed,
    Open { pending: Coordinate },
}

#[derive(Debug, Clone, Default)]
pub struct MemoryForm {
    state: FormState,
    pub fields: FormFields,
    focus: FormField,
}

impl MemoryForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> FormState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, FormState::Open { .. })
    }

    pub fn pending(&self) -> Option<Coordinate> {
        match self.state {
            FormState::Open { pending } => Some(pending),
            FormState::Closed => None,
        }
    }

    pub fn focus(&self) -> FormField {
        self.focus
    }

    /// Shows the form for `at`, focusing the first field.
    ///
    /// Opening while already open re-targets the pending coordinate and keeps
    /// whatever has been typed so far.
    pub fn open(&mut self, at: Coordinate) {
        self.state = FormState::Open { pending: at };
        self.focus = FormField::Title;
    }

    /// Hides the form, clearing every field and discarding the coordinate.
    pub fn cancel(&mut self) {
        self.reset();
    }

    /// Builds the memory from the current fields and closes the form.
    ///
    /// A malformed date rejects the submission and leaves the form open with
    /// its values intact.
    ///
    /// # Panics
    ///
    /// When the form is closed. Callers only submit an open form.
    pub fn submit(&mut self, id: i64) -> Result<Memory> {
        let FormState::Open { pending } = self.state else {
            panic!("memory form submitted without a pending coordinate");
        };

        let date = self.fields.date.trim();
        if !date.is_empty() && NaiveDate::parse_from_str(date, DATE_FORMAT).is_err() {
            self.focus = FormField::Date;
            return Err(AtlasError::Validation(format!(
                "Date '{}' is not a valid YYYY-MM-DD date",
                date
            )));
        }

        let memory = Memory::new(id, pending)
            .with_title(self.fields.title.trim())
            .with_date(date)
            .with_story(self.fields.story.as_str())
            .with_photo_url(self.fields.photo_url.trim());

        self.reset();
        Ok(memory)
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    pub fn push_char(&mut self, c: char) {
        if self.is_open() {
            self.fields.get_mut(self.focus).push(c);
        }
    }

    pub fn pop_char(&mut self) {
        if self.is_open() {
            self.fields.get_mut(self.focus).pop();
        }
    }

    fn reset(&mut self) {
        self.state = FormState::Closed;
        self.fields = FormFields::default();
        self.focus = FormField::Title;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at() -> Coordinate {
        Coordinate::new(10.0, 20.0).unwrap()
    }

    fn fill(form: &mut MemoryForm, title: &str, date: &str, story: &str, photo_url: &str) {
        form.fields = FormFields {
            title: title.to_string(),
            date: date.to_string(),
            story: story.to_string(),
            photo_url: photo_url.to_string(),
        };
    }

    #[test]
    fn test_starts_closed() {
        let form = MemoryForm::new();
        assert_eq!(form.state(), FormState::Closed);
        assert!(form.pending().is_none());
    }

    #[test]
    fn test_open_sets_pending_and_focus() {
        let mut form = MemoryForm::new();
        form.focus_next();
        form.open(at());
        assert_eq!(form.pending(), Some(at()));
        assert_eq!(form.focus(), FormField::Title);
    }

    #[test]
    fn test_submit_builds_memory_and_closes() {
        let mut form = MemoryForm::new();
        form.open(at());
        fill(&mut form, "Paris", "2024-05-01", "Great trip", "");

        let memory = form.submit(7).unwrap();

        assert_eq!(memory.id, 7);
        assert_eq!(memory.lat, 10.0);
        assert_eq!(memory.lng, 20.0);
        assert_eq!(memory.title, "Paris");
        assert_eq!(memory.date, "2024-05-01");
        assert_eq!(memory.story, "Great trip");
        assert_eq!(memory.photo_url, "");
        assert!(!form.is_open());
        assert!(form.fields.is_empty());
    }

    #[test]
    fn test_empty_fields_are_accepted() {
        let mut form = MemoryForm::new();
        form.open(at());
        let memory = form.submit(1).unwrap();
        assert_eq!(memory.title, "");
        assert_eq!(memory.date(), None);
    }

    #[test]
    fn test_malformed_date_is_rejected_and_form_stays_open() {
        let mut form = MemoryForm::new();
        form.open(at());
        fill(&mut form, "Paris", "2024-13-45", "", "");

        let err = form.submit(1).unwrap_err();

        assert!(err.to_string().contains("2024-13-45"));
        assert!(form.is_open());
        assert_eq!(form.fields.title, "Paris");
        assert_eq!(form.focus(), FormField::Date);
    }

    #[test]
    fn test_cancel_clears_and_closes() {
        let mut form = MemoryForm::new();
        form.open(at());
        fill(&mut form, "Draft", "", "half written", "");

        form.cancel();

        assert!(!form.is_open());
        assert!(form.pending().is_none());
        assert!(form.fields.is_empty());
    }

    #[test]
    #[should_panic(expected = "without a pending coordinate")]
    fn test_submit_while_closed_panics() {
        let mut form = MemoryForm::new();
        let _ = form.submit(1);
    }

    #[test]
    fn test_typing_goes_to_focused_field() {
        let mut form = MemoryForm::new();
        form.open(at());
        form.push_char('H');
        form.push_char('i');
        form.focus_next();
        form.push_char('2');
        form.focus_prev();
        form.pop_char();

        assert_eq!(form.fields.title, "H");
        assert_eq!(form.fields.date, "2");
    }

    #[test]
    fn test_typing_ignored_while_closed() {
        let mut form = MemoryForm::new();
        form.push_char('x');
        assert!(form.fields.is_empty());
    }

    #[test]
    fn test_focus_cycles() {
        let mut field = FormField::Title;
        for _ in 0..FormField::ALL.len() {
            field = field.next();
        }
        assert_eq!(field, FormField::Title);
        assert_eq!(FormField::Title.prev(), FormField::PhotoUrl);
    }
}
