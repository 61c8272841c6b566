use super::Coordinate;
use serde::{Deserialize, Deserializer, Serialize};

/// A journal entry bound to the place it was pinned at.
///
/// Records are immutable once stored: the store only appends or removes
/// them wholesale. Optional fields use the empty string for "absent" so the
/// persisted JSON keeps a flat, fixed shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Memory {
    pub id: i64,
    pub lat: f64,
    pub lng: f64,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub title: String,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub date: String,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub story: String,

    #[serde(default, rename = "photoUrl", deserialize_with = "null_as_empty")]
    pub photo_url: String,
}

/// `null` reads as the empty string, like a missing key.
fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl Memory {
    pub fn new(id: i64, at: Coordinate) -> Self {
        Self {
            id,
            lat: at.lat,
            lng: at.lng,
            title: String::new(),
            date: String::new(),
            story: String::new(),
            photo_url: String::new(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = date.into();
        self
    }

    pub fn with_story(mut self, story: impl Into<String>) -> Self {
        self.story = story.into();
        self
    }

    pub fn with_photo_url(mut self, photo_url: impl Into<String>) -> Self {
        self.photo_url = photo_url.into();
        self
    }

    pub fn coordinate(&self) -> Coordinate {
        Coordinate::clamped(self.lat, self.lng)
    }

    pub fn date(&self) -> Option<&str> {
        Some(self.date.as_str()).filter(|d| !d.is_empty())
    }

    pub fn photo_url(&self) -> Option<&str> {
        Some(self.photo_url.as_str()).filter(|u| !u.is_empty())
    }
}
