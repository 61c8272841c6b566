//! Pin popup rendering.
//!
//! [`PinRenderer`] turns a [`Memory`](crate::model::Memory) into a [`Popup`]:
//! the structured content a map shows when its pin is activated. The terminal
//! map draws the structured form; web maps embed [`Popup::to_html`].
//!
//! All user-supplied text is escaped and photo URLs are filtered through
//! [`safe_image_url`] before they reach any markup.

mod escape;
mod popup;

pub use escape::{escape_html, safe_image_url};
pub use popup::{DATE_PLACEHOLDER, DELETE_BUTTON_CLASS, PinRenderer, Popup};
