use super::escape::{escape_html, safe_image_url};
use crate::model::Memory;

/// Shown in place of a missing date.
pub const DATE_PLACEHOLDER: &str = "N/A";

/// CSS class of the delete trigger inside popup HTML.
pub const DELETE_BUTTON_CLASS: &str = "delete-button";

/// Display content for one pin.
///
/// Fields hold raw (unescaped) text; escaping happens in [`Popup::to_html`].
#[derive(Debug, Clone, PartialEq)]
pub struct Popup {
    /// Id of the memory the delete trigger acts on.
    pub memory_id: i64,
    pub title: String,
    pub date_label: String,
    pub story: String,
    /// Only set when the memory has a photo URL that is safe to embed.
    pub image_url: Option<String>,
}

impl Popup {
    pub fn has_image(&self) -> bool {
        self.image_url.is_some()
    }

    pub fn to_html(&self) -> String {
        let title = escape_html(&self.title);
        let mut html = format!(
            "<h4>{}</h4><p><strong>Date:</strong> {}</p><p>{}</p>",
            title,
            escape_html(&self.date_label),
            escape_html(&self.story),
        );
        if let Some(url) = &self.image_url {
            html.push_str(&format!(
                r#"<img src="{}" alt="{}">"#,
                escape_html(url),
                title
            ));
        }
        html.push_str(&format!(
            r#"<p><span class="{}" data-id="{}">Delete Memory</span></p>"#,
            DELETE_BUTTON_CLASS, self.memory_id
        ));
        html
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PinRenderer;

impl PinRenderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, memory: &Memory) -> Popup {
        let image_url = memory.photo_url().and_then(|raw| {
            let safe = safe_image_url(raw);
            if safe.is_none() {
                tracing::debug!(id = memory.id, "Dropping unsafe photo URL from popup");
            }
            safe
        });

        Popup {
            memory_id: memory.id,
            title: memory.title.clone(),
            date_label: memory.date().unwrap_or(DATE_PLACEHOLDER).to_string(),
            story: memory.story.clone(),
            image_url,
        }
    }

    pub fn render_html(&self, memory: &Memory) -> String {
        self.render(memory).to_html()
    }
}
