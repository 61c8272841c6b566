use url::Url;

/// Escapes text for use in HTML element content and quoted attribute values.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

/// Returns the normalized URL when it is safe to use as an image source.
///
/// Only absolute `http`/`https` URLs and inline `data:image/...` URLs are
/// accepted. Relative URLs, `javascript:` and other schemes yield `None`.
pub fn safe_image_url(raw: &str) -> Option<String> {
    let url = Url::parse(raw.trim()).ok()?;
    match url.scheme() {
        "http" | "https" => Some(url.to_string()),
        "data" if url.path().starts_with("image/") => Some(url.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html_special_chars() {
        assert_eq!(
            escape_html(r#"<a href="x">Tom & 'Jerry'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#x27;Jerry&#x27;&lt;/a&gt;"
        );
    }

    #[test]
    fn test_escape_html_plain_text_untouched() {
        assert_eq!(escape_html("Café in Paris"), "Café in Paris");
    }

    #[test]
    fn test_safe_image_url_accepts_http() {
        assert_eq!(
            safe_image_url("https://example.com/a.jpg").as_deref(),
            Some("https://example.com/a.jpg")
        );
        assert!(safe_image_url("http://example.com/a.jpg").is_some());
        assert!(safe_image_url("data:image/png;base64,AAAA").is_some());
    }

    #[test]
    fn test_safe_image_url_rejects_scripts_and_junk() {
        assert!(safe_image_url("javascript:alert(1)").is_none());
        assert!(safe_image_url("JavaScript:alert(1)").is_none());
        assert!(safe_image_url("data:text/html,<script>alert(1)</script>").is_none());
        assert!(safe_image_url("photos/me.jpg").is_none());
        assert!(safe_image_url("").is_none());
    }

    #[test]
    fn test_safe_image_url_percent_encodes_quotes() {
        let url = safe_image_url(r#"https://example.com/x" onerror="alert(1)"#).unwrap();
        assert!(!url.contains('"'));
    }
}
