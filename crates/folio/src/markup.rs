//! Markup fragments and escaping
//!
//! Item fields are untrusted text and always go through [`escape`] before
//! they land in a fragment. Headings, icons and assembled blocks are
//! already-rendered HTML and travel as [`Markup`], which is never escaped
//! a second time.

use std::fmt;

use askama::Html as HtmlEscaper;
use askama::MarkupDisplay;
use serde::{Deserialize, Serialize};

/// A trusted, already-rendered HTML fragment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Markup(String);

impl Markup {
    /// Wrap a string that is already valid markup.
    pub fn raw(html: impl Into<String>) -> Self {
        Markup(html.into())
    }

    /// Build markup from plain text, escaping it.
    pub fn text(text: &str) -> Self {
        Markup(escape(text))
    }

    /// An empty fragment.
    pub fn empty() -> Self {
        Markup(String::new())
    }

    /// Borrow the underlying HTML.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Take the underlying HTML.
    pub fn into_string(self) -> String {
        self.0
    }

    /// Check whether the fragment is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Markup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&MarkupDisplay::new_safe(self.as_str(), HtmlEscaper), f)
    }
}

impl From<Markup> for String {
    fn from(markup: Markup) -> Self {
        markup.0
    }
}

/// Escape text for use in element content or a quoted attribute.
pub fn escape(text: &str) -> String {
    MarkupDisplay::new_unsafe(text, HtmlEscaper).to_string()
}

/// Turn a heading into an anchor id: lower-case, whitespace runs become `-`.
pub fn slugify(heading: &str) -> String {
    heading
        .split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}

/// Attribute string for links that open in a new tab.
pub(crate) const EXTERNAL_ATTRS: &str = r#" target="_blank" rel="noopener noreferrer""#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_special_characters() {
        let out = escape(r#"Apple MacBook Air M4 13" <b> & 'x'"#);
        assert!(out.starts_with("Apple MacBook Air M4 13&quot; &lt;b&gt; &amp; "));
        assert!(!out.contains('\''));
    }

    #[test]
    fn test_escape_leaves_plain_text_alone() {
        assert_eq!(escape("Display & Lighting"), "Display &amp; Lighting");
        assert_eq!(escape("Seiko 5 Sports"), "Seiko 5 Sports");
        assert_eq!(escape("⌚ watch"), "⌚ watch");
    }

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Watch Collection"), "watch-collection");
        assert_eq!(slugify("  Camera   Gear "), "camera-gear");
        assert_eq!(slugify("Books"), "books");
    }

    #[test]
    fn test_markup_text_escapes_but_raw_does_not() {
        assert_eq!(Markup::text("<em>").as_str(), "&lt;em&gt;");
        assert_eq!(Markup::raw("<em>").as_str(), "<em>");
        assert!(Markup::empty().is_empty());
    }

    #[test]
    fn test_markup_displays_unescaped() {
        let heading = Markup::raw(r#"<span class="count-badge">3</span>"#);
        assert_eq!(heading.to_string(), r#"<span class="count-badge">3</span>"#);
        assert_eq!(Markup::text("A & B").to_string(), "A &amp; B");
    }
}
