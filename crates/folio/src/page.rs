//! Attaching rendered navigation to a page
//!
//! [`attach`] is the only place that knows where navigation goes in a
//! document. It talks to the page through [`HostPage`], so the same logic
//! drives an in-memory [`HtmlDocument`] (static pre-rendering) or any other
//! view a host provides.

use std::borrow::Cow;
use std::cell::Cell;

use lol_html::html_content::{ContentType, Element};
use lol_html::{rewrite_str, ElementContentHandlers, HandlerResult, RewriteStrSettings, Selector};
use tracing::warn;

use crate::sidebar::Navigation;

/// Container receiving the primary navigation.
pub const HEADER_CLASS: &str = "site-header";

/// Container holding the desktop secondary panel.
pub const SECONDARY_CLASS: &str = "secondary-sidebar";

/// Body class set on pages that show a secondary panel.
pub const WITH_SECONDARY_CLASS: &str = "with-secondary-sidebar";

/// The operations [`attach`] needs from a page.
pub trait HostPage {
    /// Replace the content of the first element carrying `class`.
    /// Returns `false` when no such element exists.
    fn set_container(&mut self, class: &str, markup: &str) -> bool;

    /// Remove the first element carrying `class`, content included.
    /// Returns `false` when no such element exists.
    fn remove_container(&mut self, class: &str) -> bool;

    /// Add a class to the page body if it is not already present.
    fn add_body_class(&mut self, class: &str);

    /// Remove a class from the page body if present.
    fn remove_body_class(&mut self, class: &str);

    /// Append markup at the end of the page body.
    fn append_to_body(&mut self, markup: &str);
}

/// Put `nav` into `host`.
///
/// Re-attaching replaces what a previous call inserted; nothing accumulates.
/// A page without a secondary menu loses any panel left by an earlier call.
pub fn attach(nav: &Navigation, host: &mut impl HostPage) {
    if !host.set_container(HEADER_CLASS, nav.primary.as_str()) {
        warn!(container = HEADER_CLASS, "page has no header container, primary navigation skipped");
    }

    match &nav.secondary {
        Some(secondary) => {
            host.add_body_class(WITH_SECONDARY_CLASS);
            if !host.set_container(SECONDARY_CLASS, secondary.markup.as_str()) {
                host.append_to_body(&format!(
                    r#"<aside class="{} active">{}</aside>"#,
                    SECONDARY_CLASS, secondary.markup
                ));
            }
        }
        None => {
            host.remove_body_class(WITH_SECONDARY_CLASS);
            host.remove_container(SECONDARY_CLASS);
        }
    }
}

/// An HTML document held as a string.
///
/// Edits go through a streaming rewriter, so markup outside the touched
/// elements is kept byte for byte, comments and quoting style included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlDocument {
    html: String,
}

impl HtmlDocument {
    /// Wrap a document.
    pub fn new(html: impl Into<String>) -> Self {
        Self { html: html.into() }
    }

    /// Borrow the current HTML.
    pub fn as_str(&self) -> &str {
        &self.html
    }

    /// Take the HTML.
    pub fn into_string(self) -> String {
        self.html
    }

    /// Apply `edit` to the first element matching `selector`.
    ///
    /// Returns `false` and leaves the document alone when nothing matches
    /// or the rewrite fails.
    fn edit_first<F>(&mut self, selector: &str, mut edit: F) -> bool
    where
        F: FnMut(&mut Element) -> HandlerResult,
    {
        let parsed = match selector.parse::<Selector>() {
            Ok(parsed) => parsed,
            Err(err) => {
                warn!(selector, error = %err, "invalid selector, document left unchanged");
                return false;
            }
        };

        let matched = Cell::new(false);
        let handlers = ElementContentHandlers::default().element(|el| {
            if matched.replace(true) {
                return Ok(());
            }
            edit(el)
        });
        let settings = RewriteStrSettings {
            element_content_handlers: vec![(Cow::Owned(parsed), handlers)],
            // Inline SVG icons make strict mode bail.
            strict: false,
            ..RewriteStrSettings::default()
        };

        match rewrite_str(&self.html, settings) {
            Ok(html) if matched.get() => {
                self.html = html;
                true
            }
            Ok(_) => false,
            Err(err) => {
                warn!(selector, error = %err, "could not rewrite document");
                false
            }
        }
    }
}

fn class_selector(class: &str) -> String {
    format!(".{}", class)
}

fn has_class(value: &str, class: &str) -> bool {
    value.split_whitespace().any(|token| token == class)
}

impl HostPage for HtmlDocument {
    fn set_container(&mut self, class: &str, markup: &str) -> bool {
        self.edit_first(&class_selector(class), |el| {
            el.set_inner_content(markup, ContentType::Html);
            Ok(())
        })
    }

    fn remove_container(&mut self, class: &str) -> bool {
        self.edit_first(&class_selector(class), |el| {
            el.remove();
            Ok(())
        })
    }

    fn add_body_class(&mut self, class: &str) {
        let found = self.edit_first("body", |el| {
            let current = el.get_attribute("class").unwrap_or_default();
            if has_class(&current, class) {
                return Ok(());
            }
            let updated = if current.trim().is_empty() {
                class.to_string()
            } else {
                format!("{} {}", current.trim_end(), class)
            };
            el.set_attribute("class", &updated)?;
            Ok(())
        });
        if !found {
            warn!(class, "document has no <body>, body class skipped");
        }
    }

    fn remove_body_class(&mut self, class: &str) {
        self.edit_first("body", |el| {
            let Some(current) = el.get_attribute("class") else {
                return Ok(());
            };
            if !has_class(&current, class) {
                return Ok(());
            }
            let remaining: Vec<&str> = current
                .split_whitespace()
                .filter(|token| *token != class)
                .collect();
            if remaining.is_empty() {
                el.remove_attribute("class");
            } else {
                el.set_attribute("class", &remaining.join(" "))?;
            }
            Ok(())
        });
    }

    fn append_to_body(&mut self, markup: &str) {
        let appended = self.edit_first("body", |el| {
            el.append(markup, ContentType::Html);
            Ok(())
        });
        if !appended {
            self.html.push_str(markup);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_container_replaces_content() {
        let mut doc = HtmlDocument::new(r#"<body><header class="site-header">old</header></body>"#);
        assert!(doc.set_container("site-header", "<nav>new</nav>"));
        assert_eq!(
            doc.as_str(),
            r#"<body><header class="site-header"><nav>new</nav></header></body>"#
        );
    }

    #[test]
    fn test_set_container_balances_nested_tags() {
        let mut doc = HtmlDocument::new(
            r#"<div class="a"><div>inner</div><div>more</div></div><div class="b">keep</div>"#,
        );
        assert!(doc.set_container("a", "x"));
        assert_eq!(doc.as_str(), r#"<div class="a">x</div><div class="b">keep</div>"#);
    }

    #[test]
    fn test_set_container_matches_whole_class_token() {
        let mut doc = HtmlDocument::new(r#"<div class="site-header-wrap">a</div>"#);
        assert!(!doc.set_container("site-header", "x"));
        let mut doc = HtmlDocument::new(r#"<div class="sticky site-header">a</div>"#);
        assert!(doc.set_container("site-header", "x"));
    }

    #[test]
    fn test_add_body_class() {
        let mut doc = HtmlDocument::new("<body><p></p></body>");
        doc.add_body_class("with-secondary-sidebar");
        assert_eq!(doc.as_str(), r#"<body class="with-secondary-sidebar"><p></p></body>"#);

        doc.add_body_class("with-secondary-sidebar");
        assert_eq!(doc.as_str(), r#"<body class="with-secondary-sidebar"><p></p></body>"#);

        let mut doc = HtmlDocument::new(r#"<body class="dark"></body>"#);
        doc.add_body_class("wide");
        assert_eq!(doc.as_str(), r#"<body class="dark wide"></body>"#);
    }

    #[test]
    fn test_remove_body_class() {
        let mut doc = HtmlDocument::new(r#"<body class="page with-secondary-sidebar"></body>"#);
        doc.remove_body_class("with-secondary-sidebar");
        assert_eq!(doc.as_str(), r#"<body class="page"></body>"#);

        doc.remove_body_class("with-secondary-sidebar");
        assert_eq!(doc.as_str(), r#"<body class="page"></body>"#);

        let mut doc = HtmlDocument::new(r#"<body class="with-secondary-sidebar"></body>"#);
        doc.remove_body_class("with-secondary-sidebar");
        assert_eq!(doc.as_str(), "<body></body>");
    }

    #[test]
    fn test_remove_container() {
        let mut doc = HtmlDocument::new(
            r#"<body><p>keep</p><aside class="secondary-sidebar active"><h3>x</h3></aside></body>"#,
        );
        assert!(doc.remove_container("secondary-sidebar"));
        assert_eq!(doc.as_str(), "<body><p>keep</p></body>");
        assert!(!doc.remove_container("secondary-sidebar"));
    }

    #[test]
    fn test_invalid_class_leaves_document_alone() {
        let mut doc = HtmlDocument::new(r#"<div class="a">x</div>"#);
        assert!(!doc.set_container("not a [class", "y"));
        assert_eq!(doc.as_str(), r#"<div class="a">x</div>"#);
    }

    #[test]
    fn test_append_to_body() {
        let mut doc = HtmlDocument::new("<body><p></p></body></html>");
        doc.append_to_body("<aside></aside>");
        assert_eq!(doc.as_str(), "<body><p></p><aside></aside></body></html>");
    }
}
