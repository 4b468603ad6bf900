//! Sidebar menu shape shared by catalogs, the projects menu and the assembler

use serde::{Deserialize, Serialize};

use crate::icons::{self, Icon};
use crate::markup::Markup;

/// Placeholder anchor for content that does not exist yet.
pub const COMING_SOON: &str = "#coming-soon";

/// One link inside a sidebar section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SidebarLink {
    /// Link target (an in-page `#anchor`, a page, or an absolute URL)
    pub href: String,

    /// Plain-text label, escaped when rendered
    pub label: String,

    /// Whether the link opens in a new tab
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub external: bool,
}

impl SidebarLink {
    /// Create an internal link.
    pub fn new(href: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            label: label.into(),
            external: false,
        }
    }

    /// Create a link that opens in a new tab.
    pub fn external(href: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            external: true,
            ..Self::new(href, label)
        }
    }

    /// In-page anchor link to the element with the given id.
    pub fn anchor(id: &str, label: impl Into<String>) -> Self {
        Self::new(format!("#{}", id), label)
    }

    /// The "not yet available" placeholder link.
    pub fn coming_soon() -> Self {
        Self::new(COMING_SOON, "Coming soon...")
    }

    /// Check whether this link is the inert placeholder.
    pub fn is_placeholder(&self) -> bool {
        self.href == COMING_SOON
    }
}

/// A heading plus the links listed under it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SidebarSection {
    /// Rendered heading (plain escaped text or a decorated heading)
    pub heading: Markup,

    /// Links in display order
    pub links: Vec<SidebarLink>,
}

impl SidebarSection {
    /// Create a section.
    pub fn new(heading: Markup, links: Vec<SidebarLink>) -> Self {
        Self { heading, links }
    }
}

/// Secondary menu description for one page family.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SidebarData {
    /// Menu title, shown above the mobile variant
    pub title: String,

    /// Sections in display order
    pub sections: Vec<SidebarSection>,
}

impl SidebarData {
    /// Create menu data.
    pub fn new(title: impl Into<String>, sections: Vec<SidebarSection>) -> Self {
        Self {
            title: title.into(),
            sections,
        }
    }

    /// Menu with a title and no sections.
    pub fn empty(title: impl Into<String>) -> Self {
        Self::new(title, Vec::new())
    }

    /// Total number of links across all sections.
    pub fn link_count(&self) -> usize {
        self.sections.iter().map(|s| s.links.len()).sum()
    }
}

/// Heading with a leading icon and a count badge.
pub fn decorated_heading(icon: Icon, label: &str, count: usize) -> Markup {
    Markup::raw(format!(
        r#"<span class="category-with-icon">{}{}</span><span class="count-badge">{}</span>"#,
        icons::inline(icon),
        Markup::text(label),
        count
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anchor_link() {
        let link = SidebarLink::anchor("beats-pill", "Beats Pill");
        assert_eq!(link.href, "#beats-pill");
        assert!(!link.external);
        assert!(!link.is_placeholder());
    }

    #[test]
    fn test_coming_soon_is_placeholder() {
        assert!(SidebarLink::coming_soon().is_placeholder());
    }

    #[test]
    fn test_decorated_heading_contains_badge() {
        let heading = decorated_heading(Icon::Bookmarks, "Bookmarks", 7);
        assert!(heading
            .as_str()
            .ends_with(r#"Bookmarks</span><span class="count-badge">7</span>"#));
        assert!(heading.as_str().starts_with(r#"<span class="category-with-icon"><svg"#));
    }

    #[test]
    fn test_link_count() {
        let data = SidebarData::new(
            "Test",
            vec![
                SidebarSection::new(Markup::text("A"), vec![SidebarLink::coming_soon()]),
                SidebarSection::new(
                    Markup::text("B"),
                    vec![SidebarLink::anchor("x", "X"), SidebarLink::anchor("y", "Y")],
                ),
            ],
        );
        assert_eq!(data.link_count(), 3);
        assert_eq!(SidebarData::empty("Empty").link_count(), 0);
    }
}
