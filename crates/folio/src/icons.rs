//! Inline SVG icon set
//!
//! Every icon is a 24x24 stroke drawing. [`svg`] produces the sized
//! standalone form used in the primary navigation; [`inline`] produces the
//! smaller form that sits inside a sidebar section heading.

use serde::{Deserialize, Serialize};

/// Named icons available to navigation entries and section headings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
    /// House
    Home,
    /// Person silhouette
    About,
    /// Folder
    Projects,
    /// Star
    Hobbies,
    /// Bookmark ribbon
    Bookmarks,
    /// Monitor on a stand
    Workspace,
    /// Document with lines
    Cv,
    /// GitHub mark
    Github,
    /// Checked square
    Tryhackme,
    /// Stacked layers
    Hackerrank,
    /// Roadmap milestones
    Roadmap,
    /// LinkedIn mark
    Linkedin,
    /// X mark
    X,
    /// Camera outline
    Instagram,
    /// Reddit mark
    Reddit,
    /// Arrow leaving the page
    External,
    /// Laptop
    Laptop,
    /// Two overlapping squares
    Accessories,
    /// Watch face with strap
    Watch,
    /// Checked box
    Practice,
    /// Wrench
    Tools,
}

impl Icon {
    /// SVG body (paths and shapes) for this icon.
    pub fn path(self) -> &'static str {
        match self {
            Icon::Home => r#"<path d="M3 9l9-7 9 7v11a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2z"></path><polyline points="9 22 9 12 15 12 15 22"></polyline>"#,
            Icon::About => r#"<path d="M20 21v-2a4 4 0 0 0-4-4H8a4 4 0 0 0-4 4v2"></path><circle cx="12" cy="7" r="4"></circle>"#,
            Icon::Projects => r#"<path d="M22 19a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2h5l2 3h9a2 2 0 0 1 2 2z"></path>"#,
            Icon::Hobbies => r#"<polygon points="12 2 15.09 8.26 22 9.27 17 14.14 18.18 21.02 12 17.77 5.82 21.02 7 14.14 2 9.27 8.91 8.26 12 2"></polygon>"#,
            Icon::Bookmarks => r#"<path d="M19 21l-7-5-7 5V5a2 2 0 0 1 2-2h10a2 2 0 0 1 2 2z"></path>"#,
            Icon::Workspace => r#"<rect x="2" y="3" width="20" height="14" rx="2" ry="2"></rect><line x1="8" y1="21" x2="16" y2="21"></line><line x1="12" y1="17" x2="12" y2="21"></line>"#,
            Icon::Cv => r#"<path d="M14 2H6a2 2 0 0 0-2 2v16a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2V8z"></path><polyline points="14 2 14 8 20 8"></polyline><line x1="16" y1="13" x2="8" y2="13"></line><line x1="16" y1="17" x2="8" y2="17"></line><polyline points="10 9 9 9 8 9"></polyline>"#,
            Icon::Github => r#"<path d="M9 19c-5 1.5-5-2.5-7-3m14 6v-3.87a3.37 3.37 0 0 0-.94-2.61c3.14-.35 6.44-1.54 6.44-7A5.44 5.44 0 0 0 20 4.77 5.07 5.07 0 0 0 19.91 1S18.73.65 16 2.48a13.38 13.38 0 0 0-7 0C6.27.65 5.09 1 5.09 1A5.07 5.07 0 0 0 5 4.77a5.44 5.44 0 0 0-1.5 3.78c0 5.42 3.3 6.61 6.44 7A3.37 3.37 0 0 0 9 18.13V22"></path>"#,
            Icon::Tryhackme => r#"<rect x="3" y="3" width="18" height="18" rx="2" ry="2"></rect><path d="M9 12l2 2 4-4"></path>"#,
            Icon::Hackerrank => r#"<polygon points="12 2 2 7 12 12 22 7 12 2"></polygon><polyline points="2 17 12 22 22 17"></polyline><polyline points="2 12 12 17 22 12"></polyline>"#,
            Icon::Roadmap => r#"<line x1="12" y1="2" x2="12" y2="22"></line><rect x="4" y="5" width="7" height="4" rx="1"></rect><rect x="13" y="9" width="7" height="4" rx="1"></rect><rect x="4" y="15" width="7" height="4" rx="1"></rect>"#,
            Icon::Linkedin => r#"<path d="M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-2-2 2 2 0 0 0-2 2v7h-4v-7a6 6 0 0 1 6-6z"></path><rect x="2" y="9" width="4" height="12"></rect><circle cx="4" cy="4" r="2"></circle>"#,
            Icon::X => r#"<path d="M4 4l11.733 16h4.267l-11.733 -16z"></path><path d="M4 20l6.768 -6.768m2.46 -2.46l6.772 -6.772"></path>"#,
            Icon::Instagram => r#"<rect x="2" y="2" width="20" height="20" rx="5" ry="5"></rect><path d="M16 11.37A4 4 0 1 1 12.63 8 4 4 0 0 1 16 11.37z"></path><line x1="17.5" y1="6.5" x2="17.51" y2="6.5"></line>"#,
            Icon::Reddit => r#"<circle cx="12" cy="13" r="7"></circle><circle cx="18.5" cy="4.5" r="1.5"></circle><path d="M12 6l1.5-4 5 1"></path><circle cx="9.5" cy="12.5" r="1"></circle><circle cx="14.5" cy="12.5" r="1"></circle><path d="M9.5 16c1.5 1 3.5 1 5 0"></path>"#,
            Icon::External => r#"<line x1="7" y1="17" x2="17" y2="7"></line><polyline points="7 7 17 7 17 17"></polyline>"#,
            Icon::Laptop => r#"<path d="M20 16V7a2 2 0 0 0-2-2H6a2 2 0 0 0-2 2v9m16 0H4m16 0 1.28 2.55a1 1 0 0 1-.9 1.45H3.62a1 1 0 0 1-.9-1.45L4 16"></path>"#,
            Icon::Accessories => r#"<rect x="9" y="9" width="13" height="13" rx="2" ry="2"></rect><path d="M5 15H4a2 2 0 0 1-2-2V4a2 2 0 0 1 2-2h9a2 2 0 0 1 2 2v1"></path>"#,
            Icon::Watch => r#"<circle cx="12" cy="12" r="7"></circle><polyline points="12 9 12 12 13.5 13.5"></polyline><path d="M16.51 17.35l-.35 3.83a2 2 0 0 1-2 1.82H9.83a2 2 0 0 1-2-1.82l-.35-3.83m.01-10.7l.35-3.83A2 2 0 0 1 9.83 1h4.35a2 2 0 0 1 2 1.82l.35 3.83"></path>"#,
            Icon::Practice => r#"<polyline points="9 11 12 14 22 4"></polyline><path d="M21 12v7a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2h11"></path>"#,
            Icon::Tools => r#"<path d="M14.7 6.3a1 1 0 0 0 0 1.4l1.6 1.6a1 1 0 0 0 1.4 0l3.77-3.77a6 6 0 0 1-7.94 7.94l-6.91 6.91a2.12 2.12 0 0 1-3-3l6.91-6.91a6 6 0 0 1 7.94-7.94l-3.76 3.76z"></path>"#,
        }
    }
}

/// Standalone icon at `size` pixels.
pub fn svg(icon: Icon, size: u32) -> String {
    format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{size}" height="{size}" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">{}</svg>"#,
        icon.path()
    )
}

/// 16px icon styled to sit in front of a section heading label.
pub fn inline(icon: Icon) -> String {
    format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="16" height="16" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" style="display: inline-block; vertical-align: middle; margin-right: 6px;">{}</svg>"#,
        icon.path()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_svg_uses_requested_size() {
        let out = svg(Icon::External, 12);
        assert!(out.contains(r#"width="12" height="12""#));
        assert!(out.ends_with("</svg>"));
    }

    #[test]
    fn test_inline_icon_is_styled() {
        let out = inline(Icon::Watch);
        assert!(out.contains("margin-right: 6px"));
        assert!(out.contains(Icon::Watch.path()));
    }

    #[test]
    fn test_icon_names_deserialize_kebab_case() {
        let icon: Icon = serde_json::from_str("\"tryhackme\"").unwrap();
        assert_eq!(icon, Icon::Tryhackme);
        let icon: Icon = serde_json::from_str("\"cv\"").unwrap();
        assert_eq!(icon, Icon::Cv);
    }
}
