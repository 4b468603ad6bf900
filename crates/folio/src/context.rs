//! Render context: which page is being rendered and from where

use crate::registry::CatalogName;

/// Page name used when the location ends in a directory.
pub const DEFAULT_PAGE: &str = "index.html";

/// Directory holding every page except the home page.
pub const PAGES_DIR: &str = "pages";

/// Inputs that vary per page render.
///
/// Everything the assembler needs to know about the live location is
/// captured here, so rendering stays a pure function of this value, the
/// site configuration and the registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderContext {
    /// File name of the current page (`workspace.html`)
    pub page: String,

    /// Whether the page lives one directory below the site root
    pub nested: bool,
}

impl Default for RenderContext {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE.to_string(),
            nested: false,
        }
    }
}

impl RenderContext {
    /// Create a context for a page at the site root.
    pub fn new(page: impl Into<String>) -> Self {
        Self {
            page: page.into(),
            nested: false,
        }
    }

    /// Create a context for a page inside the pages directory.
    pub fn nested(page: impl Into<String>) -> Self {
        Self {
            page: page.into(),
            nested: true,
        }
    }

    /// Derive the context from a location path such as `/pages/hobbies.html`.
    pub fn from_location(path: &str) -> Self {
        let page = path
            .rsplit('/')
            .next()
            .filter(|segment| !segment.is_empty())
            .unwrap_or(DEFAULT_PAGE);
        let nested = path.contains(&format!("/{}/", PAGES_DIR));
        Self {
            page: page.to_string(),
            nested,
        }
    }

    /// Relative prefix that leads back to the site root.
    pub fn prefix(&self) -> &'static str {
        if self.nested {
            "../"
        } else {
            ""
        }
    }

    /// Prefix a root-relative asset path (`assets/...`, the CV file).
    pub fn asset_href(&self, path: &str) -> String {
        format!("{}{}", self.prefix(), path)
    }

    /// Href for an internal page: the home page sits at the root, all
    /// other pages under the pages directory.
    pub fn page_href(&self, page: &str) -> String {
        if page == DEFAULT_PAGE {
            self.asset_href(page)
        } else {
            format!("{}{}/{}", self.prefix(), PAGES_DIR, page)
        }
    }

    /// Whether `page` is the page being rendered.
    pub fn is_current(&self, page: &str) -> bool {
        self.page == page
    }

    /// Catalog owning the current page's secondary menu.
    pub fn catalog(&self) -> Option<CatalogName> {
        CatalogName::for_page(&self.page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_location_nested_page() {
        let ctx = RenderContext::from_location("/pages/workspace.html");
        assert_eq!(ctx.page, "workspace.html");
        assert!(ctx.nested);
        assert_eq!(ctx.prefix(), "../");
        assert_eq!(ctx.catalog(), Some(CatalogName::Workspace));
    }

    #[test]
    fn test_from_location_root() {
        assert_eq!(RenderContext::from_location("/"), RenderContext::default());
        assert_eq!(RenderContext::from_location(""), RenderContext::default());
        let ctx = RenderContext::from_location("/index.html");
        assert_eq!(ctx.page, "index.html");
        assert!(!ctx.nested);
    }

    #[test]
    fn test_page_hrefs() {
        let root = RenderContext::new("index.html");
        assert_eq!(root.page_href("index.html"), "index.html");
        assert_eq!(root.page_href("about.html"), "pages/about.html");

        let nested = RenderContext::nested("about.html");
        assert_eq!(nested.page_href("index.html"), "../index.html");
        assert_eq!(nested.page_href("hobbies.html"), "../pages/hobbies.html");
        assert_eq!(nested.asset_href("assets/images/profile.webp"), "../assets/images/profile.webp");
    }

    #[test]
    fn test_is_current_is_exact() {
        let ctx = RenderContext::nested("about.html");
        assert!(ctx.is_current("about.html"));
        assert!(!ctx.is_current("about"));
        assert!(!ctx.is_current("pages/about.html"));
    }
}
