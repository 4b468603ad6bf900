//! Event contracts for the host page
//!
//! The renderer never subscribes to events. These are the decisions a host
//! makes when an event fires, written as plain functions and small state
//! machines so they can be tested without a document.

use crate::catalog::CatalogKind;
use crate::menu::COMING_SOON;

/// Widest viewport, in pixels, that counts as mobile for the nav overlay.
pub const MOBILE_MAX_WIDTH: u32 = 768;

/// Width at which the tablet layout ends.
pub const TABLET_MAX_WIDTH: u32 = 1024;

// ═══════════════════════════════════════════════════════════════════════
// Link clicks
// ═══════════════════════════════════════════════════════════════════════

/// What a click on a link should do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkAction {
    /// Nothing: the link points at content that does not exist yet
    Inert,

    /// Smooth-scroll to the element with this id and pulse it
    ScrollTo(String),

    /// Default browser navigation
    Navigate(String),
}

impl LinkAction {
    /// Decide the action for a link's `href`.
    pub fn for_href(href: &str) -> Self {
        if href == COMING_SOON {
            return LinkAction::Inert;
        }
        match href.strip_prefix('#') {
            Some("") => LinkAction::Inert,
            Some(id) => LinkAction::ScrollTo(id.to_string()),
            None => LinkAction::Navigate(href.to_string()),
        }
    }

    /// Whether the default click behaviour must be suppressed.
    pub fn prevents_default(&self) -> bool {
        !matches!(self, LinkAction::Navigate(_))
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Mobile navigation overlay
// ═══════════════════════════════════════════════════════════════════════

/// Open/closed state of the mobile navigation overlay.
///
/// Every transition returns whether the state changed, so the host only
/// touches classes and body scroll when it has to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavOverlay {
    open: bool,
}

impl NavOverlay {
    /// A closed overlay.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the overlay is open.
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Value for the toggle button's `aria-expanded` attribute.
    pub fn aria_expanded(&self) -> &'static str {
        if self.open {
            "true"
        } else {
            "false"
        }
    }

    /// Open the overlay.
    pub fn open(&mut self) -> bool {
        let changed = !self.open;
        self.open = true;
        changed
    }

    /// Close the overlay.
    pub fn close(&mut self) -> bool {
        let changed = self.open;
        self.open = false;
        changed
    }

    /// Toggle button clicked.
    pub fn toggle(&mut self) -> bool {
        if self.open {
            self.close()
        } else {
            self.open()
        }
    }

    /// Escape pressed.
    pub fn on_escape(&mut self) -> bool {
        self.close()
    }

    /// Window resized; desktop widths close the overlay.
    pub fn on_resize(&mut self, width: u32) -> bool {
        if width > MOBILE_MAX_WIDTH {
            self.close()
        } else {
            false
        }
    }

    /// A nav link was clicked. The CV entry opens a dialog instead of
    /// navigating, so it leaves the overlay alone.
    pub fn on_link_click(&mut self, width: u32, is_cv_link: bool) -> bool {
        if !is_cv_link && width <= MOBILE_MAX_WIDTH {
            self.close()
        } else {
            false
        }
    }
}

/// Layout breakpoint for a viewport width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Breakpoint {
    /// Below 768px
    Mobile,
    /// 768px up to 1024px
    Tablet,
    /// 1024px and above
    Desktop,
}

impl Breakpoint {
    /// Classify a viewport width.
    pub fn from_width(width: u32) -> Self {
        if width < MOBILE_MAX_WIDTH {
            Breakpoint::Mobile
        } else if width < TABLET_MAX_WIDTH {
            Breakpoint::Tablet
        } else {
            Breakpoint::Desktop
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Images and downloads
// ═══════════════════════════════════════════════════════════════════════

/// What to do when a card image fails to load.
///
/// Cards render the emoji fallback next to the image with `hidden` set;
/// on failure the host hides the image and unhides the sibling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageFallback {
    /// Selector of the image element to hide
    pub image_selector: &'static str,

    /// Selector of the emoji element to reveal
    pub emoji_selector: &'static str,
}

impl ImageFallback {
    /// Selectors for a catalog's cards.
    pub fn for_catalog(kind: CatalogKind) -> Self {
        match kind {
            CatalogKind::Workspace => Self {
                image_selector: ".workspace-item-image",
                emoji_selector: ".workspace-item-emoji",
            },
            CatalogKind::Hobbies => Self {
                image_selector: ".hobby-image",
                emoji_selector: ".hobby-emoji",
            },
            CatalogKind::Bookmarks => Self {
                image_selector: ".bookmark-favicon",
                emoji_selector: ".bookmark-emoji",
            },
        }
    }
}

/// File name offered when the CV download is confirmed.
pub fn download_file_name(url: &str) -> &str {
    let path = url.split(['?', '#']).next().unwrap_or(url);
    path.rsplit('/').next().unwrap_or(path)
}
