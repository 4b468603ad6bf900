//! # Folio
//!
//! Catalog projections and sidebar navigation for a static portfolio site.
//!
//! Folio turns compiled-in catalogs (workspace gear, hobbies, bookmarks)
//! into card grids and sidebar menus, and assembles the site-wide
//! navigation for whichever page is being rendered. Every renderer is a
//! pure function from data to markup; putting that markup into a live page
//! is the host's job, with [`page::attach`] as the reference adapter.
//!
//! ## Architecture
//!
//! - **Catalogs**: literal item data grouped into ordered buckets
//! - **Menus**: per-catalog sidebar data, plus the fixed projects menu
//! - **Registry**: optional sidebar-data accessors keyed by page family
//! - **Assembler**: primary navigation plus the current page's secondary menu
//! - **Events / Page**: host-side contracts and the document adapter
//!
//! ## Example
//!
//! ```
//! use folio::{RenderContext, SidebarAssembler, SidebarRegistry, SiteConfig};
//!
//! let config = SiteConfig::default();
//! let registry = SidebarRegistry::with_builtin();
//! let nav = SidebarAssembler::new(&config, &registry)
//!     .assemble(&RenderContext::from_location("/pages/workspace.html"));
//!
//! assert!(nav.primary.as_str().contains(r#"aria-current="page""#));
//! assert_eq!(nav.secondary.unwrap().data.title, "Workspace");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod catalog;
pub mod config;
pub mod context;
pub mod error;
pub mod events;
pub mod icons;
pub mod markup;
pub mod menu;
pub mod page;
pub mod projects;
pub mod registry;
pub mod sidebar;

// Re-export main types
pub use catalog::{Bucket, Catalog, CatalogKind, GridSize, Item, PrimarySection};
pub use config::{NavLink, Profile, SiteConfig};
pub use context::RenderContext;
pub use error::{FolioError, Result};
pub use events::{Breakpoint, ImageFallback, LinkAction, NavOverlay};
pub use icons::Icon;
pub use markup::Markup;
pub use menu::{SidebarData, SidebarLink, SidebarSection};
pub use page::{attach, HostPage, HtmlDocument};
pub use registry::{CatalogName, SidebarAccessor, SidebarRegistry};
pub use sidebar::{Navigation, SecondaryNav, SidebarAssembler};

/// Folio version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
