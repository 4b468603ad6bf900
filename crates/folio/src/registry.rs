//! Registry of sidebar-data accessors
//!
//! Each page family that owns a secondary menu is served by an accessor
//! registered under its [`CatalogName`]. Accessors are optional
//! collaborators: resolving a name with nothing registered yields an empty
//! menu instead of an error, so a page never loses its navigation because
//! one catalog was left out.
//!
//! ```text
//! ┌──────────────────┐  resolve(name)  ┌────────────────────────────┐
//! │ SidebarAssembler │ ──────────────→ │ SidebarRegistry            │
//! └──────────────────┘                 │  workspace → fn() → Data   │
//!                                      │  hobbies   → fn() → Data   │
//!                                      │  (missing) → empty(title)  │
//!                                      └────────────────────────────┘
//! ```

use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::CatalogKind;
use crate::menu::SidebarData;

/// Page families that own a secondary menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CatalogName {
    /// `workspace.html`
    Workspace,
    /// `hobbies.html`
    Hobbies,
    /// `bookmarks.html`
    Bookmarks,
    /// `projects.html` and project sub-pages
    Projects,
}

impl CatalogName {
    /// Pages that belong to the projects family.
    pub const PROJECT_PAGES: [&'static str; 2] = ["projects.html", "pythonleague.html"];

    /// Map a page file name to the catalog that owns its secondary menu.
    ///
    /// Matching is exact; `workspace.html.bak` or `old-hobbies.html` map to
    /// nothing.
    pub fn for_page(page: &str) -> Option<Self> {
        match page {
            "workspace.html" => Some(CatalogName::Workspace),
            "hobbies.html" => Some(CatalogName::Hobbies),
            "bookmarks.html" => Some(CatalogName::Bookmarks),
            p if Self::PROJECT_PAGES.contains(&p) => Some(CatalogName::Projects),
            _ => None,
        }
    }

    /// Lower-case name.
    pub fn as_str(self) -> &'static str {
        match self {
            CatalogName::Workspace => "workspace",
            CatalogName::Hobbies => "hobbies",
            CatalogName::Bookmarks => "bookmarks",
            CatalogName::Projects => "projects",
        }
    }

    /// Menu title used when no accessor is registered.
    pub fn title(self) -> &'static str {
        match self {
            CatalogName::Workspace => "Workspace",
            CatalogName::Hobbies => "Hobbies",
            CatalogName::Bookmarks => "Bookmarks",
            CatalogName::Projects => "Projects",
        }
    }
}

impl From<CatalogKind> for CatalogName {
    fn from(kind: CatalogKind) -> Self {
        match kind {
            CatalogKind::Workspace => CatalogName::Workspace,
            CatalogKind::Hobbies => CatalogName::Hobbies,
            CatalogKind::Bookmarks => CatalogName::Bookmarks,
        }
    }
}

impl fmt::Display for CatalogName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A function producing a page family's secondary menu.
pub type SidebarAccessor = Arc<dyn Fn() -> SidebarData + Send + Sync>;

/// Sidebar-data accessors keyed by catalog name, in registration order.
#[derive(Clone, Default)]
pub struct SidebarRegistry {
    accessors: IndexMap<CatalogName, SidebarAccessor>,
}

impl SidebarRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            accessors: IndexMap::new(),
        }
    }

    /// Registry with the three built-in catalogs and the projects menu.
    pub fn with_builtin() -> Self {
        let mut registry = Self::new();
        for kind in CatalogKind::ALL {
            registry.register_fn(kind.into(), move || kind.builtin().sidebar_data());
        }
        registry.register_fn(CatalogName::Projects, crate::projects::sidebar_data);
        registry
    }

    /// Register an accessor, replacing any previous one for `name`.
    pub fn register(&mut self, name: CatalogName, accessor: SidebarAccessor) {
        self.accessors.insert(name, accessor);
    }

    /// Register a plain function or closure as an accessor.
    pub fn register_fn<F>(&mut self, name: CatalogName, accessor: F)
    where
        F: Fn() -> SidebarData + Send + Sync + 'static,
    {
        self.register(name, Arc::new(accessor));
    }

    /// Remove an accessor. Returns whether one was registered.
    pub fn unregister(&mut self, name: CatalogName) -> bool {
        self.accessors.shift_remove(&name).is_some()
    }

    /// Look up an accessor.
    pub fn get(&self, name: CatalogName) -> Option<&SidebarAccessor> {
        self.accessors.get(&name)
    }

    /// Check whether an accessor is registered.
    pub fn contains(&self, name: CatalogName) -> bool {
        self.accessors.contains_key(&name)
    }

    /// Registered names in registration order.
    pub fn names(&self) -> impl Iterator<Item = CatalogName> + '_ {
        self.accessors.keys().copied()
    }

    /// Number of registered accessors.
    pub fn len(&self) -> usize {
        self.accessors.len()
    }

    /// Check whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.accessors.is_empty()
    }

    /// Sidebar data for `name`, or an empty menu titled after it.
    pub fn resolve(&self, name: CatalogName) -> SidebarData {
        match self.accessors.get(&name) {
            Some(accessor) => accessor(),
            None => {
                debug!(catalog = %name, "no sidebar accessor registered, using empty menu");
                SidebarData::empty(name.title())
            }
        }
    }
}

impl fmt::Debug for SidebarRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SidebarRegistry")
            .field("accessors", &self.accessors.keys().collect::<Vec<_>>())
            .finish()
    }
}
