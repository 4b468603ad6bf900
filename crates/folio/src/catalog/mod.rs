//! Catalogs: fixed, ordered collections of items grouped into buckets
//!
//! A catalog is literal data defined once at startup. Everything derived
//! from it (the flat list, the category projection, the sidebar menu and
//! the card markup) is a pure function recomputed on every call.
//!
//! ```text
//! Catalog ──┬─ all()          → [Item]              (grid rendering)
//!           ├─ by_category()  → {heading → [Item]}  (empty buckets omitted)
//!           └─ sidebar_data() → SidebarData         (primary section badged)
//! ```

pub mod bookmarks;
pub mod hobbies;
pub mod workspace;

use std::fmt;
use std::str::FromStr;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::FolioError;
use crate::icons::Icon;
use crate::markup::Markup;
use crate::menu::{decorated_heading, SidebarData, SidebarLink, SidebarSection};

// ═══════════════════════════════════════════════════════════════════════
// Items
// ═══════════════════════════════════════════════════════════════════════

/// Grid size hint for card layouts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GridSize {
    /// One cell
    #[default]
    Small,
    /// Two cells
    Medium,
    /// Four cells
    Large,
}

impl GridSize {
    /// CSS suffix for this size.
    pub fn as_str(self) -> &'static str {
        match self {
            GridSize::Small => "small",
            GridSize::Medium => "medium",
            GridSize::Large => "large",
        }
    }
}

/// One catalog entry.
///
/// `id` doubles as the DOM anchor for the rendered card, so it must be
/// unique within a catalog. Nothing checks this.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Slug-like identifier
    pub id: String,

    /// Display name
    pub title: String,

    /// Category label shown on the card
    pub category: String,

    /// Destination URL
    pub url: String,

    /// Author credit
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,

    /// Short suffix shown after the category (colour, variant, ...)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,

    /// Longer description paragraph
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Image or favicon URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    /// Ordered key/value specification rows
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub specs: IndexMap<String, String>,

    /// Tag chips
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,

    /// Grid size hint
    #[serde(default)]
    pub grid_size: GridSize,

    /// Whether the card is highlighted
    #[serde(default)]
    pub hero: bool,
}

impl Item {
    /// Create an item with only the required fields.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        category: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            category: category.into(),
            url: url.into(),
            author: None,
            details: None,
            description: None,
            image: None,
            specs: IndexMap::new(),
            tags: Vec::new(),
            grid_size: GridSize::default(),
            hero: false,
        }
    }

    /// Set the author.
    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    /// Set the details suffix.
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the image (or favicon) URL.
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    /// Append a specification row.
    pub fn with_spec(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.specs.insert(key.into(), value.into());
        self
    }

    /// Append a tag.
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    /// Set the grid size hint.
    pub fn with_grid_size(mut self, size: GridSize) -> Self {
        self.grid_size = size;
        self
    }

    /// Mark the item as a hero card.
    pub fn hero(mut self) -> Self {
        self.hero = true;
        self
    }

    /// Category line with the optional ` · details` suffix.
    pub fn category_line(&self) -> String {
        match &self.details {
            Some(details) => format!("{} · {}", self.category, details),
            None => self.category.clone(),
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Catalog identity
// ═══════════════════════════════════════════════════════════════════════

/// The item catalogs this site knows how to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CatalogKind {
    /// Desk and travel gear
    Workspace,
    /// Collections (watches, books, cameras)
    Hobbies,
    /// Favourite websites and resources
    Bookmarks,
}

impl CatalogKind {
    /// All kinds in navigation order.
    pub const ALL: [CatalogKind; 3] = [
        CatalogKind::Workspace,
        CatalogKind::Hobbies,
        CatalogKind::Bookmarks,
    ];

    /// Lower-case name.
    pub fn as_str(self) -> &'static str {
        match self {
            CatalogKind::Workspace => "workspace",
            CatalogKind::Hobbies => "hobbies",
            CatalogKind::Bookmarks => "bookmarks",
        }
    }

    /// The built-in catalog for this kind.
    pub fn builtin(self) -> &'static Catalog {
        match self {
            CatalogKind::Workspace => workspace::catalog(),
            CatalogKind::Hobbies => hobbies::catalog(),
            CatalogKind::Bookmarks => bookmarks::catalog(),
        }
    }
}

impl fmt::Display for CatalogKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CatalogKind {
    type Err = FolioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CatalogKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| FolioError::UnknownCatalog {
                name: s.to_string(),
                expected: CatalogKind::ALL.map(CatalogKind::as_str).join(", "),
            })
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Catalog
// ═══════════════════════════════════════════════════════════════════════

/// A named sub-collection of a catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bucket {
    /// Internal key (`devices`, `watches`, ...)
    pub key: &'static str,

    /// Display heading (`Devices`, `Watch Collection`, ...)
    pub heading: &'static str,

    /// Items in display order
    pub items: Vec<Item>,
}

/// Which bucket's sidebar section carries the icon and count badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrimarySection {
    /// Key of the designated bucket
    pub bucket: &'static str,

    /// Label shown in place of the bucket heading
    pub label: &'static str,

    /// Icon shown before the label
    pub icon: Icon,
}

/// An ordered collection of buckets plus its rendering metadata.
#[derive(Debug, Clone)]
pub struct Catalog {
    kind: CatalogKind,
    title: &'static str,
    buckets: Vec<Bucket>,
    primary: PrimarySection,
    emoji: IndexMap<&'static str, &'static str>,
    default_emoji: &'static str,
}

impl Catalog {
    /// Create an empty catalog.
    pub fn new(
        kind: CatalogKind,
        title: &'static str,
        primary: PrimarySection,
        default_emoji: &'static str,
    ) -> Self {
        Self {
            kind,
            title,
            buckets: Vec::new(),
            primary,
            emoji: IndexMap::new(),
            default_emoji,
        }
    }

    /// Append a bucket. Declaration order is display order.
    pub fn with_bucket(mut self, key: &'static str, heading: &'static str, items: Vec<Item>) -> Self {
        self.buckets.push(Bucket {
            key,
            heading,
            items,
        });
        self
    }

    /// Map an item id to the emoji shown when it has no usable image.
    pub fn with_emoji(mut self, id: &'static str, emoji: &'static str) -> Self {
        self.emoji.insert(id, emoji);
        self
    }

    /// Which catalog this is.
    pub fn kind(&self) -> CatalogKind {
        self.kind
    }

    /// Menu title.
    pub fn title(&self) -> &'static str {
        self.title
    }

    /// Buckets in declaration order.
    pub fn buckets(&self) -> &[Bucket] {
        &self.buckets
    }

    /// Designated primary section.
    pub fn primary(&self) -> PrimarySection {
        self.primary
    }

    /// Every item, buckets concatenated in declaration order.
    pub fn all(&self) -> Vec<&Item> {
        self.buckets.iter().flat_map(|b| b.items.iter()).collect()
    }

    /// Number of items across all buckets.
    pub fn total(&self) -> usize {
        self.buckets.iter().map(|b| b.items.len()).sum()
    }

    /// Items grouped under their bucket heading. Empty buckets are omitted.
    pub fn by_category(&self) -> IndexMap<&'static str, &[Item]> {
        self.buckets
            .iter()
            .filter(|b| !b.items.is_empty())
            .map(|b| (b.heading, b.items.as_slice()))
            .collect()
    }

    /// Look up an item by id.
    pub fn find(&self, id: &str) -> Option<&Item> {
        self.buckets
            .iter()
            .flat_map(|b| b.items.iter())
            .find(|item| item.id == id)
    }

    /// Fallback emoji for an item id.
    pub fn emoji_for(&self, id: &str) -> &'static str {
        self.emoji.get(id).copied().unwrap_or(self.default_emoji)
    }

    /// Render one item as a self-contained card.
    pub fn render_card(&self, item: &Item) -> Markup {
        match self.kind {
            CatalogKind::Workspace => workspace::render_card(self, item),
            CatalogKind::Hobbies => hobbies::render_card(self, item),
            CatalogKind::Bookmarks => bookmarks::render_card(self, item),
        }
    }

    /// Render every item's card in `all()` order.
    pub fn render_grid(&self) -> Markup {
        let cards: Vec<String> = self
            .all()
            .into_iter()
            .map(|item| self.render_card(item).into_string())
            .collect();
        Markup::raw(cards.join("\n"))
    }

    /// Sidebar menu: one section per non-empty bucket, linking to each card.
    ///
    /// The primary bucket's heading is replaced by an icon, its label and a
    /// badge counting every item in the catalog, not just that bucket's.
    pub fn sidebar_data(&self) -> SidebarData {
        let total = self.total();
        let sections = self
            .buckets
            .iter()
            .filter(|b| !b.items.is_empty())
            .map(|bucket| {
                let heading = if bucket.key == self.primary.bucket {
                    decorated_heading(self.primary.icon, self.primary.label, total)
                } else {
                    Markup::text(bucket.heading)
                };
                let links = bucket
                    .items
                    .iter()
                    .map(|item| SidebarLink::anchor(&item.id, item.title.clone()))
                    .collect();
                SidebarSection::new(heading, links)
            })
            .collect();
        SidebarData::new(self.title, sections)
    }
}

/// Image with a hidden emoji sibling, or a visible emoji when there is no image.
///
/// The host reveals the sibling when the image fails to load; see
/// [`crate::events::ImageFallback`].
pub(crate) fn image_or_emoji(
    image: Option<&str>,
    alt: &str,
    image_class: &str,
    emoji_class: &str,
    emoji: &str,
) -> String {
    match image {
        Some(src) => format!(
            r#"<img src="{}" alt="{}" class="{}" loading="lazy" data-fallback="{}"><span class="{}" hidden>{}</span>"#,
            crate::markup::escape(src),
            crate::markup::escape(alt),
            image_class,
            emoji_class,
            emoji_class,
            emoji
        ),
        None => format!(r#"<span class="{}">{}</span>"#, emoji_class, emoji),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Catalog {
        Catalog::new(
            CatalogKind::Workspace,
            "Sample",
            PrimarySection {
                bucket: "c",
                label: "Cees",
                icon: Icon::Tools,
            },
            "📦",
        )
        .with_bucket("a", "Heading A", vec![Item::new("x", "X", "Cat", "https://x")])
        .with_bucket("b", "Heading B", vec![])
        .with_bucket(
            "c",
            "Heading C",
            vec![
                Item::new("y", "Y", "Cat", "https://y"),
                Item::new("z", "Z", "Cat", "https://z"),
            ],
        )
        .with_emoji("x", "❌")
    }

    #[test]
    fn test_category_line() {
        let item = Item::new("a", "A", "Laptop", "u");
        assert_eq!(item.category_line(), "Laptop");
        assert_eq!(item.with_details("Silver").category_line(), "Laptop · Silver");
    }

    #[test]
    fn test_emoji_lookup_defaults() {
        let catalog = sample();
        assert_eq!(catalog.emoji_for("x"), "❌");
        assert_eq!(catalog.emoji_for("unmapped"), "📦");
    }

    #[test]
    fn test_find_by_id() {
        let catalog = sample();
        assert_eq!(catalog.find("z").map(|i| i.title.as_str()), Some("Z"));
        assert!(catalog.find("missing").is_none());
    }

    #[test]
    fn test_kind_from_str() {
        assert_eq!("hobbies".parse::<CatalogKind>().unwrap(), CatalogKind::Hobbies);
        let err = "recipes".parse::<CatalogKind>().unwrap_err();
        assert!(err.to_string().contains("workspace, hobbies, bookmarks"));
    }

    #[test]
    fn test_primary_badge_counts_whole_catalog() {
        let data = sample().sidebar_data();
        assert_eq!(data.sections.len(), 2);
        assert_eq!(data.sections[0].heading.as_str(), "Heading A");
        assert!(data.sections[1]
            .heading
            .as_str()
            .ends_with(r#"Cees</span><span class="count-badge">3</span>"#));
    }

    #[test]
    fn test_image_or_emoji_without_image() {
        let out = image_or_emoji(None, "Alt", "img", "emoji", "🎯");
        assert_eq!(out, r#"<span class="emoji">🎯</span>"#);
    }

    #[test]
    fn test_image_or_emoji_with_image_keeps_hidden_fallback() {
        let out = image_or_emoji(Some("https://i/x.png"), "A \"B\"", "img", "emoji", "🎯");
        assert!(out.contains(r#"alt="A &quot;B&quot;""#));
        assert!(out.contains(r#"<span class="emoji" hidden>🎯</span>"#));
    }
}
