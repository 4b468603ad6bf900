//! Bookmarks catalog

use std::sync::OnceLock;

use super::{image_or_emoji, Catalog, CatalogKind, Item, PrimarySection};
use crate::icons::Icon;
use crate::markup::{escape, Markup, EXTERNAL_ATTRS};

/// The built-in bookmarks catalog.
pub fn catalog() -> &'static Catalog {
    static CATALOG: OnceLock<Catalog> = OnceLock::new();
    CATALOG.get_or_init(build)
}

fn build() -> Catalog {
    Catalog::new(
        CatalogKind::Bookmarks,
        "Bookmarks",
        PrimarySection {
            bucket: "articles",
            label: "Bookmarks",
            icon: Icon::Bookmarks,
        },
        "🔖",
    )
    .with_bucket(
        "articles",
        "Articles",
        vec![Item::new(
            "mechanical-watch",
            "Mechanical Watch",
            "Articles",
            "https://ciechanow.ski/mechanical-watch/",
        )
        .with_author("Bartosz Ciechanowski")
        .with_image("https://ciechanow.ski/favicon.ico")
        .with_description(
            "An absolutely stunning interactive explanation of how mechanical watches work. \
             Beautiful visualizations and deep dive into horology.",
        )
        .with_tag("Engineering")
        .with_tag("Interactive")
        .with_tag("Watches")],
    )
    .with_bucket("tools", "Tools", vec![])
    .with_bucket("learning", "Learning", vec![])
    .with_bucket("inspiration", "Inspiration", vec![])
}

fn render_tags(tags: &[String]) -> String {
    if tags.is_empty() {
        return String::new();
    }
    let chips: String = tags
        .iter()
        .map(|tag| format!(r#"<span class="bookmark-tag">{}</span>"#, escape(tag)))
        .collect();
    format!(r#"<div class="bookmark-tags">{}</div>"#, chips)
}

/// Compact list card: favicon, title, author, description, category and tags.
pub(crate) fn render_card(catalog: &Catalog, item: &Item) -> Markup {
    let author = item
        .author
        .as_deref()
        .map(|a| format!(r#"<span class="bookmark-author">by {}</span>"#, escape(a)))
        .unwrap_or_default();
    let description = item
        .description
        .as_deref()
        .map(|d| format!(r#"<p class="bookmark-description">{}</p>"#, escape(d)))
        .unwrap_or_default();

    Markup::raw(format!(
        r#"<a href="{url}"{ext} class="bookmark-card" id="{id}" data-category="{category}"><div class="bookmark-icon">{icon}</div><div class="bookmark-content"><div class="bookmark-header"><h3>{title}</h3>{author}</div>{description}<div class="bookmark-meta"><span class="bookmark-category">{category}</span>{tags}</div></div></a>"#,
        url = escape(&item.url),
        ext = EXTERNAL_ATTRS,
        id = escape(&item.id),
        category = escape(&item.category),
        icon = image_or_emoji(
            item.image.as_deref(),
            &item.title,
            "bookmark-favicon",
            "bookmark-emoji",
            catalog.emoji_for(&item.id),
        ),
        title = escape(&item.title),
        tags = render_tags(&item.tags),
    ))
}
