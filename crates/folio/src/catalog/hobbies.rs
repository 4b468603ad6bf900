//! Hobbies and collections catalog
//!
//! Besides the shared projections, hobbies render as one titled section
//! per collection ([`render_sections`]), each with a short blurb.

use std::sync::OnceLock;

use super::{image_or_emoji, Catalog, CatalogKind, Item, PrimarySection};
use crate::icons::Icon;
use crate::markup::{escape, slugify, Markup, EXTERNAL_ATTRS};

/// The built-in hobbies catalog.
pub fn catalog() -> &'static Catalog {
    static CATALOG: OnceLock<Catalog> = OnceLock::new();
    CATALOG.get_or_init(build)
}

fn build() -> Catalog {
    Catalog::new(
        CatalogKind::Hobbies,
        "Hobbies",
        PrimarySection {
            bucket: "watches",
            label: "Watches",
            icon: Icon::Watch,
        },
        "🎯",
    )
    .with_bucket(
        "watches",
        "Watch Collection",
        vec![Item::new(
            "seiko-srpg29k1",
            "Seiko 5 Sports SRPG29K1",
            "Automatic Watch",
            "https://www.seikowatches.com/global-en/products/5sports/srpg29",
        )
        .with_details("Field Watch")
        .with_image("https://www.seikowatches.com/global-en/-/media/Images/Product--Image/All/Seiko/2022/02/20/02/37/SRPG29K1/SRPG29K1.png?mh=1200&mw=1200")
        .with_description(
            "Japanese automatic movement with 40-hour power reserve. A reliable daily companion.",
        )
        .with_spec("movement", "Automatic 4R36")
        .with_spec("diameter", "39.4mm")
        .with_spec("waterResistance", "100m")],
    )
    .with_bucket("books", "Book Collection", vec![])
    .with_bucket("cameras", "Camera Gear", vec![])
    .with_emoji("seiko-srpg29k1", "⌚")
}

/// Blurb shown under a collection heading.
pub fn category_description(heading: &str) -> Option<&'static str> {
    match heading {
        "Watch Collection" => Some("Mechanical and automatic timepieces I admire"),
        "Book Collection" => Some("Books that shaped my thinking"),
        "Camera Gear" => Some("Photography equipment and tools"),
        _ => None,
    }
}

fn render_specs(item: &Item) -> String {
    item.specs
        .iter()
        .map(|(key, value)| {
            format!(
                r#"<div class="hobby-spec"><span>{}:</span>{}</div>"#,
                escape(key),
                escape(value)
            )
        })
        .collect()
}

/// Showcase card: media column, category line, title, description, specs.
pub(crate) fn render_card(catalog: &Catalog, item: &Item) -> Markup {
    let description = item
        .description
        .as_deref()
        .map(|d| format!(r#"<p class="hobby-description">{}</p>"#, escape(d)))
        .unwrap_or_default();
    let specs = render_specs(item);
    let specs = if specs.is_empty() {
        specs
    } else {
        format!(r#"<div class="hobby-specs">{}</div>"#, specs)
    };

    Markup::raw(format!(
        r#"<a href="{url}"{ext} class="hobby-showcase" id="{id}"><div class="hobby-image-section">{media}</div><div class="hobby-details"><div class="hobby-header"><p class="hobby-category">{category}</p><h3>{title}</h3></div>{description}{specs}</div></a>"#,
        url = escape(&item.url),
        ext = EXTERNAL_ATTRS,
        id = escape(&item.id),
        media = image_or_emoji(
            item.image.as_deref(),
            &item.title,
            "hobby-image",
            "hobby-emoji",
            catalog.emoji_for(&item.id),
        ),
        category = escape(&item.category_line()),
        title = escape(&item.title),
    ))
}

/// One `<section>` per non-empty collection, each with its own card grid.
pub fn render_sections(catalog: &Catalog) -> Markup {
    let sections: Vec<String> = catalog
        .by_category()
        .into_iter()
        .map(|(heading, items)| {
            let blurb = category_description(heading)
                .map(|d| format!(r#"<p class="text-muted">{}</p>"#, escape(d)))
                .unwrap_or_default();
            let cards: Vec<String> = items
                .iter()
                .map(|item| catalog.render_card(item).into_string())
                .collect();
            format!(
                r#"<section class="section"><h2>{}</h2>{}<div class="workspace-grid hobbies-grid" id="{}">{}</div></section>"#,
                escape(heading),
                blurb,
                slugify(heading),
                cards.join("\n")
            )
        })
        .collect();
    Markup::raw(sections.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_collections_are_not_projected() {
        let categories = catalog().by_category();
        assert_eq!(categories.keys().copied().collect::<Vec<_>>(), vec!["Watch Collection"]);
    }

    #[test]
    fn test_card_renders_specs_in_order() {
        let item = catalog().find("seiko-srpg29k1").unwrap();
        let card = catalog().render_card(item).into_string();
        let movement = card.find("movement:").unwrap();
        let diameter = card.find("diameter:").unwrap();
        let water = card.find("waterResistance:").unwrap();
        assert!(movement < diameter && diameter < water);
        assert!(card.contains(r#"<p class="hobby-category">Automatic Watch · Field Watch</p>"#));
        assert!(card.contains("mh=1200&amp;mw=1200"));
    }

    #[test]
    fn test_card_without_optional_fields() {
        let item = Item::new("film", "Film Camera", "Camera", "https://example.com");
        let card = catalog().render_card(&item).into_string();
        assert!(!card.contains("hobby-description"));
        assert!(!card.contains("hobby-specs"));
        assert!(card.contains(r#"<span class="hobby-emoji">🎯</span>"#));
    }

    #[test]
    fn test_sections_use_slug_ids_and_blurbs() {
        let out = render_sections(catalog()).into_string();
        assert!(out.contains(r#"id="watch-collection""#));
        assert!(out.contains("Mechanical and automatic timepieces I admire"));
        assert!(!out.contains("Book Collection"));
    }

    #[test]
    fn test_primary_badge_label() {
        let data = catalog().sidebar_data();
        assert_eq!(data.sections.len(), 1);
        assert!(data.sections[0]
            .heading
            .as_str()
            .ends_with(r#"Watches</span><span class="count-badge">1</span>"#));
    }
}
