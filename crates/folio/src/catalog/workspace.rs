//! Workspace gear catalog

use std::sync::OnceLock;

use super::{image_or_emoji, Catalog, CatalogKind, GridSize, Item, PrimarySection};
use crate::icons::Icon;
use crate::markup::{escape, Markup, EXTERNAL_ATTRS};

/// The built-in workspace catalog.
pub fn catalog() -> &'static Catalog {
    static CATALOG: OnceLock<Catalog> = OnceLock::new();
    CATALOG.get_or_init(build)
}

fn build() -> Catalog {
    Catalog::new(
        CatalogKind::Workspace,
        "Workspace",
        PrimarySection {
            bucket: "devices",
            label: "Devices",
            icon: Icon::Laptop,
        },
        "📦",
    )
    .with_bucket(
        "devices",
        "Devices",
        vec![
            Item::new(
                "apple-macbook-air",
                "Apple MacBook Air M4 13\"",
                "Laptop",
                "https://www.apple.com/macbook-air/",
            )
            .with_details("Silver")
            .with_grid_size(GridSize::Large)
            .hero(),
            Item::new(
                "apple-ipad-air",
                "Apple iPad Air M3 11\"",
                "Tablet",
                "https://www.apple.com/ipad-air/",
            )
            .with_details("Space Gray")
            .with_grid_size(GridSize::Medium)
            .hero(),
            Item::new(
                "apple-airpods-pro",
                "Apple AirPods Pro 2",
                "Audio",
                "https://www.apple.com/airpods-pro/",
            ),
            Item::new(
                "beats-pill",
                "Beats Pill",
                "Speaker",
                "https://www.beatsbydre.com/speakers/beats-pill/MW443/beatspill-black",
            ),
        ],
    )
    .with_bucket(
        "display",
        "Display & Lighting",
        vec![
            Item::new(
                "xiaomi-monitor",
                "Xiaomi A27Ui 4K Monitor",
                "Display",
                "https://www.mi.com/global/product/xiaomi-4k-monitor-a27ui/",
            )
            .with_image("https://cdn.mos.cms.futurecdn.net/VVUvYShtSMbWnCFVNXo9nM.jpg")
            .with_grid_size(GridSize::Large)
            .hero(),
            Item::new(
                "xiaomi-light-bar",
                "Xiaomi Monitor Light Bar",
                "Lighting",
                "https://www.mi.com/global/product/mi-computer-monitor-light-bar/",
            )
            .with_image("https://m.media-amazon.com/images/I/61VuRqZW1AL._AC_SL1500_.jpg"),
        ],
    )
    .with_bucket(
        "accessories",
        "Accessories",
        vec![
            Item::new(
                "logitech-mouse",
                "Logitech MX Anywhere 3S",
                "Mouse",
                "https://www.logitech.com/en-us/products/mice/mx-anywhere-3s.html",
            )
            .with_image("https://m.media-amazon.com/images/I/51vVS+RUEPL._AC_SL1500_.jpg"),
            Item::new(
                "apple-magic-keyboard",
                "Apple Magic Keyboard",
                "Keyboard",
                "https://www.apple.com/shop/product/MK2C3LL/A/magic-keyboard-us-english-black-keys",
            )
            .with_details("Black"),
            Item::new(
                "logitech-desk-mat",
                "Logitech Desk Mat Studio Series",
                "Desk Mat",
                "https://www.logitech.com/en-us/products/mouse-pads/desk-mat-studio-series.html",
            )
            .with_details("Grey")
            .with_image("https://m.media-amazon.com/images/I/71dQx3yLN1L._AC_SL1500_.jpg"),
            Item::new(
                "bellroy-laptop-sleeve",
                "Bellroy Lite Laptop Sleeve",
                "Laptop Sleeve",
                "https://bellroy.com/products/lite-laptop-sleeve",
            )
            .with_details("Black")
            .with_image("https://m.media-amazon.com/images/I/71xOy4hzs1L._AC_SL1500_.jpg"),
            Item::new(
                "bellroy-tech-kit",
                "Bellroy Patty Mills Tech Kit",
                "Tech Organizer",
                "https://bellroy.com/products/tech-kit",
            )
            .with_image("https://m.media-amazon.com/images/I/71SZeQPR4JL._AC_SL1500_.jpg"),
        ],
    )
    .with_emoji("apple-macbook-air", "💻")
    .with_emoji("apple-ipad-air", "📱")
    .with_emoji("apple-airpods-pro", "🎧")
    .with_emoji("beats-pill", "🔊")
    .with_emoji("xiaomi-monitor", "🖥️")
    .with_emoji("xiaomi-light-bar", "💡")
    .with_emoji("logitech-mouse", "🖱️")
    .with_emoji("apple-magic-keyboard", "⌨️")
    .with_emoji("logitech-desk-mat", "🗒️")
    .with_emoji("bellroy-laptop-sleeve", "👜")
    .with_emoji("bellroy-tech-kit", "🎒")
}

/// Bento-grid card: image or emoji, title, category line.
pub(crate) fn render_card(catalog: &Catalog, item: &Item) -> Markup {
    let mut classes = format!("workspace-item workspace-item-{}", item.grid_size.as_str());
    if item.hero {
        classes.push_str(" workspace-item-hero");
    }
    let title = escape(&item.title);
    let category_line = escape(&item.category_line());

    Markup::raw(format!(
        r#"<a href="{url}" class="{classes}" id="{id}"{ext}>{media}<div class="workspace-item-content"><h3 title="{title}">{title}</h3><p class="text-muted" title="{category_line}">{category_line}</p></div></a>"#,
        url = escape(&item.url),
        id = escape(&item.id),
        ext = EXTERNAL_ATTRS,
        media = image_or_emoji(
            item.image.as_deref(),
            &item.title,
            "workspace-item-image",
            "workspace-item-emoji",
            catalog.emoji_for(&item.id),
        ),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_bucket_order() {
        let keys: Vec<&str> = catalog().buckets().iter().map(|b| b.key).collect();
        assert_eq!(keys, vec!["devices", "display", "accessories"]);
        assert_eq!(catalog().total(), 11);
    }

    #[test]
    fn test_hero_card_classes() {
        let item = catalog().find("apple-macbook-air").unwrap();
        let card = catalog().render_card(item);
        assert!(card
            .as_str()
            .contains(r#"class="workspace-item workspace-item-large workspace-item-hero""#));
        assert!(card.as_str().contains("Laptop · Silver"));
        assert!(card.as_str().contains("Apple MacBook Air M4 13&quot;"));
        assert!(card.as_str().contains(r#"<span class="workspace-item-emoji">💻</span>"#));
    }

    #[test]
    fn test_card_with_image_keeps_emoji_fallback() {
        let item = catalog().find("xiaomi-light-bar").unwrap();
        let card = catalog().render_card(item).into_string();
        assert!(card.contains(r#"class="workspace-item-image""#));
        assert!(card.contains(r#"<span class="workspace-item-emoji" hidden>💡</span>"#));
        assert!(card.contains(r#"class="workspace-item workspace-item-small""#));
    }

    #[test]
    fn test_primary_section_is_devices() {
        let data = catalog().sidebar_data();
        assert_eq!(data.title, "Workspace");
        assert_eq!(data.sections.len(), 3);
        assert!(data.sections[0]
            .heading
            .as_str()
            .ends_with(r#"Devices</span><span class="count-badge">11</span>"#));
        assert_eq!(data.sections[1].heading.as_str(), "Display &amp; Lighting");
    }
}
