//! Sidebar assembler
//!
//! Builds the page-wide navigation from the site configuration, the current
//! [`RenderContext`] and the registered catalog menus.
//!
//! ```text
//! RenderContext ─┐
//! SiteConfig ────┼─→ SidebarAssembler::assemble ─→ Navigation
//! SidebarRegistry┘                                   ├─ primary   (always)
//!                                                    └─ secondary (catalog pages only)
//! ```
//!
//! The secondary menu is rendered twice from the same data: once as the
//! desktop panel and once inlined into the primary nav for small screens,
//! placed right before the first group title.

use tracing::debug;

use crate::config::{NavLink, SiteConfig};
use crate::context::RenderContext;
use crate::icons::{self, Icon};
use crate::markup::{escape, Markup, EXTERNAL_ATTRS};
use crate::menu::{SidebarData, SidebarLink};
use crate::registry::{CatalogName, SidebarRegistry};

/// Size of icons in the primary navigation.
const NAV_ICON_SIZE: u32 = 16;

/// Size of the trailing external-link marker.
const EXTERNAL_ICON_SIZE: u32 = 12;

/// Secondary menu for the current page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecondaryNav {
    /// Catalog the menu came from
    pub catalog: CatalogName,

    /// Menu data as returned by the registry
    pub data: SidebarData,

    /// Desktop panel markup
    pub markup: Markup,
}

/// Output of one assembler run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigation {
    /// Primary navigation markup (profile, links, groups)
    pub primary: Markup,

    /// Secondary panel, present only on catalog pages
    pub secondary: Option<SecondaryNav>,
}

/// Composes primary and secondary navigation for a page.
#[derive(Debug, Clone, Copy)]
pub struct SidebarAssembler<'a> {
    config: &'a SiteConfig,
    registry: &'a SidebarRegistry,
}

impl<'a> SidebarAssembler<'a> {
    /// Create an assembler over a configuration and a registry.
    pub fn new(config: &'a SiteConfig, registry: &'a SidebarRegistry) -> Self {
        Self { config, registry }
    }

    /// Build the navigation for the page described by `ctx`.
    pub fn assemble(&self, ctx: &RenderContext) -> Navigation {
        let secondary = ctx.catalog().map(|catalog| {
            let data = self.registry.resolve(catalog);
            let markup = render_secondary_menu(&data);
            SecondaryNav {
                catalog,
                data,
                markup,
            }
        });
        let mobile = secondary.as_ref().map(|s| render_mobile_menu(&s.data));
        let primary = self.render_primary(ctx, mobile.as_ref());

        debug!(
            page = %ctx.page,
            nested = ctx.nested,
            catalog = ?secondary.as_ref().map(|s| s.catalog),
            "assembled navigation"
        );

        Navigation { primary, secondary }
    }

    fn render_primary(&self, ctx: &RenderContext, mobile: Option<&Markup>) -> Markup {
        let profile = &self.config.profile;
        let mut out = String::new();

        out.push_str(&format!(
            r#"<div class="profile-section"><img src="{}" alt="{}" class="profile-photo"><div class="profile-info"><a class="brand" href="{}">{}</a><p class="profile-title">{}</p></div></div>"#,
            escape(&ctx.asset_href(&profile.photo)),
            escape(&profile.name),
            escape(&ctx.page_href(crate::context::DEFAULT_PAGE)),
            escape(&profile.name),
            escape(&profile.title),
        ));

        out.push_str(r#"<nav class="nav">"#);
        for link in &self.config.main_nav {
            out.push_str(&internal_link(ctx, link, false));
        }
        out.push_str(&format!(
            r#"<a href="{}" data-cv-download>{}CV</a>"#,
            escape(&ctx.asset_href(&self.config.cv_file)),
            icons::svg(Icon::Cv, NAV_ICON_SIZE),
        ));

        if let Some(mobile) = mobile {
            out.push_str(mobile.as_str());
        }

        out.push_str(&group_title("Other"));
        out.push_str(r#"<div class="social-links">"#);
        for link in &self.config.other {
            out.push_str(&internal_link(ctx, link, true));
        }
        out.push_str("</div>");

        for (title, links) in [("Online", &self.config.online), ("Social", &self.config.social)] {
            out.push_str(&group_title(title));
            out.push_str(r#"<div class="social-links">"#);
            for link in links {
                out.push_str(&external_link(link));
            }
            out.push_str("</div>");
        }

        out.push_str("</nav>");
        Markup::raw(out)
    }
}

fn group_title(title: &str) -> String {
    format!(r#"<h3 class="sidebar-title">{}</h3>"#, escape(title))
}

fn internal_link(ctx: &RenderContext, link: &NavLink, wrap_label: bool) -> String {
    let current = if ctx.is_current(&link.href) {
        r#" aria-current="page""#
    } else {
        ""
    };
    let label = if wrap_label {
        format!("<span>{}</span>", escape(&link.label))
    } else {
        escape(&link.label)
    };
    format!(
        r#"<a href="{}"{}>{}{}</a>"#,
        escape(&ctx.page_href(&link.href)),
        current,
        icons::svg(link.icon, NAV_ICON_SIZE),
        label
    )
}

fn external_link(link: &NavLink) -> String {
    format!(
        r#"<a href="{}"{}>{}<span>{}</span>{}</a>"#,
        escape(&link.href),
        EXTERNAL_ATTRS,
        icons::svg(link.icon, NAV_ICON_SIZE),
        escape(&link.label),
        icons::svg(Icon::External, EXTERNAL_ICON_SIZE),
    )
}

/// Render one secondary-menu link.
///
/// Placeholder links still render; the host treats them as inert (see
/// [`crate::events::LinkAction`]).
pub fn render_menu_link(link: &SidebarLink) -> String {
    let ext = if link.external { EXTERNAL_ATTRS } else { "" };
    let inert = if link.is_placeholder() {
        r#" aria-disabled="true""#
    } else {
        ""
    };
    format!(
        r#"<a href="{}"{}{}>{}</a>"#,
        escape(&link.href),
        ext,
        inert,
        escape(&link.label)
    )
}

fn render_links(links: &[SidebarLink]) -> String {
    links.iter().map(render_menu_link).collect()
}

/// Desktop secondary panel content.
pub fn render_secondary_menu(data: &SidebarData) -> Markup {
    let out: String = data
        .sections
        .iter()
        .map(|section| {
            format!(
                r#"<h3>{}</h3><nav class="secondary-sidebar-nav">{}</nav>"#,
                section.heading,
                render_links(&section.links)
            )
        })
        .collect();
    Markup::raw(out)
}

/// Mobile-only copy of the secondary menu, inlined into the primary nav.
pub fn render_mobile_menu(data: &SidebarData) -> Markup {
    let sections: String = data
        .sections
        .iter()
        .map(|section| {
            format!(
                r#"<div class="mobile-secondary-section"><p class="mobile-secondary-heading">{}</p><div class="mobile-secondary-links">{}</div></div>"#,
                section.heading,
                render_links(&section.links)
            )
        })
        .collect();
    Markup::raw(format!(
        r#"<div class="mobile-secondary-menu">{}{}</div>"#,
        group_title(&data.title),
        sections
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_link_attributes() {
        assert_eq!(
            render_menu_link(&SidebarLink::anchor("a", "A & B")),
            r##"<a href="#a">A &amp; B</a>"##
        );
        assert_eq!(
            render_menu_link(&SidebarLink::external("https://x", "X")),
            r#"<a href="https://x" target="_blank" rel="noopener noreferrer">X</a>"#
        );
        assert_eq!(
            render_menu_link(&SidebarLink::coming_soon()),
            r##"<a href="#coming-soon" aria-disabled="true">Coming soon...</a>"##
        );
    }

    #[test]
    fn test_mobile_menu_has_title() {
        let out = render_mobile_menu(&SidebarData::empty("Hobbies")).into_string();
        assert_eq!(
            out,
            r#"<div class="mobile-secondary-menu"><h3 class="sidebar-title">Hobbies</h3></div>"#
        );
    }

    #[test]
    fn test_secondary_menu_for_empty_data_is_empty() {
        assert!(render_secondary_menu(&SidebarData::empty("Workspace")).is_empty());
    }
}
