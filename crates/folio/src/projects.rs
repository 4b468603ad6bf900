//! Secondary menu for the projects page family
//!
//! Projects have no item catalog yet; the menu is a fixed structure whose
//! badges carry literal counts.

use crate::icons::Icon;
use crate::menu::{decorated_heading, SidebarData, SidebarLink, SidebarSection};

/// Sidebar data for `projects.html` and its sub-pages.
pub fn sidebar_data() -> SidebarData {
    SidebarData::new(
        "Projects",
        vec![
            SidebarSection::new(
                decorated_heading(Icon::Projects, "Projects", 1),
                vec![
                    SidebarLink::new("pythonleague.html", "PythonLeague"),
                    SidebarLink::coming_soon(),
                ],
            ),
            SidebarSection::new(
                decorated_heading(Icon::Cv, "Notes", 0),
                vec![SidebarLink::coming_soon()],
            ),
            SidebarSection::new(
                decorated_heading(Icon::Practice, "Practice", 0),
                vec![SidebarLink::coming_soon()],
            ),
            SidebarSection::new(
                decorated_heading(Icon::Tools, "Tools", 0),
                vec![SidebarLink::coming_soon()],
            ),
        ],
    )
}
