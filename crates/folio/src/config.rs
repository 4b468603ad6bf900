//! Site configuration
//!
//! The defaults reproduce the live site. A JSON file can override any
//! subset of fields; missing fields keep their defaults.
//!
//! ```json
//! {
//!   "profile": { "name": "Jane Doe", "title": "Engineer" },
//!   "social": [{ "href": "https://example.com/jane", "label": "Example", "icon": "external" }]
//! }
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{FolioError, Result};
use crate::icons::Icon;

/// Profile block shown at the top of the primary navigation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    /// Display name
    pub name: String,

    /// Job title under the name
    pub title: String,

    /// Photo path, relative to the site root
    pub photo: String,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            name: "Utku Karakaya".to_string(),
            title: "Software Test Engineer".to_string(),
            photo: "assets/images/profile.webp".to_string(),
        }
    }
}

/// One navigation entry.
///
/// For internal groups `href` is a page file name (`about.html`) that gets
/// prefixed at render time; for external groups it is an absolute URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavLink {
    /// Page name or URL
    pub href: String,

    /// Visible label
    pub label: String,

    /// Leading icon
    pub icon: Icon,
}

impl NavLink {
    /// Create a navigation entry.
    pub fn new(href: impl Into<String>, label: impl Into<String>, icon: Icon) -> Self {
        Self {
            href: href.into(),
            label: label.into(),
            icon,
        }
    }
}

/// Everything about the primary navigation that is not derived from a catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Profile block
    pub profile: Profile,

    /// CV file, relative to the site root
    pub cv_file: String,

    /// Main navigation pages
    pub main_nav: Vec<NavLink>,

    /// "Other" group pages
    pub other: Vec<NavLink>,

    /// "Online" group URLs
    pub online: Vec<NavLink>,

    /// "Social" group URLs
    pub social: Vec<NavLink>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            profile: Profile::default(),
            cv_file: "Utku-Karakaya-CV.pdf".to_string(),
            main_nav: vec![
                NavLink::new("index.html", "Home", Icon::Home),
                NavLink::new("about.html", "About", Icon::About),
                NavLink::new("projects.html", "Projects", Icon::Projects),
                NavLink::new("workspace.html", "Workspace", Icon::Workspace),
            ],
            other: vec![
                NavLink::new("hobbies.html", "Hobbies", Icon::Hobbies),
                NavLink::new("bookmarks.html", "Bookmarks", Icon::Bookmarks),
            ],
            online: vec![
                NavLink::new("https://github.com/karakayautku4", "GitHub", Icon::Github),
                NavLink::new("https://roadmap.sh/u/karakayautku4", "Roadmap.sh", Icon::Roadmap),
                NavLink::new("https://tryhackme.com/p/karakayautku4", "TryHackMe", Icon::Tryhackme),
                NavLink::new("https://www.hackerrank.com/karakayautku4", "HackerRank", Icon::Hackerrank),
            ],
            social: vec![
                NavLink::new("https://linkedin.com/in/karakayautku4", "LinkedIn", Icon::Linkedin),
                NavLink::new("https://x.com/karakayautku4", "X", Icon::X),
                NavLink::new("https://instagram.com/karakayautku4", "Instagram", Icon::Instagram),
                NavLink::new("https://www.reddit.com/user/karakayautku4/", "Reddit", Icon::Reddit),
            ],
        }
    }
}

impl SiteConfig {
    /// Load a configuration file, filling unspecified fields with defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| FolioError::io(path, e))?;
        let config = serde_json::from_str(&text).map_err(|source| FolioError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "loaded site configuration");
        Ok(config)
    }

    /// Load `path` if given, otherwise use the defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_groups() {
        let config = SiteConfig::default();
        assert_eq!(config.main_nav.len(), 4);
        assert_eq!(config.other.len(), 2);
        assert_eq!(config.online.len(), 4);
        assert_eq!(config.social.len(), 4);
        assert_eq!(config.main_nav[0].href, "index.html");
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config: SiteConfig =
            serde_json::from_str(r#"{ "profile": { "name": "Jane Doe" } }"#).unwrap();
        assert_eq!(config.profile.name, "Jane Doe");
        assert_eq!(config.profile.title, "Software Test Engineer");
        assert_eq!(config.cv_file, "Utku-Karakaya-CV.pdf");
        assert_eq!(config.social.len(), 4);
    }

    #[test]
    fn test_load_or_default_without_path() {
        assert_eq!(SiteConfig::load_or_default(None).unwrap(), SiteConfig::default());
    }
}
