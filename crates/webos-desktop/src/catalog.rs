//! Application catalog
//!
//! Static list of launchable apps, loaded from JSON. Entries with
//! `indock` appear in the dock and are left off the desktop grid. The rest
//! get a desktop icon, ordered by `priority` (lower first, ties keep file
//! order).

use serde::{Deserialize, Serialize};

use crate::error::DesktopResult;
use crate::math::Size;
use crate::window::{WindowConfig, WindowContent};

/// One launchable application
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AppEntry {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub priority: i32,
    #[serde(default)]
    pub indock: bool,
    /// Component rendered inside a window
    #[serde(default)]
    pub component: Option<String>,
    /// External link opened instead of a window
    #[serde(default)]
    pub link: Option<String>,
    /// Initial window size
    #[serde(default)]
    pub size: Option<Size>,
}

/// What launching an entry does
#[derive(Clone, Debug, PartialEq)]
pub enum AppTarget {
    /// Open (or focus) a window
    Window(WindowConfig),
    /// Navigate to an external URL
    Link(String),
}

impl AppEntry {
    /// Resolve the launch target; entries without a link open a window
    /// hosting their component (or a component named after the app)
    pub fn target(&self) -> AppTarget {
        if let Some(link) = &self.link {
            return AppTarget::Link(link.clone());
        }
        let name = self.component.clone().unwrap_or_else(|| self.id.clone());
        AppTarget::Window(WindowConfig {
            id: Some(self.id.clone()),
            title: self.name.clone(),
            app_id: Some(self.id.clone()),
            size: self.size,
            content: WindowContent::Component { name },
            ..Default::default()
        })
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AppCatalog {
    entries: Vec<AppEntry>,
}

impl AppCatalog {
    pub fn new(entries: Vec<AppEntry>) -> Self {
        Self { entries }
    }

    /// Parse a JSON array of entries
    pub fn from_json(json: &str) -> DesktopResult<Self> {
        let entries: Vec<AppEntry> = serde_json::from_str(json)?;
        Ok(Self::new(entries))
    }

    pub fn entries(&self) -> &[AppEntry] {
        &self.entries
    }

    pub fn get(&self, id: &str) -> Option<&AppEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Entries placed on the desktop grid, in icon order
    ///
    /// Dock entries are left out. Equal priorities keep file order.
    pub fn desktop_entries(&self) -> Vec<&AppEntry> {
        let mut entries: Vec<&AppEntry> = self.entries.iter().filter(|e| !e.indock).collect();
        entries.sort_by_key(|e| e.priority);
        entries
    }

    /// Entries shown in the dock, in file order
    pub fn dock_entries(&self) -> Vec<&AppEntry> {
        self.entries.iter().filter(|e| e.indock).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CATALOG: &str = r#"[
        {"id": "terminal", "name": "Terminal", "icon": "terminal.png", "priority": 2, "indock": true},
        {"id": "sorting", "name": "Sorting", "priority": 1, "component": "SortingVisualizer",
         "size": {"width": 800, "height": 600}},
        {"id": "github", "name": "GitHub", "priority": 2, "indock": true, "link": "https://github.com"},
        {"id": "blog", "name": "Blog", "priority": 1, "link": "https://example.org"}
    ]"#;

    #[test]
    fn test_parse_and_order() {
        let catalog = AppCatalog::from_json(CATALOG).unwrap();
        let desktop: Vec<_> = catalog.desktop_entries().iter().map(|e| e.id.as_str()).collect();
        assert_eq!(desktop, vec!["sorting", "blog"]);
        let dock: Vec<_> = catalog.dock_entries().iter().map(|e| e.id.as_str()).collect();
        assert_eq!(dock, vec!["terminal", "github"]);
    }

    #[test]
    fn test_targets() {
        let catalog = AppCatalog::from_json(CATALOG).unwrap();
        assert_eq!(
            catalog.get("github").unwrap().target(),
            AppTarget::Link("https://github.com".into())
        );

        let AppTarget::Window(config) = catalog.get("sorting").unwrap().target() else {
            panic!("expected a window target");
        };
        assert_eq!(config.id.as_deref(), Some("sorting"));
        assert_eq!(config.size, Some(Size::new(800.0, 600.0)));
        assert_eq!(
            config.content,
            WindowContent::Component { name: "SortingVisualizer".into() }
        );

        let AppTarget::Window(config) = catalog.get("terminal").unwrap().target() else {
            panic!("expected a window target");
        };
        assert_eq!(config.content, WindowContent::Component { name: "terminal".into() });
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            AppCatalog::from_json("{"),
            Err(crate::error::DesktopError::SerializationError(_))
        ));
    }
}
