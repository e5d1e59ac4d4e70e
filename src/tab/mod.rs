//! Tab model and the default seeded tab set.
//!
//! A [`Tab`] is one navigable section of the application: a stable string id,
//! a display title, the location it navigates to, a pinned flag, and an
//! optional icon reference that the engine treats as opaque.

mod registry;

pub use registry::{SubscriptionId, TabRegistry};

use serde::{Deserialize, Serialize};

/// Stable tab identifier, unique within a registry for the tab's lifetime.
pub type TabId = String;

/// Id of the tab that is active in the default seeded set.
pub const DEFAULT_ACTIVE_TAB: &str = "dashboard";

/// One navigable tab in the strip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tab {
    /// Unique stable identifier. Immutable for the tab's lifetime.
    pub id: TabId,
    /// Display label. Pinned tabs render icon-only and omit it.
    pub title: String,
    /// Target location; used for navigation and location reconciliation.
    pub url: String,
    /// Pinned tabs always order before unpinned tabs and are not closable.
    #[serde(default)]
    pub pinned: bool,
    /// Opaque icon reference resolved by the rendering layer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

impl Tab {
    /// Create an unpinned tab without an icon.
    pub fn new(id: impl Into<TabId>, title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            url: url.into(),
            pinned: false,
            icon: None,
        }
    }

    /// Set the icon reference.
    #[must_use]
    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Set the pinned flag.
    #[must_use]
    pub fn pinned(mut self, pinned: bool) -> Self {
        self.pinned = pinned;
        self
    }

    /// Whether the tab exposes a close affordance. Pinned tabs do not,
    /// in the strip or in the overflow menu.
    pub fn is_closable(&self) -> bool {
        !self.pinned
    }
}

/// The default tab set seeded when no persisted state exists.
pub fn default_tabs() -> Vec<Tab> {
    vec![
        Tab::new("dashboard", "Dashboard", "/dashboard").icon("dashboard-icon.png"),
        Tab::new("accounting", "Accounting", "/accounting").icon("book-icon.png"),
        Tab::new("administration", "Administration", "/administration").icon("setting-icon.png"),
        Tab::new("auswahilsten", "Auswahilsten", "/auswahilsten").icon("list-icon.png"),
        Tab::new("banking", "Banking", "/banking").icon("bank-icon.png"),
        Tab::new("help", "Help", "/help").icon("browser-icon.png"),
        Tab::new("postoffice", "Post Office", "/postoffice").icon("mail-icon.png"),
        Tab::new("statistik", "Statistik", "/statistik").icon("statistik-icon.png"),
    ]
}
