//! Location reconciliation and outbound navigation.
//!
//! Reconciliation is one-directional: an externally observed location maps
//! onto the tab whose `url` matches it exactly and activates that tab. The
//! reverse direction — actually navigating — happens only on explicit user
//! selection, through the [`Navigator`] collaborator.

use crate::tab::TabRegistry;

/// Outbound navigation collaborator. The engine calls this when the user
/// selects a tab; it never calls it during location reconciliation.
pub trait Navigator {
    /// Navigate the host application to `url`.
    fn navigate_to(&mut self, url: &str);
}

/// Navigator that records every requested location; for tests and embedders
/// that defer navigation.
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    /// Requested locations, oldest first.
    pub visited: Vec<String>,
}

impl Navigator for RecordingNavigator {
    fn navigate_to(&mut self, url: &str) {
        self.visited.push(url.to_string());
    }
}

/// Activate the tab whose `url` equals `path` exactly. No-op when no tab
/// matches or the matching tab is already active. Returns whether the active
/// tab changed.
pub(super) fn reconcile_location(registry: &mut TabRegistry, path: &str) -> bool {
    let Some(id) = registry
        .tabs()
        .iter()
        .find(|t| t.url == path)
        .map(|t| t.id.clone())
    else {
        return false;
    };
    if registry.active_tab_id().map(String::as_str) == Some(id.as_str()) {
        return false;
    }
    log::debug!("location {path} -> activating tab {id}");
    registry.set_active_tab(&id);
    true
}
