//! `TabStrip` struct definition and constructors.

use super::drag::DragSession;
use super::indicator::IndicatorRect;
use super::visibility::VisibilityPartition;
use crate::tab::TabRegistry;

/// Event-driven controller wiring the registry, the visibility resolver, and
/// the active-tab indicator.
#[derive(Debug)]
pub struct TabStrip {
    /// The tab state engine.
    pub(super) registry: TabRegistry,
    /// In-flight drag session, if any.
    pub(super) drag: DragSession,
    /// Last computed visible/hidden split.
    pub(super) visibility: VisibilityPartition,
    /// Last computed indicator rectangle.
    pub(super) indicator: Option<IndicatorRect>,
    /// Whether the host has attached its observers.
    pub(super) mounted: bool,
    /// Whether a measurement pass is due on the next post-layout frame.
    pub(super) measure_pending: bool,
}

impl TabStrip {
    /// Strip over a fresh registry seeded with the default tab set.
    pub fn new() -> Self {
        Self::with_registry(TabRegistry::new())
    }

    /// Strip over an existing registry (e.g. one restored from a store).
    pub fn with_registry(registry: TabRegistry) -> Self {
        let visibility = VisibilityPartition::all_visible(registry.tabs());
        Self {
            registry,
            drag: DragSession::default(),
            visibility,
            indicator: None,
            mounted: false,
            measure_pending: false,
        }
    }
}

impl Default for TabStrip {
    fn default() -> Self {
        Self::new()
    }
}
