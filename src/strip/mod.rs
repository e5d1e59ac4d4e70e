//! Tab strip controller.
//!
//! Couples the [`TabRegistry`] state engine to the measurement-driven pieces:
//! the overflow partition, the active-tab indicator, drag-reorder sessions,
//! and location reconciliation. All inputs arrive as discrete host events
//! (click, drag end, resize, scroll, navigation change) on one thread; the
//! event loop serializes mutations, so there is no locking.
//!
//! ## Module layout
//!
//! - [`state`]: `TabStrip` struct definition and constructors.
//! - [`measure`]: measurement-provider trait and the synthetic table impl.
//! - [`visibility`]: overflow partition algorithm.
//! - [`indicator`]: active-tab indicator rectangle.
//! - [`sync`]: location reconciliation and the `Navigator` collaborator.
//! - [`drag`]: drag-session state and the activation-threshold helper.
//!
//! ## Measurement timing
//!
//! Measurements are unreliable before first layout, so the first pass after
//! [`mount`] is deferred: the host calls [`on_frame`] once layout has
//! settled. Tab-list and active-tab changes likewise defer to the next
//! frame, while [`on_resize`] and [`on_scroll`] recompute synchronously. A
//! pass that finds the container unmeasurable skips silently and stays
//! pending.
//!
//! [`mount`]: TabStrip::mount
//! [`on_frame`]: TabStrip::on_frame
//! [`on_resize`]: TabStrip::on_resize
//! [`on_scroll`]: TabStrip::on_scroll

mod drag;
mod indicator;
mod measure;
mod state;
mod sync;
mod visibility;

pub use drag::is_drag_motion;
pub use indicator::{IndicatorRect, active_indicator};
pub use measure::{StripMeasurements, TabExtent, TableMeasurements};
pub use state::TabStrip;
pub use sync::{Navigator, RecordingNavigator};
pub use visibility::{VisibilityPartition, available_strip_width, resolve_visibility};

use crate::tab::{Tab, TabRegistry};

impl TabStrip {
    /// The underlying registry.
    pub fn registry(&self) -> &TabRegistry {
        &self.registry
    }

    /// Mutable access to the registry. Callers mutating through this handle
    /// should follow up with [`schedule_measure`] so the partition and
    /// indicator catch up on the next frame.
    ///
    /// [`schedule_measure`]: TabStrip::schedule_measure
    pub fn registry_mut(&mut self) -> &mut TabRegistry {
        &mut self.registry
    }

    /// Mark the strip mounted. The first measurement is deferred to the next
    /// [`on_frame`] call; the host attaches its resize/scroll observers
    /// around this call and detaches them around [`unmount`].
    ///
    /// [`on_frame`]: TabStrip::on_frame
    /// [`unmount`]: TabStrip::unmount
    pub fn mount(&mut self) {
        self.mounted = true;
        self.measure_pending = true;
        log::debug!("tab strip mounted; first measurement deferred to next frame");
    }

    /// Mark the strip torn down. Any open drag session is dropped and all
    /// measurement-driven events are ignored until the next [`mount`].
    ///
    /// [`mount`]: TabStrip::mount
    pub fn unmount(&mut self) {
        self.mounted = false;
        self.measure_pending = false;
        self.drag.end();
    }

    /// Whether the strip is mounted.
    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Request a measurement pass on the next post-layout frame.
    pub fn schedule_measure(&mut self) {
        self.measure_pending = true;
    }

    /// Whether a measurement pass is pending.
    pub fn has_pending_measure(&self) -> bool {
        self.measure_pending
    }

    /// Post-layout frame callback: runs the pending measurement pass, if
    /// any.
    pub fn on_frame(&mut self, measurements: &dyn StripMeasurements) {
        if !self.mounted || !self.measure_pending {
            return;
        }
        self.refresh(measurements);
    }

    /// Container resize: recompute synchronously.
    pub fn on_resize(&mut self, measurements: &dyn StripMeasurements) {
        if !self.mounted {
            return;
        }
        self.refresh(measurements);
    }

    /// Horizontal scroll within the strip: recompute synchronously so the
    /// indicator tracks the scrolled content.
    pub fn on_scroll(&mut self, measurements: &dyn StripMeasurements) {
        if !self.mounted {
            return;
        }
        self.refresh(measurements);
    }

    /// User clicked a tab: activate it and navigate to its url. Suppressed
    /// while a drag session is open, and ignored for unknown ids.
    pub fn select_tab(&mut self, id: &str, navigator: &mut dyn Navigator) {
        if self.drag.in_progress() {
            log::debug!("ignoring tab select during drag");
            return;
        }
        let Some(url) = self.registry.get_tab(id).map(|t| t.url.clone()) else {
            return;
        };
        self.registry.set_active_tab(id);
        navigator.navigate_to(&url);
        self.schedule_measure();
    }

    /// Drag collaborator reported a drag start for `id`.
    pub fn begin_drag(&mut self, id: &str) {
        self.drag.begin(id);
    }

    /// Drag collaborator reported the drag ending over `over` (or outside
    /// any tab). A drop over another tab issues the reorder; anything else
    /// is a no-op beyond closing the session.
    pub fn end_drag(&mut self, over: Option<&str>) {
        let Some(dragged) = self.drag.end() else {
            return;
        };
        let Some(over) = over else {
            return;
        };
        if dragged == over {
            return;
        }
        self.registry.reorder_tabs(&dragged, over);
        self.schedule_measure();
    }

    /// Whether a drag session is open.
    pub fn is_dragging(&self) -> bool {
        self.drag.in_progress()
    }

    /// Externally observed location changed: activate the tab whose url
    /// matches `path` exactly. One-directional; never navigates.
    pub fn sync_location(&mut self, path: &str) {
        if sync::reconcile_location(&mut self.registry, path) {
            self.schedule_measure();
        }
    }

    /// Close a tab from the strip or the overflow menu.
    pub fn close_tab(&mut self, id: &str) {
        self.registry.remove_tab(id);
        self.schedule_measure();
    }

    /// Pin or unpin a tab (context-menu action).
    pub fn toggle_pin(&mut self, id: &str) {
        self.registry.toggle_pin(id);
        self.schedule_measure();
    }

    /// Append a tab.
    pub fn add_tab(&mut self, tab: Tab) {
        self.registry.add_tab(tab);
        self.schedule_measure();
    }

    /// Replace the tab list wholesale.
    pub fn set_tabs(&mut self, tabs: Vec<Tab>) {
        self.registry.set_tabs(tabs);
        self.schedule_measure();
    }

    /// The last computed visible/hidden split.
    pub fn visibility(&self) -> &VisibilityPartition {
        &self.visibility
    }

    /// Overflowed tabs in render order, for the disclosure menu.
    pub fn hidden_tabs(&self) -> Vec<&Tab> {
        self.visibility
            .hidden
            .iter()
            .filter_map(|id| self.registry.get_tab(id))
            .collect()
    }

    /// The last computed indicator rectangle.
    pub fn indicator(&self) -> Option<IndicatorRect> {
        self.indicator
    }

    /// One measurement pass: recompute the partition and the indicator.
    /// Skips silently — staying pending — when the container is not
    /// measurable yet, keeping the last-known-good outputs.
    fn refresh(&mut self, measurements: &dyn StripMeasurements) {
        let Some(container_width) = measurements.container_width() else {
            log::debug!("strip container not measurable; keeping previous partition");
            return;
        };
        let available = available_strip_width(container_width);
        self.visibility = resolve_visibility(self.registry.tabs(), measurements, available);
        match self.registry.active_tab_id() {
            None => self.indicator = None,
            Some(id) => {
                // An unmeasurable active element keeps the previous rect.
                if let Some(rect) = active_indicator(Some(id.as_str()), measurements) {
                    self.indicator = Some(rect);
                }
            }
        }
        self.measure_pending = false;
    }
}
