//! Drag-session state for tab reordering.
//!
//! Gesture capture is external: the host reports a discrete start event once
//! its activation threshold is crossed, and an end event carrying the tab the
//! pointer was released over (or none). While a session is open the strip
//! suppresses click-to-select, so a drag that ends without a reorder does not
//! double as a selection.

use crate::tab::TabId;
use crate::ui_constants::DRAG_THRESHOLD_PX;

/// State of an in-flight tab drag.
#[derive(Debug, Default)]
pub(super) struct DragSession {
    dragging: Option<TabId>,
}

impl DragSession {
    /// Open a session for `id`; replaces any session left open by a missed
    /// end event.
    pub(super) fn begin(&mut self, id: &str) {
        self.dragging = Some(id.to_string());
    }

    /// Close the session, returning the dragged tab id if one was open.
    pub(super) fn end(&mut self) -> Option<TabId> {
        self.dragging.take()
    }

    pub(super) fn in_progress(&self) -> bool {
        self.dragging.is_some()
    }
}

/// Whether pointer travel from the press position qualifies as drag motion.
///
/// Note: compared against `dx*dx + dy*dy` (squared distance) to avoid a sqrt.
pub fn is_drag_motion(dx: f64, dy: f64) -> bool {
    dx * dx + dy * dy >= DRAG_THRESHOLD_PX * DRAG_THRESHOLD_PX
}
