//! Measurement inputs for the visibility resolver and indicator.
//!
//! Layout measurement is a black-box collaborator: the engine never touches
//! a real layout tree. Hosts implement [`StripMeasurements`] over their DOM
//! or widget toolkit; tests feed a synthetic [`TableMeasurements`].

use crate::tab::TabId;

/// Measured box of one tab element, relative to the scrollable container's
/// content origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TabExtent {
    /// Left edge offset within the scrollable content.
    pub left: f32,
    /// Rendered width.
    pub width: f32,
}

/// Supplies rendered sizes to the strip.
///
/// All methods report the current layout pass; `None` means the element is
/// not mounted or has not been laid out yet, and the dependent computation
/// skips silently and keeps its last-known-good output.
pub trait StripMeasurements {
    /// Inner width of the strip's parent container.
    fn container_width(&self) -> Option<f32>;

    /// Measured extent of the element rendering the tab `id`.
    fn tab_extent(&self, id: &str) -> Option<TabExtent>;

    /// Current horizontal scroll offset of the strip.
    fn scroll_offset(&self) -> f32 {
        0.0
    }
}

/// Synthetic measurement table for tests and headless use.
///
/// Tab extents are derived from the width table in insertion order, packed
/// left to right with no gap; hosts with real gaps fold them into widths.
#[derive(Debug, Clone, Default)]
pub struct TableMeasurements {
    container_width: Option<f32>,
    scroll_offset: f32,
    widths: Vec<(TabId, f32)>,
}

impl TableMeasurements {
    /// Table with a measured container width.
    pub fn new(container_width: f32) -> Self {
        Self {
            container_width: Some(container_width),
            ..Self::default()
        }
    }

    /// Table representing a container that has not been laid out yet.
    pub fn unmounted() -> Self {
        Self::default()
    }

    /// Append a tab measurement (builder form).
    #[must_use]
    pub fn with_tab(mut self, id: impl Into<TabId>, width: f32) -> Self {
        self.push_tab(id, width);
        self
    }

    /// Append a tab measurement.
    pub fn push_tab(&mut self, id: impl Into<TabId>, width: f32) {
        self.widths.push((id.into(), width));
    }

    /// Drop a tab measurement, simulating an unmounted element.
    pub fn remove_tab(&mut self, id: &str) {
        self.widths.retain(|(tab_id, _)| tab_id != id);
    }

    /// Simulate a container resize.
    pub fn set_container_width(&mut self, width: f32) {
        self.container_width = Some(width);
    }

    /// Simulate a horizontal scroll.
    pub fn set_scroll_offset(&mut self, offset: f32) {
        self.scroll_offset = offset;
    }
}

impl StripMeasurements for TableMeasurements {
    fn container_width(&self) -> Option<f32> {
        self.container_width
    }

    fn tab_extent(&self, id: &str) -> Option<TabExtent> {
        let mut left = 0.0;
        for (tab_id, width) in &self.widths {
            if tab_id == id {
                return Some(TabExtent { left, width: *width });
            }
            left += width;
        }
        None
    }

    fn scroll_offset(&self) -> f32 {
        self.scroll_offset
    }
}
