//! Overflow partition: which tabs fit the strip and which spill into the
//! disclosure menu.
//!
//! The walk is a single pass in display order. A hidden tab's width stays in
//! the running total, so once the budget is exceeded every later tab is
//! hidden too — overflow is monotonic left to right, matching a strip whose
//! elements all stay in flow.

use super::measure::StripMeasurements;
use crate::tab::{Tab, TabId};
use crate::ui_constants::{DROPDOWN_RESERVED, STRIP_PADDING};

/// The visible/hidden split of the current tab list.
///
/// Hidden tabs remain mounted in the scrollable strip; they are additionally
/// listed in the overflow disclosure menu for access without scrolling.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VisibilityPartition {
    /// Ids of tabs that fit the strip, in render order.
    pub visible: Vec<TabId>,
    /// Ids of overflowed tabs, in render order.
    pub hidden: Vec<TabId>,
}

impl VisibilityPartition {
    /// Partition with every tab visible; the state before first measurement.
    pub fn all_visible(tabs: &[Tab]) -> Self {
        Self {
            visible: tabs.iter().map(|t| t.id.clone()).collect(),
            hidden: Vec::new(),
        }
    }

    /// Whether `id` is currently overflowed.
    pub fn is_hidden(&self, id: &str) -> bool {
        self.hidden.iter().any(|hidden_id| hidden_id == id)
    }

    /// Whether any tab is overflowed (controls the disclosure button).
    pub fn has_overflow(&self) -> bool {
        !self.hidden.is_empty()
    }
}

/// Usable width for tabs: the container width minus the disclosure-button
/// reservation and the strip's horizontal padding.
pub fn available_strip_width(container_width: f32) -> f32 {
    (container_width - STRIP_PADDING - DROPDOWN_RESERVED).max(0.0)
}

/// Partition `tabs` against `available` width.
///
/// A tab is visible iff the cumulative width through and including it does
/// not exceed `available`. A tab with no measurement counts as visible and
/// contributes no width.
pub fn resolve_visibility(
    tabs: &[Tab],
    measurements: &dyn StripMeasurements,
    available: f32,
) -> VisibilityPartition {
    let mut partition = VisibilityPartition::default();
    let mut accumulated = 0.0_f32;

    for tab in tabs {
        let Some(extent) = measurements.tab_extent(&tab.id) else {
            partition.visible.push(tab.id.clone());
            continue;
        };
        accumulated += extent.width;
        if accumulated <= available {
            partition.visible.push(tab.id.clone());
        } else {
            partition.hidden.push(tab.id.clone());
        }
    }

    partition
}
