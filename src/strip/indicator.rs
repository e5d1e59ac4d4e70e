//! Active-tab indicator geometry.
//!
//! The indicator is a bar rendered over the active tab; its rectangle is
//! derived from the tab's measured extent plus the strip's current scroll
//! offset, so it tracks the tab while the strip scrolls.

use super::measure::StripMeasurements;

/// Position of the active-tab indicator, relative to the scrollable
/// container.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IndicatorRect {
    /// Left offset including the current scroll offset.
    pub left: f32,
    /// Width of the active tab's element.
    pub width: f32,
}

/// Compute the indicator rectangle for the active tab.
///
/// `None` when there is no active tab or its element is not measurable yet;
/// callers keep the previous rectangle in that case.
pub fn active_indicator(
    active_tab_id: Option<&str>,
    measurements: &dyn StripMeasurements,
) -> Option<IndicatorRect> {
    let extent = measurements.tab_extent(active_tab_id?)?;
    Some(IndicatorRect {
        left: extent.left + measurements.scroll_offset(),
        width: extent.width,
    })
}
