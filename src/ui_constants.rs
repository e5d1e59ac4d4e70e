//! Named constants for strip layout dimensions.
//!
//! Centralising these values keeps the engine and its host renderer agreed
//! on the fixed reservations the visibility resolver subtracts from the
//! container width. Only layout constants belong here; algorithm state lives
//! with the modules that own it.

// ---------------------------------------------------------------------------
// Tab strip  (src/strip/visibility.rs)
// ---------------------------------------------------------------------------

/// Width reserved at the right edge of the strip for the overflow
/// disclosure button.
pub const DROPDOWN_RESERVED: f32 = 60.0;
/// Horizontal padding of the scroll container (left + right combined).
pub const STRIP_PADDING: f32 = 32.0;
/// Horizontal spacing between adjacent tabs.
pub const TAB_SPACING: f32 = 4.0;

// ---------------------------------------------------------------------------
// Active-tab indicator  (src/strip/indicator.rs)
// ---------------------------------------------------------------------------

/// Thickness of the active-tab indicator bar drawn along the strip edge.
pub const INDICATOR_THICKNESS: f32 = 3.0;

// ---------------------------------------------------------------------------
// Mouse / interaction thresholds  (src/strip/drag.rs)
// ---------------------------------------------------------------------------

/// Minimum pixel distance a pointer must travel from its press position
/// before a press-and-hold counts as a drag rather than a click. Prevents
/// accidental reorders from trackpad tap-to-click jitter.
///
/// Note: compared against `dx*dx + dy*dy` (squared distance) to avoid a sqrt.
pub const DRAG_THRESHOLD_PX: f64 = 8.0;
