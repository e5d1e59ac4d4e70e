//! tab-strip: a framework-agnostic tab strip engine.
//!
//! Manages an ordered set of navigable tabs — pinning, drag reorder, active
//! selection — reconciles the active tab with an externally observed
//! location, and computes which tabs are visible in the strip versus
//! overflowed into a disclosure menu, driven by injected layout
//! measurements. Rendering, gesture capture, routing, and storage mechanics
//! stay with the host behind small collaborator traits.
//!
//! The engine is single-threaded and event-driven: every mutation runs
//! synchronously on the host event that caused it, and measurement-dependent
//! recomputation is deferred to the host's post-layout frame callback.
//!
//! ```
//! use tab_strip::strip::{RecordingNavigator, TabStrip, TableMeasurements};
//!
//! let mut strip = TabStrip::new();
//! strip.mount();
//!
//! let mut measurements = TableMeasurements::new(400.0);
//! for tab in strip.registry().tabs() {
//!     measurements.push_tab(tab.id.clone(), 90.0);
//! }
//! strip.on_frame(&measurements);
//!
//! let mut navigator = RecordingNavigator::default();
//! strip.select_tab("banking", &mut navigator);
//! assert_eq!(navigator.visited, vec!["/banking".to_string()]);
//! ```

pub mod storage;
pub mod strip;
pub mod tab;
pub mod ui_constants;

pub use storage::{JsonFileStore, MemoryStore, PersistedTabState, StateStore, StorageError};
pub use strip::{
    IndicatorRect, Navigator, StripMeasurements, TabStrip, TableMeasurements, VisibilityPartition,
};
pub use tab::{DEFAULT_ACTIVE_TAB, SubscriptionId, Tab, TabId, TabRegistry, default_tabs};
