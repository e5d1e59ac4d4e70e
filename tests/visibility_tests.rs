//! Overflow resolution driven through the strip controller: deferred first
//! measurement, synchronous resize/scroll recomputation, and the monotonic
//! accumulation rule.

use tab_strip::storage::PersistedTabState;
use tab_strip::strip::{TabStrip, TableMeasurements, available_strip_width};
use tab_strip::tab::{Tab, TabRegistry};

fn strip_with(ids: &[&str], active: &str) -> TabStrip {
    TabStrip::with_registry(TabRegistry::from_state(PersistedTabState {
        tabs: ids
            .iter()
            .map(|id| Tab::new(*id, id.to_uppercase(), format!("/{id}")))
            .collect(),
        active_tab_id: Some(active.to_string()),
    }))
}

fn uniform_widths(strip: &TabStrip, container: f32, width: f32) -> TableMeasurements {
    let mut table = TableMeasurements::new(container);
    for tab in strip.registry().tabs() {
        table.push_tab(tab.id.clone(), width);
    }
    table
}

#[test]
fn four_tabs_of_80_in_250_hide_exactly_the_fourth() {
    let mut strip = strip_with(&["t1", "t2", "t3", "t4"], "t1");
    strip.mount();

    // Container chosen so the usable width is exactly 250.
    let container = 342.0;
    assert_eq!(available_strip_width(container), 250.0);
    let table = uniform_widths(&strip, container, 80.0);
    strip.on_frame(&table);

    assert_eq!(strip.visibility().visible, vec!["t1", "t2", "t3"]);
    assert_eq!(strip.visibility().hidden, vec!["t4"]);
}

#[test]
fn first_measurement_waits_for_the_frame_callback() {
    let mut strip = strip_with(&["a", "b", "c"], "a");
    strip.mount();
    assert!(strip.has_pending_measure());

    // Before the frame callback everything is still considered visible.
    assert_eq!(strip.visibility().hidden.len(), 0);

    let table = uniform_widths(&strip, 192.0, 60.0); // usable width 100
    strip.on_frame(&table);
    assert!(!strip.has_pending_measure());
    assert_eq!(strip.visibility().visible, vec!["a"]);
    assert_eq!(strip.visibility().hidden, vec!["b", "c"]);
}

#[test]
fn resize_recomputes_synchronously() {
    let mut strip = strip_with(&["a", "b", "c"], "a");
    strip.mount();

    let mut table = uniform_widths(&strip, 392.0, 60.0); // usable 300, all fit
    strip.on_frame(&table);
    assert!(strip.visibility().hidden.is_empty());

    table.set_container_width(192.0); // usable 100
    strip.on_resize(&table);
    assert_eq!(strip.visibility().hidden, vec!["b", "c"]);

    table.set_container_width(392.0);
    strip.on_resize(&table);
    assert!(strip.visibility().hidden.is_empty());
}

#[test]
fn unmeasurable_container_skips_and_stays_pending() {
    let mut strip = strip_with(&["a", "b"], "a");
    strip.mount();

    strip.on_frame(&TableMeasurements::unmounted());
    assert!(strip.has_pending_measure());
    assert_eq!(strip.visibility().visible, vec!["a", "b"]);

    // The next frame with real measurements completes the pass.
    let table = uniform_widths(&strip, 392.0, 60.0);
    strip.on_frame(&table);
    assert!(!strip.has_pending_measure());
}

#[test]
fn list_mutations_defer_recomputation_to_next_frame() {
    let mut strip = strip_with(&["a", "b"], "a");
    strip.mount();
    let table = uniform_widths(&strip, 392.0, 60.0);
    strip.on_frame(&table);

    strip.close_tab("b");
    assert!(strip.has_pending_measure());

    let mut table = uniform_widths(&strip, 392.0, 60.0);
    table.remove_tab("b");
    strip.on_frame(&table);
    assert_eq!(strip.visibility().visible, vec!["a"]);
}

#[test]
fn hidden_tabs_resolve_to_full_tabs_for_the_disclosure_menu() {
    let mut strip = strip_with(&["a", "b", "c"], "a");
    strip.mount();
    let table = uniform_widths(&strip, 192.0, 60.0); // usable 100
    strip.on_frame(&table);

    let hidden = strip.hidden_tabs();
    let titles: Vec<&str> = hidden.iter().map(|t| t.title.as_str()).collect();
    assert_eq!(titles, vec!["B", "C"]);
    // Overflow listing does not unmount tabs from the strip model.
    assert_eq!(strip.registry().tab_count(), 3);
}

#[test]
fn events_after_unmount_are_ignored() {
    let mut strip = strip_with(&["a", "b", "c"], "a");
    strip.mount();
    let table = uniform_widths(&strip, 392.0, 60.0);
    strip.on_frame(&table);

    strip.unmount();
    let narrow = uniform_widths(&strip, 92.0, 60.0);
    strip.on_resize(&narrow);
    strip.on_scroll(&narrow);
    strip.on_frame(&narrow);

    // Last-known-good partition is retained.
    assert!(strip.visibility().hidden.is_empty());
}
