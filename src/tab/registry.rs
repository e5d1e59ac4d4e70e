//! Ordered tab collection with pin, reorder, and active-selection semantics.
//!
//! `TabRegistry` is the single state container for the strip: it owns the
//! ordered tab list and the active-tab pointer, and every mutation that
//! changes state notifies subscribers and persists the full snapshot through
//! the attached store. The registry never fails for unknown ids — those
//! operations are silent no-ops.

use super::{DEFAULT_ACTIVE_TAB, Tab, TabId, default_tabs};
use crate::storage::{PersistedTabState, StateStore, TAB_STORAGE_KEY};
use std::collections::HashSet;
use std::fmt;

/// Handle returned by [`TabRegistry::subscribe`], used to unsubscribe.
pub type SubscriptionId = u64;

type Subscriber = Box<dyn FnMut(&[Tab], Option<&TabId>)>;

/// Owns the ordered tab list and the active-tab pointer.
///
/// Invariants upheld by every operation:
/// - tab ids are unique;
/// - every pinned tab precedes every unpinned tab;
/// - the active id is `None` or the id of a tab currently in the list.
pub struct TabRegistry {
    /// All tabs, in authoritative render order.
    tabs: Vec<Tab>,
    /// Currently active tab id.
    active_tab_id: Option<TabId>,
    /// Subscribers notified after each effective mutation.
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    /// Counter for subscription handles.
    next_subscription_id: SubscriptionId,
    /// Persistence collaborator; `None` disables persistence.
    store: Option<Box<dyn StateStore>>,
}

impl fmt::Debug for TabRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TabRegistry")
            .field("tabs", &self.tabs)
            .field("active_tab_id", &self.active_tab_id)
            .finish_non_exhaustive()
    }
}

impl TabRegistry {
    /// Create a registry seeded with the default tab set, no persistence.
    pub fn new() -> Self {
        Self::from_state(seed_state())
    }

    /// Create a registry from a restored snapshot, enforcing the id
    /// uniqueness and pin-partition invariants on load.
    pub fn from_state(state: PersistedTabState) -> Self {
        let tabs = normalize(state.tabs);
        let active_tab_id = state
            .active_tab_id
            .filter(|id| tabs.iter().any(|t| &t.id == id));
        Self {
            tabs,
            active_tab_id,
            subscribers: Vec::new(),
            next_subscription_id: 1,
            store: None,
        }
    }

    /// Create a registry backed by `store`: restores the persisted snapshot
    /// under the `tab-storage` key, falling back to the default tab set when
    /// the store is empty or its contents are unreadable.
    pub fn with_store(store: Box<dyn StateStore>) -> Self {
        let state = match store.load(TAB_STORAGE_KEY) {
            Ok(Some(state)) => state,
            Ok(None) => seed_state(),
            Err(e) => {
                log::warn!("failed to restore tab state, using defaults: {e:#}");
                seed_state()
            }
        };
        let mut registry = Self::from_state(state);
        registry.store = Some(store);
        registry
    }

    /// All tabs in render order.
    pub fn tabs(&self) -> &[Tab] {
        &self.tabs
    }

    /// Number of tabs.
    pub fn tab_count(&self) -> usize {
        self.tabs.len()
    }

    /// The active tab id, if any.
    pub fn active_tab_id(&self) -> Option<&TabId> {
        self.active_tab_id.as_ref()
    }

    /// The active tab, if any.
    pub fn active_tab(&self) -> Option<&Tab> {
        self.active_tab_id
            .as_ref()
            .and_then(|id| self.tabs.iter().find(|t| &t.id == id))
    }

    /// Look up a tab by id.
    pub fn get_tab(&self, id: &str) -> Option<&Tab> {
        self.tabs.iter().find(|t| t.id == id)
    }

    /// The current `{tabs, active_tab_id}` snapshot, as persisted.
    pub fn snapshot(&self) -> PersistedTabState {
        PersistedTabState {
            tabs: self.tabs.clone(),
            active_tab_id: self.active_tab_id.clone(),
        }
    }

    /// Replace the full tab list wholesale (bulk restore). Duplicate ids are
    /// dropped (first occurrence wins) and the pin partition is restored. An
    /// active id no longer present is cleared.
    pub fn set_tabs(&mut self, tabs: Vec<Tab>) {
        self.tabs = normalize(tabs);
        if let Some(active) = &self.active_tab_id
            && !self.tabs.iter().any(|t| &t.id == active)
        {
            self.active_tab_id = None;
        }
        log::debug!("replaced tab list ({} tabs)", self.tabs.len());
        self.after_mutation();
    }

    /// Set the active tab. Unknown ids are ignored; state change only, no
    /// navigation side effect.
    pub fn set_active_tab(&mut self, id: &str) {
        if self.active_tab_id.as_deref() == Some(id) {
            return;
        }
        if !self.tabs.iter().any(|t| t.id == id) {
            log::debug!("ignoring set_active_tab for unknown tab {id}");
            return;
        }
        self.active_tab_id = Some(id.to_string());
        log::debug!("active tab -> {id}");
        self.after_mutation();
    }

    /// Flip the pinned flag of the matching tab, then stably repartition the
    /// list: all pinned tabs in their relative order, then all unpinned tabs
    /// in theirs. The full re-sort restores the partition invariant
    /// regardless of prior order.
    pub fn toggle_pin(&mut self, id: &str) {
        let Some(tab) = self.tabs.iter_mut().find(|t| t.id == id) else {
            return;
        };
        tab.pinned = !tab.pinned;
        log::debug!("tab {id} pinned -> {}", tab.pinned);
        self.repartition();
        self.after_mutation();
    }

    /// Move the tab identified by `active_id` to the position `over_id`
    /// occupies: remove it, then insert at `over_id`'s pre-removal index
    /// (standard drag-shuffle splice). Fails closed — list unchanged — when
    /// the tabs differ in pinned status, when either id is unknown, or when
    /// the ids are equal.
    pub fn reorder_tabs(&mut self, active_id: &str, over_id: &str) {
        if active_id == over_id {
            return;
        }
        let Some(old_index) = self.position(active_id) else {
            return;
        };
        let Some(new_index) = self.position(over_id) else {
            return;
        };
        if self.tabs[old_index].pinned != self.tabs[new_index].pinned {
            log::debug!("rejecting cross-partition reorder of {active_id} over {over_id}");
            return;
        }

        let tab = self.tabs.remove(old_index);
        self.tabs.insert(new_index, tab);
        log::debug!("moved tab {active_id} from index {old_index} to {new_index}");
        self.after_mutation();
    }

    /// Append a tab, then repartition so a pinned append cannot break the
    /// partition invariant. Duplicate ids are ignored.
    pub fn add_tab(&mut self, tab: Tab) {
        if self.tabs.iter().any(|t| t.id == tab.id) {
            log::debug!("ignoring add_tab for duplicate id {}", tab.id);
            return;
        }
        log::info!("added tab {} (total: {})", tab.id, self.tabs.len() + 1);
        self.tabs.push(tab);
        self.repartition();
        self.after_mutation();
    }

    /// Remove the matching tab. Removing the active tab activates the first
    /// remaining tab, or clears the active id when the list becomes empty;
    /// removing any other tab never changes the active id.
    pub fn remove_tab(&mut self, id: &str) {
        let Some(index) = self.position(id) else {
            return;
        };
        self.tabs.remove(index);
        if self.active_tab_id.as_deref() == Some(id) {
            self.active_tab_id = self.tabs.first().map(|t| t.id.clone());
        }
        log::info!("removed tab {id} (remaining: {})", self.tabs.len());
        self.after_mutation();
    }

    /// Register a callback invoked with `(tabs, active_tab_id)` after each
    /// effective mutation. Returns a handle for [`unsubscribe`].
    ///
    /// [`unsubscribe`]: TabRegistry::unsubscribe
    pub fn subscribe(&mut self, f: impl FnMut(&[Tab], Option<&TabId>) + 'static) -> SubscriptionId {
        let id = self.next_subscription_id;
        self.next_subscription_id += 1;
        self.subscribers.push((id, Box::new(f)));
        id
    }

    /// Remove a subscriber. Unknown handles are ignored.
    pub fn unsubscribe(&mut self, id: SubscriptionId) {
        self.subscribers.retain(|(sub_id, _)| *sub_id != id);
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.tabs.iter().position(|t| t.id == id)
    }

    /// Stable repartition: pinned tabs first, relative order preserved
    /// within each partition.
    fn repartition(&mut self) {
        let (pinned, unpinned): (Vec<Tab>, Vec<Tab>) =
            self.tabs.drain(..).partition(|t| t.pinned);
        self.tabs = pinned;
        self.tabs.extend(unpinned);
    }

    fn after_mutation(&mut self) {
        self.persist();
        let active = self.active_tab_id.as_ref();
        for (_, subscriber) in &mut self.subscribers {
            subscriber(&self.tabs, active);
        }
    }

    /// Persist the full snapshot. Failures are logged and swallowed; the
    /// in-memory state stays authoritative.
    fn persist(&mut self) {
        let Some(store) = self.store.as_mut() else {
            return;
        };
        let state = PersistedTabState {
            tabs: self.tabs.clone(),
            active_tab_id: self.active_tab_id.clone(),
        };
        if let Err(e) = store.save(TAB_STORAGE_KEY, &state) {
            log::warn!("failed to persist tab state: {e:#}");
        }
    }
}

impl Default for TabRegistry {
    fn default() -> Self {
        Self::new()
    }
}

fn seed_state() -> PersistedTabState {
    PersistedTabState {
        tabs: default_tabs(),
        active_tab_id: Some(DEFAULT_ACTIVE_TAB.to_string()),
    }
}

/// Drop duplicate ids (first occurrence wins), then restore the pin
/// partition with a stable sort.
fn normalize(tabs: Vec<Tab>) -> Vec<Tab> {
    let mut seen: HashSet<TabId> = HashSet::with_capacity(tabs.len());
    let mut unique: Vec<Tab> = Vec::with_capacity(tabs.len());
    for tab in tabs {
        if seen.insert(tab.id.clone()) {
            unique.push(tab);
        }
    }
    let (pinned, unpinned): (Vec<Tab>, Vec<Tab>) = unique.into_iter().partition(|t| t.pinned);
    let mut tabs = pinned;
    tabs.extend(unpinned);
    tabs
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Create a registry with bare tabs for the given ids; the last id is
    /// made active.
    fn registry_with_ids(ids: &[&str]) -> TabRegistry {
        let tabs = ids
            .iter()
            .map(|id| Tab::new(*id, id.to_uppercase(), format!("/{id}")))
            .collect();
        // No store attached; persistence is exercised in tests/storage_tests.rs.
        TabRegistry::from_state(PersistedTabState {
            tabs,
            active_tab_id: ids.last().map(|id| id.to_string()),
        })
    }

    fn ids(registry: &TabRegistry) -> Vec<&str> {
        registry.tabs().iter().map(|t| t.id.as_str()).collect()
    }

    #[test]
    fn reorder_forward_moves_to_target_index() {
        let mut registry = registry_with_ids(&["a", "b", "c", "d"]);
        registry.reorder_tabs("a", "c");
        assert_eq!(ids(&registry), vec!["b", "c", "a", "d"]);
    }

    #[test]
    fn reorder_backward_moves_to_target_index() {
        let mut registry = registry_with_ids(&["a", "b", "c", "d"]);
        registry.reorder_tabs("c", "a");
        assert_eq!(ids(&registry), vec!["c", "a", "b", "d"]);
    }

    #[test]
    fn reorder_same_tab_is_noop() {
        let mut registry = registry_with_ids(&["a", "b", "c"]);
        registry.reorder_tabs("b", "b");
        assert_eq!(ids(&registry), vec!["a", "b", "c"]);
    }

    #[test]
    fn reorder_unknown_id_is_noop() {
        let mut registry = registry_with_ids(&["a", "b", "c"]);
        registry.reorder_tabs("zz", "a");
        registry.reorder_tabs("a", "zz");
        assert_eq!(ids(&registry), vec!["a", "b", "c"]);
    }

    #[test]
    fn reorder_across_pin_partition_fails_closed() {
        let mut registry = registry_with_ids(&["a", "b", "c"]);
        registry.toggle_pin("c");
        let before = registry.snapshot();
        registry.reorder_tabs("a", "c");
        assert_eq!(registry.snapshot(), before);
    }

    #[test]
    fn toggle_pin_moves_tab_to_pinned_partition() {
        let mut registry = registry_with_ids(&["a", "b", "c", "d"]);
        registry.toggle_pin("c");
        assert_eq!(ids(&registry), vec!["c", "a", "b", "d"]);
        registry.toggle_pin("b");
        assert_eq!(ids(&registry), vec!["c", "b", "a", "d"]);
    }

    #[test]
    fn toggle_pin_back_returns_tab_to_unpinned_partition() {
        let mut registry = registry_with_ids(&["a", "b", "c"]);
        registry.toggle_pin("a");
        registry.toggle_pin("a");
        assert_eq!(ids(&registry), vec!["a", "b", "c"]);
        assert!(registry.tabs().iter().all(|t| !t.pinned));
    }

    #[test]
    fn set_active_tab_validates_existence() {
        let mut registry = registry_with_ids(&["a", "b"]);
        registry.set_active_tab("zz");
        assert_eq!(registry.active_tab_id().map(String::as_str), Some("b"));
        registry.set_active_tab("a");
        assert_eq!(registry.active_tab_id().map(String::as_str), Some("a"));
    }

    #[test]
    fn remove_active_tab_activates_first_remaining() {
        let mut registry = registry_with_ids(&["a", "b", "c"]);
        registry.set_active_tab("b");
        registry.remove_tab("b");
        assert_eq!(registry.active_tab_id().map(String::as_str), Some("a"));
    }

    #[test]
    fn remove_last_tab_clears_active() {
        let mut registry = registry_with_ids(&["a"]);
        registry.remove_tab("a");
        assert!(registry.tabs().is_empty());
        assert!(registry.active_tab_id().is_none());
    }

    #[test]
    fn remove_inactive_tab_keeps_active() {
        let mut registry = registry_with_ids(&["a", "b", "c"]);
        registry.remove_tab("a");
        assert_eq!(registry.active_tab_id().map(String::as_str), Some("c"));
    }

    #[test]
    fn remove_unknown_id_is_noop() {
        let mut registry = registry_with_ids(&["a", "b"]);
        registry.remove_tab("zz");
        assert_eq!(ids(&registry), vec!["a", "b"]);
    }

    #[test]
    fn add_pinned_tab_repartitions() {
        let mut registry = registry_with_ids(&["a", "b"]);
        registry.add_tab(Tab::new("p", "P", "/p").pinned(true));
        assert_eq!(ids(&registry), vec!["p", "a", "b"]);
    }

    #[test]
    fn add_duplicate_id_is_ignored() {
        let mut registry = registry_with_ids(&["a", "b"]);
        registry.add_tab(Tab::new("a", "Other", "/other"));
        assert_eq!(registry.tab_count(), 2);
        assert_eq!(registry.get_tab("a").unwrap().title, "A");
    }

    #[test]
    fn set_tabs_drops_duplicates_and_restores_partition() {
        let mut registry = registry_with_ids(&["a"]);
        registry.set_tabs(vec![
            Tab::new("x", "X", "/x"),
            Tab::new("p", "P", "/p").pinned(true),
            Tab::new("x", "X again", "/x2"),
        ]);
        assert_eq!(ids(&registry), vec!["p", "x"]);
        assert_eq!(registry.get_tab("x").unwrap().title, "X");
        // The previous active tab is gone from the new list.
        assert!(registry.active_tab_id().is_none());
    }

    #[test]
    fn from_state_clears_dangling_active_id() {
        let registry = TabRegistry::from_state(PersistedTabState {
            tabs: vec![Tab::new("a", "A", "/a")],
            active_tab_id: Some("gone".to_string()),
        });
        assert!(registry.active_tab_id().is_none());
    }

    #[test]
    fn subscribers_observe_mutations_until_unsubscribed() {
        use std::cell::RefCell;
        use std::rc::Rc;

        let mut registry = registry_with_ids(&["a", "b"]);
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let subscription = registry.subscribe(move |tabs, active| {
            sink.borrow_mut()
                .push((tabs.len(), active.cloned()));
        });

        registry.set_active_tab("a");
        registry.remove_tab("b");
        registry.unsubscribe(subscription);
        registry.remove_tab("a");

        let seen = seen.borrow();
        assert_eq!(&*seen, &[(2, Some("a".to_string())), (1, Some("a".to_string()))]);
    }

    #[test]
    fn noop_mutations_do_not_notify() {
        use std::cell::RefCell;
        use std::rc::Rc;

        let mut registry = registry_with_ids(&["a", "b"]);
        let count = Rc::new(RefCell::new(0u32));
        let sink = Rc::clone(&count);
        registry.subscribe(move |_, _| *sink.borrow_mut() += 1);

        registry.set_active_tab("b"); // already active
        registry.set_active_tab("zz"); // unknown
        registry.remove_tab("zz"); // unknown
        registry.toggle_pin("zz"); // unknown
        registry.reorder_tabs("a", "a"); // degenerate

        assert_eq!(*count.borrow(), 0);
    }

    #[test]
    fn stable_partition_after_arbitrary_toggle_sequences() {
        let mut registry = registry_with_ids(&["a", "b", "c", "d", "e"]);
        for id in ["c", "a", "e", "c", "b"] {
            registry.toggle_pin(id);
            let tabs = registry.tabs();
            let first_unpinned = tabs.iter().position(|t| !t.pinned).unwrap_or(tabs.len());
            assert!(
                tabs[first_unpinned..].iter().all(|t| !t.pinned),
                "pinned tab found after unpinned boundary"
            );
        }
    }
}
