//! Menu State Store
//!
//! Uses Leptos reactive_stores so every write re-renders its readers.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::manager::{MenuItemManager, SubmitOutcome};
use crate::models::{DraftField, MenuItem, MenuItemId};

/// Application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct MenuState {
    /// Item list, draft and edit mode
    pub manager: MenuItemManager,
}

impl MenuState {
    pub fn new(manager: MenuItemManager) -> Self {
        Self { manager }
    }
}

/// Type alias for the store
pub type MenuStore = Store<MenuState>;

/// Get the menu store from context
pub fn use_menu_store() -> MenuStore {
    expect_context::<MenuStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Set one draft field
pub fn store_update_draft_field(store: &MenuStore, field: DraftField, value: String) {
    store.manager().write().update_draft_field(field, value);
}

/// Commit the draft as a new or updated item
pub fn store_submit_draft(store: &MenuStore) -> SubmitOutcome {
    let outcome = store.manager().write().submit_draft();
    match outcome {
        SubmitOutcome::Created(id) => log::info!("Created item {}", id),
        SubmitOutcome::Updated(id) => log::info!("Updated item {}", id),
        SubmitOutcome::Rejected => log::debug!("Ignored submit: missing field or no free id"),
        SubmitOutcome::Missing(id) => log::debug!("Item {} no longer exists, edit discarded", id),
    }
    outcome
}

/// Load an item into the form for editing
pub fn store_begin_edit(store: &MenuStore, item: &MenuItem) {
    log::debug!("Editing item {}", item.id);
    store.manager().write().begin_edit(item);
}

/// Remove an item by ID
pub fn store_delete_item(store: &MenuStore, id: MenuItemId) -> Option<MenuItem> {
    let removed = store.manager().write().delete_item(id);
    match &removed {
        Some(item) => log::info!("Deleted item {} ({})", id, item.name),
        None => log::debug!("Delete of unknown item {} ignored", id),
    }
    removed
}
