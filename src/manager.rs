//! Menu Item Manager
//!
//! Framework-free CRUD state machine over the in-memory item list.
//! The reactive store wraps this; every mutation reports what changed.

use std::collections::HashSet;

use crate::models::{parse_price, DraftField, DraftForm, MenuItem, MenuItemId};

/// Result of submitting the draft form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// New item appended to the list
    Created(MenuItemId),
    /// Existing item replaced in place
    Updated(MenuItemId),
    /// Create-mode draft with a missing field, or no identifier left; nothing changed
    Rejected,
    /// Edit-mode draft whose item is gone; edit mode ended, list untouched
    Missing(MenuItemId),
}

impl SubmitOutcome {
    /// Whether the item list changed
    pub fn changed(&self) -> bool {
        matches!(self, SubmitOutcome::Created(_) | SubmitOutcome::Updated(_))
    }
}

/// Owns the item list and the form draft.
///
/// Edit mode is `draft.id.is_some()`, so the draft identifier is set
/// exactly while editing.
#[derive(Debug, Clone)]
pub struct MenuItemManager {
    items: Vec<MenuItem>,
    draft: DraftForm,
    /// `None` once the identifier space is used up
    next_id: Option<u32>,
}

impl Default for MenuItemManager {
    fn default() -> Self {
        Self::new()
    }
}

impl MenuItemManager {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            draft: DraftForm::default(),
            next_id: Some(1),
        }
    }

    /// Start from a seeded list. Later duplicates of an identifier are dropped.
    pub fn with_items(items: Vec<MenuItem>) -> Self {
        let mut seen = HashSet::new();
        let items: Vec<MenuItem> = items.into_iter().filter(|item| seen.insert(item.id)).collect();
        let next_id = match items.iter().map(|item| item.id.0).max() {
            Some(max) => max.checked_add(1),
            None => Some(1),
        };
        Self {
            items,
            draft: DraftForm::default(),
            next_id,
        }
    }

    // ========================
    // Queries
    // ========================

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn draft(&self) -> &DraftForm {
        &self.draft
    }

    pub fn is_editing(&self) -> bool {
        self.draft.id.is_some()
    }

    pub fn get(&self, id: MenuItemId) -> Option<&MenuItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Distinct categories in first-seen order
    pub fn categories(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        self.items
            .iter()
            .filter(|item| !item.category.is_empty() && seen.insert(item.category.as_str()))
            .map(|item| item.category.clone())
            .collect()
    }

    // ========================
    // Operations
    // ========================

    /// Set one draft field. Any value is accepted.
    pub fn update_draft_field(&mut self, field: DraftField, value: impl Into<String>) {
        self.draft.set_field(field, value.into());
    }

    /// Commit the draft: create in Creating mode, replace in Editing mode.
    ///
    /// Only creation checks for empty fields; an update stores the draft as-is.
    pub fn submit_draft(&mut self) -> SubmitOutcome {
        match self.draft.id {
            None => self.create_from_draft(),
            Some(id) => self.update_from_draft(id),
        }
    }

    /// Copy an item into the draft and enter edit mode
    pub fn begin_edit(&mut self, item: &MenuItem) {
        self.draft = DraftForm::from_item(item);
    }

    /// Remove the item with `id`, returning it if it was present
    pub fn delete_item(&mut self, id: MenuItemId) -> Option<MenuItem> {
        let index = self.items.iter().position(|item| item.id == id)?;
        Some(self.items.remove(index))
    }

    fn create_from_draft(&mut self) -> SubmitOutcome {
        if !self.draft.has_required_fields() {
            return SubmitOutcome::Rejected;
        }
        let price = parse_price(&self.draft.price);
        if price.is_nan() {
            return SubmitOutcome::Rejected;
        }
        let Some(id) = self.allocate_id() else {
            return SubmitOutcome::Rejected;
        };

        let draft = std::mem::take(&mut self.draft);
        self.items.push(MenuItem {
            id,
            name: draft.name,
            price,
            category: draft.category,
        });
        SubmitOutcome::Created(id)
    }

    fn update_from_draft(&mut self, id: MenuItemId) -> SubmitOutcome {
        let draft = std::mem::take(&mut self.draft);
        match self.items.iter_mut().find(|item| item.id == id) {
            Some(item) => {
                *item = MenuItem {
                    id,
                    name: draft.name,
                    price: parse_price(&draft.price),
                    category: draft.category,
                };
                SubmitOutcome::Updated(id)
            }
            None => SubmitOutcome::Missing(id),
        }
    }

    /// Next unused identifier, or `None` when none are left
    fn allocate_id(&mut self) -> Option<MenuItemId> {
        let id = self.next_id?;
        self.next_id = id.checked_add(1);
        Some(MenuItemId(id))
    }
}
