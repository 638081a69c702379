//! UI Components
//!
//! Leptos components for the menu screen.

mod menu_item_form;
mod menu_item_table;
mod menu_item_row;

pub use menu_item_form::MenuItemForm;
pub use menu_item_table::MenuItemTable;
pub use menu_item_row::MenuItemRow;
