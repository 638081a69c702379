//! Menu Manager App
//!
//! Root component: owns the store and lays out form and table.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{MenuItemForm, MenuItemTable};
use crate::config::UiConfig;
use crate::context::AppContext;
use crate::manager::MenuItemManager;
use crate::store::{MenuState, MenuStateStoreFields};

#[component]
pub fn App(config: UiConfig) -> impl IntoView {
    // State
    let manager = MenuItemManager::with_items(config.seed_menu_items());
    log::info!("Starting with {} items", manager.len());
    let store = Store::new(MenuState::new(manager));

    // Provide context to all children
    let ctx = AppContext::new(config);
    let title = ctx.title().to_string();
    provide_context(store);
    provide_context(ctx);

    view! {
        <div class="app-container">
            <h1>{title}</h1>

            <MenuItemForm />

            <MenuItemTable />

            <p class="item-count">{move || format!("{} platillos", store.manager().read().len())}</p>
        </div>
    }
}
