//! Menu Item Table Component
//!
//! Lists committed items, one row each.

use leptos::prelude::*;

use crate::components::MenuItemRow;
use crate::context::use_app_context;
use crate::store::{use_menu_store, MenuStateStoreFields};

#[component]
pub fn MenuItemTable() -> impl IntoView {
    let store = use_menu_store();
    let ctx = use_app_context();
    let labels = ctx.labels().clone();
    let empty_text = labels.empty_table.clone();

    let items = move || store.manager().read().items().to_vec();
    let editing_id = Memo::new(move |_| store.manager().read().draft().id);

    view! {
        <table class="menu-table">
            <thead>
                <tr>
                    <th>{labels.name_header.clone()}</th>
                    <th>{labels.price_header.clone()}</th>
                    <th>{labels.category_header.clone()}</th>
                    <th>{labels.actions_header.clone()}</th>
                </tr>
            </thead>
            <tbody>
                <Show when=move || store.manager().read().is_empty()>
                    <tr class="empty-row">
                        <td colspan="4">{empty_text.clone()}</td>
                    </tr>
                </Show>
                <For
                    each=items
                    key=|item| {
                        // Every displayed field, so an update re-renders the row
                        (item.id, item.name.clone(), item.price.to_bits(), item.category.clone())
                    }
                    children=move |item| view! { <MenuItemRow item=item editing_id=editing_id /> }
                />
            </tbody>
        </table>
    }
}
