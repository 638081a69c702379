//! Menu Item Row Component

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::models::{format_price, MenuItem, MenuItemId};
use crate::store::{store_begin_edit, store_delete_item, use_menu_store};

/// A single item row with edit and delete actions
#[component]
pub fn MenuItemRow(
    item: MenuItem,
    editing_id: Memo<Option<MenuItemId>>,
) -> impl IntoView {
    let store = use_menu_store();
    let ctx = use_app_context();
    let labels = ctx.labels();

    let id = item.id;
    let price = format_price(item.price, ctx.currency_symbol());
    let row_class = move || if editing_id.get() == Some(id) { "menu-row editing" } else { "menu-row" };
    let name = item.name.clone();
    let category = item.category.clone();

    view! {
        <tr class=row_class>
            <td>{name}</td>
            <td class="price">{price}</td>
            <td>{category}</td>
            <td class="actions">
                <button
                    type="button"
                    class="edit"
                    on:click=move |_| store_begin_edit(&store, &item)
                >
                    {labels.edit_button.clone()}
                </button>
                <button
                    type="button"
                    class="delete"
                    on:click=move |_| {
                        store_delete_item(&store, id);
                    }
                >
                    {labels.delete_button.clone()}
                </button>
            </td>
        </tr>
    }
}
