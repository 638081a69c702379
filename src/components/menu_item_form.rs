//! Menu Item Form Component
//!
//! Draft inputs plus the add / save button.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::models::DraftField;
use crate::store::{store_submit_draft, store_update_draft_field, use_menu_store, MenuStateStoreFields};

/// `id` of the category suggestions list
const CATEGORY_LIST_ID: &str = "category-options";

/// Form for creating a new item or saving the one being edited
#[component]
pub fn MenuItemForm() -> impl IntoView {
    let store = use_menu_store();
    let ctx = use_app_context();
    let labels = ctx.labels().clone();

    let is_editing = move || store.manager().read().is_editing();
    let categories = move || store.manager().read().categories();

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        store_submit_draft(&store);
    };

    let add_label = labels.add_button.clone();
    let save_label = labels.save_button.clone();

    view! {
        <form class="form-container" on:submit=on_submit>
            <DraftInput
                field=DraftField::Name
                input_type="text"
                placeholder=labels.name_placeholder.clone()
            />
            <DraftInput
                field=DraftField::Price
                input_type="number"
                placeholder=labels.price_placeholder.clone()
            />
            <DraftInput
                field=DraftField::Category
                input_type="text"
                placeholder=labels.category_placeholder.clone()
                list=CATEGORY_LIST_ID
            />
            <datalist id=CATEGORY_LIST_ID>
                <For
                    each=categories
                    key=|category| category.clone()
                    children=move |category| view! { <option value=category /> }
                />
            </datalist>
            <button
                type="submit"
                class=move || if is_editing() { "submit-btn editing" } else { "submit-btn" }
            >
                {move || if is_editing() { save_label.clone() } else { add_label.clone() }}
            </button>
        </form>
    }
}

/// One input bound to a draft field
#[component]
fn DraftInput(
    field: DraftField,
    input_type: &'static str,
    #[prop(into)] placeholder: String,
    #[prop(optional)] list: Option<&'static str>,
) -> impl IntoView {
    let store = use_menu_store();

    view! {
        <input
            type=input_type
            name=field.as_str()
            placeholder=placeholder
            list=list
            step=(field == DraftField::Price).then_some("any")
            prop:value=move || store.manager().read().draft().field(field).to_string()
            on:input=move |ev| store_update_draft_field(&store, field, event_target_value(&ev))
        />
    }
}
