use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::form::ops::{self, DeleteFn, SaveFn};
use crate::form::{FoodEdit, FoodForm, FormCommand, IngredientSlot};
use crate::routes;
use crate::types::{Food, FoodKind};

/// Create-or-edit form for a food/drink entry.
///
/// The form works on its own copy of `food`. Persisting is delegated to
/// `save` (and `delete`, when given); after a successful save the form asks
/// `on_navigate` to go back to the list.
#[component]
pub fn EditFoodForm(
    food: Food,
    save: SaveFn,
    /// The Delete button is only rendered when this is set.
    #[prop(optional)]
    delete: Option<DeleteFn>,
    #[prop(into)] on_navigate: Callback<String>,
) -> impl IntoView {
    let form = RwSignal::new(FoodForm::new(&food).with_delete(delete.is_some()));

    let edit = move |e: FoodEdit| form.update(|f| *f = f.apply(e));
    let disabled = move || form.with(|f| f.controls_disabled());

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let current = form.get_untracked();
        if let Some(pending) = ops::submit(&current, &save, move |next| form.set(next)) {
            spawn_local(async move {
                if let Some(FormCommand::Navigate(to)) = pending.await {
                    on_navigate.run(to.to_string());
                }
            });
        }
    };

    let shows_delete = form.with_untracked(|f| f.shows_delete());
    let delete_button = delete.filter(|_| shows_delete).map(|delete| {
        let on_delete = move |ev: leptos::ev::MouseEvent| {
            ev.prevent_default();
            let current = form.get_untracked();
            if let Some(pending) = ops::delete(&current, &delete, move |next| form.set(next)) {
                spawn_local(pending);
            }
        };
        view! {
            <section class="form-section">
                <button class="btn btn-delete" on:click=on_delete disabled=disabled>
                    "Delete"
                </button>
            </section>
        }
    });

    let kind_option = move |kind: FoodKind, label: &'static str| {
        view! {
            <label class="kind-option" class:kind-option-active=move || form.with(|f| f.kind() == kind)>
                <small>{label}</small>
                <input
                    type="radio"
                    name="kind"
                    value=kind.as_str()
                    prop:checked=move || form.with(|f| f.kind() == kind)
                    disabled=disabled
                    on:change=move |ev| {
                        if let Some(kind) = FoodKind::parse(&event_target_value(&ev)) {
                            edit(FoodEdit::Kind(kind));
                        }
                    }
                />
            </label>
        }
    };

    let is_new = form.with_untracked(|f| f.is_new());

    view! {
        <form class="food-form" class:food-form-new=is_new on:submit=on_submit>
            <section class="form-section form-row">
                <input
                    type="date"
                    name="date"
                    class="input input-date"
                    prop:value=move || form.with(|f| f.date().to_string())
                    disabled=disabled
                    on:input=move |ev| edit(FoodEdit::Date(event_target_value(&ev)))
                />
                <input
                    type="time"
                    name="time"
                    class="input input-time"
                    prop:value=move || form.with(|f| f.time().to_string())
                    disabled=disabled
                    on:input=move |ev| edit(FoodEdit::Time(event_target_value(&ev)))
                />
            </section>

            <section class="form-section form-row">
                {kind_option(FoodKind::Food, "Food")}
                {kind_option(FoodKind::Drink, "Drink")}
            </section>

            <section class="form-section">
                <input
                    type="text"
                    name="title"
                    class="input"
                    placeholder="What did you eat/drink?"
                    prop:value=move || form.with(|f| f.title().to_string())
                    disabled=disabled
                    on:input=move |ev| edit(FoodEdit::Title(event_target_value(&ev)))
                />
            </section>

            <section class="form-section">
                <div class="form-section-header">
                    <label>"Ingredients:"</label>
                    <button
                        type="button"
                        class="btn btn-small btn-secondary"
                        disabled=disabled
                        on:click=move |_| edit(FoodEdit::AddIngredient)
                    >
                        "+ add"
                    </button>
                </div>
                <For
                    each=move || form.with(|f| f.ingredients().to_vec())
                    key=|slot: &IngredientSlot| slot.key
                    children=move |slot: IngredientSlot| {
                        let key = slot.key;
                        let position = move || {
                            form.with(|f| f.ingredients().iter().position(|s| s.key == key))
                        };
                        view! {
                            <div class="input-row">
                                <input
                                    type="text"
                                    class="input"
                                    prop:value=move || {
                                        form.with(|f| {
                                            f.ingredients()
                                                .iter()
                                                .find(|s| s.key == key)
                                                .map(|s| s.value.clone())
                                                .unwrap_or_default()
                                        })
                                    }
                                    disabled=disabled
                                    on:input=move |ev| {
                                        if let Some(i) = position() {
                                            edit(FoodEdit::Ingredient(i, event_target_value(&ev)));
                                        }
                                    }
                                />
                                <button
                                    type="button"
                                    class="btn btn-small btn-delete"
                                    disabled=disabled
                                    on:click=move |_| {
                                        if let Some(i) = position() {
                                            edit(FoodEdit::RemoveIngredient(i));
                                        }
                                    }
                                >
                                    "\u{2717}"
                                </button>
                            </div>
                        }
                    }
                />
            </section>

            <section class="form-section">
                <textarea
                    class="input input-notes"
                    placeholder="Notes (optional)"
                    prop:value=move || form.with(|f| f.notes().to_string())
                    disabled=disabled
                    on:input=move |ev| edit(FoodEdit::Notes(event_target_value(&ev)))
                ></textarea>
            </section>

            {move || {
                form.with(|f| f.error().map(|e| e.to_string())).map(|e| {
                    view! {
                        <div class="form-error">
                            <span class="status-text status-error">{format!("Could not save: {}", e)}</span>
                        </div>
                    }
                })
            }}

            <section class="form-section">
                <button
                    type="submit"
                    class="btn btn-primary"
                    disabled=move || !form.with(|f| f.can_submit())
                >
                    {move || if disabled() { "Saving..." } else { "Save" }}
                </button>
            </section>

            {delete_button}

            <section class="form-section">
                <a href=routes::FOOD_LIST class="btn btn-secondary" class:btn-disabled=disabled>
                    "Cancel"
                </a>
            </section>
        </form>
    }
}
