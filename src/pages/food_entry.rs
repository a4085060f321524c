//! Pages that host [`EditFoodForm`] and wire it to the backend.

use chrono::Utc;
use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map};
use wasm_bindgen_futures::spawn_local;

use crate::commands;
use crate::components::edit_food_form::EditFoodForm;
use crate::form::ops::{delete_fn, save_fn};
use crate::routes;
use crate::types::Food;

fn navigate_callback() -> Callback<String> {
    let navigate = use_navigate();
    Callback::new(move |to: String| navigate(&to, Default::default()))
}

#[component]
pub fn NewFoodPage() -> impl IntoView {
    let on_navigate = navigate_callback();
    let save = save_fn(|food| async move { commands::save_food(food).await.map(|_| ()) });

    view! {
        <div class="page food-page">
            <h2>"New Entry"</h2>
            <EditFoodForm food=Food::new_at(Utc::now()) save=save on_navigate=on_navigate />
        </div>
    }
}

#[component]
pub fn EditFoodPage() -> impl IntoView {
    let params = use_params_map();
    let id = params.with_untracked(|p| p.get("id")).unwrap_or_default();
    let on_navigate = navigate_callback();

    let (food, set_food) = signal::<Option<Food>>(None);
    let (error, set_error) = signal::<Option<String>>(None);

    // Load the entry on mount
    let load_id = id.clone();
    Effect::new(move |_| {
        let id = load_id.clone();
        spawn_local(async move {
            match commands::get_food(&id).await {
                Ok(f) => set_food.set(Some(f)),
                Err(e) => set_error.set(Some(format!("Failed to load entry: {}", e))),
            }
        });
    });

    view! {
        <div class="page food-page">
            <h2>"Edit Entry"</h2>
            {move || {
                if let Some(err) = error.get() {
                    view! { <p class="status-text status-error">{err}</p> }.into_any()
                } else if let Some(f) = food.get() {
                    let save = save_fn(|food| async move {
                        commands::save_food(food).await.map(|_| ())
                    });
                    let entry_id = id.clone();
                    let delete = delete_fn(move || {
                        let id = entry_id.clone();
                        async move {
                            commands::delete_food(&id).await?;
                            on_navigate.run(routes::FOOD_LIST.to_string());
                            Ok(())
                        }
                    });
                    view! {
                        <EditFoodForm food=f save=save delete=delete on_navigate=on_navigate />
                    }.into_any()
                } else {
                    view! { <p class="list-loading">"Loading entry..."</p> }.into_any()
                }
            }}
        </div>
    }
}
