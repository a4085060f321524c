use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::commands;
use crate::components::food_row::FoodRow;
use crate::routes;
use crate::types::{Food, RowRenderParams};

fn row_params(index: usize, food: &Food) -> RowRenderParams {
    let key = food.id.clone().unwrap_or_else(|| format!("row-{}", index));
    let style = if index % 2 == 1 {
        "background: var(--row-alt-bg);".to_string()
    } else {
        String::new()
    };
    RowRenderParams { index, key, style }
}

#[component]
pub fn FoodListPage() -> impl IntoView {
    let (loading, set_loading) = signal(true);
    let (foods, set_foods) = signal::<Vec<Food>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);

    // Load entries on mount
    Effect::new(move |_| {
        spawn_local(async move {
            match commands::list_foods().await {
                Ok(list) => set_foods.set(list),
                Err(e) => set_error.set(Some(format!("Failed to load entries: {}", e))),
            }
            set_loading.set(false);
        });
    });

    view! {
        <div class="page food-list-page">
            <div class="page-header">
                <h2>"Food & Drink"</h2>
                <a href=routes::FOOD_NEW class="btn btn-primary">"+ New Entry"</a>
            </div>

            {move || {
                error.get().map(|e| {
                    view! { <span class="status-text status-error">{e}</span> }
                })
            }}

            {move || {
                if loading.get() {
                    view! { <p class="list-loading">"Loading entries..."</p> }.into_any()
                } else {
                    let list = foods.get();
                    if list.is_empty() {
                        view! { <p class="list-empty">"Nothing logged yet."</p> }.into_any()
                    } else {
                        view! {
                            <div class="food-list">
                                {list.into_iter().enumerate().map(|(index, food)| {
                                    let params = row_params(index, &food);
                                    view! { <FoodRow params=params food=food /> }
                                }).collect::<Vec<_>>()}
                            </div>
                        }.into_any()
                    }
                }
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_row_params_prefer_stored_id_as_key() {
        let mut food = Food::new_at(Utc::now());
        food.id = Some("abc".to_string());
        assert_eq!(row_params(3, &food).key, "abc");

        food.id = None;
        assert_eq!(row_params(3, &food).key, "row-3");
    }

    #[test]
    fn test_row_params_stripe_odd_rows() {
        let food = Food::new_at(Utc::now());
        assert!(row_params(0, &food).style.is_empty());
        assert!(!row_params(1, &food).style.is_empty());
        assert_eq!(row_params(1, &food).index, 1);
    }
}
