use leptos::prelude::*;

use crate::datetime;
use crate::routes;
use crate::types::{Food, FoodKind, RowRenderParams};

/// One line of the food list.
#[component]
pub fn FoodRow(params: RowRenderParams, food: Food) -> impl IntoView {
    let icon = match food.kind {
        FoodKind::Food => "\u{1F37D}",
        FoodKind::Drink => "\u{1F964}",
    };
    let when = format!(
        "{} {}",
        datetime::date_string(food.date),
        datetime::time_string(food.date)
    );
    let href = food.id.as_deref().map(routes::food_edit).unwrap_or_default();
    let ingredients = food.ingredients.join(", ");

    view! {
        <a
            href=href
            class="food-row"
            style=params.style
            data-index=params.index.to_string()
            data-key=params.key
        >
            <span class="food-row-icon" title=food.kind.as_str()>{icon}</span>
            <span class="food-row-when">{when}</span>
            <span class="food-row-title">{food.title}</span>
            <span class="food-row-ingredients">{ingredients}</span>
        </a>
    }
}
