use leptos::prelude::*;

use crate::routes;

#[component]
pub fn Sidebar() -> impl IntoView {
    view! {
        <nav class="sidebar">
            <div class="sidebar-header">
                <h1 class="sidebar-title">"HealthLog"</h1>
                <p class="sidebar-subtitle">"Personal Health Journal"</p>
            </div>
            <ul class="nav-list">
                <li class="nav-item">
                    <a href=routes::FOOD_LIST class="nav-link">"Food & Drink"</a>
                </li>
                <li class="nav-item">
                    <a href=routes::FOOD_NEW class="nav-link">"New Entry"</a>
                </li>
            </ul>
        </nav>
    }
}
