use leptos::prelude::*;
use leptos_router::components::*;
use leptos_router::path;

use crate::components::sidebar::Sidebar;
use crate::pages::food_entry::{EditFoodPage, NewFoodPage};
use crate::pages::food_list::FoodListPage;
use crate::routes;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <div class="app-layout">
                <Sidebar />
                <main class="content">
                    <Routes fallback=|| view! { <p>"Page not found"</p> }>
                        <Route path=path!("/") view=|| view! { <Redirect path=routes::FOOD_LIST /> } />
                        <Route path=path!("/foods") view=FoodListPage />
                        <Route path=path!("/foods/new") view=NewFoodPage />
                        <Route path=path!("/foods/:id") view=EditFoodPage />
                    </Routes>
                </main>
            </div>
        </Router>
    }
}
