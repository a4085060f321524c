mod app;
mod commands;
mod components;
mod datetime;
mod form;
mod pages;
mod routes;
mod types;

use app::App;

fn main() {
    leptos::mount::mount_to_body(App);
}
