mod commands;
mod error;
pub mod journal;

pub use error::JournalError;
pub use journal::{Food, FoodJournal, FoodKind};

pub fn run() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    tauri::Builder::default()
        .invoke_handler(tauri::generate_handler![
            commands::food::list_foods,
            commands::food::get_food,
            commands::food::save_food,
            commands::food::delete_food,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
