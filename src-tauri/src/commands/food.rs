//! Tauri commands for the food journal.
//!
//! These back the save and delete operations the frontend hands to its
//! entry form, plus the list and lookup used by the pages.

use tauri::Manager;
use tracing::{info, warn};

use crate::journal::{Food, FoodJournal};

fn open_journal(app: &tauri::AppHandle) -> Result<FoodJournal, String> {
    let data_dir = app
        .path()
        .app_data_dir()
        .map_err(|e| format!("Failed to get data dir: {}", e))?;
    let db_path = data_dir.join("journal.db");

    FoodJournal::open(&db_path).map_err(|e| {
        warn!("Failed to open journal: {}", e);
        format!("Failed to open journal: {}", e)
    })
}

/// List all food and drink entries, newest first.
#[tauri::command]
pub async fn list_foods(app: tauri::AppHandle) -> Result<Vec<Food>, String> {
    let journal = open_journal(&app)?;
    let foods = journal.list()?;
    info!("Listed {} food entries", foods.len());
    Ok(foods)
}

#[tauri::command]
pub async fn get_food(app: tauri::AppHandle, id: String) -> Result<Food, String> {
    let journal = open_journal(&app)?;
    Ok(journal.get(&id)?)
}

/// Insert or update an entry and return it as stored.
#[tauri::command]
pub async fn save_food(app: tauri::AppHandle, food: Food) -> Result<Food, String> {
    let journal = open_journal(&app)?;
    journal.save(food).map_err(|e| {
        warn!("Failed to save food entry: {}", e);
        e.into()
    })
}

#[tauri::command]
pub async fn delete_food(app: tauri::AppHandle, id: String) -> Result<(), String> {
    let journal = open_journal(&app)?;
    journal.delete(&id).map_err(|e| {
        warn!("Failed to delete food entry {}: {}", id, e);
        e.into()
    })
}
